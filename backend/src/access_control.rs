/* gatewatch
 * Copyright (C) 2026 The gatewatch authors
 *
 * This library is free software; you can redistribute it and/or
 * modify it under the terms of the GNU Lesser General Public
 * License as published by the Free Software Foundation; either
 * version 2 of the License, or (at your option) any later version.
 *
 * This library is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
 * Lesser General Public License for more details.
 *
 * You should have received a copy of the GNU Lesser General Public
 * License along with this library; if not, write to the
 * Free Software Foundation, Inc., 59 Temple Place - Suite 330,
 * Boston, MA 02111-1307, USA.
 */

//! Decides whether a recognized plate may pass a lane and appends the
//! access-log row for the attempt.
//!
//! The decision itself is pure ([`decide`]); [`evaluate_and_log`] wraps it
//! into one read phase and one write phase on a caller-provided connection,
//! so the calling route owns the transaction and its rollback behavior.

use chrono::{Datelike, NaiveDateTime};
use db_connector::models::{
    access_logs::NewAccessLog,
    access_permissions::AccessPermission,
    vehicle_users::VehicleUser,
};
use diesel::prelude::*;

pub const STATUS_GRANTED: &str = "granted";
pub const STATUS_DENIED: &str = "denied";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub granted: bool,
    pub vehicle_found: bool,
}

/// Weekday of `at` as the day codes stored in `days_of_week`: Monday = 1
/// through Sunday = 7.
fn weekday_code(at: &NaiveDateTime) -> u32 {
    at.date().weekday().number_from_monday()
}

/// An absent or empty day set imposes no day constraint.
fn day_allowed(days_of_week: Option<&str>, code: u32) -> bool {
    match days_of_week {
        None => true,
        Some(days) if days.trim().is_empty() => true,
        Some(days) => {
            let code = code.to_string();
            days.split(',').any(|token| token.trim() == code)
        }
    }
}

/// The access decision for one recognized vehicle.
///
/// A permission without a complete start/end pair grants unconditionally;
/// the day set is not consulted on that branch. This mirrors the deployed
/// behavior and is pinned down by tests rather than "fixed".
///
/// A window with `start > end` can never match: the comparison is a plain
/// time-of-day range check with no midnight wraparound.
pub fn decide(user: &VehicleUser, permission: Option<&AccessPermission>, at: NaiveDateTime) -> bool {
    if !user.is_active {
        return false;
    }

    let Some(permission) = permission else {
        return false;
    };

    match (permission.start_time, permission.end_time) {
        (Some(start), Some(end)) => {
            let time = at.time();
            start <= time
                && time <= end
                && day_allowed(permission.days_of_week.as_deref(), weekday_code(&at))
        }
        _ => true,
    }
}

/// One evaluation: plate lookup, permission lookup, decision, log append.
///
/// Runs on a caller-scoped connection. When the caller wraps this in
/// `conn.transaction(..)` a failing log append rolls the whole operation
/// back and no partial row survives.
pub fn evaluate_and_log(
    conn: &mut PgConnection,
    plate: &str,
    lane: i32,
    device: i32,
    at: NaiveDateTime,
) -> Result<Outcome, diesel::result::Error> {
    use db_connector::schema::access_logs::dsl as access_logs;
    use db_connector::schema::access_permissions::dsl as access_permissions;
    use db_connector::schema::vehicle_users::dsl as vehicle_users;

    let user: Option<VehicleUser> = vehicle_users::vehicle_users
        .filter(vehicle_users::plate.eq(plate))
        .select(VehicleUser::as_select())
        .first(conn)
        .optional()?;

    // Only the first matching permission row is consulted; ordering by id
    // keeps that deterministic when duplicates exist.
    let permission: Option<AccessPermission> = match &user {
        Some(user) if user.is_active => access_permissions::access_permissions
            .filter(access_permissions::user_id.eq(user.id))
            .filter(access_permissions::lane_id.eq(lane))
            .order(access_permissions::id.asc())
            .select(AccessPermission::as_select())
            .first(conn)
            .optional()?,
        _ => None,
    };

    let granted = match &user {
        Some(user) => decide(user, permission.as_ref(), at),
        None => false,
    };

    let entry = NewAccessLog {
        user_id: user.as_ref().map(|u| u.id),
        lane_id: lane,
        device_id: Some(device),
        access_time: at,
        status: if granted { STATUS_GRANTED } else { STATUS_DENIED }.to_string(),
    };
    diesel::insert_into(access_logs::access_logs)
        .values(&entry)
        .execute(conn)?;

    Ok(Outcome {
        granted,
        vehicle_found: user.is_some(),
    })
}
