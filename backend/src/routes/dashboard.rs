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

use actix_web::{get, web, HttpResponse, Responder};
use chrono::{Datelike, Duration, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::Error,
    middleware::jwt::JwtMiddleware,
    utils::{get_connection, web_block_unpacked},
    AppState,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    let scope = web::scope("/dashboard").wrap(JwtMiddleware).service(stats);
    cfg.service(scope);
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeekdayCount {
    /// Monday = 1 through Sunday = 7
    pub weekday: u32,
    pub granted: u64,
    pub denied: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    pub total_vehicle_users: i64,
    pub total_lanes: i64,
    pub total_devices: i64,
    pub granted_today: i64,
    pub denied_today: i64,
    /// Attempts of the last seven days bucketed by weekday.
    pub last_week: Vec<WeekdayCount>,
}

/// Aggregated numbers for the dashboard landing page.
#[utoipa::path(
    context_path = "/dashboard",
    responses(
        (status = 200, description = "Success", body = DashboardStats)
    ),
    security(
        ("jwt" = [])
    )
)]
#[get("/stats")]
pub async fn stats(state: web::Data<AppState>) -> Result<impl Responder, actix_web::Error> {
    use db_connector::schema::access_logs::dsl as access_logs;
    use db_connector::schema::devices::dsl as devices;
    use db_connector::schema::lanes::dsl as lanes;
    use db_connector::schema::vehicle_users::dsl as vehicle_users;

    let mut conn = get_connection(&state)?;
    let stats = web_block_unpacked(move || {
        let now = Utc::now().naive_utc();
        let today = now.date().and_hms_opt(0, 0, 0).unwrap_or(now);
        let week_ago = now - Duration::days(7);

        let count_or_log = |res: QueryResult<i64>, what: &str| match res {
            Ok(c) => Ok(c),
            Err(err) => {
                log::error!("Failed to count {what}: {err}");
                Err(Error::InternalError)
            }
        };

        let total_vehicle_users = count_or_log(
            vehicle_users::vehicle_users.count().get_result(&mut conn),
            "vehicle users",
        )?;
        let total_lanes = count_or_log(lanes::lanes.count().get_result(&mut conn), "lanes")?;
        let total_devices =
            count_or_log(devices::devices.count().get_result(&mut conn), "devices")?;
        let granted_today = count_or_log(
            access_logs::access_logs
                .filter(access_logs::access_time.ge(today))
                .filter(access_logs::status.eq(crate::access_control::STATUS_GRANTED))
                .count()
                .get_result(&mut conn),
            "granted attempts",
        )?;
        let denied_today = count_or_log(
            access_logs::access_logs
                .filter(access_logs::access_time.ge(today))
                .filter(access_logs::status.eq(crate::access_control::STATUS_DENIED))
                .count()
                .get_result(&mut conn),
            "denied attempts",
        )?;

        let recent: Vec<(NaiveDateTime, String)> = match access_logs::access_logs
            .filter(access_logs::access_time.ge(week_ago))
            .select((access_logs::access_time, access_logs::status))
            .load(&mut conn)
        {
            Ok(r) => r,
            Err(err) => {
                log::error!("Failed to load recent access logs: {err}");
                return Err(Error::InternalError);
            }
        };

        let mut last_week: Vec<WeekdayCount> = (1..=7)
            .map(|weekday| WeekdayCount {
                weekday,
                granted: 0,
                denied: 0,
            })
            .collect();
        for (time, status) in recent {
            let idx = (time.date().weekday().number_from_monday() - 1) as usize;
            if status == crate::access_control::STATUS_GRANTED {
                last_week[idx].granted += 1;
            } else {
                last_week[idx].denied += 1;
            }
        }

        Ok(DashboardStats {
            total_vehicle_users,
            total_lanes,
            total_devices,
            granted_today,
            denied_today,
            last_week,
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(stats))
}
