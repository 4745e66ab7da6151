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

use actix_web::{post, web, HttpResponse, Responder};
use chrono::{Duration, Utc};
use db_connector::models::{
    access_logs::NewAccessLog,
    access_permissions::NewAccessPermission,
    devices::{Device, NewDevice},
    lanes::{Lane, NewLane},
    locations::{Location, NewLocation},
    vehicle_users::{NewVehicleUser, VehicleUser},
};
use diesel::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    access_control::{STATUS_DENIED, STATUS_GRANTED},
    error::Error,
    models::uuid::Uuid,
    utils::{get_connection, web_block_unpacked},
    AppState,
};

use super::ensure_admin;

const VEHICLE_USER_COUNT: usize = 10;
const ACCESS_LOG_COUNT: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GeneratedTestData {
    pub locations: usize,
    pub lanes: usize,
    pub devices: usize,
    pub vehicle_users: usize,
    pub permissions: usize,
    pub access_logs: usize,
}

/// Seed the database with demo data for a staging dashboard.
///
/// Admin only.
#[utoipa::path(
    context_path = "/admin",
    responses(
        (status = 200, description = "Data generated", body = GeneratedTestData),
        (status = 401, description = "Not an admin account")
    ),
    security(
        ("jwt" = [])
    )
)]
#[post("/generate_test_data")]
pub async fn generate_test_data(
    state: web::Data<AppState>,
    uid: Uuid,
) -> Result<impl Responder, actix_web::Error> {
    ensure_admin(&state, uid.into()).await?;

    let mut conn = get_connection(&state)?;
    let summary = web_block_unpacked(move || {
        use db_connector::schema::access_logs::dsl as access_logs;
        use db_connector::schema::access_permissions::dsl as access_permissions;
        use db_connector::schema::devices::dsl as devices;
        use db_connector::schema::lanes::dsl as lanes;
        use db_connector::schema::locations::dsl as locations;
        use db_connector::schema::vehicle_users::dsl as vehicle_users;

        let result = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let mut rng = rand::thread_rng();
            let now = Utc::now().naive_utc();
            let run_tag: u32 = rng.gen_range(10_000..100_000);

            let location: Location = diesel::insert_into(locations::locations)
                .values(&NewLocation {
                    name: format!("Demo Campus {run_tag}"),
                    address: Some("1 Demo Street".to_string()),
                    is_active: true,
                })
                .get_result(conn)?;

            let mut lane_ids = Vec::new();
            for (idx, lane_type) in ["entry", "exit"].iter().enumerate() {
                let lane: Lane = diesel::insert_into(lanes::lanes)
                    .values(&NewLane {
                        name: format!("Demo Lane {} {run_tag}", idx + 1),
                        lane_type: lane_type.to_string(),
                        status: "active".to_string(),
                        is_active: true,
                        location_id: Some(location.id),
                    })
                    .get_result(conn)?;
                lane_ids.push(lane.id);
            }

            let mut device_ids = Vec::new();
            for (idx, &lane_id) in lane_ids.iter().enumerate() {
                for device_type in ["anpr", "controller"] {
                    let device: Device = diesel::insert_into(devices::devices)
                        .values(&NewDevice {
                            name: format!("Demo {device_type} {} {run_tag}", idx + 1),
                            device_type: device_type.to_string(),
                            ip_address: format!("10.10.{}.{}", idx + 1, rng.gen_range(2..250)),
                            port: 8080,
                            status: "active".to_string(),
                            lane_id: Some(lane_id),
                        })
                        .get_result(conn)?;
                    if device_type == "anpr" {
                        device_ids.push(device.id);
                    }
                }
            }

            let mut user_ids = Vec::new();
            for idx in 0..VEHICLE_USER_COUNT {
                let user: VehicleUser = diesel::insert_into(vehicle_users::vehicle_users)
                    .values(&NewVehicleUser {
                        name: format!("Demo Driver {idx}"),
                        designation: None,
                        plate: format!("DM{run_tag}X{idx:02}"),
                        fastag_id: None,
                        phone: None,
                        email: None,
                        valid_from: now - Duration::days(30),
                        valid_to: now + Duration::days(335),
                        is_active: true,
                        location_id: Some(location.id),
                    })
                    .get_result(conn)?;
                user_ids.push(user.id);
            }

            let mut permissions = 0;
            for &user_id in &user_ids {
                for &lane_id in &lane_ids {
                    diesel::insert_into(access_permissions::access_permissions)
                        .values(&NewAccessPermission {
                            user_id,
                            lane_id,
                            start_time: Some("06:00:00".parse().unwrap()),
                            end_time: Some("22:00:00".parse().unwrap()),
                            days_of_week: Some("1,2,3,4,5,6,7".to_string()),
                        })
                        .execute(conn)?;
                    permissions += 1;
                }
            }

            let mut logs = Vec::with_capacity(ACCESS_LOG_COUNT);
            for _ in 0..ACCESS_LOG_COUNT {
                let granted = rng.gen_bool(0.8);
                logs.push(NewAccessLog {
                    user_id: if granted {
                        Some(user_ids[rng.gen_range(0..user_ids.len())])
                    } else {
                        None
                    },
                    lane_id: lane_ids[rng.gen_range(0..lane_ids.len())],
                    device_id: Some(device_ids[rng.gen_range(0..device_ids.len())]),
                    access_time: now - Duration::minutes(rng.gen_range(0..7 * 24 * 60)),
                    status: if granted { STATUS_GRANTED } else { STATUS_DENIED }.to_string(),
                });
            }
            diesel::insert_into(access_logs::access_logs)
                .values(&logs)
                .execute(conn)?;

            Ok(GeneratedTestData {
                locations: 1,
                lanes: lane_ids.len(),
                devices: lane_ids.len() * 2,
                vehicle_users: user_ids.len(),
                permissions,
                access_logs: logs.len(),
            })
        });

        match result {
            Ok(summary) => Ok(summary),
            Err(err) => {
                log::error!("Failed to generate test data: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::Ok().json(summary))
}
