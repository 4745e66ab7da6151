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

use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use actix_web_validator::Json;
use chrono::NaiveDateTime;
use db_connector::models::devices::Device;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::Error,
    rate_limit::DeviceRateLimiter,
    utils::{get_connection, web_block_unpacked},
    AppState,
};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct HeartbeatSchema {
    pub device_id: i32,
    /// `active`, `inactive` or `error`
    #[validate(length(min = 1, max = 20))]
    pub status: String,
    pub timestamp: NaiveDateTime,
}

/// Heartbeat from a field device.
///
/// Updates the device status and its last-heartbeat timestamp.
#[utoipa::path(
    context_path = "/health",
    request_body = HeartbeatSchema,
    responses(
        (status = 200, description = "Heartbeat recorded", body = Device),
        (status = 404, description = "Device does not exist")
    )
)]
#[post("/check")]
pub async fn check(
    req: HttpRequest,
    state: web::Data<AppState>,
    rate_limiter: web::Data<DeviceRateLimiter>,
    payload: Json<HeartbeatSchema>,
) -> Result<impl Responder, actix_web::Error> {
    use db_connector::schema::devices::dsl as devices;

    let payload = payload.into_inner();
    rate_limiter.check(payload.device_id, &req)?;

    let mut conn = get_connection(&state)?;
    let device = web_block_unpacked(move || {
        match diesel::update(devices::devices.find(payload.device_id))
            .set((
                devices::status.eq(payload.status),
                devices::last_heartbeat.eq(Some(payload.timestamp)),
            ))
            .get_result::<Device>(&mut conn)
        {
            Ok(d) => Ok(d),
            Err(diesel::result::Error::NotFound) => Err(Error::DeviceDoesNotExist),
            Err(err) => {
                log::error!("Failed to record heartbeat: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::Ok().json(device))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header::ContentType, test, App};

    use crate::{
        defer,
        routes::test_helpers::{
            create_test_device, create_test_lane, delete_test_device, delete_test_lane,
        },
        tests::configure,
    };

    #[actix_web::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_heartbeat() {
        let lane = create_test_lane("Heartbeat Lane");
        defer!(delete_test_lane(lane.id));
        let device = create_test_device("Heartbeat Camera", "anpr", lane.id);
        defer!(delete_test_device(device.id));

        let app = App::new().configure(configure).service(check);
        let app = test::init_service(app).await;

        let req = test::TestRequest::post()
            .uri("/check")
            .insert_header(ContentType::json())
            .insert_header(("X-Forwarded-For", "123.123.123.40"))
            .set_json(HeartbeatSchema {
                device_id: device.id,
                status: "error".to_string(),
                timestamp: "2024-04-08T10:00:00".parse().unwrap(),
            })
            .to_request();
        let resp: Device = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.status, "error");
        assert!(resp.last_heartbeat.is_some());
    }
}
