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
use db_connector::models::barrier_logs::{BarrierLog, NewBarrierLog};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::Error,
    rate_limit::DeviceRateLimiter,
    utils::{get_connection, get_device, get_lane, web_block_unpacked},
    AppState,
};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct BarrierCommandSchema {
    pub lane_id: i32,
    pub device_id: i32,
    /// `open` or `close`
    #[validate(length(min = 1, max = 20))]
    pub action: String,
    /// `success` or `failed` as reported by the barrier controller.
    #[validate(length(min = 1, max = 20))]
    pub status: String,
    pub timestamp: NaiveDateTime,
    #[validate(length(max = 255))]
    pub error_message: Option<String>,
}

/// Record a barrier command issued on a lane.
///
/// Only devices registered as barrier controllers may report commands.
#[utoipa::path(
    context_path = "/barrier",
    request_body = BarrierCommandSchema,
    responses(
        (status = 200, description = "Command recorded", body = BarrierLog),
        (status = 400, description = "Device is not a barrier controller"),
        (status = 404, description = "Lane or device does not exist")
    )
)]
#[post("/control")]
pub async fn control(
    req: HttpRequest,
    state: web::Data<AppState>,
    rate_limiter: web::Data<DeviceRateLimiter>,
    payload: Json<BarrierCommandSchema>,
) -> Result<impl Responder, actix_web::Error> {
    use db_connector::schema::barrier_logs::dsl as barrier_logs;

    let payload = payload.into_inner();
    rate_limiter.check(payload.device_id, &req)?;

    get_lane(&state, payload.lane_id).await?;
    let device = get_device(&state, payload.device_id).await?;
    if device.device_type != "controller" {
        return Err(Error::WrongDeviceType.into());
    }

    let mut conn = get_connection(&state)?;
    let entry = web_block_unpacked(move || {
        let new_log = NewBarrierLog {
            lane_id: payload.lane_id,
            device_id: payload.device_id,
            issued_at: payload.timestamp,
            action: payload.action,
            status: payload.status,
            error_message: payload.error_message,
        };

        match diesel::insert_into(barrier_logs::barrier_logs)
            .values(&new_log)
            .get_result::<BarrierLog>(&mut conn)
        {
            Ok(l) => Ok(l),
            Err(err) => {
                log::error!("Failed to insert barrier log: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::Ok().json(entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header::ContentType, test, App};

    use crate::{
        defer,
        routes::test_helpers::{
            create_test_device, create_test_lane, delete_test_barrier_logs, delete_test_device,
            delete_test_lane,
        },
        tests::configure,
    };

    fn payload(lane: i32, device: i32) -> BarrierCommandSchema {
        BarrierCommandSchema {
            lane_id: lane,
            device_id: device,
            action: "open".to_string(),
            status: "success".to_string(),
            timestamp: "2024-04-08T10:00:00".parse().unwrap(),
            error_message: None,
        }
    }

    #[actix_web::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_barrier_control() {
        let lane = create_test_lane("Barrier Lane");
        defer!(delete_test_lane(lane.id));
        let device = create_test_device("Barrier Controller", "controller", lane.id);
        defer!(delete_test_device(device.id));
        defer!(delete_test_barrier_logs(lane.id));

        let app = App::new().configure(configure).service(control);
        let app = test::init_service(app).await;

        let req = test::TestRequest::post()
            .uri("/control")
            .insert_header(ContentType::json())
            .insert_header(("X-Forwarded-For", "123.123.123.30"))
            .set_json(payload(lane.id, device.id))
            .to_request();
        let resp: BarrierLog = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.action, "open");
        assert_eq!(resp.status, "success");
    }

    #[actix_web::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_barrier_control_wrong_device_type() {
        let lane = create_test_lane("Barrier Wrong Type Lane");
        defer!(delete_test_lane(lane.id));
        let device = create_test_device("Just A Camera", "anpr", lane.id);
        defer!(delete_test_device(device.id));

        let app = App::new().configure(configure).service(control);
        let app = test::init_service(app).await;

        let req = test::TestRequest::post()
            .uri("/control")
            .insert_header(ContentType::json())
            .insert_header(("X-Forwarded-For", "123.123.123.31"))
            .set_json(payload(lane.id, device.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }
}
