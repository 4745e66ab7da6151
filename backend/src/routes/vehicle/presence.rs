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
use db_connector::models::presence_logs::{NewPresenceLog, PresenceLog};
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

/// Presence reads at or below this confidence are recorded as `inactive`.
const PRESENCE_CONFIDENCE_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PresenceSchema {
    pub lane_id: i32,
    pub device_id: i32,
    #[validate(range(min = 0.0, max = 1.0))]
    pub confidence: f64,
    pub timestamp: NaiveDateTime,
}

/// A loop-detector or presence-sensor report for a lane.
#[utoipa::path(
    context_path = "/vehicle",
    request_body = PresenceSchema,
    responses(
        (status = 200, description = "Presence recorded", body = PresenceLog),
        (status = 404, description = "Lane or device does not exist")
    )
)]
#[post("/presence")]
pub async fn presence(
    req: HttpRequest,
    state: web::Data<AppState>,
    rate_limiter: web::Data<DeviceRateLimiter>,
    payload: Json<PresenceSchema>,
) -> Result<impl Responder, actix_web::Error> {
    use db_connector::schema::presence_logs::dsl as presence_logs;

    let payload = payload.into_inner();
    rate_limiter.check(payload.device_id, &req)?;

    get_lane(&state, payload.lane_id).await?;
    get_device(&state, payload.device_id).await?;

    let mut conn = get_connection(&state)?;
    let entry = web_block_unpacked(move || {
        let status = if payload.confidence > PRESENCE_CONFIDENCE_THRESHOLD {
            "active"
        } else {
            "inactive"
        };
        let new_log = NewPresenceLog {
            lane_id: payload.lane_id,
            device_id: payload.device_id,
            detected_at: payload.timestamp,
            confidence: payload.confidence,
            status: status.to_string(),
        };

        match diesel::insert_into(presence_logs::presence_logs)
            .values(&new_log)
            .get_result::<PresenceLog>(&mut conn)
        {
            Ok(l) => Ok(l),
            Err(err) => {
                log::error!("Failed to insert presence log: {err}");
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
            create_test_device, create_test_lane, delete_test_device, delete_test_lane,
            delete_test_presence_logs,
        },
        tests::configure,
    };

    #[actix_web::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_presence_confidence_threshold() {
        let lane = create_test_lane("Presence Lane");
        defer!(delete_test_lane(lane.id));
        let device = create_test_device("Loop Detector", "presence", lane.id);
        defer!(delete_test_device(device.id));
        defer!(delete_test_presence_logs(lane.id));

        let app = App::new().configure(configure).service(presence);
        let app = test::init_service(app).await;

        let req = test::TestRequest::post()
            .uri("/presence")
            .insert_header(ContentType::json())
            .insert_header(("X-Forwarded-For", "123.123.123.20"))
            .set_json(PresenceSchema {
                lane_id: lane.id,
                device_id: device.id,
                confidence: 0.95,
                timestamp: "2024-04-08T10:00:00".parse().unwrap(),
            })
            .to_request();
        let resp: PresenceLog = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.status, "active");

        let req = test::TestRequest::post()
            .uri("/presence")
            .insert_header(ContentType::json())
            .insert_header(("X-Forwarded-For", "123.123.123.20"))
            .set_json(PresenceSchema {
                lane_id: lane.id,
                device_id: device.id,
                confidence: 0.5,
                timestamp: "2024-04-08T10:00:05".parse().unwrap(),
            })
            .to_request();
        let resp: PresenceLog = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.status, "inactive");
    }
}
