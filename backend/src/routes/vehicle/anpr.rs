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
use diesel::Connection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    access_control,
    error::Error,
    rate_limit::DeviceRateLimiter,
    utils::{get_connection, get_device, get_lane, web_block_unpacked},
    AppState,
};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AnprResultSchema {
    pub lane_id: i32,
    pub device_id: i32,
    #[validate(length(min = 1, max = 20))]
    pub vehicle_number: String,
    #[validate(range(min = 0.0, max = 1.0))]
    pub confidence: f64,
    pub timestamp: NaiveDateTime,
    #[validate(length(max = 255))]
    pub image_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnprResponse {
    pub access_granted: bool,
    pub vehicle_found: bool,
}

/// A plate read reported by a recognition camera.
///
/// Evaluates the plate against the registered vehicle users and their lane
/// permissions and always appends exactly one access-log row, also for
/// unknown plates. Evaluation and log append share one transaction.
#[utoipa::path(
    context_path = "/vehicle",
    request_body = AnprResultSchema,
    responses(
        (status = 200, description = "Evaluation result", body = AnprResponse),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Lane or device does not exist")
    )
)]
#[post("/anpr")]
pub async fn anpr(
    req: HttpRequest,
    state: web::Data<AppState>,
    rate_limiter: web::Data<DeviceRateLimiter>,
    payload: Json<AnprResultSchema>,
) -> Result<impl Responder, actix_web::Error> {
    let payload = payload.into_inner();
    rate_limiter.check(payload.device_id, &req)?;

    let lane = get_lane(&state, payload.lane_id).await?;
    let device = get_device(&state, payload.device_id).await?;

    log::debug!(
        "Plate read '{}' (confidence {:.2}) on lane {} from device {}",
        payload.vehicle_number,
        payload.confidence,
        lane.id,
        device.id
    );

    let mut conn = get_connection(&state)?;
    let outcome = web_block_unpacked(move || {
        // Plates are stored normalized, match the same way.
        let plate = payload.vehicle_number.trim().to_uppercase();
        let result = conn.transaction(|conn| {
            access_control::evaluate_and_log(
                conn,
                &plate,
                payload.lane_id,
                payload.device_id,
                payload.timestamp,
            )
        });
        match result {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                log::error!("Failed to evaluate plate read: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::Ok().json(AnprResponse {
        access_granted: outcome.granted,
        vehicle_found: outcome.vehicle_found,
    }))
}
