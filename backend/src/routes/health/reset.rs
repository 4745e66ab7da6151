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
    utils::{get_connection, get_device, get_lane, web_block_unpacked},
    AppState,
};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ResetSchema {
    pub lane_id: i32,
    pub device_id: i32,
    pub timestamp: NaiveDateTime,
}

/// Reset a device back to `active` after maintenance or an error.
#[utoipa::path(
    context_path = "/health",
    request_body = ResetSchema,
    responses(
        (status = 200, description = "Device reset", body = Device),
        (status = 404, description = "Lane or device does not exist")
    )
)]
#[post("/reset")]
pub async fn reset(
    req: HttpRequest,
    state: web::Data<AppState>,
    rate_limiter: web::Data<DeviceRateLimiter>,
    payload: Json<ResetSchema>,
) -> Result<impl Responder, actix_web::Error> {
    use db_connector::schema::devices::dsl as devices;

    let payload = payload.into_inner();
    rate_limiter.check(payload.device_id, &req)?;

    get_lane(&state, payload.lane_id).await?;
    get_device(&state, payload.device_id).await?;

    let mut conn = get_connection(&state)?;
    let device = web_block_unpacked(move || {
        match diesel::update(devices::devices.find(payload.device_id))
            .set((
                devices::status.eq("active"),
                devices::last_heartbeat.eq(Some(payload.timestamp)),
            ))
            .get_result::<Device>(&mut conn)
        {
            Ok(d) => Ok(d),
            Err(diesel::result::Error::NotFound) => Err(Error::DeviceDoesNotExist),
            Err(err) => {
                log::error!("Failed to reset device {}: {err}", payload.device_id);
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::Ok().json(device))
}
