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
use actix_web_validator::Json;
use db_connector::models::devices::{Device, NewDevice};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::Error,
    utils::{get_connection, web_block_unpacked},
    AppState,
};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddDeviceSchema {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// `anpr`, `fastag`, `presence` or `controller`
    #[validate(length(min = 1, max = 50))]
    pub device_type: String,
    #[validate(length(min = 1, max = 45))]
    pub ip_address: String,
    #[validate(range(min = 1, max = 65535))]
    pub port: i32,
    pub lane_id: Option<i32>,
}

/// Register a field device on a lane.
#[utoipa::path(
    context_path = "/device",
    request_body = AddDeviceSchema,
    responses(
        (status = 200, description = "Device created", body = Device),
        (status = 400, description = "Invalid input")
    ),
    security(
        ("jwt" = [])
    )
)]
#[post("/add")]
pub async fn add(
    state: web::Data<AppState>,
    payload: Json<AddDeviceSchema>,
) -> Result<impl Responder, actix_web::Error> {
    use db_connector::schema::devices::dsl as devices;

    let mut conn = get_connection(&state)?;
    let payload = payload.into_inner();
    let device = web_block_unpacked(move || {
        let new_device = NewDevice {
            name: payload.name,
            device_type: payload.device_type,
            ip_address: payload.ip_address,
            port: payload.port,
            status: "active".to_string(),
            lane_id: payload.lane_id,
        };

        match diesel::insert_into(devices::devices)
            .values(&new_device)
            .get_result::<Device>(&mut conn)
        {
            Ok(d) => Ok(d),
            Err(err) => {
                log::error!("Failed to insert device: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::Ok().json(device))
}
