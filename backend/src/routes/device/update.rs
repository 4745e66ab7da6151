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

use actix_web::{put, web, HttpResponse, Responder};
use actix_web_validator::Json;
use db_connector::models::devices::Device;
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
pub struct UpdateDeviceSchema {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub device_type: String,
    #[validate(length(min = 1, max = 45))]
    pub ip_address: String,
    #[validate(range(min = 1, max = 65535))]
    pub port: i32,
    #[validate(length(min = 1, max = 20))]
    pub status: String,
    pub lane_id: Option<i32>,
}

/// Update an existing device.
#[utoipa::path(
    context_path = "/device",
    request_body = UpdateDeviceSchema,
    responses(
        (status = 200, description = "Device updated", body = Device),
        (status = 404, description = "Device does not exist")
    ),
    security(
        ("jwt" = [])
    )
)]
#[put("/update/{did}")]
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    payload: Json<UpdateDeviceSchema>,
) -> Result<impl Responder, actix_web::Error> {
    use db_connector::schema::devices::dsl as devices;

    let did = path.into_inner();
    let payload = payload.into_inner();
    let mut conn = get_connection(&state)?;
    let device = web_block_unpacked(move || {
        match diesel::update(devices::devices.find(did))
            .set((
                devices::name.eq(payload.name),
                devices::device_type.eq(payload.device_type),
                devices::ip_address.eq(payload.ip_address),
                devices::port.eq(payload.port),
                devices::status.eq(payload.status),
                devices::lane_id.eq(payload.lane_id),
            ))
            .get_result::<Device>(&mut conn)
        {
            Ok(d) => Ok(d),
            Err(diesel::result::Error::NotFound) => Err(Error::DeviceDoesNotExist),
            Err(err) => {
                log::error!("Failed to update device {did}: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::Ok().json(device))
}
