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
use db_connector::models::locations::Location;
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
pub struct UpdateLocationSchema {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub address: Option<String>,
    pub is_active: bool,
}

/// Update an existing location.
#[utoipa::path(
    context_path = "/location",
    request_body = UpdateLocationSchema,
    responses(
        (status = 200, description = "Location updated", body = Location),
        (status = 404, description = "Location does not exist")
    ),
    security(
        ("jwt" = [])
    )
)]
#[put("/update/{lid}")]
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    payload: Json<UpdateLocationSchema>,
) -> Result<impl Responder, actix_web::Error> {
    use db_connector::schema::locations::dsl as locations;

    let lid = path.into_inner();
    let payload = payload.into_inner();
    let mut conn = get_connection(&state)?;
    let location = web_block_unpacked(move || {
        match diesel::update(locations::locations.find(lid))
            .set((
                locations::name.eq(payload.name),
                locations::address.eq(payload.address),
                locations::is_active.eq(payload.is_active),
            ))
            .get_result::<Location>(&mut conn)
        {
            Ok(l) => Ok(l),
            Err(diesel::result::Error::NotFound) => Err(Error::LocationDoesNotExist),
            Err(err) => {
                log::error!("Failed to update location {lid}: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::Ok().json(location))
}
