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

use actix_web::{delete, web, HttpResponse, Responder};
use diesel::prelude::*;

use crate::{
    error::Error,
    utils::{get_connection, web_block_unpacked},
    AppState,
};

/// Delete a location.
#[utoipa::path(
    context_path = "/location",
    responses(
        (status = 200, description = "Location deleted"),
        (status = 404, description = "Location does not exist")
    ),
    security(
        ("jwt" = [])
    )
)]
#[delete("/delete/{lid}")]
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<impl Responder, actix_web::Error> {
    use db_connector::schema::locations::dsl as locations;

    let lid = path.into_inner();
    let mut conn = get_connection(&state)?;
    web_block_unpacked(move || {
        match diesel::delete(locations::locations.find(lid)).execute(&mut conn) {
            Ok(0) => Err(Error::LocationDoesNotExist),
            Ok(_) => Ok(()),
            Err(err) => {
                log::error!("Failed to delete location {lid}: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::Ok())
}
