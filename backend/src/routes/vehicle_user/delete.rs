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

/// Delete a vehicle user and their permissions.
#[utoipa::path(
    context_path = "/vehicle_user",
    responses(
        (status = 200, description = "Vehicle user deleted"),
        (status = 404, description = "Vehicle user does not exist")
    ),
    security(
        ("jwt" = [])
    )
)]
#[delete("/delete/{uid}")]
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<impl Responder, actix_web::Error> {
    use db_connector::schema::vehicle_users::dsl as vehicle_users;

    let uid = path.into_inner();
    let mut conn = get_connection(&state)?;
    web_block_unpacked(move || {
        match diesel::delete(vehicle_users::vehicle_users.find(uid)).execute(&mut conn) {
            Ok(0) => Err(Error::VehicleUserDoesNotExist),
            Ok(_) => Ok(()),
            Err(err) => {
                log::error!("Failed to delete vehicle user {uid}: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::Ok())
}
