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

/// Revoke a previously granted lane permission.
#[utoipa::path(
    context_path = "/permission",
    responses(
        (status = 200, description = "Permission revoked"),
        (status = 404, description = "Permission does not exist")
    ),
    security(
        ("jwt" = [])
    )
)]
#[delete("/revoke/{pid}")]
pub async fn revoke(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<impl Responder, actix_web::Error> {
    use db_connector::schema::access_permissions::dsl as access_permissions;

    let pid = path.into_inner();
    let mut conn = get_connection(&state)?;
    web_block_unpacked(move || {
        match diesel::delete(access_permissions::access_permissions.find(pid)).execute(&mut conn) {
            Ok(0) => Err(Error::PermissionDoesNotExist),
            Ok(_) => Ok(()),
            Err(err) => {
                log::error!("Failed to revoke permission {pid}: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::Ok())
}
