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

use actix_web::{get, web, HttpResponse, Responder};
use db_connector::models::lanes::Lane;
use diesel::prelude::*;

use crate::{
    error::Error,
    utils::{get_connection, web_block_unpacked},
    AppState,
};

/// List all lanes.
#[utoipa::path(
    context_path = "/lane",
    responses(
        (status = 200, description = "Success", body = [Lane])
    ),
    security(
        ("jwt" = [])
    )
)]
#[get("/list")]
pub async fn list(state: web::Data<AppState>) -> Result<impl Responder, actix_web::Error> {
    use db_connector::schema::lanes::dsl as lanes;

    let mut conn = get_connection(&state)?;
    let all = web_block_unpacked(move || {
        match lanes::lanes
            .order(lanes::id.asc())
            .select(Lane::as_select())
            .load(&mut conn)
        {
            Ok(l) => Ok(l),
            Err(err) => {
                log::error!("Failed to load lanes: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::Ok().json(all))
}
