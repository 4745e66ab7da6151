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
use db_connector::models::lanes::Lane;
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
pub struct UpdateLaneSchema {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub lane_type: String,
    /// `active`, `inactive` or `maintenance`
    #[validate(length(min = 1, max = 20))]
    pub status: String,
    pub is_active: bool,
    pub location_id: Option<i32>,
}

/// Update an existing lane.
#[utoipa::path(
    context_path = "/lane",
    request_body = UpdateLaneSchema,
    responses(
        (status = 200, description = "Lane updated", body = Lane),
        (status = 404, description = "Lane does not exist")
    ),
    security(
        ("jwt" = [])
    )
)]
#[put("/update/{lid}")]
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    payload: Json<UpdateLaneSchema>,
) -> Result<impl Responder, actix_web::Error> {
    use db_connector::schema::lanes::dsl as lanes;

    let lid = path.into_inner();
    let payload = payload.into_inner();
    let mut conn = get_connection(&state)?;
    let lane = web_block_unpacked(move || {
        match diesel::update(lanes::lanes.find(lid))
            .set((
                lanes::name.eq(payload.name),
                lanes::lane_type.eq(payload.lane_type),
                lanes::status.eq(payload.status),
                lanes::is_active.eq(payload.is_active),
                lanes::location_id.eq(payload.location_id),
            ))
            .get_result::<Lane>(&mut conn)
        {
            Ok(l) => Ok(l),
            Err(diesel::result::Error::NotFound) => Err(Error::LaneDoesNotExist),
            Err(err) => {
                log::error!("Failed to update lane {lid}: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::Ok().json(lane))
}
