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
use chrono::NaiveDateTime;
use db_connector::models::vehicle_users::VehicleUser;
use diesel::{prelude::*, result::DatabaseErrorKind};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::Error,
    utils::{get_connection, web_block_unpacked},
    AppState,
};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateVehicleUserSchema {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 100))]
    pub designation: Option<String>,
    #[validate(length(min = 2, max = 20))]
    pub plate: String,
    #[validate(length(max = 50))]
    pub fastag_id: Option<String>,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub valid_from: NaiveDateTime,
    pub valid_to: NaiveDateTime,
    pub is_active: bool,
    pub location_id: Option<i32>,
}

/// Update a vehicle user, including deactivation.
#[utoipa::path(
    context_path = "/vehicle_user",
    request_body = UpdateVehicleUserSchema,
    responses(
        (status = 200, description = "Vehicle user updated", body = VehicleUser),
        (status = 404, description = "Vehicle user does not exist"),
        (status = 409, description = "Plate already registered")
    ),
    security(
        ("jwt" = [])
    )
)]
#[put("/update/{uid}")]
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    payload: Json<UpdateVehicleUserSchema>,
) -> Result<impl Responder, actix_web::Error> {
    use db_connector::schema::vehicle_users::dsl as vehicle_users;

    let uid = path.into_inner();
    let payload = payload.into_inner();
    let mut conn = get_connection(&state)?;
    let user = web_block_unpacked(move || {
        match diesel::update(vehicle_users::vehicle_users.find(uid))
            .set((
                vehicle_users::name.eq(payload.name),
                vehicle_users::designation.eq(payload.designation),
                vehicle_users::plate.eq(payload.plate.trim().to_uppercase()),
                vehicle_users::fastag_id.eq(payload.fastag_id),
                vehicle_users::phone.eq(payload.phone),
                vehicle_users::email.eq(payload.email),
                vehicle_users::valid_from.eq(payload.valid_from),
                vehicle_users::valid_to.eq(payload.valid_to),
                vehicle_users::is_active.eq(payload.is_active),
                vehicle_users::location_id.eq(payload.location_id),
            ))
            .get_result::<VehicleUser>(&mut conn)
        {
            Ok(u) => Ok(u),
            Err(diesel::result::Error::NotFound) => Err(Error::VehicleUserDoesNotExist),
            Err(diesel::result::Error::DatabaseError(
                DatabaseErrorKind::UniqueViolation,
                _,
            )) => Err(Error::PlateAlreadyExists),
            Err(err) => {
                log::error!("Failed to update vehicle user {uid}: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::Ok().json(user))
}
