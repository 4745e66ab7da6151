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
use chrono::NaiveDateTime;
use db_connector::models::vehicle_users::{NewVehicleUser, VehicleUser};
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
pub struct AddVehicleUserSchema {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 100))]
    pub designation: Option<String>,
    /// Number plate as reported by the recognition cameras, unique.
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
    pub location_id: Option<i32>,
}

/// Register a vehicle owner with their plate.
#[utoipa::path(
    context_path = "/vehicle_user",
    request_body = AddVehicleUserSchema,
    responses(
        (status = 200, description = "Vehicle user created", body = VehicleUser),
        (status = 409, description = "Plate already registered")
    ),
    security(
        ("jwt" = [])
    )
)]
#[post("/add")]
pub async fn add(
    state: web::Data<AppState>,
    payload: Json<AddVehicleUserSchema>,
) -> Result<impl Responder, actix_web::Error> {
    use db_connector::schema::vehicle_users::dsl as vehicle_users;

    let mut conn = get_connection(&state)?;
    let payload = payload.into_inner();
    let user = web_block_unpacked(move || {
        let new_user = NewVehicleUser {
            name: payload.name,
            designation: payload.designation,
            plate: payload.plate.trim().to_uppercase(),
            fastag_id: payload.fastag_id,
            phone: payload.phone,
            email: payload.email,
            valid_from: payload.valid_from,
            valid_to: payload.valid_to,
            is_active: true,
            location_id: payload.location_id,
        };

        match diesel::insert_into(vehicle_users::vehicle_users)
            .values(&new_user)
            .get_result::<VehicleUser>(&mut conn)
        {
            Ok(u) => Ok(u),
            Err(diesel::result::Error::DatabaseError(
                DatabaseErrorKind::UniqueViolation,
                _,
            )) => Err(Error::PlateAlreadyExists),
            Err(err) => {
                log::error!("Failed to insert vehicle user: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::Ok().json(user))
}
