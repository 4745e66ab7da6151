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
use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};
use db_connector::models::users::User;
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
pub struct RegisterSchema {
    #[validate(length(min = 3))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 12))]
    pub password: String,
}

pub fn hash_pass(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    match Argon2::default().hash_password(password.as_bytes(), &salt) {
        Ok(hash) => Ok(hash.to_string()),
        Err(err) => {
            log::error!("Failed to hash password: {err}");
            Err(Error::InternalError)
        }
    }
}

/// Register a new operator account. The very first account becomes an admin.
#[utoipa::path(
    context_path = "/auth",
    request_body = RegisterSchema,
    responses(
        (status = 201, description = "Account created"),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "An account with this email already exists")
    )
)]
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    data: Json<RegisterSchema>,
) -> Result<impl Responder, actix_web::Error> {
    use db_connector::schema::users::dsl as users;

    let mut conn = get_connection(&state)?;
    let data = data.into_inner();
    web_block_unpacked(move || {
        let user_mail = data.email.to_lowercase();

        let existing: i64 = match users::users
            .filter(users::email.eq(&user_mail))
            .count()
            .get_result(&mut conn)
        {
            Ok(c) => c,
            Err(err) => {
                log::error!("Failed to check for existing account: {err}");
                return Err(Error::InternalError);
            }
        };
        if existing != 0 {
            return Err(Error::UserAlreadyExists);
        }

        let total: i64 = match users::users.count().get_result(&mut conn) {
            Ok(c) => c,
            Err(err) => {
                log::error!("Failed to count accounts: {err}");
                return Err(Error::InternalError);
            }
        };

        let user = User {
            id: uuid::Uuid::new_v4(),
            name: data.name.clone(),
            email: user_mail,
            password: hash_pass(&data.password)?,
            role: if total == 0 { "admin" } else { "user" }.to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        };

        match diesel::insert_into(users::users).values(&user).execute(&mut conn) {
            Ok(_) => Ok(()),
            Err(err) => {
                log::error!("Failed to insert account: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::Created())
}
