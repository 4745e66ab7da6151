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

use actix_web::{cookie::Cookie, post, web, HttpRequest, HttpResponse, Responder};
use actix_web_validator::Json;
use argon2::{Argon2, PasswordHash, PasswordVerifier};
use chrono::{Duration, Utc};
use db_connector::models::users::User;
use diesel::{prelude::*, result::Error::NotFound};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::Error,
    models::token_claims::TokenClaims,
    rate_limit::LoginRateLimiter,
    utils::{get_connection, web_block_unpacked},
    AppState,
};

pub const MAX_TOKEN_AGE_MINUTES: i64 = 60;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginSchema {
    #[validate(email)]
    pub email: String,
    pub password: String,
}

/// Login with email and password. On success an `access_token` cookie
/// containing a jwt is set.
#[utoipa::path(
    context_path = "/auth",
    request_body = LoginSchema,
    responses(
        (status = 200, description = "Logged in"),
        (status = 400, description = "Wrong email or password"),
        (status = 429, description = "Too many attempts")
    )
)]
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    data: Json<LoginSchema>,
    rate_limiter: web::Data<LoginRateLimiter>,
    req: HttpRequest,
) -> Result<impl Responder, actix_web::Error> {
    use db_connector::schema::users::dsl as users;

    let user_mail = data.email.to_lowercase();
    rate_limiter.check(user_mail.clone(), &req)?;

    let mut conn = get_connection(&state)?;
    let password = data.password.clone();
    let user = web_block_unpacked(move || {
        let user: User = match users::users
            .filter(users::email.eq(&user_mail))
            .select(User::as_select())
            .get_result(&mut conn)
        {
            Ok(u) => u,
            Err(NotFound) => return Err(Error::WrongCredentials),
            Err(err) => {
                log::error!("Failed to load account: {err}");
                return Err(Error::InternalError);
            }
        };

        let hash = match PasswordHash::new(&user.password) {
            Ok(h) => h,
            Err(err) => {
                log::error!("Stored password hash is invalid: {err}");
                return Err(Error::InternalError);
            }
        };
        if Argon2::default()
            .verify_password(password.as_bytes(), &hash)
            .is_err()
        {
            return Err(Error::WrongCredentials);
        }

        Ok(user)
    })
    .await?;

    let now = Utc::now();
    let claims = TokenClaims {
        iat: now.timestamp() as usize,
        exp: (now + Duration::minutes(MAX_TOKEN_AGE_MINUTES)).timestamp() as usize,
        sub: user.id.to_string(),
    };

    let token = match jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(state.jwt_secret.as_ref()),
    ) {
        Ok(token) => token,
        Err(err) => {
            log::error!("Failed to encode token: {err}");
            return Err(Error::InternalError.into());
        }
    };

    let cookie = Cookie::build("access_token", token)
        .path("/")
        .max_age(actix_web::cookie::time::Duration::minutes(
            MAX_TOKEN_AGE_MINUTES,
        ))
        .http_only(true)
        .finish();

    Ok(HttpResponse::Ok().cookie(cookie).body("Logged in"))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use actix_web::{http::header::ContentType, test, App};

    use crate::{
        defer,
        routes::auth::register::tests::{create_operator, delete_test_operator},
        tests::configure,
    };

    pub async fn login_operator(mail: &str) -> String {
        let rate_limiter = web::Data::new(LoginRateLimiter::new());
        let app = App::new()
            .configure(configure)
            .app_data(rate_limiter)
            .service(login);
        let app = test::init_service(app).await;
        let schema = LoginSchema {
            email: mail.to_string(),
            password: "TestTestTest".to_string(),
        };
        let req = test::TestRequest::post()
            .uri("/login")
            .insert_header(ContentType::json())
            .insert_header(("X-Forwarded-For", "123.123.123.1"))
            .set_json(schema)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        resp.response()
            .cookies()
            .find(|c| c.name() == "access_token")
            .map(|c| c.value().to_string())
            .expect("no access_token cookie set")
    }

    #[actix_web::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_valid_login() {
        let mail = "login@test.invalid";
        create_operator(mail).await;
        defer!(delete_test_operator(mail));

        let token = login_operator(mail).await;
        assert!(!token.is_empty());
    }

    #[actix_web::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_invalid_email() {
        let mail = "invalid_mail@test.invalid";
        create_operator(mail).await;
        defer!(delete_test_operator(mail));

        let rate_limiter = web::Data::new(LoginRateLimiter::new());
        let app = App::new()
            .configure(configure)
            .app_data(rate_limiter)
            .service(login);
        let app = test::init_service(app).await;
        let schema = LoginSchema {
            email: "does_not_exist@test.invalid".to_string(),
            password: "TestTestTest".to_string(),
        };
        let req = test::TestRequest::post()
            .uri("/login")
            .insert_header(ContentType::json())
            .insert_header(("X-Forwarded-For", "123.123.123.1"))
            .set_json(schema)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
    }

    #[actix_web::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_invalid_password() {
        let mail = "invalid_pass@test.invalid";
        create_operator(mail).await;
        defer!(delete_test_operator(mail));

        let rate_limiter = web::Data::new(LoginRateLimiter::new());
        let app = App::new()
            .configure(configure)
            .app_data(rate_limiter)
            .service(login);
        let app = test::init_service(app).await;
        let schema = LoginSchema {
            email: mail.to_string(),
            password: "WrongWrongWrong".to_string(),
        };
        let req = test::TestRequest::post()
            .uri("/login")
            .insert_header(ContentType::json())
            .insert_header(("X-Forwarded-For", "123.123.123.1"))
            .set_json(schema)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
    }
}
