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

use actix_web::{cookie::Cookie, get, HttpResponse, Responder};

use crate::middleware::jwt::JwtMiddleware;

/// Logout by overwriting the `access_token` cookie with an expired one.
#[utoipa::path(
    context_path = "/auth",
    responses(
        (status = 200, description = "Logged out"),
        (status = 401, description = "Not logged in")
    ),
    security(
        ("jwt" = [])
    )
)]
#[get("/logout")]
pub async fn logout(_: JwtMiddleware) -> impl Responder {
    let cookie = Cookie::build("access_token", "")
        .path("/")
        .max_age(actix_web::cookie::time::Duration::seconds(0))
        .http_only(true)
        .finish();

    HttpResponse::Ok().cookie(cookie).body("Logged out")
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{cookie::Cookie, test, App};

    use crate::{
        defer,
        routes::auth::{
            login::tests::login_operator,
            register::tests::{create_operator, delete_test_operator},
        },
        tests::configure,
    };

    #[actix_web::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_logout() {
        let mail = "logout@test.invalid";
        create_operator(mail).await;
        defer!(delete_test_operator(mail));
        let token = login_operator(mail).await;

        let app = App::new().configure(configure).service(logout);
        let app = test::init_service(app).await;

        let req = test::TestRequest::get()
            .uri("/logout")
            .cookie(Cookie::new("access_token", token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let cleared = resp
            .response()
            .cookies()
            .find(|c| c.name() == "access_token")
            .unwrap();
        assert!(cleared.value().is_empty());
    }

    #[actix_web::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_logout_without_token() {
        let app = App::new().configure(configure).service(logout);
        let app = test::init_service(app).await;

        let req = test::TestRequest::get().uri("/logout").to_request();
        let resp = crate::tests::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
    }
}
