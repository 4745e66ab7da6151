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

use crate::{models::filtered_user::FilteredUser, routes::user::get_user, AppState};

/// Get the logged-in operator account.
#[utoipa::path(
    context_path = "/user",
    responses(
        (status = 200, description = "Success", body = FilteredUser),
        (status = 400, description = "Got a valid jwt but the account does not exist.")
    ),
    security(
        ("jwt" = [])
    )
)]
#[get("/me")]
pub async fn me(
    state: web::Data<AppState>,
    uid: crate::models::uuid::Uuid,
) -> Result<impl Responder, actix_web::Error> {
    let user = get_user(&state, uid.into()).await?;

    Ok(HttpResponse::Ok().json(FilteredUser::from(user)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{cookie::Cookie, test, App};

    use crate::{
        defer,
        middleware::jwt::JwtMiddleware,
        routes::auth::{
            login::tests::login_operator,
            register::tests::{create_operator, delete_test_operator},
        },
        tests::configure,
    };

    #[actix_web::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_me() {
        let mail = "me@test.invalid";
        create_operator(mail).await;
        defer!(delete_test_operator(mail));
        let token = login_operator(mail).await;

        let app = App::new()
            .configure(configure)
            .wrap(JwtMiddleware)
            .service(me);
        let app = test::init_service(app).await;

        let req = test::TestRequest::get()
            .uri("/me")
            .cookie(Cookie::new("access_token", token))
            .to_request();
        let resp: FilteredUser = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.email, mail);
    }
}
