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
use db_connector::models::locations::{Location, NewLocation};
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
pub struct AddLocationSchema {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub address: Option<String>,
}

/// Create a new location.
#[utoipa::path(
    context_path = "/location",
    request_body = AddLocationSchema,
    responses(
        (status = 200, description = "Location created", body = Location),
        (status = 400, description = "Invalid input")
    ),
    security(
        ("jwt" = [])
    )
)]
#[post("/add")]
pub async fn add(
    state: web::Data<AppState>,
    payload: Json<AddLocationSchema>,
) -> Result<impl Responder, actix_web::Error> {
    use db_connector::schema::locations::dsl as locations;

    let mut conn = get_connection(&state)?;
    let payload = payload.into_inner();
    let location = web_block_unpacked(move || {
        let new_location = NewLocation {
            name: payload.name,
            address: payload.address,
            is_active: true,
        };

        match diesel::insert_into(locations::locations)
            .values(&new_location)
            .get_result::<Location>(&mut conn)
        {
            Ok(l) => Ok(l),
            Err(err) => {
                log::error!("Failed to insert location: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::Ok().json(location))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{cookie::Cookie, http::header::ContentType, test, App};

    use crate::{
        defer,
        middleware::jwt::JwtMiddleware,
        routes::auth::{
            login::tests::login_operator,
            register::tests::{create_operator, delete_test_operator},
        },
        routes::test_helpers::delete_test_location,
        tests::configure,
    };

    #[actix_web::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_add_location() {
        let mail = "add_location@test.invalid";
        create_operator(mail).await;
        defer!(delete_test_operator(mail));
        let token = login_operator(mail).await;

        let app = App::new()
            .configure(configure)
            .wrap(JwtMiddleware)
            .service(add);
        let app = test::init_service(app).await;

        let payload = AddLocationSchema {
            name: "Main Gate".to_string(),
            address: Some("1 Plant Road".to_string()),
        };
        let req = test::TestRequest::post()
            .uri("/add")
            .insert_header(ContentType::json())
            .cookie(Cookie::new("access_token", token))
            .set_json(payload)
            .to_request();
        let resp: Location = test::call_and_read_body_json(&app, req).await;
        defer!(delete_test_location(resp.id));

        assert_eq!(resp.name, "Main Gate");
        assert!(resp.is_active);
    }
}
