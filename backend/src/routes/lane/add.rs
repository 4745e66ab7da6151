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
use db_connector::models::lanes::{Lane, NewLane};
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
pub struct AddLaneSchema {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// `entry` or `exit`
    #[validate(length(min = 1, max = 50))]
    pub lane_type: String,
    pub location_id: Option<i32>,
}

/// Create a new lane.
#[utoipa::path(
    context_path = "/lane",
    request_body = AddLaneSchema,
    responses(
        (status = 200, description = "Lane created", body = Lane),
        (status = 400, description = "Invalid input")
    ),
    security(
        ("jwt" = [])
    )
)]
#[post("/add")]
pub async fn add(
    state: web::Data<AppState>,
    payload: Json<AddLaneSchema>,
) -> Result<impl Responder, actix_web::Error> {
    use db_connector::schema::lanes::dsl as lanes;

    let mut conn = get_connection(&state)?;
    let payload = payload.into_inner();
    let lane = web_block_unpacked(move || {
        let new_lane = NewLane {
            name: payload.name,
            lane_type: payload.lane_type,
            status: "active".to_string(),
            is_active: true,
            location_id: payload.location_id,
        };

        match diesel::insert_into(lanes::lanes)
            .values(&new_lane)
            .get_result::<Lane>(&mut conn)
        {
            Ok(l) => Ok(l),
            Err(err) => {
                log::error!("Failed to insert lane: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::Ok().json(lane))
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
        routes::test_helpers::delete_test_lane,
        tests::configure,
    };

    #[actix_web::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_add_lane() {
        let mail = "add_lane@test.invalid";
        create_operator(mail).await;
        defer!(delete_test_operator(mail));
        let token = login_operator(mail).await;

        let app = App::new()
            .configure(configure)
            .wrap(JwtMiddleware)
            .service(add);
        let app = test::init_service(app).await;

        let payload = AddLaneSchema {
            name: "Main Gate Lane 1".to_string(),
            lane_type: "entry".to_string(),
            location_id: None,
        };
        let req = test::TestRequest::post()
            .uri("/add")
            .insert_header(ContentType::json())
            .cookie(Cookie::new("access_token", token))
            .set_json(payload)
            .to_request();
        let resp: Lane = test::call_and_read_body_json(&app, req).await;
        defer!(delete_test_lane(resp.id));

        assert_eq!(resp.lane_type, "entry");
        assert_eq!(resp.status, "active");
    }
}
