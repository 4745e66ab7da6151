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
use chrono::NaiveTime;
use db_connector::models::access_permissions::{AccessPermission, NewAccessPermission};
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
pub struct GrantPermissionSchema {
    pub user_id: i32,
    pub lane_id: i32,
    /// Start of the allowed time-of-day window. A permission with an
    /// incomplete window grants around the clock.
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    /// Comma separated day codes, Monday = 1 through Sunday = 7.
    #[validate(length(max = 20))]
    pub days_of_week: Option<String>,
}

/// Grant a vehicle user access to a lane.
#[utoipa::path(
    context_path = "/permission",
    request_body = GrantPermissionSchema,
    responses(
        (status = 200, description = "Permission granted", body = AccessPermission),
        (status = 404, description = "Vehicle user or lane does not exist")
    ),
    security(
        ("jwt" = [])
    )
)]
#[put("/grant")]
pub async fn grant(
    state: web::Data<AppState>,
    payload: Json<GrantPermissionSchema>,
) -> Result<impl Responder, actix_web::Error> {
    use db_connector::schema::access_permissions::dsl as access_permissions;
    use db_connector::schema::lanes::dsl as lanes;
    use db_connector::schema::vehicle_users::dsl as vehicle_users;

    let mut conn = get_connection(&state)?;
    let payload = payload.into_inner();
    let permission = web_block_unpacked(move || {
        let user_exists: i64 = match vehicle_users::vehicle_users
            .filter(vehicle_users::id.eq(payload.user_id))
            .count()
            .get_result(&mut conn)
        {
            Ok(c) => c,
            Err(err) => {
                log::error!("Failed to check vehicle user existence: {err}");
                return Err(Error::InternalError);
            }
        };
        if user_exists == 0 {
            return Err(Error::VehicleUserDoesNotExist);
        }

        let lane_exists: i64 = match lanes::lanes
            .filter(lanes::id.eq(payload.lane_id))
            .count()
            .get_result(&mut conn)
        {
            Ok(c) => c,
            Err(err) => {
                log::error!("Failed to check lane existence: {err}");
                return Err(Error::InternalError);
            }
        };
        if lane_exists == 0 {
            return Err(Error::LaneDoesNotExist);
        }

        let new_permission = NewAccessPermission {
            user_id: payload.user_id,
            lane_id: payload.lane_id,
            start_time: payload.start_time,
            end_time: payload.end_time,
            days_of_week: payload.days_of_week,
        };

        match diesel::insert_into(access_permissions::access_permissions)
            .values(&new_permission)
            .get_result::<AccessPermission>(&mut conn)
        {
            Ok(p) => Ok(p),
            Err(err) => {
                log::error!("Failed to insert access permission: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::Ok().json(permission))
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
        routes::test_helpers::{
            create_test_lane, create_test_vehicle_user, delete_test_lane, delete_test_permission,
            delete_test_vehicle_user,
        },
        tests::configure,
    };

    #[actix_web::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_grant_permission() {
        let mail = "grant_permission@test.invalid";
        create_operator(mail).await;
        defer!(delete_test_operator(mail));
        let token = login_operator(mail).await;

        let lane = create_test_lane("Grant Lane");
        defer!(delete_test_lane(lane.id));
        let user = create_test_vehicle_user("KA06KL1122", true);
        defer!(delete_test_vehicle_user(user.id));

        let app = App::new()
            .configure(configure)
            .wrap(JwtMiddleware)
            .service(grant);
        let app = test::init_service(app).await;

        let payload = GrantPermissionSchema {
            user_id: user.id,
            lane_id: lane.id,
            start_time: Some("09:00:00".parse().unwrap()),
            end_time: Some("17:00:00".parse().unwrap()),
            days_of_week: Some("1,2,3,4,5".to_string()),
        };
        let req = test::TestRequest::put()
            .uri("/grant")
            .insert_header(ContentType::json())
            .cookie(Cookie::new("access_token", token))
            .set_json(payload)
            .to_request();
        let resp: AccessPermission = test::call_and_read_body_json(&app, req).await;
        defer!(delete_test_permission(resp.id));

        assert_eq!(resp.user_id, user.id);
        assert_eq!(resp.lane_id, lane.id);
        assert_eq!(resp.days_of_week.as_deref(), Some("1,2,3,4,5"));
    }

    #[actix_web::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_grant_for_missing_user() {
        let mail = "grant_missing_user@test.invalid";
        create_operator(mail).await;
        defer!(delete_test_operator(mail));
        let token = login_operator(mail).await;

        let lane = create_test_lane("Grant Missing User Lane");
        defer!(delete_test_lane(lane.id));

        let app = App::new()
            .configure(configure)
            .wrap(JwtMiddleware)
            .service(grant);
        let app = test::init_service(app).await;

        let payload = GrantPermissionSchema {
            user_id: 0,
            lane_id: lane.id,
            start_time: None,
            end_time: None,
            days_of_week: None,
        };
        let req = test::TestRequest::put()
            .uri("/grant")
            .insert_header(ContentType::json())
            .cookie(Cookie::new("access_token", token))
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}
