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
use db_connector::models::access_permissions::AccessPermission;
use diesel::prelude::*;

use crate::{
    error::Error,
    utils::{get_connection, web_block_unpacked},
    AppState,
};

/// List all permissions of one vehicle user.
#[utoipa::path(
    context_path = "/permission",
    responses(
        (status = 200, description = "Success", body = [AccessPermission])
    ),
    security(
        ("jwt" = [])
    )
)]
#[get("/list/{uid}")]
pub async fn list(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<impl Responder, actix_web::Error> {
    use db_connector::schema::access_permissions::dsl as access_permissions;

    let uid = path.into_inner();
    let mut conn = get_connection(&state)?;
    let all = web_block_unpacked(move || {
        match access_permissions::access_permissions
            .filter(access_permissions::user_id.eq(uid))
            .order(access_permissions::id.asc())
            .select(AccessPermission::as_select())
            .load(&mut conn)
        {
            Ok(p) => Ok(p),
            Err(err) => {
                log::error!("Failed to load permissions for user {uid}: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::Ok().json(all))
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
        routes::test_helpers::{
            create_test_lane, create_test_permission, create_test_vehicle_user, delete_test_lane,
            delete_test_permission, delete_test_vehicle_user,
        },
        tests::configure,
    };

    #[actix_web::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_list_permissions() {
        let mail = "list_permissions@test.invalid";
        create_operator(mail).await;
        defer!(delete_test_operator(mail));
        let token = login_operator(mail).await;

        let lane = create_test_lane("List Permission Lane");
        defer!(delete_test_lane(lane.id));
        let user = create_test_vehicle_user("KA08OP5566", true);
        defer!(delete_test_vehicle_user(user.id));
        let permission = create_test_permission(user.id, lane.id, None, None, Some("1,2"));
        defer!(delete_test_permission(permission.id));

        let app = App::new()
            .configure(configure)
            .wrap(JwtMiddleware)
            .service(list);
        let app = test::init_service(app).await;

        let req = test::TestRequest::get()
            .uri(&format!("/list/{}", user.id))
            .cookie(Cookie::new("access_token", token))
            .to_request();
        let resp: Vec<AccessPermission> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.len(), 1);
        assert_eq!(resp[0].id, permission.id);
    }
}
