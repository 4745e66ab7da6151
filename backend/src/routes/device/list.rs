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
use db_connector::models::devices::Device;
use diesel::prelude::*;

use crate::{
    error::Error,
    utils::{get_connection, web_block_unpacked},
    AppState,
};

/// List all registered devices.
#[utoipa::path(
    context_path = "/device",
    responses(
        (status = 200, description = "Success", body = [Device])
    ),
    security(
        ("jwt" = [])
    )
)]
#[get("/list")]
pub async fn list(state: web::Data<AppState>) -> Result<impl Responder, actix_web::Error> {
    use db_connector::schema::devices::dsl as devices;

    let mut conn = get_connection(&state)?;
    let all = web_block_unpacked(move || {
        match devices::devices
            .order(devices::id.asc())
            .select(Device::as_select())
            .load(&mut conn)
        {
            Ok(d) => Ok(d),
            Err(err) => {
                log::error!("Failed to load devices: {err}");
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
            create_test_device, create_test_lane, delete_test_device, delete_test_lane,
        },
        tests::configure,
    };

    #[actix_web::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_list_devices() {
        let mail = "list_devices@test.invalid";
        create_operator(mail).await;
        defer!(delete_test_operator(mail));
        let token = login_operator(mail).await;

        let lane = create_test_lane("List Device Lane");
        defer!(delete_test_lane(lane.id));
        let device = create_test_device("Listable Camera", "anpr", lane.id);
        defer!(delete_test_device(device.id));

        let app = App::new()
            .configure(configure)
            .wrap(JwtMiddleware)
            .service(list);
        let app = test::init_service(app).await;

        let req = test::TestRequest::get()
            .uri("/list")
            .cookie(Cookie::new("access_token", token))
            .to_request();
        let resp: Vec<Device> = test::call_and_read_body_json(&app, req).await;
        assert!(resp.iter().any(|d| d.id == device.id));
    }
}
