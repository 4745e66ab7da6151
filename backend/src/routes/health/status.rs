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
    utils::{get_connection, get_lane, web_block_unpacked},
    AppState,
};

/// Health of all devices on one lane.
#[utoipa::path(
    context_path = "/health",
    responses(
        (status = 200, description = "Success", body = [Device]),
        (status = 404, description = "Lane does not exist")
    )
)]
#[get("/status/{lid}")]
pub async fn status(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<impl Responder, actix_web::Error> {
    use db_connector::schema::devices::dsl as devices;

    let lid = path.into_inner();
    get_lane(&state, lid).await?;

    let mut conn = get_connection(&state)?;
    let lane_devices = web_block_unpacked(move || {
        match devices::devices
            .filter(devices::lane_id.eq(lid))
            .order(devices::id.asc())
            .select(Device::as_select())
            .load(&mut conn)
        {
            Ok(d) => Ok(d),
            Err(err) => {
                log::error!("Failed to load devices for lane {lid}: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::Ok().json(lane_devices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    use crate::{
        defer,
        routes::test_helpers::{
            create_test_device, create_test_lane, delete_test_device, delete_test_lane,
        },
        tests::configure,
    };

    #[actix_web::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_lane_health_status() {
        let lane = create_test_lane("Health Status Lane");
        defer!(delete_test_lane(lane.id));
        let device = create_test_device("Health Camera", "anpr", lane.id);
        defer!(delete_test_device(device.id));

        let app = App::new().configure(configure).service(status);
        let app = test::init_service(app).await;

        let req = test::TestRequest::get()
            .uri(&format!("/status/{}", lane.id))
            .to_request();
        let resp: Vec<Device> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.len(), 1);
        assert_eq!(resp[0].id, device.id);
    }
}
