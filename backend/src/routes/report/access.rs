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
use chrono::NaiveDateTime;
use db_connector::models::access_logs::AccessLog;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::Error,
    utils::{get_connection, web_block_unpacked},
    AppState,
};

use super::ReportFilter;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccessReportRow {
    pub id: i32,
    pub user_id: Option<i32>,
    pub user_name: Option<String>,
    pub plate: Option<String>,
    pub lane_id: i32,
    pub device_id: Option<i32>,
    pub access_time: NaiveDateTime,
    pub status: String,
}

pub(super) fn load_report(
    conn: &mut PgConnection,
    filter: &ReportFilter,
) -> Result<Vec<AccessReportRow>, Error> {
    use db_connector::schema::access_logs::dsl as access_logs;
    use db_connector::schema::vehicle_users::dsl as vehicle_users;

    let mut query = access_logs::access_logs
        .left_join(
            vehicle_users::vehicle_users.on(access_logs::user_id.eq(vehicle_users::id.nullable())),
        )
        .into_boxed();

    if let Some(lane_id) = filter.lane_id {
        query = query.filter(access_logs::lane_id.eq(lane_id));
    }
    if let Some(from) = filter.from {
        query = query.filter(access_logs::access_time.ge(from));
    }
    if let Some(to) = filter.to {
        query = query.filter(access_logs::access_time.le(to));
    }

    let rows: Vec<(AccessLog, Option<(String, String)>)> = match query
        .order(access_logs::access_time.desc())
        .select((
            AccessLog::as_select(),
            (vehicle_users::name, vehicle_users::plate).nullable(),
        ))
        .load(conn)
    {
        Ok(r) => r,
        Err(err) => {
            log::error!("Failed to load access report: {err}");
            return Err(Error::InternalError);
        }
    };

    Ok(rows
        .into_iter()
        .map(|(entry, user)| {
            let (user_name, plate) = match user {
                Some((name, plate)) => (Some(name), Some(plate)),
                None => (None, None),
            };
            AccessReportRow {
                id: entry.id,
                user_id: entry.user_id,
                user_name,
                plate,
                lane_id: entry.lane_id,
                device_id: entry.device_id,
                access_time: entry.access_time,
                status: entry.status,
            }
        })
        .collect())
}

/// Filtered list of access attempts.
#[utoipa::path(
    context_path = "/report",
    params(ReportFilter),
    responses(
        (status = 200, description = "Success", body = [AccessReportRow])
    ),
    security(
        ("jwt" = [])
    )
)]
#[get("/access")]
pub async fn access(
    state: web::Data<AppState>,
    filter: web::Query<ReportFilter>,
) -> Result<impl Responder, actix_web::Error> {
    let filter = filter.into_inner();
    let mut conn = get_connection(&state)?;
    let rows = web_block_unpacked(move || load_report(&mut conn, &filter)).await?;

    Ok(HttpResponse::Ok().json(rows))
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
            create_test_access_log, create_test_lane, delete_test_access_logs, delete_test_lane,
        },
        tests::configure,
    };

    #[actix_web::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_access_report_lane_filter() {
        let mail = "access_report@test.invalid";
        create_operator(mail).await;
        defer!(delete_test_operator(mail));
        let token = login_operator(mail).await;

        let lane = create_test_lane("Report Lane A");
        defer!(delete_test_lane(lane.id));
        let other = create_test_lane("Report Lane B");
        defer!(delete_test_lane(other.id));
        create_test_access_log(lane.id, None, "granted", "2024-04-08T10:00:00");
        create_test_access_log(other.id, None, "denied", "2024-04-08T11:00:00");
        defer!(delete_test_access_logs(lane.id));
        defer!(delete_test_access_logs(other.id));

        let app = App::new()
            .configure(configure)
            .wrap(JwtMiddleware)
            .service(access);
        let app = test::init_service(app).await;

        let req = test::TestRequest::get()
            .uri(&format!("/access?lane_id={}", lane.id))
            .cookie(Cookie::new("access_token", token))
            .to_request();
        let resp: Vec<AccessReportRow> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.len(), 1);
        assert_eq!(resp[0].lane_id, lane.id);
        assert_eq!(resp[0].status, "granted");
    }
}
