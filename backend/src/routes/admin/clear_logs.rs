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
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::Error,
    models::uuid::Uuid,
    utils::{get_connection, web_block_unpacked},
    AppState,
};

use super::ensure_admin;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClearedLogs {
    pub access_logs: usize,
    pub presence_logs: usize,
    pub barrier_logs: usize,
}

/// Drop all recorded logs.
///
/// Admin only. Vehicle users, lanes, devices and permissions stay untouched.
#[utoipa::path(
    context_path = "/admin",
    responses(
        (status = 200, description = "Logs cleared", body = ClearedLogs),
        (status = 401, description = "Not an admin account")
    ),
    security(
        ("jwt" = [])
    )
)]
#[post("/clear_logs")]
pub async fn clear_logs(
    state: web::Data<AppState>,
    uid: Uuid,
) -> Result<impl Responder, actix_web::Error> {
    ensure_admin(&state, uid.into()).await?;

    let mut conn = get_connection(&state)?;
    let cleared = web_block_unpacked(move || {
        use db_connector::schema::access_logs::dsl as access_logs;
        use db_connector::schema::barrier_logs::dsl as barrier_logs;
        use db_connector::schema::presence_logs::dsl as presence_logs;

        let result = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let access_logs = diesel::delete(access_logs::access_logs).execute(conn)?;
            let presence_logs = diesel::delete(presence_logs::presence_logs).execute(conn)?;
            let barrier_logs = diesel::delete(barrier_logs::barrier_logs).execute(conn)?;

            Ok(ClearedLogs {
                access_logs,
                presence_logs,
                barrier_logs,
            })
        });

        match result {
            Ok(cleared) => Ok(cleared),
            Err(err) => {
                log::error!("Failed to clear logs: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::Ok().json(cleared))
}
