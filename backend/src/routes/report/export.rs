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

use actix_web::{get, http::header::ContentDisposition, web, HttpResponse, Responder};

use crate::{
    error::Error,
    utils::{get_connection, web_block_unpacked},
    AppState,
};

use super::{access::load_report, ReportFilter};

/// The filtered access report as a CSV download.
#[utoipa::path(
    context_path = "/report",
    params(ReportFilter),
    responses(
        (status = 200, description = "CSV export", content_type = "text/csv")
    ),
    security(
        ("jwt" = [])
    )
)]
#[get("/access/export")]
pub async fn export(
    state: web::Data<AppState>,
    filter: web::Query<ReportFilter>,
) -> Result<impl Responder, actix_web::Error> {
    let filter = filter.into_inner();
    let mut conn = get_connection(&state)?;
    let csv = web_block_unpacked(move || {
        let rows = load_report(&mut conn, &filter)?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        let write_err = |err: csv::Error| {
            log::error!("Failed to write csv export: {err}");
            Error::InternalError
        };
        writer
            .write_record([
                "id",
                "user_id",
                "user_name",
                "plate",
                "lane_id",
                "device_id",
                "access_time",
                "status",
            ])
            .map_err(write_err)?;
        for row in rows {
            writer
                .write_record([
                    row.id.to_string(),
                    row.user_id.map(|v| v.to_string()).unwrap_or_default(),
                    row.user_name.unwrap_or_default(),
                    row.plate.unwrap_or_default(),
                    row.lane_id.to_string(),
                    row.device_id.map(|v| v.to_string()).unwrap_or_default(),
                    row.access_time.to_string(),
                    row.status,
                ])
                .map_err(write_err)?;
        }

        match writer.into_inner() {
            Ok(csv) => Ok(csv),
            Err(err) => {
                log::error!("Failed to finish csv export: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header(ContentDisposition::attachment("access_report.csv"))
        .body(csv))
}
