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

use actix_web::web;
use db_connector::models::{devices::Device, lanes::Lane};
use diesel::{
    prelude::*,
    r2d2::{ConnectionManager, PooledConnection},
    result::Error::NotFound,
    PgConnection,
};

use crate::{error::Error, AppState};

pub fn get_connection(
    state: &web::Data<AppState>,
) -> actix_web::Result<PooledConnection<ConnectionManager<PgConnection>>> {
    match state.pool.get() {
        Ok(conn) => Ok(conn),
        Err(_err) => Err(Error::InternalError.into()),
    }
}

pub async fn web_block_unpacked<F, R>(f: F) -> Result<R, actix_web::Error>
where
    F: FnOnce() -> Result<R, Error> + Send + 'static,
    R: Send + 'static,
{
    match web::block(f).await {
        Ok(res) => match res {
            Ok(v) => Ok(v),
            Err(err) => Err(err.into()),
        },
        Err(_err) => Err(Error::InternalError.into()),
    }
}

/// Referential guard used by the device-facing routes: unknown lanes are a
/// not-found failure before any evaluation runs.
pub async fn get_lane(state: &web::Data<AppState>, lid: i32) -> actix_web::Result<Lane> {
    let mut conn = get_connection(state)?;
    let lane = web_block_unpacked(move || {
        use db_connector::schema::lanes::dsl as lanes;

        match lanes::lanes
            .find(lid)
            .select(Lane::as_select())
            .get_result(&mut conn)
        {
            Ok(l) => Ok(l),
            Err(NotFound) => Err(Error::LaneDoesNotExist),
            Err(err) => {
                log::error!("Failed to load lane {lid}: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(lane)
}

pub async fn get_device(state: &web::Data<AppState>, did: i32) -> actix_web::Result<Device> {
    let mut conn = get_connection(state)?;
    let device = web_block_unpacked(move || {
        use db_connector::schema::devices::dsl as devices;

        match devices::devices
            .find(did)
            .select(Device::as_select())
            .get_result(&mut conn)
        {
            Ok(d) => Ok(d),
            Err(NotFound) => Err(Error::DeviceDoesNotExist),
            Err(err) => {
                log::error!("Failed to load device {did}: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(device)
}
