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

//! Fixtures shared by the route tests. Everything talks straight to the
//! test database and panics on failure.

use chrono::{Duration, NaiveDateTime, Utc};
use db_connector::{
    models::{
        access_logs::NewAccessLog,
        access_permissions::{AccessPermission, NewAccessPermission},
        devices::{Device, NewDevice},
        lanes::{Lane, NewLane},
        locations::{Location, NewLocation},
        vehicle_users::{NewVehicleUser, VehicleUser},
    },
    test_connection_pool,
};
use diesel::prelude::*;

pub fn create_test_location(name: &str) -> Location {
    use db_connector::schema::locations::dsl as locations;

    let pool = test_connection_pool();
    let mut conn = pool.get().unwrap();
    diesel::insert_into(locations::locations)
        .values(&NewLocation {
            name: name.to_string(),
            address: Some("Test Street 1".to_string()),
            is_active: true,
        })
        .get_result(&mut conn)
        .unwrap()
}

pub fn delete_test_location(id: i32) {
    use db_connector::schema::locations::dsl as locations;

    let pool = test_connection_pool();
    let mut conn = pool.get().unwrap();
    diesel::delete(locations::locations.find(id))
        .execute(&mut conn)
        .unwrap();
}

pub fn create_test_lane(name: &str) -> Lane {
    use db_connector::schema::lanes::dsl as lanes;

    let pool = test_connection_pool();
    let mut conn = pool.get().unwrap();
    diesel::insert_into(lanes::lanes)
        .values(&NewLane {
            name: name.to_string(),
            lane_type: "entry".to_string(),
            status: "active".to_string(),
            is_active: true,
            location_id: None,
        })
        .get_result(&mut conn)
        .unwrap()
}

pub fn delete_test_lane(id: i32) {
    use db_connector::schema::lanes::dsl as lanes;

    let pool = test_connection_pool();
    let mut conn = pool.get().unwrap();
    diesel::delete(lanes::lanes.find(id))
        .execute(&mut conn)
        .unwrap();
}

pub fn create_test_device(name: &str, device_type: &str, lane_id: i32) -> Device {
    use db_connector::schema::devices::dsl as devices;

    let pool = test_connection_pool();
    let mut conn = pool.get().unwrap();
    diesel::insert_into(devices::devices)
        .values(&NewDevice {
            name: name.to_string(),
            device_type: device_type.to_string(),
            ip_address: "127.0.0.1".to_string(),
            port: 8080,
            status: "active".to_string(),
            lane_id: Some(lane_id),
        })
        .get_result(&mut conn)
        .unwrap()
}

pub fn delete_test_device(id: i32) {
    use db_connector::schema::devices::dsl as devices;

    let pool = test_connection_pool();
    let mut conn = pool.get().unwrap();
    diesel::delete(devices::devices.find(id))
        .execute(&mut conn)
        .unwrap();
}

pub fn set_test_device_status(id: i32, status: &str) {
    use db_connector::schema::devices::dsl as devices;

    let pool = test_connection_pool();
    let mut conn = pool.get().unwrap();
    diesel::update(devices::devices.find(id))
        .set(devices::status.eq(status))
        .execute(&mut conn)
        .unwrap();
}

pub fn create_test_vehicle_user(plate: &str, is_active: bool) -> VehicleUser {
    use db_connector::schema::vehicle_users::dsl as vehicle_users;

    let now = Utc::now().naive_utc();
    let pool = test_connection_pool();
    let mut conn = pool.get().unwrap();
    diesel::insert_into(vehicle_users::vehicle_users)
        .values(&NewVehicleUser {
            name: "Test Driver".to_string(),
            designation: None,
            plate: plate.to_string(),
            fastag_id: None,
            phone: None,
            email: None,
            valid_from: now - Duration::days(1),
            valid_to: now + Duration::days(365),
            is_active,
            location_id: None,
        })
        .get_result(&mut conn)
        .unwrap()
}

pub fn delete_test_vehicle_user(id: i32) {
    use db_connector::schema::vehicle_users::dsl as vehicle_users;

    let pool = test_connection_pool();
    let mut conn = pool.get().unwrap();
    diesel::delete(vehicle_users::vehicle_users.find(id))
        .execute(&mut conn)
        .unwrap();
}

pub fn create_test_permission(
    user_id: i32,
    lane_id: i32,
    start: Option<&str>,
    end: Option<&str>,
    days: Option<&str>,
) -> AccessPermission {
    use db_connector::schema::access_permissions::dsl as access_permissions;

    let pool = test_connection_pool();
    let mut conn = pool.get().unwrap();
    diesel::insert_into(access_permissions::access_permissions)
        .values(&NewAccessPermission {
            user_id,
            lane_id,
            start_time: start.map(|s| s.parse().unwrap()),
            end_time: end.map(|e| e.parse().unwrap()),
            days_of_week: days.map(|d| d.to_string()),
        })
        .get_result(&mut conn)
        .unwrap()
}

pub fn delete_test_permission(id: i32) {
    use db_connector::schema::access_permissions::dsl as access_permissions;

    let pool = test_connection_pool();
    let mut conn = pool.get().unwrap();
    diesel::delete(access_permissions::access_permissions.find(id))
        .execute(&mut conn)
        .unwrap();
}

pub fn create_test_access_log(lane_id: i32, user_id: Option<i32>, status: &str, ts: &str) {
    use db_connector::schema::access_logs::dsl as access_logs;

    let access_time: NaiveDateTime = ts.parse().unwrap();
    let pool = test_connection_pool();
    let mut conn = pool.get().unwrap();
    diesel::insert_into(access_logs::access_logs)
        .values(&NewAccessLog {
            user_id,
            lane_id,
            device_id: None,
            access_time,
            status: status.to_string(),
        })
        .execute(&mut conn)
        .unwrap();
}

pub fn delete_test_access_logs(lane_id: i32) {
    use db_connector::schema::access_logs::dsl as access_logs;

    let pool = test_connection_pool();
    let mut conn = pool.get().unwrap();
    diesel::delete(access_logs::access_logs.filter(access_logs::lane_id.eq(lane_id)))
        .execute(&mut conn)
        .unwrap();
}

pub fn delete_test_presence_logs(lane_id: i32) {
    use db_connector::schema::presence_logs::dsl as presence_logs;

    let pool = test_connection_pool();
    let mut conn = pool.get().unwrap();
    diesel::delete(presence_logs::presence_logs.filter(presence_logs::lane_id.eq(lane_id)))
        .execute(&mut conn)
        .unwrap();
}

pub fn delete_test_barrier_logs(lane_id: i32) {
    use db_connector::schema::barrier_logs::dsl as barrier_logs;

    let pool = test_connection_pool();
    let mut conn = pool.get().unwrap();
    diesel::delete(barrier_logs::barrier_logs.filter(barrier_logs::lane_id.eq(lane_id)))
        .execute(&mut conn)
        .unwrap();
}

pub fn set_test_operator_role(mail: &str, role: &str) {
    use db_connector::schema::users::dsl as users;

    let pool = test_connection_pool();
    let mut conn = pool.get().unwrap();
    diesel::update(users::users.filter(users::email.eq(mail)))
        .set(users::role.eq(role))
        .execute(&mut conn)
        .unwrap();
}
