use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{devices::Device, lanes::Lane, vehicle_users::VehicleUser};

#[derive(
    Debug, Clone, Queryable, Selectable, Identifiable, Associations, Serialize, Deserialize, ToSchema,
)]
#[diesel(belongs_to(VehicleUser, foreign_key = user_id))]
#[diesel(belongs_to(Lane))]
#[diesel(belongs_to(Device))]
#[diesel(table_name = crate::schema::access_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AccessLog {
    pub id: i32,
    pub user_id: Option<i32>,
    pub lane_id: i32,
    pub device_id: Option<i32>,
    pub access_time: NaiveDateTime,
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::access_logs)]
pub struct NewAccessLog {
    pub user_id: Option<i32>,
    pub lane_id: i32,
    pub device_id: Option<i32>,
    pub access_time: NaiveDateTime,
    pub status: String,
}
