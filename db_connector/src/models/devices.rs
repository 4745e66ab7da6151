use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::lanes::Lane;

#[derive(
    Debug, Clone, Queryable, Selectable, Identifiable, Associations, Serialize, Deserialize, ToSchema,
)]
#[diesel(belongs_to(Lane))]
#[diesel(table_name = crate::schema::devices)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Device {
    pub id: i32,
    pub name: String,
    pub device_type: String,
    pub ip_address: String,
    pub port: i32,
    pub status: String,
    pub last_heartbeat: Option<NaiveDateTime>,
    pub lane_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::devices)]
pub struct NewDevice {
    pub name: String,
    pub device_type: String,
    pub ip_address: String,
    pub port: i32,
    pub status: String,
    pub lane_id: Option<i32>,
}
