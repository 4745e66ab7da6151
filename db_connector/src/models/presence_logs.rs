use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{devices::Device, lanes::Lane};

#[derive(
    Debug, Clone, Queryable, Selectable, Identifiable, Associations, Serialize, Deserialize, ToSchema,
)]
#[diesel(belongs_to(Lane))]
#[diesel(belongs_to(Device))]
#[diesel(table_name = crate::schema::presence_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PresenceLog {
    pub id: i32,
    pub lane_id: i32,
    pub device_id: i32,
    pub detected_at: NaiveDateTime,
    pub confidence: f64,
    pub status: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::presence_logs)]
pub struct NewPresenceLog {
    pub lane_id: i32,
    pub device_id: i32,
    pub detected_at: NaiveDateTime,
    pub confidence: f64,
    pub status: String,
}
