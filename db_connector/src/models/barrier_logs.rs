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
#[diesel(table_name = crate::schema::barrier_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BarrierLog {
    pub id: i32,
    pub lane_id: i32,
    pub device_id: i32,
    pub issued_at: NaiveDateTime,
    pub action: String,
    pub status: String,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::barrier_logs)]
pub struct NewBarrierLog {
    pub lane_id: i32,
    pub device_id: i32,
    pub issued_at: NaiveDateTime,
    pub action: String,
    pub status: String,
    pub error_message: Option<String>,
}
