use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::locations::Location;

#[derive(
    Debug, Clone, Queryable, Selectable, Identifiable, Associations, Serialize, Deserialize, ToSchema,
)]
#[diesel(belongs_to(Location))]
#[diesel(table_name = crate::schema::lanes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Lane {
    pub id: i32,
    pub name: String,
    pub lane_type: String,
    pub status: String,
    pub is_active: bool,
    pub location_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::lanes)]
pub struct NewLane {
    pub name: String,
    pub lane_type: String,
    pub status: String,
    pub is_active: bool,
    pub location_id: Option<i32>,
}
