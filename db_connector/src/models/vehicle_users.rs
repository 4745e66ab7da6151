use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::locations::Location;

#[derive(
    Debug, Clone, Queryable, Selectable, Identifiable, Associations, Serialize, Deserialize, ToSchema,
)]
#[diesel(belongs_to(Location))]
#[diesel(table_name = crate::schema::vehicle_users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct VehicleUser {
    pub id: i32,
    pub name: String,
    pub designation: Option<String>,
    pub plate: String,
    pub fastag_id: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub valid_from: NaiveDateTime,
    pub valid_to: NaiveDateTime,
    pub is_active: bool,
    pub location_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::vehicle_users)]
pub struct NewVehicleUser {
    pub name: String,
    pub designation: Option<String>,
    pub plate: String,
    pub fastag_id: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub valid_from: NaiveDateTime,
    pub valid_to: NaiveDateTime,
    pub is_active: bool,
    pub location_id: Option<i32>,
}
