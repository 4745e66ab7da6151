use chrono::{NaiveDateTime, NaiveTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{lanes::Lane, vehicle_users::VehicleUser};

#[derive(
    Debug, Clone, Queryable, Selectable, Identifiable, Associations, Serialize, Deserialize, ToSchema,
)]
#[diesel(belongs_to(VehicleUser, foreign_key = user_id))]
#[diesel(belongs_to(Lane))]
#[diesel(table_name = crate::schema::access_permissions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AccessPermission {
    pub id: i32,
    pub user_id: i32,
    pub lane_id: i32,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub days_of_week: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::access_permissions)]
pub struct NewAccessPermission {
    pub user_id: i32,
    pub lane_id: i32,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub days_of_week: Option<String>,
}
