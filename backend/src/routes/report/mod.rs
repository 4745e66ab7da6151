pub mod access;
pub mod export;

use actix_web::web;
use chrono::NaiveDateTime;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::middleware::jwt::JwtMiddleware;

pub fn configure(cfg: &mut web::ServiceConfig) {
    let scope = web::scope("/report")
        .wrap(JwtMiddleware)
        .service(access::access)
        .service(export::export);
    cfg.service(scope);
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ReportFilter {
    pub lane_id: Option<i32>,
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
}
