pub mod anpr;
pub mod presence;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    let scope = web::scope("/vehicle")
        .service(presence::presence)
        .service(anpr::anpr);
    cfg.service(scope);
}
