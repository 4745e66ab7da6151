pub mod control;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    let scope = web::scope("/barrier").service(control::control);
    cfg.service(scope);
}
