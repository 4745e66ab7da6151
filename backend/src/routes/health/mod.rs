pub mod check;
pub mod reset;
pub mod status;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Called by the lane hardware, no operator session involved.
    let scope = web::scope("/health")
        .service(check::check)
        .service(status::status)
        .service(reset::reset);
    cfg.service(scope);
}
