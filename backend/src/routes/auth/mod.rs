pub mod login;
pub mod logout;
pub mod register;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    let scope = web::scope("/auth")
        .service(register::register)
        .service(login::login)
        .service(logout::logout);
    cfg.service(scope);
}
