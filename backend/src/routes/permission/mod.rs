pub mod grant;
pub mod list;
pub mod revoke;

use actix_web::web;

use crate::middleware::jwt::JwtMiddleware;

pub fn configure(cfg: &mut web::ServiceConfig) {
    let scope = web::scope("/permission")
        .wrap(JwtMiddleware)
        .service(grant::grant)
        .service(revoke::revoke)
        .service(list::list);
    cfg.service(scope);
}
