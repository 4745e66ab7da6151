pub mod add;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::web;

use crate::middleware::jwt::JwtMiddleware;

pub fn configure(cfg: &mut web::ServiceConfig) {
    let scope = web::scope("/lane")
        .wrap(JwtMiddleware)
        .service(add::add)
        .service(update::update)
        .service(delete::delete)
        .service(list::list);
    cfg.service(scope);
}
