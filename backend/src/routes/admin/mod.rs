pub mod clear_logs;
pub mod generate_test_data;

use actix_web::web;

use crate::{error::Error, middleware::jwt::JwtMiddleware, routes::user::get_user, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    let scope = web::scope("/admin")
        .wrap(JwtMiddleware)
        .service(generate_test_data::generate_test_data)
        .service(clear_logs::clear_logs);
    cfg.service(scope);
}

pub async fn ensure_admin(
    state: &web::Data<AppState>,
    uid: uuid::Uuid,
) -> Result<(), actix_web::Error> {
    let user = get_user(state, uid).await?;
    if user.role != "admin" {
        return Err(Error::Unauthorized.into());
    }

    Ok(())
}
