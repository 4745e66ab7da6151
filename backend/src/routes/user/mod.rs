pub mod me;

use actix_web::web;
use db_connector::models::users::User;
use diesel::{prelude::*, result::Error::NotFound};

use crate::{
    error::Error,
    middleware::jwt::JwtMiddleware,
    utils::{get_connection, web_block_unpacked},
    AppState,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    let scope = web::scope("/user").wrap(JwtMiddleware).service(me::me);
    cfg.service(scope);
}

pub async fn get_user(
    state: &web::Data<AppState>,
    uid: uuid::Uuid,
) -> Result<User, actix_web::Error> {
    let mut conn = get_connection(state)?;
    let user = web_block_unpacked(move || {
        use db_connector::schema::users::dsl as users;

        match users::users
            .find(uid)
            .select(User::as_select())
            .get_result(&mut conn)
        {
            Ok(u) => Ok(u),
            Err(NotFound) => Err(Error::UserDoesNotExist),
            Err(err) => {
                log::error!("Failed to load account {uid}: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(user)
}
