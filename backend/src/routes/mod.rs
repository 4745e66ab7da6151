pub mod admin;
pub mod auth;
pub mod barrier;
pub mod dashboard;
pub mod device;
pub mod health;
pub mod lane;
pub mod location;
pub mod permission;
pub mod report;
pub mod user;
pub mod vehicle;
pub mod vehicle_user;

#[cfg(test)]
pub(crate) mod test_helpers;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(auth::configure);
    cfg.configure(user::configure);
    cfg.configure(location::configure);
    cfg.configure(lane::configure);
    cfg.configure(device::configure);
    cfg.configure(vehicle_user::configure);
    cfg.configure(permission::configure);
    cfg.configure(vehicle::configure);
    cfg.configure(barrier::configure);
    cfg.configure(health::configure);
    cfg.configure(dashboard::configure);
    cfg.configure(report::configure);
    cfg.configure(admin::configure);
}
