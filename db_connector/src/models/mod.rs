pub mod access_logs;
pub mod access_permissions;
pub mod barrier_logs;
pub mod devices;
pub mod lanes;
pub mod locations;
pub mod presence_logs;
pub mod users;
pub mod vehicle_users;
