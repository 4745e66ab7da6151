use std::net::Ipv4Addr;

use actix_web::{App, HttpServer};
pub use backend::*;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

struct JwtToken;

impl Modify for JwtToken {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "jwt",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        )
    }
}

/**
 * Start a server that hosts the api documentation.
 */
#[actix_web::main]
async fn main() {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            routes::auth::login::login,
            routes::auth::logout::logout,
            routes::auth::register::register,
            routes::user::me::me,
            routes::location::add::add,
            routes::location::update::update,
            routes::location::delete::delete,
            routes::location::list::list,
            routes::lane::add::add,
            routes::lane::update::update,
            routes::lane::delete::delete,
            routes::lane::list::list,
            routes::device::add::add,
            routes::device::update::update,
            routes::device::delete::delete,
            routes::device::list::list,
            routes::vehicle_user::add::add,
            routes::vehicle_user::update::update,
            routes::vehicle_user::delete::delete,
            routes::vehicle_user::list::list,
            routes::permission::grant::grant,
            routes::permission::revoke::revoke,
            routes::permission::list::list,
            routes::vehicle::presence::presence,
            routes::vehicle::anpr::anpr,
            routes::barrier::control::control,
            routes::health::check::check,
            routes::health::status::status,
            routes::health::reset::reset,
            routes::dashboard::stats,
            routes::report::access::access,
            routes::report::export::export,
            routes::admin::generate_test_data::generate_test_data,
            routes::admin::clear_logs::clear_logs,
        ),
        components(schemas(
            routes::auth::login::LoginSchema,
            routes::auth::register::RegisterSchema,
            routes::location::add::AddLocationSchema,
            routes::location::update::UpdateLocationSchema,
            routes::lane::add::AddLaneSchema,
            routes::lane::update::UpdateLaneSchema,
            routes::device::add::AddDeviceSchema,
            routes::device::update::UpdateDeviceSchema,
            routes::vehicle_user::add::AddVehicleUserSchema,
            routes::vehicle_user::update::UpdateVehicleUserSchema,
            routes::permission::grant::GrantPermissionSchema,
            routes::vehicle::presence::PresenceSchema,
            routes::vehicle::anpr::AnprResultSchema,
            routes::vehicle::anpr::AnprResponse,
            routes::barrier::control::BarrierCommandSchema,
            routes::health::check::HeartbeatSchema,
            routes::health::reset::ResetSchema,
            routes::dashboard::DashboardStats,
            routes::dashboard::WeekdayCount,
            routes::report::access::AccessReportRow,
            routes::admin::generate_test_data::GeneratedTestData,
            routes::admin::clear_logs::ClearedLogs,
            models::filtered_user::FilteredUser,
            db_connector::models::locations::Location,
            db_connector::models::lanes::Lane,
            db_connector::models::devices::Device,
            db_connector::models::vehicle_users::VehicleUser,
            db_connector::models::access_permissions::AccessPermission,
            db_connector::models::presence_logs::PresenceLog,
            db_connector::models::barrier_logs::BarrierLog,
        )),
        modifiers(&JwtToken)
    )]
    struct ApiDoc;

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new().service(SwaggerUi::new("/{_:.*}").url("/api-docs/openapi.json", openapi.clone()))
    })
    .bind((Ipv4Addr::UNSPECIFIED, 12345))
    .unwrap()
    .run()
    .await
    .unwrap();
}
