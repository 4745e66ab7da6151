use actix_web::{
    error,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use derive_more::{Display, Error};

#[derive(Debug, Display, Error)]
pub enum Error {
    #[display("An internal error occured. Please try again later")]
    InternalError,
    #[display("An account with this email already exists")]
    UserAlreadyExists,
    #[display("Wrong email or password")]
    WrongCredentials,
    #[display("Unauthorized")]
    Unauthorized,
    #[display("User does not exist")]
    UserDoesNotExist,
    #[display("Location does not exist")]
    LocationDoesNotExist,
    #[display("Lane does not exist")]
    LaneDoesNotExist,
    #[display("Device does not exist")]
    DeviceDoesNotExist,
    #[display("Vehicle user does not exist")]
    VehicleUserDoesNotExist,
    #[display("Permission does not exist")]
    PermissionDoesNotExist,
    #[display("A vehicle with this plate already exists")]
    PlateAlreadyExists,
    #[display("Device has the wrong type for this operation")]
    WrongDeviceType,
}

impl error::ResponseError for Error {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UserAlreadyExists => StatusCode::CONFLICT,
            Self::WrongCredentials => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::UserDoesNotExist => StatusCode::BAD_REQUEST,
            Self::LocationDoesNotExist => StatusCode::NOT_FOUND,
            Self::LaneDoesNotExist => StatusCode::NOT_FOUND,
            Self::DeviceDoesNotExist => StatusCode::NOT_FOUND,
            Self::VehicleUserDoesNotExist => StatusCode::NOT_FOUND,
            Self::PermissionDoesNotExist => StatusCode::NOT_FOUND,
            Self::PlateAlreadyExists => StatusCode::CONFLICT,
            Self::WrongDeviceType => StatusCode::BAD_REQUEST,
        }
    }
}
