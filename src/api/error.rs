use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::error::GardenError;
use crate::models::request::ErrorResponse;

impl ResponseError for GardenError {
    fn status_code(&self) -> StatusCode {
        match self {
            GardenError::UnknownPlant(_)
            | GardenError::UnknownGarden(_)
            | GardenError::UnknownRecord { .. } => StatusCode::NOT_FOUND,
            GardenError::OutOfBounds { .. }
            | GardenError::InvalidGridSize(_)
            | GardenError::InvalidZone(_)
            | GardenError::LastGarden => StatusCode::BAD_REQUEST,
            GardenError::InvalidShareLink(_) => StatusCode::UNPROCESSABLE_ENTITY,
            GardenError::Config(_) | GardenError::Serialization(_) | GardenError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{self}");
        } else {
            log::debug!("Request rejected ({status}): {self}");
        }
        HttpResponse::build(status).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

pub fn not_found(message: impl Into<String>) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: message.into(),
    })
}

pub fn unprocessable(message: impl Into<String>) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(ErrorResponse {
        error: message.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            GardenError::UnknownPlant("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            GardenError::OutOfBounds { x: 9, y: 0, size: 8 }.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(GardenError::LastGarden.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            GardenError::Io(std::io::Error::other("disk")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
