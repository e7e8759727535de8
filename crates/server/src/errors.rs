use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::errors::ServiceError;
use tracing::error;

/// Message returned for any failure of the local storage files.
pub const STORAGE_UNAVAILABLE: &str = "Local storage unavailable.";

/// `{"error": message}` with an explicit status.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ServiceError::Storage(_) | ServiceError::Corrupt(_) => {
                error!(error = %e, "local storage failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, STORAGE_UNAVAILABLE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_service_errors_to_status() {
        let cases = [
            (ServiceError::Validation("v".into()), StatusCode::BAD_REQUEST, "v"),
            (ServiceError::NotFound("n".into()), StatusCode::NOT_FOUND, "n"),
            (ServiceError::Storage("disk".into()), StatusCode::INTERNAL_SERVER_ERROR, STORAGE_UNAVAILABLE),
            (ServiceError::Corrupt("json".into()), StatusCode::INTERNAL_SERVER_ERROR, STORAGE_UNAVAILABLE),
        ];
        for (err, status, msg) in cases {
            let api = JsonApiError::from(err);
            assert_eq!(api.status, status);
            assert_eq!(api.message, msg);
        }
    }
}
