use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bolt_core::RegistryError;
use serde::Serialize;
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Failures that surface as HTTP 5xx.
///
/// Domain outcomes (invalid url, unknown code, malformed code) are
/// encoded as 200-with-error-body by the handlers and never reach this
/// type; only backing-store failures land here.
#[derive(Debug)]
pub struct AppError(RegistryError);

impl From<RegistryError> for AppError {
    fn from(value: RegistryError) -> Self {
        Self(value)
    }
}

/// JSON error payload, shared by 200-level domain errors and 5xx bodies.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

impl ErrorBody {
    pub fn new(error: &'static str) -> Self {
        Self { error }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::new("Server error")),
        )
            .into_response()
    }
}
