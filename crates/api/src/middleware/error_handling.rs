//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies so every
//! endpoint reports failures the same way.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fitbook_core::errors::BookingError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps a [`BookingError`] and renders it as
/// `{ "error": "<message>" }` with the matching status code.
///
/// # Example
///
/// ```
/// use axum::Json;
/// use fitbook_api::middleware::error_handling::AppError;
/// use fitbook_core::errors::BookingError;
///
/// async fn handler(timezone: String) -> Result<Json<String>, AppError> {
///     let tz: chrono_tz::Tz = timezone.parse().map_err(|_| {
///         AppError(BookingError::Validation(format!("Unknown timezone '{}'", timezone)))
///     })?;
///
///     Ok(Json(tz.name().to_string()))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::InvalidTime(_) => StatusCode::BAD_REQUEST,
            BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.0.to_string() }));

        (status, body).into_response()
    }
}

/// Allows `?` on `BookingResult` inside handlers.
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Unexpected failures reported through eyre become internal errors.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::Internal(err.into()))
    }
}
