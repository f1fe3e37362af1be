//! Mapping of application errors to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use fransuite_shared::AppError;

/// Renders an `AppError` as `{ "error": CODE, "message": ... }`.
///
/// Internal failures hide their detail from the client.
pub fn error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let message = match err {
        AppError::Internal(_) => "An error occurred".to_string(),
        AppError::Validation(_) => err.to_string(),
    };
    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": message,
        })),
    )
        .into_response()
}
