//! Route modules and shared response plumbing.

pub mod calendar;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

/// API error with a status code, rendered in the portal envelope.
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "success": false, "message": self.message }));
        (self.status, body).into_response()
    }
}

/// Convert unexpected errors to HTTP 500 responses
impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        AppError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.into().to_string(),
        }
    }
}

/// Standardised success envelope with a data payload.
pub fn send_success<T: Serialize>(data: T, message: &str, status: StatusCode) -> Response {
    let body = Json(json!({ "success": true, "message": message, "data": data }));
    (status, body).into_response()
}

/// Success envelope for endpoints without a data payload.
pub fn send_message(message: &str) -> Response {
    let body = Json(json!({ "success": true, "message": message }));
    (StatusCode::OK, body).into_response()
}
