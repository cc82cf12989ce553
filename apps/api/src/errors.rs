use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::utc_timestamp;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Only `BadRequest` crosses the boundary with a specific reason; everything
/// else is logged server-side and mapped to a generic message. Model
/// unavailability and malformed model output never become an `AppError`;
/// they are absorbed by the fallback tiers in `ai`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "status": "error",
            "detail": detail,
            "status_code": status.as_u16(),
            "timestamp": utc_timestamp(),
        }));

        (status, body).into_response()
    }
}
