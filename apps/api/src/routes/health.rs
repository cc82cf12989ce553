use axum::Json;
use serde_json::{json, Value};

use crate::utc_timestamp;

/// GET /
/// Service banner with version.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "DocuSense API is running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /health
/// Liveness probe with a UTC timestamp.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": utc_timestamp(),
    }))
}
