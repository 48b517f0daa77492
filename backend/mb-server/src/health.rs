use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health
pub async fn health_check() -> Response {
    let health = json!({
        "ok": true,
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    });

    (StatusCode::OK, Json(health)).into_response()
}
