use axum::{Extension, Json, http::StatusCode};
use serde_json::{Value, json};

use crate::services::ContactService;
use crate::utils::response::ApiResponse;

pub async fn health(Extension(service): Extension<ContactService>) -> (StatusCode, Json<ApiResponse<Value>>) {
    // Round trip to the store; the reason for a failure is only logged
    match service.ping().await {
        Ok(()) => {
            let response = ApiResponse::success_with_data("OK", json!({ "db": "ok" }));
            (StatusCode::OK, Json(response))
        }
        Err(e) => {
            tracing::warn!(error = %e, "health check failed");
            let response = ApiResponse::error_with_data("Unhealthy", json!({ "db": "error" }));
            (StatusCode::INTERNAL_SERVER_ERROR, Json(response))
        }
    }
}
