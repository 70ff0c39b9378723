use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub services: ServiceHealth,
}

#[derive(Serialize)]
pub struct ServiceHealth {
    pub generation_api: String,
}

/// Health check endpoint - public
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let genai_result = state.genai.health_check().await;

    let genai_status = if genai_result.is_ok() { "ok" } else { "error" };

    // CRUD keeps working without the generation API, so a failing probe
    // degrades rather than fails the service.
    let status = if genai_result.is_ok() {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        services: ServiceHealth {
            generation_api: genai_status.to_string(),
        },
    })
}
