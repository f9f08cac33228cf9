//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.

use super::{
    AppState,
    types::{ClassifyRequest, ClassifyResponse, ErrorResponse, HealthResponse, StageJson, StagesResponse},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use giraffe_core::{GiraffeError, StageId, classify_input, stage_table};
use std::time::Duration;

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// STAGE HANDLERS
// =============================================================================

/// List all stages in age order.
pub async fn stages_handler() -> impl IntoResponse {
    let stages = stage_table().iter().map(StageJson::from).collect();
    (StatusCode::OK, Json(StagesResponse { stages }))
}

/// Look up one stage by key.
pub async fn stage_handler(Path(key): Path<String>) -> impl IntoResponse {
    match key.parse::<StageId>() {
        Ok(id) => (StatusCode::OK, Json(StageJson::from(id.record()))).into_response(),
        Err(e) => (StatusCode::NOT_FOUND, Json(ErrorResponse::from(&e))).into_response(),
    }
}

// =============================================================================
// CLASSIFY HANDLER
// =============================================================================

/// Validate and classify a raw foot-length measurement.
pub async fn classify_handler(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> impl IntoResponse {
    if state.response_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(state.response_delay_ms)).await;
    }

    match classify_input(&request.foot_length) {
        Ok(record) => {
            tracing::debug!(
                input = %request.foot_length,
                stage = %record.id,
                "Classified foot length"
            );
            (StatusCode::OK, Json(ClassifyResponse::success(record)))
        }
        Err(e @ GiraffeError::Classification(_)) => {
            tracing::error!(
                input = %request.foot_length,
                "Validated foot length matched no stage rule: {}",
                e
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ClassifyResponse::failure(&e)),
            )
        }
        Err(e) => {
            tracing::debug!(input = %request.foot_length, kind = e.kind(), "Rejected input");
            (StatusCode::BAD_REQUEST, Json(ClassifyResponse::failure(&e)))
        }
    }
}
