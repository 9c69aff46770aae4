//! # Health Route

use axum::{extract::State, Json};

use crate::dto::HealthResponse;
use crate::AppState;

/// `GET /health`: liveness plus the number of stored receipts.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        receipts: state.store.len().await,
    })
}
