//! # Receipt Routes
//!
//! Submitting receipts and reading back their points.
//!
//! ## Submit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    POST /receipts/process                               │
//! │                                                                         │
//! │  JSON body                                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Json<RawReceipt> ──── not JSON? ──────────► 400 BAD_REQUEST           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_receipt() ── first failed check ─► 400 VALIDATION_ERROR      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  points_breakdown() ── pure, cannot fail                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.put() ───────── fresh id ──────────► 200 {"id": "..."}          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use receipt_core::{points_breakdown, validate_receipt, RawReceipt, ReceiptId};
use tracing::{debug, info, warn};

use crate::dto::{PointsResponse, ProcessReceiptResponse, ReceiptDto};
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// `POST /receipts/process`: validates, scores and stores a receipt.
pub async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<RawReceipt>, JsonRejection>,
) -> ApiResult<Json<ProcessReceiptResponse>> {
    let Json(raw) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Unreadable receipt body");
        ApiError::from(rejection)
    })?;

    let receipt = match validate_receipt(&raw) {
        Ok(receipt) => receipt,
        Err(err) => {
            warn!(retailer = %raw.retailer, error = %err, "Receipt rejected");
            return Err(err.into());
        }
    };

    let breakdown = points_breakdown(&receipt);
    let points = breakdown.total();
    debug!(?breakdown, "Points breakdown");

    let id = state.store.put(receipt, points).await;
    info!(id = %id, points = points, "Receipt accepted");

    Ok(Json(ProcessReceiptResponse { id: id.to_string() }))
}

/// `GET /receipts/{id}/points`: points awarded to a stored receipt.
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let id = ReceiptId::from(id);

    match state.store.points(&id).await {
        Some(points) => Ok(Json(PointsResponse { points })),
        None => {
            debug!(id = %id, "Points requested for unknown receipt");
            Err(ApiError::NotFound)
        }
    }
}

/// `GET /receipts/{id}`: the full stored receipt.
pub async fn get_receipt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ReceiptDto>> {
    let id = ReceiptId::from(id);

    state
        .store
        .get(&id)
        .await
        .map(|scored| Json(ReceiptDto::from(scored)))
        .ok_or(ApiError::NotFound)
}
