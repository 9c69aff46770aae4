//! # Receipt API
//!
//! HTTP adapter for Receipt Rewards.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Receipt API Server                               │
//! │                                                                         │
//! │  Client ───► HTTP (8080) ───► Router ───► routes::* ───► ReceiptStore  │
//! │                                 │              │                        │
//! │                            TraceLayer     receipt-core                  │
//! │                          (request spans)  (validate + score)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Endpoints
//!
//! | Method | Path                    | Response                         |
//! |--------|-------------------------|----------------------------------|
//! | POST   | `/receipts/process`     | `{"id": "..."}`                  |
//! | GET    | `/receipts/{id}/points` | `{"points": 28}`                 |
//! | GET    | `/receipts/{id}`        | stored receipt with its points   |
//! | GET    | `/health`               | `{"status": "ok", "receipts": 3}`|

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use receipt_store::ReceiptStore;
use tower_http::trace::TraceLayer;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, ConfigError};

/// Shared application state.
///
/// The store is the only shared mutable resource; it is created once in
/// `main` and cloned into each handler.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub store: ReceiptStore,
}

impl AppState {
    pub fn new(store: ReceiptStore) -> Self {
        AppState { store }
    }
}

/// Builds the router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(routes::receipts::process_receipt))
        .route("/receipts/{id}/points", get(routes::receipts::get_points))
        .route("/receipts/{id}", get(routes::receipts::get_receipt))
        .route("/health", get(routes::health::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
