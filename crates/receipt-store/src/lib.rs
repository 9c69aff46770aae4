//! # receipt-store: Receipt Storage for Receipt Rewards
//!
//! An in-memory, process-lifetime map from [`ReceiptId`] to
//! [`ScoredReceipt`]. Nothing survives a restart.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Rewards Data Flow                          │
//! │                                                                         │
//! │  POST /receipts/process                GET /receipts/{id}/points        │
//! │       │                                        │                        │
//! │       ▼ validate + score (receipt-core)        │                        │
//! │  ┌─────────────────────────────────────────────▼───────────────────┐   │
//! │  │                  receipt-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   put(receipt, points) ──► fresh ReceiptId                      │   │
//! │  │   points(id) / get(id) ──► Option<...>                          │   │
//! │  │                                                                 │   │
//! │  │   Arc<RwLock<HashMap<ReceiptId, ScoredReceipt>>>                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use receipt_store::ReceiptStore;
//!
//! let store = ReceiptStore::new();
//! let id = store.put(receipt, 28).await;
//! assert_eq!(store.points(&id).await, Some(28));
//! ```
//!
//! [`ReceiptId`]: receipt_core::ReceiptId
//! [`ScoredReceipt`]: receipt_core::ScoredReceipt

// =============================================================================
// Module Declarations
// =============================================================================

pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use store::ReceiptStore;
