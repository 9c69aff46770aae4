//! # receipt-core: Pure Business Logic for Receipt Rewards
//!
//! Validates submitted receipts and scores them. Every function here is
//! deterministic and free of I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Rewards Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    receipt-api (axum)                           │   │
//! │  │    POST /receipts/process   GET /receipts/{id}/points           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ RawReceipt                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ receipt-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │validation │  │  points   │  │   │
//! │  │   │RawReceipt │  │   Money   │  │ 9 ordered │  │  7 rules  │  │   │
//! │  │   │  Receipt  │  │ (Decimal) │  │  checks   │  │  summed   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ (Receipt, points)                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  receipt-store (in-memory)                      │   │
//! │  │              ReceiptId → ScoredReceipt                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Wire receipts, canonical receipts, ids
//! - [`money`] - Exact decimal money (no floating point!)
//! - [`error`] - Validation error types
//! - [`validation`] - Ordered receipt checks
//! - [`points`] - Scoring rules
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::{compute_points, validate_receipt, RawItem, RawReceipt};
//!
//! let raw = RawReceipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-01".to_string(),
//!     purchase_time: "13:01".to_string(),
//!     items: vec![
//!         RawItem { short_description: "Mountain Dew 12PK".to_string(), price: "6.49".to_string() },
//!         RawItem { short_description: "Emils Cheese Pizza".to_string(), price: "12.25".to_string() },
//!         RawItem { short_description: "Knorr Creamy Chicken".to_string(), price: "1.26".to_string() },
//!         RawItem { short_description: "Doritos Nacho Cheese".to_string(), price: "3.35".to_string() },
//!         RawItem { short_description: "   Klarbrunn 12-PK 12 FL OZ  ".to_string(), price: "12.00".to_string() },
//!     ],
//!     total: "35.35".to_string(),
//! };
//!
//! let receipt = validate_receipt(&raw).expect("receipt is valid");
//! assert_eq!(compute_points(&receipt), 28);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod points;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ItemField, ReceiptField, ValidationError};
pub use money::{Money, MoneyParseError};
pub use points::{compute_points, points_breakdown, PointsBreakdown};
pub use types::*;
pub use validation::{validate_receipt, ValidationResult};
