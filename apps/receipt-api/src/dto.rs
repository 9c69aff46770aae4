//! # Response DTOs
//!
//! JSON bodies returned by the handlers. Request bodies are
//! [`RawReceipt`](receipt_core::RawReceipt) directly.

use receipt_core::{Item, ScoredReceipt};
use serde::{Deserialize, Serialize};

/// Body of a successful `POST /receipts/process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReceiptResponse {
    pub id: String,
}

/// Body of `GET /receipts/{id}/points`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: i64,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Receipts accepted since start.
    pub receipts: usize,
}

/// A stored receipt as returned by `GET /receipts/{id}`.
///
/// ## Why DTO?
/// - Flattens the stored record into the same shape clients submitted
/// - Amounts and dates go out as strings, like the request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptDto {
    pub id: String,
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<ItemDto>,
    pub total: String,
    pub points: i64,
    /// RFC 3339 acceptance time.
    pub accepted_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub short_description: String,
    pub price: String,
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        ItemDto {
            short_description: item.short_description,
            price: item.price.to_decimal_string(),
        }
    }
}

impl From<ScoredReceipt> for ReceiptDto {
    fn from(scored: ScoredReceipt) -> Self {
        let receipt = scored.receipt;
        ReceiptDto {
            id: scored.id.to_string(),
            retailer: receipt.retailer,
            purchase_date: receipt.purchase_date.format("%Y-%m-%d").to_string(),
            purchase_time: receipt.purchase_time.format("%H:%M").to_string(),
            items: receipt.items.into_iter().map(ItemDto::from).collect(),
            total: receipt.total.to_decimal_string(),
            points: scored.points,
            accepted_at: scored.accepted_at.to_rfc3339(),
        }
    }
}
