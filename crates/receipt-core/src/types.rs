//! # Domain Types
//!
//! Receipt types used throughout Receipt Rewards.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  WIRE (all text)            CANONICAL (typed)        STORED             │
//! │  ┌────────────────┐         ┌────────────────┐       ┌──────────────┐  │
//! │  │  RawReceipt    │ validate│    Receipt     │ score │ScoredReceipt │  │
//! │  │  retailer      │────────►│  retailer      │──────►│ id           │  │
//! │  │  purchaseDate  │         │  NaiveDate     │       │ receipt      │  │
//! │  │  purchaseTime  │         │  NaiveTime     │       │ points       │  │
//! │  │  total         │         │  Money         │       │ accepted_at  │  │
//! │  │  items[]       │         │  Vec<Item>     │       └──────────────┘  │
//! │  └────────────────┘         └────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `Receipt` only exists once every validation check has passed, so the
//! points calculator never re-validates.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer};
use std::fmt;
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Wire Types
// =============================================================================

/// A receipt exactly as submitted: every scalar is text.
///
/// Absent or `null` fields deserialize as empty strings (and `items` as an
/// empty list) so that they are reported by the validator as missing fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct RawReceipt {
    #[serde(deserialize_with = "null_as_default")]
    pub retailer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_time: String,
    #[serde(deserialize_with = "null_items_as_default")]
    pub items: Vec<RawItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub total: String,
}

/// One purchased line as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct RawItem {
    #[serde(deserialize_with = "null_as_default")]
    pub short_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: String,
}

/// `null` reads the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Like [`null_as_default`], also for `null` entries inside the list.
fn null_items_as_default<'de, D>(deserializer: D) -> Result<Vec<RawItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let items: Option<Vec<Option<RawItem>>> = Option::deserialize(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

// =============================================================================
// Canonical Receipt
// =============================================================================

/// A receipt that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Store name as submitted (untrimmed).
    pub retailer: String,

    pub purchase_date: NaiveDate,

    pub purchase_time: NaiveTime,

    pub total: Money,

    pub items: Vec<Item>,
}

/// A validated receipt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Description as submitted (untrimmed).
    pub short_description: String,
    pub price: Money,
}

// =============================================================================
// Receipt Id
// =============================================================================

/// Opaque identifier of a stored receipt.
///
/// ## Why UUID v4?
/// 122 random bits: collisions are negligible without any coordination
/// between concurrent writers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Generates a fresh identifier.
    pub fn generate() -> Self {
        ReceiptId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Any text can name a receipt; unknown ids simply are not found.
impl From<String> for ReceiptId {
    fn from(id: String) -> Self {
        ReceiptId(id)
    }
}

impl From<&str> for ReceiptId {
    fn from(id: &str) -> Self {
        ReceiptId(id.to_string())
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Scored Receipt
// =============================================================================

/// A canonical receipt with the points it earned at acceptance.
///
/// Immutable once created: points are never recomputed on read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredReceipt {
    pub id: ReceiptId,
    pub receipt: Receipt,
    pub points: i64,
    pub accepted_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_receipt_missing_fields_default_to_blank() {
        let raw: RawReceipt = serde_json::from_str(r#"{"retailer": "Target"}"#).unwrap();
        assert_eq!(raw.retailer, "Target");
        assert_eq!(raw.purchase_date, "");
        assert_eq!(raw.total, "");
        assert!(raw.items.is_empty());

        let item: RawItem = serde_json::from_str(r#"{"price": "1.00"}"#).unwrap();
        assert_eq!(item.short_description, "");
    }

    #[test]
    fn test_raw_receipt_uses_camel_case() {
        let raw: RawReceipt = serde_json::from_str(
            r#"{
                "retailer": "Target",
                "purchaseDate": "2022-01-01",
                "purchaseTime": "13:01",
                "items": [{"shortDescription": "Mountain Dew 12PK", "price": "6.49"}],
                "total": "6.49"
            }"#,
        )
        .unwrap();
        assert_eq!(raw.purchase_date, "2022-01-01");
        assert_eq!(raw.purchase_time, "13:01");
        assert_eq!(raw.items[0].short_description, "Mountain Dew 12PK");
    }

    #[test]
    fn test_null_fields_read_as_absent() {
        let raw: RawReceipt = serde_json::from_str(
            r#"{
                "retailer": null,
                "purchaseDate": "2022-01-01",
                "purchaseTime": null,
                "total": null,
                "items": null
            }"#,
        )
        .unwrap();
        assert_eq!(raw.retailer, "");
        assert_eq!(raw.purchase_date, "2022-01-01");
        assert_eq!(raw.purchase_time, "");
        assert_eq!(raw.total, "");
        assert!(raw.items.is_empty());

        let absent: RawReceipt = serde_json::from_str(r#"{"purchaseDate": "2022-01-01"}"#).unwrap();
        assert_eq!(raw, absent);
    }

    #[test]
    fn test_null_items_read_as_blank_items() {
        let raw: RawReceipt = serde_json::from_str(
            r#"{"items": [null, {"shortDescription": null, "price": "1.00"}]}"#,
        )
        .unwrap();
        assert_eq!(raw.items.len(), 2);
        assert_eq!(raw.items[0], RawItem::default());
        assert_eq!(raw.items[1].short_description, "");
        assert_eq!(raw.items[1].price, "1.00");
    }

    #[test]
    fn test_wrong_scalar_type_is_still_an_error() {
        assert!(serde_json::from_str::<RawReceipt>(r#"{"total": 35.35}"#).is_err());
        assert!(serde_json::from_str::<RawReceipt>(r#"{"items": {}}"#).is_err());
    }

    #[test]
    fn test_receipt_ids_are_unique() {
        let a = ReceiptId::generate();
        let b = ReceiptId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
        assert_eq!(ReceiptId::from(a.to_string()), a);
    }
}
