//! # Validation Module
//!
//! Turns a submitted [`RawReceipt`] into a canonical [`Receipt`].
//!
//! ## Validation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Checks (in order)                          │
//! │                                                                         │
//! │  1. purchaseDate not blank ──┐                                         │
//! │  2. purchaseTime not blank   │ presence                                │
//! │  3. retailer not blank       │                                         │
//! │  4. total not blank ─────────┘                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  5. each item (1-based): price not blank → description not blank       │
//! │                          → price is a number                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  6. purchaseDate looks like YYYY-MM-DD (month 01-12, day 01-31)        │
//! │  7. purchaseDate is a real calendar date                               │
//! │  8. purchaseTime looks like HH:MM (00-23, 00-59)                       │
//! │  9. total is a number                                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Receipt { NaiveDate, NaiveTime, Money, ... }                          │
//! │                                                                         │
//! │  The FIRST failing check is the only error reported.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Blank checks trim whitespace; every other check reads the text exactly as
//! submitted, so `" 1.00"` is not a valid price.
//!
//! ## Usage
//! ```rust
//! use receipt_core::{validate_receipt, RawItem, RawReceipt, ValidationError};
//!
//! let raw = RawReceipt {
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: "2022-03-20".to_string(),
//!     purchase_time: "14:33".to_string(),
//!     items: vec![RawItem {
//!         short_description: "Gatorade".to_string(),
//!         price: "2.25".to_string(),
//!     }],
//!     total: "9.00".to_string(),
//! };
//! let receipt = validate_receipt(&raw).unwrap();
//! assert_eq!(receipt.items.len(), 1);
//!
//! let bad = RawReceipt { purchase_date: "2022-13-01".to_string(), ..raw };
//! assert!(matches!(
//!     validate_receipt(&bad),
//!     Err(ValidationError::InvalidDateFormat { .. })
//! ));
//! ```

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ItemField, ReceiptField, ValidationError};
use crate::money::Money;
use crate::types::{Item, RawItem, RawReceipt, Receipt};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Regex Patterns (compiled once)
// =============================================================================

/// Purchase date: `YYYY-MM-DD` with month 01-12 and day 01-31.
static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-(1[0-2]|0[1-9])-(3[01]|[12][0-9]|0[1-9])$")
        .expect("Invalid date regex")
});

/// Purchase time: 24-hour `HH:MM`.
static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(([01][0-9])|(2[0-3])):[0-5][0-9]$").expect("Invalid time regex")
});

/// Validates a submitted receipt and converts it to canonical form.
///
/// Each step either yields a typed value or stops the pipeline with the
/// error for that step. Nothing is accumulated.
pub fn validate_receipt(raw: &RawReceipt) -> ValidationResult<Receipt> {
    require(&raw.purchase_date, ReceiptField::PurchaseDate)?;
    require(&raw.purchase_time, ReceiptField::PurchaseTime)?;
    require(&raw.retailer, ReceiptField::Retailer)?;
    require(&raw.total, ReceiptField::Total)?;

    let items = raw
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| validate_item(i + 1, item))
        .collect::<ValidationResult<Vec<Item>>>()?;

    let purchase_date = validate_purchase_date(&raw.purchase_date)?;
    let purchase_time = validate_purchase_time(&raw.purchase_time)?;
    let total = validate_total(&raw.total)?;

    Ok(Receipt {
        retailer: raw.retailer.clone(),
        purchase_date,
        purchase_time,
        total,
        items,
    })
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates one item. `index` is the 1-based position on the receipt.
///
/// ## Rules (in order)
/// - Price must not be blank
/// - Short description must not be blank
/// - Price must be a number
pub fn validate_item(index: usize, item: &RawItem) -> ValidationResult<Item> {
    if is_blank(&item.price) {
        return Err(ValidationError::missing_item(index, ItemField::Price));
    }

    if is_blank(&item.short_description) {
        return Err(ValidationError::missing_item(
            index,
            ItemField::ShortDescription,
        ));
    }

    let price = item
        .price
        .parse::<Money>()
        .map_err(|_| ValidationError::InvalidItemPrice {
            index,
            value: item.price.clone(),
        })?;

    Ok(Item {
        short_description: item.short_description.clone(),
        price,
    })
}

/// Validates a purchase date.
///
/// ## Rules
/// - Must look like `YYYY-MM-DD` with month 01-12 and day 01-31
/// - Must then be a real date (`2022-02-30` passes the first rule only)
///
/// ## Example
/// ```rust
/// use receipt_core::validation::validate_purchase_date;
///
/// assert!(validate_purchase_date("2022-01-01").is_ok());
/// assert!(validate_purchase_date("2024-02-29").is_ok());
/// assert!(validate_purchase_date("2022-02-30").is_err());
/// assert!(validate_purchase_date("2022-1-01").is_err());
/// ```
pub fn validate_purchase_date(value: &str) -> ValidationResult<NaiveDate> {
    if !DATE_PATTERN.is_match(value) {
        return Err(ValidationError::InvalidDateFormat {
            value: value.to_string(),
        });
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate {
        value: value.to_string(),
    })
}

/// Validates a 24-hour `HH:MM` purchase time.
///
/// ## Example
/// ```rust
/// use receipt_core::validation::validate_purchase_time;
///
/// assert!(validate_purchase_time("00:00").is_ok());
/// assert!(validate_purchase_time("23:59").is_ok());
/// assert!(validate_purchase_time("24:00").is_err());
/// assert!(validate_purchase_time("9:30").is_err());
/// ```
pub fn validate_purchase_time(value: &str) -> ValidationResult<NaiveTime> {
    let invalid = || ValidationError::InvalidTimeFormat {
        value: value.to_string(),
    };

    if !TIME_PATTERN.is_match(value) {
        return Err(invalid());
    }

    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| invalid())
}

/// Validates the receipt total.
pub fn validate_total(value: &str) -> ValidationResult<Money> {
    value
        .parse::<Money>()
        .map_err(|_| ValidationError::InvalidTotal {
            value: value.to_string(),
        })
}

// =============================================================================
// Helpers
// =============================================================================

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn require(value: &str, field: ReceiptField) -> ValidationResult<()> {
    if is_blank(value) {
        return Err(ValidationError::missing(field));
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
