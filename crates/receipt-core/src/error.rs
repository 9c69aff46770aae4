//! # Error Types
//!
//! Domain-specific error types for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors (this file)                                       │
//! │  └── ValidationError  - First failed receipt check                     │
//! │                                                                         │
//! │  receipt-core money (money.rs)                                         │
//! │  └── MoneyParseError  - Why an amount is not a number                  │
//! │                                                                         │
//! │  receipt-api errors (in app)                                           │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → ApiError → {"code", "message"}                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item number, offending value)
//! 3. Errors are enum variants, never String
//! 4. Each variant renders the message the client sees

use std::fmt;
use thiserror::Error;

// =============================================================================
// Fields
// =============================================================================

/// Required top-level receipt fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptField {
    PurchaseDate,
    PurchaseTime,
    Retailer,
    Total,
}

impl fmt::Display for ReceiptField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReceiptField::PurchaseDate => write!(f, "purchase date"),
            ReceiptField::PurchaseTime => write!(f, "purchase time"),
            ReceiptField::Retailer => write!(f, "retailer"),
            ReceiptField::Total => write!(f, "total"),
        }
    }
}

/// Required fields of each receipt item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Price,
    ShortDescription,
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemField::Price => write!(f, "price"),
            ItemField::ShortDescription => write!(f, "short description"),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Why a submitted receipt was rejected.
///
/// Only the first failing check is reported; see
/// [`validate_receipt`](crate::validation::validate_receipt) for the order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is blank after trimming.
    #[error("missing {field}")]
    MissingField { field: ReceiptField },

    /// An item field is blank. `index` is 1-based.
    #[error("item {index}: missing {field}")]
    MissingItemField { index: usize, field: ItemField },

    /// An item price is not a number.
    #[error("item {index}: invalid price amount: {value}")]
    InvalidItemPrice { index: usize, value: String },

    /// Purchase date is not `YYYY-MM-DD` with month 01-12 and day 01-31.
    #[error("invalid purchase date, expected format YYYY-MM-DD: {value}")]
    InvalidDateFormat { value: String },

    /// Purchase date is well-formed but not on the calendar (e.g. Feb 30).
    #[error("invalid purchase date: {value}")]
    InvalidDate { value: String },

    /// Purchase time is not 24-hour `HH:MM`.
    #[error("invalid purchase time, expected 24-hour format HH:MM: {value}")]
    InvalidTimeFormat { value: String },

    /// Total is not a number.
    #[error("invalid total: {value}")]
    InvalidTotal { value: String },
}

impl ValidationError {
    pub(crate) fn missing(field: ReceiptField) -> Self {
        ValidationError::MissingField { field }
    }

    pub(crate) fn missing_item(index: usize, field: ItemField) -> Self {
        ValidationError::MissingItemField { index, field }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_messages() {
        assert_eq!(
            ValidationError::missing(ReceiptField::PurchaseDate).to_string(),
            "missing purchase date"
        );
        assert_eq!(
            ValidationError::missing(ReceiptField::Total).to_string(),
            "missing total"
        );
    }

    #[test]
    fn test_item_error_messages() {
        let err = ValidationError::missing_item(2, ItemField::ShortDescription);
        assert_eq!(err.to_string(), "item 2: missing short description");

        let err = ValidationError::InvalidItemPrice {
            index: 1,
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "item 1: invalid price amount: abc");
    }

    #[test]
    fn test_format_error_messages() {
        let err = ValidationError::InvalidDateFormat {
            value: "2022-13-01".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid purchase date, expected format YYYY-MM-DD: 2022-13-01"
        );

        let err = ValidationError::InvalidTimeFormat {
            value: "24:00".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid purchase time, expected 24-hour format HH:MM: 24:00"
        );
    }
}
