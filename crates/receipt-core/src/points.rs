//! # Points Module
//!
//! Scores a validated [`Receipt`].
//!
//! ## Scoring Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Independent, Additive Rules                       │
//! │                                                                         │
//! │  retailer        1 point per ASCII letter or digit                      │
//! │  total           +50 if whole dollars                                   │
//! │                  +25 if a multiple of $0.25                             │
//! │  items           +5 for every two items                                 │
//! │                  +ceil(price × 20%) per item whose trimmed              │
//! │                   description length is a multiple of 3                │
//! │  purchase date   +6 if the day of month is odd                          │
//! │  purchase time   +10 if after 14:00 and before 16:00                    │
//! │                                                                         │
//! │  points = sum of all rules                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts are exact decimals, so "whole dollars" and "multiple of 0.25" are
//! exact comparisons. Sums saturate at the `i64` bounds.
//!
//! ## Usage
//! ```rust
//! use receipt_core::{compute_points, validate_receipt, RawItem, RawReceipt};
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
//! assert_eq!(compute_points(&receipt), 109);
//! ```

use chrono::{Datelike, NaiveTime, Timelike};

use crate::money::Money;
use crate::types::{Item, Receipt};

// =============================================================================
// Rule Constants
// =============================================================================

/// Bonus when the total has no cents.
pub const WHOLE_DOLLAR_BONUS: i64 = 50;

/// Bonus when the total is a multiple of $0.25.
pub const QUARTER_MULTIPLE_BONUS: i64 = 25;

/// Bonus for each complete pair of items.
pub const ITEM_PAIR_BONUS: i64 = 5;

/// Share of an item's price awarded for a qualifying description, in basis
/// points (20%).
pub const DESCRIPTION_RATE_BPS: u16 = 2_000;

/// Bonus when the purchase day of month is odd.
pub const ODD_DAY_BONUS: i64 = 6;

/// Bonus for purchases inside the afternoon window.
pub const AFTERNOON_BONUS: i64 = 10;

/// `(hour, minute)` bounds of the afternoon window, both exclusive.
const AFTERNOON_START: (u32, u32) = (14, 0);
const AFTERNOON_END: (u32, u32) = (16, 0);

// =============================================================================
// Breakdown
// =============================================================================

/// Points earned by each rule.
///
/// [`compute_points`] is `points_breakdown(receipt).total()`; the breakdown
/// exists so acceptance can be logged and tested rule by rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointsBreakdown {
    pub retailer_name: i64,
    pub whole_dollar_total: i64,
    pub quarter_multiple_total: i64,
    pub item_pairs: i64,
    pub item_descriptions: i64,
    pub odd_day: i64,
    pub afternoon: i64,
}

impl PointsBreakdown {
    /// Sum of every rule's contribution.
    pub fn total(&self) -> i64 {
        [
            self.retailer_name,
            self.whole_dollar_total,
            self.quarter_multiple_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, i64::saturating_add)
    }
}

// =============================================================================
// Calculator
// =============================================================================

/// Scores a receipt. Pure: the same receipt always earns the same points.
pub fn compute_points(receipt: &Receipt) -> i64 {
    points_breakdown(receipt).total()
}

/// Scores a receipt rule by rule.
pub fn points_breakdown(receipt: &Receipt) -> PointsBreakdown {
    PointsBreakdown {
        retailer_name: retailer_points(&receipt.retailer),
        whole_dollar_total: whole_dollar_points(receipt.total),
        quarter_multiple_total: quarter_multiple_points(receipt.total),
        item_pairs: item_pair_points(receipt.items.len()),
        item_descriptions: receipt
            .items
            .iter()
            .map(description_points)
            .fold(0, i64::saturating_add),
        odd_day: odd_day_points(receipt.purchase_date.day()),
        afternoon: afternoon_points(receipt.purchase_time),
    }
}

// =============================================================================
// Rules
// =============================================================================

fn retailer_points(retailer: &str) -> i64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as i64
}

fn whole_dollar_points(total: Money) -> i64 {
    if total.is_whole_dollars() {
        WHOLE_DOLLAR_BONUS
    } else {
        0
    }
}

fn quarter_multiple_points(total: Money) -> i64 {
    if total.is_multiple_of(Money::QUARTER) {
        QUARTER_MULTIPLE_BONUS
    } else {
        0
    }
}

fn item_pair_points(item_count: usize) -> i64 {
    ITEM_PAIR_BONUS * (item_count / 2) as i64
}

/// Length is in bytes of the trimmed description; an all-space
/// description never gets this far.
fn description_points(item: &Item) -> i64 {
    if item.short_description.trim().len() % 3 == 0 {
        item.price.percentage_ceil_dollars(DESCRIPTION_RATE_BPS)
    } else {
        0
    }
}

fn odd_day_points(day: u32) -> i64 {
    if day % 2 == 1 {
        ODD_DAY_BONUS
    } else {
        0
    }
}

fn afternoon_points(time: NaiveTime) -> i64 {
    let hour_minute = (time.hour(), time.minute());
    if hour_minute > AFTERNOON_START && hour_minute < AFTERNOON_END {
        AFTERNOON_BONUS
    } else {
        0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn item(description: &str, price: &str) -> Item {
        Item {
            short_description: description.to_string(),
            price: price.parse().unwrap(),
        }
    }

    fn receipt(retailer: &str, date: &str, time: &str, total: &str, items: Vec<Item>) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            purchase_time: NaiveTime::parse_from_str(time, "%H:%M").unwrap(),
            total: total.parse().unwrap(),
            items,
        }
    }

    fn target() -> Receipt {
        receipt(
            "Target",
            "2022-01-01",
            "13:01",
            "35.35",
            vec![
                item("Mountain Dew 12PK", "6.49"),
                item("Emils Cheese Pizza", "12.25"),
                item("Knorr Creamy Chicken", "1.26"),
                item("Doritos Nacho Cheese", "3.35"),
                item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
        )
    }

    fn corner_market() -> Receipt {
        receipt(
            "M&M Corner Market",
            "2022-03-20",
            "14:33",
            "9.00",
            vec![item("Gatorade", "2.25")],
        )
    }

    #[test]
    fn test_target_receipt_scores_28() {
        let breakdown = points_breakdown(&target());

        assert_eq!(breakdown.retailer_name, 6);
        assert_eq!(breakdown.whole_dollar_total, 0);
        assert_eq!(breakdown.quarter_multiple_total, 0);
        assert_eq!(breakdown.item_pairs, 10);
        assert_eq!(breakdown.item_descriptions, 6);
        assert_eq!(breakdown.odd_day, 6);
        assert_eq!(breakdown.afternoon, 0);
        assert_eq!(compute_points(&target()), 28);
    }

    #[test]
    fn test_corner_market_receipt_scores_109() {
        let breakdown = points_breakdown(&corner_market());

        assert_eq!(breakdown.retailer_name, 14);
        assert_eq!(breakdown.whole_dollar_total, 50);
        assert_eq!(breakdown.quarter_multiple_total, 25);
        assert_eq!(breakdown.item_pairs, 0);
        assert_eq!(breakdown.item_descriptions, 0);
        assert_eq!(breakdown.odd_day, 0);
        assert_eq!(breakdown.afternoon, 10);
        assert_eq!(compute_points(&corner_market()), 109);
    }

    #[test]
    fn test_afternoon_window_is_exclusive() {
        let at = |time: &str| afternoon_points(NaiveTime::parse_from_str(time, "%H:%M").unwrap());

        assert_eq!(at("13:59"), 0);
        assert_eq!(at("14:00"), 0);
        assert_eq!(at("14:01"), 10);
        assert_eq!(at("15:00"), 10);
        assert_eq!(at("15:59"), 10);
        assert_eq!(at("16:00"), 0);
    }

    #[test]
    fn test_empty_items_score_nothing_for_item_rules() {
        let empty = receipt("Target", "2022-01-02", "10:00", "1.10", vec![]);
        let breakdown = points_breakdown(&empty);

        assert_eq!(breakdown.item_pairs, 0);
        assert_eq!(breakdown.item_descriptions, 0);
        assert_eq!(compute_points(&empty), 6);
    }

    #[test]
    fn test_retailer_counts_ascii_alphanumerics_only() {
        assert_eq!(retailer_points("M&M Corner Market"), 14);
        assert_eq!(retailer_points("  "), 0);
        assert_eq!(retailer_points("Café 24/7"), 6);
    }

    #[test]
    fn test_total_bonuses() {
        assert_eq!(whole_dollar_points("9.00".parse().unwrap()), 50);
        assert_eq!(whole_dollar_points("9.01".parse().unwrap()), 0);
        assert_eq!(quarter_multiple_points("9.00".parse().unwrap()), 25);
        assert_eq!(quarter_multiple_points("9.75".parse().unwrap()), 25);
        assert_eq!(quarter_multiple_points("9.30".parse().unwrap()), 0);
        // 0.1 + 0.2 territory: still exact
        assert_eq!(quarter_multiple_points("0.30".parse().unwrap()), 0);
    }

    #[test]
    fn test_item_pairs() {
        assert_eq!(item_pair_points(0), 0);
        assert_eq!(item_pair_points(1), 0);
        assert_eq!(item_pair_points(4), 10);
        assert_eq!(item_pair_points(5), 10);
    }

    #[test]
    fn test_description_bonus_uses_trimmed_length() {
        // "Emils Cheese Pizza" is 18 bytes
        assert_eq!(description_points(&item("Emils Cheese Pizza", "12.25")), 3);
        assert_eq!(description_points(&item("  abc  ", "10.00")), 2);
        assert_eq!(description_points(&item("abcd", "10.00")), 0);
        // Bonus is computed per item, never on a running total
        let items = [item("abc", "0.10"), item("def", "0.10")];
        assert_eq!(items.iter().map(description_points).sum::<i64>(), 2);
    }

    #[test]
    fn test_odd_day() {
        assert_eq!(odd_day_points(1), 6);
        assert_eq!(odd_day_points(31), 6);
        assert_eq!(odd_day_points(20), 0);
    }

    #[test]
    fn test_sub_cent_and_large_prices_are_scored() {
        // 1.0000001 * 0.2 = 0.20000002 → 1
        assert_eq!(description_points(&item("abc", "1.0000001")), 1);
        assert_eq!(description_points(&item("abc", "1e13")), 2_000_000_000_000);

        assert_eq!(whole_dollar_points("1e13".parse().unwrap()), 50);
        assert_eq!(quarter_multiple_points("1e13".parse().unwrap()), 25);
        assert_eq!(whole_dollar_points("35.350000001".parse().unwrap()), 0);
        assert_eq!(quarter_multiple_points("2.50000001".parse().unwrap()), 0);

        let r = receipt(
            "Target",
            "2022-01-02",
            "10:00",
            "1e13",
            vec![item("abc", "1.0000001"), item("Yachts", "1e13")],
        );
        // 6 retailer + 50 + 25 + 5 pair + 1 + 2e12
        assert_eq!(compute_points(&r), 2_000_000_000_087);
    }

    #[test]
    fn test_total_saturates() {
        let huge = "79228162514264337593543950335";
        let r = receipt(
            "Target",
            "2022-01-01",
            "15:00",
            huge,
            vec![item("abc", huge), item("def", huge)],
        );
        assert_eq!(compute_points(&r), i64::MAX);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let r = target();
        assert_eq!(compute_points(&r), compute_points(&r));
        assert_eq!(points_breakdown(&r), points_breakdown(&r));
    }
}
