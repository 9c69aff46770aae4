//! # Money Module
//!
//! Provides the `Money` type for handling receipt amounts exactly.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Receipt amounts arrive as text ("12.25", "35.35").                     │
//! │  Parsed into f64 they are approximations:                               │
//! │    12.00 × 0.2 = 2.4000000000000004  ❌                                 │
//! │    0.1 + 0.2   = 0.30000000000000004 ❌                                 │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal::Decimal                                    │
//! │    "12.25"      → 1225 × 10^-2                                          │
//! │    "1.0000001"  → 10000001 × 10^-7                                      │
//! │    "1e13"       → 10000000000000 × 10^0                                 │
//! │    Whole-dollar, quarter and percentage checks are exact               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Receipts are quoted in cents, but the wire format only promises "a
//! number", so any precision and magnitude a `Decimal` can carry is kept.
//! Digits past the 28th decimal place are rounded half-to-even.
//!
//! ## Usage
//! ```rust
//! use receipt_core::money::Money;
//!
//! let total: Money = "35.35".parse().unwrap();
//! assert_eq!(total, Money::from_cents(3535));
//! assert!(!total.is_whole_dollars());
//!
//! // Never built from floats: there is no `Money::from_f64`.
//! assert!("NaN".parse::<Money>().is_err());
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// Basis points in 100%.
const BPS_SCALE: i128 = 10_000;

/// Largest scale a `Decimal` can carry.
const MAX_SCALE: i64 = 28;

/// Digits in `Decimal::MAX` (79228162514264337593543950335).
const MAX_DIGITS: i64 = 29;

/// Exponents are clamped to this magnitude before any arithmetic. Anything
/// past it is zero or an overflow regardless.
const EXPONENT_LIMIT: i64 = 1_000_000_000_000;

// =============================================================================
// Regex Patterns (compiled once)
// =============================================================================

/// `[+-]digits[.digits][e[+-]digits]`, with either digit run optional but
/// not both.
static AMOUNT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?)([0-9]*)(?:\.([0-9]*))?(?:[eE]([+-]?[0-9]+))?$")
        .expect("Invalid amount regex")
});

// =============================================================================
// Parse Error
// =============================================================================

/// Why a piece of text is not a monetary amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("amount is empty")]
    Empty,

    /// Anything outside the decimal grammar, which includes `inf` and `NaN`.
    #[error("amount is not a decimal number")]
    Malformed,

    /// Magnitude beyond `Decimal::MAX`.
    #[error("amount is too large")]
    Overflow,
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in dollars, held as an exact decimal.
///
/// ## Design Decisions
/// - **Signed**: receipts are not required to be non-negative, so refunds
///   and discounts still parse
/// - **Single field tuple struct**: the points rules only see the handful
///   of checks below, never raw `Decimal` arithmetic
///
/// ## Where Money is Used
/// ```text
/// RawReceipt.total ──► validate_receipt() ──► Receipt.total ──► +50 / +25
/// RawItem.price    ──► validate_receipt() ──► Item.price    ──► ceil(20%)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// A quarter dollar.
    pub const QUARTER: Money = Money(Decimal::from_parts(25, 0, 0, false, 2));

    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1225), "12.25".parse().unwrap());
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// True when the amount has no cents (or smaller) part.
    #[inline]
    pub fn is_whole_dollars(&self) -> bool {
        self.0.fract().is_zero()
    }

    /// True when the amount is an exact multiple of `step`.
    ///
    /// A zero step divides nothing.
    pub fn is_multiple_of(&self, step: Money) -> bool {
        if step.0.is_zero() {
            return false;
        }
        matches!(self.0.checked_rem(step.0), Some(rem) if rem.is_zero())
    }

    /// Takes `rate_bps` basis points of the amount and rounds up to the next
    /// whole dollar. Results past the `i64` range saturate.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// // 20% of $12.25 = $2.45 → 3
    /// assert_eq!(Money::from_cents(1225).percentage_ceil_dollars(2000), 3);
    /// // 20% of $15.00 = $3.00 exactly → 3
    /// assert_eq!(Money::from_cents(1500).percentage_ceil_dollars(2000), 3);
    /// ```
    pub fn percentage_ceil_dollars(&self, rate_bps: u16) -> i64 {
        // mantissa < 2^96 and scale <= 28, so neither side leaves i128
        let numerator = self.0.mantissa() * i128::from(rate_bps);
        let denominator = BPS_SCALE * 10i128.pow(self.0.scale());

        // Ceiling division that also holds for negative amounts
        let quotient = numerator.div_euclid(denominator);
        let rounded = if numerator.rem_euclid(denominator) == 0 {
            quotient
        } else {
            quotient + 1
        };

        i64::try_from(rounded).unwrap_or(if rounded < 0 { i64::MIN } else { i64::MAX })
    }

    /// Formats the amount as a plain decimal with at least two decimal places.
    ///
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(900).to_decimal_string(), "9.00");
    /// assert_eq!("1.2340".parse::<Money>().unwrap().to_decimal_string(), "1.234");
    /// ```
    pub fn to_decimal_string(&self) -> String {
        let value = self.0.normalize();
        if value.scale() < 2 {
            format!("{:.2}", value)
        } else {
            value.to_string()
        }
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses decimal text exactly.
///
/// ## Accepted Forms
/// ```text
/// "12.25"   "12"   "12."   ".25"   "+3.5"   "-1.00"   "1.2e1"   "125E-2"
/// ```
/// The text is taken as-is; surrounding whitespace is an error.
impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let caps = AMOUNT_PATTERN
            .captures(s)
            .ok_or(MoneyParseError::Malformed)?;
        let negative = &caps[1] == "-";
        let int_part = caps.get(2).map_or("", |m| m.as_str());
        let frac_part = caps.get(3).map_or("", |m| m.as_str());
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(MoneyParseError::Malformed);
        }

        let exponent = match caps.get(4) {
            Some(m) => {
                let text = m.as_str();
                let saturated = if text.starts_with('-') {
                    -EXPONENT_LIMIT
                } else {
                    EXPONENT_LIMIT
                };
                text.parse::<i64>()
                    .unwrap_or(saturated)
                    .clamp(-EXPONENT_LIMIT, EXPONENT_LIMIT)
            }
            None => 0,
        };

        // value = significand × 10^exp10
        let digits = format!("{}{}", int_part, frac_part);
        let digits = digits.trim_start_matches('0');
        let significand = digits.trim_end_matches('0');
        if significand.is_empty() {
            return Ok(Money::zero());
        }
        let trailing_zeros = (digits.len() - significand.len()) as i64;
        let exp10 = exponent - frac_part.len() as i64 + trailing_zeros;
        let sig_len = significand.len() as i64;

        if sig_len + exp10 > MAX_DIGITS {
            return Err(MoneyParseError::Overflow);
        }

        let (mantissa, scale) = if exp10 >= 0 {
            (digit_value(significand) * 10i128.pow(exp10 as u32), 0)
        } else {
            let scale = -exp10;
            let excess = (scale - MAX_SCALE).max(sig_len - MAX_DIGITS).max(0);
            (round_half_even(significand, excess as usize), scale - excess)
        };
        let mantissa = if negative { -mantissa } else { mantissa };

        Decimal::try_from_i128_with_scale(mantissa, scale as u32)
            .map(Money)
            .map_err(|_| MoneyParseError::Overflow)
    }
}

/// Value of a run of at most 30 ASCII digits.
fn digit_value(digits: &str) -> i128 {
    digits
        .bytes()
        .fold(0i128, |acc, b| acc * 10 + i128::from(b - b'0'))
}

/// Drops the last `drop` digits, rounding half-to-even.
fn round_half_even(digits: &str, drop: usize) -> i128 {
    if drop > digits.len() {
        return 0;
    }

    let (kept, dropped) = digits.split_at(digits.len() - drop);
    let mut value = digit_value(kept);

    let mut rest = dropped.bytes();
    if let Some(first) = rest.next() {
        let tail_nonzero = rest.any(|b| b != b'0');
        let round_up = first > b'5' || (first == b'5' && (tail_nonzero || value % 2 == 1));
        if round_up {
            value += 1;
        }
    }

    value
}

// =============================================================================
// Unit Tests
// =============================================================================
