//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units                                      │
//! │    "10.00" + "2.50"  →  1000 + 250 = 1250  →  "12.50"                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopcart_core::money::Money;
//!
//! // Create from minor units (preferred)
//! let price = Money::from_cents(1099); // 10.99
//!
//! // Or parse what the user typed
//! let typed: Money = "10,99".parse().unwrap();
//! assert_eq!(price, typed);
//!
//! let total = price.checked_add(Money::from_cents(500)).unwrap();
//! assert_eq!(total.to_string(), "15.99");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::{MINOR_UNITS_PER_MAJOR, MINOR_UNIT_DIGITS};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (kopecks, cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: parsing accepts a sign, validation decides what is allowed
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Checked sums only**: there is no `Add`; totals go through
///   [`Money::checked_sum`] so an overflow is an error, never a wrap
/// - **No currency tag**: the store works in one currency, chosen in config
///
/// ## Where Money is Used
/// ```text
/// typed price ──► Money::from_str ──► Product.price ──► Cart.total_price
///                                                            │
///                                  Receipt.total ◄───────────┘
///                                        │
///                                        ▼
///                          PaymentProcessor::process_payment
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_UNITS_PER_MAJOR
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % MINOR_UNITS_PER_MAJOR).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Money(sum)),
            None => None,
        }
    }

    /// Sums amounts, returning `None` if the running total overflows.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::money::Money;
    ///
    /// let prices = [Money::from_cents(1000), Money::from_cents(250)];
    /// assert_eq!(Money::checked_sum(prices), Some(Money::from_cents(1250)));
    ///
    /// let huge = [Money::from_cents(i64::MAX), Money::from_cents(1)];
    /// assert_eq!(Money::checked_sum(huge), None);
    /// ```
    pub fn checked_sum<I>(amounts: I) -> Option<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(), Money::checked_add)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a decimal amount as typed at the console.
///
/// ## Accepted Input
/// ```text
/// "10"      → 1000        "-3.5"   → -350
/// "10.5"    → 1050        "0,99"   →   99   (comma separator)
/// "10.50"   → 1050        " 7.25 " →  725   (surrounding whitespace)
///
/// Rejected: "", "abc", "1.234" (sub-minor precision), "1.2.3", ".5", "5."
/// ```
///
/// Sign is accepted here; whether a negative amount is allowed is a
/// validation concern (see [`crate::validation::parse_price`]).
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(ValidationError::Required {
                field: "amount".to_string(),
            });
        }

        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let (major_text, minor_text) = match unsigned.find(|c: char| c == '.' || c == ',') {
            Some(idx) => (&unsigned[..idx], Some(&unsigned[idx + 1..])),
            None => (unsigned, None),
        };

        if major_text.is_empty() || !major_text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid_amount("expected a decimal number such as 12.50"));
        }

        let minor = match minor_text {
            None => 0,
            Some(digits) => {
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid_amount("expected a decimal number such as 12.50"));
                }
                if digits.len() > MINOR_UNIT_DIGITS as usize {
                    return Err(invalid_amount("at most two decimal places are allowed"));
                }
                // "5" after the separator means 50 minor units
                let scale = 10_i64.pow(MINOR_UNIT_DIGITS - digits.len() as u32);
                digits
                    .parse::<i64>()
                    .map_err(|_| invalid_amount("expected a decimal number such as 12.50"))?
                    * scale
            }
        };

        let major: i64 = major_text
            .parse()
            .map_err(|_| invalid_amount("amount is too large"))?;

        let cents = major
            .checked_mul(MINOR_UNITS_PER_MAJOR)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| invalid_amount("amount is too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

fn invalid_amount(reason: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: "amount".to_string(),
        reason: reason.to_string(),
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal rendering ("12.50"), no currency symbol.
///
/// The app layer adds the configured symbol when printing.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1250).to_string(), "12.50");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_parse_accepts_both_separators() {
        assert_eq!("10.00".parse::<Money>().unwrap().cents(), 1000);
        assert_eq!("2,50".parse::<Money>().unwrap().cents(), 250);
        assert_eq!("2.5".parse::<Money>().unwrap().cents(), 250);
        assert_eq!("7".parse::<Money>().unwrap().cents(), 700);
        assert_eq!("  0.99 ".parse::<Money>().unwrap().cents(), 99);
        assert_eq!("-3.5".parse::<Money>().unwrap().cents(), -350);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for bad in ["", "   ", "abc", "1.2.3", ".5", "5.", "1.234", "12a", "1 000", "--1"] {
            assert!(bad.parse::<Money>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_parse_overflow_is_an_error() {
        let err = "99999999999999999999".parse::<Money>().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn test_checked_sum_of_amounts() {
        let prices = [Money::from_cents(1000), Money::from_cents(250)];
        assert_eq!(Money::checked_sum(prices).unwrap().cents(), 1250);
        assert_eq!(Money::checked_sum(Vec::new()), Some(Money::zero()));
    }

    #[test]
    fn test_checked_sum_overflow_is_none() {
        let near_max = Money::from_cents(i64::MAX / 2 + 1);
        assert_eq!(Money::checked_sum([near_max, near_max]), None);

        // a later negative term does not rescue an overflow that already happened
        let amounts = [near_max, near_max, Money::from_cents(-10)];
        assert_eq!(Money::checked_sum(amounts), None);
    }

    #[test]
    fn test_checked_add_overflow() {
        assert!(Money::from_cents(i64::MAX)
            .checked_add(Money::from_cents(1))
            .is_none());
        assert_eq!(
            Money::from_cents(1).checked_add(Money::from_cents(2)),
            Some(Money::from_cents(3))
        );
    }
}
