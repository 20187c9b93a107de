//! # Validation Module
//!
//! Input rules shared by the console layer.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Menu loop (shopcart-cli)                                     │
//! │  ├── Reads raw text                                                    │
//! │  └── Re-prompts on any error from this module                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── parse_price: decimal text → Money within price bounds             │
//! │  ├── validate_payment_amount: charge must be positive                  │
//! │  └── is_affirmative: yes/no answers                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Constructors (Product::new)                                  │
//! │  └── validate_price enforced again                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, ValidationError};
use crate::money::Money;
use crate::{MAX_PRICE, MIN_PRICE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Parses a product price as typed by the user.
///
/// ## Rules
/// - Must be a decimal number with at most two fractional digits
/// - `.` and `,` are both accepted as the separator
/// - Must be strictly positive and at most [`MAX_PRICE`]
///
/// ## Example
/// ```rust
/// use shopcart_core::validation::parse_price;
///
/// assert_eq!(parse_price("2,50").unwrap().cents(), 250);
/// assert!(parse_price("0").is_err());
/// assert!(parse_price("ten").is_err());
/// assert!(parse_price("1000000000.01").is_err());
/// ```
pub fn parse_price(input: &str) -> ValidationResult<Money> {
    let price: Money = input.parse().map_err(|err| match err {
        ValidationError::Required { .. } => ValidationError::Required {
            field: "price".to_string(),
        },
        ValidationError::InvalidFormat { reason, .. } => ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason,
        },
        other => other,
    })?;

    validate_price(price)?;
    Ok(price)
}

/// Validates a product price.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed [`MAX_PRICE`]
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    if price > MAX_PRICE {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: MIN_PRICE,
            max: MAX_PRICE,
        });
    }

    Ok(())
}

/// Validates an amount about to be charged.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_payment_amount(amount: Money) -> Result<(), CoreError> {
    if !amount.is_positive() {
        return Err(CoreError::InvalidPaymentAmount {
            reason: format!("{} is not a positive amount", amount),
        });
    }

    Ok(())
}

/// Checks a yes/no answer against the accepted affirmative tokens.
///
/// Only an exact token (trimmed, case-insensitive) counts as yes; anything
/// else, including an empty answer, is a no.
pub fn is_affirmative<S: AsRef<str>>(answer: &str, tokens: &[S]) -> bool {
    let answer = answer.trim().to_lowercase();
    !answer.is_empty()
        && tokens
            .iter()
            .any(|token| token.as_ref().trim().to_lowercase() == answer)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("10.00").unwrap().cents(), 1000);
        assert_eq!(parse_price("2.5").unwrap().cents(), 250);
        assert_eq!(parse_price(" 0,01 ").unwrap().cents(), 1);
    }

    #[test]
    fn test_parse_price_rejects_non_positive() {
        assert_eq!(
            parse_price("0").unwrap_err(),
            ValidationError::MustBePositive {
                field: "price".to_string()
            }
        );
        assert!(parse_price("-5").is_err());
        assert!(parse_price("0.00").is_err());
    }

    #[test]
    fn test_parse_price_reports_price_field() {
        match parse_price("abc").unwrap_err() {
            ValidationError::InvalidFormat { field, .. } => assert_eq!(field, "price"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(matches!(
            parse_price("").unwrap_err(),
            ValidationError::Required { .. }
        ));
    }

    #[test]
    fn test_parse_price_upper_bound() {
        assert_eq!(parse_price("1000000000").unwrap(), MAX_PRICE);
        assert_eq!(parse_price("1000000000,00").unwrap(), MAX_PRICE);
        assert_eq!(
            parse_price("1000000000.01").unwrap_err(),
            ValidationError::OutOfRange {
                field: "price".to_string(),
                min: MIN_PRICE,
                max: MAX_PRICE,
            }
        );
        assert!(matches!(
            parse_price("50000000000000000").unwrap_err(),
            ValidationError::OutOfRange { .. }
        ));
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(MIN_PRICE).is_ok());
        assert!(validate_price(MAX_PRICE).is_ok());
        assert!(validate_price(Money::zero()).is_err());
        assert!(validate_price(Money::from_cents(MAX_PRICE.cents() + 1)).is_err());
    }

    #[test]
    fn test_validate_payment_amount() {
        assert!(validate_payment_amount(Money::from_cents(1250)).is_ok());
        assert!(validate_payment_amount(Money::zero()).is_err());
        assert!(validate_payment_amount(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_is_affirmative() {
        let tokens = ["yes", "y", "да"];
        assert!(is_affirmative("yes", &tokens));
        assert!(is_affirmative("  YES ", &tokens));
        assert!(is_affirmative("Да", &tokens));
        assert!(!is_affirmative("нет", &tokens));
        assert!(!is_affirmative("no", &tokens));
        assert!(!is_affirmative("yess", &tokens));
        assert!(!is_affirmative("", &tokens));
    }
}
