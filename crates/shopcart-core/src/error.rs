//! # Error Types
//!
//! Domain-specific error types for shopcart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopcart-core errors (this file)                                      │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  shopcart-cli errors (app crate)                                       │
//! │  └── AppError         - Console I/O + wrapped CoreError                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → main()                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, product name, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The cart total does not fit in a [`Money`] value.
    ///
    /// Only reachable with tens of millions of maximum-price lines; the
    /// cart is left untouched when it happens.
    #[error("Cart total exceeds the largest supported amount")]
    TotalOverflow,

    /// Payment amount is invalid.
    ///
    /// ## When This Occurs
    /// - Charging an empty receipt (amount is zero)
    /// - A negative amount reaches the payment processor
    #[error("Invalid payment amount: {reason}")]
    InvalidPaymentAmount { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Amount is outside the accepted range (bounds inclusive).
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: String,
        min: Money,
        max: Money,
    },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., not a decimal number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
