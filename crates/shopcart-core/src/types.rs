//! # Domain Types
//!
//! Core domain types used throughout Shopcart.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐                    ┌─────────────────┐            │
//! │  │    Product      │                    │  Transaction    │            │
//! │  │  ─────────────  │                    │  ─────────────  │            │
//! │  │  name           │                    │  id (UUID v4)   │            │
//! │  │  price (Money)  │                    │  amount         │            │
//! │  │  description    │                    │  success        │            │
//! │  └─────────────────┘                    │  created_at     │            │
//! │   immutable value                       └─────────────────┘            │
//! │   lives in the Cart                      one-shot, never stored        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Products have no id. Removal matches on the name, compared
//! case-insensitively, so two products sharing a name are interchangeable
//! for removal purposes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::validate_price;

// =============================================================================
// Product
// =============================================================================

/// A product placed in the cart.
///
/// Immutable after creation: fields are private and only exposed through
/// getters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: Money,
    description: String,
}

impl Product {
    /// Creates a product.
    ///
    /// ## Errors
    /// - `CoreError::Validation(MustBePositive)` if `price` is zero or negative
    /// - `CoreError::Validation(OutOfRange)` if `price` is above [`crate::MAX_PRICE`]
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::{Money, Product};
    ///
    /// let book = Product::new("Book", Money::from_cents(1000), "Fiction").unwrap();
    /// assert_eq!(book.name(), "Book");
    ///
    /// assert!(Product::new("Free", Money::zero(), "").is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        price: Money,
        description: impl Into<String>,
    ) -> CoreResult<Self> {
        validate_price(price)?;

        Ok(Product {
            name: name.into(),
            price,
            description: description.into(),
        })
    }

    /// Display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Free-text description.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Case-insensitive name comparison used for removal lookups.
    ///
    /// Leading and trailing whitespace is ignored on both sides, so a name
    /// typed as " Book " still finds "Book"; everything in between must match
    /// exactly. Comparison lowercases both sides with full Unicode rules, so
    /// Cyrillic names match too.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// The outcome of one simulated payment attempt.
///
/// Created right after the processor answers, handed to
/// [`crate::PaymentProcessor::handle_transaction`] for logging, then dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Amount that was charged (or attempted).
    pub amount: Money,

    /// Whether the processor approved the payment.
    pub success: bool,

    /// When the attempt was made.
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Records a payment attempt with a fresh identifier.
    pub fn new(amount: Money, success: bool) -> Self {
        Transaction {
            id: Uuid::new_v4().to_string(),
            amount,
            success,
            created_at: Utc::now(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
