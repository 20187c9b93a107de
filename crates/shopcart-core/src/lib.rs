//! # shopcart-core: Pure Business Logic for Shopcart
//!
//! This crate holds every business rule of the shopping-cart demo as pure
//! code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopcart Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 shopcart-cli (Menu Loop)                        │   │
//! │  │    add product ──► remove product ──► checkout ──► pay          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shopcart-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  payment  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │ Processor │  │   │
//! │  │   │Transaction│  │  parsing  │  │  Receipt  │  │  (trait)  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CONSOLE • NO LOGGING • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Transaction)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The shopping cart and its checkout receipt
//! - [`payment`] - The payment processor seam
//! - [`error`] - Domain error types
//! - [`validation`] - Input rules shared by the app layer
//!
//! ## Example Usage
//!
//! ```rust
//! use shopcart_core::{Cart, Money, Product};
//!
//! let mut cart = Cart::new();
//! cart.add_product(Product::new("Book", Money::from_cents(1000), "Fiction").unwrap());
//! cart.add_product(Product::new("Pen", Money::from_cents(250), "Blue ink").unwrap());
//!
//! assert_eq!(cart.total_price().unwrap(), Money::from_cents(1250));
//!
//! let receipt = cart.checkout().unwrap();
//! assert_eq!(receipt.total().cents(), 1250);
//! assert!(cart.is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod payment;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, Receipt};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use payment::PaymentProcessor;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of fractional digits every [`Money`] amount carries.
///
/// Prices are entered as decimals ("2.50") and stored in minor units (250).
pub const MINOR_UNIT_DIGITS: u32 = 2;

/// Multiplier between major and minor currency units.
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// Smallest price a product may carry (0.01).
pub const MIN_PRICE: Money = Money::from_cents(1);

/// Largest price a product may carry (1 000 000 000.00).
///
/// Keeps every realistic cart total far away from `i64` overflow; the total
/// itself is still summed with checked arithmetic.
pub const MAX_PRICE: Money = Money::from_cents(100_000_000_000);
