//! # Cart
//!
//! The shopping cart and the receipt it produces at checkout.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Menu Choice              Cart Method              Cart State Change    │
//! │  ───────────              ───────────              ─────────────────    │
//! │                                                                         │
//! │  1. Add ─────────────────► add_product() ────────► products.push(p)    │
//! │                                                                         │
//! │  2. Remove ──────────────► remove_by_name() ─────► products.remove(i)  │
//! │                                                                         │
//! │  3. Checkout ────────────► checkout() ───────────► Receipt + clear()   │
//! │                                                                         │
//! │  (any) ──────────────────► total_price() ────────► (read only)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Insertion order is preserved; the receipt lists lines in that order
//! - Duplicates are allowed; removal takes out the first match only
//! - After a successful `checkout()` the cart is empty, whatever happens
//!   to the payment
//! - Totals use checked arithmetic; an overflow is `CoreError::TotalOverflow`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Receipt
// =============================================================================

/// A line on the checkout receipt, frozen at checkout time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub name: String,
    pub price: Money,
    pub description: String,
}

impl From<&Product> for CartLine {
    fn from(product: &Product) -> Self {
        CartLine {
            name: product.name().to_string(),
            price: product.price(),
            description: product.description().to_string(),
        }
    }
}

/// The order summary produced by [`Cart::checkout`].
///
/// Payment is charged against [`Receipt::total`], which is captured before
/// the cart is cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    lines: Vec<CartLine>,
    total: Money,
    created_at: DateTime<Utc>,
}

impl Receipt {
    /// Lines in the order the products were added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Sum of all line prices.
    pub fn total(&self) -> Money {
        self.total
    }

    /// When checkout happened.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// True when checkout ran on an empty cart.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered list of products pending purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    products: Vec<Product>,

    /// When the cart was created/last cleared
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            products: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Appends a product. Always succeeds.
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Removes the first product matching `product` by name.
    ///
    /// ## Returns
    /// `true` if something was removed.
    pub fn remove_product(&mut self, product: &Product) -> bool {
        self.remove_by_name(product.name()).is_some()
    }

    /// Removes and returns the first product whose name matches `name`,
    /// compared case-insensitively.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::{Cart, Money, Product};
    ///
    /// let mut cart = Cart::new();
    /// cart.add_product(Product::new("Book", Money::from_cents(1000), "...").unwrap());
    ///
    /// let removed = cart.remove_by_name("book").unwrap();
    /// assert_eq!(removed.name(), "Book");
    /// assert!(cart.remove_by_name("book").is_none());
    /// ```
    pub fn remove_by_name(&mut self, name: &str) -> Option<Product> {
        let index = self.products.iter().position(|p| p.matches_name(name))?;
        Some(self.products.remove(index))
    }

    /// Sum of all prices. Zero for an empty cart.
    ///
    /// ## Errors
    /// `CoreError::TotalOverflow` if the sum does not fit in [`Money`].
    pub fn total_price(&self) -> CoreResult<Money> {
        Money::checked_sum(self.products.iter().map(Product::price))
            .ok_or(CoreError::TotalOverflow)
    }

    /// Snapshots the cart into a [`Receipt`], then clears it.
    ///
    /// Once the total is known the cart is emptied unconditionally; the
    /// receipt is the only record of the order from here on. If the total
    /// overflows, nothing is cleared.
    pub fn checkout(&mut self) -> CoreResult<Receipt> {
        let total = self.total_price()?;
        let receipt = Receipt {
            lines: self.products.iter().map(CartLine::from).collect(),
            total,
            created_at: Utc::now(),
        };
        self.clear();
        Ok(receipt)
    }

    /// Clears all products from the cart.
    pub fn clear(&mut self) {
        self.products.clear();
        self.created_at = Utc::now();
    }

    /// Products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products (duplicates counted separately).
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// When the cart was created or last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_PRICE;

    fn product(name: &str, cents: i64) -> Product {
        Product::new(name, Money::from_cents(cents), format!("{} description", name)).unwrap()
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_price().unwrap(), Money::zero());
    }

    #[test]
    fn test_total_is_sum_of_added_prices() {
        let mut cart = Cart::new();
        cart.add_product(product("Book", 1000));
        cart.add_product(product("Pen", 250));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_price().unwrap().cents(), 1250);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut cart = Cart::new();
        cart.add_product(product("Pen", 250));
        cart.add_product(product("Pen", 250));
        cart.add_product(product("pen", 300));

        assert_eq!(cart.len(), 3);
        assert_eq!(cart.total_price().unwrap().cents(), 800);
    }

    #[test]
    fn test_remove_by_name_removes_first_match_only() {
        let mut cart = Cart::new();
        cart.add_product(product("Pen", 250));
        cart.add_product(product("Book", 1000));
        cart.add_product(product("PEN", 300));

        let removed = cart.remove_by_name("pen").unwrap();
        assert_eq!(removed.price().cents(), 250);

        let names: Vec<&str> = cart.products().iter().map(Product::name).collect();
        assert_eq!(names, vec!["Book", "PEN"]);
        assert_eq!(cart.total_price().unwrap().cents(), 1300);
    }

    #[test]
    fn test_remove_case_insensitive_scenario() {
        let mut cart = Cart::new();
        cart.add_product(product("Book", 1000));

        assert!(cart.remove_by_name("book").is_some());
        assert_eq!(cart.total_price().unwrap(), Money::zero());
    }

    #[test]
    fn test_remove_missing_name_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add_product(product("Book", 1000));

        assert!(cart.remove_by_name("Lamp").is_none());
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_price().unwrap().cents(), 1000);
    }

    #[test]
    fn test_remove_product_by_reference() {
        let mut cart = Cart::new();
        let book = product("Book", 1000);
        cart.add_product(book.clone());

        assert!(cart.remove_product(&book));
        assert!(!cart.remove_product(&book));
    }

    #[test]
    fn test_checkout_snapshots_then_clears() {
        let mut cart = Cart::new();
        cart.add_product(product("Book", 1000));
        cart.add_product(product("Pen", 250));

        let receipt = cart.checkout().unwrap();

        assert!(cart.is_empty());
        assert_eq!(cart.total_price().unwrap(), Money::zero());
        assert_eq!(receipt.total().cents(), 1250);
        let names: Vec<&str> = receipt.lines().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Book", "Pen"]);
        assert_eq!(receipt.lines()[1].description, "Pen description");
    }

    #[test]
    fn test_checkout_empty_cart() {
        let mut cart = Cart::new();
        let receipt = cart.checkout().unwrap();

        assert!(receipt.is_empty());
        assert!(receipt.total().is_zero());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_of_many_max_price_products_is_exact() {
        let mut cart = Cart::new();
        for i in 0..1_000 {
            let product = Product::new(format!("Item {i}"), MAX_PRICE, "").unwrap();
            cart.add_product(product);
        }

        let expected = MAX_PRICE.cents() * 1_000;
        assert_eq!(cart.total_price().unwrap().cents(), expected);

        let receipt = cart.checkout().unwrap();
        assert_eq!(receipt.total().cents(), expected);
        assert_eq!(receipt.lines().len(), 1_000);
        assert!(cart.is_empty());
    }
}
