//! # Shopcart Entry Point
//!
//! Interactive in-memory shopping cart.
//!
//! ```text
//! $ shopcart
//! Welcome to Shopcart Demo Store!
//!
//! Menu:
//! 1. Add product
//! 2. Remove product
//! 3. Checkout
//! 4. Exit
//! Choose an option:
//! ```
//!
//! The setup lives in `lib.rs` so the session can be tested.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    shopcart_cli::run()?;
    Ok(())
}
