//! # Menu Loop
//!
//! The interactive session: a blocking read-evaluate loop over the menu.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Menu Loop                                        │
//! │                                                                         │
//! │   ┌──────────┐   "1"   ┌─────────────┐                                  │
//! │   │          │────────►│ add_product │── name, price*, description      │
//! │   │          │   "2"   ├─────────────┤                                  │
//! │   │  Menu    │────────►│ remove      │── name (case-insensitive)        │
//! │   │  prompt  │   "3"   ├─────────────┤                                  │
//! │   │          │────────►│ checkout    │── receipt, clear, pay? (yes/no)  │
//! │   │          │   else  ├─────────────┤                                  │
//! │   │          │────────►│ invalid     │── message                        │
//! │   └────┬─────┘         └──────┬──────┘                                  │
//! │        ▲                      │ Flow::Continue                          │
//! │        └──────────────────────┘                                         │
//! │                                                                         │
//! │   "4" or end of input at ANY prompt ──► farewell, run() returns Ok     │
//! │                                                                         │
//! │   * price re-prompts until a decimal within the price bounds is entered│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use shopcart_core::validation::parse_price;
use shopcart_core::{Cart, Money, PaymentProcessor, Product, Receipt, ValidationError};

use crate::config::ConfigState;
use crate::console::Console;
use crate::error::AppResult;

// =============================================================================
// Menu Choice
// =============================================================================

/// One entry of the main menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    AddProduct,
    RemoveProduct,
    Checkout,
    Exit,
    /// Anything else the user typed.
    Invalid(String),
}

impl MenuChoice {
    /// Maps raw input to a choice. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::AddProduct,
            "2" => MenuChoice::RemoveProduct,
            "3" => MenuChoice::Checkout,
            "4" => MenuChoice::Exit,
            other => MenuChoice::Invalid(other.to_string()),
        }
    }
}

/// Whether the session keeps going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

const MENU: &str = "\nMenu:\n1. Add product\n2. Remove product\n3. Checkout\n4. Exit";

// =============================================================================
// Shop
// =============================================================================

/// Owns everything a session needs: the console, the cart, the payment
/// processor and the configuration.
pub struct Shop<R, W, P> {
    console: Console<R, W>,
    cart: Cart,
    payments: P,
    config: ConfigState,
}

impl<R, W, P> Shop<R, W, P>
where
    R: BufRead,
    W: Write,
    P: PaymentProcessor,
{
    /// Creates a shop with an empty cart.
    pub fn new(console: Console<R, W>, payments: P, config: ConfigState) -> Self {
        Shop {
            console,
            cart: Cart::new(),
            payments,
            config,
        }
    }

    /// Runs the menu loop until the user exits or input ends.
    ///
    /// ## Errors
    /// Only console I/O failures escape; every input problem is reported
    /// to the user and the loop continues.
    pub fn run(&mut self) -> AppResult<()> {
        info!(store = %self.config.store_name, "Session started");
        self.console
            .say(format!("Welcome to {}!", self.config.store_name))?;

        loop {
            self.console.say(MENU)?;
            let Some(input) = self.console.prompt("Choose an option: ")? else {
                warn!("Input closed at menu prompt");
                break;
            };

            let choice = MenuChoice::parse(&input);
            debug!(?choice, "Menu choice");

            let flow = match choice {
                MenuChoice::AddProduct => self.add_product()?,
                MenuChoice::RemoveProduct => self.remove_product()?,
                MenuChoice::Checkout => self.checkout()?,
                MenuChoice::Exit => Flow::Exit,
                MenuChoice::Invalid(raw) => {
                    warn!(input = %raw, "Invalid menu choice");
                    self.console.say("Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        self.console.say(format!(
            "Thank you for shopping at {}!",
            self.config.store_name
        ))?;
        info!(items_left = self.cart.len(), "Session ended");
        Ok(())
    }

    /// The cart as it currently stands.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Consumes the shop and hands back the console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    // -------------------------------------------------------------------------
    // Menu actions
    // -------------------------------------------------------------------------

    fn add_product(&mut self) -> AppResult<Flow> {
        let Some(name) = self.console.prompt("Enter product name: ")? else {
            return Ok(self.input_closed("product name"));
        };
        let Some(price) = self.read_price()? else {
            return Ok(self.input_closed("product price"));
        };
        let Some(description) = self.console.prompt("Enter product description: ")? else {
            return Ok(self.input_closed("product description"));
        };

        let product = Product::new(name.trim(), price, description.trim())?;
        info!(name = %product.name(), price = %product.price(), "Product added to cart");
        self.console
            .say(format!("{} added to cart.", product.name()))?;
        self.cart.add_product(product);

        Ok(Flow::Continue)
    }

    /// Prompts until a price within bounds is entered. No attempt limit.
    fn read_price(&mut self) -> AppResult<Option<Money>> {
        loop {
            let Some(input) = self.console.prompt("Enter product price: ")? else {
                return Ok(None);
            };

            match parse_price(&input) {
                Ok(price) => return Ok(Some(price)),
                Err(ValidationError::OutOfRange { max, .. }) => {
                    debug!(input = %input, "Price above maximum");
                    self.console.say(format!(
                        "Price must not exceed {}.",
                        self.config.format_currency(max)
                    ))?;
                }
                Err(err) => {
                    debug!(input = %input, error = %err, "Rejected price");
                    self.console
                        .say("Please enter a valid positive price (for example 12.50).")?;
                }
            }
        }
    }

    fn remove_product(&mut self) -> AppResult<Flow> {
        let Some(name) = self
            .console
            .prompt("Enter the name of the product to remove: ")?
        else {
            return Ok(self.input_closed("product name"));
        };

        match self.cart.remove_by_name(&name) {
            Some(product) => {
                info!(name = %product.name(), "Product removed from cart");
                self.console
                    .say(format!("{} removed from cart.", product.name()))?;
            }
            None => {
                debug!(name = %name, "Product to remove not in cart");
                self.console
                    .say(format!("Product '{}' not found in cart.", name.trim()))?;
            }
        }

        Ok(Flow::Continue)
    }

    /// Prints the receipt, clears the cart, then offers payment.
    ///
    /// The cart is empty after this whether or not the user pays; the
    /// charge is taken from the receipt. A total that cannot be computed
    /// leaves the cart as it was.
    fn checkout(&mut self) -> AppResult<Flow> {
        let receipt = match self.cart.checkout() {
            Ok(receipt) => receipt,
            Err(err) => {
                warn!(error = %err, items = self.cart.len(), "Checkout refused");
                self.console.say(format!(
                    "Checkout failed: {}. Your cart was kept.",
                    err
                ))?;
                return Ok(Flow::Continue);
            }
        };
        info!(
            lines = receipt.lines().len(),
            total = %receipt.total(),
            "Checkout"
        );
        self.print_receipt(&receipt)?;

        if receipt.is_empty() {
            self.console.say("Your cart is empty, nothing to pay.")?;
            return Ok(Flow::Continue);
        }

        let Some(answer) = self
            .console
            .prompt("Would you like to pay for the order? (yes/no): ")?
        else {
            return Ok(self.input_closed("payment confirmation"));
        };

        if !self.config.is_affirmative(&answer) {
            info!(total = %receipt.total(), "Payment declined by user");
            self.console.say("Payment skipped.")?;
            return Ok(Flow::Continue);
        }

        self.pay(receipt.total())?;
        Ok(Flow::Continue)
    }

    fn pay(&mut self, amount: Money) -> AppResult<()> {
        self.console.say(format!(
            "Processing payment of {}...",
            self.config.format_currency(amount)
        ))?;

        match self.payments.pay(amount) {
            Ok(transaction) if transaction.success => self.console.say(format!(
                "Transaction {} completed successfully.",
                transaction.id
            )),
            Ok(transaction) => self
                .console
                .say(format!("Transaction {} failed.", transaction.id)),
            Err(err) => {
                warn!(error = %err, "Payment rejected");
                self.console.say(format!("Payment could not be processed: {}", err))
            }
        }
    }

    fn print_receipt(&mut self, receipt: &Receipt) -> AppResult<()> {
        self.console.say("\nCheckout:")?;
        for line in receipt.lines() {
            self.console.say(format!(
                "- {} (Price: {}, Description: {})",
                line.name,
                self.config.format_currency(line.price),
                line.description
            ))?;
        }
        self.console.say(format!(
            "Total: {}",
            self.config.format_currency(receipt.total())
        ))
    }

    fn input_closed(&self, prompt: &str) -> Flow {
        warn!(prompt, "Input closed mid-command, ending session");
        Flow::Exit
    }
}
