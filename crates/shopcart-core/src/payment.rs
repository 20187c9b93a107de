//! # Payment Processor
//!
//! The seam between checkout and whatever approves a payment.
//!
//! ```text
//! Receipt.total ──► process_payment(amount) ──► bool
//!                                                 │
//!                   Transaction::new(amount, ok) ◄┘
//!                          │
//!                          ▼
//!                   handle_transaction(&tx)   (log only, nothing stored)
//! ```
//!
//! The console app ships an always-approve implementation; a real gateway
//! would implement the same trait.

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::Transaction;

/// Authorizes payments and reports their outcome.
pub trait PaymentProcessor {
    /// Attempts to charge `amount`.
    ///
    /// ## Returns
    /// - `Ok(true)` if the payment was approved
    /// - `Ok(false)` if it was declined
    /// - `Err(CoreError::InvalidPaymentAmount)` if `amount` is not positive
    fn process_payment(&mut self, amount: Money) -> CoreResult<bool>;

    /// Reports the outcome of an attempt. Informational only.
    fn handle_transaction(&mut self, transaction: &Transaction);

    /// Runs one full attempt: charge, build the transaction, report it.
    fn pay(&mut self, amount: Money) -> CoreResult<Transaction> {
        let success = self.process_payment(amount)?;
        let transaction = Transaction::new(amount, success);
        self.handle_transaction(&transaction);
        Ok(transaction)
    }
}

/// Lets a caller lend a processor to a session and inspect it afterwards.
impl<P: PaymentProcessor + ?Sized> PaymentProcessor for &mut P {
    fn process_payment(&mut self, amount: Money) -> CoreResult<bool> {
        (**self).process_payment(amount)
    }

    fn handle_transaction(&mut self, transaction: &Transaction) {
        (**self).handle_transaction(transaction)
    }
}
