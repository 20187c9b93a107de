//! # Simulated Payment
//!
//! The demo's only [`PaymentProcessor`]: no gateway, every valid charge is
//! approved. The outcome goes to the log; the menu loop prints it.

use tracing::{info, warn};

use shopcart_core::validation::validate_payment_amount;
use shopcart_core::{CoreResult, Money, PaymentProcessor, Transaction};

/// Always-approve payment processor.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedPayment;

impl SimulatedPayment {
    /// Creates the processor. It holds no state.
    pub fn new() -> Self {
        SimulatedPayment
    }
}

impl PaymentProcessor for SimulatedPayment {
    fn process_payment(&mut self, amount: Money) -> CoreResult<bool> {
        validate_payment_amount(amount)?;
        info!(amount = %amount, "Processing simulated payment");
        Ok(true)
    }

    fn handle_transaction(&mut self, transaction: &Transaction) {
        if transaction.success {
            info!(
                transaction_id = %transaction.id,
                amount = %transaction.amount,
                "Transaction completed"
            );
        } else {
            warn!(
                transaction_id = %transaction.id,
                amount = %transaction.amount,
                "Transaction failed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopcart_core::CoreError;

    #[test]
    fn test_positive_amount_is_approved() {
        let mut processor = SimulatedPayment::new();
        assert!(processor.process_payment(Money::from_cents(1250)).unwrap());
    }

    #[test]
    fn test_non_positive_amount_is_rejected() {
        let mut processor = SimulatedPayment::new();
        let err = processor.process_payment(Money::zero()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidPaymentAmount { .. }));
    }

    #[test]
    fn test_pay_returns_successful_transaction() {
        let mut processor = SimulatedPayment::new();
        let transaction = processor.pay(Money::from_cents(1250)).unwrap();
        assert!(transaction.success);
        assert_eq!(transaction.amount.cents(), 1250);
        assert!(!transaction.id.is_empty());
    }
}
