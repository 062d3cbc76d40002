//! Payment Handler

use crate::error::AppError;
use crate::payment::PaymentSimulator;

use super::{PayCommand, PaymentResult, MSG_PAYMENT_CONFIRMED};

/// Handler for the payment step
pub struct PayHandler {
    simulator: PaymentSimulator,
}

impl PayHandler {
    pub fn new(simulator: PaymentSimulator) -> Self {
        Self { simulator }
    }

    /// Execute the pay command. A rejected charge leaves the booking unconfirmed.
    pub async fn execute(&self, command: PayCommand) -> Result<PaymentResult, AppError> {
        let receipt = self.simulator.process(command.amount).await?;

        Ok(PaymentResult {
            receipt,
            confirmed: true,
            message: MSG_PAYMENT_CONFIRMED.to_string(),
        })
    }
}
