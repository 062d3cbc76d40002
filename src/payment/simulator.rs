//! Payment Simulator

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::domain::{Amount, AmountError};

/// Default processing delay
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Errors reported by the simulated payment step
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PaymentError {
    #[error("Invalid Amount")]
    InvalidAmount(#[source] AmountError),
}

/// Proof that a simulated charge went through
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub payment_id: Uuid,
    pub amount: Decimal,
    pub paid_at: DateTime<Utc>,
}

/// Stand-in for a payment gateway
#[derive(Debug, Clone)]
pub struct PaymentSimulator {
    delay: Duration,
}

impl PaymentSimulator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Charge `amount`. Non-positive amounts are rejected before any wait.
    pub async fn process(&self, amount: Decimal) -> Result<PaymentReceipt, PaymentError> {
        let amount = Amount::new(amount).map_err(|e| {
            tracing::warn!(%amount, error = %e, "Payment rejected");
            PaymentError::InvalidAmount(e)
        })?;

        tracing::info!(%amount, delay_ms = self.delay.as_millis() as u64, "Processing payment");
        tokio::time::sleep(self.delay).await;

        let receipt = PaymentReceipt {
            payment_id: Uuid::new_v4(),
            amount: amount.value(),
            paid_at: Utc::now(),
        };
        tracing::info!(payment_id = %receipt.payment_id, "Payment completed");

        Ok(receipt)
    }
}

impl Default for PaymentSimulator {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}
