//! Customer Intake Handler
//!
//! Validates the customer form and stores the customer. Storage failure
//! does not stop the workflow: the customer simply has no id.

use sqlx::PgPool;

use crate::domain::CustomerIntake;
use crate::error::AppError;
use crate::store::BookingStore;

use super::{RegisterCustomerResult, WARN_CUSTOMER_NOT_SAVED};

/// Handler for customer intake
pub struct RegisterCustomerHandler {
    store: BookingStore,
}

impl RegisterCustomerHandler {
    pub fn new(pool: PgPool) -> Self {
        Self {
            store: BookingStore::new(pool),
        }
    }

    /// Execute customer intake
    pub async fn execute(&self, intake: CustomerIntake) -> Result<RegisterCustomerResult, AppError> {
        let new_customer = intake.validate()?;

        match self.store.save_customer(&new_customer).await {
            Ok(customer) => {
                tracing::info!(customer_id = %customer.id, "Customer registered");
                Ok(RegisterCustomerResult {
                    customer: Some(customer),
                    warning: None,
                })
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    unavailable = e.is_unavailable(),
                    "Customer not saved, continuing without a stored customer"
                );
                Ok(RegisterCustomerResult {
                    customer: None,
                    warning: Some(WARN_CUSTOMER_NOT_SAVED.to_string()),
                })
            }
        }
    }
}
