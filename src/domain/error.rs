//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use thiserror::Error;

/// Errors raised by the booking domain itself
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Raw form input was rejected; the message is shown to the user as is
    #[error("{0}")]
    InvalidInput(String),

    /// The payment step refused the charge; the booking stays unconfirmed
    #[error("Payment rejected: {0}")]
    PaymentRejected(String),
}

impl DomainError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Check if this is a client error (user's fault)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
