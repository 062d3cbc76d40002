//! Commands and Results
//!
//! Input and output types for the booking workflow handlers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{BookingRecord, Customer, CustomerId, EventIntake};
use crate::payment::PaymentReceipt;
use crate::store::BookingId;

pub const WARN_CUSTOMER_NOT_SAVED: &str =
    "Could not save customer. Proceeding without a stored customer.";
pub const WARN_BOOKING_NOT_SAVED: &str = "Could not save booking. Booking not recorded.";
pub const MSG_PAYMENT_CONFIRMED: &str = "Payment Successful! Booking Confirmed!";

// =========================================================================
// Commands
// =========================================================================

/// Command to book one event
#[derive(Debug, Clone, Deserialize)]
pub struct BookEventCommand {
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
    pub event: EventIntake,
}

impl BookEventCommand {
    pub fn new(event: EventIntake) -> Self {
        Self {
            customer_id: None,
            event,
        }
    }

    pub fn for_customer(mut self, customer_id: Option<CustomerId>) -> Self {
        self.customer_id = customer_id;
        self
    }
}

/// Command to pay for a booking
#[derive(Debug, Clone, Deserialize)]
pub struct PayCommand {
    pub amount: Decimal,
}

impl PayCommand {
    pub fn new(amount: Decimal) -> Self {
        Self { amount }
    }
}

// =========================================================================
// Results
// =========================================================================

/// Result of customer intake
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterCustomerResult {
    /// `None` when storage was unavailable
    pub customer: Option<Customer>,
    pub warning: Option<String>,
}

impl RegisterCustomerResult {
    pub fn customer_id(&self) -> Option<CustomerId> {
        self.customer.as_ref().map(|c| c.id)
    }
}

/// Result of booking an event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookEventResult {
    pub booking_id: Option<BookingId>,
    pub recorded: bool,
    pub record: BookingRecord,
    pub summary: String,
    pub warning: Option<String>,
}

/// Result of a successful payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResult {
    pub receipt: PaymentReceipt,
    pub confirmed: bool,
    pub message: String,
}
