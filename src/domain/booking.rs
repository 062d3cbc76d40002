//! Booking record
//!
//! The flattened row handed to storage for one booked event.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::customer::CustomerId;
use super::event::Event;

/// Storage-bound projection of an event plus its customer reference.
///
/// `customer_id` is `None` when the customer could not be stored; the
/// booking row then carries a NULL reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub customer_id: Option<CustomerId>,
    pub event_type: String,
    pub date: String,
    pub time: String,
    pub price: Decimal,
    pub venue: String,
    pub extra_details: String,
}

impl BookingRecord {
    /// Derive the record from an event. No validation happens here.
    pub fn from_event(customer_id: Option<CustomerId>, event: &Event) -> Self {
        Self {
            customer_id,
            event_type: event.event_type().label().to_string(),
            date: event.date().to_string(),
            time: event.time().to_string(),
            price: event.price(),
            venue: event.venue().to_string(),
            extra_details: event.extra_details(),
        }
    }

    /// Payment summary shown to the customer before they pay
    pub fn summary(&self) -> String {
        format!(
            "Event Type: {}\nDate: {}\nTime: {}\nVenue: {}\n\nExtra Details:\n{}\n\nTotal Amount to Pay: ₹{}\n",
            self.event_type, self.date, self.time, self.venue, self.extra_details, self.price
        )
    }
}
