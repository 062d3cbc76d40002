//! Booking Handler
//!
//! Turns an event form into a stored booking record. The summary is
//! returned whether or not storage accepted the row.

use sqlx::PgPool;

use crate::domain::BookingRecord;
use crate::error::AppError;
use crate::store::BookingStore;

use super::{BookEventCommand, BookEventResult, WARN_BOOKING_NOT_SAVED};

/// Handler for event bookings
pub struct BookEventHandler {
    store: BookingStore,
}

impl BookEventHandler {
    pub fn new(pool: PgPool) -> Self {
        Self {
            store: BookingStore::new(pool),
        }
    }

    /// Execute the book event command
    pub async fn execute(&self, command: BookEventCommand) -> Result<BookEventResult, AppError> {
        let event = command.event.validate()?;
        let record = BookingRecord::from_event(command.customer_id, &event);

        let (booking_id, warning) = match self.store.save_booking(&record).await {
            Ok(id) => {
                tracing::info!(
                    booking_id = %id,
                    event_type = %record.event_type,
                    price = %record.price,
                    "Booking recorded"
                );
                (Some(id), None)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    unavailable = e.is_unavailable(),
                    event_type = %record.event_type,
                    "Booking not recorded"
                );
                (None, Some(WARN_BOOKING_NOT_SAVED.to_string()))
            }
        };

        Ok(BookEventResult {
            booking_id,
            recorded: booking_id.is_some(),
            summary: record.summary(),
            record,
            warning,
        })
    }
}
