//! Booking Store module
//!
//! Persistence layer for customers and bookings.
//! Rows are written to PostgreSQL; nothing is read back.

mod error;
mod repository;

pub use error::StoreError;
pub use repository::{BookingId, BookingStore};
