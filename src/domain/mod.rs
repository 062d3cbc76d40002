//! Domain module
//!
//! Core booking types and business logic.

pub mod amount;
pub mod booking;
pub mod customer;
pub mod error;
pub mod event;
pub mod intake;
pub mod validation;

pub use amount::{Amount, AmountError};
pub use booking::BookingRecord;
pub use customer::{Customer, CustomerId, NewCustomer};
pub use error::DomainError;
pub use event::{Event, EventDetails, EventSchedule, EventType, UnknownEventType};
pub use intake::{CustomerIntake, EventIntake};
pub use validation::{is_valid_date, is_valid_phone, is_valid_time};
