//! Command Handlers module
//!
//! The booking workflow: customer intake, event booking, payment.
//! Each handler validates input, then calls storage or the payment simulator.

mod booking_handler;
mod commands;
mod customer_handler;
mod payment_handler;


pub use booking_handler::BookEventHandler;
pub use commands::*;
pub use customer_handler::RegisterCustomerHandler;
pub use payment_handler::PayHandler;
