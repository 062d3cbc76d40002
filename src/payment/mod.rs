//! Payment module
//!
//! Simulated payment step. There is no gateway behind it: a charge is
//! checked, the simulator waits, and a receipt comes back.

mod simulator;

pub use simulator::{PaymentError, PaymentReceipt, PaymentSimulator};
