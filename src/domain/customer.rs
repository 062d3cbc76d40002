//! Customer types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by storage when a customer is inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct CustomerId(pub i64);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Customer details collected at intake, before storage assigns an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// A customer that storage has accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl Customer {
    pub fn from_new(id: CustomerId, customer: NewCustomer) -> Self {
        Self {
            id,
            name: customer.name,
            phone: customer.phone,
            address: customer.address,
        }
    }
}
