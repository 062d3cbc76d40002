//! Booking Store Repository
//!
//! Parameterized inserts for the `customers` and `bookings` tables.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::fmt;

use crate::domain::{BookingRecord, Customer, CustomerId, NewCustomer};

use super::StoreError;

/// Identifier assigned by storage when a booking is inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct BookingId(pub i64);

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Write-only store for customers and their bookings
#[derive(Debug, Clone)]
pub struct BookingStore {
    pool: PgPool,
}

impl BookingStore {
    /// Create a new BookingStore with a database pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a customer and return it with its storage-assigned id
    pub async fn save_customer(&self, customer: &NewCustomer) -> Result<Customer, StoreError> {
        let id: Option<CustomerId> = sqlx::query_scalar(
            r#"
            INSERT INTO customers (name, phone, address)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&customer.name)
        .bind(&customer.phone)
        .bind(&customer.address)
        .fetch_optional(&self.pool)
        .await?;

        let id = id.ok_or(StoreError::NoRowsAffected)?;
        tracing::debug!(customer_id = %id, "Customer saved");

        Ok(Customer::from_new(id, customer.clone()))
    }

    /// Insert one booking row. A missing customer id is stored as NULL.
    pub async fn save_booking(&self, record: &BookingRecord) -> Result<BookingId, StoreError> {
        let id: Option<BookingId> = sqlx::query_scalar(
            r#"
            INSERT INTO bookings
                (customer_id, event_type, event_date, event_time, price, venue, extra_details)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(record.customer_id)
        .bind(&record.event_type)
        .bind(&record.date)
        .bind(&record.time)
        .bind(record.price)
        .bind(&record.venue)
        .bind(&record.extra_details)
        .fetch_optional(&self.pool)
        .await?;

        let id = id.ok_or(StoreError::NoRowsAffected)?;
        tracing::debug!(
            booking_id = %id,
            customer_id = ?record.customer_id,
            event_type = %record.event_type,
            "Booking saved"
        );

        Ok(id)
    }
}
