//! Integration tests for the Booking Store
//!
//! Require a running PostgreSQL. Run with:
//! DATABASE_URL=postgres://... cargo test -- --ignored

use event_booking::domain::{BookingRecord, Event, NewCustomer};
use event_booking::store::BookingStore;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod common;

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_save_customer_assigns_id() {
    let pool = common::setup_test_db().await;
    let store = BookingStore::new(pool);

    let customer = store
        .save_customer(&NewCustomer {
            name: "Asha".to_string(),
            phone: "9876543210".to_string(),
            address: "12 MG Road".to_string(),
        })
        .await
        .unwrap();

    assert!(customer.id.0 > 0);
    assert_eq!(customer.name, "Asha");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_save_booking_row() {
    let pool = common::setup_test_db().await;
    let store = BookingStore::new(pool.clone());

    let customer = store
        .save_customer(&NewCustomer {
            name: "Priya".to_string(),
            phone: "9123456780".to_string(),
            address: "4 Lake View".to_string(),
        })
        .await
        .unwrap();

    let event = Event::baby_shower("Priya", "Jungle", 20, "15/08/2025", "04:00 PM");
    let record = BookingRecord::from_event(Some(customer.id), &event);
    let booking_id = store.save_booking(&record).await.unwrap();

    let (event_type, price, extra, customer_id): (String, Decimal, String, Option<i64>) =
        sqlx::query_as(
            "SELECT event_type, price, extra_details, customer_id FROM bookings WHERE id = $1",
        )
        .bind(booking_id)
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_eq!(event_type, "Baby Shower");
    assert_eq!(price, dec!(26000));
    assert_eq!(extra, "Mother: Priya, Theme: Jungle, Guests: 20");
    assert_eq!(customer_id, Some(customer.id.0));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_booking_without_customer_stores_null() {
    let pool = common::setup_test_db().await;
    let store = BookingStore::new(pool.clone());

    let event = Event::marriage("Asha", "Ravi", "01/12/2025", "07:30 PM", "Grand Hall");
    let booking_id = store
        .save_booking(&BookingRecord::from_event(None, &event))
        .await
        .unwrap();

    let customer_id: Option<i64> =
        sqlx::query_scalar("SELECT customer_id FROM bookings WHERE id = $1")
            .bind(booking_id)
            .fetch_one(&pool)
            .await
            .unwrap();

    assert!(customer_id.is_none());
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_largest_quote_price_is_stored() {
    let pool = common::setup_test_db().await;
    let store = BookingStore::new(pool.clone());

    let event = Event::anniversary("Sita & Ram", "Banquet", i32::MAX as u32, "01/01/2026", "08:00 PM");
    let booking_id = store
        .save_booking(&BookingRecord::from_event(None, &event))
        .await
        .unwrap();

    let price: Decimal = sqlx::query_scalar("SELECT price FROM bookings WHERE id = $1")
        .bind(booking_id)
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_eq!(price, dec!(2147483672000));
}
