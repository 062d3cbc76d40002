//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{CustomerId, CustomerIntake, EventIntake, EventType};
use crate::error::AppError;
use crate::handlers::{
    BookEventCommand, BookEventHandler, PayCommand, PayHandler, RegisterCustomerHandler,
};
use crate::store::BookingId;

use super::AppState;

// =========================================================================
// Request/Response types
// =========================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateCustomerResponse {
    pub customer_id: Option<CustomerId>,
    pub warning: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EventTypeResponse {
    pub event_type: EventType,
    pub label: String,
    pub pricing: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
    pub event: EventIntake,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BookingResponse {
    pub booking_id: Option<BookingId>,
    pub recorded: bool,
    pub customer_id: Option<CustomerId>,
    pub event_type: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub extra_details: String,
    pub price: Decimal,
    pub summary: String,
    pub warning: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub amount: Decimal,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub payment_id: uuid::Uuid,
    pub amount: Decimal,
    pub paid_at: chrono::DateTime<chrono::Utc>,
    pub confirmed: bool,
    pub message: String,
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/customers", post(create_customer))
        .route("/events", get(list_event_types))
        .route("/bookings", post(create_booking))
        .route("/payments", post(pay))
}

// =========================================================================
// POST /customers
// =========================================================================

/// Customer intake. A storage outage still returns 201 with a warning.
///
/// Missing fields arrive empty so intake reports them with its own message.
async fn create_customer(
    State(state): State<AppState>,
    Json(intake): Json<CustomerIntake>,
) -> Result<(StatusCode, Json<CreateCustomerResponse>), AppError> {
    let handler = RegisterCustomerHandler::new(state.pool);

    let result = handler.execute(intake).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateCustomerResponse {
            customer_id: result.customer_id(),
            warning: result.warning,
        }),
    ))
}

// =========================================================================
// GET /events
// =========================================================================

/// The bookable event types
async fn list_event_types() -> Json<Vec<EventTypeResponse>> {
    Json(
        EventType::ALL
            .into_iter()
            .map(|event_type| EventTypeResponse {
                event_type,
                label: event_type.label().to_string(),
                pricing: event_type.pricing_rule().to_string(),
            })
            .collect(),
    )
}

// =========================================================================
// POST /bookings
// =========================================================================

/// Validate, price and record one event booking
async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), AppError> {
    let handler = BookEventHandler::new(state.pool);

    let command = BookEventCommand::new(request.event).for_customer(request.customer_id);

    let result = handler.execute(command).await?;
    let record = result.record;

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            booking_id: result.booking_id,
            recorded: result.recorded,
            customer_id: record.customer_id,
            event_type: record.event_type,
            date: record.date,
            time: record.time,
            venue: record.venue,
            extra_details: record.extra_details,
            price: record.price,
            summary: result.summary,
            warning: result.warning,
        }),
    ))
}

// =========================================================================
// POST /payments
// =========================================================================

/// Run the simulated payment
async fn pay(
    State(state): State<AppState>,
    Json(request): Json<PaymentRequest>,
) -> Result<Json<PaymentResponse>, AppError> {
    let handler = PayHandler::new(state.payments);

    let result = handler.execute(PayCommand::new(request.amount)).await?;

    Ok(Json(PaymentResponse {
        payment_id: result.receipt.payment_id,
        amount: result.receipt.amount,
        paid_at: result.receipt.paid_at,
        confirmed: result.confirmed,
        message: result.message,
    }))
}
