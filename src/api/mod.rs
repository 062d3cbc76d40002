//! API module
//!
//! HTTP API endpoints and middleware.

pub mod middleware;
pub mod routes;

use sqlx::PgPool;

use crate::payment::PaymentSimulator;

pub use routes::create_router;

/// Shared state handed to every route
#[derive(Debug, Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub payments: PaymentSimulator,
}

impl AppState {
    pub fn new(pool: PgPool, payments: PaymentSimulator) -> Self {
        Self { pool, payments }
    }
}
