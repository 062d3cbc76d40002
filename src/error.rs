//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::payment::PaymentError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Domain errors
    #[error(transparent)]
    Domain(#[from] crate::domain::DomainError),
}

impl From<PaymentError> for AppError {
    fn from(err: PaymentError) -> Self {
        AppError::Domain(crate::domain::DomainError::PaymentRejected(err.to_string()))
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, details) = match &self {
            // Domain errors - map to appropriate HTTP status
            AppError::Domain(domain_err) => {
                use crate::domain::DomainError;
                match domain_err {
                    DomainError::InvalidInput(msg) => {
                        (StatusCode::BAD_REQUEST, "invalid_input", Some(msg.clone()))
                    }
                    DomainError::PaymentRejected(msg) => {
                        (StatusCode::PAYMENT_REQUIRED, "payment_rejected", Some(msg.clone()))
                    }
                }
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
            error_code: error_code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}
