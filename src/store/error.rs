//! Booking Store Errors

/// Errors that can occur while writing customers or bookings
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The insert completed without writing a row
    #[error("Insert failed, no rows affected")]
    NoRowsAffected,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Check if the database could not be reached at all
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            StoreError::Database(sqlx::Error::Io(_))
                | StoreError::Database(sqlx::Error::PoolTimedOut)
                | StoreError::Database(sqlx::Error::PoolClosed)
                | StoreError::Database(sqlx::Error::Tls(_))
        )
    }
}
