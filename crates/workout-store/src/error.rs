use common::InvalidUsername;
use thiserror::Error;

use crate::Username;

/// Errors that can occur when reading or writing workout data.
#[derive(Debug, Error)]
pub enum WorkoutStoreError {
    /// A log was written for a user that has no `users` row.
    #[error("Unknown user: {0}")]
    UnknownUser(Username),

    /// A numeric value does not fit the column it is stored in.
    #[error("Value out of range for {field}: {value}")]
    ValueOutOfRange { field: &'static str, value: i64 },

    /// A stored row carried a username that fails validation.
    #[error("Invalid stored username: {0}")]
    InvalidUsername(#[from] InvalidUsername),

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Result type for workout store operations.
pub type Result<T> = std::result::Result<T, WorkoutStoreError>;
