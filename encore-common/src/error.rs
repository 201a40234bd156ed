//! Common error types for Encore

use thiserror::Error;

/// Common result type for Encore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the Encore service
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested row not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Foreign-key or required-field constraint failure on a write
    #[error("Integrity violation: {0}")]
    IntegrityViolation(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Classify a failed write: constraint violations become
    /// `IntegrityViolation`, everything else stays a `Database` error.
    pub fn from_write_error(err: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind;

        if let Some(db_err) = err.as_database_error() {
            match db_err.kind() {
                ErrorKind::ForeignKeyViolation => {
                    return Error::IntegrityViolation(format!(
                        "foreign key constraint failed: {}",
                        db_err.message()
                    ));
                }
                ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                    return Error::IntegrityViolation(format!(
                        "constraint failed: {}",
                        db_err.message()
                    ));
                }
                _ => {}
            }
        }

        Error::Database(err)
    }
}
