use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

/// Failure kinds a store implementation can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached or the connection dropped
    #[error("Connection error: {0}")]
    Connection(String),

    /// A uniqueness or integrity constraint rejected the write
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    /// The store did not answer within the configured deadline
    #[error("Store operation timed out")]
    Timeout,

    #[error("Unexpected store error: {0}")]
    Unexpected(String),
}

#[derive(Error, Debug)]
pub enum TodoError {
    /// Generic input validation error with detailed field information
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),

    /// Email is already registered
    #[error("Email {0} already registered")]
    EmailAlreadyRegistered(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl TodoError {
    pub fn missing_field(field: &str) -> Self {
        TodoError::InvalidInput(
            field.to_string(),
            FieldError {
                field: field.to_string(),
                title: format!("Missing {}", field),
                description: format!("{} is required", field),
            },
        )
    }
}
