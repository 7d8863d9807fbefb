use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::core::errors::{StoreError, TodoError};

// Both fields are optional at the wire level so a missing one is reported
// as a presence failure instead of a deserialization error.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

// Error response struct
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Which user operation failed, used to pick the generic failure message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    ListUsers,
    CreateUser,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::ListUsers => "Failed to fetch users",
            Operation::CreateUser => "Failed to create user",
        }
    }
}

#[derive(Debug)]
pub struct ApiError {
    pub operation: Operation,
    pub error: TodoError,
}

impl ApiError {
    pub fn new(operation: Operation, error: TodoError) -> Self {
        ApiError { operation, error }
    }

    pub fn status(&self) -> StatusCode {
        match &self.error {
            TodoError::InvalidInput(..) => StatusCode::BAD_REQUEST,
            TodoError::EmailAlreadyRegistered(_) => StatusCode::CONFLICT,
            TodoError::Store(StoreError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
            TodoError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let error_message = match self.error {
            TodoError::InvalidInput(_, field_error) => field_error.description,
            TodoError::EmailAlreadyRegistered(email) => format!("Email {} already registered", email),
            TodoError::Store(err) => {
                // Store detail stays in the logs.
                error!(operation = ?self.operation, "Store failure: {}", err);
                self.operation.failure_message().to_string()
            }
        };
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}
