use crate::{
    api::models::{ApiError, CreateUserRequest, ErrorResponse, Operation},
    core::{models::user::User, services::UserService},
    infrastructure::storage::Storage,
};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use std::sync::Arc;
use tracing::debug;

use crate::core::errors::{FieldError, TodoError};

pub type SharedUserService = Arc<UserService<Box<dyn Storage>>>;

pub const ALLOWED_METHODS: &str = "GET, POST";

// Define API routes
pub fn api_routes(service: SharedUserService) -> Router {
    Router::new()
        .route(
            "/users",
            get(list_users)
                .post(create_user)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .with_state(service)
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users in creation order", body = Vec<User>),
        (status = 500, description = "Failed to fetch users", body = ErrorResponse),
        (status = 504, description = "Store did not answer in time", body = ErrorResponse)
    )
)]
pub async fn list_users(State(service): State<SharedUserService>) -> Result<Json<Vec<User>>, ApiError> {
    let users = service
        .list_users()
        .await
        .map_err(|e| ApiError::new(Operation::ListUsers, e))?;
    Ok(Json(users))
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Missing name or email", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Failed to create user", body = ErrorResponse),
        (status = 504, description = "Store did not answer in time", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(service): State<SharedUserService>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        debug!("Rejected user payload: {}", rejection.body_text());
        ApiError::new(
            Operation::CreateUser,
            TodoError::InvalidInput(
                "body".to_string(),
                FieldError {
                    field: "body".to_string(),
                    title: "Invalid body".to_string(),
                    description: "Request body must be a JSON object with name and email".to_string(),
                },
            ),
        )
    })?;

    let user = service
        .create_user(req.name, req.email)
        .await
        .map_err(|e| ApiError::new(Operation::CreateUser, e))?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn method_not_allowed(method: Method) -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, ALLOWED_METHODS)],
        format!("Method {} Not Allowed", method),
    )
        .into_response()
}
