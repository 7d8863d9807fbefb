use crate::api::handlers::{create_user, list_users, method_not_allowed};
use crate::api::models::{CreateUserRequest, ErrorResponse};
use crate::core::errors::StoreError;
use crate::core::models::user::User;
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use crate::tests::{FailingStorage, create_shared_service};
use axum::{
    Json,
    body::to_bytes,
    extract::State,
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

async fn read_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn alice() -> CreateUserRequest {
    CreateUserRequest {
        name: Some("Alice".to_string()),
        email: Some("alice@example.com".to_string()),
    }
}

#[tokio::test]
async fn test_get_users_empty_store() {
    let service = create_shared_service(InMemoryStorage::new());
    let response = list_users(State(service)).await.into_response();
    assert_eq!(response.status(), StatusCode::OK);
    let users: Vec<User> = read_json(response).await;
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_post_then_get_user() {
    let service = create_shared_service(InMemoryStorage::new());

    let response = create_user(State(service.clone()), Ok(Json(alice())))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: User = read_json(response).await;
    assert!(!created.id.is_empty());
    assert_eq!(created.name, "Alice");
    assert_eq!(created.email, "alice@example.com");

    let response = list_users(State(service)).await.into_response();
    let users: Vec<User> = read_json(response).await;
    assert_eq!(users, vec![created]);
}

#[tokio::test]
async fn test_post_store_failure_is_generic() {
    let service = create_shared_service(FailingStorage(StoreError::Unexpected("disk full".to_string())));
    let response = create_user(State(service), Ok(Json(alice()))).await.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorResponse = read_json(response).await;
    assert_eq!(body.error, "Failed to create user");
}

#[tokio::test]
async fn test_get_store_failure_is_generic() {
    let service = create_shared_service(FailingStorage(StoreError::Connection("refused".to_string())));
    let response = list_users(State(service)).await.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorResponse = read_json(response).await;
    assert_eq!(body.error, "Failed to fetch users");
}

#[tokio::test]
async fn test_store_timeout_maps_to_gateway_timeout() {
    let service = create_shared_service(FailingStorage(StoreError::Timeout));
    let response = list_users(State(service)).await.into_response();
    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    let body: ErrorResponse = read_json(response).await;
    assert_eq!(body.error, "Failed to fetch users");
}

#[tokio::test]
async fn test_post_missing_name_is_bad_request() {
    let service = create_shared_service(InMemoryStorage::new());
    let req = CreateUserRequest {
        name: None,
        email: Some("alice@example.com".to_string()),
    };
    let response = create_user(State(service.clone()), Ok(Json(req))).await.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = read_json(response).await;
    assert_eq!(body.error, "name is required");

    let users: Vec<User> = read_json(list_users(State(service)).await.into_response()).await;
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_post_duplicate_email_is_conflict() {
    let service = create_shared_service(InMemoryStorage::new());
    create_user(State(service.clone()), Ok(Json(alice()))).await.unwrap();

    let response = create_user(State(service), Ok(Json(alice()))).await.into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: ErrorResponse = read_json(response).await;
    assert_eq!(body.error, "Email alice@example.com already registered");
}

#[tokio::test]
async fn test_unsupported_method() {
    let response = method_not_allowed(Method::DELETE).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers()[header::ALLOW], "GET, POST");
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"Method DELETE Not Allowed");
}
