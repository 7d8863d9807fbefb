mod handler_tests;

use crate::core::errors::StoreError;
use crate::core::models::user::{NewUser, User};
use crate::core::services::UserService;
use crate::infrastructure::storage::{Storage, in_memory::InMemoryStorage};
use async_trait::async_trait;
use std::sync::Arc;

pub fn create_test_service() -> UserService<InMemoryStorage> {
    UserService::new(InMemoryStorage::new())
}

pub fn create_shared_service(storage: impl Storage + 'static) -> crate::SharedUserService {
    Arc::new(UserService::new(Box::new(storage) as Box<dyn Storage>))
}

/// Store whose every call fails with the given error.
pub struct FailingStorage(pub StoreError);

#[async_trait]
impl Storage for FailingStorage {
    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        Err(self.0.clone())
    }

    async fn create(&self, _user: NewUser) -> Result<User, StoreError> {
        Err(self.0.clone())
    }
}

/// Store that never answers.
pub struct HangingStorage;

#[async_trait]
impl Storage for HangingStorage {
    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        std::future::pending().await
    }

    async fn create(&self, _user: NewUser) -> Result<User, StoreError> {
        std::future::pending().await
    }
}
