use crate::core::errors::StoreError;
use crate::core::models::user::{NewUser, User};
use async_trait::async_trait;

#[async_trait]
pub trait Storage: Send + Sync {
    /// All users in the order they were created.
    async fn find_all(&self) -> Result<Vec<User>, StoreError>;
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;
}

// Lets the backend be picked at startup behind a `Box<dyn Storage>`.
#[async_trait]
impl<T: Storage + ?Sized> Storage for Box<T> {
    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        (**self).find_all().await
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        (**self).create(user).await
    }
}

pub mod in_memory;
pub mod sqlite;
