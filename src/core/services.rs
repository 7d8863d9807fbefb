use crate::core::errors::{StoreError, TodoError};
use crate::core::models::user::{NewUser, User};
use crate::infrastructure::storage::Storage;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

pub struct UserService<S: Storage> {
    storage: S,
    store_timeout: Duration,
}

impl<S: Storage> UserService<S> {
    pub fn new(storage: S) -> Self {
        UserService {
            storage,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_store_timeout(mut self, store_timeout: Duration) -> Self {
        self.store_timeout = store_timeout;
        self
    }

    async fn with_deadline<T>(&self, op: impl Future<Output = Result<T, StoreError>>) -> Result<T, StoreError> {
        match tokio::time::timeout(self.store_timeout, op).await {
            Ok(result) => result,
            Err(_) => {
                warn!("Store call exceeded {:?}", self.store_timeout);
                Err(StoreError::Timeout)
            }
        }
    }

    fn require(field: &str, value: Option<String>) -> Result<String, TodoError> {
        match value {
            Some(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(TodoError::missing_field(field)),
        }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, TodoError> {
        let users = self.with_deadline(self.storage.find_all()).await?;
        debug!("Listed {} users", users.len());
        Ok(users)
    }

    /// Creates a user from the raw request fields. Only presence is checked;
    /// both values are passed to the store as given.
    pub async fn create_user(&self, name: Option<String>, email: Option<String>) -> Result<User, TodoError> {
        let name = Self::require("name", name)?;
        let email = Self::require("email", email)?;

        let new_user = NewUser { name, email };
        let user = match self.with_deadline(self.storage.create(new_user.clone())).await {
            Ok(user) => user,
            Err(StoreError::ConstraintViolation(reason)) => {
                debug!("Rejected user create: {}", reason);
                return Err(TodoError::EmailAlreadyRegistered(new_user.email));
            }
            Err(e) => return Err(e.into()),
        };
        info!("Created user {}", user.id);
        Ok(user)
    }
}
