use crate::core::errors::StoreError;
use crate::core::models::user::{NewUser, User};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Users {
    rows: Vec<User>,
    emails: HashSet<String>,
}

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    users: Arc<RwLock<Users>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage::default()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.rows.clone())
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.emails.contains(&user.email) {
            return Err(StoreError::ConstraintViolation(format!(
                "email {} already exists",
                user.email
            )));
        }
        let created = user.into_user(Uuid::new_v4().to_string());
        users.emails.insert(created.email.clone());
        users.rows.push(created.clone());
        Ok(created)
    }
}
