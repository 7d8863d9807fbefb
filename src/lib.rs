pub mod api;
pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;
pub mod pages;
pub mod telemetry;

pub use crate::api::handlers::SharedUserService;
pub use crate::app::build_router;
pub use crate::core::errors::{StoreError, TodoError};
pub use crate::core::models::user::{NewUser, User};
pub use crate::core::services::UserService;
pub use crate::infrastructure::storage::{Storage, in_memory::InMemoryStorage, sqlite::SqliteStorage};

#[cfg(test)]
mod tests;
