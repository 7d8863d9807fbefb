use crate::core::errors::StoreError;
use crate::core::models::user::{NewUser, User};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE
)";

/// Relational user store backed by a SQLite connection pool.
#[derive(Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Opens the database at `database_url` and makes sure the `users` table exists.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(map_sqlx_error)?
            .create_if_missing(true);

        // An in-memory database lives only as long as its connection.
        let pool_options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options.connect_with(options).await.map_err(map_sqlx_error)?;
        sqlx::query(CREATE_USERS_TABLE)
            .execute(&pool)
            .await
            .map_err(map_sqlx_error)?;

        info!("Connected to SQLite user store");
        Ok(SqliteStorage { pool })
    }
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>("SELECT id, name, email FROM users ORDER BY rowid")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        debug!("Fetched {} users", users.len());
        Ok(users)
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let created = user.into_user(Uuid::new_v4().to_string());
        sqlx::query("INSERT INTO users (id, name, email) VALUES (?, ?, ?)")
            .bind(created.id.as_str())
            .bind(created.name.as_str())
            .bind(created.email.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        debug!("Inserted user {}", created.id);
        Ok(created)
    }
}

fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            StoreError::ConstraintViolation(db.message().to_string())
        }
        sqlx::Error::RowNotFound => StoreError::NotFound(err.to_string()),
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            StoreError::Connection(err.to_string())
        }
        _ => StoreError::Unexpected(err.to_string()),
    }
}
