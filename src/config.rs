use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

pub struct Config {
    pub port: u16,
    /// SQLite URL; when unset users are kept in memory.
    pub database_url: Option<String>,
    pub log_level: String,
    pub store_timeout: Duration,
    pub request_timeout: Duration,
}

impl core::fmt::Debug for Config {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("log_level", &self.log_level)
            .field("store_timeout", &self.store_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

fn secs_var(name: &str, default: u64) -> Duration {
    Duration::from_secs(env::var(name).ok().and_then(|v| v.parse().ok()).unwrap_or(default))
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        Self {
            port: env::var("PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(3000),
            database_url: env::var("DATABASE_URL").ok().filter(|v| !v.trim().is_empty()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            store_timeout: secs_var("STORE_TIMEOUT_SECS", 5),
            request_timeout: secs_var("REQUEST_TIMEOUT_SECS", 30),
        }
    }
}

// Global static accessible everywhere
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
