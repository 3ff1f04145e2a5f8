//! User store configuration.

use std::env;

use common::DatabaseConfig;

/// Environment variable that overrides `DATABASE_URL` for this crate
pub const DATABASE_URL_VAR: &str = "USER_STORE_DATABASE_URL";

/// User store configuration.
#[derive(Debug, Clone)]
pub struct UserStoreConfig {
    pub database: DatabaseConfig,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl UserStoreConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env(DATABASE_URL_VAR),
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}
