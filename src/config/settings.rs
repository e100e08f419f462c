//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use super::constants::{
    DEFAULT_COLLECTION_NAME, DEFAULT_DATABASE_NAME, DEFAULT_MONGODB_URL, DEFAULT_SECURITY_LOG_PATH,
};
use crate::errors::{AppError, AppResult};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub mongodb_url: String,
    pub database_name: String,
    pub collection_name: String,
    pub security_log_path: PathBuf,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("mongodb_url", &"[REDACTED]")
            .field("database_name", &self.database_name)
            .field("collection_name", &self.collection_name)
            .field("security_log_path", &self.security_log_path)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mongodb_url: DEFAULT_MONGODB_URL.to_string(),
            database_name: DEFAULT_DATABASE_NAME.to_string(),
            collection_name: DEFAULT_COLLECTION_NAME.to_string(),
            security_log_path: PathBuf::from(DEFAULT_SECURITY_LOG_PATH),
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Blank values fall back to defaults. Names must be non-empty after
    /// trimming, since MongoDB rejects empty database and collection names.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let config = Self {
            mongodb_url: get("MONGODB_URL", DEFAULT_MONGODB_URL),
            database_name: get("MONGODB_DATABASE", DEFAULT_DATABASE_NAME),
            collection_name: get("MONGODB_COLLECTION", DEFAULT_COLLECTION_NAME),
            security_log_path: PathBuf::from(get("SECURITY_LOG_PATH", DEFAULT_SECURITY_LOG_PATH)),
        };

        if !config.mongodb_url.starts_with("mongodb://")
            && !config.mongodb_url.starts_with("mongodb+srv://")
        {
            return Err(AppError::Config(
                "MONGODB_URL must start with mongodb:// or mongodb+srv://".to_string(),
            ));
        }

        Ok(config)
    }

    /// Override the security log path (CLI flag wins over environment).
    pub fn with_log_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.security_log_path = path;
        }
        self
    }
}
