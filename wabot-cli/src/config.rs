//! Minimal bot configuration: database URL and log path.
//! External: loaded from environment variables DATABASE_URL, LOG_FILE.
//! Gemini and gateway access load their own config (GeminiConfig, GatewayConfig).

use anyhow::Result;
use std::env;

pub const DEFAULT_DATABASE_URL: &str = "wabot.db";

/// Bot runtime configuration.
pub struct BotConfig {
    pub database_url: String,
    pub log_file: Option<String>,
}

impl BotConfig {
    /// Loads from environment: DATABASE_URL and LOG_FILE both optional.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let log_file = env::var("LOG_FILE").ok();
        Ok(Self {
            database_url,
            log_file,
        })
    }

    /// Uses the given database URL, no log file.
    pub fn with_database_url(database_url: String) -> Self {
        Self {
            database_url,
            log_file: None,
        }
    }
}
