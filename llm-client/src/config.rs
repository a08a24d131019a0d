//! Gemini client configuration.
//! External: loaded from environment variables GEMINIKEY, GEMINI_MODEL, GEMINI_API_URL.

use anyhow::Result;
use std::env;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini API access configuration.
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub api_url: String,
}

impl GeminiConfig {
    /// Loads from environment: GEMINIKEY required, GEMINI_MODEL and GEMINI_API_URL optional.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("GEMINIKEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("GEMINIKEY environment variable not set"))?;
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let api_url = env::var("GEMINI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Ok(Self {
            api_key,
            model,
            api_url,
        })
    }

    /// Uses the given key with default model and endpoint.
    pub fn with_api_key(api_key: String) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}
