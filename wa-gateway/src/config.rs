//! Gateway configuration.
//! External: loaded from environment variables FONNTETOKEN, FONNTE_API_URL, WA_COUNTRY_CODE.

use anyhow::Result;
use std::env;

pub const DEFAULT_API_URL: &str = "https://api.fonnte.com/send";
pub const DEFAULT_COUNTRY_CODE: &str = "62";

/// Fonnte gateway access configuration.
pub struct GatewayConfig {
    pub token: String,
    pub api_url: String,
    pub country_code: String,
}

impl GatewayConfig {
    /// Loads from environment: FONNTETOKEN required, FONNTE_API_URL and WA_COUNTRY_CODE optional.
    pub fn from_env() -> Result<Self> {
        let token = env::var("FONNTETOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("FONNTETOKEN not set"))?;
        let api_url = env::var("FONNTE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let country_code =
            env::var("WA_COUNTRY_CODE").unwrap_or_else(|_| DEFAULT_COUNTRY_CODE.to_string());
        Ok(Self {
            token,
            api_url,
            country_code,
        })
    }

    /// Uses the given token with default endpoint and country code.
    pub fn with_token(token: String) -> Self {
        Self {
            token,
            api_url: DEFAULT_API_URL.to_string(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
        }
    }
}
