//! Fonnte implementation of [`OutboundChannel`].
//!
//! The Fonnte send API takes form-urlencoded fields (target, message, countryCode) with
//! the token in the Authorization header. A success body that fails to parse is logged
//! and tolerated; a parsed body with status=false is a delivery error.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info, warn};
use wabot_core::{Result, WabotError};

use crate::channel::OutboundChannel;
use crate::config::GatewayConfig;

#[derive(Debug, Deserialize)]
struct FonnteResponse {
    #[serde(default)]
    status: bool,
    #[serde(default)]
    reason: String,
    #[serde(default)]
    detail: String,
}

/// Group targets carry the WhatsApp group suffix.
fn is_group_target(to: &str) -> bool {
    to.contains("@g.us")
}

pub struct FonnteChannel {
    http: reqwest::Client,
    token: String,
    api_url: String,
    country_code: String,
}

impl FonnteChannel {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            token: config.token,
            api_url: config.api_url,
            country_code: config.country_code,
        }
    }
}

#[async_trait]
impl OutboundChannel for FonnteChannel {
    async fn send_message(&self, to: &str, text: &str) -> Result<()> {
        if is_group_target(to) {
            info!(target = %to, "Sending to group");
        }

        let params = [
            ("target", to),
            ("message", text),
            ("countryCode", self.country_code.as_str()),
        ];

        debug!(target = %to, "Fonnte send");

        let response = self
            .http
            .post(&self.api_url)
            .header(reqwest::header::AUTHORIZATION, self.token.as_str())
            .form(&params)
            .send()
            .await
            .map_err(|e| WabotError::Gateway(format!("Failed to send request: {}", e)))?;

        let status_code = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| WabotError::Gateway(format!("Failed to read response: {}", e)))?;

        debug!(status = %status_code, body = %body, "Fonnte response");

        let parsed: FonnteResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) => {
                // Request was accepted; the body is informational only.
                warn!(error = %e, raw = %body, "Fonnte response parse error");
                return Ok(());
            }
        };

        if !parsed.status {
            return Err(WabotError::Gateway(format!(
                "fonnte error: {} (reason: {})",
                parsed.detail, parsed.reason
            )));
        }

        info!(target = %to, "Fonnte message sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_group_target() {
        assert!(is_group_target("12036304@g.us"));
        assert!(!is_group_target("6281234567890"));
    }

    #[test]
    fn test_response_parse_success() {
        let body = r#"{"status": true, "detail": "success", "reason": ""}"#;
        let parsed: FonnteResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.status);
    }

    #[test]
    fn test_response_parse_failure_fields() {
        let body = r#"{"status": false, "reason": "token invalid", "detail": "unauthorized"}"#;
        let parsed: FonnteResponse = serde_json::from_str(body).unwrap();
        assert!(!parsed.status);
        assert_eq!(parsed.reason, "token invalid");
        assert_eq!(parsed.detail, "unauthorized");
    }
}
