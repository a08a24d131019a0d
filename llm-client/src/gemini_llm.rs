//! Gemini implementation of [`LlmClient`] over the generateContent REST endpoint.
//!
//! Gemini's conversation roles are `user` and `model`; system instructions travel as an
//! ordinary user turn (the persona pair built by the AI handler). An error body or an
//! empty candidate list is a completion failure.

use anyhow::Result;
use async_trait::async_trait;
use prompt::{ChatMessage, MessageRole};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GeminiConfig;
use crate::LlmClient;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiPart {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiContent {
    pub role: String,
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: i32,
    top_p: f32,
    max_output_tokens: i32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    error: Option<GeminiApiError>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiApiError {
    message: String,
}

/// Maps a [`ChatMessage`] to Gemini's wire content. System and User both become
/// `user`; Assistant becomes `model`.
fn chat_message_to_gemini(msg: &ChatMessage) -> GeminiContent {
    let role = match msg.role {
        MessageRole::System | MessageRole::User => "user",
        MessageRole::Assistant => "model",
    };
    GeminiContent {
        role: role.to_string(),
        parts: vec![GeminiPart {
            text: msg.content.clone(),
        }],
    }
}

/// Extracts the reply text from a decoded response body.
fn extract_response_text(resp: GeminiResponse) -> Result<String> {
    if let Some(err) = resp.error {
        anyhow::bail!("Gemini API error: {}", err.message);
    }
    resp.candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or_else(|| anyhow::anyhow!("No response generated from Gemini"))
}

#[derive(Clone)]
pub struct GeminiLlmClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    api_url: String,
}

impl GeminiLlmClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key,
            model: config.model,
            api_url: config.api_url,
        }
    }
}

#[async_trait]
impl LlmClient for GeminiLlmClient {
    async fn get_llm_response_with_messages(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let contents: Vec<GeminiContent> = messages.iter().map(chat_message_to_gemini).collect();
        let request = GeminiRequest {
            contents,
            generation_config: GenerationConfig::default(),
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.api_url, self.model, self.api_key
        );

        debug!(model = %self.model, messages = messages.len(), "Calling Gemini generateContent");

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to call Gemini API: {}", e))?;

        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to parse Gemini response: {}", e))?;

        extract_response_text(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_mapping() {
        assert_eq!(
            chat_message_to_gemini(&ChatMessage::user("hi")).role,
            "user"
        );
        assert_eq!(
            chat_message_to_gemini(&ChatMessage::system("persona")).role,
            "user"
        );
        assert_eq!(
            chat_message_to_gemini(&ChatMessage::assistant("ok")).role,
            "model"
        );
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let request = GeminiRequest {
            contents: vec![chat_message_to_gemini(&ChatMessage::user("hi"))],
            generation_config: GenerationConfig::default(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 1024);
        assert_eq!(json["generationConfig"]["topK"], 40);
    }

    #[test]
    fn test_extract_response_text_success() {
        let body = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "Rp 125.000 📮"}]}}
            ]
        }"#;
        let resp: GeminiResponse = serde_json::from_str(body).unwrap();
        assert_eq!(extract_response_text(resp).unwrap(), "Rp 125.000 📮");
    }

    #[test]
    fn test_extract_response_text_api_error() {
        let body = r#"{"error": {"message": "API key not valid"}}"#;
        let resp: GeminiResponse = serde_json::from_str(body).unwrap();
        let err = extract_response_text(resp).unwrap_err();
        assert!(err.to_string().contains("API key not valid"));
    }

    #[test]
    fn test_extract_response_text_no_candidates() {
        let resp: GeminiResponse = serde_json::from_str("{}").unwrap();
        let err = extract_response_text(resp).unwrap_err();
        assert!(err.to_string().contains("No response generated"));
    }
}
