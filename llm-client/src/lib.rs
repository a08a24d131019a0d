//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait and a Gemini implementation. Transport-agnostic;
//! the AI handler depends on the trait only, so tests can substitute a mock and a
//! different completion backend can be dropped in without touching the handlers.

use anyhow::Result;
use async_trait::async_trait;
use prompt::ChatMessage;

mod config;
mod gemini_llm;

pub use config::GeminiConfig;
pub use gemini_llm::{GeminiContent, GeminiLlmClient, GeminiPart};

/// LLM client interface: request a completion from a list of messages.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model reply text for the given messages (persona pair, history,
    /// current user turn). The caller assembles the full sequence; implementations
    /// only translate it to their wire format.
    async fn get_llm_response_with_messages(&self, messages: Vec<ChatMessage>) -> Result<String>;
}
