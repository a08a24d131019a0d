//! AI reply handler: builds the prompt from the persona pair plus the stored
//! conversation window, calls the completion service, and commits the exchange.
//!
//! Failure asymmetry: a history read or write problem degrades context but never fails
//! the turn; a completion failure is the one error that does, because without it there
//! is no reply to send.

use async_trait::async_trait;
use llm_client::LlmClient;
use prompt::{ChatMessage, ASSISTANT_ACK, SYSTEM_PROMPT};
use std::sync::Arc;
use storage::{ChatHistoryRecord, ChatHistoryRepository, ChatTurn, TurnRole};
use tracing::{info, instrument, warn};
use wabot_core::{Handler, HandlerResponse, Message, Result, WabotError};

#[derive(Clone)]
pub struct AiReplyHandler {
    llm_client: Arc<dyn LlmClient>,
    history: ChatHistoryRepository,
}

impl AiReplyHandler {
    pub fn new(llm_client: Arc<dyn LlmClient>, history: ChatHistoryRepository) -> Self {
        Self {
            llm_client,
            history,
        }
    }

    /// Message sequence for the completion call: persona pair, stored turns in
    /// chronological order, then the new user turn.
    fn build_messages(history_turns: &[ChatTurn], user_message: &str) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(history_turns.len() + 3);
        messages.push(ChatMessage::user(SYSTEM_PROMPT));
        messages.push(ChatMessage::assistant(ASSISTANT_ACK));
        for turn in history_turns {
            messages.push(match turn.role {
                TurnRole::User => ChatMessage::user(turn.content.clone()),
                TurnRole::Assistant => ChatMessage::assistant(turn.content.clone()),
            });
        }
        messages.push(ChatMessage::user(user_message));
        messages
    }

    /// Produces the AI reply for one user message and commits the exchange to history.
    pub async fn respond(&self, phone_number: &str, user_message: &str) -> Result<String> {
        let mut record = match self.history.find_by_phone(phone_number).await {
            Ok(found) => found.unwrap_or_else(|| ChatHistoryRecord::new(phone_number)),
            Err(e) => {
                warn!(phone = %phone_number, error = %e, "Failed to get history, continuing without");
                ChatHistoryRecord::new(phone_number)
            }
        };

        let messages = Self::build_messages(&record.messages, user_message);
        info!(
            phone = %phone_number,
            context_turns = record.messages.len(),
            "Requesting AI completion"
        );

        let reply = self
            .llm_client
            .get_llm_response_with_messages(messages)
            .await
            .map_err(|e| WabotError::Completion(e.to_string()))?;

        record.append_exchange(user_message, &reply);
        if let Err(e) = self.history.upsert(&record).await {
            // Reply is already computed; the write failure only costs context.
            warn!(phone = %phone_number, error = %e, "Failed to save chat history");
        }

        Ok(reply)
    }

    /// Deletes the stored conversation. Idempotent.
    pub async fn clear_history(&self, phone_number: &str) -> Result<()> {
        self.history
            .clear(phone_number)
            .await
            .map_err(|e| WabotError::Database(e.to_string()))
    }
}

#[async_trait]
impl Handler for AiReplyHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let reply = self.respond(&message.from.phone, &message.content).await?;
        Ok(HandlerResponse::Reply(reply))
    }
}
