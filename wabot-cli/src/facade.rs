//! **Public API of this crate.** Turns one decoded `(sender, message)` pair into a
//! reply. Webhook decoding and delivery stay outside; the caller sends whatever this
//! returns through its outbound channel.

use anyhow::Result;
use chrono::Utc;
use handler_chain::HandlerChain;
use uuid::Uuid;
use wabot_core::{Contact, HandlerResponse, Message, MessageDirection};

/// Runs one inbound message through the chain. Returns `Some(reply)` when a handler
/// produced one; a completion failure surfaces as an error and the caller decides
/// what, if anything, to tell the user.
pub async fn process_message(
    chain: &HandlerChain,
    from: &str,
    raw_message: &str,
) -> Result<Option<String>> {
    let message = Message {
        id: Uuid::new_v4().to_string(),
        from: Contact {
            phone: from.to_string(),
            name: None,
        },
        content: raw_message.to_string(),
        message_type: "text".to_string(),
        direction: MessageDirection::Incoming,
        created_at: Utc::now(),
    };

    match chain.handle(&message).await? {
        HandlerResponse::Reply(text) => Ok(Some(text)),
        _ => Ok(None),
    }
}
