use async_trait::async_trait;
use tracing::{debug, info, instrument};
use wabot_core::{HandlerResponse, Message, Middleware, Result};

/// Structured observation of every message entering and leaving the chain.
/// Injected instead of ad hoc printing so handler crates stay silent on their own.
pub struct LoggingMiddleware;

#[async_trait]
impl Middleware for LoggingMiddleware {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            phone = %message.from.phone,
            name = %message.from.name.as_deref().unwrap_or("unknown"),
            message_content = %message.content,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        debug!(
            message_id = ?message.id,
            response = ?response,
            "Processed message"
        );
        Ok(())
    }
}
