//! Assembly: wires repositories, handlers, and middleware into the handler chain.
//! Used by the binary and by integration tests (which pass a mock LlmClient).

use anyhow::Result;
use std::sync::Arc;

use ai_handlers::AiReplyHandler;
use handler_chain::HandlerChain;
use llm_client::LlmClient;
use middleware::LoggingMiddleware;
use note_handlers::NoteCommandHandler;
use storage::{ChatHistoryRepository, NoteRepository, SqlitePoolManager};
use tracing::info;

use crate::config::BotConfig;

/// A wired bot instance. The chain handles inbound messages; the AI handler is also
/// exposed directly for history management.
pub struct BotComponents {
    pub chain: HandlerChain,
    pub ai: AiReplyHandler,
}

/// Builds repositories on one shared pool and assembles the chain:
/// logging middleware, note commands first, AI fallback last.
pub async fn build_components(
    config: &BotConfig,
    llm_client: Arc<dyn LlmClient>,
) -> Result<BotComponents> {
    let pool = SqlitePoolManager::new(&config.database_url).await?;
    let notes = NoteRepository::with_pool(pool.clone()).await?;
    let history = ChatHistoryRepository::with_pool(pool).await?;

    let ai = AiReplyHandler::new(llm_client, history);
    let chain = HandlerChain::new()
        .add_middleware(Arc::new(LoggingMiddleware))
        .add_handler(Arc::new(NoteCommandHandler::new(notes)))
        .add_handler(Arc::new(ai.clone()));

    info!(database_url = %config.database_url, "Bot components assembled");
    Ok(BotComponents { chain, ai })
}
