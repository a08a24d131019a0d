//! Channel abstraction for sending messages.
//!
//! Implementations map to a delivery provider; the core never names one.

use async_trait::async_trait;
use wabot_core::Result;

/// Abstraction for outbound message delivery. Injected at construction time so the
/// bot core stays provider-agnostic.
#[async_trait]
pub trait OutboundChannel: Send + Sync {
    /// Sends a text message to the given recipient (phone number or group id).
    async fn send_message(&self, to: &str, text: &str) -> Result<()>;
}
