//! Per-phone-number conversation history, bounded to the most recent turns.
//!
//! One record per phone number; persisted by ChatHistoryRepository as a single row
//! (turn list as a JSON column) so the upsert is the atomicity unit.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::chat_turn::ChatTurn;

/// Maximum turns kept per conversation. An exchange adds two turns (user + assistant);
/// anything older than the most recent window is dropped, oldest first.
pub const MAX_HISTORY_TURNS: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatHistoryRecord {
    pub phone_number: String,
    pub messages: Vec<ChatTurn>,
    pub updated_at: chrono::DateTime<Utc>,
}

impl ChatHistoryRecord {
    /// Creates an empty history for a phone number (lazily, on first exchange).
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            messages: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    /// Appends a user/assistant exchange, enforces the window, and touches `updated_at`.
    /// Invariant: `messages.len() <= MAX_HISTORY_TURNS` on return.
    pub fn append_exchange(
        &mut self,
        user_content: impl Into<String>,
        assistant_content: impl Into<String>,
    ) {
        let now = Utc::now();
        self.messages.push(ChatTurn::user(user_content, now));
        self.messages.push(ChatTurn::assistant(assistant_content, now));

        if self.messages.len() > MAX_HISTORY_TURNS {
            let excess = self.messages.len() - MAX_HISTORY_TURNS;
            self.messages.drain(..excess);
        }

        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chat_turn::TurnRole;

    #[test]
    fn test_append_exchange_adds_two_turns() {
        let mut history = ChatHistoryRecord::new("628111");
        history.append_exchange("hi", "hello");

        assert_eq!(history.messages.len(), 2);
        assert_eq!(history.messages[0].role, TurnRole::User);
        assert_eq!(history.messages[0].content, "hi");
        assert_eq!(history.messages[1].role, TurnRole::Assistant);
        assert_eq!(history.messages[1].content, "hello");
    }

    #[test]
    fn test_window_holds_min_2n_or_max_turns() {
        let mut history = ChatHistoryRecord::new("628111");
        for n in 1..=8 {
            history.append_exchange(format!("q{}", n), format!("a{}", n));
            assert_eq!(
                history.messages.len(),
                usize::min(2 * n, MAX_HISTORY_TURNS)
            );
        }
    }

    #[test]
    fn test_eviction_is_strict_fifo() {
        let mut history = ChatHistoryRecord::new("628111");
        for n in 1..=7 {
            history.append_exchange(format!("q{}", n), format!("a{}", n));
        }

        // 14 turns written, window keeps the last 10: q3/a3 .. q7/a7.
        assert_eq!(history.messages.len(), MAX_HISTORY_TURNS);
        assert_eq!(history.messages[0].content, "q3");
        assert_eq!(history.messages[9].content, "a7");
    }

    #[test]
    fn test_updated_at_touched_on_append() {
        let mut history = ChatHistoryRecord::new("628111");
        let before = history.updated_at;
        history.append_exchange("q", "a");
        assert!(history.updated_at >= before);
    }
}
