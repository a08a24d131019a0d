//! # AI handlers
//!
//! The generative fallback for the handler chain: answers anything the note commands
//! did not match, with a bounded per-phone conversation window for context.

mod ai_reply_handler;

pub use ai_reply_handler::AiReplyHandler;
