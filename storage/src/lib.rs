//! Storage crate: note and chat-history persistence.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – NoteRecord, ChatTurn, ChatHistoryRecord
//! - [`note_repo`] – NoteRepository (SQLite, `notes` table)
//! - [`history_repo`] – ChatHistoryRepository (SQLite, `wa_chat_history` table, upsert)
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod history_repo;
mod models;
mod note_repo;
mod sqlite_pool;

pub use error::StorageError;
pub use history_repo::ChatHistoryRepository;
pub use models::{
    ChatHistoryRecord, ChatTurn, NoteRecord, TurnRole, DEFAULT_NOTE_TITLE, MAX_HISTORY_TURNS,
};
pub use note_repo::NoteRepository;
pub use sqlite_pool::SqlitePoolManager;
