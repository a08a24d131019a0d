mod chat_history_record;
mod chat_turn;
mod note_record;

pub use chat_history_record::{ChatHistoryRecord, MAX_HISTORY_TURNS};
pub use chat_turn::{ChatTurn, TurnRole};
pub use note_record::{NoteRecord, DEFAULT_NOTE_TITLE};
