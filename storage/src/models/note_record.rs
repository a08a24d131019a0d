//! Note record model for persistence.
//!
//! Maps to the `notes` table and is used by NoteRepository.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder title for saved notes; the user only ever supplies content.
pub const DEFAULT_NOTE_TITLE: &str = "Catatan";

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct NoteRecord {
    pub id: String,
    pub user_phone: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl NoteRecord {
    /// Creates a new record with a generated UUID and current timestamp.
    pub fn new(user_phone: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_phone: user_phone.into(),
            title: DEFAULT_NOTE_TITLE.to_string(),
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}
