//! Chat-history repository: one row per phone number in `wa_chat_history`.
//!
//! The turn list is stored as a JSON column and written with an upsert, so a whole
//! conversation window is replaced in a single statement. Concurrent writers for the
//! same phone number race read-modify-write; the last upsert wins.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::StorageError;
use crate::models::ChatHistoryRecord;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct ChatHistoryRepository {
    pool_manager: SqlitePoolManager,
}

impl ChatHistoryRepository {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        Self::with_pool(pool_manager).await
    }

    /// Builds the repository on an existing pool (shared with other repositories).
    pub async fn with_pool(pool_manager: SqlitePoolManager) -> Result<Self, StorageError> {
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating wa_chat_history table if not exists");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS wa_chat_history (
                phone_number TEXT PRIMARY KEY,
                messages TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_phone(
        &self,
        phone_number: &str,
    ) -> Result<Option<ChatHistoryRecord>, StorageError> {
        let pool = self.pool_manager.pool();

        let row = sqlx::query_as::<_, (String, String, DateTime<Utc>)>(
            r#"
            SELECT phone_number, messages, updated_at
            FROM wa_chat_history
            WHERE phone_number = ?
            "#,
        )
        .bind(phone_number)
        .fetch_optional(pool)
        .await?;

        match row {
            Some((phone_number, messages_json, updated_at)) => {
                let messages = serde_json::from_str(&messages_json)?;
                Ok(Some(ChatHistoryRecord {
                    phone_number,
                    messages,
                    updated_at,
                }))
            }
            None => Ok(None),
        }
    }

    /// Insert-if-absent / replace-if-present, keyed by phone_number.
    pub async fn upsert(&self, history: &ChatHistoryRecord) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();
        let messages_json = serde_json::to_string(&history.messages)?;

        sqlx::query(
            r#"
            INSERT INTO wa_chat_history (phone_number, messages, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(phone_number) DO UPDATE SET
                messages = excluded.messages,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&history.phone_number)
        .bind(&messages_json)
        .bind(history.updated_at)
        .execute(pool)
        .await?;

        info!(
            phone = %history.phone_number,
            turns = history.messages.len(),
            "Upserted chat history"
        );
        Ok(())
    }

    /// Deletes the whole record. Idempotent; clearing an absent history is not an error.
    pub async fn clear(&self, phone_number: &str) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        sqlx::query("DELETE FROM wa_chat_history WHERE phone_number = ?")
            .bind(phone_number)
            .execute(pool)
            .await?;

        info!(phone = %phone_number, "Cleared chat history");
        Ok(())
    }
}
