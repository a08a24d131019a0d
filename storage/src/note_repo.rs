//! Note repository: persistence and queries for user notes.
//!
//! Uses SqlitePoolManager and the NoteRecord model. Callers address notes by the
//! stored id; the user-facing 1-based ordinal is resolved against `find_by_user`,
//! whose order is stable insertion order.

use crate::error::StorageError;
use crate::models::NoteRecord;
use crate::sqlite_pool::SqlitePoolManager;
use tracing::info;

#[derive(Clone)]
pub struct NoteRepository {
    pool_manager: SqlitePoolManager,
}

impl NoteRepository {
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
        info!("Creating notes table if not exists");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS notes (
                id TEXT PRIMARY KEY,
                user_phone TEXT NOT NULL,
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_notes_user_phone ON notes(user_phone)
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn save(&self, note: &NoteRecord) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            INSERT INTO notes (id, user_phone, title, content, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&note.id)
        .bind(&note.user_phone)
        .bind(&note.title)
        .bind(&note.content)
        .bind(note.created_at)
        .execute(pool)
        .await?;

        info!(note_id = %note.id, user_phone = %note.user_phone, "Saved note");
        Ok(())
    }

    /// All notes for one user, in insertion order (rowid breaks created_at ties).
    /// The index of each note here, plus one, is the ordinal the user sees.
    pub async fn find_by_user(&self, user_phone: &str) -> Result<Vec<NoteRecord>, StorageError> {
        let pool = self.pool_manager.pool();

        let notes = sqlx::query_as::<_, NoteRecord>(
            r#"
            SELECT id, user_phone, title, content, created_at
            FROM notes
            WHERE user_phone = ?
            ORDER BY created_at ASC, rowid ASC
            "#,
        )
        .bind(user_phone)
        .fetch_all(pool)
        .await?;

        Ok(notes)
    }

    /// Deletes by stored id, not ordinal. Returns false when no row matched.
    pub async fn delete_by_id(&self, id: &str) -> Result<bool, StorageError> {
        let pool = self.pool_manager.pool();

        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        info!(note_id = %id, deleted, "Deleted note");
        Ok(deleted)
    }
}
