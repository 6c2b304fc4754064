//! Repository for the `summaries` table.
//!
//! Summaries are append-only: there is deliberately no update method, and
//! regeneration always inserts a new row.

use sqlx::PgPool;
use studyhall_core::types::DbId;

use crate::models::summary::{CreateSummary, Summary};

/// Column list for summaries queries.
const COLUMNS: &str = "id, note_id, content, model, word_count, reading_time_seconds, \
    confidence, is_fallback, created_at";

/// Provides create, read, and delete operations for note summaries.
pub struct SummaryRepo;

impl SummaryRepo {
    /// Insert a new summary, returning the stored row with its assigned id.
    pub async fn create(pool: &PgPool, input: &CreateSummary) -> Result<Summary, sqlx::Error> {
        let query = format!(
            "INSERT INTO summaries
                (note_id, content, model, word_count, reading_time_seconds, confidence, is_fallback)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Summary>(&query)
            .bind(input.note_id)
            .bind(&input.content)
            .bind(&input.model)
            .bind(input.word_count)
            .bind(input.reading_time_seconds)
            .bind(input.confidence)
            .bind(input.is_fallback)
            .fetch_one(pool)
            .await
    }

    /// Find a summary by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Summary>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM summaries WHERE id = $1");
        sqlx::query_as::<_, Summary>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The most recent summary for a note, if any exists.
    pub async fn find_latest_by_note(
        pool: &PgPool,
        note_id: DbId,
    ) -> Result<Option<Summary>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM summaries
             WHERE note_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, Summary>(&query)
            .bind(note_id)
            .fetch_optional(pool)
            .await
    }

    /// List all summaries for a note, newest first.
    pub async fn list_by_note(pool: &PgPool, note_id: DbId) -> Result<Vec<Summary>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM summaries
             WHERE note_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Summary>(&query)
            .bind(note_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a summary by ID. Returns `true` when a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM summaries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
