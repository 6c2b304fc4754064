//! Repository for the `note_versions` table.
//!
//! Versions are immutable snapshots created on note creation and on every
//! content-changing update. The `(note_id, version)` unique constraint is
//! the backstop against concurrent editors racing on the next number.

use sqlx::PgPool;
use studyhall_core::types::DbId;

use crate::models::note_version::NoteVersion;

/// Column list for note_versions queries.
const COLUMNS: &str = "id, note_id, version, content, created_by, change_summary, created_at";

/// Provides read and create operations for note versions.
pub struct NoteVersionRepo;

impl NoteVersionRepo {
    /// Insert a version snapshot.
    ///
    /// Fails with a unique-constraint violation when `version` already
    /// exists for the note; callers resolve that by re-reading the current
    /// maximum and retrying with the next number.
    pub async fn create(
        pool: &PgPool,
        note_id: DbId,
        version: i32,
        content: &str,
        created_by: Option<DbId>,
        change_summary: Option<&str>,
    ) -> Result<NoteVersion, sqlx::Error> {
        let query = format!(
            "INSERT INTO note_versions (note_id, version, content, created_by, change_summary)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NoteVersion>(&query)
            .bind(note_id)
            .bind(version)
            .bind(content)
            .bind(created_by)
            .bind(change_summary)
            .fetch_one(pool)
            .await
    }

    /// List all versions for a note, newest first.
    pub async fn list_by_note(
        pool: &PgPool,
        note_id: DbId,
    ) -> Result<Vec<NoteVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM note_versions
             WHERE note_id = $1
             ORDER BY version DESC"
        );
        sqlx::query_as::<_, NoteVersion>(&query)
            .bind(note_id)
            .fetch_all(pool)
            .await
    }

    /// Find a specific version of a note.
    pub async fn find_by_note_and_version(
        pool: &PgPool,
        note_id: DbId,
        version: i32,
    ) -> Result<Option<NoteVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM note_versions
             WHERE note_id = $1 AND version = $2"
        );
        sqlx::query_as::<_, NoteVersion>(&query)
            .bind(note_id)
            .bind(version)
            .fetch_optional(pool)
            .await
    }

    /// Current maximum version number for a note (0 if none exist).
    pub async fn max_version_number(pool: &PgPool, note_id: DbId) -> Result<i32, sqlx::Error> {
        let row: (i32,) =
            sqlx::query_as("SELECT COALESCE(MAX(version), 0) FROM note_versions WHERE note_id = $1")
                .bind(note_id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }
}
