//! Monotonic note version tracking.
//!
//! Version numbers form a per-note contiguous sequence starting at 1. The
//! next number is computed optimistically from the current maximum; the
//! `(note_id, version)` unique constraint catches concurrent editors, and
//! the losing writer retries with a freshly read maximum.

use sqlx::PgPool;
use studyhall_core::error::CoreError;
use studyhall_core::types::DbId;
use studyhall_db::models::note_version::NoteVersion;
use studyhall_db::repositories::NoteVersionRepo;

use crate::error::{NotesError, NotesResult};

/// Insert attempts before a persistent conflict is surfaced to the caller.
pub const MAX_VERSION_ATTEMPTS: u32 = 3;

/// Records immutable content snapshots with monotonically increasing
/// version numbers.
pub struct NoteVersionTracker;

impl NoteVersionTracker {
    /// Record a full-content snapshot as the next version of `note_id`.
    ///
    /// Reads the current maximum version and inserts `max + 1`. A unique
    /// constraint violation means another editor won the race; the insert
    /// is retried with a re-read maximum, up to [`MAX_VERSION_ATTEMPTS`]
    /// times. Any other database error propagates unchanged.
    pub async fn record_version(
        pool: &PgPool,
        note_id: DbId,
        content: &str,
        created_by: Option<DbId>,
        change_summary: Option<&str>,
    ) -> NotesResult<NoteVersion> {
        for attempt in 1..=MAX_VERSION_ATTEMPTS {
            let next = NoteVersionRepo::max_version_number(pool, note_id).await? + 1;

            match NoteVersionRepo::create(pool, note_id, next, content, created_by, change_summary)
                .await
            {
                Ok(version) => return Ok(version),
                Err(err) if is_version_conflict(&err) => {
                    tracing::info!(
                        note_id,
                        version = next,
                        attempt,
                        "Version number taken by a concurrent edit, retrying"
                    );
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(NotesError::Core(CoreError::Conflict(format!(
            "Could not assign a version number for note {note_id} after {MAX_VERSION_ATTEMPTS} attempts"
        ))))
    }
}

/// True when the error is a unique-constraint violation on
/// `uq_note_versions_note_id_version` (PostgreSQL error code 23505).
fn is_version_conflict(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505")
                && db_err.constraint() == Some("uq_note_versions_note_id_version")
        }
        _ => false,
    }
}
