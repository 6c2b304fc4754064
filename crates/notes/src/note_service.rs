//! Note editing surface consumed by the wider application.
//!
//! Every content-changing edit records exactly one version snapshot;
//! creating a note records version 1.

use sqlx::PgPool;
use studyhall_core::error::CoreError;
use studyhall_core::types::DbId;
use studyhall_db::models::note::{CreateNote, Note};
use studyhall_db::repositories::NoteRepo;

use crate::error::NotesResult;
use crate::versioning::NoteVersionTracker;

/// Change summary recorded for a note's first version.
const INITIAL_CHANGE_SUMMARY: &str = "Initial version";

/// Note create/edit operations that keep the version history in step.
pub struct NoteService;

impl NoteService {
    /// Create a note and record version 1 of its content.
    pub async fn create(
        pool: &PgPool,
        input: &CreateNote,
        editor: Option<DbId>,
    ) -> NotesResult<Note> {
        let note = NoteRepo::create(pool, input).await?;
        NoteVersionTracker::record_version(
            pool,
            note.id,
            &note.content,
            editor,
            Some(INITIAL_CHANGE_SUMMARY),
        )
        .await?;
        Ok(note)
    }

    /// Update a note's content, recording a new version when it changed.
    ///
    /// An edit that leaves the content byte-identical updates nothing and
    /// records no version.
    pub async fn update_content(
        pool: &PgPool,
        note_id: DbId,
        content: &str,
        editor: Option<DbId>,
        change_summary: Option<&str>,
    ) -> NotesResult<Note> {
        let existing = NoteRepo::find_by_id(pool, note_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "note",
                id: note_id,
            })?;

        if existing.content == content {
            return Ok(existing);
        }

        let note = NoteRepo::update_content(pool, note_id, content)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "note",
                id: note_id,
            })?;

        NoteVersionTracker::record_version(pool, note_id, content, editor, change_summary).await?;
        Ok(note)
    }
}
