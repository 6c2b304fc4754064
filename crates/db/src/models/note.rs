//! Note model.
//!
//! Notes are owned by the wider CRUD application; the summarization core
//! only reads `content` and is notified of edits.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use studyhall_core::types::{DbId, Timestamp};

/// A row from the `notes` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Note {
    pub id: DbId,
    pub course_id: Option<DbId>,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a note.
#[derive(Debug, Deserialize)]
pub struct CreateNote {
    pub course_id: Option<DbId>,
    pub title: String,
    pub content: String,
}
