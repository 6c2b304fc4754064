//! Note version model.
//!
//! Versions are immutable full-content snapshots, created once per
//! content-changing edit. Note creation records version 1.

use serde::Serialize;
use sqlx::FromRow;
use studyhall_core::types::{DbId, Timestamp};

/// A row from the `note_versions` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct NoteVersion {
    pub id: DbId,
    pub note_id: DbId,
    /// Per-note sequence number, contiguous and starting at 1.
    pub version: i32,
    /// Full content snapshot, not a diff.
    pub content: String,
    pub created_by: Option<DbId>,
    pub change_summary: Option<String>,
    pub created_at: Timestamp,
}
