//! Summary model.
//!
//! Summaries are immutable after creation; regenerating a summary inserts a
//! new row rather than editing one in place. "Latest" is defined by
//! `created_at` descending.

use serde::Serialize;
use sqlx::FromRow;
use studyhall_core::types::{DbId, Timestamp};

/// A row from the `summaries` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Summary {
    pub id: DbId,
    pub note_id: DbId,
    /// The generated summary text.
    pub content: String,
    /// Remote model identifier, or `"local-heuristic"` for the fallback.
    pub model: String,
    /// Word count of the summary text (not the source note).
    pub word_count: i32,
    pub reading_time_seconds: i32,
    /// Provider-reported confidence in `[0, 1]`, or the documented default
    /// for the path that produced this summary.
    pub confidence: f64,
    /// True when the local extractive heuristic produced this summary.
    pub is_fallback: bool,
    pub created_at: Timestamp,
}

/// DTO for inserting a summary. Built by the summarization service.
#[derive(Debug, Clone)]
pub struct CreateSummary {
    pub note_id: DbId,
    pub content: String,
    pub model: String,
    pub word_count: i32,
    pub reading_time_seconds: i32,
    pub confidence: f64,
    pub is_fallback: bool,
}
