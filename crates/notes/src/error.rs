use studyhall_core::error::CoreError;

/// Errors surfaced by the summarization and versioning services.
///
/// Remote summarizer failures never appear here: the fallback path absorbs
/// them. Storage failures propagate unchanged.
#[derive(Debug, thiserror::Error)]
pub enum NotesError {
    /// A domain-level error (validation, not-found, version conflict).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience alias for service return values.
pub type NotesResult<T> = Result<T, NotesError>;
