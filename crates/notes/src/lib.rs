//! Summarization and versioning services for study notes.
//!
//! Orchestrates the remote-summarizer-to-local-heuristic fallback and the
//! monotonic per-note version history on top of the `studyhall-db`
//! repositories.

pub mod error;
pub mod note_service;
pub mod summary_service;
pub mod versioning;

pub use error::{NotesError, NotesResult};
pub use note_service::NoteService;
pub use summary_service::SummarizationService;
pub use versioning::NoteVersionTracker;
