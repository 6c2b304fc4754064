//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod note_repo;
pub mod note_version_repo;
pub mod summary_repo;

pub use note_repo::NoteRepo;
pub use note_version_repo::NoteVersionRepo;
pub use summary_repo::SummaryRepo;
