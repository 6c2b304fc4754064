//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, plus create DTOs for inserts where the caller supplies
//! the fields.

pub mod note;
pub mod note_version;
pub mod summary;
