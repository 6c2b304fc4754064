//! Pure domain logic for the studyhall summarization subsystem.
//!
//! Everything in this crate is synchronous and free of I/O so it can be
//! used from the repository layer, the services, and tests alike.

pub mod error;
pub mod summarize;
pub mod text_metrics;
pub mod types;
