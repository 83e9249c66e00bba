//! draftsmith-export
//!
//! Download files for snippet sets (CSV, JSON, plain text) and markdown
//! renderings of generated sections.

pub mod error;
pub mod formats;
pub mod render;
