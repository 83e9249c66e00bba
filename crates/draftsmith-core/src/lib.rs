//! draftsmith-core
//!
//! Pure domain types and the deterministic parts of the content pipeline:
//! brief validation, content fingerprints, output parsing, and the
//! extraction contract. No I/O. This is the shared vocabulary of Draftsmith.

pub mod error;
pub mod extract;
pub mod hash;
pub mod models;
pub mod parse;
pub mod storage_keys;
pub mod text;
pub mod validate;
