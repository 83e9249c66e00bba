//! draftsmith-storage
//!
//! Persistence for the snippet library and the in-progress brief. Storage is
//! reached through the [`medium::StorageMedium`] trait so the library logic
//! does not care whether records live on disk or in memory.

pub mod brief_draft;
pub mod error;
pub mod library;
pub mod medium;
pub mod state;
