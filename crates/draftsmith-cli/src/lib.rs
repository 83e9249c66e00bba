//! draftsmith-cli library root.
//!
//! The binary is a thin shell over these modules; integration tests drive
//! the command handlers directly.

pub mod cli;
pub mod commands;
pub mod config;
pub mod state;
