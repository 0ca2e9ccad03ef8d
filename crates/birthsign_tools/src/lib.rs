//! # Birthsign Tools
//!
//! Command-line tools for birthsign data files:
//! - Data validator
//! - Bonus viewer

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod show;
pub mod validate;

use birthsign_core::error::LoadError;
use thiserror::Error;

/// Errors that abort a tool command.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The data file could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// No birthsign matched the requested name.
    #[error("Birthsign not found: {0}")]
    NotFound(String),

    /// Writing the report failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type for tool commands.
pub type ToolResult<T> = Result<T, ToolError>;
