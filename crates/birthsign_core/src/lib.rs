//! # Birthsign Core
//!
//! Data model and structural validation for birthsign data files.
//!
//! A birthsign data file is a JSON array of records, each with a `name`, an
//! optional base `bonus` and an optional `enhanced_bonus`. Validation is a
//! single pass that collects every problem instead of stopping at the first.
//!
//! ## Crate Structure
//!
//! - [`data`] - Birthsign and bonus types
//! - [`validate`] - Structural checks and the validation report
//! - [`loader`] - Reading data files from disk
//! - [`describe`] - Plain-text bonus summaries
//! - [`error`] - Fatal load errors

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod data;
pub mod describe;
pub mod error;
pub mod loader;
pub mod validate;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::data::{Birthsign, BonusDetail, BonusField, BonusType};
    pub use crate::error::{LoadError, Result};
    pub use crate::loader::{load_birthsigns, validate_file, DEFAULT_DATA_FILE};
    pub use crate::validate::{validate_birthsigns, ValidationIssue, ValidationReport};
}
