//! # Birthsign Test Utilities
//!
//! Shared testing utilities for all crates:
//! - JSON fixture builders
//! - Temporary data files
//! - Property-based testing strategies

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod strategies;

/// Re-export proptest for convenience.
pub use proptest;
