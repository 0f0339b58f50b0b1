//! Search-specific error types
//!
//! This module defines error types raised by the filter engine. In practice
//! the only failure mode is a match pattern that fails to compile, which the
//! escaping step should rule out; the engine still propagates it rather than
//! panicking mid-pass.

use thiserror::Error;

/// Search-specific errors
#[derive(Debug, Error)]
pub enum SearchError {
    /// A match pattern could not be compiled from user input
    #[error("Invalid pattern built from '{input}': {source}")]
    PatternError {
        /// The normalized input the pattern was built from
        input: String,
        /// The underlying regex failure
        source: regex::Error,
    },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
