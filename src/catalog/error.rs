//! Catalog-specific error types
//!
//! This module defines all error types that can occur while loading and
//! decoding the recipe catalog. All errors implement `std::error::Error`
//! via the `thiserror` crate and provide helpful error messages.

use thiserror::Error;

/// Catalog-specific errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Represents an I/O error while reading a catalog file
    #[error("Error while reading catalog: {0}")]
    IoError(#[from] std::io::Error),

    /// Represents a JSON decoding error
    #[error("Error while decoding catalog: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// Catalog file does not exist on the filesystem
    #[error("Catalog not found: {0}")]
    NotFound(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
