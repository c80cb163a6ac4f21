//! Error types for photofinder.
//!
//! This module defines the centralized error type [`PhotofinderError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Errors only surface while loading a catalog or a configuration. Constraint
//! mutation and query evaluation are infallible.

use thiserror::Error;

/// The main error type for photofinder operations.
///
/// # Examples
///
/// ```
/// use photofinder::PhotofinderError;
///
/// fn validate_config() -> Result<(), PhotofinderError> {
///     Err(PhotofinderError::Config("missing catalog_path".to_string()))
/// }
///
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum PhotofinderError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog document could not be decoded.
    ///
    /// Occurs when the source is not valid JSON or does not have the expected
    /// top-level shape.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// A record in the catalog violates the data model.
    ///
    /// Raised at load time so that structural problems never reach the query
    /// engine.
    #[error("Invalid record {id}: {reason}")]
    InvalidRecord {
        /// Identifier of the offending record.
        id: u64,
        /// Human-readable description of the violation.
        reason: String,
    },

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for photofinder operations.
pub type Result<T> = std::result::Result<T, PhotofinderError>;
