//! Error types for designkit.
//!
//! This module defines the centralized error type [`DesignKitError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.
//!
//! The taxonomy is deliberately narrow. Only configuration problems are fatal to
//! the caller; persistence problems are absorbed by the theme store, and invalid
//! table interactions (out-of-range pages, unknown sort keys) are silent no-ops
//! that never produce an error at all.

use thiserror::Error;

/// The main error type for designkit operations.
///
/// # Examples
///
/// ```
/// use designkit::DesignKitError;
///
/// fn validate_page_size(page_size: usize) -> Result<(), DesignKitError> {
///     if page_size == 0 {
///         return Err(DesignKitError::Config("page_size must be positive".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_page_size(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum DesignKitError {
    /// Storage operation failed.
    ///
    /// Occurs when the preference store cannot be parsed or serialized. The
    /// string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid.
    ///
    /// Raised at construction time, e.g. a zero page size or duplicate column keys.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input dataset is malformed.
    ///
    /// Raised when a dataset file is not an array of objects with an `id` field.
    #[error("Data error: {0}")]
    Data(String),
}

/// A specialized `Result` type for designkit operations.
pub type Result<T> = std::result::Result<T, DesignKitError>;
