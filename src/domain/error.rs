//! Error types for the Forkful plugin.
//!
//! This module defines the centralized error type [`ForkfulError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Forkful plugin operations.
///
/// This enum consolidates all error conditions that can occur during plugin execution.
/// The core state model has no fallible transitions; errors only arise at the edges
/// (screen-slot persistence, theme parsing, host configuration). Most variants wrap
/// underlying errors from external crates using `#[from]` for automatic conversion.
///
/// # Examples
///
/// ```
/// use forkful::domain::ForkfulError;
///
/// fn validate_config() -> Result<(), ForkfulError> {
///     Err(ForkfulError::Config("Missing required field".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum ForkfulError {
    /// Screen-slot persistence failed.
    ///
    /// Occurs when the restore slot cannot be serialized or written. Reads never
    /// produce this error; a broken slot falls back to the default screen.
    #[error("Restore error: {0}")]
    Restore(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    ///
    /// Occurs when one of the built-in palette files cannot be parsed.
    /// The string contains a description of what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when host-provided configuration values are malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Forkful operations.
///
/// This is a type alias for `std::result::Result<T, ForkfulError>` that simplifies
/// function signatures throughout the codebase.
///
/// # Examples
///
/// ```
/// use forkful::domain::Result;
///
/// fn persist_screen() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ForkfulError>;
