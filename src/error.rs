//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading and processing
//! time-punch data.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use punch_engine::error::EngineError;
///
/// let error = EngineError::InputNotFound {
///     path: "/missing/data.json".to_string(),
/// };
/// assert_eq!(error.to_string(), "Input file not found: /missing/data.json");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Input file was not found at the specified path.
    #[error("Input file not found: {path}")]
    InputNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Input document could not be parsed.
    ///
    /// Covers malformed JSON, missing required fields, and malformed
    /// timestamps. All of these are fatal: the run produces no partial
    /// output.
    #[error("Failed to parse input '{source_name}': {message}")]
    InputParseError {
        /// The path or label of the document that failed to parse.
        source_name: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
