//! Error types for the AIRS tax engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading the tax schedule
//! or resolving taxpayer data against it.

use thiserror::Error;

/// The main error type for the AIRS tax engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application. The
/// assessment itself is a total function over its numeric inputs and never
/// produces an error.
///
/// # Example
///
/// ```
/// use airs_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Model class code was not found in the configuration registry.
    #[error("Model class not found: {code}")]
    ModelClassNotFound {
        /// The model class code that was not found.
        code: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
