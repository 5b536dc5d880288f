//! Error types for the Sarissa analysis library.
//!
//! All errors are represented by the [`SarissaError`] enum. Construction and
//! loading of analyzers fail atomically: when one of these errors is returned,
//! no partially built analyzer is observable.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::error::{SarissaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SarissaError::unsupported_language("xx"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Sarissa analysis operations.
#[derive(Error, Debug)]
pub enum SarissaError {
    /// I/O errors (reading dumps and config files from the CLI)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Processing errors raised by an analyzer while transforming tokens
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A language code that is malformed or has no default analysis chain
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// A serialized analyzer with a missing, mistyped or invalid field
    #[error("Malformed serialized form: {0}")]
    MalformedSerializedForm(String),

    /// A serialized analyzer whose type tag has no registered loader
    #[error("Unknown analyzer kind: {0}")]
    UnknownAnalyzerKind(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SarissaError.
pub type Result<T> = std::result::Result<T, SarissaError>;

impl SarissaError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SarissaError::Analysis(msg.into())
    }

    /// Create a new unsupported language error.
    pub fn unsupported_language<S: Into<String>>(msg: S) -> Self {
        SarissaError::UnsupportedLanguage(msg.into())
    }

    /// Create a new malformed serialized form error.
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        SarissaError::MalformedSerializedForm(msg.into())
    }

    /// Create a new unknown analyzer kind error.
    pub fn unknown_kind<S: Into<String>>(msg: S) -> Self {
        SarissaError::UnknownAnalyzerKind(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SarissaError::Other(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SarissaError::Other(format!("Invalid configuration: {}", msg.into()))
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SarissaError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
