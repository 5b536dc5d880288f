//! Text analysis module for Sarissa.
//!
//! This module provides the analyzers that turn text into tokens, the
//! composite [`PolyAnalyzer`](analyzer::PolyAnalyzer) that chains them per
//! language, and the serialized form used to store an analysis configuration
//! and rebuild it later.

pub mod analyzer;
pub mod batch;
pub mod language;
pub mod registry;
pub mod serialized;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use language::{Language, LanguageCode};
pub use registry::load;
pub use serialized::SerializedForm;
pub use token::*;
