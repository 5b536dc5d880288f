//! # Sarissa Analysis
//!
//! Language-aware text analysis chains for full-text indexing.
//!
//! ## Features
//!
//! - Composable analyzers: tokenizers, case folding, normalization, stop words, stemming
//! - Default analysis chains for 18 Snowball languages
//! - Self-describing serialized form for storing and rebuilding analyzers
//! - Structural equality between analyzers
//! - Parallel batch analysis

pub mod analysis;
pub mod cli;
pub mod error;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, AnalyzerChain, PolyAnalyzer};
    pub use crate::analysis::serialized::SerializedForm;
    pub use crate::analysis::token::{Token, TokenStream};
    pub use crate::error::{Result, SarissaError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
