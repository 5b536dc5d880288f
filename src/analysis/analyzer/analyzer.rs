//! Core analyzer trait definition.
//!
//! This module defines the [`Analyzer`] trait, the single capability shared by
//! every stage of an analysis chain. Tokenizers, filters, stemmers and the
//! composite [`PolyAnalyzer`](super::poly::PolyAnalyzer) all implement it, so a
//! chain can hold any mix of them, including other chains.
//!
//! # Role in Analysis Pipeline
//!
//! ```text
//! Raw Text → PolyAnalyzer ─┬─ Analyzer 1 (analyze)
//!                          ├─ Analyzer 2 (transform)
//!                          └─ Analyzer N (transform) → Token Stream → Index
//! ```
//!
//! Besides transforming tokens, each analyzer can describe itself as a
//! [`SerializedForm`] and compare itself structurally with another analyzer.
//! The two are kept consistent: `a.equals(b)` holds exactly when
//! `a.dump() == b.dump()`.
//!
//! # Examples
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use std::any::Any;
//!
//! use sarissa_analysis::analysis::analyzer::Analyzer;
//! use sarissa_analysis::analysis::serialized::SerializedForm;
//! use sarissa_analysis::analysis::token::TokenStream;
//! use sarissa_analysis::error::Result;
//!
//! #[derive(Debug, PartialEq)]
//! struct ReverseFilter;
//!
//! impl Analyzer for ReverseFilter {
//!     fn transform(&self, tokens: TokenStream) -> Result<TokenStream> {
//!         Ok(Box::new(tokens.map(|t| {
//!             let reversed: String = t.text.chars().rev().collect();
//!             t.with_text(reversed)
//!         })))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "ReverseFilter"
//!     }
//!
//!     fn dump(&self) -> SerializedForm {
//!         SerializedForm::new(self.name())
//!     }
//!
//!     fn equals(&self, other: &dyn Analyzer) -> bool {
//!         other.as_any().downcast_ref::<Self>().is_some_and(|o| self == o)
//!     }
//!
//!     fn as_any(&self) -> &dyn Any {
//!         self
//!     }
//! }
//!
//! let words = ReverseFilter.split("stressed").unwrap();
//! assert_eq!(words, vec!["desserts"]);
//! ```

use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;

use crate::analysis::serialized::SerializedForm;
use crate::analysis::token::{TokenStream, text_stream};
use crate::error::Result;

/// Trait for analyzers that transform text or token streams.
///
/// # Thread Safety
///
/// The trait requires `Send + Sync`. Analyzers are immutable after
/// construction, so one instance can serve concurrent indexing and query
/// threads without locking.
pub trait Analyzer: Send + Sync + Debug {
    /// Transform a token stream produced by a previous stage.
    ///
    /// Errors raised here propagate unchanged through any composite that
    /// contains this analyzer.
    fn transform(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Analyze raw text.
    ///
    /// The default implementation hands the whole text to
    /// [`transform`](Self::transform) as a single token spanning `0..text.len()`.
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.transform(text_stream(text))
    }

    /// Analyze raw text and return only the token texts.
    fn split(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }

    /// The kind tag of this analyzer.
    ///
    /// This is the `_class` value written by [`dump`](Self::dump) and the key
    /// under which the analyzer's loader is registered.
    fn name(&self) -> &'static str;

    /// Describe this analyzer's configuration.
    fn dump(&self) -> SerializedForm;

    /// Structural equality with another analyzer of any kind.
    ///
    /// Returns `false` when `other` is a different concrete kind.
    fn equals(&self, other: &dyn Analyzer) -> bool;

    /// Provide access to the concrete type for downcasting.
    fn as_any(&self) -> &dyn Any;
}

/// An ordered sequence of analyzers applied one after another.
pub type AnalyzerChain = Vec<Arc<dyn Analyzer>>;

impl PartialEq for dyn Analyzer {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}
