//! Lowercase filter implementation.
//!
//! This module provides a filter that converts all token text to lowercase,
//! which is essential for case-insensitive search.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::analyzer::Analyzer;
//! use sarissa_analysis::analysis::token::{IntoTokenStream, Token};
//! use sarissa_analysis::analysis::token_filter::LowercaseFilter;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.transform(tokens.into_token_stream())
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use std::any::Any;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::serialized::SerializedForm;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// # Behavior
///
/// - Converts all characters to lowercase (Unicode-aware)
/// - Skips tokens marked as stopped
/// - Preserves token positions and offsets
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }

    /// Rebuild a filter from its serialized form.
    pub fn load(form: &SerializedForm) -> Result<Self> {
        form.expect_class("LowercaseFilter")?;
        Ok(LowercaseFilter)
    }
}

impl Analyzer for LowercaseFilter {
    fn transform(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else {
                    let lowered = token.text.to_lowercase();
                    token.with_text(lowered)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "LowercaseFilter"
    }

    fn dump(&self) -> SerializedForm {
        SerializedForm::new(self.name())
    }

    fn equals(&self, other: &dyn Analyzer) -> bool {
        other.as_any().is::<Self>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
