//! Unicode word tokenizer implementation.
//!
//! This module provides a tokenizer that splits text using Unicode word boundary
//! rules (UAX #29). It handles international text and drops non-word segments
//! like punctuation and whitespace.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::analyzer::Analyzer;
//! use sarissa_analysis::analysis::tokenizer::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let words = tokenizer.split("Hello, world! café résumé").unwrap();
//!
//! assert_eq!(words, vec!["Hello", "world", "café", "résumé"]);
//! ```

use std::any::Any;

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::serialized::SerializedForm;
use crate::analysis::token::{IntoTokenStream, Token, TokenStream, TokenType};
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Each produced token is tagged with a [`TokenType`] detected from its
/// characters. The tokenizer has no configuration, so all instances are equal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }

    /// Rebuild a tokenizer from its serialized form.
    pub fn load(form: &SerializedForm) -> Result<Self> {
        form.expect_class("UnicodeWordTokenizer")?;
        Ok(UnicodeWordTokenizer)
    }

    /// Detect token type based on character content.
    fn detect_token_type(word: &str) -> TokenType {
        if word.is_empty() {
            return TokenType::Other;
        }

        if word.chars().all(|c| c.is_numeric()) {
            return TokenType::Num;
        }

        if word.chars().all(|c| matches!(c, '\u{3040}'..='\u{309F}')) {
            return TokenType::Hiragana;
        }

        if word.chars().all(|c| matches!(c, '\u{30A0}'..='\u{30FF}')) {
            return TokenType::Katakana;
        }

        if word
            .chars()
            .any(|c| matches!(c, '\u{AC00}'..='\u{D7AF}' | '\u{1100}'..='\u{11FF}'))
        {
            return TokenType::Hangul;
        }

        if word.chars().any(|c| {
            matches!(c,
                '\u{4E00}'..='\u{9FFF}' |  // CJK Unified Ideographs
                '\u{3400}'..='\u{4DBF}' |  // CJK Extension A
                '\u{20000}'..='\u{2A6DF}' | // CJK Extension B
                '\u{2A700}'..='\u{2CEAF}'   // CJK Extensions C-E
            )
        }) {
            return TokenType::Cjk;
        }

        if word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return TokenType::Alphanum;
        }

        TokenType::Other
    }
}

impl Analyzer for UnicodeWordTokenizer {
    fn transform(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut position = 0;
        let mut pending = 0;
        let mut output: Vec<Token> = Vec::new();

        for token in tokens {
            pending += token.position_increment;
            for (start, word) in token.text.split_word_bound_indices() {
                // Only keep actual words (not whitespace or punctuation)
                if !word.chars().any(|c| c.is_alphanumeric()) {
                    continue;
                }
                let sub = token
                    .sub_token(word, position, start, start + word.len())
                    .with_token_type(Self::detect_token_type(word));
                output.push(if pending > 1 {
                    sub.with_position_increment(pending)
                } else {
                    sub
                });
                pending = 0;
                position += 1;
            }
        }

        Ok(output.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "UnicodeWordTokenizer"
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
