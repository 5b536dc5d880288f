//! Token types and utilities for text analysis.
//!
//! This module defines the data structures that flow between the stages of an
//! analysis chain.
//!
//! # Core Types
//!
//! - [`Token`] - A single analyzed token with text, position, and offsets
//! - [`TokenType`] - Classification of token content (alphanumeric, CJK, etc.)
//! - [`TokenStream`] - Type alias for boxed iterator of tokens
//!
//! A token stream is finite and order-preserving, but it can only be consumed
//! once. Collect it into a `Vec<Token>` to walk it again, and use
//! [`IntoTokenStream`] to turn the vector back into a stream.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::token::Token;
//!
//! let token = Token::with_offsets("world", 1, 6, 11);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! assert_eq!(token.boost, 1.0);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
///
/// # Fields
///
/// - `text` - The token's text content
/// - `position` - Position in the token stream (0-based)
/// - `start_offset` / `end_offset` - Byte offsets in the original text
/// - `boost` - Scoring weight multiplier (default: 1.0)
/// - `stopped` - Whether the token was marked as a stop word
/// - `position_increment` - Position relative to previous token (default: 1)
/// - `token_type` - Optional content classification
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Boost factor for this token (default: 1.0)
    pub boost: f32,

    /// Whether this token has been marked as stopped by a filter
    pub stopped: bool,

    /// Position increment from the previous token (default: 1).
    ///
    /// A stop filter that removes tokens adds the removed count to the
    /// increment of the next surviving token, so phrase positions stay intact.
    pub position_increment: usize,

    /// Content classification set by tokenizers that detect it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<TokenType>,
}

/// Token type classification for different kinds of tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Alphanumeric text (English, Latin scripts)
    Alphanum,
    /// Numeric values
    Num,
    /// CJK (Chinese, Japanese, Korean) ideographs
    Cjk,
    /// Katakana characters (Japanese)
    Katakana,
    /// Hiragana characters (Japanese)
    Hiragana,
    /// Hangul characters (Korean)
    Hangul,
    /// Other/unknown token types
    Other,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Self::with_offsets(text, position, 0, 0)
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            boost: 1.0,
            stopped: false,
            position_increment: 1,
            token_type: None,
        }
    }

    /// Get the length of the token text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Set the boost factor for this token.
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = boost;
        self
    }

    /// Mark this token as stopped.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    /// Check if this token is stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = Some(token_type);
        self
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }

    /// Set the position increment.
    pub fn with_position_increment(mut self, increment: usize) -> Self {
        self.position_increment = increment;
        self
    }

    /// Create a token for the slice `start..end` of this token's text.
    ///
    /// Offsets are translated to the original text. The boost and stop flag
    /// are carried over.
    pub fn sub_token<S: Into<String>>(
        &self,
        text: S,
        position: usize,
        start: usize,
        end: usize,
    ) -> Self {
        Token {
            boost: self.boost,
            stopped: self.stopped,
            ..Token::with_offsets(
                text,
                position,
                self.start_offset + start,
                self.start_offset + end,
            )
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Build a stream holding the whole text as a single token.
///
/// This is the input every analyzer sees when it is handed raw text instead
/// of the output of a previous stage.
pub fn text_stream(text: &str) -> TokenStream {
    vec![Token::with_offsets(text, 0, 0, text.len())].into_token_stream()
}

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_token_carries_attributes() {
        let parent = Token::with_offsets("big dogs", 4, 10, 18)
            .with_boost(2.0)
            .stop();
        let child = parent.sub_token("dogs", 0, 4, 8);

        assert_eq!(child.text, "dogs");
        assert_eq!(child.position, 0);
        assert_eq!((child.start_offset, child.end_offset), (14, 18));
        assert_eq!(child.boost, 2.0);
        assert!(child.is_stopped());
        assert_eq!(child.position_increment, 1);
    }

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
        assert_eq!(token.boost, 1.0);
        assert_eq!(token.position_increment, 1);
        assert!(!token.stopped);
        assert!(token.token_type.is_none());
    }

    #[test]
    fn test_token_methods() {
        let token = Token::new("test", 0)
            .with_boost(2.0)
            .stop()
            .with_token_type(TokenType::Alphanum)
            .with_position_increment(3);

        assert_eq!(token.boost, 2.0);
        assert!(token.is_stopped());
        assert_eq!(token.token_type, Some(TokenType::Alphanum));
        assert_eq!(token.position_increment, 3);

        let renamed = token.with_text("other");
        assert_eq!(renamed.text, "other");
        assert_eq!(renamed.boost, 2.0);
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("hello", 0);
        assert_eq!(format!("{token}"), "hello");
    }

    #[test]
    fn test_text_stream() {
        let tokens: Vec<Token> = text_stream("Hello World").collect();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "Hello World");
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 11);
    }

    #[test]
    fn test_token_stream() {
        let tokens = vec![Token::new("hello", 0), Token::new("world", 1)];

        let collected: Vec<_> = tokens.into_token_stream().collect();

        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].text, "hello");
        assert_eq!(collected[1].text, "world");
    }
}
