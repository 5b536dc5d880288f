//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split text into word tokens. They are ordinary
//! [`Analyzer`](crate::analysis::analyzer::Analyzer)s: given raw text they
//! tokenize all of it, and given a token stream they split each incoming token
//! on its own, keeping offsets relative to the original text. This lets a
//! tokenizer sit anywhere in a chain, for example after a case folder.
//!
//! # Available Tokenizers
//!
//! - [`RegexTokenizer`] - Extracts matches of a regular expression
//! - [`UnicodeWordTokenizer`] - Uses Unicode word boundaries (UAX #29)
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::analyzer::Analyzer;
//! use sarissa_analysis::analysis::tokenizer::RegexTokenizer;
//!
//! let tokenizer = RegexTokenizer::with_pattern(r"\S+").unwrap();
//! let tokens: Vec<_> = tokenizer.analyze("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

pub mod regex;
pub mod unicode_word;

pub use self::regex::{DEFAULT_PATTERN, RegexTokenizer};
pub use self::unicode_word::UnicodeWordTokenizer;
