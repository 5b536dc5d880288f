//! Stop filter implementation.
//!
//! This module provides a filter that removes common words (stop words) that
//! typically don't contribute to search relevance. Stop word lists for the
//! supported languages come from the `stop-words` crate; custom lists are
//! also accepted.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::analyzer::Analyzer;
//! use sarissa_analysis::analysis::token::{IntoTokenStream, Token};
//! use sarissa_analysis::analysis::token_filter::StopFilter;
//!
//! let filter = StopFilter::new("en").unwrap();
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("rust", 1),
//!     Token::new("compiler", 2)
//! ];
//!
//! let result: Vec<_> = filter.transform(tokens.into_token_stream())
//!     .unwrap()
//!     .collect();
//!
//! // "the" is removed as a stop word
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "rust");
//! assert_eq!(result[1].text, "compiler");
//! ```

use std::any::Any;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::language::{Language, LanguageCode};
use crate::analysis::serialized::SerializedForm;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, SarissaError};

/// A filter that removes stop words from the token stream.
///
/// The filter either removes stop words entirely, adding their count to the
/// position increment of the next kept token, or marks them as stopped while
/// keeping them in the stream.
///
/// A filter built for a language dumps only its language code; a filter built
/// from a custom word list dumps the sorted list.
#[derive(Clone, Debug, PartialEq)]
pub struct StopFilter {
    /// Language the word list was taken from, if any
    language: Option<LanguageCode>,
    /// The set of stop words to remove
    stop_words: Arc<BTreeSet<String>>,
    /// Whether to remove stopped tokens entirely or just mark them as stopped
    remove_stopped: bool,
}

impl StopFilter {
    /// Create a stop filter with the stop word list of a language.
    pub fn new(language: &str) -> Result<Self> {
        let code = LanguageCode::new(language)?;
        let language = Language::require(&code)?;
        Ok(Self::for_language(language))
    }

    /// Create a stop filter for a supported language.
    pub fn for_language(language: Language) -> Self {
        let stop_words: BTreeSet<String> = language
            .to_stop_words_language()
            .map(|list| {
                stop_words::get(list)
                    .into_iter()
                    .map(|word| word.to_string())
                    .collect()
            })
            .unwrap_or_default();

        StopFilter {
            language: Some(LanguageCode::from(language)),
            stop_words: Arc::new(stop_words),
            remove_stopped: true,
        }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use sarissa_analysis::analysis::token_filter::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// assert!(filter.language().is_none());
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            language: None,
            stop_words: Arc::new(words.into_iter().map(|s| s.into()).collect()),
            remove_stopped: true,
        }
    }

    /// Set whether to remove stopped tokens entirely or just mark them as stopped.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// The language the word list was taken from.
    pub fn language(&self) -> Option<&LanguageCode> {
        self.language.as_ref()
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }

    /// Rebuild a stop filter from its serialized form.
    pub fn load(form: &SerializedForm) -> Result<Self> {
        form.expect_class("StopFilter")?;
        let filter = match form.get_opt_str("language")? {
            Some(language) => {
                Self::new(language).map_err(|e| SarissaError::malformed(e.to_string()))?
            }
            None => Self::from_words(form.get_strings("stop_words")?),
        };
        Ok(filter.remove_stopped(form.get_bool("remove_stopped")?))
    }
}

impl Analyzer for StopFilter {
    fn transform(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut skipped = 0;
        let mut filtered_tokens: Vec<Token> = Vec::new();

        for token in tokens {
            if !token.is_stopped() && self.is_stop_word(&token.text) {
                if self.remove_stopped {
                    skipped += token.position_increment;
                } else {
                    filtered_tokens.push(token.stop());
                }
                continue;
            }

            if skipped > 0 {
                let increment = token.position_increment + skipped;
                filtered_tokens.push(token.with_position_increment(increment));
                skipped = 0;
            } else {
                filtered_tokens.push(token);
            }
        }

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "StopFilter"
    }

    fn dump(&self) -> SerializedForm {
        let form =
            SerializedForm::new(self.name()).with_field("remove_stopped", self.remove_stopped);
        match &self.language {
            Some(language) => form.with_field("language", language.as_str()),
            None => form.with_field(
                "stop_words",
                self.stop_words.iter().cloned().collect::<Vec<_>>(),
            ),
        }
    }

    fn equals(&self, other: &dyn Analyzer) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
