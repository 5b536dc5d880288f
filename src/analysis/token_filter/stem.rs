//! Snowball stemming filter.
//!
//! Reduces each token to its stem with the Snowball algorithm for a language,
//! via the `rust-stemmers` crate.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::analyzer::Analyzer;
//! use sarissa_analysis::analysis::token::{IntoTokenStream, Token};
//! use sarissa_analysis::analysis::token_filter::SnowballStemmer;
//!
//! let stemmer = SnowballStemmer::new("en").unwrap();
//! let tokens = vec![Token::new("running", 0), Token::new("flies", 1)];
//! let stemmed: Vec<_> = stemmer.transform(tokens.into_token_stream())
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(stemmed, vec!["run", "fli"]);
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use rust_stemmers::Stemmer;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::language::{Language, LanguageCode};
use crate::analysis::serialized::SerializedForm;
use crate::analysis::token::TokenStream;
use crate::error::{Result, SarissaError};

/// Filter that applies Snowball stemming to tokens.
#[derive(Clone)]
pub struct SnowballStemmer {
    language: LanguageCode,
    stemmer: Arc<Stemmer>,
}

impl SnowballStemmer {
    /// Create a stemmer for a language code.
    ///
    /// Fails with `UnsupportedLanguage` when the code is malformed or no
    /// Snowball algorithm exists for it.
    pub fn new(language: &str) -> Result<Self> {
        let code = LanguageCode::new(language)?;
        let language = Language::require(&code)?;
        Ok(Self::for_language(language))
    }

    /// Create a stemmer for a supported language.
    pub fn for_language(language: Language) -> Self {
        SnowballStemmer {
            language: LanguageCode::from(language),
            stemmer: Arc::new(Stemmer::create(language.to_algorithm())),
        }
    }

    /// The language this stemmer was built for.
    pub fn language(&self) -> &LanguageCode {
        &self.language
    }

    /// Stem a single word.
    pub fn stem<'a>(&self, word: &'a str) -> std::borrow::Cow<'a, str> {
        self.stemmer.stem(word)
    }

    /// Rebuild a stemmer from its serialized form.
    pub fn load(form: &SerializedForm) -> Result<Self> {
        form.expect_class("SnowballStemmer")?;
        let language = form.get_str("language")?;
        Self::new(language).map_err(|e| SarissaError::malformed(e.to_string()))
    }
}

impl PartialEq for SnowballStemmer {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language
    }
}

impl fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("language", &self.language)
            .finish()
    }
}

impl Analyzer for SnowballStemmer {
    fn transform(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else {
                    let stemmed = self.stem(&token.text).into_owned();
                    token.with_text(stemmed)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "SnowballStemmer"
    }

    fn dump(&self) -> SerializedForm {
        SerializedForm::new(self.name()).with_field("language", self.language.as_str())
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
