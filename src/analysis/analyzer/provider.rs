//! Default analysis chains per language.
//!
//! A [`ChainProvider`] turns a language code into the chain a
//! [`PolyAnalyzer`](super::poly::PolyAnalyzer) uses when the caller does not
//! supply one. The built-in [`DefaultChainProvider`] produces:
//!
//! ```text
//! LowercaseFilter → RegexTokenizer → [StopFilter] → SnowballStemmer
//! ```
//!
//! with each stage switched by a [`ChainConfig`].

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::analyzer::AnalyzerChain;
use crate::analysis::language::{Language, LanguageCode};
use crate::analysis::token_filter::{LowercaseFilter, SnowballStemmer, StopFilter};
use crate::analysis::tokenizer::{DEFAULT_PATTERN, RegexTokenizer};
use crate::error::{Result, SarissaError};

/// Resolves the default analysis chain for a language.
pub trait ChainProvider: Send + Sync {
    /// Build the chain for `language`.
    ///
    /// Fails with `UnsupportedLanguage` when the provider has no chain for it.
    fn resolve(&self, language: &LanguageCode) -> Result<AnalyzerChain>;
}

/// Configuration for the stages of the default chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Lowercase text before tokenizing.
    pub case_fold: bool,
    /// Pattern used by the tokenizer.
    pub pattern: String,
    /// Remove the language's stop words.
    pub stop_words: bool,
    /// Apply the language's Snowball stemmer.
    pub stem: bool,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            case_fold: true,
            pattern: DEFAULT_PATTERN.to_string(),
            stop_words: false,
            stem: true,
        }
    }
}

impl ChainConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| SarissaError::invalid_config(format!("chain config: {e}")))
    }

    /// Read a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

/// The built-in provider covering every [`Language`].
#[derive(Debug, Clone, Default)]
pub struct DefaultChainProvider {
    config: ChainConfig,
}

impl DefaultChainProvider {
    /// Create a provider with a custom configuration.
    pub fn new(config: ChainConfig) -> Self {
        Self { config }
    }

    /// Get the provider's configuration.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }
}

impl ChainProvider for DefaultChainProvider {
    fn resolve(&self, language: &LanguageCode) -> Result<AnalyzerChain> {
        let language = Language::require(language)?;
        let mut chain: AnalyzerChain = Vec::with_capacity(4);

        if self.config.case_fold {
            chain.push(Arc::new(LowercaseFilter::new()));
        }
        chain.push(Arc::new(
            RegexTokenizer::with_pattern(&self.config.pattern)
                .map_err(|e| SarissaError::invalid_config(e.to_string()))?,
        ));
        if self.config.stop_words {
            chain.push(Arc::new(StopFilter::for_language(language)));
        }
        if self.config.stem {
            chain.push(Arc::new(SnowballStemmer::for_language(language)));
        }

        Ok(chain)
    }
}
