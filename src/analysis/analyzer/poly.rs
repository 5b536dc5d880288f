//! Composite analyzer built from an ordered chain of analyzers.
//!
//! A [`PolyAnalyzer`] threads text through each of its children in order: the
//! first child analyzes the raw text, every following child transforms the
//! tokens produced by the one before it. Children may themselves be
//! `PolyAnalyzer`s.
//!
//! The chain is either resolved from a language code by a
//! [`ChainProvider`] or supplied explicitly. In both cases the language code is
//! kept: it takes part in equality and is written to the serialized form, so
//! an analyzer stored at index time is rebuilt identically at query time.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::analyzer::{Analyzer, PolyAnalyzer};
//!
//! let english = PolyAnalyzer::new("en", None).unwrap();
//! let spanish = PolyAnalyzer::new("es", None).unwrap();
//! assert!(!english.equals(&spanish));
//!
//! let words = english.split("The Runners were running").unwrap();
//! assert_eq!(words, vec!["the", "runner", "were", "run"]);
//!
//! // Dump => Load round trip
//! let clone = PolyAnalyzer::load(&english.dump()).unwrap();
//! assert!(english.equals(&clone));
//! ```

use std::any::Any;
use std::fmt;

use log::debug;

use crate::analysis::analyzer::analyzer::{Analyzer, AnalyzerChain};
use crate::analysis::analyzer::provider::{ChainProvider, DefaultChainProvider};
use crate::analysis::language::LanguageCode;
use crate::analysis::registry::{AnalyzerRegistry, default_registry};
use crate::analysis::serialized::SerializedForm;
use crate::analysis::token::TokenStream;
use crate::error::{Result, SarissaError};

/// A language-aware chain of analyzers.
///
/// Immutable after construction: no child is added, removed or reordered.
#[derive(Clone)]
pub struct PolyAnalyzer {
    language: Option<LanguageCode>,
    analyzers: AnalyzerChain,
}

impl PolyAnalyzer {
    /// Create a composite for `language`.
    ///
    /// With `analyzers == None` the chain is resolved by the
    /// [`DefaultChainProvider`]. With an explicit chain, that chain is used
    /// verbatim, even if it is empty.
    pub fn new(language: &str, analyzers: Option<AnalyzerChain>) -> Result<Self> {
        match analyzers {
            Some(analyzers) => Ok(PolyAnalyzer {
                language: Some(LanguageCode::new(language)?),
                analyzers,
            }),
            None => Self::with_provider(language, &DefaultChainProvider::default()),
        }
    }

    /// Create a composite with the default chain for `language`.
    pub fn for_language(language: &str) -> Result<Self> {
        Self::new(language, None)
    }

    /// Create a composite whose chain is resolved by `provider`.
    pub fn with_provider(language: &str, provider: &dyn ChainProvider) -> Result<Self> {
        let language = LanguageCode::new(language)?;
        let analyzers = provider.resolve(&language)?;
        debug!(
            "resolved default chain for '{}': [{}]",
            language,
            chain_names(&analyzers)
        );

        Ok(PolyAnalyzer {
            language: Some(language),
            analyzers,
        })
    }

    /// Create a composite from an explicit chain with no language.
    pub fn from_analyzers(analyzers: AnalyzerChain) -> Self {
        PolyAnalyzer {
            language: None,
            analyzers,
        }
    }

    /// The language this composite was built for.
    pub fn language(&self) -> Option<&LanguageCode> {
        self.language.as_ref()
    }

    /// The children, in application order.
    pub fn analyzers(&self) -> &AnalyzerChain {
        &self.analyzers
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.analyzers.len()
    }

    /// Check if the chain is empty (the identity analyzer).
    pub fn is_empty(&self) -> bool {
        self.analyzers.is_empty()
    }

    /// Rebuild a composite from its serialized form with the default registry.
    pub fn load(form: &SerializedForm) -> Result<Self> {
        Self::load_with(form, default_registry())
    }

    /// Rebuild a composite from its serialized form.
    ///
    /// Children are dispatched through `registry` by their own kind tags.
    pub fn load_with(form: &SerializedForm, registry: &AnalyzerRegistry) -> Result<Self> {
        form.expect_class("PolyAnalyzer")?;

        let language = form.get_opt_str("language")?;
        let analyzers = form
            .get_forms("analyzers")?
            .iter()
            .map(|child| registry.load(child))
            .collect::<Result<AnalyzerChain>>()?;

        match language {
            Some(language) => Self::new(language, Some(analyzers))
                .map_err(|e| SarissaError::malformed(e.to_string())),
            None => Ok(Self::from_analyzers(analyzers)),
        }
    }
}

fn chain_names(analyzers: &AnalyzerChain) -> String {
    analyzers
        .iter()
        .map(|analyzer| analyzer.name())
        .collect::<Vec<_>>()
        .join(", ")
}

impl PartialEq for PolyAnalyzer {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language
            && self.analyzers.len() == other.analyzers.len()
            && self
                .analyzers
                .iter()
                .zip(&other.analyzers)
                .all(|(a, b)| a.equals(b.as_ref()))
    }
}

impl Analyzer for PolyAnalyzer {
    fn transform(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut tokens = tokens;
        for analyzer in &self.analyzers {
            tokens = analyzer.transform(tokens)?;
        }
        Ok(tokens)
    }

    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let Some((first, rest)) = self.analyzers.split_first() else {
            return self.transform(crate::analysis::token::text_stream(text));
        };

        let mut tokens = first.analyze(text)?;
        for analyzer in rest {
            tokens = analyzer.transform(tokens)?;
        }
        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "PolyAnalyzer"
    }

    fn dump(&self) -> SerializedForm {
        let form = SerializedForm::new(self.name());
        let form = match &self.language {
            Some(language) => form.with_field("language", language.as_str()),
            None => form,
        };
        form.with_forms(
            "analyzers",
            self.analyzers.iter().map(|analyzer| analyzer.dump()),
        )
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

impl fmt::Debug for PolyAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolyAnalyzer")
            .field("language", &self.language)
            .field("analyzers", &self.analyzers)
            .finish()
    }
}

impl fmt::Display for PolyAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.language {
            Some(language) => write!(f, "PolyAnalyzer({language})")?,
            None => write!(f, "PolyAnalyzer")?,
        }
        write!(f, "[{}]", chain_names(&self.analyzers))
    }
}
