//! Reconstruction of analyzers from their serialized forms.
//!
//! An [`AnalyzerRegistry`] maps kind tags to loader functions. Loading a form
//! reads its `_class` tag, finds the matching loader and hands it the form.
//! Composite loaders receive the registry too, so nested children are
//! dispatched through the same table.
//!
//! The built-in registry knows every analyzer kind in this crate. Custom kinds
//! are added with [`AnalyzerRegistry::register`].
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::analyzer::{Analyzer, PolyAnalyzer};
//! use sarissa_analysis::analysis::registry;
//!
//! let analyzer = PolyAnalyzer::new("en", None).unwrap();
//! let loaded = registry::load(&analyzer.dump()).unwrap();
//!
//! assert_eq!(loaded.name(), "PolyAnalyzer");
//! assert!(analyzer.equals(loaded.as_ref()));
//! ```

use std::sync::{Arc, LazyLock};

use ahash::AHashMap;
use log::{debug, trace};

use crate::analysis::analyzer::{Analyzer, PolyAnalyzer};
use crate::analysis::serialized::SerializedForm;
use crate::analysis::token_filter::{LowercaseFilter, Normalizer, SnowballStemmer, StopFilter};
use crate::analysis::tokenizer::{RegexTokenizer, UnicodeWordTokenizer};
use crate::error::{Result, SarissaError};

/// Builds an analyzer from its serialized form.
pub type AnalyzerLoader = fn(&SerializedForm, &AnalyzerRegistry) -> Result<Arc<dyn Analyzer>>;

/// Table of loaders keyed by kind tag.
#[derive(Clone, Default)]
pub struct AnalyzerRegistry {
    loaders: AHashMap<String, AnalyzerLoader>,
}

static DEFAULT_REGISTRY: LazyLock<AnalyzerRegistry> = LazyLock::new(AnalyzerRegistry::with_defaults);

/// The shared registry holding the built-in analyzer kinds.
pub fn default_registry() -> &'static AnalyzerRegistry {
    &DEFAULT_REGISTRY
}

/// Rebuild an analyzer of any built-in kind from its serialized form.
pub fn load(form: &SerializedForm) -> Result<Arc<dyn Analyzer>> {
    default_registry().load(form)
}

impl AnalyzerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in analyzer kind.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("PolyAnalyzer", |form, registry| {
            Ok(Arc::new(PolyAnalyzer::load_with(form, registry)?))
        });
        registry.register("RegexTokenizer", |form, _| {
            Ok(Arc::new(RegexTokenizer::load(form)?))
        });
        registry.register("UnicodeWordTokenizer", |form, _| {
            Ok(Arc::new(UnicodeWordTokenizer::load(form)?))
        });
        registry.register("LowercaseFilter", |form, _| {
            Ok(Arc::new(LowercaseFilter::load(form)?))
        });
        registry.register("Normalizer", |form, _| {
            Ok(Arc::new(Normalizer::load(form)?))
        });
        registry.register("SnowballStemmer", |form, _| {
            Ok(Arc::new(SnowballStemmer::load(form)?))
        });
        registry.register("StopFilter", |form, _| {
            Ok(Arc::new(StopFilter::load(form)?))
        });
        registry
    }

    /// Register a loader for a kind tag, replacing any previous one.
    pub fn register<S: Into<String>>(&mut self, class: S, loader: AnalyzerLoader) {
        let class = class.into();
        debug!("registering analyzer loader for '{class}'");
        self.loaders.insert(class, loader);
    }

    /// Check whether a loader is registered for a kind tag.
    pub fn contains(&self, class: &str) -> bool {
        self.loaders.contains_key(class)
    }

    /// The registered kind tags, sorted.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.loaders.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    /// Rebuild an analyzer from its serialized form.
    ///
    /// Fails with `MalformedSerializedForm` when the tag is missing and with
    /// `UnknownAnalyzerKind` when no loader is registered for it.
    pub fn load(&self, form: &SerializedForm) -> Result<Arc<dyn Analyzer>> {
        let class = form.class()?;
        let loader = self
            .loaders
            .get(class)
            .ok_or_else(|| SarissaError::unknown_kind(class))?;

        trace!("loading analyzer of kind '{class}'");
        loader(form, self)
    }
}

impl std::fmt::Debug for AnalyzerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyzerRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}
