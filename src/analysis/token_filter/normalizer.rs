//! Unicode normalization filter.
//!
//! Applies one of the four Unicode normalization forms to every token, with
//! optional case folding and accent stripping.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::analyzer::Analyzer;
//! use sarissa_analysis::analysis::token_filter::{NormalizationForm, Normalizer};
//!
//! let normalizer = Normalizer::new(NormalizationForm::NFKC, true, true);
//! assert_eq!(normalizer.split("Ｃafé").unwrap(), vec!["cafe"]);
//! ```

use std::any::Any;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::serialized::SerializedForm;
use crate::analysis::token::TokenStream;
use crate::error::{Result, SarissaError};

/// Supported Unicode normalization forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NormalizationForm {
    /// Canonical composition
    NFC,
    /// Canonical decomposition
    NFD,
    /// Compatibility composition
    NFKC,
    /// Compatibility decomposition
    NFKD,
}

impl NormalizationForm {
    fn apply(self, text: &str) -> String {
        match self {
            NormalizationForm::NFC => text.nfc().collect(),
            NormalizationForm::NFD => text.nfd().collect(),
            NormalizationForm::NFKC => text.nfkc().collect(),
            NormalizationForm::NFKD => text.nfkd().collect(),
        }
    }

    /// The canonical name of this form.
    pub fn as_str(self) -> &'static str {
        match self {
            NormalizationForm::NFC => "NFC",
            NormalizationForm::NFD => "NFD",
            NormalizationForm::NFKC => "NFKC",
            NormalizationForm::NFKD => "NFKD",
        }
    }
}

impl fmt::Display for NormalizationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormalizationForm {
    type Err = SarissaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "NFC" => Ok(NormalizationForm::NFC),
            "NFD" => Ok(NormalizationForm::NFD),
            "NFKC" => Ok(NormalizationForm::NFKC),
            "NFKD" => Ok(NormalizationForm::NFKD),
            _ => Err(SarissaError::invalid_argument(format!(
                "unknown normalization form '{s}'"
            ))),
        }
    }
}

/// A filter that normalizes token text.
#[derive(Clone, Debug, PartialEq)]
pub struct Normalizer {
    form: NormalizationForm,
    case_fold: bool,
    strip_accents: bool,
}

impl Normalizer {
    /// Create a new normalizer.
    pub fn new(form: NormalizationForm, case_fold: bool, strip_accents: bool) -> Self {
        Normalizer {
            form,
            case_fold,
            strip_accents,
        }
    }

    /// The normalization form applied to each token.
    pub fn form(&self) -> NormalizationForm {
        self.form
    }

    /// Whether token text is lowercased.
    pub fn case_fold(&self) -> bool {
        self.case_fold
    }

    /// Whether combining marks are removed.
    pub fn strip_accents(&self) -> bool {
        self.strip_accents
    }

    /// Rebuild a normalizer from its serialized form.
    pub fn load(form: &SerializedForm) -> Result<Self> {
        form.expect_class("Normalizer")?;
        let normalization_form = form
            .get_str("normalization_form")?
            .parse::<NormalizationForm>()
            .map_err(|e| SarissaError::malformed(e.to_string()))?;

        Ok(Normalizer::new(
            normalization_form,
            form.get_bool("case_fold")?,
            form.get_bool("strip_accents")?,
        ))
    }

    fn normalize(&self, text: &str) -> String {
        let normalized = if self.strip_accents {
            let stripped: String = text.nfd().filter(|c| !is_combining_mark(*c)).collect();
            self.form.apply(&stripped)
        } else {
            self.form.apply(text)
        };

        // Compatibility forms can yield uppercase letters, so fold afterwards
        // and renormalize the folded text.
        if self.case_fold {
            self.form.apply(&normalized.to_lowercase())
        } else {
            normalized
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Normalizer::new(NormalizationForm::NFKC, true, false)
    }
}

impl Analyzer for Normalizer {
    fn transform(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else {
                    let normalized = self.normalize(&token.text);
                    token.with_text(normalized)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "Normalizer"
    }

    fn dump(&self) -> SerializedForm {
        SerializedForm::new(self.name())
            .with_field("normalization_form", self.form.as_str())
            .with_field("case_fold", self.case_fold)
            .with_field("strip_accents", self.strip_accents)
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
