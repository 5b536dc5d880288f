//! Language identifiers used to select analysis chains.
//!
//! A [`LanguageCode`] is the validated two-letter code stored on analyzers and
//! written into their serialized form. A [`Language`] is one of the languages
//! the built-in stemmers and stop word lists know about.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::language::{Language, LanguageCode};
//!
//! let code = LanguageCode::new("es").unwrap();
//! assert_eq!(code.as_str(), "es");
//! assert_eq!(Language::from_code(&code), Some(Language::Spanish));
//!
//! assert!(LanguageCode::new("english").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use rust_stemmers::Algorithm;
use serde::{Deserialize, Serialize};
use stop_words::LANGUAGE;

use crate::error::{Result, SarissaError};

/// A two-letter lowercase language code such as `"en"` or `"es"`.
///
/// The code is immutable once created. Only the format is checked here;
/// whether a default chain exists for it is decided by the chain provider.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Validate and wrap a language code.
    pub fn new(code: &str) -> Result<Self> {
        if code.len() == 2 && code.bytes().all(|b| b.is_ascii_lowercase()) {
            Ok(LanguageCode(code.to_string()))
        } else {
            Err(SarissaError::unsupported_language(format!(
                "'{code}' is not a two-letter lowercase language code"
            )))
        }
    }

    /// Get the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LanguageCode {
    type Err = SarissaError;

    fn from_str(s: &str) -> Result<Self> {
        LanguageCode::new(s)
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = SarissaError;

    fn try_from(value: String) -> Result<Self> {
        LanguageCode::new(&value)
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}

impl From<Language> for LanguageCode {
    fn from(language: Language) -> Self {
        LanguageCode(language.code().to_string())
    }
}

/// Languages with a Snowball stemmer and a stop word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Language {
    Arabic,
    Danish,
    Dutch,
    English,
    Finnish,
    French,
    German,
    Greek,
    Hungarian,
    Italian,
    Norwegian,
    Portuguese,
    Romanian,
    Russian,
    Spanish,
    Swedish,
    Tamil,
    Turkish,
}

impl Language {
    /// Every supported language, in code order.
    pub const ALL: [Language; 18] = [
        Language::Arabic,
        Language::Danish,
        Language::German,
        Language::Greek,
        Language::English,
        Language::Spanish,
        Language::Finnish,
        Language::French,
        Language::Hungarian,
        Language::Italian,
        Language::Dutch,
        Language::Norwegian,
        Language::Portuguese,
        Language::Romanian,
        Language::Russian,
        Language::Swedish,
        Language::Tamil,
        Language::Turkish,
    ];

    /// The ISO 639-1 code of this language.
    pub fn code(self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::Danish => "da",
            Language::Dutch => "nl",
            Language::English => "en",
            Language::Finnish => "fi",
            Language::French => "fr",
            Language::German => "de",
            Language::Greek => "el",
            Language::Hungarian => "hu",
            Language::Italian => "it",
            Language::Norwegian => "no",
            Language::Portuguese => "pt",
            Language::Romanian => "ro",
            Language::Russian => "ru",
            Language::Spanish => "es",
            Language::Swedish => "sv",
            Language::Tamil => "ta",
            Language::Turkish => "tr",
        }
    }

    /// Look up the language for a code, if it is supported.
    pub fn from_code(code: &LanguageCode) -> Option<Language> {
        Language::ALL
            .into_iter()
            .find(|language| language.code() == code.as_str())
    }

    /// Look up the language for a code, failing with `UnsupportedLanguage`.
    pub fn require(code: &LanguageCode) -> Result<Language> {
        Language::from_code(code).ok_or_else(|| {
            SarissaError::unsupported_language(format!("no analysis support for '{code}'"))
        })
    }

    pub(crate) fn to_algorithm(self) -> Algorithm {
        match self {
            Language::Arabic => Algorithm::Arabic,
            Language::Danish => Algorithm::Danish,
            Language::Dutch => Algorithm::Dutch,
            Language::English => Algorithm::English,
            Language::Finnish => Algorithm::Finnish,
            Language::French => Algorithm::French,
            Language::German => Algorithm::German,
            Language::Greek => Algorithm::Greek,
            Language::Hungarian => Algorithm::Hungarian,
            Language::Italian => Algorithm::Italian,
            Language::Norwegian => Algorithm::Norwegian,
            Language::Portuguese => Algorithm::Portuguese,
            Language::Romanian => Algorithm::Romanian,
            Language::Russian => Algorithm::Russian,
            Language::Spanish => Algorithm::Spanish,
            Language::Swedish => Algorithm::Swedish,
            Language::Tamil => Algorithm::Tamil,
            Language::Turkish => Algorithm::Turkish,
        }
    }

    /// The stop word list for this language, if one exists upstream.
    pub(crate) fn to_stop_words_language(self) -> Option<LANGUAGE> {
        let language = match self {
            Language::Arabic => LANGUAGE::Arabic,
            Language::Danish => LANGUAGE::Danish,
            Language::Dutch => LANGUAGE::Dutch,
            Language::English => LANGUAGE::English,
            Language::Finnish => LANGUAGE::Finnish,
            Language::French => LANGUAGE::French,
            Language::German => LANGUAGE::German,
            Language::Greek => LANGUAGE::Greek,
            Language::Hungarian => LANGUAGE::Hungarian,
            Language::Italian => LANGUAGE::Italian,
            Language::Norwegian => LANGUAGE::Norwegian,
            Language::Portuguese => LANGUAGE::Portuguese,
            Language::Romanian => LANGUAGE::Romanian,
            Language::Russian => LANGUAGE::Russian,
            Language::Spanish => LANGUAGE::Spanish,
            Language::Swedish => LANGUAGE::Swedish,
            Language::Tamil => return None,
            Language::Turkish => LANGUAGE::Turkish,
        };
        Some(language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code_validation() {
        assert!(LanguageCode::new("en").is_ok());
        assert!(LanguageCode::new("zz").is_ok());

        for bad in ["", "e", "EN", "eng", "e1", "en-US"] {
            let err = LanguageCode::new(bad).unwrap_err();
            assert!(
                matches!(err, SarissaError::UnsupportedLanguage(_)),
                "expected UnsupportedLanguage for {bad:?}"
            );
        }
    }

    #[test]
    fn test_language_code_parse_and_display() {
        let code: LanguageCode = "fr".parse().unwrap();
        assert_eq!(code.to_string(), "fr");
        assert_eq!(String::from(code), "fr");
    }

    #[test]
    fn test_language_code_serde() {
        let code = LanguageCode::new("de").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"de\"");

        let back: LanguageCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);

        assert!(serde_json::from_str::<LanguageCode>("\"German\"").is_err());
    }

    #[test]
    fn test_language_codes_are_unique() {
        for language in Language::ALL {
            let code = LanguageCode::new(language.code()).unwrap();
            assert_eq!(Language::from_code(&code), Some(language));
            assert_eq!(LanguageCode::from(language), code);
        }
    }

    #[test]
    fn test_require_unsupported() {
        let code = LanguageCode::new("xx").unwrap();
        assert!(Language::from_code(&code).is_none());
        assert!(matches!(
            Language::require(&code),
            Err(SarissaError::UnsupportedLanguage(_))
        ));
    }
}
