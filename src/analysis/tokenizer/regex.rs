//! Regex-based tokenizer implementation.

use std::any::Any;
use std::sync::Arc;

use regex::Regex;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::serialized::SerializedForm;
use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::error::{Result, SarissaError};

/// Pattern matching words, including internal apostrophes ("don't", "l’eau").
pub const DEFAULT_PATTERN: &str = r"\w+(?:['\x{2019}]\w+)*";

/// A regex-based tokenizer that extracts every match of a pattern as a token.
///
/// Applied to a token stream, each incoming token is split on its own, and
/// offsets of the produced tokens stay relative to the original text.
/// Positions are renumbered from zero.
///
/// # Examples
///
/// ```
/// use sarissa_analysis::analysis::analyzer::Analyzer;
/// use sarissa_analysis::analysis::tokenizer::RegexTokenizer;
///
/// let tokenizer = RegexTokenizer::new().unwrap();
/// let tokens: Vec<_> = tokenizer.analyze("Don't panic!").unwrap().collect();
///
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].text, "Don't");
/// assert_eq!(tokens[1].text, "panic");
/// assert_eq!(tokens[1].start_offset, 6);
/// ```
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| SarissaError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Rebuild a tokenizer from its serialized form.
    pub fn load(form: &SerializedForm) -> Result<Self> {
        form.expect_class("RegexTokenizer")?;
        let pattern = form.get_str("pattern")?;
        Self::with_pattern(pattern).map_err(|e| SarissaError::malformed(e.to_string()))
    }
}

impl PartialEq for RegexTokenizer {
    fn eq(&self, other: &Self) -> bool {
        self.pattern() == other.pattern()
    }
}

impl Analyzer for RegexTokenizer {
    fn transform(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut position = 0;
        let mut pending = 0;
        let mut output: Vec<Token> = Vec::new();

        for token in tokens {
            pending += token.position_increment;
            for mat in self.pattern.find_iter(&token.text) {
                let sub = token.sub_token(mat.as_str(), position, mat.start(), mat.end());
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
        "RegexTokenizer"
    }

    fn dump(&self) -> SerializedForm {
        SerializedForm::new(self.name()).with_field("pattern", self.pattern())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_tokenizer() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.analyze("hello world").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 5);
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 6);
        assert_eq!(tokens[1].end_offset, 11);
    }

    #[test]
    fn test_apostrophes_stay_inside_words() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let words = tokenizer.split("it's l\u{2019}eau, 'quoted'").unwrap();

        assert_eq!(words, vec!["it's", "l\u{2019}eau", "quoted"]);
    }

    #[test]
    fn test_transform_keeps_original_offsets() {
        let tokenizer = RegexTokenizer::with_pattern(r"[a-z]+").unwrap();
        let input = vec![
            Token::with_offsets("ab-cd", 0, 10, 15),
            Token::with_offsets("ef", 1, 20, 22),
        ];

        let tokens: Vec<Token> = tokenizer
            .transform(input.into_token_stream())
            .unwrap()
            .collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "ab");
        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (10, 12));
        assert_eq!(tokens[1].text, "cd");
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (13, 15));
        assert_eq!(tokens[2].text, "ef");
        assert_eq!(tokens[2].position, 2);
        assert_eq!((tokens[2].start_offset, tokens[2].end_offset), (20, 22));
    }

    #[test]
    fn test_transform_keeps_token_attributes() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let input = vec![
            Token::with_offsets("running dogs", 0, 0, 12).stop(),
            Token::with_offsets("--", 1, 13, 15).with_position_increment(2),
            Token::with_offsets("big cats", 2, 16, 24).with_boost(3.0),
        ];

        let tokens: Vec<Token> = tokenizer
            .transform(input.into_token_stream())
            .unwrap()
            .collect();

        assert_eq!(tokens.len(), 4);
        assert!(tokens[0].is_stopped() && tokens[1].is_stopped());
        assert!(!tokens[2].is_stopped());
        assert_eq!(tokens[2].boost, 3.0);
        assert_eq!(tokens[3].boost, 3.0);
        // "--" yields nothing, its increment moves to "big"
        assert_eq!(tokens[2].position_increment, 3);
        assert_eq!(tokens[3].position_increment, 1);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = RegexTokenizer::with_pattern("(unclosed").unwrap_err();
        assert!(matches!(err, SarissaError::Analysis(_)));
    }

    #[test]
    fn test_dump_load_and_equals() {
        let tokenizer = RegexTokenizer::with_pattern(r"\S+").unwrap();
        let dump = tokenizer.dump();

        assert_eq!(dump.class().unwrap(), "RegexTokenizer");
        assert_eq!(dump.get_str("pattern").unwrap(), r"\S+");

        let clone = RegexTokenizer::load(&dump).unwrap();
        assert!(tokenizer.equals(&clone));
        assert!(!tokenizer.equals(&RegexTokenizer::new().unwrap()));
    }

    #[test]
    fn test_load_bad_pattern_is_malformed() {
        let form = SerializedForm::new("RegexTokenizer").with_field("pattern", "(");
        let err = RegexTokenizer::load(&form).unwrap_err();
        assert!(matches!(err, SarissaError::MalformedSerializedForm(_)));
    }
}
