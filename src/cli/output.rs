//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::cli::args::{OutputFormat, SarissaArgs};
use crate::error::Result;

/// A single token as reported by the `analyze` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub text: String,
    pub position: usize,
    pub start_offset: usize,
    pub end_offset: usize,
    pub stopped: bool,
}

impl From<Token> for TokenInfo {
    fn from(token: Token) -> Self {
        TokenInfo {
            stopped: token.is_stopped(),
            text: token.text,
            position: token.position,
            start_offset: token.start_offset,
            end_offset: token.end_offset,
        }
    }
}

/// Result structure for text analysis.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub language: Option<String>,
    pub chain: Vec<String>,
    pub tokens: Vec<TokenInfo>,
}

/// Result structure for loading a dump.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoadResult {
    pub path: String,
    pub class: String,
    pub language: Option<String>,
    pub chain: Vec<String>,
    /// The loaded analyzer equals the analyzer loaded from its own dump.
    pub round_trip: bool,
    /// Dumping the loaded analyzer reproduces the file's form exactly.
    pub canonical: bool,
}

/// Result structure for comparing two dumps.
#[derive(Debug, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub left: String,
    pub right: String,
    pub equal: bool,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &SarissaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &SarissaArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match value.get("tokens").and_then(|t| t.as_array()) {
        Some(tokens) => output_tokens_human(&value, tokens),
        None => output_generic_human(&value),
    }
}

/// Output analysis results in human format.
fn output_tokens_human(value: &serde_json::Value, tokens: &[serde_json::Value]) -> Result<()> {
    if let Some(chain) = value.get("chain") {
        println!("Chain: {}", format_value(chain));
    }
    println!("Tokens:");
    println!("═══════");

    for token in tokens {
        let text = token.get("text").and_then(|t| t.as_str()).unwrap_or_default();
        let position = token.get("position").map(format_value).unwrap_or_default();
        let start = token.get("start_offset").map(format_value).unwrap_or_default();
        let end = token.get("end_offset").map(format_value).unwrap_or_default();
        let stopped = token
            .get("stopped")
            .and_then(|s| s.as_bool())
            .unwrap_or(false);

        let marker = if stopped { " (stopped)" } else { "" };
        println!("  {position:>3}  {text:<20} [{start}..{end}]{marker}");
    }
    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SarissaArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => "-".to_string(),
        serde_json::Value::Array(arr) => arr.iter().map(format_value).collect::<Vec<_>>().join(" → "),
        serde_json::Value::Object(_) => value.to_string(),
    }
}
