//! Command line argument parsing for the Sarissa analysis CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Sarissa Analysis - language-aware text analysis chains
#[derive(Parser, Debug, Clone)]
#[command(name = "sarissa-analysis")]
#[command(about = "Build, run, dump and compare text analysis chains")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Sarissa Contributors")]
#[command(long_about = None)]
pub struct SarissaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SarissaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze text with the chain for a language
    Analyze(AnalyzeArgs),

    /// Print the serialized form of the chain for a language
    Dump(DumpArgs),

    /// Load a serialized analyzer and verify that it round-trips
    Load(LoadArgs),

    /// Load two serialized analyzers and report whether they are equal
    Compare(CompareArgs),
}

/// Options selecting the analysis chain.
#[derive(Parser, Debug, Clone)]
pub struct ChainArgs {
    /// Two-letter language code
    #[arg(short, long, default_value = "en")]
    pub language: String,

    /// Chain configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for analyzing text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub chain: ChainArgs,

    /// Analyze with a dumped analyzer instead of building one
    #[arg(short, long, value_name = "DUMP_FILE", conflicts_with_all = ["language", "config"])]
    pub dump: Option<PathBuf>,

    /// Text to analyze
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for dumping an analyzer
#[derive(Parser, Debug, Clone)]
pub struct DumpArgs {
    #[command(flatten)]
    pub chain: ChainArgs,

    /// Write the dump to a file instead of standard output
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for loading a dump
#[derive(Parser, Debug, Clone)]
pub struct LoadArgs {
    /// Dump file path (JSON)
    #[arg(value_name = "DUMP_FILE")]
    pub file: PathBuf,
}

/// Arguments for comparing two dumps
#[derive(Parser, Debug, Clone)]
pub struct CompareArgs {
    /// First dump file path (JSON)
    #[arg(value_name = "LEFT")]
    pub left: PathBuf,

    /// Second dump file path (JSON)
    #[arg(value_name = "RIGHT")]
    pub right: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
