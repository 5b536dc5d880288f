//! Command implementations for the Sarissa analysis CLI.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::{info, warn};

use crate::analysis::analyzer::{Analyzer, ChainConfig, DefaultChainProvider, PolyAnalyzer};
use crate::analysis::registry;
use crate::analysis::serialized::SerializedForm;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: SarissaArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => {
            let result = analyze_text(analyze_args)?;
            output_result("Analysis complete", &result, &args)
        }
        Command::Dump(dump_args) => dump_analyzer(dump_args, &args),
        Command::Load(load_args) => {
            let result = load_dump(load_args)?;
            if !result.round_trip {
                warn!("{} does not survive a dump/load round trip", result.path);
            }
            output_result("Analyzer loaded", &result, &args)
        }
        Command::Compare(compare_args) => {
            let result = compare_dumps(compare_args)?;
            output_result("Comparison complete", &result, &args)
        }
    }
}

/// Build the composite analyzer selected by the chain options.
pub fn build_analyzer(args: &ChainArgs) -> Result<PolyAnalyzer> {
    let config = match &args.config {
        Some(path) => {
            info!("loading chain config from {}", path.display());
            ChainConfig::from_file(path)?
        }
        None => ChainConfig::default(),
    };

    PolyAnalyzer::with_provider(&args.language, &DefaultChainProvider::new(config))
}

/// Read a serialized analyzer from a JSON file.
pub fn read_form(path: &Path) -> Result<SerializedForm> {
    let content = fs::read_to_string(path)?;
    SerializedForm::from_json(&content).inspect_err(|e| {
        warn!("failed to read analyzer dump {}: {e}", path.display());
    })
}

/// Read a serialized analyzer from a JSON file and rebuild it.
pub fn read_analyzer(path: &Path) -> Result<Arc<dyn Analyzer>> {
    let form = read_form(path)?;
    registry::load(&form).inspect_err(|e| {
        warn!("failed to load analyzer from {}: {e}", path.display());
    })
}

/// Analyze the given text.
pub fn analyze_text(args: &AnalyzeArgs) -> Result<AnalysisResult> {
    let analyzer: Arc<dyn Analyzer> = match &args.dump {
        Some(path) => read_analyzer(path)?,
        None => Arc::new(build_analyzer(&args.chain)?),
    };

    let tokens = analyzer
        .analyze(&args.text)?
        .map(TokenInfo::from)
        .collect();

    Ok(AnalysisResult {
        language: language_of(analyzer.as_ref()),
        chain: chain_of(analyzer.as_ref()),
        tokens,
    })
}

/// Render the serialized form of the selected analyzer as JSON text.
pub fn dump_text(args: &DumpArgs, pretty: bool) -> Result<String> {
    let form = build_analyzer(&args.chain)?.dump();
    if pretty {
        form.to_json_pretty()
    } else {
        form.to_json()
    }
}

/// Dump the selected analyzer to standard output or a file.
fn dump_analyzer(args: &DumpArgs, cli_args: &SarissaArgs) -> Result<()> {
    let pretty = cli_args.pretty || matches!(cli_args.output_format, OutputFormat::Human);
    let json = dump_text(args, pretty)?;

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{json}\n"))?;
            if cli_args.verbosity() > 0 {
                println!("Analyzer written to: {}", path.display());
            }
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Load a dump and check that it round-trips.
pub fn load_dump(args: &LoadArgs) -> Result<LoadResult> {
    let form = read_form(&args.file)?;
    let analyzer = registry::load(&form)?;
    let dumped = analyzer.dump();
    let reloaded = registry::load(&dumped)?;

    Ok(LoadResult {
        path: args.file.to_string_lossy().to_string(),
        class: analyzer.name().to_string(),
        language: language_of(analyzer.as_ref()),
        chain: chain_of(analyzer.as_ref()),
        round_trip: analyzer.equals(reloaded.as_ref()),
        canonical: dumped == form,
    })
}

/// Load two dumps and compare them.
pub fn compare_dumps(args: &CompareArgs) -> Result<ComparisonResult> {
    let left = read_analyzer(&args.left)?;
    let right = read_analyzer(&args.right)?;

    Ok(ComparisonResult {
        left: args.left.to_string_lossy().to_string(),
        right: args.right.to_string_lossy().to_string(),
        equal: left.equals(right.as_ref()),
    })
}

fn language_of(analyzer: &dyn Analyzer) -> Option<String> {
    analyzer
        .as_any()
        .downcast_ref::<PolyAnalyzer>()
        .and_then(|poly| poly.language())
        .map(|language| language.to_string())
}

fn chain_of(analyzer: &dyn Analyzer) -> Vec<String> {
    match analyzer.as_any().downcast_ref::<PolyAnalyzer>() {
        Some(poly) => poly
            .analyzers()
            .iter()
            .map(|child| child.name().to_string())
            .collect(),
        None => vec![analyzer.name().to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::LowercaseFilter;

    fn chain_args(language: &str) -> ChainArgs {
        ChainArgs {
            language: language.to_string(),
            config: None,
        }
    }

    #[test]
    fn test_chain_of_leaf_and_composite() {
        let analyzer = PolyAnalyzer::new("en", None).unwrap();
        assert_eq!(
            chain_of(&analyzer),
            vec!["LowercaseFilter", "RegexTokenizer", "SnowballStemmer"]
        );
        assert_eq!(language_of(&analyzer), Some("en".to_string()));

        let leaf = LowercaseFilter::new();
        assert_eq!(chain_of(&leaf), vec!["LowercaseFilter"]);
        assert_eq!(language_of(&leaf), None);
    }

    #[test]
    fn test_analyze_text() {
        let result = analyze_text(&AnalyzeArgs {
            chain: chain_args("en"),
            dump: None,
            text: "Running Dogs".to_string(),
        })
        .unwrap();

        let texts: Vec<_> = result.tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["run", "dog"]);
        assert_eq!(result.language.as_deref(), Some("en"));
    }

    #[test]
    fn test_dump_text_is_loadable() {
        let json = dump_text(
            &DumpArgs {
                chain: chain_args("es"),
                output: None,
            },
            false,
        )
        .unwrap();

        let form = SerializedForm::from_json(&json).unwrap();
        let loaded = registry::load(&form).unwrap();
        assert!(loaded.equals(&PolyAnalyzer::new("es", None).unwrap()));
    }

    #[test]
    fn test_build_analyzer_unsupported_language() {
        assert!(build_analyzer(&chain_args("zz")).is_err());
    }
}
