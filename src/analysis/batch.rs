//! Parallel analysis of many texts with one analyzer.
//!
//! Analyzers are immutable and `Sync`, so a single instance is shared by all
//! worker threads. Results are returned in input order.

use log::debug;
use rayon::prelude::*;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::Token;
use crate::error::Result;

/// Below this many texts the batch is analyzed on the calling thread.
const PARALLEL_THRESHOLD: usize = 64;

/// Analyze every text and collect the resulting tokens.
///
/// The first error raised by the analyzer is returned.
///
/// # Examples
///
/// ```
/// use sarissa_analysis::analysis::analyzer::PolyAnalyzer;
/// use sarissa_analysis::analysis::batch::analyze_batch;
///
/// let analyzer = PolyAnalyzer::new("en", None).unwrap();
/// let tokens = analyze_batch(&analyzer, &["Running dogs", "Jumping cats"]).unwrap();
///
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[1][0].text, "jump");
/// ```
pub fn analyze_batch<S>(analyzer: &dyn Analyzer, texts: &[S]) -> Result<Vec<Vec<Token>>>
where
    S: AsRef<str> + Sync,
{
    let analyze = |text: &S| -> Result<Vec<Token>> {
        Ok(analyzer.analyze(text.as_ref())?.collect())
    };

    if texts.len() > PARALLEL_THRESHOLD {
        debug!(
            "analyzing {} texts in parallel with {}",
            texts.len(),
            analyzer.name()
        );
        texts.par_iter().map(analyze).collect()
    } else {
        texts.iter().map(analyze).collect()
    }
}

/// Analyze every text and collect only the token texts.
pub fn split_batch<S>(analyzer: &dyn Analyzer, texts: &[S]) -> Result<Vec<Vec<String>>>
where
    S: AsRef<str> + Sync,
{
    Ok(analyze_batch(analyzer, texts)?
        .into_iter()
        .map(|tokens| tokens.into_iter().map(|token| token.text).collect())
        .collect())
}
