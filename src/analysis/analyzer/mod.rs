//! Analyzer trait and the composite analyzer built on it.

mod analyzer;
mod poly;
mod provider;

pub use analyzer::{Analyzer, AnalyzerChain};
pub use poly::PolyAnalyzer;
pub use provider::{ChainConfig, ChainProvider, DefaultChainProvider};
