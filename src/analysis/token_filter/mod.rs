//! Token filter implementations for token transformation.
//!
//! Filters receive the tokens produced by an earlier stage and modify, mark
//! or remove them. Like tokenizers they implement
//! [`Analyzer`](crate::analysis::analyzer::Analyzer), so they can be chained,
//! dumped and compared uniformly.
//!
//! # Available Filters
//!
//! - [`LowercaseFilter`] - Converts tokens to lowercase
//! - [`Normalizer`] - Unicode normalization with optional case folding and accent stripping
//! - [`SnowballStemmer`] - Reduces words to their stem form
//! - [`StopFilter`] - Removes stop words
//!
//! # Filter Chaining
//!
//! ```text
//! Lowercase → Tokenizer → Stop Words → Stemmer → Index
//! ```

pub mod lowercase;
pub mod normalizer;
pub mod stem;
pub mod stop;

pub use lowercase::LowercaseFilter;
pub use normalizer::{NormalizationForm, Normalizer};
pub use stem::SnowballStemmer;
pub use stop::StopFilter;
