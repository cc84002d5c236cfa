//! Text analysis core for the Clever assistant.
//!
//! Turns a raw utterance into an [`AnalysisResult`](analysis::AnalysisResult): up to ten
//! ranked keywords plus a sentiment score in `[-1.0, 1.0]`. The linguistic work is
//! delegated to two collaborators behind traits:
//!
//! | Collaborator | Trait | Built-in provider |
//! |--------------|-------|-------------------|
//! | Document annotator | [`annotator::DocumentAnnotator`] | `local` (tokenizer.json pre-tokenizer), `builtin` |
//! | Polarity scorer | [`polarity::PolarityScorer`] | `lexicon` |
//!
//! # Architecture
//!
//! - **Model handle**: the annotator is loaded once, lazily, and shared read-only
//! - **Keywords**: entities, then noun phrases, then a frequency fallback, merged,
//!   deduplicated and truncated to ten
//! - **Cache**: short inputs (≤ 120 chars by default) are memoized in a bounded LRU
//! - **Façade**: [`analysis::TextAnalyzer::process`] is the single entry point
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`error`] — Error taxonomy surfaced by the analyzer
//! - [`annotator`] — Document annotation seam and the local tokenizer-backed annotator
//! - [`polarity`] — Sentiment scoring seam and the lexicon scorer
//! - [`analysis`] — Model handle, keyword extraction, cache and the analyzer façade

pub mod analysis;
pub mod annotator;
pub mod config;
pub mod error;
pub mod polarity;
pub mod stopwords;

pub use analysis::{AnalysisResult, TextAnalyzer};
pub use error::AnalysisError;
