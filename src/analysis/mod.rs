//! Text analysis pipeline: raw utterance → keywords + sentiment.
//!
//! [`TextAnalyzer::process`] is the single entry point. It normalizes the input, consults
//! the [`AnalysisCache`], and on a miss loads the annotator through the [`ModelHandle`],
//! then runs [`keywords::extract_keywords`] and [`sentiment::score_sentiment`].

pub mod analyzer;
pub mod cache;
pub mod keywords;
pub mod model;
pub mod sentiment;

pub use analyzer::TextAnalyzer;
pub use cache::AnalysisCache;
pub use model::{ModelHandle, ModelStatus};

use serde::{Deserialize, Serialize};

/// Keywords and sentiment for one utterance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// At most [`keywords::MAX_KEYWORDS`] distinct normalized keywords, best first.
    pub keywords: Vec<String>,
    /// Sentiment in `[-1.0, 1.0]`.
    pub sentiment: f64,
}

impl AnalysisResult {
    /// The result for empty or whitespace-only input.
    pub fn empty() -> Self {
        Self::default()
    }
}
