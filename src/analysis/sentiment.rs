//! Adapter between the analyzer and the configured [`PolarityScorer`].
//!
//! Scores pass through unmodified. There is no fallback heuristic: a scorer error, or a
//! value that is non-finite or outside `[-1.0, 1.0]`, is a [`AnalysisError::ScoringFailure`].

use crate::error::AnalysisError;
use crate::polarity::PolarityScorer;

pub fn score_sentiment(scorer: &dyn PolarityScorer, text: &str) -> Result<f64, AnalysisError> {
    if text.trim().is_empty() {
        return Ok(0.0);
    }

    let score = scorer.polarity(text).map_err(AnalysisError::ScoringFailure)?;
    if !score.is_finite() || !(-1.0..=1.0).contains(&score) {
        return Err(AnalysisError::ScoringFailure(anyhow::anyhow!(
            "polarity {score} outside [-1.0, 1.0]"
        )));
    }
    Ok(score)
}
