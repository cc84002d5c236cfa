//! Errors surfaced by [`TextAnalyzer::process`](crate::analysis::TextAnalyzer::process).
//!
//! Empty or absent input is never an error; it normalizes to the zero result.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The annotator could not be loaded. Sticky for the lifetime of the handle.
    #[error("annotator model unavailable: {reason}")]
    ModelUnavailable { reason: String },

    /// The polarity scorer failed or returned a value outside `[-1.0, 1.0]`.
    #[error("sentiment scoring failed")]
    ScoringFailure(#[source] anyhow::Error),

    /// The annotator loaded but failed on this input.
    #[error("annotation failed")]
    AnnotationFailure(#[source] anyhow::Error),
}

impl AnalysisError {
    pub fn model_unavailable(reason: impl Into<String>) -> Self {
        Self::ModelUnavailable {
            reason: reason.into(),
        }
    }
}
