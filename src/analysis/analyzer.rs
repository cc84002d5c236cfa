//! The analyzer façade.
//!
//! Per call: trim → empty short-circuit → cache lookup → on miss, ensure the annotator is
//! loaded, annotate, extract keywords and score sentiment → cache if eligible.

use std::sync::Arc;

use anyhow::Result;

use super::cache::AnalysisCache;
use super::keywords::extract_keywords;
use super::model::ModelHandle;
use super::sentiment::score_sentiment;
use super::AnalysisResult;
use crate::annotator::{self, DocumentAnnotator};
use crate::config::CleverConfig;
use crate::error::AnalysisError;
use crate::polarity::{self, PolarityScorer};

pub struct TextAnalyzer {
    model: ModelHandle,
    scorer: Arc<dyn PolarityScorer>,
    cache: AnalysisCache,
}

impl TextAnalyzer {
    pub fn new(model: ModelHandle, scorer: Arc<dyn PolarityScorer>, cache: AnalysisCache) -> Self {
        Self {
            model,
            scorer,
            cache,
        }
    }

    /// Build the configured stack. The scorer is created eagerly; the annotator is loaded
    /// on the first call that needs it.
    pub fn from_config(config: &CleverConfig) -> Result<Self> {
        let annotator_config = config.annotator.clone();
        let model = ModelHandle::new(Box::new(move || {
            annotator::create_annotator(&annotator_config)
        }));

        let scorer: Arc<dyn PolarityScorer> = Arc::from(polarity::create_scorer(&config.polarity)?);
        tracing::info!(provider = %config.polarity.provider, "polarity scorer ready");

        Ok(Self::new(model, scorer, AnalysisCache::from_config(&config.cache)))
    }

    /// Analyze one utterance. `None` is treated as empty input.
    pub fn process<'a>(&self, text: impl Into<Option<&'a str>>) -> Result<AnalysisResult, AnalysisError> {
        let text = text.into().unwrap_or_default().trim();
        if text.is_empty() {
            return Ok(AnalysisResult::empty());
        }

        self.cache.lookup_or_compute(text, || self.compute(text))
    }

    /// The shared annotator, loading it if needed.
    pub fn annotator(&self) -> Result<Arc<dyn DocumentAnnotator>, AnalysisError> {
        self.model.ensure_model()
    }

    pub fn model(&self) -> &ModelHandle {
        &self.model
    }

    pub fn cache(&self) -> &AnalysisCache {
        &self.cache
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    fn compute(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        let annotator = self.model.ensure_model()?;
        let doc = annotator
            .annotate(text)
            .map_err(AnalysisError::AnnotationFailure)?;

        let keywords = extract_keywords(&doc);
        let sentiment = score_sentiment(self.scorer.as_ref(), text)?;

        tracing::debug!(keywords = keywords.len(), sentiment, "analysis computed");
        Ok(AnalysisResult {
            keywords,
            sentiment,
        })
    }
}
