//! Sentiment scoring seam.
//!
//! Provides the [`PolarityScorer`] trait and a lexicon-based implementation. The scorer is
//! created via [`create_scorer`] from configuration.

pub mod lexicon;

use anyhow::Result;

/// Trait for mapping text to a signed sentiment magnitude.
///
/// Implementations return a value in `[-1.0, 1.0]` and must be deterministic for a given
/// input. All methods are synchronous.
pub trait PolarityScorer: Send + Sync {
    fn polarity(&self, text: &str) -> Result<f64>;
}

/// Create a polarity scorer from config.
///
/// Currently only `"lexicon"` is supported. A configured `lexicon_path` that cannot be
/// read or parsed is an error.
pub fn create_scorer(config: &crate::config::PolarityConfig) -> Result<Box<dyn PolarityScorer>> {
    match config.provider.as_str() {
        "lexicon" => {
            let scorer = match &config.lexicon_path {
                Some(path) => {
                    lexicon::LexiconScorer::with_overlay(&crate::config::expand_tilde(path))?
                }
                None => lexicon::LexiconScorer::new(),
            };
            Ok(Box::new(scorer))
        }
        other => anyhow::bail!("unknown polarity provider: {other}. Supported: lexicon"),
    }
}
