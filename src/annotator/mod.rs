//! Document annotation seam.
//!
//! Provides the [`DocumentAnnotator`] trait, the [`AnnotatedDocument`] it produces, and a
//! local implementation that segments text with a `tokenizers` pre-tokenizer. Providers
//! are created via [`create_annotator`] from configuration.

pub mod local;
pub mod sentences;

use anyhow::Result;
use serde::Serialize;

/// A contiguous piece of the annotated text. Offsets are byte offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

/// Output of a single [`DocumentAnnotator::annotate`] call.
///
/// Owned by the caller that requested it and dropped once keywords are extracted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnnotatedDocument {
    pub sentences: Vec<Span>,
    pub entities: Vec<Span>,
    pub noun_phrases: Vec<Span>,
    /// Token texts in order, never pure whitespace.
    pub tokens: Vec<String>,
}

/// What an annotator pipeline produces natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub sentences: bool,
    pub entities: bool,
    pub noun_phrases: bool,
}

impl Capabilities {
    pub const FULL: Capabilities = Capabilities {
        sentences: true,
        entities: true,
        noun_phrases: true,
    };
}

/// Trait for segmenting text into entities, noun phrases, sentences and tokens.
///
/// Implementations are shared read-only across threads once loaded. All methods are
/// synchronous; callers in async contexts should use `tokio::task::spawn_blocking`.
pub trait DocumentAnnotator: Send + Sync {
    fn annotate(&self, text: &str) -> Result<AnnotatedDocument>;

    fn capabilities(&self) -> Capabilities {
        Capabilities::FULL
    }
}

/// Create an annotator from config.
///
/// `"local"` reads `tokenizer.json` from the model directory and returns an error if it
/// is missing — run `clever model download` first. `"builtin"` needs no artifact.
pub fn create_annotator(
    config: &crate::config::AnnotatorConfig,
) -> Result<Box<dyn DocumentAnnotator>> {
    match config.provider.as_str() {
        "local" => {
            let model_dir = crate::config::expand_tilde(&config.model_dir);
            let annotator = local::LocalAnnotator::from_model_dir(&model_dir, config.noun_chunks)?;
            Ok(Box::new(annotator))
        }
        "builtin" => Ok(Box::new(local::LocalAnnotator::builtin(config.noun_chunks))),
        other => anyhow::bail!("unknown annotator provider: {other}. Supported: local, builtin"),
    }
}
