#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use clever_nlp::analysis::{AnalysisCache, ModelHandle, TextAnalyzer};
use clever_nlp::annotator::local::LocalAnnotator;
use clever_nlp::annotator::{AnnotatedDocument, Capabilities, DocumentAnnotator, Span};
use clever_nlp::polarity::lexicon::LexiconScorer;
use clever_nlp::polarity::PolarityScorer;

/// Invocation counters shared with the stub collaborators.
#[derive(Clone, Default)]
pub struct Counters {
    pub loads: Arc<AtomicUsize>,
    pub annotations: Arc<AtomicUsize>,
    pub scores: Arc<AtomicUsize>,
}

impl Counters {
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn annotations(&self) -> usize {
        self.annotations.load(Ordering::SeqCst)
    }

    pub fn scores(&self) -> usize {
        self.scores.load(Ordering::SeqCst)
    }
}

/// Builtin annotator that counts calls.
pub struct CountingAnnotator {
    inner: LocalAnnotator,
    calls: Arc<AtomicUsize>,
}

impl DocumentAnnotator for CountingAnnotator {
    fn annotate(&self, text: &str) -> anyhow::Result<AnnotatedDocument> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.annotate(text)
    }

    fn capabilities(&self) -> Capabilities {
        self.inner.capabilities()
    }
}

/// Lexicon scorer that counts calls.
pub struct CountingScorer {
    inner: LexiconScorer,
    calls: Arc<AtomicUsize>,
}

impl PolarityScorer for CountingScorer {
    fn polarity(&self, text: &str) -> anyhow::Result<f64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.polarity(text)
    }
}

/// Annotator returning a fixed document regardless of input.
pub struct FixedAnnotator {
    pub doc: AnnotatedDocument,
}

impl DocumentAnnotator for FixedAnnotator {
    fn annotate(&self, _text: &str) -> anyhow::Result<AnnotatedDocument> {
        Ok(self.doc.clone())
    }
}

/// Scorer that always fails.
pub struct FailingScorer;

impl PolarityScorer for FailingScorer {
    fn polarity(&self, _text: &str) -> anyhow::Result<f64> {
        anyhow::bail!("sentiment backend crashed")
    }
}

/// Analyzer over counting builtin collaborators, with a lazily loaded annotator.
pub fn counting_analyzer(cache_capacity: usize) -> (TextAnalyzer, Counters) {
    let counters = Counters::default();

    let loads = Arc::clone(&counters.loads);
    let annotations = Arc::clone(&counters.annotations);
    let model = ModelHandle::new(Box::new(
        move || -> anyhow::Result<Box<dyn DocumentAnnotator>> {
            loads.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(CountingAnnotator {
                inner: LocalAnnotator::builtin(true),
                calls: Arc::clone(&annotations),
            }))
        },
    ));

    let scorer = Arc::new(CountingScorer {
        inner: LexiconScorer::new(),
        calls: Arc::clone(&counters.scores),
    });

    let analyzer = TextAnalyzer::new(model, scorer, AnalysisCache::new(cache_capacity, 120));
    (analyzer, counters)
}

/// Analyzer whose annotator returns `doc` for every input.
pub fn fixed_analyzer(doc: AnnotatedDocument) -> TextAnalyzer {
    TextAnalyzer::new(
        ModelHandle::ready(Box::new(FixedAnnotator { doc })),
        Arc::new(LexiconScorer::new()),
        AnalysisCache::new(0, 120),
    )
}

pub fn spans(texts: &[&str]) -> Vec<Span> {
    let mut offset = 0;
    texts
        .iter()
        .map(|t| {
            let span = Span::new(*t, offset, offset + t.len());
            offset += t.len() + 1;
            span
        })
        .collect()
}
