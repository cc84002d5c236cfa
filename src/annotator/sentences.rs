//! Basic sentence-boundary step for pipelines that lack one.

use anyhow::Result;

use super::{AnnotatedDocument, Capabilities, DocumentAnnotator, Span};

/// Wraps an annotator and fills [`AnnotatedDocument::sentences`] with [`split_sentences`].
pub struct SentenceSegmented {
    inner: Box<dyn DocumentAnnotator>,
}

impl SentenceSegmented {
    pub fn new(inner: Box<dyn DocumentAnnotator>) -> Self {
        Self { inner }
    }
}

impl DocumentAnnotator for SentenceSegmented {
    fn annotate(&self, text: &str) -> Result<AnnotatedDocument> {
        let mut doc = self.inner.annotate(text)?;
        if doc.sentences.is_empty() {
            doc.sentences = split_sentences(text);
        }
        Ok(doc)
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            sentences: true,
            ..self.inner.capabilities()
        }
    }
}

/// Return `annotator` unchanged if it segments sentences, otherwise wrapped in
/// [`SentenceSegmented`].
pub fn ensure_sentences(annotator: Box<dyn DocumentAnnotator>) -> Box<dyn DocumentAnnotator> {
    if annotator.capabilities().sentences {
        annotator
    } else {
        tracing::info!("annotator lacks sentence boundaries, adding basic segmenter");
        Box::new(SentenceSegmented::new(annotator))
    }
}

/// Split on `.`, `!` or `?` when followed by whitespace or end of text.
/// Spans are trimmed; empty pieces are dropped.
pub fn split_sentences(text: &str) -> Vec<Span> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let at_boundary = match chars.peek() {
            Some(&(_, next)) => next.is_whitespace(),
            None => true,
        };
        if at_boundary {
            let end = i + c.len_utf8();
            sentences.extend(trimmed_span(text, start, end));
            start = end;
        }
    }
    sentences.extend(trimmed_span(text, start, text.len()));
    sentences
}

fn trimmed_span(text: &str, start: usize, end: usize) -> Option<Span> {
    let piece = &text[start..end];
    let trimmed = piece.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lead = piece.len() - piece.trim_start().len();
    Some(Span::new(trimmed, start + lead, start + lead + trimmed.len()))
}
