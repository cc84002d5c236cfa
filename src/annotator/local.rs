//! Local annotator backed by a `tokenizers` pre-tokenizer.
//!
//! Word segmentation comes from the pre-tokenizer stored in `tokenizer.json` (or the BERT
//! pre-tokenizer for the `builtin` provider). Entities and noun phrases are found with
//! capitalisation and stopword heuristics over those words. Sentence boundaries are not
//! produced here; the model handle adds them.

use std::path::Path;

use anyhow::Result;
use tokenizers::pre_tokenizers::bert::BertPreTokenizer;
use tokenizers::pre_tokenizers::PreTokenizerWrapper;
use tokenizers::{OffsetReferential, OffsetType, PreTokenizedString, PreTokenizer, Tokenizer};

use super::{AnnotatedDocument, Capabilities, DocumentAnnotator, Span};
use crate::stopwords::is_stopword;

/// Longest noun phrase kept, in words. Longer runs keep their trailing words.
const MAX_PHRASE_WORDS: usize = 3;

pub struct LocalAnnotator {
    pre_tokenizer: PreTokenizerWrapper,
    noun_chunks: bool,
}

/// A word located in the source text by byte offsets.
#[derive(Debug, Clone, Copy)]
struct Word<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

impl LocalAnnotator {
    /// Load the pre-tokenizer from `<model_dir>/tokenizer.json`.
    pub fn from_model_dir(model_dir: &Path, noun_chunks: bool) -> Result<Self> {
        let tokenizer_path = model_dir.join("tokenizer.json");

        anyhow::ensure!(
            tokenizer_path.exists(),
            "Tokenizer not found at {}. Run `clever model download` first.",
            tokenizer_path.display()
        );

        let tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| anyhow::anyhow!("failed to load tokenizer: {e}"))?;

        let pre_tokenizer = match tokenizer.get_pre_tokenizer() {
            Some(pre_tokenizer) => pre_tokenizer.clone(),
            None => {
                tracing::warn!(
                    tokenizer = %tokenizer_path.display(),
                    "tokenizer has no pre-tokenizer, using BERT word splitting"
                );
                PreTokenizerWrapper::BertPreTokenizer(BertPreTokenizer)
            }
        };

        tracing::info!(tokenizer = %tokenizer_path.display(), noun_chunks, "tokenizer loaded");

        Ok(Self {
            pre_tokenizer,
            noun_chunks,
        })
    }

    /// Annotator over the BERT pre-tokenizer, with no artifact on disk.
    pub fn builtin(noun_chunks: bool) -> Self {
        Self {
            pre_tokenizer: PreTokenizerWrapper::BertPreTokenizer(BertPreTokenizer),
            noun_chunks,
        }
    }

    fn words<'a>(&self, text: &'a str) -> Result<Vec<Word<'a>>> {
        let mut pretokenized = PreTokenizedString::from(text);
        self.pre_tokenizer
            .pre_tokenize(&mut pretokenized)
            .map_err(|e| anyhow::anyhow!("pre-tokenization failed: {e}"))?;

        // Offsets are taken against the original text: byte-level pre-tokenizers rewrite
        // the split strings themselves.
        let words = pretokenized
            .get_splits(OffsetReferential::Original, OffsetType::Byte)
            .into_iter()
            .filter_map(|(_, (start, end), _)| {
                let piece = text.get(start..end)?;
                let trimmed = piece.trim();
                if trimmed.is_empty() {
                    return None;
                }
                let lead = piece.len() - piece.trim_start().len();
                Some(Word {
                    text: trimmed,
                    start: start + lead,
                    end: start + lead + trimmed.len(),
                })
            })
            .collect();
        Ok(words)
    }
}

impl DocumentAnnotator for LocalAnnotator {
    fn annotate(&self, text: &str) -> Result<AnnotatedDocument> {
        let words = self.words(text)?;

        let noun_phrases = if self.noun_chunks {
            noun_phrase_spans(text, &words)
        } else {
            Vec::new()
        };

        Ok(AnnotatedDocument {
            sentences: Vec::new(),
            entities: entity_spans(text, &words),
            noun_phrases,
            tokens: words.iter().map(|w| w.text.to_string()).collect(),
        })
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            sentences: false,
            entities: true,
            noun_phrases: self.noun_chunks,
        }
    }
}

/// Maximal runs of capitalised words. A run may not start on a sentence-initial word or
/// on a stopword, so "Hello Clever" yields only "Clever".
fn entity_spans(text: &str, words: &[Word<'_>]) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut run: Option<(usize, usize)> = None;

    for (i, word) in words.iter().enumerate() {
        let sentence_initial = i == 0 || is_terminal(words[i - 1].text);
        let extends = match run {
            Some(_) => is_capitalized(word.text),
            None => {
                is_capitalized(word.text)
                    && !sentence_initial
                    && !is_stopword(&word.text.to_lowercase())
            }
        };

        if extends {
            run = Some(match run {
                Some((first, _)) => (first, i),
                None => (i, i),
            });
        } else if let Some((first, last)) = run.take() {
            spans.push(span_of(text, words, first, last));
        }
    }
    if let Some((first, last)) = run {
        spans.push(span_of(text, words, first, last));
    }
    spans
}

/// Maximal runs of alphabetic non-stopword words, capped at the last
/// [`MAX_PHRASE_WORDS`] words of each run.
fn noun_phrase_spans(text: &str, words: &[Word<'_>]) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut run_start: Option<usize> = None;

    for i in 0..=words.len() {
        let content = words.get(i).is_some_and(|w| is_content_word(w.text));
        match (content, run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(first)) => {
                let last = i - 1;
                let first = first.max((last + 1).saturating_sub(MAX_PHRASE_WORDS));
                spans.push(span_of(text, words, first, last));
                run_start = None;
            }
            _ => {}
        }
    }
    spans
}

fn span_of(text: &str, words: &[Word<'_>], first: usize, last: usize) -> Span {
    let start = words[first].start;
    let end = words[last].end;
    Span::new(&text[start..end], start, end)
}

fn is_terminal(word: &str) -> bool {
    matches!(word, "." | "!" | "?")
}

fn is_capitalized(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.is_uppercase() && chars.all(|c| c.is_alphanumeric() || c == '-'),
        None => false,
    }
}

fn is_content_word(word: &str) -> bool {
    word.chars().count() > 1
        && word.chars().all(|c| c.is_alphabetic() || c == '-')
        && !is_stopword(&word.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(spans: &[Span]) -> Vec<&str> {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn tokens_exclude_whitespace_and_keep_punctuation() {
        let doc = LocalAnnotator::builtin(true)
            .annotate("  Hello   Clever, ok?  ")
            .unwrap();
        assert_eq!(doc.tokens, vec!["Hello", "Clever", ",", "ok", "?"]);
    }

    #[test]
    fn sentence_initial_word_does_not_start_entity() {
        let doc = LocalAnnotator::builtin(true)
            .annotate("Hello Clever, can you analyze this text?")
            .unwrap();
        assert_eq!(texts(&doc.entities), vec!["Clever"]);
    }

    #[test]
    fn multiword_entities_keep_source_text_and_offsets() {
        let text = "We flew to New York City. Then home.";
        let doc = LocalAnnotator::builtin(true).annotate(text).unwrap();
        assert_eq!(texts(&doc.entities), vec!["New York City"]);
        let span = &doc.entities[0];
        assert_eq!(&text[span.start..span.end], "New York City");
    }

    #[test]
    fn noun_phrases_are_content_runs() {
        let doc = LocalAnnotator::builtin(true)
            .annotate("Hello Clever, can you analyze this text?")
            .unwrap();
        assert_eq!(texts(&doc.noun_phrases), vec!["Hello Clever", "analyze", "text"]);
    }

    #[test]
    fn long_runs_keep_trailing_words() {
        let doc = LocalAnnotator::builtin(true)
            .annotate("quick brown lazy fox jumped")
            .unwrap();
        assert_eq!(texts(&doc.noun_phrases), vec!["lazy fox jumped"]);
    }

    #[test]
    fn reduced_pipeline_has_no_noun_phrases() {
        let annotator = LocalAnnotator::builtin(false);
        let doc = annotator.annotate("the Eiffel Tower in Paris").unwrap();
        assert!(doc.noun_phrases.is_empty());
        assert!(!annotator.capabilities().noun_phrases);
        assert_eq!(texts(&doc.entities), vec!["Eiffel Tower", "Paris"]);
    }

    #[test]
    fn local_annotator_does_not_segment_sentences() {
        let annotator = LocalAnnotator::builtin(true);
        assert!(!annotator.capabilities().sentences);
        assert!(annotator.annotate("One. Two.").unwrap().sentences.is_empty());
    }

    #[test]
    #[ignore] // Requires tokenizer.json — run `clever model download`, then: cargo test -- --ignored
    fn downloaded_tokenizer_segments_words() {
        let model_dir = dirs::home_dir().expect("home dir").join(".clever/models");
        let annotator = LocalAnnotator::from_model_dir(&model_dir, true).unwrap();
        let doc = annotator.annotate("Paris is lovely").unwrap();
        assert_eq!(doc.tokens, vec!["Paris", "is", "lovely"]);
    }
}
