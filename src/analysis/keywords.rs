//! Three-tier keyword extraction.
//!
//! Candidates come from entities, then noun phrases, then the most frequent tokens. The
//! tiers are concatenated in that order, deduplicated keeping first occurrence, and
//! truncated to [`MAX_KEYWORDS`]. Every step is a pure function of the document.

use std::collections::HashMap;

use crate::annotator::{AnnotatedDocument, Span};
use crate::stopwords::is_stopword;

/// Upper bound on returned keywords.
pub const MAX_KEYWORDS: usize = 10;

/// Tokens contributed by the frequency fallback tier.
pub const FREQUENCY_TIER_LIMIT: usize = 8;

/// Candidates must be strictly longer than this many characters.
const MIN_KEYWORD_CHARS: usize = 2;

/// Extract up to [`MAX_KEYWORDS`] distinct keywords, highest-confidence tier first.
pub fn extract_keywords(doc: &AnnotatedDocument) -> Vec<String> {
    merge_keywords([
        entity_terms(doc),
        noun_phrase_terms(doc),
        frequent_terms(doc, FREQUENCY_TIER_LIMIT),
    ])
}

/// Normalized entity texts in document order.
pub fn entity_terms(doc: &AnnotatedDocument) -> Vec<String> {
    span_terms(&doc.entities)
}

/// Normalized noun-phrase texts in document order. Empty for reduced pipelines.
pub fn noun_phrase_terms(doc: &AnnotatedDocument) -> Vec<String> {
    span_terms(&doc.noun_phrases)
}

/// The `limit` most frequent normalized tokens. Ties go to the token seen first.
pub fn frequent_terms(doc: &AnnotatedDocument, limit: usize) -> Vec<String> {
    // term -> (count, first position)
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (position, term) in doc.tokens.iter().filter_map(|t| normalize_term(t)).enumerate() {
        counts.entry(term).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(String, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
        count_b.cmp(count_a).then(first_a.cmp(first_b))
    });
    ranked.into_iter().take(limit).map(|(term, _)| term).collect()
}

/// Concatenate tiers in order, keep the first occurrence of each term, truncate.
pub fn merge_keywords<I>(tiers: I) -> Vec<String>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut merged: Vec<String> = Vec::with_capacity(MAX_KEYWORDS);
    for term in tiers.into_iter().flatten() {
        if merged.len() == MAX_KEYWORDS {
            break;
        }
        if !merged.contains(&term) {
            merged.push(term);
        }
    }
    merged
}

/// Trim, lowercase, and keep only alphanumerics, `-`, `_` and single inner spaces.
/// Returns `None` for terms of two characters or fewer and for stopwords.
pub fn normalize_term(raw: &str) -> Option<String> {
    let lowered = raw.trim().to_lowercase();
    let words: Vec<String> = lowered
        .split_whitespace()
        .map(|w| {
            w.chars()
                .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
                .collect::<String>()
        })
        .filter(|w| !w.is_empty())
        .collect();
    let term = words.join(" ");

    if term.chars().count() <= MIN_KEYWORD_CHARS || is_stopword(&term) {
        return None;
    }
    Some(term)
}

fn span_terms(spans: &[Span]) -> Vec<String> {
    spans.iter().filter_map(|s| normalize_term(&s.text)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(entities: &[&str], noun_phrases: &[&str], tokens: &[&str]) -> AnnotatedDocument {
        let spans = |texts: &[&str]| texts.iter().map(|t| Span::new(*t, 0, t.len())).collect();
        AnnotatedDocument {
            sentences: Vec::new(),
            entities: spans(entities),
            noun_phrases: spans(noun_phrases),
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn normalize_strips_punctuation_and_lowercases() {
        assert_eq!(normalize_term("  Paris! ").as_deref(), Some("paris"));
        assert_eq!(normalize_term("state-of_art").as_deref(), Some("state-of_art"));
        assert_eq!(normalize_term("New   York.").as_deref(), Some("new york"));
    }

    #[test]
    fn normalize_rejects_short_terms_and_stopwords() {
        assert_eq!(normalize_term("hi"), None);
        assert_eq!(normalize_term("U.S"), None);
        assert_eq!(normalize_term("The"), None);
        assert_eq!(normalize_term("?!"), None);
    }

    #[test]
    fn frequency_ranks_by_count_then_first_occurrence() {
        let d = doc(&[], &[], &["beta", "alpha", "gamma", "alpha", "beta", "delta", "the", "the"]);
        assert_eq!(frequent_terms(&d, 8), vec!["beta", "alpha", "gamma", "delta"]);
    }

    #[test]
    fn frequency_tier_respects_limit() {
        let tokens: Vec<String> = (0..20).map(|i| format!("word{i}")).collect();
        let refs: Vec<&str> = tokens.iter().map(String::as_str).collect();
        let d = doc(&[], &[], &refs);
        let terms = frequent_terms(&d, FREQUENCY_TIER_LIMIT);
        assert_eq!(terms.len(), FREQUENCY_TIER_LIMIT);
        assert_eq!(terms[0], "word0");
    }

    #[test]
    fn tiers_merge_in_priority_order() {
        let d = doc(&["Paris"], &["the old bridge"], &["river", "paris", "river"]);
        assert_eq!(
            extract_keywords(&d),
            vec!["paris", "the old bridge", "river"]
        );
    }

    #[test]
    fn merge_dedups_and_truncates() {
        let many: Vec<String> = (0..15).map(|i| format!("term{i}")).collect();
        let merged = merge_keywords([vec!["term3".to_string()], many]);
        assert_eq!(merged.len(), MAX_KEYWORDS);
        assert_eq!(merged[0], "term3");
        assert_eq!(merged.iter().filter(|t| *t == "term3").count(), 1);
    }

    #[test]
    fn missing_noun_phrase_tier_still_yields_keywords() {
        let d = doc(&["Clever"], &[], &["Hello", "Clever", "analyze", "text"]);
        assert_eq!(extract_keywords(&d), vec!["clever", "hello", "analyze", "text"]);
    }

    #[test]
    fn empty_document_yields_nothing() {
        assert!(extract_keywords(&AnnotatedDocument::default()).is_empty());
    }
}
