//! Lexicon-based polarity scorer.
//!
//! Averages the valence of every lexicon word found in the text. A negator (`not`,
//! `never`, `no`, any `n't` contraction) inverts and halves the next scored word within
//! a short window; an intensifier scales the word that follows it. The mean is clamped
//! to `[-1.0, 1.0]`, and text without any lexicon word scores `0.0`.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::PolarityScorer;

/// Words after a negator that it still applies to.
const NEGATION_WINDOW: usize = 3;
const NEGATION_FACTOR: f64 = -0.5;

const NEGATORS: &[&str] = &["not", "no", "never", "none", "nothing", "neither", "nor", "cannot"];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("so", 1.2),
    ("quite", 1.1),
    ("somewhat", 0.7),
    ("slightly", 0.5),
];

const DEFAULT_LEXICON: &[(&str, f64)] = &[
    ("amazing", 0.8),
    ("awesome", 0.8),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("brilliant", 0.9),
    ("calm", 0.3),
    ("cool", 0.35),
    ("delighted", 0.8),
    ("enjoy", 0.5),
    ("excellent", 1.0),
    ("excited", 0.6),
    ("fantastic", 0.9),
    ("fine", 0.4),
    ("fun", 0.5),
    ("glad", 0.5),
    ("good", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("helpful", 0.5),
    ("interesting", 0.5),
    ("kind", 0.6),
    ("like", 0.2),
    ("love", 0.5),
    ("lovely", 0.5),
    ("nice", 0.6),
    ("perfect", 1.0),
    ("pleased", 0.5),
    ("thank", 0.3),
    ("thanks", 0.3),
    ("useful", 0.3),
    ("wonderful", 1.0),
    ("angry", -0.5),
    ("annoyed", -0.4),
    ("annoying", -0.6),
    ("awful", -1.0),
    ("bad", -0.7),
    ("boring", -0.6),
    ("broken", -0.4),
    ("confused", -0.4),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("dull", -0.3),
    ("hate", -0.8),
    ("horrible", -1.0),
    ("mad", -0.6),
    ("poor", -0.4),
    ("sad", -0.5),
    ("sick", -0.7),
    ("slow", -0.3),
    ("sorry", -0.5),
    ("stupid", -0.8),
    ("terrible", -1.0),
    ("tired", -0.4),
    ("ugly", -0.7),
    ("upset", -0.6),
    ("useless", -0.5),
    ("worse", -0.4),
    ("worst", -1.0),
    ("wrong", -0.5),
];

/// TOML overlay format: a `[words]` table of word → valence.
#[derive(Debug, Deserialize)]
struct LexiconFile {
    words: HashMap<String, f64>,
}

pub struct LexiconScorer {
    words: HashMap<String, f64>,
}

impl LexiconScorer {
    /// Scorer over the built-in English lexicon.
    pub fn new() -> Self {
        let words = DEFAULT_LEXICON
            .iter()
            .map(|&(word, valence)| (word.to_string(), valence))
            .collect();
        Self { words }
    }

    /// Built-in lexicon overlaid with the `[words]` table from a TOML file.
    pub fn with_overlay(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read lexicon {}", path.display()))?;
        let file: LexiconFile = toml::from_str(&contents)
            .with_context(|| format!("failed to parse lexicon {}", path.display()))?;

        let mut scorer = Self::new();
        for (word, valence) in file.words {
            anyhow::ensure!(
                (-1.0..=1.0).contains(&valence),
                "lexicon valence for {word:?} out of range: {valence}"
            );
            scorer.words.insert(word.to_lowercase(), valence);
        }

        tracing::info!(lexicon = %path.display(), words = scorer.words.len(), "lexicon loaded");
        Ok(scorer)
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> Result<f64> {
        let mut total = 0.0;
        let mut scored = 0usize;
        let mut negation = 0usize;
        let mut boost = 1.0;

        for word in words(text) {
            if is_negator(&word) {
                negation = NEGATION_WINDOW;
                boost = 1.0;
                continue;
            }
            if let Some(&(_, factor)) = INTENSIFIERS.iter().find(|(w, _)| *w == word) {
                boost *= factor;
                continue;
            }

            if let Some(&valence) = self.words.get(&word) {
                let mut value = valence * boost;
                if negation > 0 {
                    value *= NEGATION_FACTOR;
                }
                total += value;
                scored += 1;
                negation = 0;
            } else {
                negation = negation.saturating_sub(1);
            }
            boost = 1.0;
        }

        if scored == 0 {
            return Ok(0.0);
        }
        Ok((total / scored as f64).clamp(-1.0, 1.0))
    }
}

/// Lowercased words: runs of alphanumerics and apostrophes.
fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '’'))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase().replace('’', "'"))
}

fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't")
}
