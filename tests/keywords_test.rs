mod helpers;

use clever_nlp::analysis::keywords::{extract_keywords, frequent_terms, FREQUENCY_TIER_LIMIT};
use clever_nlp::annotator::local::LocalAnnotator;
use clever_nlp::annotator::{AnnotatedDocument, DocumentAnnotator};
use helpers::{fixed_analyzer, spans};

fn tokens(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

#[test]
fn entity_tier_wins_over_frequency_tier() {
    let doc = AnnotatedDocument {
        entities: spans(&["Paris"]),
        tokens: tokens("rain rain rain paris paris museum"),
        ..AnnotatedDocument::default()
    };

    let from_frequency = frequent_terms(&doc, FREQUENCY_TIER_LIMIT);
    let frequency_position = from_frequency.iter().position(|t| t == "paris").unwrap();

    let keywords = extract_keywords(&doc);
    assert_eq!(keywords.iter().filter(|k| *k == "paris").count(), 1);
    let merged_position = keywords.iter().position(|k| k == "paris").unwrap();
    assert!(merged_position <= frequency_position);
    assert_eq!(keywords, vec!["paris", "rain", "museum"]);
}

#[test]
fn noun_phrases_follow_entities_and_precede_fallback() {
    let doc = AnnotatedDocument {
        entities: spans(&["Ada Lovelace"]),
        noun_phrases: spans(&["analytical engine", "first program"]),
        tokens: tokens("engine engine engine notes"),
        ..AnnotatedDocument::default()
    };

    assert_eq!(
        extract_keywords(&doc),
        vec!["ada lovelace", "analytical engine", "first program", "engine", "notes"]
    );
}

#[test]
fn output_is_truncated_to_ten() {
    let entity_texts: Vec<String> = (0..12).map(|i| format!("Entity{i}")).collect();
    let refs: Vec<&str> = entity_texts.iter().map(String::as_str).collect();
    let doc = AnnotatedDocument {
        entities: spans(&refs),
        tokens: tokens("more words here please"),
        ..AnnotatedDocument::default()
    };

    let keywords = extract_keywords(&doc);
    assert_eq!(keywords.len(), 10);
    assert_eq!(keywords[0], "entity0");
    assert_eq!(keywords[9], "entity9");
}

#[test]
fn reduced_pipeline_still_populates_entities_and_fallback() {
    let reduced = LocalAnnotator::builtin(false);
    let doc = reduced
        .annotate("We visited the Louvre and the Louvre gardens.")
        .unwrap();
    assert!(doc.noun_phrases.is_empty());

    let keywords = extract_keywords(&doc);
    assert_eq!(keywords[0], "louvre");
    assert!(keywords.contains(&"visited".to_string()));
    assert!(keywords.contains(&"gardens".to_string()));
}

#[test]
fn analyzer_uses_annotator_document() {
    let analyzer = fixed_analyzer(AnnotatedDocument {
        entities: spans(&["The", "Rome"]),
        noun_phrases: spans(&["ancient ruins"]),
        tokens: tokens("ruins ruins Rome"),
        ..AnnotatedDocument::default()
    });

    let result = analyzer.process("any text at all").unwrap();
    assert_eq!(result.keywords, vec!["rome", "ancient ruins", "ruins"]);
}

#[test]
fn identical_documents_give_identical_keywords() {
    let annotator = LocalAnnotator::builtin(true);
    let text = "Berlin and Munich are cities; Berlin is the capital of Germany.";
    let first = extract_keywords(&annotator.annotate(text).unwrap());
    let second = extract_keywords(&annotator.annotate(text).unwrap());
    assert_eq!(first, second);
    assert!(first.len() <= 10);
}
