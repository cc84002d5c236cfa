//! CLI `doctor` command — check configuration and model artifacts and print a report.

use anyhow::Result;
use clever_nlp::annotator;
use clever_nlp::config::CleverConfig;
use clever_nlp::polarity;

pub fn doctor(config: &CleverConfig) -> Result<()> {
    let model_dir = config.resolved_model_dir();
    let tokenizer_path = model_dir.join("tokenizer.json");

    println!("Clever Health Report");
    println!("====================");
    println!();
    println!("Annotator:");
    println!("  Provider:        {}", config.annotator.provider);
    println!("  Model dir:       {}", model_dir.display());
    println!(
        "  tokenizer.json:  {}",
        if tokenizer_path.exists() { "present" } else { "missing" }
    );
    println!("  Noun chunks:     {}", config.annotator.noun_chunks);
    match annotator::create_annotator(&config.annotator) {
        Ok(annotator) => {
            let caps = annotator.capabilities();
            println!("  Status:          OK");
            println!(
                "  Native support:  sentences={} entities={} noun_phrases={}",
                caps.sentences, caps.entities, caps.noun_phrases
            );
        }
        Err(e) => {
            println!("  Status:          FAILED ({e:#})");
            if config.annotator.provider == "local" {
                println!("  Run `clever model download` to fetch the tokenizer.");
            }
        }
    }
    println!();
    println!("Polarity:");
    println!("  Provider:        {}", config.polarity.provider);
    println!(
        "  Lexicon overlay: {}",
        config.polarity.lexicon_path.as_deref().unwrap_or("(none)")
    );
    match polarity::create_scorer(&config.polarity) {
        Ok(_) => println!("  Status:          OK"),
        Err(e) => println!("  Status:          FAILED ({e:#})"),
    }
    println!();
    println!("Cache:");
    if config.cache.capacity == 0 {
        println!("  Disabled");
    } else {
        println!("  Capacity:        {}", config.cache.capacity);
        println!("  Max key chars:   {}", config.cache.max_key_chars);
    }

    Ok(())
}
