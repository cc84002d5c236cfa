//! CLI `analyze` command — run the analyzer over a string or every line of a file.

use anyhow::{Context, Result};
use clever_nlp::analysis::{AnalysisResult, TextAnalyzer};
use clever_nlp::config::CleverConfig;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Serialize)]
struct Output<'a> {
    text: &'a str,
    #[serde(flatten)]
    result: &'a AnalysisResult,
}

pub async fn analyze(
    config: &CleverConfig,
    text: Option<String>,
    file: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let inputs: Vec<String> = match (text, file) {
        (_, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect(),
        (Some(text), None) => vec![text],
        (None, None) => anyhow::bail!("nothing to analyze: pass TEXT or --file <PATH>"),
    };

    let analyzer = Arc::new(TextAnalyzer::from_config(config)?);

    // Lines are analyzed concurrently on the blocking pool; output keeps input order.
    let tasks: Vec<_> = inputs
        .into_iter()
        .map(|input| {
            let analyzer = Arc::clone(&analyzer);
            tokio::task::spawn_blocking(move || {
                let result = analyzer.process(input.as_str());
                (input, result)
            })
        })
        .collect();

    for task in tasks {
        let (input, result) = task.await?;
        let result = result.with_context(|| format!("failed to analyze {input:?}"))?;
        if json {
            let line = serde_json::to_string(&Output {
                text: &input,
                result: &result,
            })?;
            println!("{line}");
        } else {
            print_result(&input, &result);
        }
    }

    tracing::debug!(cached = analyzer.cache().len(), "analysis finished");
    Ok(())
}

fn print_result(input: &str, result: &AnalysisResult) {
    let preview = if input.chars().count() > 60 {
        format!("{}...", input.chars().take(60).collect::<String>())
    } else {
        input.to_string()
    };
    let keywords = if result.keywords.is_empty() {
        "(none)".to_string()
    } else {
        result.keywords.join(", ")
    };

    println!("{preview}");
    println!("  sentiment: {:+.3}", result.sentiment);
    println!("  keywords:  {keywords}");
}
