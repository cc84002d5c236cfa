mod cli;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clever_nlp::config::CleverConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "clever", version, about = "Keyword and sentiment analysis for the Clever assistant")]
struct Cli {
    /// Config file (default: ~/.clever/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze text and print its keywords and sentiment
    Analyze {
        /// Text to analyze
        text: Option<String>,
        /// Analyze each non-empty line of a file instead
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Print one JSON object per input
        #[arg(long)]
        json: bool,
    },
    /// Manage the annotator model
    Model {
        #[command(subcommand)]
        action: ModelAction,
    },
    /// Check configuration and model artifacts
    Doctor,
}

#[derive(Subcommand)]
enum ModelAction {
    /// Download the tokenizer to ~/.clever/models/
    Download,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CleverConfig::load_from(path)?,
        None => CleverConfig::load()?,
    };

    // Log to stderr so stdout carries only analysis output.
    let filter = EnvFilter::try_new(&config.logging.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Analyze { text, file, json } => {
            cli::analyze::analyze(&config, text, file, json).await?;
        }
        Command::Model { action } => match action {
            ModelAction::Download => {
                cli::model_download(&config).await?;
            }
        },
        Command::Doctor => {
            cli::doctor::doctor(&config)?;
        }
    }

    Ok(())
}
