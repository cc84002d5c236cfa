use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct CleverConfig {
    pub logging: LoggingConfig,
    pub annotator: AnnotatorConfig,
    pub polarity: PolarityConfig,
    pub cache: CacheConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AnnotatorConfig {
    /// `"local"` (tokenizer.json from `model_dir`) or `"builtin"` (no artifact).
    pub provider: String,
    pub model_dir: String,
    /// Disable to run a reduced pipeline without noun-phrase chunking.
    pub noun_chunks: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PolarityConfig {
    pub provider: String,
    /// Optional TOML file whose `[words]` table overlays the built-in lexicon.
    pub lexicon_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of cached analyses. `0` disables the cache.
    pub capacity: usize,
    /// Inputs longer than this (after trimming, in chars) are never cached.
    pub max_key_chars: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
        }
    }
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        let model_dir = default_clever_dir()
            .join("models")
            .to_string_lossy()
            .into_owned();
        Self {
            provider: "local".into(),
            model_dir,
            noun_chunks: true,
        }
    }
}

impl Default for PolarityConfig {
    fn default() -> Self {
        Self {
            provider: "lexicon".into(),
            lexicon_path: None,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 256,
            max_key_chars: 120,
        }
    }
}

/// Returns `~/.clever/`
pub fn default_clever_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".clever")
}

/// Returns the default config file path: `~/.clever/config.toml`
pub fn default_config_path() -> PathBuf {
    default_clever_dir().join("config.toml")
}

impl CleverConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            CleverConfig::default()
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply environment variable overrides (CLEVER_MODEL_DIR, CLEVER_LOG_LEVEL,
    /// CLEVER_CACHE_CAPACITY).
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("CLEVER_MODEL_DIR") {
            self.annotator.model_dir = val;
        }
        if let Ok(val) = std::env::var("CLEVER_LOG_LEVEL") {
            self.logging.log_level = val;
        }
        if let Ok(val) = std::env::var("CLEVER_CACHE_CAPACITY") {
            self.cache.capacity = val
                .parse()
                .with_context(|| format!("invalid CLEVER_CACHE_CAPACITY: {val}"))?;
        }
        Ok(())
    }

    /// Resolve the model directory, expanding `~` if needed.
    pub fn resolved_model_dir(&self) -> PathBuf {
        expand_tilde(&self.annotator.model_dir)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .expect("home directory must exist")
            .join(rest)
    } else {
        PathBuf::from(path)
    }
}
