//! Configuration and data directory layout.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::{Error, Language};

/// Default acceptance threshold for the hybrid scorer.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.15;

/// Default number of history entries kept per user.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Paths to the per-language FAQ corpus files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// English corpus (`data/faq_data.json`).
    pub faq_en: PathBuf,
    /// Spanish corpus (`data/faq_data_es.json`).
    pub faq_es: PathBuf,
    /// Hindi corpus (`data/faq_data_hi.json`).
    pub faq_hi: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Nothing is created on disk;
    /// missing corpus files are tolerated by the loader.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            faq_en: root.join("faq_data.json"),
            faq_es: root.join("faq_data_es.json"),
            faq_hi: root.join("faq_data_hi.json"),
            root,
        }
    }

    /// Corpus file for a language.
    pub fn corpus_file(&self, language: Language) -> &Path {
        match language {
            Language::En => &self.faq_en,
            Language::Es => &self.faq_es,
            Language::Hi => &self.faq_hi,
        }
    }
}

/// Which text pipeline the normalizer runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineMode {
    /// Snowball stemming plus stop-word removal.
    Snowball,
    /// Plain whitespace tokenization, kept for the whole process lifetime.
    Simple,
}

impl FromStr for PipelineMode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "snowball" | "stemmer" | "auto" => Ok(Self::Snowball),
            "simple" | "off" | "none" | "fallback" => Ok(Self::Simple),
            other => Err(Error::Config(format!("unknown NLP pipeline '{}'", other))),
        }
    }
}

/// Top-level HealthFAQ configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthFaqConfig {
    /// HTTP server port.
    pub port: u16,
    /// Corpus file locations.
    pub data_paths: DataPaths,
    /// Minimum combined score for an FAQ answer to be returned.
    pub match_threshold: f64,
    /// Per-user history cap.
    pub history_limit: usize,
    /// Normalizer pipeline.
    pub pipeline: PipelineMode,
}

impl HealthFaqConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);

        let match_threshold = std::env::var("HEALTHFAQ_MATCH_THRESHOLD")
            .ok()
            .and_then(|t| t.parse::<f64>().ok())
            .filter(|t| (0.0..=1.0).contains(t))
            .unwrap_or(DEFAULT_MATCH_THRESHOLD);

        let history_limit = std::env::var("HEALTHFAQ_HISTORY_LIMIT")
            .ok()
            .and_then(|n| n.parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_HISTORY_LIMIT);

        let pipeline = std::env::var("HEALTHFAQ_NLP_PIPELINE")
            .ok()
            .and_then(|m| m.parse().ok())
            .unwrap_or(PipelineMode::Snowball);

        Self {
            port,
            data_paths: DataPaths::new(data_dir),
            match_threshold,
            history_limit,
            pipeline,
        }
    }

    /// Defaults rooted at `data_dir`, ignoring the environment.
    pub fn with_defaults(data_dir: impl AsRef<Path>) -> Self {
        Self {
            port: 5000,
            data_paths: DataPaths::new(data_dir),
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            history_limit: DEFAULT_HISTORY_LIMIT,
            pipeline: PipelineMode::Snowball,
        }
    }
}
