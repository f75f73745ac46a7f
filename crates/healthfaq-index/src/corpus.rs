//! FAQ corpus entries and JSON loading.

use std::path::Path;

use healthfaq_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

/// A curated question/answer pair. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusEntry {
    pub question: String,
    pub answer: String,
}

impl CorpusEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Load a corpus file: a JSON array of `{question, answer}` objects.
///
/// A missing file yields an empty corpus; unreadable or malformed files are
/// errors.
pub fn load_corpus(path: &Path) -> Result<Vec<CorpusEntry>> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(Error::Io(e)),
    };

    let entries: Vec<CorpusEntry> = serde_json::from_str(&data)
        .map_err(|e| Error::Corpus(format!("{}: {}", path.display(), e)))?;
    Ok(entries)
}

/// Load a corpus file, degrading every failure to an empty corpus.
pub fn load_corpus_or_empty(path: &Path) -> Vec<CorpusEntry> {
    match load_corpus(path) {
        Ok(entries) if entries.is_empty() => {
            warn!("No FAQ entries at {}, corpus is empty", path.display());
            entries
        }
        Ok(entries) => {
            info!("Loaded {} FAQ entries from {}", entries.len(), path.display());
            entries
        }
        Err(e) => {
            error!("Failed to load FAQ corpus: {}. Using empty corpus.", e);
            Vec::new()
        }
    }
}
