//! Language-keyed registry of prebuilt corpus indexes.
//!
//! Every language's index is built once at startup and never mutated.
//! Requests pick the index for their detected language instead of
//! rebuilding a shared slot, so concurrent requests in different languages
//! cannot observe a corpus paired with another corpus's vector space.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use healthfaq_core::{DataPaths, Language};
use healthfaq_nlp::Normalizer;
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::corpus::{load_corpus_or_empty, CorpusEntry};
use crate::index::CorpusIndex;

/// Language whose corpus answers when the requested one has none.
pub const DEFAULT_LANGUAGE: Language = Language::En;

/// Result of selecting an index for a request.
#[derive(Debug, Clone)]
pub struct Selection {
    /// Language the caller asked for.
    pub requested: Language,
    /// Language of the index actually returned.
    pub language: Language,
    pub index: Arc<CorpusIndex>,
}

/// Immutable per-language indexes plus switch bookkeeping.
pub struct IndexRegistry {
    indexes: HashMap<Language, Arc<CorpusIndex>>,
    active: Mutex<Option<Language>>,
    activations: AtomicUsize,
}

impl IndexRegistry {
    /// Build one index per supported language. Languages missing from
    /// `corpora` get an empty index.
    pub fn build(mut corpora: HashMap<Language, Vec<CorpusEntry>>, normalizer: &Normalizer) -> Self {
        let indexes = Language::all()
            .iter()
            .map(|&lang| {
                let entries = corpora.remove(&lang).unwrap_or_default();
                (lang, Arc::new(CorpusIndex::build(entries, lang, normalizer)))
            })
            .collect();

        Self {
            indexes,
            active: Mutex::new(None),
            activations: AtomicUsize::new(0),
        }
    }

    /// Load every corpus file under `paths` and build the registry.
    pub fn load(paths: &DataPaths, normalizer: &Normalizer) -> Self {
        let corpora = Language::all()
            .iter()
            .map(|&lang| (lang, load_corpus_or_empty(paths.corpus_file(lang))))
            .collect();
        let registry = Self::build(corpora, normalizer);
        info!(
            "Index registry ready: en={}, es={}, hi={}",
            registry.index(Language::En).len(),
            registry.index(Language::Es).len(),
            registry.index(Language::Hi).len()
        );
        registry
    }

    /// Index for `language` exactly as built, possibly empty.
    pub fn index(&self, language: Language) -> &Arc<CorpusIndex> {
        // build() inserts every language
        &self.indexes[&language]
    }

    /// Pick the index to score against. A language with an empty corpus
    /// silently uses the English index.
    pub fn select(&self, requested: Language) -> Selection {
        let index = self.index(requested);
        let (language, index) = if index.is_empty() && requested != DEFAULT_LANGUAGE {
            debug!("No {} corpus; using {} corpus", requested, DEFAULT_LANGUAGE);
            (DEFAULT_LANGUAGE, self.index(DEFAULT_LANGUAGE).clone())
        } else {
            (requested, index.clone())
        };

        let mut active = self.active.lock();
        if *active != Some(language) {
            *active = Some(language);
            self.activations.fetch_add(1, Ordering::Relaxed);
            debug!("Active corpus switched to {}", language);
        }

        Selection {
            requested,
            language,
            index,
        }
    }

    /// Number of times the active corpus changed, counting the first
    /// selection.
    pub fn switch_count(&self) -> usize {
        self.activations.load(Ordering::Relaxed)
    }

    /// Language of the most recent selection.
    pub fn active_language(&self) -> Option<Language> {
        *self.active.lock()
    }

    /// Entry counts per language.
    pub fn entry_counts(&self) -> Vec<(Language, usize)> {
        Language::all()
            .iter()
            .map(|&lang| (lang, self.index(lang).len()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthfaq_nlp::SnowballLemmatizer;

    fn normalizer() -> Normalizer {
        Normalizer::new(Some(Arc::new(SnowballLemmatizer::new())))
    }

    fn english() -> Vec<CorpusEntry> {
        vec![
            CorpusEntry::new("What are the symptoms of COVID-19?", "Fever, cough, fatigue..."),
            CorpusEntry::new("What is the normal blood pressure range?", "Around 120/80 mmHg."),
        ]
    }

    fn spanish() -> Vec<CorpusEntry> {
        vec![CorpusEntry::new(
            "¿Cuáles son los síntomas de COVID-19?",
            "Fiebre, tos, cansancio...",
        )]
    }

    #[test]
    fn test_switching_languages() {
        let mut corpora = HashMap::new();
        corpora.insert(Language::En, english());
        corpora.insert(Language::Es, spanish());
        let registry = IndexRegistry::build(corpora, &normalizer());

        let first = registry.select(Language::En);
        assert_eq!(registry.switch_count(), 1);
        let second = registry.select(Language::Es);
        assert_eq!(second.language, Language::Es);
        assert_eq!(registry.switch_count(), 2);
        let third = registry.select(Language::En);
        assert_eq!(registry.switch_count(), 3);

        assert_eq!(third.index.entries(), english().as_slice());
        assert!(Arc::ptr_eq(&first.index, &third.index));
    }

    #[test]
    fn test_same_language_does_not_switch() {
        let mut corpora = HashMap::new();
        corpora.insert(Language::En, english());
        let registry = IndexRegistry::build(corpora, &normalizer());
        registry.select(Language::En);
        registry.select(Language::En);
        assert_eq!(registry.switch_count(), 1);
        assert_eq!(registry.active_language(), Some(Language::En));
    }

    #[test]
    fn test_empty_language_falls_back_to_english() {
        let mut corpora = HashMap::new();
        corpora.insert(Language::En, english());
        let registry = IndexRegistry::build(corpora, &normalizer());

        let selection = registry.select(Language::Hi);
        assert_eq!(selection.requested, Language::Hi);
        assert_eq!(selection.language, Language::En);
        assert_eq!(selection.index.len(), 2);
    }

    #[test]
    fn test_load_from_disk_with_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(dir.path());
        std::fs::write(
            &paths.faq_en,
            serde_json::to_string(&english()).unwrap(),
        )
        .unwrap();

        let registry = IndexRegistry::load(&paths, &normalizer());
        assert_eq!(
            registry.entry_counts(),
            vec![(Language::En, 2), (Language::Es, 0), (Language::Hi, 0)]
        );
    }
}
