//! Per-language corpus index: entries plus their fitted vector space.

use std::collections::HashSet;

use healthfaq_core::Language;
use healthfaq_nlp::{keyword_set, Normalizer};
use ndarray::{Array1, Array2};
use tracing::info;

use crate::corpus::CorpusEntry;
use crate::vectorizer::{TfidfVectorizer, VectorizerConfig};

/// Immutable index over one language's FAQ corpus.
///
/// Row `i` of the matrix and `question_keywords[i]` always describe
/// `entries[i]`; the index is rebuilt wholesale, never patched.
pub struct CorpusIndex {
    language: Language,
    entries: Vec<CorpusEntry>,
    normalizer: Normalizer,
    vectorizer: TfidfVectorizer,
    /// L2-normalized TF-IDF rows, shape (entries, vocabulary).
    matrix: Array2<f32>,
    question_keywords: Vec<HashSet<String>>,
}

impl CorpusIndex {
    /// Build an index with the default vectorizer parameters.
    pub fn build(entries: Vec<CorpusEntry>, language: Language, normalizer: &Normalizer) -> Self {
        Self::build_with(entries, language, normalizer, VectorizerConfig::default())
    }

    /// Build an index. An empty `entries` yields an inert index that
    /// matches nothing.
    pub fn build_with(
        entries: Vec<CorpusEntry>,
        language: Language,
        normalizer: &Normalizer,
        config: VectorizerConfig,
    ) -> Self {
        let normalized: Vec<String> = entries
            .iter()
            .map(|e| normalizer.normalize(&e.question, language))
            .collect();
        let question_keywords = entries
            .iter()
            .map(|e| keyword_set(normalizer, &e.question, language))
            .collect();

        let (vectorizer, matrix) = TfidfVectorizer::fit_transform(&normalized, language, config);

        if !entries.is_empty() {
            info!(
                "Built {} corpus index: {} entries, {} terms",
                language,
                entries.len(),
                vectorizer.vocabulary_len()
            );
        }

        Self {
            language,
            entries,
            normalizer: normalizer.clone(),
            vectorizer,
            matrix,
            question_keywords,
        }
    }

    /// Inert index for a language without a corpus.
    pub fn empty(language: Language, normalizer: &Normalizer) -> Self {
        Self::build(Vec::new(), language, normalizer)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    pub fn entry(&self, i: usize) -> Option<&CorpusEntry> {
        self.entries.get(i)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Normalizer the index was built with; queries must use the same one.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vectorizer.vocabulary_len()
    }

    /// Keyword set of question `i`.
    pub fn question_keywords(&self, i: usize) -> Option<&HashSet<String>> {
        self.question_keywords.get(i)
    }

    /// Cosine similarity of a normalized query against every question,
    /// in entry order.
    pub fn cosine_similarities(&self, normalized_query: &str) -> Array1<f32> {
        if self.is_empty() {
            return Array1::zeros(0);
        }
        let q = self.vectorizer.transform(normalized_query);
        // (N, vocab) @ (vocab,) -> (N,)
        self.matrix.dot(&q)
    }
}

impl std::fmt::Debug for CorpusIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CorpusIndex")
            .field("language", &self.language)
            .field("entries", &self.entries.len())
            .field("terms", &self.vectorizer.vocabulary_len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthfaq_nlp::SnowballLemmatizer;
    use std::sync::Arc;

    fn normalizer() -> Normalizer {
        Normalizer::new(Some(Arc::new(SnowballLemmatizer::new())))
    }

    fn entries() -> Vec<CorpusEntry> {
        vec![
            CorpusEntry::new("What are the symptoms of COVID-19?", "Fever, cough, fatigue..."),
            CorpusEntry::new("What is the normal blood pressure range?", "Around 120/80 mmHg."),
            CorpusEntry::new("How can I book an appointment with a doctor?", "Call the clinic."),
        ]
    }

    #[test]
    fn test_rows_align_with_entries() {
        let index = CorpusIndex::build(entries(), Language::En, &normalizer());
        assert_eq!(index.len(), 3);
        let query = index.normalizer().normalize("blood pressure", Language::En);
        let sims = index.cosine_similarities(&query);
        assert_eq!(sims.len(), 3);
        let best = sims
            .iter()
            .enumerate()
            .fold((0, f32::MIN), |acc, (i, &s)| if s > acc.1 { (i, s) } else { acc });
        assert_eq!(best.0, 1);
    }

    #[test]
    fn test_question_keywords_precomputed() {
        let index = CorpusIndex::build(entries(), Language::En, &normalizer());
        let kw = index.question_keywords(0).unwrap();
        assert!(kw.contains("symptom"));
        assert!(kw.contains("covid"));
        assert!(index.question_keywords(3).is_none());
    }

    #[test]
    fn test_empty_index_is_inert() {
        let index = CorpusIndex::empty(Language::Hi, &normalizer());
        assert!(index.is_empty());
        assert_eq!(index.cosine_similarities("लक्षण").len(), 0);
        assert_eq!(index.vocabulary_len(), 0);
    }
}
