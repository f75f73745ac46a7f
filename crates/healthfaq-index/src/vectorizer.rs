//! TF-IDF vector space over normalized FAQ questions.
//!
//! Unigrams plus adjacent bigrams, smoothed idf, L2-normalized rows so that
//! cosine similarity is a plain dot product against the fitted matrix.

use std::collections::HashMap;

use healthfaq_core::Language;
use healthfaq_nlp::stopwords;
use ndarray::{Array1, Array2};
use tracing::debug;

/// Vectorizer parameters.
#[derive(Debug, Clone, Copy)]
pub struct VectorizerConfig {
    /// Keep at most this many terms, ranked by corpus frequency.
    pub max_features: usize,
    /// Drop terms present in more than this fraction of documents.
    pub max_df: f64,
    /// Drop terms present in fewer than this many documents.
    pub min_df: usize,
    /// Largest n-gram length.
    pub max_ngram: usize,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            max_features: 5000,
            max_df: 0.95,
            min_df: 1,
            max_ngram: 2,
        }
    }
}

/// A fitted TF-IDF vocabulary with per-term inverse document frequencies.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    language: Language,
    max_ngram: usize,
    /// Term → column, columns in lexicographic term order.
    vocabulary: HashMap<String, usize>,
    idf: Array1<f32>,
}

impl TfidfVectorizer {
    /// Fit on `documents` and return the vectorizer with the document matrix
    /// of shape (N, vocabulary). Row `i` corresponds to `documents[i]`.
    pub fn fit_transform(
        documents: &[String],
        language: Language,
        config: VectorizerConfig,
    ) -> (Self, Array2<f32>) {
        let max_ngram = config.max_ngram.max(1);
        let n_docs = documents.len();

        let doc_counts: Vec<HashMap<String, usize>> = documents
            .iter()
            .map(|d| count_terms(&analyze(d, language, max_ngram)))
            .collect();

        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        let mut total_freq: HashMap<&str, usize> = HashMap::new();
        for counts in &doc_counts {
            for (term, &count) in counts {
                *doc_freq.entry(term.as_str()).or_insert(0) += 1;
                *total_freq.entry(term.as_str()).or_insert(0) += count;
            }
        }

        let max_doc_count = config.max_df * n_docs as f64;
        let mut terms: Vec<&str> = doc_freq
            .iter()
            .filter(|&(_, &df)| df >= config.min_df && df as f64 <= max_doc_count)
            .map(|(&term, _)| term)
            .collect();

        // Tiny corpora put every term above max_df; keep them rather than
        // fitting an empty space.
        if terms.is_empty() && !doc_freq.is_empty() {
            debug!("max_df pruned every term; keeping full vocabulary");
            terms = doc_freq.keys().copied().collect();
        }

        if terms.len() > config.max_features {
            terms.sort_by(|a, b| total_freq[b].cmp(&total_freq[a]).then_with(|| a.cmp(b)));
            terms.truncate(config.max_features);
        }
        terms.sort_unstable();

        let vocabulary: HashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(col, term)| (term.to_string(), col))
            .collect();

        let idf = Array1::from_iter(terms.iter().map(|term| {
            let df = doc_freq[term] as f64;
            (((1.0 + n_docs as f64) / (1.0 + df)).ln() + 1.0) as f32
        }));

        let vectorizer = Self {
            language,
            max_ngram,
            vocabulary,
            idf,
        };

        let mut matrix = Array2::zeros((n_docs, vectorizer.vocabulary.len()));
        for (i, counts) in doc_counts.iter().enumerate() {
            let mut row = matrix.row_mut(i);
            vectorizer.fill_weights(counts, row.view_mut());
            let norm = row.dot(&row).sqrt();
            if norm > 1e-9 {
                row /= norm;
            }
        }

        debug!(
            "Fitted TF-IDF space: {} documents, {} terms ({})",
            n_docs,
            vectorizer.vocabulary.len(),
            language
        );

        (vectorizer, matrix)
    }

    /// Project a normalized document into the fitted space (L2-normalized).
    /// Unknown terms are ignored; a document with no known terms is all zeros.
    pub fn transform(&self, document: &str) -> Array1<f32> {
        let counts = count_terms(&analyze(document, self.language, self.max_ngram));
        let mut vector = Array1::zeros(self.vocabulary.len());
        self.fill_weights(&counts, vector.view_mut());

        let norm = vector.dot(&vector).sqrt();
        if norm > 1e-9 {
            vector /= norm;
        }
        vector
    }

    /// Number of terms in the vocabulary.
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Whether `term` (a unigram or space-joined bigram) is in the vocabulary.
    pub fn contains(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    fn fill_weights(&self, counts: &HashMap<String, usize>, mut out: ndarray::ArrayViewMut1<'_, f32>) {
        for (term, &count) in counts {
            if let Some(&col) = self.vocabulary.get(term) {
                out[col] = count as f32 * self.idf[col];
            }
        }
    }
}

/// Split a normalized document into analyzer terms: lowercase whitespace
/// tokens of two or more characters that are not stop words, followed by
/// n-grams up to `max_ngram`.
fn analyze(document: &str, language: Language, max_ngram: usize) -> Vec<String> {
    let tokens: Vec<String> = document
        .split_whitespace()
        .map(|t| t.to_lowercase())
        .filter(|t| t.chars().count() >= 2 && !stopwords::is_stop_word(t, language))
        .collect();

    let mut terms = tokens.clone();
    for n in 2..=max_ngram {
        terms.extend(tokens.windows(n).map(|w| w.join(" ")));
    }
    terms
}

fn count_terms(terms: &[String]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for term in terms {
        *counts.entry(term.clone()).or_insert(0) += 1;
    }
    counts
}
