//! Keyword extraction for overlap scoring and topic fallback.

use std::collections::HashSet;

use healthfaq_core::Language;

use crate::normalizer::Normalizer;

/// Salient words of `text` before lemmatization, in first-occurrence order
/// without duplicates.
///
/// Order matters to the fallback responder, where the first keyword that
/// hits a topic wins.
pub fn surface_keywords(normalizer: &Normalizer, text: &str, language: Language) -> Vec<String> {
    let mut seen = HashSet::new();
    normalizer
        .surface_tokens(text, language)
        .into_iter()
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

/// Keyword set of `text`, for intersection/union scoring.
pub fn keyword_set(normalizer: &Normalizer, text: &str, language: Language) -> HashSet<String> {
    normalizer.tokens(text, language).into_iter().collect()
}

/// Jaccard overlap `|a ∩ b| / |a ∪ b|`; 0 when either set is empty.
pub fn overlap_ratio(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    intersection as f64 / union as f64
}
