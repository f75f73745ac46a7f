//! Hybrid scorer: TF-IDF cosine similarity blended with keyword overlap.

use healthfaq_core::config::DEFAULT_MATCH_THRESHOLD;
use healthfaq_index::CorpusIndex;
use healthfaq_nlp::{keyword_set, overlap_ratio};
use tracing::debug;

use crate::types::ScoreResult;

/// Reported confidence never exceeds this percentage.
const MAX_REPORTED_CONFIDENCE: f64 = 95.0;

/// Weighted TF-IDF + keyword scorer.
#[derive(Debug, Clone, Copy)]
pub struct HybridScorer {
    pub tfidf_weight: f64,
    pub keyword_weight: f64,
    /// Minimum combined score for an answer to be returned.
    pub threshold: f64,
}

impl Default for HybridScorer {
    fn default() -> Self {
        Self::new(DEFAULT_MATCH_THRESHOLD)
    }
}

impl HybridScorer {
    pub fn new(threshold: f64) -> Self {
        Self {
            tfidf_weight: 0.7,
            keyword_weight: 0.3,
            threshold,
        }
    }

    /// Combined score of `query` against every entry, in entry order.
    pub fn combined_scores(&self, query: &str, index: &CorpusIndex) -> Vec<f64> {
        if index.is_empty() {
            return Vec::new();
        }

        let language = index.language();
        let normalizer = index.normalizer();

        let cosine = index.cosine_similarities(&normalizer.normalize(query, language));
        let query_keywords = keyword_set(normalizer, query, language);

        cosine
            .iter()
            .enumerate()
            .map(|(i, &tfidf)| {
                let keyword = index
                    .question_keywords(i)
                    .map(|question| overlap_ratio(&query_keywords, question))
                    .unwrap_or(0.0);
                self.tfidf_weight * f64::from(tfidf) + self.keyword_weight * keyword
            })
            .collect()
    }

    /// Score `query` and pick the best entry. Ties go to the earliest entry.
    pub fn score(&self, query: &str, index: &CorpusIndex) -> ScoreResult {
        if index.is_empty() {
            return ScoreResult {
                answer: None,
                score: 0.0,
                diagnostic: "No FAQ data available".to_string(),
                best_index: None,
            };
        }

        let scores = self.combined_scores(query, index);
        let (best, best_score) = argmax(&scores);

        debug!(
            "Best {} match: entry {} scored {:.4} (threshold {})",
            index.language(),
            best,
            best_score,
            self.threshold
        );

        if best_score >= self.threshold {
            let confidence = (best_score * 100.0).min(MAX_REPORTED_CONFIDENCE);
            ScoreResult {
                answer: index.entry(best).map(|e| e.answer.clone()),
                score: best_score,
                diagnostic: format!("Match confidence: {:.1}%", confidence),
                best_index: Some(best),
            }
        } else {
            ScoreResult {
                answer: None,
                score: best_score,
                diagnostic: format!("Low confidence match: {:.1}%", best_score * 100.0),
                best_index: Some(best),
            }
        }
    }
}

/// First position holding the maximum. `scores` must be non-empty.
fn argmax(scores: &[f64]) -> (usize, f64) {
    let mut best = (0, scores[0]);
    for (i, &score) in scores.iter().enumerate().skip(1) {
        if score > best.1 {
            best = (i, score);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthfaq_core::Language;
    use healthfaq_index::CorpusEntry;
    use healthfaq_nlp::{Normalizer, SnowballLemmatizer};
    use std::sync::Arc;

    fn normalizer() -> Normalizer {
        Normalizer::new(Some(Arc::new(SnowballLemmatizer::new())))
    }

    fn covid_index() -> CorpusIndex {
        CorpusIndex::build(
            vec![CorpusEntry::new(
                "What are the symptoms of COVID-19?",
                "Fever, cough, fatigue...",
            )],
            Language::En,
            &normalizer(),
        )
    }

    fn clinic_index() -> CorpusIndex {
        CorpusIndex::build(
            vec![
                CorpusEntry::new("What are the symptoms of COVID-19?", "Fever, cough, fatigue..."),
                CorpusEntry::new("What is the normal blood pressure range?", "Around 120/80 mmHg."),
                CorpusEntry::new("How can I book an appointment with a doctor?", "Call the clinic."),
                CorpusEntry::new("What should I do during a heart attack?", "Call emergency services."),
            ],
            Language::En,
            &normalizer(),
        )
    }

    #[test]
    fn test_covid_query_matches() {
        let result = HybridScorer::default().score("what are covid symptoms", &covid_index());
        assert_eq!(result.answer.as_deref(), Some("Fever, cough, fatigue..."));
        assert!(result.score * 100.0 > 15.0);
        assert!(result.diagnostic.starts_with("Match confidence: "));
        assert_eq!(result.best_index, Some(0));
    }

    #[test]
    fn test_gibberish_is_low_confidence() {
        let result = HybridScorer::default().score("xyz random gibberish", &covid_index());
        assert!(result.answer.is_none());
        assert_eq!(result.score, 0.0);
        assert_eq!(result.diagnostic, "Low confidence match: 0.0%");
    }

    #[test]
    fn test_empty_index_short_circuits() {
        let index = CorpusIndex::empty(Language::En, &normalizer());
        let result = HybridScorer::default().score("covid", &index);
        assert!(!result.is_match());
        assert_eq!(result.score, 0.0);
        assert_eq!(result.diagnostic, "No FAQ data available");
        assert!(HybridScorer::default().combined_scores("covid", &index).is_empty());
    }

    #[test]
    fn test_best_index_is_maximum() {
        let index = clinic_index();
        let scorer = HybridScorer::default();
        for query in ["blood pressure", "book a doctor appointment", "heart attack help", "covid"] {
            let scores = scorer.combined_scores(query, &index);
            let result = scorer.score(query, &index);
            let max = scores.iter().cloned().fold(f64::MIN, f64::max);
            let best = result.best_index.unwrap();
            assert_eq!(scores[best], max);
            assert!(scores[..best].iter().all(|&s| s < max));
        }
    }

    #[test]
    fn test_ties_resolve_to_first_entry() {
        let index = CorpusIndex::build(
            vec![
                CorpusEntry::new("How do I lower my blood pressure?", "first"),
                CorpusEntry::new("How do I lower my blood pressure?", "second"),
            ],
            Language::En,
            &normalizer(),
        );
        let result = HybridScorer::default().score("lower blood pressure", &index);
        assert_eq!(result.best_index, Some(0));
        assert_eq!(result.answer.as_deref(), Some("first"));
    }

    #[test]
    fn test_reported_confidence_is_capped() {
        let result = HybridScorer::default().score("What are the symptoms of COVID-19?", &covid_index());
        assert!(result.score > 0.95);
        assert_eq!(result.diagnostic, "Match confidence: 95.0%");
    }

    #[test]
    fn test_threshold_is_respected() {
        let strict = HybridScorer::new(0.99);
        let result = strict.score("covid symptoms fever cough", &covid_index());
        assert!(result.answer.is_none());
        assert!(result.score > 0.0);
        assert!(result.diagnostic.starts_with("Low confidence match: "));
    }

    #[test]
    fn test_argmax_stable() {
        assert_eq!(argmax(&[0.2, 0.5, 0.5, 0.1]), (1, 0.5));
        assert_eq!(argmax(&[0.0]), (0, 0.0));
    }

    #[test]
    fn test_score_result_json() {
        let result = HybridScorer::default().score("xyz", &covid_index());
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("answer").is_none());
        assert_eq!(json["best_index"], 0);
    }
}
