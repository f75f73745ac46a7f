//! Scorer result types.

use serde::Serialize;

/// Outcome of scoring one query against one corpus index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    /// Answer of the best entry when it cleared the threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    /// Combined score of the best entry, 0 for an empty corpus.
    pub score: f64,
    /// Human-readable confidence line.
    pub diagnostic: String,
    /// Position of the best entry, matched or not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_index: Option<usize>,
}

impl ScoreResult {
    pub fn is_match(&self) -> bool {
        self.answer.is_some()
    }
}
