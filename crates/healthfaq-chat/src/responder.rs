//! Message → reply pipeline.

use std::sync::Arc;

use healthfaq_index::IndexRegistry;
use healthfaq_nlp::detect_language;
use healthfaq_resolve::{fallback_response, HybridScorer};
use tracing::debug;

use crate::persona;
use crate::types::{ChatReply, ChatStatus};

/// Answers chat messages from the per-language FAQ indexes.
#[derive(Clone)]
pub struct Responder {
    registry: Arc<IndexRegistry>,
    scorer: HybridScorer,
}

impl Responder {
    pub fn new(registry: Arc<IndexRegistry>, scorer: HybridScorer) -> Self {
        Self { registry, scorer }
    }

    pub fn registry(&self) -> &IndexRegistry {
        &self.registry
    }

    /// Produce the reply for one raw message.
    ///
    /// The reply's language is always the detected one, even when the
    /// English corpus stands in for an empty corpus.
    pub fn reply(&self, message: &str) -> ChatReply {
        let message = message.trim();
        let language = detect_language(message);

        if message.is_empty() {
            return ChatReply::new(persona::empty_input(language), 0.0, ChatStatus::EmptyInput, language);
        }

        if persona::is_identity_prompt(message) {
            return ChatReply::new(persona::identity(language), 100.0, ChatStatus::Identity, language);
        }

        let selection = self.registry.select(language);
        let result = self.scorer.score(message, &selection.index);

        let (response, status) = match result.answer {
            Some(answer) => (answer, ChatStatus::Matched),
            None => (
                fallback_response(message, language, selection.index.normalizer()),
                ChatStatus::Fallback,
            ),
        };

        debug!(
            "Chat reply: detected={}, corpus={}, status={:?}, score={:.4}",
            language, selection.language, status, result.score
        );

        let mut reply = ChatReply::new(response, result.score * 100.0, status, language);
        reply.debug_info = Some(result.diagnostic);
        reply
    }
}

impl std::fmt::Debug for Responder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Responder")
            .field("scorer", &self.scorer)
            .field("corpora", &self.registry.entry_counts())
            .finish()
    }
}
