//! Shared application state.

use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Arc;

use healthfaq_chat::{HistoryStore, Responder};
use healthfaq_core::HealthFaqConfig;
use healthfaq_index::IndexRegistry;
use healthfaq_nlp::{create_pipeline, Normalizer};
use healthfaq_resolve::HybridScorer;

use crate::session::SessionStore;

/// Corpus directory: the `HEALTHFAQ_DATA_DIR` value when set, else a
/// `data/` directory installed next to the binary's `bin/`, else `./data`.
pub fn resolve_data_dir(env_override: Option<OsString>) -> PathBuf {
    if let Some(dir) = env_override.filter(|dir| !dir.is_empty()) {
        return PathBuf::from(dir);
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| Some(exe.parent()?.parent()?.join("data")))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| PathBuf::from("data"))
}

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: HealthFaqConfig,
    pub responder: Responder,
    pub history: HistoryStore,
    pub sessions: SessionStore,
    normalizer: Normalizer,
}

impl AppState {
    pub fn new(config: HealthFaqConfig, normalizer: Normalizer, registry: IndexRegistry) -> Self {
        let scorer = HybridScorer::new(config.match_threshold);
        let history = HistoryStore::new(config.history_limit);

        Self {
            responder: Responder::new(Arc::new(registry), scorer),
            history,
            sessions: SessionStore::new(),
            normalizer,
            config,
        }
    }

    /// Pick the text pipeline and build every corpus index from disk.
    pub fn load(config: HealthFaqConfig) -> Self {
        let normalizer = Normalizer::new(create_pipeline(config.pipeline));
        let registry = IndexRegistry::load(&config.data_paths, &normalizer);
        Self::new(config, normalizer, registry)
    }

    pub fn registry(&self) -> &IndexRegistry {
        self.responder.registry()
    }

    /// Name of the active text pipeline.
    pub fn nlp_model(&self) -> &'static str {
        self.normalizer.model_name()
    }
}
