//! Health check route.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use healthfaq_chat::CHATBOT_NAME;
use healthfaq_core::Language;

use crate::state::AppState;

/// API version reported by `/health`.
pub const API_VERSION: &str = "3.0";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

/// GET /health: service status and corpus sizes.
async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let registry = state.registry();
    let faq_counts: serde_json::Map<String, serde_json::Value> = registry
        .entry_counts()
        .into_iter()
        .map(|(language, count)| (language.code().to_string(), count.into()))
        .collect();

    Json(serde_json::json!({
        "status": "healthy",
        "faq_count": registry.index(Language::En).len(),
        "faq_counts": faq_counts,
        "nlp_model": state.nlp_model(),
        "version": API_VERSION,
        "features": ["chat_history", "bilingual_support", "personality"],
        "chatbot_name": CHATBOT_NAME,
        "supported_languages": Language::all(),
    }))
}
