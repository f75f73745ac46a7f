//! Explicit language selection.

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use healthfaq_chat::persona;
use healthfaq_chat::LanguageRequest;
use healthfaq_core::Language;
use tracing::debug;

use crate::session::UserSession;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/language", post(set_language))
}

/// POST /language: unsupported codes get a structured error, still 200.
async fn set_language(
    State(state): State<Arc<AppState>>,
    user: UserSession,
    Json(req): Json<LanguageRequest>,
) -> impl IntoResponse {
    let body = match Language::from_code(&req.language) {
        Some(language) => {
            state.sessions.set_language(user.id(), language);
            debug!("Session {} language set to {}", user.id(), language);
            serde_json::json!({
                "status": "success",
                "language": language,
                "message": persona::greeting(language),
            })
        }
        None => serde_json::json!({
            "status": "error",
            "message": "Unsupported language",
        }),
    };

    (user.cookie(), Json(body))
}
