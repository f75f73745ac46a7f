//! Chat routes: ask, read history, clear history.

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use healthfaq_chat::persona::{self, CHATBOT_NAME};
use healthfaq_chat::{ChatRequest, HistoryEntry};

use crate::session::UserSession;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/chat", post(chat))
        .route("/chat/history", get(history))
        .route("/chat/clear", post(clear))
}

/// POST /chat: answer one message and record the turn.
async fn chat(
    State(state): State<Arc<AppState>>,
    user: UserSession,
    Json(req): Json<ChatRequest>,
) -> impl IntoResponse {
    let reply = state.responder.reply(&req.message);

    state.sessions.set_language(user.id(), reply.language);
    if reply.status.is_recorded() {
        state.history.append(
            &user.user_id(),
            HistoryEntry::now(req.message.trim(), reply.response.clone(), reply.language),
        );
    }

    (user.cookie(), Json(reply))
}

/// GET /chat/history: this session's transcript, oldest first.
async fn history(State(state): State<Arc<AppState>>, user: UserSession) -> impl IntoResponse {
    let user_id = user.user_id();
    let history = state.history.get(&user_id);

    (
        user.cookie(),
        Json(serde_json::json!({
            "total_messages": history.len(),
            "history": history,
            "user_id": user_id,
        })),
    )
}

/// POST /chat/clear: drop this session's transcript.
async fn clear(State(state): State<Arc<AppState>>, user: UserSession) -> impl IntoResponse {
    state.history.clear(&user.user_id());

    (
        user.cookie(),
        Json(serde_json::json!({
            "status": "cleared",
            "message": persona::history_cleared(user.session.language),
            "chatbot_name": CHATBOT_NAME,
        })),
    )
}
