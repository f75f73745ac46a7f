//! Cookie-backed user sessions.
//!
//! The session id is a server-issued UUID carried in the `healthfaq_session`
//! cookie. Ids the server never issued are replaced with a fresh session.

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header::{HeaderName, COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::response::AppendHeaders;
use healthfaq_core::Language;
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::state::AppState;

pub const SESSION_COOKIE: &str = "healthfaq_session";

/// Per-client session data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: Uuid,
    /// Last detected or explicitly chosen language.
    pub language: Language,
}

/// In-memory session table. Sessions are never expired.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the session for a cookie value, creating one when the value
    /// is absent, malformed or unknown. The flag is true for new sessions.
    pub fn resolve(&self, cookie: Option<&str>) -> (Session, bool) {
        let known = cookie
            .and_then(|value| Uuid::parse_str(value).ok())
            .and_then(|id| self.sessions.read().get(&id).cloned());
        if let Some(session) = known {
            return (session, false);
        }

        let session = Session {
            id: Uuid::new_v4(),
            language: Language::En,
        };
        self.sessions.write().insert(session.id, session.clone());
        debug!("Created session {} ({} active)", session.id, self.session_count());
        (session, true)
    }

    pub fn get(&self, id: Uuid) -> Option<Session> {
        self.sessions.read().get(&id).cloned()
    }

    pub fn set_language(&self, id: Uuid, language: Language) {
        if let Some(session) = self.sessions.write().get_mut(&id) {
            session.language = language;
        }
    }

    pub fn session_count(&self) -> usize {
        self.sessions.read().len()
    }
}

/// Extractor resolving the caller's session from the request cookies.
#[derive(Debug, Clone)]
pub struct UserSession {
    pub session: Session,
    created: bool,
}

impl UserSession {
    pub fn id(&self) -> Uuid {
        self.session.id
    }

    /// User id as used for history keys.
    pub fn user_id(&self) -> String {
        self.session.id.to_string()
    }

    /// `Set-Cookie` header for newly created sessions, nothing otherwise.
    pub fn cookie(&self) -> AppendHeaders<Option<(HeaderName, String)>> {
        AppendHeaders(self.created.then(|| {
            (
                SET_COOKIE,
                format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, self.session.id),
            )
        }))
    }
}

impl FromRequestParts<Arc<AppState>> for UserSession {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let cookie = session_cookie(&parts.headers);
        let (session, created) = state.sessions.resolve(cookie.as_deref());
        Ok(Self { session, created })
    }
}

/// Value of the session cookie, if the request carries one.
fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim().to_string())
}
