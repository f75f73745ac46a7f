//! Chat request/reply types matching the HTTP API surface.

use healthfaq_core::Language;
use serde::{Deserialize, Serialize};

use crate::persona::CHATBOT_NAME;

/// Incoming chat message. A missing `message` is treated as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// How a reply was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatStatus {
    EmptyInput,
    Identity,
    Matched,
    Fallback,
}

impl ChatStatus {
    /// Whether turns with this status are written to history.
    pub fn is_recorded(self) -> bool {
        !matches!(self, ChatStatus::EmptyInput)
    }
}

/// Reply to one chat message.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub response: String,
    /// Combined score scaled to a percentage.
    pub confidence: f64,
    pub status: ChatStatus,
    /// Detected language of the message.
    pub language: Language,
    pub chatbot_name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_info: Option<String>,
}

impl ChatReply {
    pub(crate) fn new(response: String, confidence: f64, status: ChatStatus, language: Language) -> Self {
        Self {
            response,
            confidence,
            status,
            language,
            chatbot_name: CHATBOT_NAME,
            debug_info: None,
        }
    }
}

/// Explicit language choice. The code is validated by the handler so that
/// unsupported values get a structured error instead of a rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageRequest {
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".into()
}
