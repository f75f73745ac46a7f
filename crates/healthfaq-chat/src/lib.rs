//! Chat layer on top of the FAQ scorer.
//!
//! `Responder` turns one user message into a reply: language detection,
//! empty-input and identity handling, scoring against the registry, then the
//! topic fallback. `HistoryStore` keeps the bounded per-user transcript.

pub mod history;
pub mod persona;
pub mod responder;
pub mod types;

pub use history::{HistoryEntry, HistoryStore};
pub use persona::CHATBOT_NAME;
pub use responder::Responder;
pub use types::*;
