//! Query resolution against a corpus index.
//!
//! The hybrid scorer ranks every FAQ question by a weighted mix of TF-IDF
//! cosine similarity and keyword overlap. When the best score stays under
//! the threshold, the fallback responder builds a topic-guided reply.

pub mod fallback;
pub mod hybrid;
pub mod types;

pub use fallback::{fallback_response, match_topic, Topic};
pub use hybrid::HybridScorer;
pub use types::*;
