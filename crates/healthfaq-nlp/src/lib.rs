//! Text processing for FAQ matching: normalization, keywords and language detection.
//!
//! The normalizer runs either a Snowball-based linguistic pipeline or a
//! plain tokenizer; the choice is made once at startup and shared by the
//! corpus index and the scorer so both see the same token stream.

pub mod keywords;
pub mod language;
pub mod normalizer;
pub mod pipeline;
pub mod stopwords;

pub use keywords::{keyword_set, overlap_ratio, surface_keywords};
pub use language::detect_language;
pub use normalizer::Normalizer;
pub use pipeline::{create_pipeline, Lemmatizer, SnowballLemmatizer};
