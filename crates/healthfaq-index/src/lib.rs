//! FAQ corpus loading and the per-language TF-IDF indexes built from it.

pub mod corpus;
pub mod index;
pub mod registry;
pub mod vectorizer;

pub use corpus::{load_corpus, load_corpus_or_empty, CorpusEntry};
pub use index::CorpusIndex;
pub use registry::{IndexRegistry, Selection, DEFAULT_LANGUAGE};
pub use vectorizer::{TfidfVectorizer, VectorizerConfig};
