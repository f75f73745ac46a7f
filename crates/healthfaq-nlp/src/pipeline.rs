//! Linguistic pipeline backends.
//!
//! The `Lemmatizer` trait abstracts over reducing a surface word to its base
//! form. Implementations:
//! - `SnowballLemmatizer`: Snowball stemmers for English and Spanish; Hindi
//!   words pass through unchanged.
//! - No pipeline (`None`): the normalizer falls back to plain tokenization.

use std::sync::Arc;

use healthfaq_core::{Language, PipelineMode};
use rust_stemmers::{Algorithm, Stemmer};

/// Upper bound on re-stemming passes when searching for a fixed point.
const MAX_STEM_PASSES: usize = 4;

/// Trait for lemmatization backends.
pub trait Lemmatizer: Send + Sync {
    /// Base form of a lowercased word in the given language.
    fn lemma(&self, word: &str, language: Language) -> String;

    /// Backend name reported by the health endpoint.
    fn name(&self) -> &'static str;
}

/// Snowball stemming used as a lightweight lemmatizer.
pub struct SnowballLemmatizer {
    english: Stemmer,
    spanish: Stemmer,
}

impl SnowballLemmatizer {
    pub fn new() -> Self {
        Self {
            english: Stemmer::create(Algorithm::English),
            spanish: Stemmer::create(Algorithm::Spanish),
        }
    }

    fn stemmer(&self, language: Language) -> Option<&Stemmer> {
        match language {
            Language::En => Some(&self.english),
            Language::Es => Some(&self.spanish),
            Language::Hi => None,
        }
    }
}

impl Default for SnowballLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer for SnowballLemmatizer {
    fn lemma(&self, word: &str, language: Language) -> String {
        let Some(stemmer) = self.stemmer(language) else {
            return word.to_string();
        };

        // Stem until stable so that lemma(lemma(w)) == lemma(w).
        let mut current = word.to_string();
        for _ in 0..MAX_STEM_PASSES {
            let next = stemmer.stem(&current).into_owned();
            if next == current {
                break;
            }
            current = next;
        }
        current
    }

    fn name(&self) -> &'static str {
        "snowball"
    }
}

/// Create the pipeline for the configured mode.
///
/// Returns `None` for simple tokenization. Called once at startup; the
/// choice holds for the process lifetime.
pub fn create_pipeline(mode: PipelineMode) -> Option<Arc<dyn Lemmatizer>> {
    match mode {
        PipelineMode::Snowball => {
            tracing::info!("Using Snowball linguistic pipeline (en, es; hi pass-through)");
            Some(Arc::new(SnowballLemmatizer::new()))
        }
        PipelineMode::Simple => {
            tracing::warn!("Linguistic pipeline disabled. Falling back to simple tokenization.");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_lemmas() {
        let lemmatizer = SnowballLemmatizer::new();
        assert_eq!(lemmatizer.lemma("symptoms", Language::En), "symptom");
        assert_eq!(lemmatizer.lemma("running", Language::En), "run");
        assert_eq!(lemmatizer.lemma("covid", Language::En), "covid");
    }

    #[test]
    fn test_hindi_pass_through() {
        let lemmatizer = SnowballLemmatizer::new();
        assert_eq!(lemmatizer.lemma("लक्षण", Language::Hi), "लक्षण");
    }

    #[test]
    fn test_lemma_is_fixed_point() {
        let lemmatizer = SnowballLemmatizer::new();
        for word in ["generalizations", "appointments", "medications", "síntomas", "enfermedades"] {
            let language = if word.contains('í') || word.starts_with("enf") {
                Language::Es
            } else {
                Language::En
            };
            let once = lemmatizer.lemma(word, language);
            assert_eq!(lemmatizer.lemma(&once, language), once, "{word}");
        }
    }

    #[test]
    fn test_create_pipeline_modes() {
        assert!(create_pipeline(PipelineMode::Simple).is_none());
        let pipeline = create_pipeline(PipelineMode::Snowball).unwrap();
        assert_eq!(pipeline.name(), "snowball");
    }
}
