//! Text normalization into lemma sequences.
//!
//! With a linguistic pipeline: lowercase, split into Unicode words, drop
//! stop words, non-alphabetic tokens and tokens of two characters or less,
//! then lemmatize. Without one: lowercase, strip punctuation, split on
//! whitespace and keep tokens longer than two characters.

use std::sync::Arc;

use healthfaq_core::Language;
use unicode_segmentation::UnicodeSegmentation;

use crate::pipeline::Lemmatizer;
use crate::stopwords;

/// Tokens must be longer than this many characters to survive.
const MIN_TOKEN_CHARS: usize = 2;

/// Turns raw text into normalized token sequences for a given language.
#[derive(Clone)]
pub struct Normalizer {
    pipeline: Option<Arc<dyn Lemmatizer>>,
}

impl Normalizer {
    pub fn new(pipeline: Option<Arc<dyn Lemmatizer>>) -> Self {
        Self { pipeline }
    }

    /// Normalizer without a linguistic pipeline.
    pub fn simple() -> Self {
        Self { pipeline: None }
    }

    /// Pipeline name for diagnostics (`"fallback"` without one).
    pub fn model_name(&self) -> &'static str {
        self.pipeline.as_ref().map(|p| p.name()).unwrap_or("fallback")
    }

    /// Normalized tokens in original order.
    pub fn tokens(&self, text: &str, language: Language) -> Vec<String> {
        match &self.pipeline {
            Some(lemmatizer) => linguistic_tokens(lemmatizer.as_ref(), text, language),
            None => simple_tokens(text),
        }
    }

    /// Lowercased words that pass the same filters as [`Normalizer::tokens`],
    /// left in their surface form.
    pub fn surface_tokens(&self, text: &str, language: Language) -> Vec<String> {
        match &self.pipeline {
            Some(_) => surface_words(text, language),
            None => simple_tokens(text),
        }
    }

    /// Space-joined normalized form.
    pub fn normalize(&self, text: &str, language: Language) -> String {
        self.tokens(text, language).join(" ")
    }

    /// Base form of a single lowercased word (identity without a pipeline).
    pub fn lemma(&self, word: &str, language: Language) -> String {
        match &self.pipeline {
            Some(lemmatizer) => lemmatizer.lemma(word, language),
            None => word.to_string(),
        }
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("pipeline", &self.model_name())
            .finish()
    }
}

fn surface_words(text: &str, language: Language) -> Vec<String> {
    text.to_lowercase()
        .unicode_words()
        .filter(|word| {
            word.chars().count() > MIN_TOKEN_CHARS
                && is_alphabetic_word(word)
                && !stopwords::is_stop_word(word, language)
        })
        .map(str::to_string)
        .collect()
}

fn linguistic_tokens(lemmatizer: &dyn Lemmatizer, text: &str, language: Language) -> Vec<String> {
    surface_words(text, language)
        .into_iter()
        .map(|word| lemmatizer.lemma(&word, language))
        .filter(|lemma| {
            lemma.chars().count() > MIN_TOKEN_CHARS && !stopwords::is_stop_word(lemma, language)
        })
        .collect()
}

fn simple_tokens(text: &str) -> Vec<String> {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !is_punctuation(*c))
        .collect();

    stripped
        .split_whitespace()
        .filter(|w| w.chars().count() > MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || matches!(c, '¿' | '¡' | '।' | '॥')
}

/// Letters only. Devanagari vowel signs and virama are combining marks, not
/// letters, but belong to the word.
fn is_alphabetic_word(word: &str) -> bool {
    word.chars().all(|c| c.is_alphabetic() || is_devanagari_mark(c))
}

fn is_devanagari_mark(c: char) -> bool {
    matches!(c,
        '\u{0900}'..='\u{0903}'
        | '\u{093A}'..='\u{094F}'
        | '\u{0951}'..='\u{0957}'
        | '\u{0962}'..='\u{0963}')
}
