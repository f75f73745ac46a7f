//! Rule-based language detection.
//!
//! Hindi markers are checked first, case-sensitively (Devanagari has no
//! case), then Spanish markers against the lowercased text, else English.
//! Markers match as substrings, so short Hindi particles hit inside longer
//! words and loanwords like "doctor" route to Spanish.

use healthfaq_core::Language;

pub const SPANISH_MARKERS: &[&str] = &[
    "qué", "cómo", "cuál", "dónde", "cuándo", "por qué", "síntomas", "dolor", "medicamento",
    "doctor", "salud", "hospital", "enfermedad",
];

pub const HINDI_MARKERS: &[&str] = &[
    "क्या", "कैसे", "कौन", "कहाँ", "कब", "क्यों", "लक्षण", "दर्द", "दवा", "डॉक्टर", "स्वास्थ्य",
    "अस्पताल", "बीमारी", "मैं", "है", "हैं", "का", "की", "के",
];

/// Detect the language of `text`. Total: every input maps to a language.
pub fn detect_language(text: &str) -> Language {
    if HINDI_MARKERS.iter().any(|marker| text.contains(marker)) {
        return Language::Hi;
    }

    let lowered = text.to_lowercase();
    if SPANISH_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        return Language::Es;
    }

    Language::En
}
