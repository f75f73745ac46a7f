//! Per-language stop-word lists.
//!
//! Shared by the normalizer and the TF-IDF analyzer so both agree on which
//! tokens carry no meaning. Lookups expect lowercased input.

use std::collections::HashSet;

use healthfaq_core::Language;
use once_cell::sync::Lazy;

pub const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
    "any", "are", "around", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "cannot", "could", "did", "do", "does", "doing",
    "done", "down", "during", "each", "either", "else", "ever", "every", "few", "for", "from",
    "further", "get", "gets", "getting", "got", "had", "has", "have", "having", "he", "her",
    "here", "hers", "herself", "him", "himself", "his", "how", "however", "i", "if", "in",
    "into", "is", "it", "its", "itself", "just", "let", "may", "me", "might", "mine", "more",
    "most", "much", "must", "my", "myself", "neither", "no", "nor", "not", "now", "of", "off",
    "often", "on", "once", "only", "or", "other", "others", "otherwise", "our", "ours",
    "ourselves", "out", "over", "own", "per", "please", "quite", "rather", "really", "same",
    "shall", "she", "should", "since", "so", "some", "still", "such", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "there", "therefore", "these", "they",
    "this", "those", "though", "through", "thus", "to", "together", "too", "toward",
    "towards", "under", "until", "up", "upon", "us", "very", "via", "was", "we", "well",
    "were", "what", "whatever", "when", "whenever", "where", "whether", "which", "while",
    "who", "whoever", "whom", "whose", "why", "will", "with", "within", "without", "would",
    "yet", "you", "your", "yours", "yourself", "yourselves",
];

pub const SPANISH: &[&str] = &[
    "a", "al", "algo", "algunas", "algunos", "ante", "antes", "como", "cómo", "con", "contra",
    "cual", "cuál", "cuando", "cuándo", "da", "de", "del", "desde", "donde", "dónde", "durante",
    "e", "el", "él", "ella", "ellas", "ellos", "en", "entre", "era", "es", "esa", "esas", "ese",
    "eso", "esos", "esta", "está", "estas", "están", "este", "esto", "estos", "fue", "ha",
    "hacer", "han", "hay", "la", "las", "le", "les", "lo", "los", "me", "mi", "mis", "mucho",
    "muy", "más", "nada", "ni", "no", "nos", "o", "otra", "otro", "para", "pero", "poco",
    "por", "porque", "puede", "puedo", "que", "qué", "quien", "quién", "se", "ser", "si", "sí",
    "sin", "sobre", "son", "su", "sus", "también", "te", "tengo", "tiene", "todo", "tu", "tus",
    "un", "una", "unas", "uno", "unos", "y", "ya", "yo",
];

pub const HINDI: &[&str] = &[
    "का", "की", "के", "में", "से", "को", "पर", "है", "हैं", "था", "थी", "थे", "होना", "होने",
    "वाला", "वाली", "वाले", "यह", "वह", "इस", "उस", "और", "या", "तो", "जो", "कि", "लिए",
    "साथ", "बाद", "पहले", "दौरान", "तक", "द्वारा", "क्या", "मैं", "मुझे", "हूं", "हूँ", "आप",
    "अपना", "अपने", "कर", "करें", "करना", "नहीं", "भी", "एक", "ही", "ने", "हो", "कैसे",
];

static ENGLISH_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| ENGLISH.iter().copied().collect());
static SPANISH_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| SPANISH.iter().copied().collect());
static HINDI_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| HINDI.iter().copied().collect());

/// Stop-word set for a language.
pub fn for_language(language: Language) -> &'static HashSet<&'static str> {
    match language {
        Language::En => &ENGLISH_SET,
        Language::Es => &SPANISH_SET,
        Language::Hi => &HINDI_SET,
    }
}

/// Whether `word` (already lowercased) is a stop word in `language`.
pub fn is_stop_word(word: &str, language: Language) -> bool {
    for_language(language).contains(word)
}
