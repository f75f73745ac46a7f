//! Supported conversation languages.

use serde::{Deserialize, Serialize};

/// A language with its own corpus, stop words and canned texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English. Default when nothing else is detected.
    En,
    /// Spanish.
    Es,
    /// Hindi (Devanagari script).
    Hi,
}

impl Language {
    /// All supported languages, in detection-independent display order.
    pub fn all() -> &'static [Language] {
        &[Self::En, Self::Es, Self::Hi]
    }

    /// Parse an ISO 639-1 code. Only exact lowercase codes are accepted.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            "hi" => Some(Self::Hi),
            _ => None,
        }
    }

    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Hi => "hi",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::En
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
