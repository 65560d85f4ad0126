//! Language definitions for the front-desk assistant
//!
//! The hospital serves patients in English, Hindi and Marathi. Hindi and
//! Marathi both use the Devanagari script, which matters for text
//! normalization and doctor-name extraction.

use serde::{Deserialize, Serialize};

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Marathi,
}

impl Language {
    /// Get ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Marathi => "mr",
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Marathi => "Marathi",
        }
    }

    /// Lowercase key used by knowledge-base files ("english"/"hindi"/"marathi")
    pub fn key(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Hindi => "hindi",
            Self::Marathi => "marathi",
        }
    }

    /// Parse from string (case-insensitive, accepts codes and names)
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "eng" | "english" => Some(Self::English),
            "hi" | "hin" | "hindi" => Some(Self::Hindi),
            "mr" | "mar" | "marathi" => Some(Self::Marathi),
            _ => None,
        }
    }

    /// Get all supported languages
    pub fn all() -> &'static [Language] {
        &[Self::English, Self::Hindi, Self::Marathi]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Check if a character belongs to the Devanagari block (U+0900..U+097F)
pub fn is_devanagari(c: char) -> bool {
    (0x0900..=0x097F).contains(&(c as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Hindi.code(), "hi");
        assert_eq!(Language::Marathi.code(), "mr");
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!(Language::from_str_loose("hi"), Some(Language::Hindi));
        assert_eq!(Language::from_str_loose("Marathi"), Some(Language::Marathi));
        assert_eq!(Language::from_str_loose("ENGLISH"), Some(Language::English));
        assert_eq!(Language::from_str_loose("tamil"), None);
    }

    #[test]
    fn test_language_key() {
        assert_eq!(Language::Marathi.key(), "marathi");
    }

    #[test]
    fn test_is_devanagari() {
        assert!(is_devanagari('ड'));
        assert!(is_devanagari('ॉ'));
        assert!(!is_devanagari('a'));
        assert!(!is_devanagari('1'));
    }

    #[test]
    fn test_serde_lowercase() {
        let lang: Language = serde_json::from_str("\"marathi\"").unwrap();
        assert_eq!(lang, Language::Marathi);
        assert_eq!(serde_json::to_string(&Language::Hindi).unwrap(), "\"hindi\"");
    }
}
