//! Localized text values with language fallback
//!
//! Knowledge-base files key user-facing strings by language
//! (`english`/`hindi`/`marathi`), but older records may carry a plain
//! string. `pick` implements the fallback law used everywhere:
//! requested language if present and non-empty, else English, else "".

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::Language;

/// A user-facing string, either plain or keyed per language
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum LocalizedText {
    ByLanguage(HashMap<Language, String>),
    Plain(String),
}

impl LocalizedText {
    /// Pick the value for a language, falling back to English, then ""
    pub fn pick(&self, lang: Language) -> &str {
        match self {
            Self::Plain(s) => s,
            Self::ByLanguage(map) => {
                if let Some(s) = map.get(&lang).filter(|s| !s.is_empty()) {
                    return s;
                }
                map.get(&Language::English).map(String::as_str).unwrap_or("")
            }
        }
    }

    /// Shorthand for the English value
    pub fn english(&self) -> &str {
        self.pick(Language::English)
    }

    /// All distinct string variants, across every language
    pub fn variants(&self) -> Vec<&str> {
        match self {
            Self::Plain(s) => vec![s.as_str()],
            Self::ByLanguage(map) => map.values().map(String::as_str).collect(),
        }
    }

    /// Build from explicit per-language values
    pub fn new(english: &str, hindi: &str, marathi: &str) -> Self {
        let mut map = HashMap::new();
        map.insert(Language::English, english.to_string());
        if !hindi.is_empty() {
            map.insert(Language::Hindi, hindi.to_string());
        }
        if !marathi.is_empty() {
            map.insert(Language::Marathi, marathi.to_string());
        }
        Self::ByLanguage(map)
    }

    /// Build from a single plain string
    pub fn plain(s: &str) -> Self {
        Self::Plain(s.to_string())
    }
}

/// An ordered list of steps, either plain or keyed per language
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum LocalizedSteps {
    ByLanguage(HashMap<Language, Vec<String>>),
    Plain(Vec<String>),
}

impl LocalizedSteps {
    /// Pick the step list for a language, falling back to English, then empty
    pub fn pick(&self, lang: Language) -> &[String] {
        match self {
            Self::Plain(steps) => steps,
            Self::ByLanguage(map) => {
                if let Some(steps) = map.get(&lang).filter(|s| !s.is_empty()) {
                    return steps;
                }
                map.get(&Language::English).map(Vec::as_slice).unwrap_or(&[])
            }
        }
    }
}
