//! Keyword intent matching

use serde::{Deserialize, Serialize};

use frontdesk_kb::Lexicon;

use crate::{similarity, Thresholds};

/// Keyword-driven query intents, in classification priority order
///
/// Named-doctor extraction, symptom matching and FAQ matching are separate
/// resolvers; this enum covers the intents driven purely by keyword sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Contact,
    Timings,
    Departments,
    Doctors,
    Services,
    Process,
    Fees,
    Documents,
    Emergency,
}

impl Intent {
    /// Lexicon key for this intent
    pub fn name(&self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Timings => "timings",
            Self::Departments => "departments",
            Self::Doctors => "doctors",
            Self::Services => "services",
            Self::Process => "process",
            Self::Fees => "fees",
            Self::Documents => "documents",
            Self::Emergency => "emergency",
        }
    }

    /// All keyword intents in priority order. The order is semantically
    /// significant: keyword sets overlap, and the first match wins.
    pub fn in_priority_order() -> &'static [Intent] {
        &[
            Self::Contact,
            Self::Timings,
            Self::Departments,
            Self::Doctors,
            Self::Services,
            Self::Process,
            Self::Fees,
            Self::Documents,
            Self::Emergency,
        ]
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Check whether a normalized English query carries an intent
///
/// True if any configured keyword (any language) occurs as a substring of
/// the query, or any query token is within fuzzy distance of a keyword.
pub fn has_intent(query: &str, intent: Intent, lexicon: &Lexicon, thresholds: &Thresholds) -> bool {
    let tokens: Vec<&str> = query.split_whitespace().collect();
    for keyword in lexicon.keywords(intent.name()) {
        if query.contains(keyword.as_str()) {
            return true;
        }
        for token in &tokens {
            if similarity::ratio(keyword, token) >= thresholds.intent_fuzzy {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Lexicon, Thresholds) {
        (Lexicon::default(), Thresholds::default())
    }

    #[test]
    fn test_substring_keyword() {
        let (lexicon, thresholds) = setup();
        assert!(has_intent("what are the visiting hours", Intent::Timings, &lexicon, &thresholds));
        assert!(has_intent("संपर्क नंबर क्या है", Intent::Contact, &lexicon, &thresholds));
    }

    #[test]
    fn test_fuzzy_token() {
        let (lexicon, thresholds) = setup();
        // minor misspelling of "timing"
        assert!(has_intent("opd timming please", Intent::Timings, &lexicon, &thresholds));
    }

    #[test]
    fn test_no_intent() {
        let (lexicon, thresholds) = setup();
        assert!(!has_intent("the weather is nice today", Intent::Emergency, &lexicon, &thresholds));
    }

    #[test]
    fn test_priority_order_is_stable() {
        let order = Intent::in_priority_order();
        assert_eq!(order.first(), Some(&Intent::Contact));
        assert_eq!(order.last(), Some(&Intent::Emergency));
        assert_eq!(order.len(), 9);
    }
}
