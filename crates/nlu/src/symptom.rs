//! Symptom table matching

use frontdesk_kb::{Lexicon, SymptomRule};

use crate::{similarity, Thresholds};

/// Match a normalized query against the symptom table
///
/// A rule matches if its symptom occurs as a substring of the query, or its
/// similarity to the whole query exceeds the symptom threshold. The scan
/// stops at the first matching rule (table order), not the best one.
pub fn match_symptom<'a>(
    query: &str,
    lexicon: &'a Lexicon,
    thresholds: &Thresholds,
) -> Option<&'a SymptomRule> {
    if query.is_empty() {
        return None;
    }
    lexicon.symptoms.iter().find(|rule| {
        query.contains(rule.symptom.as_str())
            || similarity::ratio(&rule.symptom, query) > thresholds.symptom
    })
}
