//! Named-doctor extraction and matching
//!
//! Finds "dr khan" / "doctor priya" / "डॉ खान" style mentions, then matches
//! candidates against the doctor index with layered precedence:
//! containment first, then whole-candidate fuzzy score, then a token-wise
//! fallback.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use frontdesk_core::normalize;
use frontdesk_kb::{index::clean_doctor_name, DoctorIndex, DoctorIndexEntry};

use crate::{similarity, Thresholds};

/// Markers preceding a doctor name, over normalized text
static NAME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(dr\.?\s+[a-z\p{Devanagari}\-]+(?:\s+[a-z\p{Devanagari}\-]+)?)").unwrap(),
        Regex::new(r"(doctor\s+[a-z\p{Devanagari}\-]+)").unwrap(),
        Regex::new(r"(डॉ\.?\s*[a-z\p{Devanagari}\-]+)").unwrap(),
    ]
});

/// Match one candidate string against the doctor index
///
/// Precedence: an index key contained in the candidate (or vice versa) wins
/// immediately; otherwise the best whole-candidate similarity must clear
/// the doctor threshold; otherwise any candidate token of length >= 3
/// scoring above the token threshold against any key wins.
pub fn match_doctor<'a>(
    candidate: &str,
    index: &'a DoctorIndex,
    thresholds: &Thresholds,
) -> Option<&'a DoctorIndexEntry> {
    let cleaned = clean_doctor_name(candidate);
    if cleaned.is_empty() {
        return None;
    }

    let mut best: Option<&DoctorIndexEntry> = None;
    let mut best_score = 0.0;
    for entry in index.entries() {
        let key = &entry.match_key;
        // direct containment helps "meet dr khan"
        if cleaned.contains(key.as_str()) || key.contains(&cleaned) {
            return Some(entry);
        }
        let score = similarity::ratio(key, &cleaned);
        if score > best_score {
            best_score = score;
            best = Some(entry);
        }
    }
    if best_score >= thresholds.doctor {
        return best;
    }

    // token-wise fallback for partial mentions
    for token in cleaned.split_whitespace() {
        if token.chars().count() < 3 {
            continue;
        }
        for entry in index.entries() {
            if similarity::ratio(&entry.match_key, token) > thresholds.doctor_token {
                return Some(entry);
            }
        }
    }
    None
}

/// Extract a named doctor from a query, if one is confidently mentioned
///
/// Candidates come from the marker patterns plus the last two tokens
/// ("meet khan"); the whole query is retried once as a last resort.
pub fn extract_named_doctor<'a>(
    query: &str,
    index: &'a DoctorIndex,
    thresholds: &Thresholds,
) -> Option<&'a DoctorIndexEntry> {
    let normalized = normalize(query);

    let mut candidates: Vec<String> = Vec::new();
    for pattern in NAME_PATTERNS.iter() {
        for captures in pattern.captures_iter(&normalized) {
            if let Some(m) = captures.get(1) {
                candidates.push(m.as_str().to_string());
            }
        }
    }
    let words: Vec<&str> = normalized.split_whitespace().collect();
    if words.len() >= 2 {
        candidates.push(words[words.len() - 2..].join(" "));
    }

    for candidate in &candidates {
        if let Some(entry) = match_doctor(candidate, index, thresholds) {
            debug!(candidate = %candidate, key = %entry.match_key, "doctor matched");
            return Some(entry);
        }
    }
    // final attempt over the whole query
    match_doctor(&normalized, index, thresholds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontdesk_kb::HospitalKb;

    fn setup() -> (HospitalKb, DoctorIndex, Thresholds) {
        let kb = HospitalKb::default();
        let index = DoctorIndex::build(&kb);
        (kb, index, Thresholds::default())
    }

    #[test]
    fn test_marker_extraction() {
        let (kb, index, thresholds) = setup();
        let entry = extract_named_doctor("I want to meet Dr Khan", &index, &thresholds).unwrap();
        assert_eq!(entry.doctor_of(&kb).name.english(), "Dr. Khan");
        assert_eq!(entry.department_of(&kb).key(), "Cardiology");
    }

    #[test]
    fn test_devanagari_honorific() {
        let (kb, index, thresholds) = setup();
        let entry = extract_named_doctor("डॉ खान से मिलना है", &index, &thresholds).unwrap();
        assert_eq!(entry.doctor_of(&kb).name.english(), "Dr. Khan");
    }

    #[test]
    fn test_last_two_tokens_candidate() {
        let (kb, index, thresholds) = setup();
        let entry = extract_named_doctor("i want to meet khan", &index, &thresholds).unwrap();
        assert_eq!(entry.doctor_of(&kb).name.english(), "Dr. Khan");
    }

    #[test]
    fn test_containment_beats_fuzzy() {
        let (kb, index, thresholds) = setup();
        // "mehta" is an exact containment hit; a fuzzier name must not win
        let entry = match_doctor("dr mehta", &index, &thresholds).unwrap();
        assert_eq!(entry.doctor_of(&kb).name.english(), "Dr. Mehta");
    }

    #[test]
    fn test_misspelled_name_fuzzy() {
        let (kb, index, thresholds) = setup();
        let entry = match_doctor("dr deshmuk", &index, &thresholds);
        // "deshmuk" is contained in the "priya deshmukh" index key
        assert!(entry.is_some());
    }

    #[test]
    fn test_no_doctor_mentioned() {
        let (_kb, index, thresholds) = setup();
        assert!(extract_named_doctor("what are the visiting hours", &index, &thresholds).is_none());
        assert!(match_doctor("", &index, &thresholds).is_none());
    }
}
