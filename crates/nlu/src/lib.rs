//! Fuzzy matching over the hospital knowledge base
//!
//! All matchers in this crate are pure functions of the KB snapshot and the
//! (already English, already normalized) query: no I/O, no shared mutable
//! state, total: they return `None` rather than fail.

pub mod department;
pub mod doctor;
pub mod faq;
pub mod intent;
pub mod similarity;
pub mod symptom;

pub use department::best_department_match;
pub use doctor::{extract_named_doctor, match_doctor};
pub use faq::match_faq;
pub use intent::{has_intent, Intent};
pub use similarity::{ratio, token_overlap};
pub use symptom::match_symptom;

use serde::{Deserialize, Serialize};

/// Score thresholds used across the matchers
///
/// The values were chosen empirically against real front-desk queries and
/// are kept configurable rather than re-derived. Defaults preserve the
/// tuned values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thresholds {
    /// Word-level fuzzy match for intent keywords
    #[serde(default = "default_intent_fuzzy")]
    pub intent_fuzzy: f64,
    /// Department name/synonym acceptance
    #[serde(default = "default_department")]
    pub department: f64,
    /// Doctor full-candidate acceptance
    #[serde(default = "default_doctor")]
    pub doctor: f64,
    /// Doctor single-token fallback acceptance
    #[serde(default = "default_doctor_token")]
    pub doctor_token: f64,
    /// Symptom whole-query similarity
    #[serde(default = "default_symptom")]
    pub symptom: f64,
    /// FAQ combined-score acceptance
    #[serde(default = "default_faq_accept")]
    pub faq_accept: f64,
    /// FAQ score floor applied on a substring hit
    #[serde(default = "default_faq_floor")]
    pub faq_substring_floor: f64,
}

fn default_intent_fuzzy() -> f64 {
    0.85
}
fn default_department() -> f64 {
    0.65
}
fn default_doctor() -> f64 {
    0.82
}
fn default_doctor_token() -> f64 {
    0.92
}
fn default_symptom() -> f64 {
    0.8
}
fn default_faq_accept() -> f64 {
    0.6
}
fn default_faq_floor() -> f64 {
    0.8
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            intent_fuzzy: default_intent_fuzzy(),
            department: default_department(),
            doctor: default_doctor(),
            doctor_token: default_doctor_token(),
            symptom: default_symptom(),
            faq_accept: default_faq_accept(),
            faq_substring_floor: default_faq_floor(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_preserved() {
        let t = Thresholds::default();
        assert_eq!(t.intent_fuzzy, 0.85);
        assert_eq!(t.department, 0.65);
        assert_eq!(t.doctor, 0.82);
        assert_eq!(t.doctor_token, 0.92);
        assert_eq!(t.symptom, 0.8);
        assert_eq!(t.faq_accept, 0.6);
        assert_eq!(t.faq_substring_floor, 0.8);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let t: Thresholds = serde_json::from_str(r#"{"department": 0.7}"#).unwrap();
        assert_eq!(t.department, 0.7);
        assert_eq!(t.doctor, 0.82);
    }
}
