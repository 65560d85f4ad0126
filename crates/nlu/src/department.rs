//! Best-department matching

use frontdesk_kb::{HospitalKb, Lexicon};

use crate::similarity;

/// Find the department a query most likely refers to
///
/// Every department's candidate set is its English name (lowercased) plus
/// the configured synonyms in all three languages. The single best
/// (candidate, token) similarity across all departments decides; ties keep
/// the first department in KB order. Returns the English key.
pub fn best_department_match(
    query: &str,
    kb: &HospitalKb,
    lexicon: &Lexicon,
    threshold: f64,
) -> Option<String> {
    let tokens: Vec<&str> = query.split_whitespace().collect();
    let mut best: Option<&str> = None;
    let mut best_score = 0.0;

    for dept in &kb.departments {
        let key = dept.key();
        let name_lower = key.to_lowercase();
        let candidates = std::iter::once(name_lower.as_str())
            .chain(lexicon.synonyms(key).iter().map(String::as_str));
        for candidate in candidates {
            for token in &tokens {
                let score = similarity::ratio(candidate, token);
                if score > best_score {
                    best_score = score;
                    best = Some(key);
                }
            }
        }
    }

    if best_score >= threshold {
        best.map(str::to_string)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Thresholds;

    fn setup() -> (HospitalKb, Lexicon, f64) {
        (HospitalKb::default(), Lexicon::default(), Thresholds::default().department)
    }

    #[test]
    fn test_exact_name() {
        let (kb, lexicon, threshold) = setup();
        let dept = best_department_match("doctors in cardiology", &kb, &lexicon, threshold);
        assert_eq!(dept.as_deref(), Some("Cardiology"));
    }

    #[test]
    fn test_synonym() {
        let (kb, lexicon, threshold) = setup();
        let dept = best_department_match("i need a heart specialist", &kb, &lexicon, threshold);
        assert_eq!(dept.as_deref(), Some("Cardiology"));

        let dept = best_department_match("bone doctor please", &kb, &lexicon, threshold);
        assert_eq!(dept.as_deref(), Some("Orthopedics"));
    }

    #[test]
    fn test_hindi_synonym() {
        let (kb, lexicon, threshold) = setup();
        let dept = best_department_match("हृदयशास्त्र डॉक्टर", &kb, &lexicon, threshold);
        assert_eq!(dept.as_deref(), Some("Cardiology"));
    }

    #[test]
    fn test_no_match_below_threshold() {
        let (kb, lexicon, threshold) = setup();
        let dept = best_department_match("hello there friend", &kb, &lexicon, threshold);
        assert_eq!(dept, None);
    }

    #[test]
    fn test_deterministic() {
        let (kb, lexicon, threshold) = setup();
        let a = best_department_match("ortho doctor", &kb, &lexicon, threshold);
        let b = best_department_match("ortho doctor", &kb, &lexicon, threshold);
        assert_eq!(a, b);
        assert_eq!(a.as_deref(), Some("Orthopedics"));
    }
}
