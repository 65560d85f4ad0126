//! FAQ similarity matching
//!
//! Penultimate fallback: scores every FAQ question variant against the
//! query with a blend of edit-similarity and token overlap, floored on a
//! substring hit either way.

use tracing::debug;

use frontdesk_core::normalize;
use frontdesk_kb::FaqEntry;

use crate::{similarity, Thresholds};

/// Find the best-matching FAQ for an English query, if any clears the
/// acceptance threshold. First FAQ/variant reaching the maximum wins.
pub fn match_faq<'a>(query: &str, faqs: &'a [FaqEntry], thresholds: &Thresholds) -> Option<&'a FaqEntry> {
    let user = normalize(query);
    if user.is_empty() {
        return None;
    }

    let mut best: Option<&FaqEntry> = None;
    let mut best_score = 0.0;

    for faq in faqs {
        for variant in faq.question.variants() {
            let question = normalize(variant);
            if question.is_empty() {
                continue;
            }

            let sim = similarity::ratio(&question, &user);
            let overlap = similarity::token_overlap(&question, &user);
            let mut combined = sim * 0.7 + overlap * 0.3;

            // substring either way gets a floor score
            if user.contains(&question) || question.contains(&user) {
                combined = combined.max(thresholds.faq_substring_floor);
            }

            if combined > best_score && combined >= thresholds.faq_accept {
                best_score = combined;
                best = Some(faq);
            }
        }
    }

    if let Some(faq) = best {
        debug!(score = best_score, question = faq.question.english(), "faq matched");
    }
    best
}
