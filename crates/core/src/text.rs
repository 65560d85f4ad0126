//! Text normalization for matching
//!
//! All matching runs over normalized text: lowercased, restricted to the
//! character set the matchers understand (Latin letters, the Devanagari
//! block, digits, space, period, hyphen), with whitespace collapsed.

use crate::language::is_devanagari;

fn is_permitted(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || is_devanagari(c) || matches!(c, '.' | '-')
}

/// Normalize text for matching. Idempotent.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_space = false;
    for c in lowered.chars() {
        if is_permitted(c) {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            // anything else (including whitespace) separates tokens
            pending_space = true;
        }
    }
    out
}

/// Split normalized text into tokens
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips() {
        assert_eq!(normalize("Hello, World!"), "hello world");
        assert_eq!(normalize("Dr. Khan?"), "dr. khan");
    }

    #[test]
    fn test_keeps_devanagari() {
        assert_eq!(normalize("डॉ खान से मिलना है!"), "डॉ खान से मिलना है");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  chest   pain \t now "), "chest pain now");
    }

    #[test]
    fn test_idempotent() {
        for s in [
            "Hello, World!",
            "डॉ. खान से मिलना है",
            "  a  b--c .. d  ",
            "visiting hours?",
            "",
        ] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("Meet Dr. Khan!"), vec!["meet", "dr.", "khan"]);
        assert!(tokenize("   ").is_empty());
    }
}
