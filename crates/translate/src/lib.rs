//! Translator implementations
//!
//! The matching pipeline always works in English, so every incoming query
//! crosses the translator boundary first. Failure never propagates to the
//! caller: `translate_or_original` degrades to the input text.

pub mod cache;
pub mod google;

pub use cache::CachingTranslator;
pub use google::GoogleWebTranslator;

use tracing::warn;

use frontdesk_core::{Language, Translator};

/// Translate, degrading to the original text on failure or empty output
pub async fn translate_or_original(
    translator: &dyn Translator,
    text: &str,
    from: Language,
    to: Language,
) -> String {
    match translator.translate(text, from, to).await {
        Ok(translated) if !translated.trim().is_empty() => translated,
        Ok(_) => text.to_string(),
        Err(e) => {
            warn!(translator = translator.name(), error = %e, "translation failed, using original text");
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use frontdesk_core::{Error, Result};

    struct FailingTranslator;

    #[async_trait]
    impl Translator for FailingTranslator {
        async fn translate(&self, _text: &str, _from: Language, _to: Language) -> Result<String> {
            Err(Error::Translation("boom".into()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    struct EmptyTranslator;

    #[async_trait]
    impl Translator for EmptyTranslator {
        async fn translate(&self, _text: &str, _from: Language, _to: Language) -> Result<String> {
            Ok(String::new())
        }

        fn name(&self) -> &str {
            "empty"
        }
    }

    #[tokio::test]
    async fn test_failure_degrades_to_original() {
        let out =
            translate_or_original(&FailingTranslator, "नमस्ते", Language::Hindi, Language::English)
                .await;
        assert_eq!(out, "नमस्ते");
    }

    #[tokio::test]
    async fn test_empty_output_degrades_to_original() {
        let out =
            translate_or_original(&EmptyTranslator, "hello", Language::English, Language::Hindi)
                .await;
        assert_eq!(out, "hello");
    }
}
