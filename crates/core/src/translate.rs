//! Translator boundary
//!
//! The assistant always classifies in English, so incoming questions pass
//! through a translator first. Implementations live in `frontdesk-translate`;
//! callers must never surface a translation failure to the end user, since
//! the original text is always an acceptable fallback.

use async_trait::async_trait;

use crate::{Language, Result};

/// Translation interface
///
/// # Example
///
/// ```ignore
/// let english = translator
///     .translate("मुझे डॉक्टर से मिलना है", Language::Hindi, Language::English)
///     .await?;
/// ```
#[async_trait]
pub trait Translator: Send + Sync + 'static {
    /// Translate text between languages
    async fn translate(&self, text: &str, from: Language, to: Language) -> Result<String>;

    /// Get translator name for logging
    fn name(&self) -> &str;
}

/// Pass-through translator (returns input unchanged)
///
/// Used in tests and in deployments where queries are already English.
#[derive(Debug, Default, Clone)]
pub struct PassthroughTranslator;

#[async_trait]
impl Translator for PassthroughTranslator {
    async fn translate(&self, text: &str, _from: Language, _to: Language) -> Result<String> {
        Ok(text.to_string())
    }

    fn name(&self) -> &str {
        "passthrough"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_passthrough() {
        let translator = PassthroughTranslator;
        let out = translator
            .translate("नमस्ते", Language::Hindi, Language::English)
            .await
            .unwrap();
        assert_eq!(out, "नमस्ते");
        assert_eq!(translator.name(), "passthrough");
    }
}
