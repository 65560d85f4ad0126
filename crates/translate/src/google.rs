//! Google web-endpoint translator
//!
//! Best-effort client for the public `translate_a/single` endpoint. A
//! failed, empty or unchanged result is retried once with auto-detected
//! source before giving up; callers degrade to the original text via
//! `translate_or_original`.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use frontdesk_core::{Error, Language, Result, Translator};

const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Translator backed by the Google translate web endpoint
pub struct GoogleWebTranslator {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleWebTranslator {
    pub fn new() -> Result<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Translation(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    async fn fetch(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| Error::Translation(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::Translation(e.to_string()))?;

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::Translation(e.to_string()))?;

        parse_payload(&payload)
            .ok_or_else(|| Error::Translation("unexpected response shape".to_string()))
    }
}

/// Extract the translated text from the endpoint's nested-array payload
fn parse_payload(payload: &serde_json::Value) -> Option<String> {
    let segments = payload.get(0)?.as_array()?;
    let mut out = String::new();
    for segment in segments {
        if let Some(part) = segment.get(0).and_then(|v| v.as_str()) {
            out.push_str(part);
        }
    }
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

#[async_trait]
impl Translator for GoogleWebTranslator {
    async fn translate(&self, text: &str, from: Language, to: Language) -> Result<String> {
        if text.trim().is_empty() || from == to {
            return Ok(text.to_string());
        }

        let first = self.fetch(text, from.code(), to.code()).await;
        match first {
            Ok(translated)
                if !translated.trim().is_empty()
                    && !translated.trim().eq_ignore_ascii_case(text.trim()) =>
            {
                return Ok(translated);
            }
            Ok(_) | Err(_) => {
                debug!(from = from.code(), to = to.code(), "retrying with auto-detected source");
            }
        }

        // retry with auto-detected source; many queries are code-switched
        self.fetch(text, "auto", to.code()).await
    }

    fn name(&self) -> &str {
        "google-web"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_payload_joins_segments() {
        let payload = json!([
            [
                ["I want to ", "मुझे ", null],
                ["meet the doctor", "डॉक्टर से मिलना है", null]
            ],
            null,
            "hi"
        ]);
        assert_eq!(
            parse_payload(&payload).as_deref(),
            Some("I want to meet the doctor")
        );
    }

    #[test]
    fn test_parse_payload_rejects_garbage() {
        assert_eq!(parse_payload(&json!({"error": true})), None);
        assert_eq!(parse_payload(&json!([[]])), None);
        assert_eq!(parse_payload(&json!(null)), None);
    }

    #[tokio::test]
    async fn test_same_language_short_circuits() {
        let translator = GoogleWebTranslator::new().unwrap();
        let out = translator
            .translate("hello", Language::English, Language::English)
            .await
            .unwrap();
        assert_eq!(out, "hello");
    }
}
