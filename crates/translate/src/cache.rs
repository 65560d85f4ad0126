//! Caching translator wrapper
//!
//! Translation requests repeat heavily (the same greetings and questions
//! arrive all day), so results are cached by (text, source, target) for
//! the process lifetime. Entries are idempotent; a racing double-insert
//! only costs one redundant external call.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use frontdesk_core::{Language, Result, Translator};

/// Wraps any translator with an unbounded in-process cache
pub struct CachingTranslator<T> {
    inner: T,
    cache: DashMap<(String, Language, Language), String>,
    name: String,
}

impl<T: Translator> CachingTranslator<T> {
    pub fn new(inner: T) -> Self {
        let name = format!("caching({})", inner.name());
        Self {
            inner,
            cache: DashMap::new(),
            name,
        }
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[async_trait]
impl<T: Translator> Translator for CachingTranslator<T> {
    async fn translate(&self, text: &str, from: Language, to: Language) -> Result<String> {
        if text.trim().is_empty() || from == to {
            return Ok(text.to_string());
        }

        let key = (text.to_string(), from, to);
        if let Some(hit) = self.cache.get(&key) {
            debug!(from = from.code(), to = to.code(), "translation cache hit");
            return Ok(hit.clone());
        }

        let translated = self.inner.translate(text, from, to).await?;
        self.cache.insert(key, translated.clone());
        Ok(translated)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
