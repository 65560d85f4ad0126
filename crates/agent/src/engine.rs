//! Agent entry point

use std::sync::Arc;

use tracing::debug;

use frontdesk_core::{normalize, Language, PassthroughTranslator, Translator};
use frontdesk_kb::{DoctorIndex, HospitalKb, Lexicon};
use frontdesk_nlu::Thresholds;
use frontdesk_translate::{translate_or_original, CachingTranslator};

use crate::response::{self, QueryResult};
use crate::strategy::{default_chain, ResolveContext, Strategy};
use crate::AgentError;

/// Resolves front-desk questions into typed, localized answers
///
/// Non-English questions are translated to English first so that a single
/// English keyword table drives classification; the Devanagari keywords in
/// the lexicon still cover the words web translation tends to leave alone
/// (names, drug words, transliterations).
pub struct FrontDeskAgent {
    kb: HospitalKb,
    index: DoctorIndex,
    lexicon: Lexicon,
    thresholds: Thresholds,
    translator: Arc<dyn Translator>,
    strategies: Vec<Box<dyn Strategy>>,
}

impl FrontDeskAgent {
    /// Build an agent over a validated knowledge base
    pub fn new(
        kb: HospitalKb,
        lexicon: Lexicon,
        thresholds: Thresholds,
        translator: Arc<dyn Translator>,
    ) -> Result<Self, AgentError> {
        kb.validate()?;
        let index = DoctorIndex::build(&kb);
        Ok(Self {
            kb,
            index,
            lexicon,
            thresholds,
            translator,
            strategies: default_chain(),
        })
    }

    /// Agent over the built-in knowledge base, no external translation
    pub fn with_defaults() -> Self {
        // the built-in KB is known valid, skip the fallible path
        let kb = HospitalKb::default();
        let index = DoctorIndex::build(&kb);
        Self {
            kb,
            index,
            lexicon: Lexicon::default(),
            thresholds: Thresholds::default(),
            translator: Arc::new(CachingTranslator::new(PassthroughTranslator)),
            strategies: default_chain(),
        }
    }

    pub fn kb(&self) -> &HospitalKb {
        &self.kb
    }

    /// Answer a question, localized to `language`
    ///
    /// Total: every input resolves to some payload, the worst case being
    /// the localized fallback text.
    pub async fn answer(&self, question: &str, language: Language) -> QueryResult {
        let working = if language == Language::English {
            question.to_string()
        } else {
            translate_or_original(
                self.translator.as_ref(),
                question,
                language,
                Language::English,
            )
            .await
        };
        let query = normalize(&working);
        debug!(%language, query, "resolving");

        if !query.is_empty() {
            let cx = ResolveContext {
                kb: &self.kb,
                index: &self.index,
                lexicon: &self.lexicon,
                thresholds: &self.thresholds,
                language,
                query: &query,
            };
            for strategy in &self.strategies {
                if let Some(result) = strategy.resolve(&cx) {
                    debug!(strategy = strategy.name(), "matched");
                    return result;
                }
            }
        }

        QueryResult::Text {
            answer: response::fallback_answer(language),
        }
    }
}
