//! Shared error type

use thiserror::Error;

/// Errors surfaced by the front-desk core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Translation failed: {0}")]
    Translation(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Knowledge base error: {0}")]
    KnowledgeBase(String),
}

pub type Result<T> = std::result::Result<T, Error>;
