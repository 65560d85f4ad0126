//! Core types for the hospital front-desk assistant
//!
//! This crate provides foundational types used across all other crates:
//! - Language definitions (English, Hindi, Marathi)
//! - Localized text with language fallback
//! - Text normalization for matching
//! - The translator boundary trait
//! - Error types

pub mod error;
pub mod language;
pub mod localized;
pub mod text;
pub mod translate;

pub use error::{Error, Result};
pub use language::Language;
pub use localized::{LocalizedSteps, LocalizedText};
pub use text::{normalize, tokenize};
pub use translate::{PassthroughTranslator, Translator};
