//! Front-desk query resolver
//!
//! The sole entry point is [`FrontDeskAgent::answer`]: question in, typed
//! localized [`QueryResult`] out. Classification runs an ordered chain of
//! strategies (first match wins) over an English-normalized copy of the
//! query; every path ends in a valid localized payload, never an error.

pub mod engine;
pub mod response;
pub mod strategy;

pub use engine::FrontDeskAgent;
pub use response::{DoctorCard, ProcessInfo, QueryResult};
pub use strategy::{default_chain, ResolveContext, Strategy};

use thiserror::Error;

/// Agent construction errors (nothing fails at answer time)
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Knowledge base rejected: {0}")]
    KnowledgeBase(#[from] frontdesk_kb::KbError),
}
