//! Hospital knowledge base
//!
//! Static hospital facts loaded once at startup: hospital contact and
//! timings, departments with their doctors, the service catalog, FAQ set
//! and the appointment process. Also builds the derived doctor-name index
//! and carries the matching lexicon (intent keywords, department synonyms,
//! symptom table).
//!
//! Loading is fail-fast: a malformed file prevents startup rather than
//! degrading silently.

pub mod index;
pub mod lexicon;
pub mod loader;
pub mod model;

mod data;

pub use index::{DoctorIndex, DoctorIndexEntry};
pub use lexicon::{Lexicon, SymptomRule};
pub use model::{
    AppointmentProcess, Department, Doctor, FaqEntry, HospitalInfo, HospitalKb, HospitalTimings,
};

use thiserror::Error;

/// Knowledge-base errors (all fatal at load time)
#[derive(Error, Debug)]
pub enum KbError {
    #[error("Knowledge base file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse knowledge base: {0}")]
    ParseError(String),

    #[error("Invalid knowledge base: {0}")]
    Invalid(String),
}
