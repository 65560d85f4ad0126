//! Knowledge-base loading
//!
//! One-time, fail-fast. A malformed or invalid file aborts startup with a
//! diagnostic; the doctor index is only built from a KB that validated.

use std::path::Path;

use tracing::info;

use crate::{HospitalKb, KbError};

impl HospitalKb {
    /// Load from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, KbError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(KbError::FileNotFound(path.display().to_string()));
        }
        let content =
            std::fs::read_to_string(path).map_err(|e| KbError::ParseError(e.to_string()))?;
        Self::from_json_str(&content)
    }

    /// Load from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, KbError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(KbError::FileNotFound(path.display().to_string()));
        }
        let content =
            std::fs::read_to_string(path).map_err(|e| KbError::ParseError(e.to_string()))?;
        let kb: HospitalKb =
            serde_yaml::from_str(&content).map_err(|e| KbError::ParseError(e.to_string()))?;
        kb.validate()?;
        Self::log_loaded(&kb);
        Ok(kb)
    }

    /// Load from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self, KbError> {
        let kb: HospitalKb =
            serde_json::from_str(content).map_err(|e| KbError::ParseError(e.to_string()))?;
        kb.validate()?;
        Self::log_loaded(&kb);
        Ok(kb)
    }

    /// Load from a file, dispatching on extension (`.yaml`/`.yml` vs JSON)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, KbError> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        if path_str.ends_with(".yaml") || path_str.ends_with(".yml") {
            Self::from_yaml_file(path)
        } else {
            Self::from_json_file(path)
        }
    }

    fn log_loaded(kb: &HospitalKb) {
        info!(
            departments = kb.departments.len(),
            faqs = kb.faqs.len(),
            services = kb.services.len(),
            "knowledge base loaded"
        );
    }
}
