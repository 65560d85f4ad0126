//! Knowledge-base data model

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use frontdesk_core::{Language, LocalizedSteps, LocalizedText};

use crate::KbError;

/// Root knowledge-base record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HospitalKb {
    pub hospital: HospitalInfo,
    pub departments: Vec<Department>,
    /// Service name (English key) → localized description
    #[serde(default)]
    pub services: HashMap<String, LocalizedText>,
    #[serde(default)]
    pub faqs: Vec<FaqEntry>,
    /// Action ("booking"/"cancel"/"edit") → localized steps
    #[serde(default)]
    pub appointment_process: HashMap<String, LocalizedSteps>,
}

/// Hospital identity, contact and timings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HospitalInfo {
    pub name: LocalizedText,
    pub address: LocalizedText,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub timings: HospitalTimings,
}

/// Operating hours, each localized
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HospitalTimings {
    pub general_opd: LocalizedText,
    pub emergency: LocalizedText,
    pub visiting_hours: LocalizedText,
}

/// A hospital department with its doctors
///
/// The English name (case-insensitive) is the natural key; there is no
/// surrogate id in this subsystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub name: LocalizedText,
    /// Consultation fee in INR; doctors without their own fee inherit this
    #[serde(default)]
    pub fees: Option<u32>,
    #[serde(default)]
    pub doctors: Vec<Doctor>,
}

impl Department {
    /// English name, the stable lookup key
    pub fn key(&self) -> &str {
        self.name.english()
    }
}

/// A doctor record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub name: LocalizedText,
    #[serde(default)]
    pub qualification: Option<LocalizedText>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub timings: Option<LocalizedText>,
    #[serde(default)]
    pub fees: Option<u32>,
}

/// A frequently-asked question with its answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: LocalizedText,
    pub answer: LocalizedText,
}

/// Appointment process actions understood by the process intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentProcess {
    Booking,
    Cancel,
    Edit,
}

impl AppointmentProcess {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Booking => "booking",
            Self::Cancel => "cancel",
            Self::Edit => "edit",
        }
    }
}

impl HospitalKb {
    /// Find a department by its English key (case-insensitive)
    pub fn department(&self, key: &str) -> Option<&Department> {
        self.departments
            .iter()
            .find(|d| d.key().eq_ignore_ascii_case(key))
    }

    /// Steps for an appointment process action in the given language
    pub fn process_steps(&self, action: AppointmentProcess, lang: Language) -> &[String] {
        self.appointment_process
            .get(action.key())
            .map(|s| s.pick(lang))
            .unwrap_or(&[])
    }

    /// Validate the knowledge base before anything derives from it
    ///
    /// Fails if the department list is empty or any user-facing name lacks
    /// an English value. Called by the loader; a KB that does not validate
    /// must never reach index construction.
    pub fn validate(&self) -> Result<(), KbError> {
        if self.hospital.name.english().is_empty() {
            return Err(KbError::Invalid("hospital name has no English value".into()));
        }
        if self.departments.is_empty() {
            return Err(KbError::Invalid("department list is empty".into()));
        }
        for dept in &self.departments {
            if dept.key().is_empty() {
                return Err(KbError::Invalid("department name has no English value".into()));
            }
            for doc in &dept.doctors {
                if doc.name.english().is_empty() {
                    return Err(KbError::Invalid(format!(
                        "doctor in department '{}' has no English name",
                        dept.key()
                    )));
                }
            }
        }
        for faq in &self.faqs {
            if faq.question.english().is_empty() {
                return Err(KbError::Invalid("FAQ question has no English value".into()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_kb_validates() {
        let kb = HospitalKb::default();
        assert!(kb.validate().is_ok());
    }

    #[test]
    fn test_department_lookup_case_insensitive() {
        let kb = HospitalKb::default();
        assert!(kb.department("cardiology").is_some());
        assert!(kb.department("Cardiology").is_some());
        assert!(kb.department("Dermatology").is_none());
    }

    #[test]
    fn test_empty_departments_invalid() {
        let mut kb = HospitalKb::default();
        kb.departments.clear();
        assert!(kb.validate().is_err());
    }

    #[test]
    fn test_doctor_without_english_name_invalid() {
        let mut kb = HospitalKb::default();
        kb.departments[0].doctors[0].name = LocalizedText::new("", "डॉ शर्मा", "");
        assert!(kb.validate().is_err());
    }

    #[test]
    fn test_process_steps_fallback_to_english() {
        let kb = HospitalKb::default();
        let en = kb.process_steps(AppointmentProcess::Booking, Language::English);
        assert!(!en.is_empty());
    }
}
