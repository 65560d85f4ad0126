//! Derived doctor-name index
//!
//! Built once from a validated knowledge base and read-only afterwards.
//! Every language variant of a doctor's name (and its honorific-stripped
//! clean form) contributes one entry, so several entries may point to the
//! same doctor. Rebuilt only when the knowledge base reloads.

use frontdesk_core::normalize;
use tracing::debug;

use crate::model::{Department, Doctor, HospitalKb};

/// One index entry: a normalized name variant plus back-references
#[derive(Debug, Clone)]
pub struct DoctorIndexEntry {
    /// Normalized, "dr."-stripped lowercase name variant
    pub match_key: String,
    /// Index into `HospitalKb::departments`
    pub department: usize,
    /// Index into that department's doctor list
    pub doctor: usize,
}

impl DoctorIndexEntry {
    pub fn department_of<'a>(&self, kb: &'a HospitalKb) -> &'a Department {
        &kb.departments[self.department]
    }

    pub fn doctor_of<'a>(&self, kb: &'a HospitalKb) -> &'a Doctor {
        &kb.departments[self.department].doctors[self.doctor]
    }
}

/// Read-only doctor-name index
#[derive(Debug, Clone, Default)]
pub struct DoctorIndex {
    entries: Vec<DoctorIndexEntry>,
}

/// Normalize a name and strip the "dr."/"dr " honorific
pub fn clean_doctor_name(name: &str) -> String {
    let normalized = normalize(name);
    let stripped = normalized.replace("dr.", " ").replace("dr ", " ");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl DoctorIndex {
    /// Build the index from a validated knowledge base
    pub fn build(kb: &HospitalKb) -> Self {
        let mut entries = Vec::new();
        for (dept_idx, dept) in kb.departments.iter().enumerate() {
            for (doc_idx, doc) in dept.doctors.iter().enumerate() {
                let mut keys: Vec<String> = Vec::new();
                for variant in doc.name.variants() {
                    let key = clean_doctor_name(variant);
                    if !key.is_empty() && !keys.contains(&key) {
                        keys.push(key);
                    }
                }
                for match_key in keys {
                    entries.push(DoctorIndexEntry {
                        match_key,
                        department: dept_idx,
                        doctor: doc_idx,
                    });
                }
            }
        }
        debug!(entries = entries.len(), "doctor index built");
        Self { entries }
    }

    pub fn entries(&self) -> &[DoctorIndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
