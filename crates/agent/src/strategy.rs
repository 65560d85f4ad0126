//! Classification strategies
//!
//! Each strategy is a pure function from the resolve context to an
//! optional result. The chain order is fixed and semantically significant:
//! keyword sets overlap across intents, and the first match wins.

use tracing::debug;

use frontdesk_core::Language;
use frontdesk_kb::{AppointmentProcess, DoctorIndex, HospitalKb, Lexicon};
use frontdesk_nlu::{
    best_department_match, extract_named_doctor, has_intent, match_faq, match_symptom, Intent,
    Thresholds,
};

use crate::response::{
    self, doctor_card, DoctorCard, ProcessInfo, QueryResult,
};

/// Everything a strategy may look at
pub struct ResolveContext<'a> {
    pub kb: &'a HospitalKb,
    pub index: &'a DoctorIndex,
    pub lexicon: &'a Lexicon,
    pub thresholds: &'a Thresholds,
    /// Language the answer must be localized to
    pub language: Language,
    /// English working copy of the question, normalized
    pub query: &'a str,
}

impl ResolveContext<'_> {
    fn has_intent(&self, intent: Intent) -> bool {
        has_intent(self.query, intent, self.lexicon, self.thresholds)
    }

    fn contains_any(&self, markers: &[&str]) -> bool {
        markers.iter().any(|m| self.query.contains(m))
    }
}

/// One classification strategy
pub trait Strategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn resolve(&self, cx: &ResolveContext<'_>) -> Option<QueryResult>;
}

/// The fixed-priority strategy chain
pub fn default_chain() -> Vec<Box<dyn Strategy>> {
    vec![
        Box::new(NamedDoctorStrategy),
        Box::new(ContactStrategy),
        Box::new(TimingsStrategy),
        Box::new(DepartmentsStrategy),
        Box::new(DoctorsStrategy),
        Box::new(ServicesStrategy),
        Box::new(ProcessStrategy),
        Box::new(FeesStrategy),
        Box::new(DocumentsStrategy),
        Box::new(EmergencyStrategy),
        Box::new(SymptomStrategy),
        Box::new(FaqStrategy),
    ]
}

/// Confident doctor-name mention short-circuits everything else
pub struct NamedDoctorStrategy;

impl Strategy for NamedDoctorStrategy {
    fn name(&self) -> &'static str {
        "named_doctor"
    }

    fn resolve(&self, cx: &ResolveContext<'_>) -> Option<QueryResult> {
        let entry = extract_named_doctor(cx.query, cx.index, cx.thresholds)?;
        let dept = entry.department_of(cx.kb);
        let doc = entry.doctor_of(cx.kb);
        debug!(doctor = doc.name.english(), "named doctor resolved");

        let steps = cx
            .kb
            .process_steps(AppointmentProcess::Booking, cx.language)
            .to_vec();
        Some(QueryResult::Doctors {
            department: dept.name.pick(cx.language).to_string(),
            department_key: dept.key().to_string(),
            fees: dept.fees,
            doctors: vec![doctor_card(doc, dept, cx.language)],
            process: Some(ProcessInfo {
                action: AppointmentProcess::Booking.key().to_string(),
                steps,
            }),
            note: Some(response::preparation_note(cx.language)),
        })
    }
}

pub struct ContactStrategy;

impl Strategy for ContactStrategy {
    fn name(&self) -> &'static str {
        "contact"
    }

    fn resolve(&self, cx: &ResolveContext<'_>) -> Option<QueryResult> {
        if !cx.has_intent(Intent::Contact) {
            return None;
        }
        let h = &cx.kb.hospital;
        Some(QueryResult::Contact {
            name: h.name.pick(cx.language).to_string(),
            address: h.address.pick(cx.language).to_string(),
            phone: h.phone.clone(),
            email: h.email.clone(),
            website: h.website.clone(),
        })
    }
}

pub struct TimingsStrategy;

impl Strategy for TimingsStrategy {
    fn name(&self) -> &'static str {
        "timings"
    }

    fn resolve(&self, cx: &ResolveContext<'_>) -> Option<QueryResult> {
        if !cx.has_intent(Intent::Timings) {
            return None;
        }
        let t = &cx.kb.hospital.timings;
        Some(QueryResult::Timings {
            opd: t.general_opd.pick(cx.language).to_string(),
            emergency: t.emergency.pick(cx.language).to_string(),
            visiting: t.visiting_hours.pick(cx.language).to_string(),
        })
    }
}

pub struct DepartmentsStrategy;

impl Strategy for DepartmentsStrategy {
    fn name(&self) -> &'static str {
        "departments"
    }

    fn resolve(&self, cx: &ResolveContext<'_>) -> Option<QueryResult> {
        if !cx.has_intent(Intent::Departments) {
            return None;
        }
        Some(QueryResult::Departments {
            departments: cx
                .kb
                .departments
                .iter()
                .map(|d| d.name.pick(cx.language).to_string())
                .collect(),
            departments_key: cx.kb.departments.iter().map(|d| d.key().to_string()).collect(),
        })
    }
}

/// Doctors listing, department-scoped when one is recognized
pub struct DoctorsStrategy;

impl Strategy for DoctorsStrategy {
    fn name(&self) -> &'static str {
        "doctors"
    }

    fn resolve(&self, cx: &ResolveContext<'_>) -> Option<QueryResult> {
        if !cx.has_intent(Intent::Doctors) {
            return None;
        }

        if let Some(key) =
            best_department_match(cx.query, cx.kb, cx.lexicon, cx.thresholds.department)
        {
            let dept = cx.kb.department(&key)?;
            return Some(QueryResult::Doctors {
                department: dept.name.pick(cx.language).to_string(),
                department_key: key,
                fees: dept.fees,
                doctors: dept
                    .doctors
                    .iter()
                    .map(|doc| doctor_card(doc, dept, cx.language))
                    .collect(),
                process: None,
                note: None,
            });
        }

        // no department recognized: flatten every doctor, annotated with
        // its owning department
        let mut doctors: Vec<DoctorCard> = Vec::new();
        for dept in &cx.kb.departments {
            for doc in &dept.doctors {
                let mut card = doctor_card(doc, dept, cx.language);
                card.department = Some(dept.name.pick(cx.language).to_string());
                card.department_key = Some(dept.key().to_string());
                doctors.push(card);
            }
        }
        Some(QueryResult::Doctors {
            department: "All".to_string(),
            department_key: "All".to_string(),
            fees: None,
            doctors,
            process: None,
            note: None,
        })
    }
}

/// Services catalog, with hand-written sub-checks for specific facilities
///
/// The sub-checks predate the keyword mechanism and behave differently on
/// purpose; they stay separate rather than folded into the lexicon.
pub struct ServicesStrategy;

const SERVICE_FILTERS: &[(&str, &[&str])] = &[
    ("ambulance", &["ambulance", "रुग्णवाहिका", "एम्बुलेंस"]),
    ("pharmacy", &["pharmacy", "फार्मेसी"]),
    ("lab", &["lab", "लैब", "लॅब"]),
    ("insurance", &["insurance", "बीमा", "विमा"]),
];

const PARKING_MARKERS: &[&str] = &["parking", "पार्किंग"];

impl Strategy for ServicesStrategy {
    fn name(&self) -> &'static str {
        "services"
    }

    fn resolve(&self, cx: &ResolveContext<'_>) -> Option<QueryResult> {
        if !cx.has_intent(Intent::Services) {
            return None;
        }

        if cx.contains_any(PARKING_MARKERS) {
            return Some(QueryResult::Text {
                answer: response::parking_answer(cx.language),
            });
        }

        for (service_key, markers) in SERVICE_FILTERS {
            if !cx.contains_any(markers) {
                continue;
            }
            let matched: std::collections::BTreeMap<String, String> = cx
                .kb
                .services
                .iter()
                .filter(|(key, _)| key.to_lowercase().contains(service_key))
                .map(|(key, value)| (key.clone(), value.pick(cx.language).to_string()))
                .collect();
            if !matched.is_empty() {
                let keys = matched.keys().cloned().collect();
                return Some(QueryResult::Services {
                    services: matched,
                    services_key: keys,
                });
            }
        }

        // full catalog
        let services: std::collections::BTreeMap<String, String> = cx
            .kb
            .services
            .iter()
            .map(|(key, value)| (key.clone(), value.pick(cx.language).to_string()))
            .collect();
        let keys = services.keys().cloned().collect();
        Some(QueryResult::Services {
            services,
            services_key: keys,
        })
    }
}

/// Appointment process steps (booking, cancel, edit)
pub struct ProcessStrategy;

impl Strategy for ProcessStrategy {
    fn name(&self) -> &'static str {
        "process"
    }

    fn resolve(&self, cx: &ResolveContext<'_>) -> Option<QueryResult> {
        if !cx.has_intent(Intent::Process) {
            return None;
        }

        let action = if cx.contains_any(&["cancel", "रद्द"]) {
            AppointmentProcess::Cancel
        } else if cx.contains_any(&["edit", "change", "modify", "बदल", "रीशेड्यूल"]) {
            AppointmentProcess::Edit
        } else {
            AppointmentProcess::Booking
        };

        Some(QueryResult::Process {
            action: action.key().to_string(),
            steps: cx.kb.process_steps(action, cx.language).to_vec(),
        })
    }
}

pub struct FeesStrategy;

impl Strategy for FeesStrategy {
    fn name(&self) -> &'static str {
        "fees"
    }

    fn resolve(&self, cx: &ResolveContext<'_>) -> Option<QueryResult> {
        if !cx.has_intent(Intent::Fees) {
            return None;
        }
        Some(QueryResult::Text {
            answer: response::fees_answer(cx.language),
        })
    }
}

pub struct DocumentsStrategy;

impl Strategy for DocumentsStrategy {
    fn name(&self) -> &'static str {
        "documents"
    }

    fn resolve(&self, cx: &ResolveContext<'_>) -> Option<QueryResult> {
        if !cx.has_intent(Intent::Documents) {
            return None;
        }
        Some(QueryResult::Text {
            answer: response::documents_answer(cx.language),
        })
    }
}

pub struct EmergencyStrategy;

impl Strategy for EmergencyStrategy {
    fn name(&self) -> &'static str {
        "emergency"
    }

    fn resolve(&self, cx: &ResolveContext<'_>) -> Option<QueryResult> {
        if !cx.has_intent(Intent::Emergency) {
            return None;
        }
        Some(QueryResult::Text {
            answer: response::emergency_answer(cx.language),
        })
    }
}

/// Symptom table lookup routing to a department
pub struct SymptomStrategy;

impl Strategy for SymptomStrategy {
    fn name(&self) -> &'static str {
        "symptom"
    }

    fn resolve(&self, cx: &ResolveContext<'_>) -> Option<QueryResult> {
        let rule = match_symptom(cx.query, cx.lexicon, cx.thresholds)?;
        // a rule naming a department the KB doesn't carry is skipped
        let dept = cx.kb.department(&rule.department)?;
        Some(QueryResult::Symptom {
            symptom: rule.symptom.clone(),
            department: dept.name.pick(cx.language).to_string(),
            department_key: dept.key().to_string(),
            fees: dept.fees,
            doctors: dept
                .doctors
                .iter()
                .map(|doc| doctor_card(doc, dept, cx.language))
                .collect(),
        })
    }
}

/// FAQ similarity match, the penultimate fallback
pub struct FaqStrategy;

impl Strategy for FaqStrategy {
    fn name(&self) -> &'static str {
        "faq"
    }

    fn resolve(&self, cx: &ResolveContext<'_>) -> Option<QueryResult> {
        let faq = match_faq(cx.query, &cx.kb.faqs, cx.thresholds)?;
        Some(QueryResult::Text {
            answer: faq.answer.pick(cx.language).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontdesk_core::normalize;

    struct Fixture {
        kb: HospitalKb,
        index: DoctorIndex,
        lexicon: Lexicon,
        thresholds: Thresholds,
    }

    impl Fixture {
        fn new() -> Self {
            let kb = HospitalKb::default();
            let index = DoctorIndex::build(&kb);
            Self {
                kb,
                index,
                lexicon: Lexicon::default(),
                thresholds: Thresholds::default(),
            }
        }

        fn cx<'a>(&'a self, query: &'a str, language: Language) -> ResolveContext<'a> {
            ResolveContext {
                kb: &self.kb,
                index: &self.index,
                lexicon: &self.lexicon,
                thresholds: &self.thresholds,
                language,
                query,
            }
        }
    }

    #[test]
    fn test_chain_order() {
        let names: Vec<&str> = default_chain().iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec![
                "named_doctor", "contact", "timings", "departments", "doctors", "services",
                "process", "fees", "documents", "emergency", "symptom", "faq",
            ]
        );
    }

    #[test]
    fn test_named_doctor_carries_booking_steps() {
        let f = Fixture::new();
        let query = normalize("i want to meet dr khan");
        let result = NamedDoctorStrategy.resolve(&f.cx(&query, Language::English)).unwrap();
        match result {
            QueryResult::Doctors {
                department_key, doctors, process, note, ..
            } => {
                assert_eq!(department_key, "Cardiology");
                assert_eq!(doctors.len(), 1);
                assert_eq!(doctors[0].name, "Dr. Khan");
                assert!(!process.unwrap().steps.is_empty());
                assert!(note.is_some());
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_department_scoped_doctors() {
        let f = Fixture::new();
        let query = normalize("which doctors are in cardiology");
        let result = DoctorsStrategy.resolve(&f.cx(&query, Language::English)).unwrap();
        match result {
            QueryResult::Doctors { department_key, doctors, fees, .. } => {
                assert_eq!(department_key, "Cardiology");
                assert_eq!(doctors.len(), 2);
                assert_eq!(fees, Some(600));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_all_doctors_flattened() {
        let f = Fixture::new();
        let query = normalize("show me all the doctors");
        let result = DoctorsStrategy.resolve(&f.cx(&query, Language::English)).unwrap();
        match result {
            QueryResult::Doctors { department, doctors, .. } => {
                assert_eq!(department, "All");
                let total: usize = f.kb.departments.iter().map(|d| d.doctors.len()).sum();
                assert_eq!(doctors.len(), total);
                assert!(doctors.iter().all(|d| d.department_key.is_some()));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_services_filtered_by_mention() {
        let f = Fixture::new();
        let query = normalize("do you have an ambulance service");
        let result = ServicesStrategy.resolve(&f.cx(&query, Language::English)).unwrap();
        match result {
            QueryResult::Services { services, services_key } => {
                assert_eq!(services_key, vec!["Ambulance".to_string()]);
                assert!(services["Ambulance"].contains("24/7"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_parking_gets_canned_text() {
        let f = Fixture::new();
        let query = normalize("is parking available");
        let result = ServicesStrategy.resolve(&f.cx(&query, Language::English)).unwrap();
        match result {
            QueryResult::Text { answer } => assert!(answer.contains("parking")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_process_action_detection() {
        let f = Fixture::new();

        let query = normalize("how do i cancel my appointment");
        match ProcessStrategy.resolve(&f.cx(&query, Language::English)).unwrap() {
            QueryResult::Process { action, steps } => {
                assert_eq!(action, "cancel");
                assert!(!steps.is_empty());
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let query = normalize("i want to change my appointment date");
        match ProcessStrategy.resolve(&f.cx(&query, Language::English)).unwrap() {
            QueryResult::Process { action, .. } => assert_eq!(action, "edit"),
            other => panic!("unexpected result: {other:?}"),
        }

        let query = normalize("how to book an appointment");
        match ProcessStrategy.resolve(&f.cx(&query, Language::English)).unwrap() {
            QueryResult::Process { action, .. } => assert_eq!(action, "booking"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_symptom_routes_to_department() {
        let f = Fixture::new();
        let query = normalize("i have chest pain");
        let result = SymptomStrategy.resolve(&f.cx(&query, Language::English)).unwrap();
        match result {
            QueryResult::Symptom { department_key, doctors, .. } => {
                assert_eq!(department_key, "Cardiology");
                assert!(!doctors.is_empty());
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_localized_payload_falls_back_to_english() {
        let f = Fixture::new();
        let query = normalize("which doctors are in cardiology");
        // qualifications are stored as plain strings, so Marathi output
        // must equal the English value
        let result = DoctorsStrategy.resolve(&f.cx(&query, Language::Marathi)).unwrap();
        match result {
            QueryResult::Doctors { doctors, .. } => {
                assert_eq!(doctors[0].qualification, "MBBS, MD, DM (Cardiology)");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
