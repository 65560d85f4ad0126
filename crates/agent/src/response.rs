//! Typed query results and payload assembly
//!
//! One variant per resolved intent, each carrying only its fields; the
//! serialized form keeps the `type` tag the web layer dispatches on.
//! Doctor and department payloads always carry the English key next to the
//! localized display name so UI code can do stable lookups.

use serde::{Deserialize, Serialize};

use frontdesk_core::Language;
use frontdesk_kb::{Department, Doctor};

/// A resolved front-desk answer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QueryResult {
    Contact {
        name: String,
        address: String,
        phone: String,
        email: String,
        website: String,
    },
    Timings {
        opd: String,
        emergency: String,
        visiting: String,
    },
    Departments {
        departments: Vec<String>,
        departments_key: Vec<String>,
    },
    Doctors {
        department: String,
        department_key: String,
        fees: Option<u32>,
        doctors: Vec<DoctorCard>,
        #[serde(skip_serializing_if = "Option::is_none")]
        process: Option<ProcessInfo>,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    Services {
        services: std::collections::BTreeMap<String, String>,
        services_key: Vec<String>,
    },
    Process {
        action: String,
        steps: Vec<String>,
    },
    Symptom {
        symptom: String,
        department: String,
        department_key: String,
        fees: Option<u32>,
        doctors: Vec<DoctorCard>,
    },
    Text {
        answer: String,
    },
}

/// One doctor in a response payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoctorCard {
    pub name: String,
    pub qualification: String,
    pub experience: String,
    pub fees: Option<u32>,
    pub timings: String,
    /// Only set on the flattened all-doctors listing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_key: Option<String>,
}

/// Appointment process attached to a named-doctor answer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessInfo {
    pub action: String,
    pub steps: Vec<String>,
}

/// Assemble a doctor payload; fee falls back to the department fee
pub fn doctor_card(doctor: &Doctor, department: &Department, lang: Language) -> DoctorCard {
    DoctorCard {
        name: doctor.name.pick(lang).to_string(),
        qualification: doctor
            .qualification
            .as_ref()
            .map(|q| q.pick(lang).to_string())
            .unwrap_or_default(),
        experience: doctor.experience.clone().unwrap_or_default(),
        fees: doctor.fees.or(department.fees),
        timings: doctor
            .timings
            .as_ref()
            .map(|t| t.pick(lang).to_string())
            .unwrap_or_default(),
        department: None,
        department_key: None,
    }
}

fn localized(english: &str, hindi: &str, marathi: &str, lang: Language) -> String {
    match lang {
        Language::English => english,
        Language::Hindi => hindi,
        Language::Marathi => marathi,
    }
    .to_string()
}

/// Canned fees answer
pub fn fees_answer(lang: Language) -> String {
    localized(
        "Consultation fees vary by department: General Medicine - ₹400, Cardiology - ₹600, Orthopedics - ₹500. Emergency consultation is ₹800.",
        "परामर्श शुल्क विभाग के अनुसार भिन्न होता है: जनरल मेडिसिन - ₹400, कार्डियोलॉजी - ₹600, ऑर्थोपेडिक्स - ₹500। आपातकालीन परामर्श ₹800 है।",
        "सल्लागार शुल्क विभागानुसार बदलते: जनरल मेडिसिन - ₹400, कार्डिओलॉजी - ₹600, ऑर्थोपेडिक्स - ₹500. आपत्कालीन सल्लागार ₹800 आहे.",
        lang,
    )
}

/// Canned documents answer
pub fn documents_answer(lang: Language) -> String {
    localized(
        "Please bring your ID proof, insurance card (if applicable), previous medical reports, and any current medications you are taking.",
        "कृपया अपना पहचान पत्र, बीमा कार्ड (यदि लागू हो), पिछली चिकित्सा रिपोर्ट, और आपके द्वारा ली जा रही कोई भी वर्तमान दवाएं लाएं।",
        "कृपया आपले ओळखपत्र, विमा कार्ड (लागू असल्यास), मागील वैद्यकीय अहवाल आणि आपण घेत असलेली कोणतीही सध्याची औषधे आणा.",
        lang,
    )
}

/// Canned emergency answer
pub fn emergency_answer(lang: Language) -> String {
    localized(
        "For emergencies, call +91 9921142657 immediately. We provide 24/7 emergency services including trauma care, cardiac emergency, stroke care, and general emergency treatment.",
        "आपातकाल के लिए, तुरंत +91 9921142657 पर कॉल करें। हम 24/7 आपातकालीन सेवाएं प्रदान करते हैं जिसमें ट्रॉमा केयर, कार्डियक इमरजेंसी, स्ट्रोक केयर, और सामान्य आपातकालीन उपचार शामिल है।",
        "आपत्कालीन परिस्थितीसाठी, ताबडतोब +91 9921142657 वर कॉल करा. आम्ही २४/७ आपत्कालीन सेवा पुरवतो ज्यामध्ये ट्रॉमा केअर, कार्डियक इमरजन्सी, स्ट्रोक केअर आणि सामान्य आपत्कालीन उपचार समाविष्ट आहे.",
        lang,
    )
}

/// Canned parking answer (the one service without a catalog entry)
pub fn parking_answer(lang: Language) -> String {
    localized(
        "Yes, we have free parking facilities for patients and visitors. The parking area is located in front of the main building.",
        "हाँ, हमारे पास रोगियों और आगंतुकों के लिए निःशुल्क पार्किंग सुविधा है। पार्किंग क्षेत्र मुख्य भवन के सामने स्थित है।",
        "होय, आमच्याकडे रुग्ण आणि भेट देणाऱ्यांसाठी विनामूल्य पार्किंग सुविधा आहे. पार्किंग क्षेत्र मुख्य इमारतीच्या समोर आहे.",
        lang,
    )
}

/// Preparation note attached to a named-doctor answer
pub fn preparation_note(lang: Language) -> String {
    localized(
        "Bring previous reports and arrive 10 minutes early.",
        "पिछली रिपोर्ट साथ लाएँ और 10 मिनट पहले पहुँचे।",
        "मागील अहवाल सोबत आणा आणि 10 मिनिटे लवकर या.",
        lang,
    )
}

/// Polite fallback when nothing matched
pub fn fallback_answer(lang: Language) -> String {
    localized(
        "Sorry, I couldn't understand that. Please try rephrasing or ask about departments, doctors, timings, or booking.",
        "क्षमा करें, मैं समझ नहीं पाया। कृपया दोबारा पूछें या विभाग, डॉक्टर, समय या बुकिंग के बारे में पूछें।",
        "माफ करा, मला समजले नाही. कृपया पुन्हा विचारा किंवा विभाग, डॉक्टर, वेळा किंवा बुकिंगबद्दल विचारा.",
        lang,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontdesk_kb::HospitalKb;

    #[test]
    fn test_doctor_card_inherits_department_fee() {
        let kb = HospitalKb::default();
        let cardiology = kb.department("Cardiology").unwrap();
        let khan = &cardiology.doctors[0];
        assert!(khan.fees.is_none());

        let card = doctor_card(khan, cardiology, Language::English);
        assert_eq!(card.fees, cardiology.fees);
        assert_eq!(card.name, "Dr. Khan");
    }

    #[test]
    fn test_doctor_card_own_fee_wins() {
        let kb = HospitalKb::default();
        let cardiology = kb.department("Cardiology").unwrap();
        let mehta = &cardiology.doctors[1];

        let card = doctor_card(mehta, cardiology, Language::English);
        assert_eq!(card.fees, Some(650));
    }

    #[test]
    fn test_serialized_tag_is_type() {
        let result = QueryResult::Text {
            answer: "hello".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["answer"], "hello");
    }

    #[test]
    fn test_doctor_payload_skips_absent_fields() {
        let result = QueryResult::Doctors {
            department: "All".to_string(),
            department_key: "All".to_string(),
            fees: None,
            doctors: vec![],
            process: None,
            note: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("process").is_none());
        assert!(json.get("note").is_none());
    }

    #[test]
    fn test_canned_answers_localized() {
        assert!(fees_answer(Language::English).contains("₹400"));
        assert!(fallback_answer(Language::Hindi).contains("क्षमा"));
        assert!(parking_answer(Language::Marathi).contains("पार्किंग"));
    }
}
