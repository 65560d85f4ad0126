//! Matching lexicon
//!
//! Keyword sets for the keyword intents, department synonyms and the
//! ordered symptom→department table, each across English, Hindi and
//! Marathi. Ships populated defaults; deployments may load their own
//! tables alongside the knowledge base.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One symptom table entry. Order in the table is significant: the symptom
/// resolver stops at the first matching rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomRule {
    pub symptom: String,
    /// English department key
    pub department: String,
}

/// Keyword tables driving intent and entity matching
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    /// Intent name → keywords in all three languages
    #[serde(default)]
    pub intent_keywords: HashMap<String, Vec<String>>,
    /// English department key → synonyms in all three languages
    #[serde(default)]
    pub department_synonyms: HashMap<String, Vec<String>>,
    /// Ordered symptom table
    #[serde(default)]
    pub symptoms: Vec<SymptomRule>,
}

impl Lexicon {
    /// Keywords for an intent (empty slice if unknown)
    pub fn keywords(&self, intent: &str) -> &[String] {
        self.intent_keywords.get(intent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Synonyms for a department's English key (empty slice if none)
    pub fn synonyms(&self, department_key: &str) -> &[String] {
        self.department_synonyms
            .get(department_key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn rules(list: &[(&str, &str)]) -> Vec<SymptomRule> {
    list.iter()
        .map(|(symptom, department)| SymptomRule {
            symptom: symptom.to_string(),
            department: department.to_string(),
        })
        .collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        let mut intent_keywords = HashMap::new();
        intent_keywords.insert(
            "timings".to_string(),
            words(&[
                "time", "timing", "hours", "visiting", "open", "closing", "schedule", "when",
                "working hours",
                "समय", "घंटे", "टाइम", "खुलने का समय", "बंद होने का समय", "कब खुलता", "कब बंद",
                "वेळ", "भेट", "दर्शनाची वेळ", "उघडण्याची वेळ", "बंद होण्याची वेळ", "कधी उघडतं",
                "कधी बंद",
            ]),
        );
        intent_keywords.insert(
            "departments".to_string(),
            words(&[
                "department", "specialities", "specialty", "unit", "ward", "clinic",
                "specialization",
                "विभाग", "विशेषता", "शाखा", "डिपार्टमेंट", "वॉर्ड", "युनिट", "क्लिनिक",
                "विशेषज्ञता",
            ]),
        );
        intent_keywords.insert(
            "doctors".to_string(),
            words(&[
                "doctor", "physician", "specialist", "consultant", "dr", "md", "who is doctor",
                "meet", "see", "consult", "appointment with",
                "अपॉइंटमेंट", "मिलना", "भेंट", "भेटायचे", "भेटणे", "डॉक्टर", "चिकित्सक", "तज्ञ",
                "सलाहकार", "डॉ", "वैद्य", "डॉक्टर कौन", "डॉक्टर जानकारी", "डॉक्टर माहिती",
            ]),
        );
        intent_keywords.insert(
            "services".to_string(),
            words(&[
                "service", "facility", "support", "amenities", "helpdesk", "available",
                "ambulance", "ambulances", "emergency service", "pharmacy", "lab", "parking",
                "insurance", "cashless",
                "सेवा", "सुविधा", "मदद", "सपोर्ट", "फॅसिलिटी", "रुग्णवाहिका", "ऍम्ब्युलन्स",
                "आपत्कालीन सेवा", "अॅम्ब्युलन्स सेवा", "फार्मेसी", "लैब", "पार्किंग", "बीमा",
                "कैशलेस", "मदत", "फार्मसी", "लॅब", "विमा",
            ]),
        );
        intent_keywords.insert(
            "process".to_string(),
            words(&[
                "book", "appointment", "cancel", "edit", "change", "reschedule", "modify",
                "register", "how to book",
                "बुकिंग", "अपॉइंटमेंट", "रद्द", "सुधारणे", "बदलणे", "नोंदणी", "बुक", "रजिस्टर",
                "कॅन्सल", "रीशेड्यूल", "कैसे मिलूं", "कैसे मिलें", "कसा भेटू", "कसे भेटायचे",
                "कैसे बुक करें", "कसे बुक करायचे",
            ]),
        );
        intent_keywords.insert(
            "contact".to_string(),
            words(&[
                "contact", "phone", "email", "address", "location", "map", "reach", "connect",
                "call", "number",
                "संपर्क", "फोन", "नंबर", "पता", "स्थान", "जगह", "लोकेशन", "ईमेल", "पत्ता",
                "पहुंच", "कनेक्ट", "संपर्क क्रमांक", "पत्ता माहिती", "कॉल",
            ]),
        );
        intent_keywords.insert(
            "fees".to_string(),
            words(&[
                "fees", "cost", "price", "charge", "payment", "money", "rupees",
                "consultation fee", "doctor fee",
                "शुल्क", "कीमत", "दाम", "भुगतान", "पैसे", "रुपये", "परामर्श शुल्क",
                "डॉक्टर शुल्क", "फी", "किंमत", "पेमेंट", "सल्लागार शुल्क",
            ]),
        );
        intent_keywords.insert(
            "documents".to_string(),
            words(&[
                "documents", "papers", "id", "proof", "insurance", "card", "reports",
                "medical reports", "what to bring",
                "दस्तावेज", "कागज", "पहचान", "प्रूफ", "बीमा", "कार्ड", "रिपोर्ट",
                "चिकित्सा रिपोर्ट", "क्या लाना", "कागदपत्रे", "पेपर्स", "ओळखपत्र", "विमा",
                "अहवाल", "वैद्यकीय अहवाल", "काय आणावे",
            ]),
        );
        intent_keywords.insert(
            "emergency".to_string(),
            words(&[
                "emergency", "urgent", "help", "ambulance", "trauma", "accident", "critical",
                "immediate",
                "आपातकाल", "जरूरी", "मदद", "रुग्णवाहिका", "ट्रॉमा", "दुर्घटना", "गंभीर",
                "तत्काल", "आपत्कालीन", "गरजेचे", "मदत", "अपघात", "तत्काळ",
            ]),
        );

        let mut department_synonyms = HashMap::new();
        department_synonyms.insert(
            "General Medicine".to_string(),
            words(&[
                "general medicine", "physician", "gp", "general", "medicine",
                "internal medicine", "family doctor",
                "जनरल मेडिसिन", "सामान्य विभाग", "सामान्य चिकित्सा", "फॅमिली डॉक्टर",
            ]),
        );
        department_synonyms.insert(
            "Cardiology".to_string(),
            words(&[
                "cardiology", "cardiologist", "heart", "cardio", "heart specialist",
                "heart doctor",
                "हृदय रोग विशेषज्ञ", "दिल का डॉक्टर", "हृदय विभाग", "कार्डिओलॉजी",
                "कार्डिओलॉजि", "हृदयशास्त्र", "हृदय तज्ञ",
            ]),
        );
        department_synonyms.insert(
            "Orthopedics".to_string(),
            words(&[
                "orthopedics", "ortho", "bone", "joint", "fracture", "bone specialist",
                "orthopedic doctor",
                "हड्डी रोग", "हड्डी डॉक्टर", "हाड विभाग", "सांधे तज्ञ", "ऑर्थोपेडिक्स",
                "ऑर्थो डॉक्टर",
            ]),
        );

        let symptoms = rules(&[
            // General Medicine
            ("fever", "General Medicine"),
            ("cold", "General Medicine"),
            ("cough", "General Medicine"),
            ("headache", "General Medicine"),
            ("vomiting", "General Medicine"),
            ("बुखार", "General Medicine"),
            ("सर्दी", "General Medicine"),
            ("खाँसी", "General Medicine"),
            ("सरदर्द", "General Medicine"),
            ("उल्टी", "General Medicine"),
            ("ताप", "General Medicine"),
            ("खोकला", "General Medicine"),
            ("डोकेदुखी", "General Medicine"),
            ("ओकणे", "General Medicine"),
            // Cardiology
            ("chest pain", "Cardiology"),
            ("heart pain", "Cardiology"),
            ("breathing issue", "Cardiology"),
            ("palpitation", "Cardiology"),
            ("blood pressure", "Cardiology"),
            ("सीने में दर्द", "Cardiology"),
            ("दिल का दर्द", "Cardiology"),
            ("सांस लेने में तकलीफ", "Cardiology"),
            ("धड़कन तेज", "Cardiology"),
            ("ब्लड प्रेशर", "Cardiology"),
            ("छातीत दुखणे", "Cardiology"),
            ("हृदय वेदना", "Cardiology"),
            ("श्वास घेण्यास त्रास", "Cardiology"),
            ("धडधड वाढणे", "Cardiology"),
            ("रक्तदाब", "Cardiology"),
            // Orthopedics
            ("fracture", "Orthopedics"),
            ("bone pain", "Orthopedics"),
            ("joint pain", "Orthopedics"),
            ("swelling leg", "Orthopedics"),
            ("back pain", "Orthopedics"),
            ("हड्डी टूटना", "Orthopedics"),
            ("हड्डी में दर्द", "Orthopedics"),
            ("जोड़ दर्द", "Orthopedics"),
            ("पीठ दर्द", "Orthopedics"),
            ("सूजन", "Orthopedics"),
            ("हाड मोडणे", "Orthopedics"),
            ("हाड दुखणे", "Orthopedics"),
            ("सांधेदुखी", "Orthopedics"),
            ("पाठदुखी", "Orthopedics"),
            ("सुज", "Orthopedics"),
        ]);

        Self {
            intent_keywords,
            department_synonyms,
            symptoms,
        }
    }
}
