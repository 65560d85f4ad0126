//! Built-in knowledge base
//!
//! A populated default so the assistant is usable and testable without an
//! external data file. Deployments load their own JSON/YAML via the loader;
//! the shape here is the reference for that file.

use std::collections::HashMap;

use frontdesk_core::{Language, LocalizedSteps, LocalizedText};

use crate::model::{
    Department, Doctor, FaqEntry, HospitalInfo, HospitalKb, HospitalTimings,
};

fn doctor(
    name: (&str, &str, &str),
    qualification: &str,
    experience: &str,
    timings: (&str, &str, &str),
    fees: Option<u32>,
) -> Doctor {
    Doctor {
        name: LocalizedText::new(name.0, name.1, name.2),
        qualification: Some(LocalizedText::plain(qualification)),
        experience: Some(experience.to_string()),
        timings: Some(LocalizedText::new(timings.0, timings.1, timings.2)),
        fees,
    }
}

fn steps(english: &[&str], hindi: &[&str], marathi: &[&str]) -> LocalizedSteps {
    let mut map = HashMap::new();
    map.insert(Language::English, english.iter().map(|s| s.to_string()).collect());
    map.insert(Language::Hindi, hindi.iter().map(|s| s.to_string()).collect());
    map.insert(Language::Marathi, marathi.iter().map(|s| s.to_string()).collect());
    LocalizedSteps::ByLanguage(map)
}

impl Default for HospitalKb {
    fn default() -> Self {
        let departments = vec![
            Department {
                name: LocalizedText::new("General Medicine", "जनरल मेडिसिन", "जनरल मेडिसिन"),
                fees: Some(400),
                doctors: vec![
                    doctor(
                        ("Dr. Sharma", "डॉ. शर्मा", "डॉ. शर्मा"),
                        "MBBS, MD (General Medicine)",
                        "15 years",
                        ("Mon-Sat 9:00-13:00", "सोम-शनि 9:00-13:00", "सोम-शनि 9:00-13:00"),
                        None,
                    ),
                    doctor(
                        ("Dr. Priya Deshmukh", "डॉ. प्रिया देशमुख", "डॉ. प्रिया देशमुख"),
                        "MBBS, DNB",
                        "8 years",
                        ("Mon-Fri 14:00-18:00", "सोम-शुक्र 14:00-18:00", "सोम-शुक्र 14:00-18:00"),
                        None,
                    ),
                ],
            },
            Department {
                name: LocalizedText::new("Cardiology", "कार्डियोलॉजी", "कार्डिओलॉजी"),
                fees: Some(600),
                doctors: vec![
                    doctor(
                        ("Dr. Khan", "डॉ. खान", "डॉ. खान"),
                        "MBBS, MD, DM (Cardiology)",
                        "20 years",
                        ("Mon-Sat 10:00-14:00", "सोम-शनि 10:00-14:00", "सोम-शनि 10:00-14:00"),
                        None,
                    ),
                    doctor(
                        ("Dr. Mehta", "डॉ. मेहता", "डॉ. मेहता"),
                        "MBBS, MD (Cardiology)",
                        "12 years",
                        ("Tue-Sun 15:00-19:00", "मंगल-रवि 15:00-19:00", "मंगळ-रवि 15:00-19:00"),
                        Some(650),
                    ),
                ],
            },
            Department {
                name: LocalizedText::new("Orthopedics", "ऑर्थोपेडिक्स", "ऑर्थोपेडिक्स"),
                fees: Some(500),
                doctors: vec![doctor(
                    ("Dr. Patil", "डॉ. पाटिल", "डॉ. पाटील"),
                    "MBBS, MS (Orthopedics)",
                    "18 years",
                    ("Mon-Sat 11:00-16:00", "सोम-शनि 11:00-16:00", "सोम-शनि 11:00-16:00"),
                    None,
                )],
            },
        ];

        let mut services = HashMap::new();
        services.insert(
            "Ambulance".to_string(),
            LocalizedText::new(
                "24/7 ambulance service. Call +91 9921142657.",
                "24/7 एम्बुलेंस सेवा। +91 9921142657 पर कॉल करें।",
                "24/7 रुग्णवाहिका सेवा. +91 9921142657 वर कॉल करा.",
            ),
        );
        services.insert(
            "Pharmacy".to_string(),
            LocalizedText::new(
                "In-house pharmacy, open 8:00-22:00 daily.",
                "इन-हाउस फार्मेसी, प्रतिदिन 8:00-22:00 खुली।",
                "इन-हाउस फार्मसी, दररोज 8:00-22:00 खुली.",
            ),
        );
        services.insert(
            "Laboratory".to_string(),
            LocalizedText::new(
                "Pathology lab with same-day reports for routine tests.",
                "नियमित परीक्षणों के लिए उसी दिन रिपोर्ट के साथ पैथोलॉजी लैब।",
                "नियमित चाचण्यांसाठी त्याच दिवशी अहवाल देणारी पॅथॉलॉजी लॅब.",
            ),
        );
        services.insert(
            "Insurance Desk".to_string(),
            LocalizedText::new(
                "Cashless insurance support for all major providers.",
                "सभी प्रमुख प्रदाताओं के लिए कैशलेस बीमा सहायता।",
                "सर्व प्रमुख प्रदात्यांसाठी कॅशलेस विमा सहाय्य.",
            ),
        );

        let faqs = vec![
            FaqEntry {
                question: LocalizedText::new(
                    "Do you accept cashless insurance",
                    "क्या आप कैशलेस बीमा स्वीकार करते हैं",
                    "तुम्ही कॅशलेस विमा स्वीकारता का",
                ),
                answer: LocalizedText::new(
                    "Yes, we accept cashless insurance from all major providers. Please carry your insurance card and ID proof.",
                    "हाँ, हम सभी प्रमुख प्रदाताओं से कैशलेस बीमा स्वीकार करते हैं। कृपया अपना बीमा कार्ड और पहचान पत्र साथ रखें।",
                    "होय, आम्ही सर्व प्रमुख प्रदात्यांकडून कॅशलेस विमा स्वीकारतो. कृपया आपले विमा कार्ड आणि ओळखपत्र सोबत ठेवा.",
                ),
            },
            FaqEntry {
                question: LocalizedText::new(
                    "How do I collect my medical reports",
                    "मैं अपनी मेडिकल रिपोर्ट कैसे प्राप्त करूं",
                    "मी माझे वैद्यकीय अहवाल कसे मिळवू",
                ),
                answer: LocalizedText::new(
                    "Reports can be collected from the lab counter after 17:00 on the same day, or downloaded from the patient portal.",
                    "रिपोर्ट उसी दिन 17:00 के बाद लैब काउंटर से प्राप्त की जा सकती हैं, या पेशेंट पोर्टल से डाउनलोड की जा सकती हैं।",
                    "अहवाल त्याच दिवशी 17:00 नंतर लॅब काउंटरवरून मिळू शकतात, किंवा पेशंट पोर्टलवरून डाउनलोड करता येतात.",
                ),
            },
            FaqEntry {
                question: LocalizedText::new(
                    "Is there a canteen for visitors",
                    "क्या आगंतुकों के लिए कैंटीन है",
                    "अभ्यागतांसाठी कॅन्टीन आहे का",
                ),
                answer: LocalizedText::new(
                    "Yes, a canteen on the ground floor is open 7:00-21:00 for patients and visitors.",
                    "हाँ, भूतल पर कैंटीन रोगियों और आगंतुकों के लिए 7:00-21:00 खुली रहती है।",
                    "होय, तळमजल्यावरील कॅन्टीन रुग्ण आणि अभ्यागतांसाठी 7:00-21:00 खुली असते.",
                ),
            },
        ];

        let mut appointment_process = HashMap::new();
        appointment_process.insert(
            "booking".to_string(),
            steps(
                &[
                    "Visit the front desk or open the booking page.",
                    "Choose a department and doctor.",
                    "Pick an available date and time slot.",
                    "Confirm with your name and phone number.",
                ],
                &[
                    "फ्रंट डेस्क पर जाएँ या बुकिंग पेज खोलें।",
                    "विभाग और डॉक्टर चुनें।",
                    "उपलब्ध दिनांक और समय चुनें।",
                    "अपना नाम और फोन नंबर देकर पुष्टि करें।",
                ],
                &[
                    "फ्रंट डेस्कवर जा किंवा बुकिंग पेज उघडा.",
                    "विभाग आणि डॉक्टर निवडा.",
                    "उपलब्ध दिनांक आणि वेळ निवडा.",
                    "आपले नाव आणि फोन नंबर देऊन निश्चित करा.",
                ],
            ),
        );
        appointment_process.insert(
            "cancel".to_string(),
            steps(
                &[
                    "Open your appointment with the booking id.",
                    "Choose cancel and confirm.",
                ],
                &[
                    "बुकिंग आईडी से अपनी अपॉइंटमेंट खोलें।",
                    "रद्द चुनें और पुष्टि करें।",
                ],
                &[
                    "बुकिंग आयडीने आपली अपॉइंटमेंट उघडा.",
                    "रद्द निवडा आणि निश्चित करा.",
                ],
            ),
        );
        appointment_process.insert(
            "edit".to_string(),
            steps(
                &[
                    "Open your appointment with the booking id.",
                    "Pick a new date or time slot.",
                    "Confirm the change.",
                ],
                &[
                    "बुकिंग आईडी से अपनी अपॉइंटमेंट खोलें।",
                    "नई दिनांक या समय चुनें।",
                    "बदलाव की पुष्टि करें।",
                ],
                &[
                    "बुकिंग आयडीने आपली अपॉइंटमेंट उघडा.",
                    "नवीन दिनांक किंवा वेळ निवडा.",
                    "बदल निश्चित करा.",
                ],
            ),
        );

        HospitalKb {
            hospital: HospitalInfo {
                name: LocalizedText::new(
                    "City Care Multispeciality Hospital",
                    "सिटी केयर मल्टीस्पेशलिटी हॉस्पिटल",
                    "सिटी केअर मल्टीस्पेशालिटी हॉस्पिटल",
                ),
                address: LocalizedText::new(
                    "12, MG Road, Nashik, Maharashtra 422001",
                    "12, एमजी रोड, नासिक, महाराष्ट्र 422001",
                    "12, एमजी रोड, नाशिक, महाराष्ट्र 422001",
                ),
                phone: "+91 9921142657".to_string(),
                email: "care@citycarehospital.in".to_string(),
                website: "https://citycarehospital.in".to_string(),
                timings: HospitalTimings {
                    general_opd: LocalizedText::new(
                        "Mon-Sat 9:00-18:00",
                        "सोम-शनि 9:00-18:00",
                        "सोम-शनि 9:00-18:00",
                    ),
                    emergency: LocalizedText::new(
                        "Open 24/7",
                        "24/7 खुला",
                        "24/7 खुले",
                    ),
                    visiting_hours: LocalizedText::new(
                        "Daily 16:00-19:00",
                        "प्रतिदिन 16:00-19:00",
                        "दररोज 16:00-19:00",
                    ),
                },
            },
            departments,
            services,
            faqs,
            appointment_process,
        }
    }
}
