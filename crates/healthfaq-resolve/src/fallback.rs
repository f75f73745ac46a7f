//! Topic-guided replies for queries with no confident FAQ match.
//!
//! Query words, lowercased and filtered but not lemmatized, are checked in
//! order against a closed set of health topics; the first keyword that hits a topic picks its suggestion. With no
//! hit the reply lists the topics the assistant can help with.

use healthfaq_core::Language;
use healthfaq_nlp::{surface_keywords, Normalizer};

/// Health topics with canned guidance, in matching order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Symptoms,
    Pain,
    Medication,
    Emergency,
    Doctor,
    Insurance,
    Blood,
    Heart,
    Mental,
}

impl Topic {
    pub const ALL: [Topic; 9] = [
        Topic::Symptoms,
        Topic::Pain,
        Topic::Medication,
        Topic::Emergency,
        Topic::Doctor,
        Topic::Insurance,
        Topic::Blood,
        Topic::Heart,
        Topic::Mental,
    ];

    /// Localized tag that keywords are matched against.
    pub fn tag(self, language: Language) -> &'static str {
        use Topic::*;
        match language {
            Language::En => match self {
                Symptoms => "symptoms",
                Pain => "pain",
                Medication => "medication",
                Emergency => "emergency",
                Doctor => "doctor",
                Insurance => "insurance",
                Blood => "blood",
                Heart => "heart",
                Mental => "mental",
            },
            Language::Es => match self {
                Symptoms => "síntomas",
                Pain => "dolor",
                Medication => "medicamento",
                Emergency => "emergencia",
                Doctor => "doctor",
                Insurance => "seguro",
                Blood => "sangre",
                Heart => "corazón",
                Mental => "mental",
            },
            Language::Hi => match self {
                Symptoms => "लक्षण",
                Pain => "दर्द",
                Medication => "दवा",
                Emergency => "आपातकाल",
                Doctor => "डॉक्टर",
                Insurance => "बीमा",
                Blood => "रक्त",
                Heart => "दिल",
                Mental => "मानसिक",
            },
        }
    }

    /// Localized suggestion for this topic.
    pub fn suggestion(self, language: Language) -> &'static str {
        use Topic::*;
        match language {
            Language::En => match self {
                Symptoms => "You asked about symptoms. Try asking about specific conditions like \"COVID-19 symptoms\" or \"diabetes symptoms\".",
                Pain => "For pain-related questions, you might want to ask about specific areas or conditions.",
                Medication => "For medication questions, consult with a healthcare provider or pharmacist.",
                Emergency => "For medical emergencies, call 911 immediately.",
                Doctor => "To find or book appointments with doctors, try asking \"How can I book an appointment with a doctor?\"",
                Insurance => "For health insurance questions, try asking \"How do I apply for health insurance?\"",
                Blood => "For blood-related questions, try asking about \"normal blood pressure range\" or similar.",
                Heart => "For heart-related concerns, try asking \"What to do in case of a heart attack?\" or consult a cardiologist.",
                Mental => "For mental health support, try asking \"How can I improve my mental health?\" or contact a mental health professional.",
            },
            Language::Es => match self {
                Symptoms => "Preguntaste sobre síntomas. Intenta preguntar sobre condiciones específicas como \"síntomas de COVID-19\" o \"síntomas de diabetes\".",
                Pain => "Para preguntas sobre dolor, podrías preguntar sobre áreas específicas o condiciones.",
                Medication => "Para preguntas sobre medicamentos, consulta con un proveedor de atención médica o farmacéutico.",
                Emergency => "Para emergencias médicas, llama al 911 inmediatamente.",
                Doctor => "Para encontrar o reservar citas con doctores, intenta preguntar \"¿Cómo puedo reservar una cita con un doctor?\"",
                Insurance => "Para preguntas sobre seguro de salud, intenta preguntar \"¿Cómo solicito seguro de salud?\"",
                Blood => "Para preguntas sobre sangre, intenta preguntar sobre \"rango normal de presión arterial\" o similar.",
                Heart => "Para preocupaciones del corazón, intenta preguntar \"¿Qué hacer en caso de un ataque cardíaco?\" o consulta a un cardiólogo.",
                Mental => "Para apoyo de salud mental, intenta preguntar \"¿Cómo puedo mejorar mi salud mental?\" o contacta a un profesional de salud mental.",
            },
            Language::Hi => match self {
                Symptoms => "आपने लक्षणों के बारे में पूछा। विशिष्ट स्थितियों के बारे में पूछने की कोशिश करें जैसे \"कोविड-19 के लक्षण\" या \"मधुमेह के लक्षण\"।",
                Pain => "दर्द संबंधी प्रश्नों के लिए, आप विशिष्ट क्षेत्रों या स्थितियों के बारे में पूछ सकते हैं।",
                Medication => "दवा के प्रश्नों के लिए, स्वास्थ्य प्रदाता या फार्मासिस्ट से सलाह लें।",
                Emergency => "चिकित्सा आपातकाल के लिए, तुरंत 102 पर कॉल करें।",
                Doctor => "डॉक्टरों के साथ अपॉइंटमेंट बुक करने के लिए, \"मैं डॉक्टर के साथ अपॉइंटमेंट कैसे बुक करूं?\" पूछने की कोशिश करें।",
                Insurance => "स्वास्थ्य बीमा प्रश्नों के लिए, \"मैं स्वास्थ्य बीमा के लिए आवेदन कैसे करूं?\" पूछने की कोशिश करें।",
                Blood => "रक्त संबंधी प्रश्नों के लिए, \"सामान्य रक्तचाप की सीमा\" या इसी तरह के बारे में पूछने की कोशिश करें।",
                Heart => "हृदय संबंधी चिंताओं के लिए, \"दिल का दौरा पड़ने पर क्या करना चाहिए?\" पूछने की कोशिश करें या हृदय रोग विशेषज्ञ से सलाह लें।",
                Mental => "मानसिक स्वास्थ्य सहायता के लिए, \"मैं अपना मानसिक स्वास्थ्य कैसे सुधारूं?\" पूछने की कोशिश करें या मानसिक स्वास्थ्य पेशेवर से संपर्क करें।",
            },
        }
    }

    fn matches(self, keyword: &str, language: Language, normalizer: &Normalizer) -> bool {
        let tag = self.tag(language);
        if tag.contains(keyword) || keyword.contains(tag) {
            return true;
        }
        // Inflections only: the keyword must keep all of the tag but its last
        // letter, so "emergencies" hits while "medical" misses "medication".
        let Some((last, _)) = tag.char_indices().last() else {
            return false;
        };
        keyword.starts_with(&tag[..last])
            && normalizer.lemma(keyword, language) == normalizer.lemma(tag, language)
    }
}

/// Opening line of every fallback reply.
pub fn base_preamble(language: Language) -> &'static str {
    match language {
        Language::En => "I couldn't find a specific answer to your question in my healthcare database. ",
        Language::Es => "No pude encontrar una respuesta específica a tu pregunta en mi base de datos de atención médica. ",
        Language::Hi => "मुझे अपने स्वास्थ्य डेटाबेस में आपके प्रश्न का विशिष्ट उत्तर नहीं मिला। ",
    }
}

/// Enumerated list of supported topics.
pub fn topic_list(language: Language) -> &'static str {
    match language {
        Language::En => "Here are some topics I can help with:\n\n\
            • COVID-19 symptoms and information\n\
            • Blood pressure and vital signs\n\
            • Booking doctor appointments\n\
            • Health insurance applications\n\
            • Emergency procedures\n\
            • Mental health tips\n\
            • General health checkup information\n\n\
            Please ask about any of these topics, or consult with a healthcare professional for personalized medical advice.",
        Language::Es => "Aquí hay algunos temas con los que puedo ayudar:\n\n\
            • Síntomas e información de COVID-19\n\
            • Presión arterial y signos vitales\n\
            • Reservar citas médicas\n\
            • Aplicaciones de seguro de salud\n\
            • Procedimientos de emergencia\n\
            • Consejos de salud mental\n\
            • Información general de chequeos médicos\n\n\
            Por favor pregunta sobre cualquiera de estos temas, o consulta con un profesional de la salud para consejos médicos personalizados.",
        Language::Hi => "यहाँ कुछ विषय हैं जिनमें मैं मदद कर सकता हूँ:\n\n\
            • कोविड-19 के लक्षण और जानकारी\n\
            • रक्तचाप और महत्वपूर्ण संकेत\n\
            • डॉक्टर की अपॉइंटमेंट बुकिंग\n\
            • स्वास्थ्य बीमा आवेदन\n\
            • आपातकालीन प्रक्रियाएं\n\
            • मानसिक स्वास्थ्य टिप्स\n\
            • सामान्य स्वास्थ्य जांच की जानकारी\n\n\
            कृपया इनमें से किसी भी विषय के बारे में पूछें, या व्यक्तिगत चिकित्सा सलाह के लिए स्वास्थ्य पेशेवर से सलाह लें।",
    }
}

/// Closing advice appended after a topic suggestion.
pub fn disclaimer(language: Language) -> &'static str {
    match language {
        Language::En => "For specific medical concerns, please consult with a qualified healthcare professional.",
        Language::Es => "Para preocupaciones médicas específicas, por favor consulta con un profesional de la salud calificado.",
        Language::Hi => "विशिष्ट चिकित्सा चिंताओं के लिए, कृपया किसी योग्य स्वास्थ्य पेशेवर से परामर्श करें।",
    }
}

/// First topic hit by the words of `query`, scanning words in order.
pub fn match_topic(query: &str, language: Language, normalizer: &Normalizer) -> Option<Topic> {
    surface_keywords(normalizer, query, language)
        .iter()
        .find_map(|keyword| {
            Topic::ALL
                .into_iter()
                .find(|topic| topic.matches(keyword, language, normalizer))
        })
}

/// Fallback reply for `query` in `language`.
pub fn fallback_response(query: &str, language: Language, normalizer: &Normalizer) -> String {
    match match_topic(query, language, normalizer) {
        Some(topic) => format!(
            "{} {}\n\n{}",
            base_preamble(language),
            topic.suggestion(language),
            disclaimer(language)
        ),
        None => format!("{}{}", base_preamble(language), topic_list(language)),
    }
}
