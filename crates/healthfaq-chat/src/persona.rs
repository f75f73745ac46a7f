//! Assistant persona: name and canned localized texts.

use healthfaq_core::Language;

pub const CHATBOT_NAME: &str = "Dr. Alex";

/// Lowercased messages that ask for the assistant's name.
pub const IDENTITY_PROMPTS: &[&str] = &[
    "what can i call you",
    "what is your name",
    "who are you",
    "¿cómo te llamas?",
    "¿quién eres?",
    "आपका नाम क्या है",
    "आप कौन हैं",
    "मैं आपको क्या कह सकता हूं",
];

/// Whether a trimmed message is one of the identity prompts.
pub fn is_identity_prompt(message: &str) -> bool {
    let lowered = message.to_lowercase();
    IDENTITY_PROMPTS.contains(&lowered.as_str())
}

/// Greeting sent when the user picks a language.
pub fn greeting(language: Language) -> String {
    match language {
        Language::En => format!("Hello! I'm {CHATBOT_NAME}, your AI healthcare assistant."),
        Language::Es => format!("¡Hola! Soy {CHATBOT_NAME}, tu asistente de salud con IA."),
        Language::Hi => format!("नमस्ते! मैं {CHATBOT_NAME} हूं, आपका AI स्वास्थ्य सहायक।"),
    }
}

pub fn empty_input(language: Language) -> String {
    match language {
        Language::En => format!("Please ask me a question about healthcare! I'm {CHATBOT_NAME}, here to help."),
        Language::Es => format!("¡Por favor hazme una pregunta sobre atención médica! Soy {CHATBOT_NAME}, aquí para ayudar."),
        Language::Hi => format!("कृपया मुझसे स्वास्थ्य के बारे में कोई प्रश्न पूछें! मैं {CHATBOT_NAME} हूं, यहाँ मदद के लिए।"),
    }
}

pub fn identity(language: Language) -> String {
    match language {
        Language::En => format!(
            "You can call me {CHATBOT_NAME}! I'm your AI healthcare assistant. I'm here to help you with medical questions, health information, and general wellness guidance. Feel free to ask me anything about healthcare!"
        ),
        Language::Es => format!(
            "¡Puedes llamarme {CHATBOT_NAME}! Soy tu asistente de salud con IA. Estoy aquí para ayudarte con preguntas médicas, información de salud y orientación general de bienestar. ¡Siéntete libre de preguntarme cualquier cosa sobre atención médica!"
        ),
        Language::Hi => format!(
            "आप मुझे {CHATBOT_NAME} कह सकते हैं! मैं आपका AI स्वास्थ्य सहायक हूं। मैं यहाँ आपकी चिकित्सा प्रश्नों, स्वास्थ्य जानकारी और सामान्य कल्याण मार्गदर्शन में मदद के लिए हूं। स्वास्थ्य के बारे में मुझसे कुछ भी पूछने में संकोच न करें!"
        ),
    }
}

/// Confirmation after the user clears their history.
pub fn history_cleared(language: Language) -> String {
    match language {
        Language::En => format!("Chat history cleared! I'm {CHATBOT_NAME}, ready to help you with healthcare questions."),
        Language::Es => format!("¡Historial de chat borrado! Soy {CHATBOT_NAME}, listo para ayudarte con preguntas de salud."),
        Language::Hi => format!("चैट इतिहास साफ़ कर दिया गया! मैं {CHATBOT_NAME} हूं, स्वास्थ्य प्रश्नों में आपकी मदद के लिए तैयार।"),
    }
}
