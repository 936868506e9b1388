//! Prompt construction for the extraction and classification requests.
//!
//! Each language carries one [`PromptTable`]; the builders below assemble the
//! system/user pair from it so the field list and JSON shape are always
//! generated from the same key order.

use serde_json::Value;

use crate::language::Language;
use crate::schema::LEGAL_KEYS;

/// A system/user prompt pair for a single completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Wire keys requested from the model, in prompt order.
pub const PROMPT_KEYS: [&str; 15] = [
    "victim_name",
    "father_or_husband_name",
    "dob",
    "nationality",
    "occupation",
    "address",
    "incident_date",
    "incident_time",
    "incident_location",
    "accused_description",
    "stolen_properties",
    "total_value",
    "delay_reason",
    "witness_details",
    "incident_details",
];

#[derive(Debug)]
pub(crate) struct PromptTable {
    interview_role: &'static str,
    interview_instruction: &'static str,
    /// Aligned with [`PROMPT_KEYS`].
    field_descriptions: [&'static str; 15],
    shape_instruction: &'static str,
    /// Aligned with [`PROMPT_KEYS`].
    shape_examples: [&'static str; 15],
    interview_closing: &'static str,
    interview_request: &'static str,

    free_text_system: &'static str,
    free_text_instruction: &'static str,
    /// Aligned with [`PROMPT_KEYS`]. Empty means the key is listed bare.
    field_glosses: [&'static str; 15],
    free_text_closing: &'static str,
    text_marker: &'static str,

    legal_expert: &'static str,
    legal_scope: &'static str,
    summary_instruction: &'static str,
    hints_instruction: &'static str,
    legal_shape_instruction: &'static str,
    /// Aligned with [`LEGAL_KEYS`].
    legal_shape: [&'static str; 7],
    legal_example_instruction: &'static str,
    /// Aligned with [`LEGAL_KEYS`].
    legal_example: [&'static str; 7],
    legal_closing: &'static str,
    classify_request: &'static str,
    incident_heading: &'static str,
}

/// Example shape embedded in the classifier user prompt.
const LEGAL_USER_SHAPE: [&str; 7] = [
    "Name of first act",
    "Sections from first act",
    "Name of second act (if applicable)",
    "Sections from second act (if applicable)",
    "Name of third act (if applicable)",
    "Sections from third act (if applicable)",
    "Brief explanation of why these sections apply",
];

const LEGAL_ASSISTANT_ROLE: &str = "You are a legal information extraction assistant. Your task is to extract legal information from the provided legal sections summary.";


/// Prompt for a segmented interview. `qa_block` is the output of
/// [`crate::segmenter::format_pairs`].
pub fn interview(qa_block: &str, language: Language) -> Prompt {
    let t = language.profile().prompts;
    let fields: Vec<String> = PROMPT_KEYS
        .iter()
        .zip(t.field_descriptions)
        .enumerate()
        .map(|(i, (key, description))| format!("{}. {}: {}", i + 1, key, description))
        .collect();

    let system = format!(
        "{}\n{}\n\n{}\n\n{}\n{}\n\n{}",
        t.interview_role,
        t.interview_instruction,
        fields.join("\n"),
        t.shape_instruction,
        json_shape(&PROMPT_KEYS, &t.shape_examples),
        t.interview_closing,
    );

    Prompt {
        system,
        user: format!("{}\n\n{}", t.interview_request, qa_block),
    }
}

/// Prompt for unsegmented free text.
pub fn free_text(text: &str, language: Language) -> Prompt {
    let t = language.profile().prompts;
    let keys: Vec<String> = PROMPT_KEYS
        .iter()
        .zip(t.field_glosses)
        .map(|(key, gloss)| {
            if gloss.is_empty() {
                format!("- {}", key)
            } else {
                format!("- {} ({})", key, gloss)
            }
        })
        .collect();

    Prompt {
        system: t.free_text_system.to_string(),
        user: format!(
            "{}\n{}\n\n{}\n\n{}\n{}",
            t.free_text_instruction,
            keys.join("\n"),
            t.free_text_closing,
            t.text_marker,
            text
        ),
    }
}

/// Prompt for legal classification.
///
/// `section_summary` is the opaque statute reference blob; `None` substitutes
/// the localized notice. `legal_hints` is injected as pretty JSON when present.
pub fn classification(
    description: &str,
    section_summary: Option<&str>,
    legal_hints: Option<&Value>,
    language: Language,
) -> Prompt {
    let t = language.profile().prompts;
    let summary = section_summary
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(language.profile().labels.missing_summary_notice);

    let hints = legal_hints
        .filter(|v| !is_empty_value(v))
        .and_then(|v| serde_json::to_string_pretty(v).ok())
        .map(|json| format!("{}\n{}\n\n", t.hints_instruction, json))
        .unwrap_or_default();

    let system = format!(
        "{}\n\n{}\n\n{}\n\n{}\n\n{}\n\n{}{}\n\n{}\n\n{}\n{}\n\n{}",
        LEGAL_ASSISTANT_ROLE,
        t.legal_expert,
        t.legal_scope,
        t.summary_instruction,
        summary,
        hints,
        t.legal_shape_instruction,
        json_shape(&LEGAL_KEYS, &t.legal_shape),
        t.legal_example_instruction,
        json_shape(&LEGAL_KEYS, &t.legal_example),
        t.legal_closing,
    );

    let user = format!(
        "{}\n{}\n\n{}\n{}",
        t.classify_request,
        json_shape(&LEGAL_KEYS, &LEGAL_USER_SHAPE),
        t.incident_heading,
        description
    );

    Prompt { system, user }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Render `{"key": "example", ...}` with one key per line, preserving order.
fn json_shape(keys: &[&str], examples: &[&str]) -> String {
    let lines: Vec<String> = keys
        .iter()
        .zip(examples)
        .map(|(key, example)| format!("  {}: {}", Value::from(*key), Value::from(*example)))
        .collect();
    format!("{{\n{}\n}}", lines.join(",\n"))
}

pub(crate) static ENGLISH: PromptTable = PromptTable {
    interview_role: "You are a specialized AI assistant for police departments that extracts structured information from interview transcripts for First Information Reports (FIR).",
    interview_instruction: "Extract the following information from the provided Q&A transcript with maximum accuracy and detail:",
    field_descriptions: [
        "Full name of the complainant",
        "Father's or husband's name",
        "Date of birth (format: YYYY-MM-DD if possible)",
        "Nationality of the complainant",
        "Occupation information (if available)",
        "Complete address information including street, city, state, etc.",
        "When the incident occurred (format: YYYY-MM-DD if possible)",
        "Time of incident (format: HH:MM if possible)",
        "Complete location details of where the incident occurred",
        "Detailed description of accused/suspect including physical appearance, clothing, identifying marks, number of suspects, any names mentioned",
        "Comprehensive list of stolen items with descriptions",
        "Monetary value of stolen properties (include currency - INR/Rs.)",
        "Reason for delay in reporting (if applicable)",
        "Information about any witnesses (if available)",
        "A detailed paragraph describing the incident that includes sequence of events, weapons used (if any), injuries sustained (if any), and other relevant details",
    ],
    shape_instruction: "Provide the information in the following JSON format precisely:",
    shape_examples: [
        "Full name",
        "Full name",
        "YYYY-MM-DD or descriptive date",
        "Nationality",
        "Occupation",
        "Complete address",
        "YYYY-MM-DD or descriptive date",
        "HH:MM or descriptive time",
        "Complete location details",
        "Detailed description",
        "Detailed list",
        "Amount with currency",
        "Explanation if applicable",
        "Names and details if available",
        "Detailed paragraph",
    ],
    interview_closing: "If any field is not available in the transcript, use an empty string or null. Be extremely careful to extract all possible information, even if it's mentioned indirectly. Ensure dates are formatted consistently.",
    interview_request: "Please extract the structured FIR information from the following interview transcript as completely and accurately as possible:",

    free_text_system: "You are an AI assistant helping with information extraction from a First Information Report (FIR) or police complaint transcript.\nExtract all relevant personal information and incident details in a structured format. Be precise and extract only what is explicitly stated in the text.",
    free_text_instruction: "Extract the following information from the text below and provide it in a structured JSON format with these keys:",
    field_glosses: [
        "", "", "date of birth", "", "", "", "", "", "", "", "", "", "", "",
        "summary of the incident",
    ],
    free_text_closing: "If information for any field is not available, provide an empty string for that field.",
    text_marker: "TEXT:",

    legal_expert: "You are a legal expert specializing in Indian criminal law. Your task is to identify the most relevant legal sections applicable for a First Information Report (FIR) based on the incident description provided.",
    legal_scope: "Provide only the most relevant legal sections applicable under Indian law (criminal, civil, or any other relevant statutes) based on the given incident. Ensure references are from the latest legal framework, including the Bharatiya Nyaya Sanhita (BNS), Bharatiya Nagarik Suraksha Sanhita (BNSS), Bharatiya Sakshya Adhiniyam (BSA), and other applicable laws.",
    summary_instruction: "Use the following legal sections summary as your primary reference to identify applicable sections:",
    hints_instruction: "Additionally, consider the following extracted legal information as a reference when applicable:",
    legal_shape_instruction: "YOU MUST STRUCTURE YOUR RESPONSE AS FOLLOWS:",
    legal_shape: [
        "Full name of first applicable act (e.g., Bharatiya Nyaya Sanhita)",
        "Section numbers from first act (e.g., 304B, 498A)",
        "Full name of second applicable act (if any)",
        "Section numbers from second act (if any)",
        "Full name of third applicable act (if any)",
        "Section numbers from third act (if any)",
        "Brief one-paragraph description of the applicable sections and why they apply to this case",
    ],
    legal_example_instruction: "For example, format like:",
    legal_example: [
        "Bharatiya Nyaya Sanhita",
        "319, 324",
        "Information Technology Act",
        "66D",
        "",
        "",
        "BNS Sections 319 and 324 apply to cases of causing hurt and grievous hurt. IT Act Section 66D applies to identity theft used in commission of the fraud.",
    ],
    legal_closing: "Do not provide any additional explanations, comments, or text outside of this JSON structure.",
    classify_request: "Based on the following incident description, identify the most relevant legal sections that should be included in the FIR. Return your response in this exact JSON structure:",
    incident_heading: "Incident Description:",
};

pub(crate) static HINDI: PromptTable = PromptTable {
    interview_role: "आप पुलिस विभागों के लिए एक विशेष AI सहायक हैं जो प्रथम सूचना रिपोर्ट (FIR) के लिए साक्षात्कार प्रतिलेखों से संरचित जानकारी निकालता है।",
    interview_instruction: "प्रदान किए गए Q&A प्रतिलेख से निम्नलिखित जानकारी अधिकतम सटीकता और विस्तार के साथ निकालें:",
    field_descriptions: [
        "शिकायतकर्ता का पूरा नाम",
        "पिता या पति का नाम",
        "जन्म तिथि (प्रारूप: YYYY-MM-DD यदि संभव हो)",
        "शिकायतकर्ता की राष्ट्रीयता",
        "व्यवसाय की जानकारी (यदि उपलब्ध हो)",
        "सड़क, शहर, राज्य आदि सहित पूरी पता जानकारी",
        "घटना कब हुई (प्रारूप: YYYY-MM-DD यदि संभव हो)",
        "घटना का समय (प्रारूप: HH:MM यदि संभव हो)",
        "घटना के स्थान का पूरा विवरण",
        "आरोपी/संदिग्ध का विस्तृत विवरण, जिसमें शारीरिक दिखावट, कपड़े, पहचान चिह्न, संदिग्धों की संख्या, उल्लेखित कोई नाम शामिल हैं",
        "विवरण के साथ चोरी की वस्तुओं की व्यापक सूची",
        "चोरी की संपत्ति का मौद्रिक मूल्य (मुद्रा सहित - INR/रुपये)",
        "रिपोर्टिंग में देरी का कारण (यदि लागू हो)",
        "किसी भी गवाह के बारे में जानकारी (यदि उपलब्ध हो)",
        "घटना का विस्तृत वर्णन जिसमें घटनाओं का क्रम, उपयोग किए गए हथियार (यदि कोई हो), हुई चोटें (यदि कोई हो), और अन्य प्रासंगिक विवरण शामिल हैं",
    ],
    shape_instruction: "जानकारी को निम्नलिखित JSON प्रारूप में सटीक रूप से प्रदान करें:",
    shape_examples: [
        "पूरा नाम",
        "पूरा नाम",
        "YYYY-MM-DD या वर्णनात्मक तिथि",
        "राष्ट्रीयता",
        "व्यवसाय",
        "पूरा पता",
        "YYYY-MM-DD या वर्णनात्मक तिथि",
        "HH:MM या वर्णनात्मक समय",
        "पूरा स्थान विवरण",
        "विस्तृत विवरण",
        "विस्तृत सूची",
        "मुद्रा के साथ राशि",
        "स्पष्टीकरण यदि लागू हो",
        "नाम और विवरण यदि उपलब्ध हो",
        "विस्तृत पैराग्राफ",
    ],
    interview_closing: "यदि कोई फ़ील्ड प्रतिलेख में उपलब्ध नहीं है, तो खाली स्ट्रिंग या null का उपयोग करें। सभी संभावित जानकारी निकालने के लिए अत्यधिक सावधानी बरतें, भले ही इसका अप्रत्यक्ष रूप से उल्लेख किया गया हो। सुनिश्चित करें कि तिथियां लगातार स्वरूपित हैं।",
    interview_request: "कृपया निम्नलिखित साक्षात्कार प्रतिलेख से संरचित FIR जानकारी को जितना संभव हो उतना पूर्ण और सटीक रूप से निकालें:",

    free_text_system: "आप एक AI सहायक हैं जो प्रथम सूचना रिपोर्ट (FIR) या पुलिस शिकायत से जानकारी निकालने में मदद कर रहे हैं।\nसंरचित प्रारूप में सभी प्रासंगिक व्यक्तिगत जानकारी और घटना विवरण निकालें। सटीक रहें और केवल वही निकालें जो पाठ में स्पष्ट रूप से बताया गया है।",
    free_text_instruction: "नीचे दिए गए पाठ से निम्नलिखित जानकारी निकालें और इसे इन कुंजियों के साथ एक संरचित JSON प्रारूप में प्रदान करें:",
    field_glosses: [
        "पीड़ित का नाम",
        "पिता या पति का नाम",
        "जन्म तिथि",
        "राष्ट्रीयता",
        "व्यवसाय",
        "पता",
        "घटना की तारीख",
        "घटना का समय",
        "घटना स्थल",
        "आरोपी का विवरण",
        "चोरी की संपत्ति",
        "कुल मूल्य",
        "देरी का कारण",
        "गवाह विवरण",
        "घटना का सारांश",
    ],
    free_text_closing: "यदि किसी भी फ़ील्ड के लिए जानकारी उपलब्ध नहीं है, तो उस फ़ील्ड के लिए खाली स्ट्रिंग प्रदान करें।",
    text_marker: "पाठ:",

    legal_expert: "आप भारतीय आपराधिक कानून में विशेषज्ञता रखने वाले कानूनी विशेषज्ञ हैं। आपका कार्य प्रदान किए गए घटना विवरण के आधार पर प्रथम सूचना रिपोर्ट (FIR) के लिए सबसे प्रासंगिक कानूनी धाराओं की पहचान करना है।",
    legal_scope: "दी गई घटना के आधार पर भारतीय कानून (आपराधिक, नागरिक, या कोई अन्य प्रासंगिक कानून) के तहत केवल सबसे प्रासंगिक कानूनी धाराएँ प्रदान करें। सुनिश्चित करें कि संदर्भ नवीनतम कानूनी ढांचे से हों, जिसमें भारतीय न्याय संहिता (BNS), भारतीय नागरिक सुरक्षा संहिता (BNSS), भारतीय साक्ष्य अधिनियम (BSA), और अन्य लागू कानून शामिल हों।",
    summary_instruction: "कानूनी धाराओं की पहचान करने के लिए निम्नलिखित कानूनी धारा सारांश का उपयोग प्राथमिक संदर्भ के रूप में करें:",
    hints_instruction: "इसके अतिरिक्त, लागू होने पर निम्नलिखित निकाली गई कानूनी जानकारी पर विचार करें:",
    legal_shape_instruction: "आपको अपना जवाब निम्न स्वरूप में देना होगा:",
    legal_shape: [
        "पहले लागू अधिनियम का पूरा नाम (जैसे, भारतीय न्याय संहिता)",
        "पहले अधिनियम की धारा संख्याएँ (जैसे, 304B, 498A)",
        "दूसरे लागू अधिनियम का पूरा नाम (यदि कोई हो)",
        "दूसरे अधिनियम की धारा संख्याएँ (यदि कोई हो)",
        "तीसरे लागू अधिनियम का पूरा नाम (यदि कोई हो)",
        "तीसरे अधिनियम की धारा संख्याएँ (यदि कोई हो)",
        "लागू धाराओं का संक्षिप्त एक-पैराग्राफ विवरण और ये इस मामले पर क्यों लागू होती हैं",
    ],
    legal_example_instruction: "उदाहरण के लिए, इस प्रकार:",
    legal_example: [
        "भारतीय न्याय संहिता",
        "319, 324",
        "सूचना प्रौद्योगिकी अधिनियम",
        "66D",
        "",
        "",
        "BNS धारा 319 और 324 चोट और गंभीर चोट पहुंचाने के मामलों पर लागू होती है। आईटी अधिनियम धारा 66D धोखाधड़ी करने में प्रयुक्त पहचान चोरी पर लागू होती है।",
    ],
    legal_closing: "इस JSON संरचना के अलावा किसी भी अतिरिक्त स्पष्टीकरण, टिप्पणियों या पाठ को प्रदान न करें।",
    classify_request: "निम्नलिखित घटना विवरण के आधार पर, FIR में शामिल की जाने वाली सबसे प्रासंगिक कानूनी धाराओं की पहचान करें। अपना जवाब इस सटीक JSON संरचना में दें:",
    incident_heading: "घटना विवरण:",
};

pub(crate) static PUNJABI: PromptTable = PromptTable {
    interview_role: "ਤੁਸੀਂ ਪੁਲਿਸ ਵਿਭਾਗਾਂ ਲਈ ਇੱਕ ਖਾਸ AI ਸਹਾਇਕ ਹੋ ਜੋ ਪਹਿਲੀ ਸੂਚਨਾ ਰਿਪੋਰਟ (FIR) ਲਈ ਇੰਟਰਵਿਊ ਟ੍ਰਾਂਸਕ੍ਰਿਪਟਾਂ ਤੋਂ ਢਾਂਚਾਗਤ ਜਾਣਕਾਰੀ ਕੱਢਦਾ ਹੈ।",
    interview_instruction: "ਦਿੱਤੇ ਗਏ Q&A ਟ੍ਰਾਂਸਕ੍ਰਿਪਟ ਤੋਂ ਹੇਠ ਲਿਖੀ ਜਾਣਕਾਰੀ ਨੂੰ ਵੱਧ ਤੋਂ ਵੱਧ ਸਟੀਕਤਾ ਅਤੇ ਵਿਸਥਾਰ ਨਾਲ ਕੱਢੋ:",
    field_descriptions: [
        "ਸ਼ਿਕਾਇਤਕਰਤਾ ਦਾ ਪੂਰਾ ਨਾਮ",
        "ਪਿਤਾ ਜਾਂ ਪਤੀ ਦਾ ਨਾਮ",
        "ਜਨਮ ਮਿਤੀ (ਫਾਰਮੈਟ: YYYY-MM-DD ਜੇ ਸੰਭਵ ਹੋਵੇ)",
        "ਸ਼ਿਕਾਇਤਕਰਤਾ ਦੀ ਨਾਗਰਿਕਤਾ",
        "ਕਿੱਤੇ ਬਾਰੇ ਜਾਣਕਾਰੀ (ਜੇ ਉਪਲਬਧ ਹੈ)",
        "ਸੜਕ, ਸ਼ਹਿਰ, ਰਾਜ ਆਦਿ ਸਮੇਤ ਪੂਰੀ ਪਤਾ ਜਾਣਕਾਰੀ",
        "ਘਟਨਾ ਕਦੋਂ ਹੋਈ (ਫਾਰਮੈਟ: YYYY-MM-DD ਜੇ ਸੰਭਵ ਹੋਵੇ)",
        "ਘਟਨਾ ਦਾ ਸਮਾਂ (ਫਾਰਮੈਟ: HH:MM ਜੇ ਸੰਭਵ ਹੋਵੇ)",
        "ਘਟਨਾ ਦੇ ਸਥਾਨ ਦਾ ਪੂਰਾ ਵੇਰਵਾ",
        "ਦੋਸ਼ੀ/ਸ਼ੱਕੀ ਦਾ ਵਿਸਤਰਿਤ ਵੇਰਵਾ ਜਿਸ ਵਿੱਚ ਸਰੀਰਕ ਦਿੱਖ, ਕੱਪੜੇ, ਪਛਾਣ ਚਿੰਨ੍ਹ, ਸ਼ੱਕੀਆਂ ਦੀ ਗਿਣਤੀ, ਕੋਈ ਨਾਮ ਜੋ ਦੱਸੇ ਗਏ ਹਨ",
        "ਵੇਰਵੇ ਦੇ ਨਾਲ ਚੋਰੀ ਕੀਤੀਆਂ ਚੀਜ਼ਾਂ ਦੀ ਵਿਆਪਕ ਸੂਚੀ",
        "ਚੋਰੀ ਕੀਤੀ ਜਾਇਦਾਦ ਦਾ ਮੁਦਰਾ ਮੁੱਲ (ਮੁਦਰਾ ਸਮੇਤ - INR/ਰੁਪਏ)",
        "ਰਿਪੋਰਟਿੰਗ ਵਿੱਚ ਦੇਰੀ ਦਾ ਕਾਰਨ (ਜੇ ਲਾਗੂ ਹੋਵੇ)",
        "ਕਿਸੇ ਵੀ ਗਵਾਹ ਬਾਰੇ ਜਾਣਕਾਰੀ (ਜੇ ਉਪਲਬਧ ਹੈ)",
        "ਘਟਨਾ ਦਾ ਵਿਸਤਰਿਤ ਵੇਰਵਾ ਜਿਸ ਵਿੱਚ ਘਟਨਾਵਾਂ ਦਾ ਕ੍ਰਮ, ਵਰਤੇ ਗਏ ਹਥਿਆਰ (ਜੇ ਕੋਈ ਹਨ), ਹੋਈਆਂ ਸੱਟਾਂ (ਜੇ ਕੋਈ ਹਨ), ਅਤੇ ਹੋਰ ਢੁਕਵੇਂ ਵੇਰਵੇ ਸ਼ਾਮਲ ਹਨ",
    ],
    shape_instruction: "ਜਾਣਕਾਰੀ ਨੂੰ ਹੇਠ ਲਿਖੇ JSON ਫਾਰਮੈਟ ਵਿੱਚ ਬਿਲਕੁਲ ਸਹੀ ਢੰਗ ਨਾਲ ਪ੍ਰਦਾਨ ਕਰੋ:",
    shape_examples: [
        "ਪੂਰਾ ਨਾਮ",
        "ਪੂਰਾ ਨਾਮ",
        "YYYY-MM-DD ਜਾਂ ਵਰਣਨਾਤਮਕ ਮਿਤੀ",
        "ਨਾਗਰਿਕਤਾ",
        "ਕਿੱਤਾ",
        "ਪੂਰਾ ਪਤਾ",
        "YYYY-MM-DD ਜਾਂ ਵਰਣਨਾਤਮਕ ਮਿਤੀ",
        "HH:MM ਜਾਂ ਵਰਣਨਾਤਮਕ ਸਮਾਂ",
        "ਪੂਰਾ ਸਥਾਨ ਵੇਰਵਾ",
        "ਵਿਸਤਰਿਤ ਵੇਰਵਾ",
        "ਵਿਸਤਰਿਤ ਸੂਚੀ",
        "ਮੁਦਰਾ ਦੇ ਨਾਲ ਰਕਮ",
        "ਵਿਆਖਿਆ ਜੇ ਲਾਗੂ ਹੋਵੇ",
        "ਨਾਮ ਅਤੇ ਵੇਰਵੇ ਜੇ ਉਪਲਬਧ ਹੋਣ",
        "ਵਿਸਤਰਿਤ ਪੈਰਾਗ੍ਰਾਫ",
    ],
    interview_closing: "ਜੇਕਰ ਕੋਈ ਫੀਲਡ ਟ੍ਰਾਂਸਕ੍ਰਿਪਟ ਵਿੱਚ ਉਪਲਬਧ ਨਹੀਂ ਹੈ, ਤਾਂ ਖਾਲੀ ਸਟ੍ਰਿੰਗ ਜਾਂ null ਦੀ ਵਰਤੋਂ ਕਰੋ। ਸਾਰੀ ਸੰਭਾਵਿਤ ਜਾਣਕਾਰੀ ਕੱਢਣ ਲਈ ਬਹੁਤ ਸਾਵਧਾਨੀ ਵਰਤੋ, ਭਾਵੇਂ ਇਸਦਾ ਅਸਿੱਧੇ ਤੌਰ 'ਤੇ ਜ਼ਿਕਰ ਕੀਤਾ ਗਿਆ ਹੋਵੇ। ਯਕੀਨੀ ਬਣਾਓ ਕਿ ਮਿਤੀਆਂ ਇਕਸਾਰ ਢੰਗ ਨਾਲ ਫਾਰਮੈਟ ਕੀਤੀਆਂ ਗਈਆਂ ਹਨ।",
    interview_request: "ਕਿਰਪਾ ਕਰਕੇ ਹੇਠ ਲਿਖੇ ਇੰਟਰਵਿਊ ਟ੍ਰਾਂਸਕ੍ਰਿਪਟ ਤੋਂ ਢਾਂਚਾਗਤ FIR ਜਾਣਕਾਰੀ ਨੂੰ ਜਿੰਨਾ ਸੰਭਵ ਹੋ ਸਕੇ ਪੂਰੀ ਅਤੇ ਸਹੀ ਢੰਗ ਨਾਲ ਕੱਢੋ:",

    free_text_system: "ਤੁਸੀਂ ਇੱਕ AI ਸਹਾਇਕ ਹੋ ਜੋ ਪਹਿਲੀ ਸੂਚਨਾ ਰਿਪੋਰਟ (FIR) ਜਾਂ ਪੁਲਿਸ ਸ਼ਿਕਾਇਤ ਤੋਂ ਜਾਣਕਾਰੀ ਕੱਢਣ ਵਿੱਚ ਸਹਾਇਤਾ ਕਰ ਰਹੇ ਹੋ।\nਸੰਰਚਿਤ ਫਾਰਮੈਟ ਵਿੱਚ ਸਾਰੀ ਢੁਕਵੀਂ ਨਿੱਜੀ ਜਾਣਕਾਰੀ ਅਤੇ ਘਟਨਾ ਦੇ ਵੇਰਵੇ ਕੱਢੋ। ਸਟੀਕ ਰਹੋ ਅਤੇ ਸਿਰਫ ਉਹੀ ਕੱਢੋ ਜੋ ਟੈਕਸਟ ਵਿੱਚ ਸਪਸ਼ਟ ਤੌਰ 'ਤੇ ਕਿਹਾ ਗਿਆ ਹੈ।",
    free_text_instruction: "ਹੇਠਾਂ ਦਿੱਤੇ ਟੈਕਸਟ ਤੋਂ ਹੇਠ ਲਿਖੀ ਜਾਣਕਾਰੀ ਕੱਢੋ ਅਤੇ ਇਸਨੂੰ ਇਹਨਾਂ ਕੁੰਜੀਆਂ ਨਾਲ ਇੱਕ ਸੰਰਚਿਤ JSON ਫਾਰਮੈਟ ਵਿੱਚ ਪ੍ਰਦਾਨ ਕਰੋ:",
    field_glosses: [
        "ਪੀੜਤ ਦਾ ਨਾਮ",
        "ਪਿਤਾ ਜਾਂ ਪਤੀ ਦਾ ਨਾਮ",
        "ਜਨਮ ਮਿਤੀ",
        "ਨਾਗਰਿਕਤਾ",
        "ਕਿੱਤਾ",
        "ਪਤਾ",
        "ਘਟਨਾ ਦੀ ਮਿਤੀ",
        "ਘਟਨਾ ਦਾ ਸਮਾਂ",
        "ਘਟਨਾ ਸਥਾਨ",
        "ਦੋਸ਼ੀ ਦਾ ਵੇਰਵਾ",
        "ਚੋਰੀ ਹੋਈ ਜਾਇਦਾਦ",
        "ਕੁੱਲ ਮੁੱਲ",
        "ਦੇਰੀ ਦਾ ਕਾਰਨ",
        "ਗਵਾਹ ਵੇਰਵੇ",
        "ਘਟਨਾ ਦਾ ਸਾਰ",
    ],
    free_text_closing: "ਜੇਕਰ ਕਿਸੇ ਵੀ ਫੀਲਡ ਲਈ ਜਾਣਕਾਰੀ ਉਪਲਬਧ ਨਹੀਂ ਹੈ, ਤਾਂ ਉਸ ਫੀਲਡ ਲਈ ਖਾਲੀ ਸਟਰਿੰਗ ਪ੍ਰਦਾਨ ਕਰੋ।",
    text_marker: "ਟੈਕਸਟ:",

    legal_expert: "ਤੁਸੀਂ ਭਾਰਤੀ ਫੌਜਦਾਰੀ ਕਾਨੂੰਨ ਵਿੱਚ ਮਾਹਿਰ ਕਾਨੂੰਨੀ ਮਾਹਿਰ ਹੋ। ਤੁਹਾਡਾ ਕੰਮ ਦਿੱਤੇ ਗਏ ਘਟਨਾ ਵੇਰਵੇ ਦੇ ਆਧਾਰ 'ਤੇ ਪਹਿਲੀ ਸੂਚਨਾ ਰਿਪੋਰਟ (FIR) ਲਈ ਸਭ ਤੋਂ ਢੁਕਵੀਆਂ ਕਾਨੂੰਨੀ ਧਾਰਾਵਾਂ ਦੀ ਪਛਾਣ ਕਰਨਾ ਹੈ।",
    legal_scope: "ਦਿੱਤੀ ਗਈ ਘਟਨਾ ਦੇ ਆਧਾਰ 'ਤੇ ਭਾਰਤੀ ਕਾਨੂੰਨ (ਅਪਰਾਧਿਕ, ਨਾਗਰਿਕ, ਜਾਂ ਕੋਈ ਹੋਰ ਢੁਕਵਾਂ ਕਾਨੂੰਨ) ਦੇ ਤਹਿਤ ਸਿਰਫ਼ ਸਭ ਤੋਂ ਢੁਕਵੀਆਂ ਕਾਨੂੰਨੀ ਧਾਰਾਵਾਂ ਪ੍ਰਦਾਨ ਕਰੋ। ਯਕੀਨੀ ਬਣਾਓ ਕਿ ਹਵਾਲੇ ਨਵੀਨਤਮ ਕਾਨੂੰਨੀ ਢਾਂਚੇ ਤੋਂ ਹਨ, ਜਿਸ ਵਿੱਚ ਭਾਰਤੀ ਨਿਆਂ ਸੰਹਿਤਾ (BNS), ਭਾਰਤੀ ਨਾਗਰਿਕ ਸੁਰੱਖਿਆ ਸੰਹਿਤਾ (BNSS), ਭਾਰਤੀ ਸਬੂਤ ਅਧਿਨਿਯਮ (BSA), ਅਤੇ ਹੋਰ ਲਾਗੂ ਕਾਨੂੰਨ ਸ਼ਾਮਲ ਹਨ।",
    summary_instruction: "ਕਾਨੂੰਨੀ ਧਾਰਾਵਾਂ ਦੀ ਪਛਾਣ ਕਰਨ ਲਈ ਹੇਠਾਂ ਦਿੱਤੇ ਕਾਨੂੰਨੀ ਧਾਰਾ ਸਾਰ ਦੀ ਵਰਤੋਂ ਮੁੱਖ ਹਵਾਲੇ ਵਜੋਂ ਕਰੋ:",
    hints_instruction: "ਇਸ ਤੋਂ ਇਲਾਵਾ, ਲਾਗੂ ਹੋਣ 'ਤੇ ਹੇਠਾਂ ਦਿੱਤੀ ਕੱਢੀ ਗਈ ਕਾਨੂੰਨੀ ਜਾਣਕਾਰੀ 'ਤੇ ਵਿਚਾਰ ਕਰੋ:",
    legal_shape_instruction: "ਤੁਹਾਨੂੰ ਆਪਣਾ ਜਵਾਬ ਇਸ ਢੰਗ ਨਾਲ ਬਣਾਉਣਾ ਚਾਹੀਦਾ ਹੈ:",
    legal_shape: [
        "ਪਹਿਲੇ ਲਾਗੂ ਐਕਟ ਦਾ ਪੂਰਾ ਨਾਮ (ਜਿਵੇਂ, ਭਾਰਤੀ ਨਿਆਂ ਸੰਹਿਤਾ)",
        "ਪਹਿਲੇ ਐਕਟ ਦੀਆਂ ਧਾਰਾ ਨੰਬਰ (ਜਿਵੇਂ, 304B, 498A)",
        "ਦੂਜੇ ਲਾਗੂ ਐਕਟ ਦਾ ਪੂਰਾ ਨਾਮ (ਜੇ ਕੋਈ ਹੈ)",
        "ਦੂਜੇ ਐਕਟ ਦੀਆਂ ਧਾਰਾ ਨੰਬਰ (ਜੇ ਕੋਈ ਹੈ)",
        "ਤੀਜੇ ਲਾਗੂ ਐਕਟ ਦਾ ਪੂਰਾ ਨਾਮ (ਜੇ ਕੋਈ ਹੈ)",
        "ਤੀਜੇ ਐਕਟ ਦੀਆਂ ਧਾਰਾ ਨੰਬਰ (ਜੇ ਕੋਈ ਹੈ)",
        "ਲਾਗੂ ਧਾਰਾਵਾਂ ਦਾ ਸੰਖੇਪ ਇੱਕ-ਪੈਰਾ ਵਰਣਨ ਅਤੇ ਇਹ ਇਸ ਮਾਮਲੇ 'ਤੇ ਕਿਉਂ ਲਾਗੂ ਹੁੰਦੀਆਂ ਹਨ",
    ],
    legal_example_instruction: "ਉਦਾਹਰਨ ਦੇ ਤੌਰ 'ਤੇ, ਇਸ ਤਰ੍ਹਾਂ:",
    legal_example: [
        "ਭਾਰਤੀ ਨਿਆਂ ਸੰਹਿਤਾ",
        "319, 324",
        "ਸੂਚਨਾ ਤਕਨਾਲੋਜੀ ਐਕਟ",
        "66D",
        "",
        "",
        "BNS ਧਾਰਾ 319 ਅਤੇ 324 ਸੱਟ ਅਤੇ ਗੰਭੀਰ ਸੱਟ ਪਹੁੰਚਾਉਣ ਦੇ ਮਾਮਲਿਆਂ 'ਤੇ ਲਾਗੂ ਹੁੰਦੀਆਂ ਹਨ। ਆਈਟੀ ਐਕਟ ਧਾਰਾ 66D ਧੋਖਾਧੜੀ ਕਰਨ ਲਈ ਵਰਤੀ ਗਈ ਪਛਾਣ ਚੋਰੀ 'ਤੇ ਲਾਗੂ ਹੁੰਦੀ ਹੈ।",
    ],
    legal_closing: "ਇਸ JSON ਢਾਂਚੇ ਤੋਂ ਬਾਹਰ ਕੋਈ ਵੀ ਵਾਧੂ ਵਿਆਖਿਆਵਾਂ, ਟਿੱਪਣੀਆਂ, ਜਾਂ ਟੈਕਸਟ ਨਾ ਦਿਓ।",
    classify_request: "ਹੇਠਾਂ ਦਿੱਤੇ ਘਟਨਾ ਵੇਰਵੇ ਦੇ ਆਧਾਰ 'ਤੇ, FIR ਵਿੱਚ ਸ਼ਾਮਲ ਕੀਤੀਆਂ ਜਾਣ ਵਾਲੀਆਂ ਸਭ ਤੋਂ ਢੁਕਵੀਆਂ ਕਾਨੂੰਨੀ ਧਾਰਾਵਾਂ ਦੀ ਪਛਾਣ ਕਰੋ। ਆਪਣਾ ਜਵਾਬ ਇਸ ਸਹੀ JSON ਢਾਂਚੇ ਵਿੱਚ ਦਿਓ:",
    incident_heading: "ਘਟਨਾ ਵੇਰਵਾ:",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Field, STOLEN_PROPERTIES_KEY};
    use serde_json::json;

    #[test]
    fn test_prompt_keys_cover_record_fields() {
        for field in Field::REQUESTED {
            assert!(PROMPT_KEYS.contains(&field.key()), "{}", field.key());
        }
        assert!(PROMPT_KEYS.contains(&STOLEN_PROPERTIES_KEY));
    }

    #[test]
    fn test_interview_shape_is_valid_json() {
        for lang in Language::ALL {
            let prompt = interview("Question: Name?\nAnswer: Ram\n\n", lang);
            let start = prompt.system.find('{').unwrap();
            let end = prompt.system.rfind('}').unwrap();
            let shape: Value = serde_json::from_str(&prompt.system[start..=end]).unwrap();
            assert_eq!(shape.as_object().unwrap().len(), PROMPT_KEYS.len());
            assert!(prompt.user.ends_with("Question: Name?\nAnswer: Ram\n\n"));
        }
    }

    #[test]
    fn test_interview_numbered_fields() {
        let prompt = interview("", Language::English);
        assert!(prompt.system.contains("\n1. victim_name: Full name of the complainant\n"));
        assert!(prompt.system.contains("\n15. incident_details: "));
    }

    #[test]
    fn test_free_text_markers() {
        let prompt = free_text("my phone was stolen", Language::English);
        assert!(prompt.user.contains("- dob (date of birth)\n"));
        assert!(prompt.user.contains("- victim_name\n"));
        assert!(prompt.user.ends_with("TEXT:\nmy phone was stolen"));

        let prompt = free_text("मेरा फोन चोरी हो गया", Language::Hindi);
        assert!(prompt.user.ends_with("पाठ:\nमेरा फोन चोरी हो गया"));
        let prompt = free_text("x", Language::Punjabi);
        assert!(prompt.user.ends_with("ਟੈਕਸਟ:\nx"));
    }

    #[test]
    fn test_classification_uses_placeholder_without_summary() {
        let prompt = classification("theft", None, None, Language::Hindi);
        assert!(prompt
            .system
            .contains(Language::Hindi.profile().labels.missing_summary_notice));
        assert!(prompt.user.ends_with("घटना विवरण:\ntheft"));

        let prompt = classification("theft", Some("BNS 303: theft"), None, Language::English);
        assert!(prompt.system.contains("BNS 303: theft"));
        assert!(!prompt.system.contains("Unable to access section summary"));
    }

    #[test]
    fn test_classification_hints_only_when_present() {
        let prompt = classification("theft", None, Some(&json!({})), Language::English);
        assert!(!prompt.system.contains("Additionally, consider"));

        let hints = json!({"act": "Arms Act"});
        let prompt = classification("theft", None, Some(&hints), Language::English);
        assert!(prompt.system.contains("Additionally, consider"));
        assert!(prompt.system.contains("\"act\": \"Arms Act\""));
    }

    #[test]
    fn test_json_shape_escapes_values() {
        assert_eq!(
            json_shape(&["a"], &["say \"hi\""]),
            "{\n  \"a\": \"say \\\"hi\\\"\"\n}"
        );
    }
}
