//! Language selection and the per-language string tables.
//!
//! Every stage that produces or recognises user-facing text looks up a
//! [`LanguageProfile`] once per request instead of branching on the language
//! inline. Unrecognised language names resolve to English.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::heuristics::{self, CompiledFieldPatterns};
use crate::prompts::{self, PromptTable};
use crate::render::{self, FormTemplate};

/// Supported report languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Punjabi,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Punjabi];

    /// Resolve a language name, falling back to English for anything unknown.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "hindi" | "hi" => Self::Hindi,
            "punjabi" | "pa" => Self::Punjabi,
            _ => Self::English,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Hindi => "hindi",
            Self::Punjabi => "punjabi",
        }
    }

    pub fn profile(&self) -> &'static LanguageProfile {
        match self {
            Self::English => &ENGLISH,
            Self::Hindi => &HINDI,
            Self::Punjabi => &PUNJABI,
        }
    }
}

impl FromStr for Language {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for Language {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Words for "Section" in every supported language. A narrative containing any
/// of them is assumed to already cite its legal sections.
pub const SECTION_WORDS: [&str; 3] = ["Section", "धारा", "ਧਾਰਾ"];

/// Localized labels used outside the fixed document template.
#[derive(Debug)]
pub struct Labels {
    pub item: &'static str,
    pub details: &'static str,
    pub estimated_value: &'static str,
    pub witness_details: &'static str,
    pub applicable_sections: &'static str,
    pub section: &'static str,
    pub key_details: &'static str,
    pub victim: &'static str,
    pub location: &'static str,
    pub accused: &'static str,
    pub stolen_items: &'static str,
    pub value: &'static str,
    pub full_description: &'static str,
    /// Substituted into classifier prompts when no section summary is available.
    pub missing_summary_notice: &'static str,
}

/// Everything language-specific that the pipeline needs, selected once per request.
#[derive(Debug)]
pub struct LanguageProfile {
    pub language: Language,
    pub question_prefixes: &'static [&'static str],
    pub answer_prefixes: &'static [&'static str],
    /// Monday first, matching `chrono::Weekday::num_days_from_monday`.
    pub weekday_names: [&'static str; 7],
    /// Item nouns scanned for when no stolen-property phrase matches.
    pub stolen_keywords: &'static [&'static str],
    pub labels: Labels,
    pub(crate) prompts: &'static PromptTable,
    pub(crate) form: &'static FormTemplate,
    pub(crate) field_patterns: &'static Lazy<CompiledFieldPatterns>,
}

static ENGLISH: LanguageProfile = LanguageProfile {
    language: Language::English,
    question_prefixes: &["Q:", "Question:"],
    answer_prefixes: &["A:", "Answer:"],
    weekday_names: [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ],
    stolen_keywords: &[
        "phone", "mobile", "wallet", "bag", "purse", "money", "jewelry", "cash", "gold", "silver",
        "laptop", "watch",
    ],
    labels: Labels {
        item: "Item",
        details: "Details",
        estimated_value: "Estimated Value",
        witness_details: "Witness Details",
        applicable_sections: "Applicable Legal Sections",
        section: "Section",
        key_details: "Key Details:",
        victim: "Victim",
        location: "Location",
        accused: "Accused Description",
        stolen_items: "Stolen Items",
        value: "Value",
        full_description: "Full Description:",
        missing_summary_notice:
            "Unable to access section summary. Please refer to standard legal databases.",
    },
    prompts: &prompts::ENGLISH,
    form: &render::ENGLISH,
    field_patterns: &heuristics::ENGLISH_COMPILED,
};

static HINDI: LanguageProfile = LanguageProfile {
    language: Language::Hindi,
    question_prefixes: &["प्रश्न:", "Q:", "सवाल:"],
    answer_prefixes: &["उत्तर:", "A:", "जवाब:"],
    weekday_names: [
        "सोमवार",
        "मंगलवार",
        "बुधवार",
        "गुरुवार",
        "शुक्रवार",
        "शनिवार",
        "रविवार",
    ],
    stolen_keywords: &[
        "फोन", "मोबाइल", "पर्स", "बटुआ", "पैसे", "गहने", "नगदी", "सोना", "चांदी", "लैपटॉप", "घड़ी",
    ],
    labels: Labels {
        item: "वस्तु",
        details: "विवरण",
        estimated_value: "अनुमानित मूल्य",
        witness_details: "गवाह विवरण",
        applicable_sections: "लागू कानूनी धाराएँ",
        section: "धारा",
        key_details: "मुख्य विवरण:",
        victim: "पीड़ित",
        location: "स्थान",
        accused: "आरोपी का विवरण",
        stolen_items: "चोरी की वस्तुएँ",
        value: "मूल्य",
        full_description: "पूरा विवरण:",
        missing_summary_notice:
            "धारा सारांश तक पहुंचने में असमर्थ। कृपया मानक कानूनी डेटाबेस का संदर्भ लें।",
    },
    prompts: &prompts::HINDI,
    form: &render::HINDI,
    field_patterns: &heuristics::HINDI_COMPILED,
};

static PUNJABI: LanguageProfile = LanguageProfile {
    language: Language::Punjabi,
    question_prefixes: &["ਪ੍ਰਸ਼ਨ:", "Q:", "ਸਵਾਲ:"],
    answer_prefixes: &["ਜਵਾਬ:", "A:", "ਉੱਤਰ:"],
    weekday_names: [
        "ਸੋਮਵਾਰ",
        "ਮੰਗਲਵਾਰ",
        "ਬੁੱਧਵਾਰ",
        "ਵੀਰਵਾਰ",
        "ਸ਼ੁੱਕਰਵਾਰ",
        "ਸ਼ਨੀਵਾਰ",
        "ਐਤਵਾਰ",
    ],
    stolen_keywords: &[
        "ਫੋਨ", "ਮੋਬਾਈਲ", "ਪਰਸ", "ਬਟੂਆ", "ਪੈਸੇ", "ਗਹਿਣੇ", "ਨਕਦੀ", "ਸੋਨਾ", "ਚਾਂਦੀ", "ਲੈਪਟਾਪ", "ਘੜੀ",
    ],
    labels: Labels {
        item: "ਆਈਟਮ",
        details: "ਵੇਰਵਾ",
        estimated_value: "ਅਨੁਮਾਨਿਤ ਮੁੱਲ",
        witness_details: "ਗਵਾਹ ਵੇਰਵੇ",
        applicable_sections: "ਲਾਗੂ ਕਾਨੂੰਨੀ ਧਾਰਾਵਾਂ",
        section: "ਧਾਰਾ",
        key_details: "ਮੁੱਖ ਵੇਰਵੇ:",
        victim: "ਪੀੜਤ",
        location: "ਸਥਾਨ",
        accused: "ਦੋਸ਼ੀ ਦਾ ਵੇਰਵਾ",
        stolen_items: "ਚੋਰੀ ਹੋਈਆਂ ਵਸਤੂਆਂ",
        value: "ਮੁੱਲ",
        full_description: "ਪੂਰਾ ਵੇਰਵਾ:",
        missing_summary_notice:
            "ਧਾਰਾ ਸਾਰ ਤੱਕ ਪਹੁੰਚਣ ਵਿੱਚ ਅਸਮਰਥ। ਕਿਰਪਾ ਕਰਕੇ ਮਿਆਰੀ ਕਾਨੂੰਨੀ ਡੇਟਾਬੇਸ ਦਾ ਹਵਾਲਾ ਦਿਓ।",
    },
    prompts: &prompts::PUNJABI,
    form: &render::PUNJABI,
    field_patterns: &heuristics::PUNJABI_COMPILED,
};
