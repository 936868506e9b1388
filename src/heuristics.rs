//! Regex and keyword field extraction, used when the language model is unusable.
//!
//! Pure functions over text, no I/O. Each language has an ordered table of
//! field patterns tuned to self-report phrasing; the first pattern that matches
//! a field wins and unmatched fields stay empty. Dates, times and delay
//! explanations use patterns shared by all languages.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::language::Language;
use crate::schema::{CanonicalRecord, Field, StolenProperties};

/// Where a pattern's capture is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Field(Field),
    StolenProperties,
}

/// Source form of a field pattern. The value is capture group 1, or the whole
/// match when the pattern has no group.
struct FieldPattern {
    target: Target,
    pattern: &'static str,
}

const fn field(field: Field, pattern: &'static str) -> FieldPattern {
    FieldPattern {
        target: Target::Field(field),
        pattern,
    }
}

const fn stolen(pattern: &'static str) -> FieldPattern {
    FieldPattern {
        target: Target::StolenProperties,
        pattern,
    }
}

const MONTHS_EN: &str = r"(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|June?|July?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)";

/// Incident date candidates, most specific first.
static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"\b(\d{4}-\d{2}-\d{2})\b".to_string(),
        r"\b(\d{1,2}[-/]\d{1,2}[-/]\d{4})\b".to_string(),
        format!(
            r"(?i)\b(\d{{1,2}}(?:st|nd|rd|th)?\s+{m}\b(?:,?\s+\d{{4}})?|{m}\s+\d{{1,2}}(?:st|nd|rd|th)?\b(?:,?\s+\d{{4}})?)",
            m = MONTHS_EN
        ),
    ])
});

static TIME_PATTERN: Lazy<Option<Regex>> = Lazy::new(|| {
    compile(r"(?i)\b(?:at|around|approximately|about)\s+(\d{1,2}(?::\d{2})?\s*(?:am\b|pm\b|a\.m\.|p\.m\.|hours\b|hrs\b))")
});

static DELAY_PATTERN: Lazy<Option<Regex>> = Lazy::new(|| {
    compile(r"(?i)(?:delay|\blate\b|couldn't report|could not report|waited)[^.\n]{5,100}")
});

const ENGLISH_PATTERNS: &[FieldPattern] = &[
    field(
        Field::VictimName,
        r"(?i)(?:my name is|\bI am|\bI'm|name:?\s+is|myself)\s+([A-Za-z\s]+?)(?:[.,]|\s+and\b|\s+aged\b|\s+living\b|$)",
    ),
    field(
        Field::FatherOrHusbandName,
        r"(?i)(?:my father's name is|father'?s? name:?\s+is|father is|my father,)\s+([A-Za-z\s]+?)(?:[.,]|\s+and\b|$)",
    ),
    field(
        Field::FatherOrHusbandName,
        r"(?i)(?:my husband's name is|husband'?s? name:?\s+is|husband is|my husband,)\s+([A-Za-z\s]+?)(?:[.,]|\s+and\b|$)",
    ),
    field(
        Field::DateOfBirth,
        r"(?i)(?:born on|date of birth|\bdob:?|\bborn|birth date)(?:\s+is)?\s+(\d{1,2}(?:st|nd|rd|th)?\s+(?:January|February|March|April|May|June|July|August|September|October|November|December|Jan|Feb|Mar|Apr|Jun|Jul|Aug|Sept?|Oct|Nov|Dec)\b(?:\s+\d{4})?|\d{4}-\d{2}-\d{2}|\d{1,2}[-/]\d{1,2}[-/]\d{4})",
    ),
    field(
        Field::Nationality,
        r"(?i)(?:my nationality is|nationality:?|I am a citizen of|citizen of)\s+([A-Za-z]+)",
    ),
    field(
        Field::Occupation,
        r"(?i)(?:(?:\bI am|\bI'm|working as)(?: a| an)?\s+|occupation:?\s+|by profession,?\s+(?:I am|I'm)(?: a| an)?\s+|employed as(?: a| an)?\s+)([^.,]{3,30}?)(?:[.,]|\s+and\b|\s+at\b)",
    ),
    field(
        Field::Address,
        r"(?i)(?:I live at|address:?|residing at|residence:?|staying at)\s+([^.\n]{10,100})(?:\.|\n|$)",
    ),
    field(
        Field::IncidentLocation,
        r"(?i)(?:incident|crime|theft|attack|robbery|snatching) (?:occurred|happened|took place) (?:at|in|near|around)\s+([^.]+?)(?:\s+on\b|\s+at\b|\s+when\b|\s+where\b|\s+and\b|\.|$)",
    ),
    field(
        Field::WitnessDetails,
        r"(?i)([A-Za-z\s]+?)\s+(?:saw|witnessed|observed|was present)\b",
    ),
    field(
        Field::AccusedDescription,
        r"(?i)(?:The accused|perpetrator|suspect|attacker|thief|thieves) (?:was wearing|appeared to be|looked like|was|were|is|had|wore)\s+([^.\n]{5,100})(?:\.|\n|$)",
    ),
    stolen(
        r"(?i)(?:stole|took|robbed|snatched|made away with|fled with|missing items include)\s+([^.\n]{5,100})(?:\.|\n|$)",
    ),
    field(
        Field::TotalValue,
        r"(?i)(?:valued at|worth|amounting to|costing|estimated value of|total value(?: of| is)?)\s+(?:Rs\.?|₹|INR)?\s*([0-9][0-9,]*)",
    ),
];

const HINDI_PATTERNS: &[FieldPattern] = &[
    field(Field::VictimName, r"(?:मेरा नाम|मैं)\s+([^.,।]+?)\s*(?:है|हैं|हूँ|हूं)?\s*[.,।]"),
    field(
        Field::FatherOrHusbandName,
        r"(?:मेरे पिता का नाम|पिता का नाम|पिता जी का नाम)\s+([^.,।]+?)\s*(?:है|हैं|हूँ|हूं)?\s*[.,।]",
    ),
    field(
        Field::FatherOrHusbandName,
        r"(?:मेरे पति का नाम|पति का नाम)\s+([^.,।]+?)\s*(?:है|हैं|हूँ|हूं)?\s*[.,।]",
    ),
    field(
        Field::DateOfBirth,
        r"(?:जन्म तिथि|जन्म दिनांक)\s+([0-9]{1,2}\s+(?:जनवरी|फरवरी|मार्च|अप्रैल|मई|जून|जुलाई|अगस्त|सितंबर|अक्टूबर|नवंबर|दिसंबर)(?:\s+[0-9]{4})?)",
    ),
    field(Field::Nationality, r"(?:मेरी राष्ट्रीयता|नागरिकता)\s+([^.,।]+)"),
    field(
        Field::Occupation,
        r"(?:मैं|मेरा पेशा|व्यवसाय)\s+([^.,।]{3,30}?)\s*(?:हूँ|हूं|है|में|का)",
    ),
    field(
        Field::Address,
        r"(?:मैं|पता|निवास)\s+([^.।]{10,100}?)\s*(?:में रहता हूँ|में रहती हूँ|पर रहता हूँ|पर रहती हूँ|में निवास करता|में निवास करती)",
    ),
    field(
        Field::IncidentLocation,
        r"(?:पास|में|के निकट)\s+([^.।]+?)\s*(?:जब|जहाँ|[.।])",
    ),
    field(Field::WitnessDetails, r"([^.,।]+?)\s*(?:ने देखा|गवाह)"),
    field(
        Field::AccusedDescription,
        r"(?:आरोपी|संदिग्ध|हमलावर)\s+([^.।\n]{5,100})(?:[.।]|\n|$)",
    ),
    stolen(r"(?:चोरी|लूट|छीन)\s+([^.।\n]{5,100})(?:[.।]|\n|$)"),
    field(
        Field::TotalValue,
        r"(?:कीमत|मूल्य|लागत)\s+(?:रु\.?|₹)?\s*([0-9][0-9,]*)",
    ),
];

const PUNJABI_PATTERNS: &[FieldPattern] = &[
    field(Field::VictimName, r"(?:ਮੇਰਾ ਨਾਮ|ਮੈਂ)\s+([^.,।]+?)\s*(?:ਹੈ|ਹਾਂ)?\s*[.,।]"),
    field(
        Field::FatherOrHusbandName,
        r"(?:ਮੇਰੇ ਪਿਤਾ ਦਾ ਨਾਮ|ਪਿਤਾ ਦਾ ਨਾਮ|ਪਿਤਾ ਜੀ ਦਾ ਨਾਮ)\s+([^.,।]+?)\s*(?:ਹੈ|ਹਾਂ)?\s*[.,।]",
    ),
    field(
        Field::FatherOrHusbandName,
        r"(?:ਮੇਰੇ ਪਤੀ ਦਾ ਨਾਮ|ਪਤੀ ਦਾ ਨਾਮ)\s+([^.,।]+?)\s*(?:ਹੈ|ਹਾਂ)?\s*[.,।]",
    ),
    field(
        Field::DateOfBirth,
        r"(?:ਜਨਮ ਮਿਤੀ|ਜਨਮ ਦਿਨ)\s+([0-9]{1,2}\s+(?:ਜਨਵਰੀ|ਫਰਵਰੀ|ਮਾਰਚ|ਅਪ੍ਰੈਲ|ਮਈ|ਜੂਨ|ਜੁਲਾਈ|ਅਗਸਤ|ਸਤੰਬਰ|ਅਕਤੂਬਰ|ਨਵੰਬਰ|ਦਸੰਬਰ)(?:\s+[0-9]{4})?)",
    ),
    field(Field::Nationality, r"(?:ਮੇਰੀ ਨਾਗਰਿਕਤਾ|ਕੌਮੀਅਤ)\s+([^.,।]+)"),
    field(
        Field::Occupation,
        r"(?:ਮੈਂ|ਮੇਰਾ ਕਿੱਤਾ|ਪੇਸ਼ਾ)\s+([^.,।]{3,30}?)\s*(?:ਹਾਂ|ਹੈ|ਵਿੱਚ|ਦਾ)",
    ),
    field(
        Field::Address,
        r"(?:ਮੈਂ|ਪਤਾ|ਨਿਵਾਸ)\s+([^.।]{10,100}?)\s*(?:ਵਿੱਚ ਰਹਿੰਦਾ ਹਾਂ|ਵਿੱਚ ਰਹਿੰਦੀ ਹਾਂ|'ਤੇ ਰਹਿੰਦਾ ਹਾਂ|'ਤੇ ਰਹਿੰਦੀ ਹਾਂ|ਵਿੱਚ ਨਿਵਾਸ ਕਰਦਾ|ਵਿੱਚ ਨਿਵਾਸ ਕਰਦੀ)",
    ),
    field(
        Field::IncidentLocation,
        r"(?:ਨੇੜੇ|ਵਿੱਚ|ਕੋਲ)\s+([^.।]+?)\s*(?:ਜਦੋਂ|ਜਿੱਥੇ|[.।])",
    ),
    field(Field::WitnessDetails, r"([^.,।]+?)\s*(?:ਨੇ ਵੇਖਿਆ|ਗਵਾਹ)"),
    field(
        Field::AccusedDescription,
        r"(?:ਦੋਸ਼ੀ|ਸ਼ੱਕੀ|ਹਮਲਾਵਰ)\s+([^.।\n]{5,100})(?:[.।]|\n|$)",
    ),
    stolen(r"(?:ਚੋਰੀ|ਲੁੱਟ|ਖੋਹ)\s+([^.।\n]{5,100})(?:[.।]|\n|$)"),
    field(
        Field::TotalValue,
        r"(?:ਕੀਮਤ|ਮੁੱਲ|ਲਾਗਤ)\s+(?:ਰੁ\.?|₹)?\s*([0-9][0-9,]*)",
    ),
];

pub(crate) static ENGLISH_COMPILED: Lazy<CompiledFieldPatterns> =
    Lazy::new(|| CompiledFieldPatterns::compile(Language::English, ENGLISH_PATTERNS));
pub(crate) static HINDI_COMPILED: Lazy<CompiledFieldPatterns> =
    Lazy::new(|| CompiledFieldPatterns::compile(Language::Hindi, HINDI_PATTERNS));
pub(crate) static PUNJABI_COMPILED: Lazy<CompiledFieldPatterns> =
    Lazy::new(|| CompiledFieldPatterns::compile(Language::Punjabi, PUNJABI_PATTERNS));

/// A field pattern compiled and ready for matching.
#[derive(Debug)]
struct CompiledPattern {
    target: Target,
    regex: Regex,
}

/// Pre-compiled pattern table for one language.
#[derive(Debug)]
pub struct CompiledFieldPatterns {
    language: Language,
    patterns: Vec<CompiledPattern>,
}

impl CompiledFieldPatterns {
    fn compile(language: Language, sources: &[FieldPattern]) -> Self {
        let patterns: Vec<CompiledPattern> = sources
            .iter()
            .filter_map(|p| {
                compile(p.pattern).map(|regex| CompiledPattern {
                    target: p.target,
                    regex,
                })
            })
            .collect();
        debug!(
            "Compiled {} of {} field patterns for {}",
            patterns.len(),
            sources.len(),
            language
        );
        Self { language, patterns }
    }

    pub fn for_language(language: Language) -> &'static Self {
        Lazy::force(language.profile().field_patterns)
    }
}

/// Extract a record from raw text using only patterns and keyword tables.
///
/// Never fails: anything that does not match is left empty.
pub fn extract_fallback(text: &str, language: Language) -> CanonicalRecord {
    let compiled = CompiledFieldPatterns::for_language(language);
    let mut record = CanonicalRecord::default();

    for pattern in &compiled.patterns {
        let already_set = match pattern.target {
            Target::Field(field) => !record.get(field).is_empty(),
            Target::StolenProperties => !record.stolen_properties.is_empty(),
        };
        if already_set {
            continue;
        }
        let Some(value) = first_capture(&pattern.regex, text) else {
            continue;
        };
        match pattern.target {
            Target::Field(field) => record.set(field, value),
            Target::StolenProperties => record.stolen_properties = StolenProperties::Text(value),
        }
    }

    record.incident_date = find_incident_date(text, &record.date_of_birth).unwrap_or_default();
    if let Some(time) = Option::as_ref(&TIME_PATTERN).and_then(|re| first_capture(re, text)) {
        record.incident_time = time;
    }
    if let Some(delay) = Option::as_ref(&DELAY_PATTERN).and_then(|re| first_capture(re, text)) {
        record.delay_reason = delay;
    }

    if record.stolen_properties.is_empty() {
        let hits = keyword_hits(text, language.profile().stolen_keywords);
        if !hits.is_empty() {
            record.stolen_properties = StolenProperties::Text(hits.join(", "));
        }
    }

    debug!(
        "Heuristic extraction ({}): {} fields filled",
        compiled.language,
        filled_count(&record)
    );
    record
}

/// First date mention in the text that is not the date of birth.
fn find_incident_date(text: &str, date_of_birth: &str) -> Option<String> {
    DATE_PATTERNS
        .iter()
        .flat_map(|re| re.captures_iter(text).filter_map(|cap| capture_value(&cap)))
        .find(|candidate| date_of_birth.is_empty() || candidate != date_of_birth)
}

/// Stolen-item keywords present in the text, in table order.
fn keyword_hits(text: &str, keywords: &[&'static str]) -> Vec<&'static str> {
    let haystack = text.to_lowercase();
    keywords
        .iter()
        .copied()
        .filter(|kw| haystack.contains(&kw.to_lowercase()))
        .collect()
}

fn first_capture(regex: &Regex, text: &str) -> Option<String> {
    regex
        .captures_iter(text)
        .find_map(|cap| capture_value(&cap))
}

/// Use the first capture group if available, otherwise the full match.
fn capture_value(cap: &regex::Captures<'_>) -> Option<String> {
    let raw = cap.get(1).or_else(|| cap.get(0))?.as_str().trim();
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

fn filled_count(record: &CanonicalRecord) -> usize {
    Field::REQUESTED
        .iter()
        .filter(|f| !record.get(**f).is_empty())
        .count()
        + usize::from(!record.stolen_properties.is_empty())
}

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            warn!("Skipping invalid field pattern ({}): {}", pattern, e);
            None
        }
    }
}

fn compile_all(patterns: &[String]) -> Vec<Regex> {
    patterns.iter().filter_map(|p| compile(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tables_compile() {
        for lang in Language::ALL {
            let compiled = CompiledFieldPatterns::for_language(lang);
            let expected = match lang {
                Language::English => ENGLISH_PATTERNS.len(),
                Language::Hindi => HINDI_PATTERNS.len(),
                Language::Punjabi => PUNJABI_PATTERNS.len(),
            };
            assert_eq!(compiled.patterns.len(), expected, "{}", lang);
            assert_eq!(compiled.language, lang);
        }
        assert_eq!(DATE_PATTERNS.len(), 3);
        assert!(TIME_PATTERN.is_some());
        assert!(DELAY_PATTERN.is_some());
    }

    #[test]
    fn test_english_statement() {
        let text = "My name is Ram Lal, and I live at 12 Gandhi Road, Karol Bagh, Delhi. \
                    My father's name is Shyam Lal. The theft happened at Chandni Chowk market \
                    when I was shopping. On 15 March 2024 at 5:30 pm two men snatched my gold \
                    chain and a phone. The thief was wearing a black jacket and a red helmet. \
                    It was worth Rs 50,000.";
        let record = extract_fallback(text, Language::English);

        assert_eq!(record.victim_name, "Ram Lal");
        assert_eq!(record.father_or_husband_name, "Shyam Lal");
        assert_eq!(record.address, "12 Gandhi Road, Karol Bagh, Delhi");
        assert_eq!(record.incident_location, "Chandni Chowk market");
        assert_eq!(record.incident_date, "15 March 2024");
        assert_eq!(record.incident_time, "5:30 pm");
        assert_eq!(record.accused_description, "a black jacket and a red helmet");
        assert_eq!(
            record.stolen_properties,
            StolenProperties::from("my gold chain and a phone")
        );
        assert_eq!(record.total_value, "50,000");
        assert_eq!(record.date_of_birth, "");
        assert_eq!(record.incident_narrative, "");
    }

    #[test]
    fn test_unrecognised_text_is_all_empty() {
        for lang in Language::ALL {
            let record = extract_fallback("The weather was pleasant today", lang);
            assert_eq!(record, CanonicalRecord::default(), "{}", lang);
            assert!(record.is_blank());
        }
        assert_eq!(
            extract_fallback("", Language::Hindi),
            CanonicalRecord::default()
        );
    }

    #[test]
    fn test_keyword_fallback_for_stolen_items() {
        let record = extract_fallback(
            "Someone grabbed my Wallet and Laptop near the bus stand",
            Language::English,
        );
        assert_eq!(
            record.stolen_properties,
            StolenProperties::from("wallet, laptop")
        );
    }

    #[test]
    fn test_hindi_statement() {
        let text = "मेरा नाम सीता देवी, मेरे पिता का नाम मोहन लाल है। चोर मेरा मोबाइल और पर्स ले गया जिसकी कीमत ₹20,000 थी।";
        let record = extract_fallback(text, Language::Hindi);

        assert_eq!(record.victim_name, "सीता देवी");
        assert_eq!(record.father_or_husband_name, "मोहन लाल");
        assert_eq!(record.total_value, "20,000");
        assert_eq!(record.stolen_properties, StolenProperties::from("मोबाइल, पर्स"));
    }

    #[test]
    fn test_hindi_names_stop_before_copula() {
        let record = extract_fallback("मैं राम हूँ। मेरे पति का नाम अर्जुन सिंह है।", Language::Hindi);
        assert_eq!(record.victim_name, "राम");
        assert_eq!(record.father_or_husband_name, "अर्जुन सिंह");
    }

    #[test]
    fn test_punjabi_statement() {
        let text = "ਮੇਰਾ ਨਾਮ ਗੁਰਪ੍ਰੀਤ ਸਿੰਘ, ਮੇਰੇ ਪਿਤਾ ਦਾ ਨਾਮ ਹਰਜੀਤ ਸਿੰਘ। ਚੋਰ ਮੇਰਾ ਮੋਬਾਈਲ ਲੈ ਗਿਆ ਜਿਸਦੀ ਕੀਮਤ ₹15000 ਸੀ।";
        let record = extract_fallback(text, Language::Punjabi);

        assert_eq!(record.victim_name, "ਗੁਰਪ੍ਰੀਤ ਸਿੰਘ");
        assert_eq!(record.father_or_husband_name, "ਹਰਜੀਤ ਸਿੰਘ");
        assert_eq!(record.total_value, "15000");
        assert_eq!(record.stolen_properties, StolenProperties::from("ਮੋਬਾਈਲ"));

        let record = extract_fallback("ਮੇਰੇ ਪਿਤਾ ਦਾ ਨਾਮ ਹਰਜੀਤ ਸਿੰਘ ਹੈ।", Language::Punjabi);
        assert_eq!(record.father_or_husband_name, "ਹਰਜੀਤ ਸਿੰਘ");
    }

    #[test]
    fn test_husband_used_when_no_father() {
        let record = extract_fallback(
            "My husband's name is Arjun Singh. Nothing else.",
            Language::English,
        );
        assert_eq!(record.father_or_husband_name, "Arjun Singh");
    }

    #[test]
    fn test_incident_date_skips_date_of_birth() {
        let text = "I was born on 5 March 1990. On 2024-06-12 my bag was taken.";
        let record = extract_fallback(text, Language::English);
        assert_eq!(record.date_of_birth, "5 March 1990");
        assert_eq!(record.incident_date, "2024-06-12");

        let text = "Date of birth 5 March 1990. It happened on 12 June 2024.";
        let record = extract_fallback(text, Language::English);
        assert_eq!(record.incident_date, "12 June 2024");
    }

    #[test]
    fn test_delay_reason_sentence() {
        let record = extract_fallback(
            "I could not report earlier because I was in hospital. Then I came here.",
            Language::English,
        );
        assert_eq!(
            record.delay_reason,
            "could not report earlier because I was in hospital"
        );
    }
}
