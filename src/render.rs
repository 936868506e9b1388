//! Plain-text rendering of the First Information Report form.
//!
//! Rendering is a pure function of the record, the citations, the language and
//! a timestamp. Every empty value leaves its slot blank.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::error::PipelineError;
use crate::language::{Language, SECTION_WORDS};
use crate::schema::{CanonicalRecord, LegalCitationSet, StolenProperties};

/// Formats tried, in order, when deriving the weekday of an incident date.
pub const DATE_FORMATS: [&str; 8] = [
    "%Y-%m-%d",
    "%d-%m-%Y",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

/// Blank left for the station to fill in by hand.
const BLANK: &str = "_______";

/// Render the form stamped with the current local time.
pub fn render(record: &CanonicalRecord, legal: &LegalCitationSet, language: Language) -> String {
    render_at(record, legal, language, Local::now().naive_local())
}

/// Render the form with an explicit capture timestamp.
pub fn render_at(
    record: &CanonicalRecord,
    legal: &LegalCitationSet,
    language: Language,
    now: NaiveDateTime,
) -> String {
    let t = language.profile().form;
    let form = &record.form;

    let incident_day = if record.incident_day.trim().is_empty() && !record.incident_date.trim().is_empty() {
        derive_weekday(&record.incident_date, language).unwrap_or_default()
    } else {
        record.incident_day.clone()
    };
    debug!("Rendering {} form (incident day: {:?})", language, incident_day);

    let current_date = now.format("%Y-%m-%d").to_string();
    let current_time = now.format("%H:%M").to_string();
    let year = now.year().to_string();

    let mut doc = Document::default();
    doc.line(t.form_title);
    doc.line(t.report_title);
    doc.line(t.under_section);
    doc.blank();

    doc.line(&format!(
        "{} {}  {} {}  {} {}  {} {}  {} {}",
        t.district, BLANK, t.police_station, BLANK, t.year, year, t.fir_no, t.auto_generated, t.date,
        current_date
    ));
    doc.blank();

    for (i, (act, sections)) in legal.pairs().into_iter().enumerate() {
        let parts = [t.acts[i], act, t.sections, sections];
        doc.line(&parts.iter().filter(|p| !p.is_empty()).copied().collect::<Vec<_>>().join(" "));
    }
    doc.field(t.other_acts, &form.other_acts);
    doc.blank();

    doc.line(t.occurrence);
    doc.indented(t.day, &incident_day);
    doc.indented(t.date, &record.incident_date);
    doc.indented(t.time, &record.incident_time);
    doc.line(t.received);
    doc.indented(t.date, &current_date);
    doc.indented(t.time, &current_time);
    doc.line(t.gd_reference);
    doc.indented(t.entry_no, BLANK);
    doc.indented(t.time, BLANK);
    doc.blank();

    doc.field(t.info_type, t.written_oral);
    doc.blank();

    doc.line(t.place);
    doc.indented(t.direction_distance, &form.distance_from_station);
    doc.indented(t.beat_no, &form.beat_no);
    doc.indented(t.place_address, &record.incident_location);
    doc.indented(t.outside_jurisdiction, &form.outside_jurisdiction);
    doc.blank();

    doc.line(t.complainant);
    doc.indented(t.name, &record.victim_name);
    doc.indented(t.father_husband, &record.father_or_husband_name);
    doc.indented(t.birth, &record.date_of_birth);
    doc.indented(t.nationality, &record.nationality);
    doc.indented(t.passport, &form.passport_details);
    doc.indented(t.occupation, &record.occupation);
    doc.indented(t.complainant_address, &record.address);
    doc.blank();

    let stolen = format_stolen_properties(&record.stolen_properties, language);
    let narrative = compose_narrative(record, legal, language);
    for (heading, body) in [
        (t.accused, record.accused_description.as_str()),
        (t.delay, record.delay_reason.as_str()),
        (t.properties, stolen.as_str()),
        (t.total_value, record.total_value.as_str()),
        (t.inquest, form.inquest_report.as_str()),
        (t.contents, narrative.as_str()),
    ] {
        doc.section(heading, body);
    }

    doc.line(t.action_taken);
    doc.line(t.action_text);
    doc.blank();
    doc.line(t.officer);
    doc.field(t.officer_name, BLANK);
    doc.field(t.rank, BLANK);
    doc.field(t.officer_no, BLANK);
    doc.blank();
    doc.line(t.signature);
    doc.line(t.thumb);
    doc.line(t.dispatch);
    doc.line(BLANK);

    doc.finish()
}

/// Parse an incident date against [`DATE_FORMATS`], first match wins.
pub fn parse_incident_date(date: &str) -> Result<NaiveDate, PipelineError> {
    let date = date.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date, format).ok())
        .ok_or_else(|| PipelineError::UnparseableDate(date.to_string()))
}

/// Localized weekday name for an incident date.
pub fn derive_weekday(date: &str, language: Language) -> Result<String, PipelineError> {
    let parsed = parse_incident_date(date)?;
    let index = parsed.weekday().num_days_from_monday() as usize;
    Ok(language.profile().weekday_names[index].to_string())
}

/// Normalize stolen property into the numbered block shown in item 9.
/// Free text passes through unchanged.
pub fn format_stolen_properties(properties: &StolenProperties, language: Language) -> String {
    let labels = &language.profile().labels;
    match properties {
        StolenProperties::Text(text) => text.clone(),
        StolenProperties::Items(items) => items
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let mut lines = vec![format!("{}. {}: {}", i + 1, labels.item, entry.item)];
                if let Some(details) = &entry.details {
                    lines.push(format!("   {}: {}", labels.details, details));
                }
                if let Some(value) = &entry.estimated_value {
                    lines.push(format!("   {}: {}", labels.estimated_value, value));
                }
                lines.join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n\n")
            .trim()
            .to_string(),
    }
}

/// Narrative for item 12: witness details and the applicable legal sections
/// are appended unless the narrative already carries them.
pub fn compose_narrative(
    record: &CanonicalRecord,
    legal: &LegalCitationSet,
    language: Language,
) -> String {
    let labels = &language.profile().labels;
    let mut narrative = record.incident_narrative.clone();

    let witness = record.witness_details.trim();
    if !witness.is_empty() && !narrative.contains(witness) {
        narrative.push_str(&format!("\n{}: {}", labels.witness_details, witness));
    }

    let cites_sections = SECTION_WORDS.iter().any(|word| narrative.contains(word));
    if !narrative.trim().is_empty() && !cites_sections {
        if let Some(block) = legal_block(legal, language) {
            narrative.push_str(&block);
        }
    }
    narrative
}

/// `None` unless the first act and its sections are both present.
fn legal_block(legal: &LegalCitationSet, language: Language) -> Option<String> {
    if legal.act1.is_empty() || legal.sections1.is_empty() {
        return None;
    }
    let labels = &language.profile().labels;
    let mut block = format!("\n\n{}:", labels.applicable_sections);
    for (i, (act, sections)) in legal.pairs().into_iter().enumerate() {
        if !act.is_empty() && !sections.is_empty() {
            block.push_str(&format!("\n{}. {} - {} {}", i + 1, act, labels.section, sections));
        }
    }
    Some(block)
}

#[derive(Default)]
struct Document {
    lines: Vec<String>,
}

impl Document {
    fn line(&mut self, text: &str) {
        self.lines.push(text.trim_end().to_string());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn field(&mut self, label: &str, value: &str) {
        self.line(&format!("{} {}", label, value));
    }

    fn indented(&mut self, label: &str, value: &str) {
        self.line(&format!("   {} {}", label, value));
    }

    /// Heading on its own line, then the (possibly multi-line) body.
    fn section(&mut self, heading: &str, body: &str) {
        self.line(heading);
        if !body.trim().is_empty() {
            self.lines.push(body.trim_end().to_string());
        }
        self.blank();
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

/// Fixed label text of one language's form.
#[derive(Debug)]
pub(crate) struct FormTemplate {
    form_title: &'static str,
    report_title: &'static str,
    under_section: &'static str,
    district: &'static str,
    police_station: &'static str,
    year: &'static str,
    fir_no: &'static str,
    auto_generated: &'static str,
    date: &'static str,
    acts: [&'static str; 3],
    sections: &'static str,
    other_acts: &'static str,
    occurrence: &'static str,
    day: &'static str,
    time: &'static str,
    received: &'static str,
    gd_reference: &'static str,
    entry_no: &'static str,
    info_type: &'static str,
    written_oral: &'static str,
    place: &'static str,
    direction_distance: &'static str,
    beat_no: &'static str,
    place_address: &'static str,
    outside_jurisdiction: &'static str,
    complainant: &'static str,
    name: &'static str,
    father_husband: &'static str,
    birth: &'static str,
    nationality: &'static str,
    passport: &'static str,
    occupation: &'static str,
    complainant_address: &'static str,
    accused: &'static str,
    delay: &'static str,
    properties: &'static str,
    total_value: &'static str,
    inquest: &'static str,
    contents: &'static str,
    action_taken: &'static str,
    action_text: &'static str,
    officer: &'static str,
    officer_name: &'static str,
    rank: &'static str,
    officer_no: &'static str,
    signature: &'static str,
    thumb: &'static str,
    dispatch: &'static str,
}


pub(crate) static ENGLISH: FormTemplate = FormTemplate {
    form_title: "FORM – IF1 - (Integrated Form)",
    report_title: "FIRST INFORMATION REPORT",
    under_section: "(Under Section 154 Cr.P.C)",
    district: "1. Dist.:",
    police_station: "P.S.:",
    year: "Year:",
    fir_no: "F.I.R. No.:",
    auto_generated: "AUTO-GENERATED",
    date: "Date:",
    acts: ["2.(i) Act:", "(ii) Act:", "(iii) Act:"],
    sections: "Sections:",
    other_acts: "(iv) Other Acts & Sections:",
    occurrence: "3. (a) Occurrence of Offence:",
    day: "Day:",
    time: "Time:",
    received: "(b) Information received at P.S.:",
    gd_reference: "(c) General Diary Reference:",
    entry_no: "Entry No(s):",
    info_type: "4. Type of Information:",
    written_oral: "Written / Oral",
    place: "5. Place of Occurrence:",
    direction_distance: "(a) Direction and Distance from P.S.:",
    beat_no: "Beat No.:",
    place_address: "(b) Address:",
    outside_jurisdiction: "(c) Outside PS Jurisdiction:",
    complainant: "6. Complainant/Informant:",
    name: "(a) Name:",
    father_husband: "(b) Father's/Husband's Name:",
    birth: "(c) Date/Year of Birth:",
    nationality: "(d) Nationality:",
    passport: "(e) Passport Details:",
    occupation: "(f) Occupation:",
    complainant_address: "(g) Address:",
    accused: "7. Details of Accused:",
    delay: "8. Reasons for Delay in Reporting:",
    properties: "9. Particulars of Properties Stolen/Involved:",
    total_value: "10. Total Value of Properties:",
    inquest: "11. Inquest Report/U.D. Case No.:",
    contents: "12. F.I.R. Contents:",
    action_taken: "13. Action Taken:",
    action_text: "Since the above report reveals commission of offence(s) u/s as mentioned at Item No. 2",
    officer: "Officer-in-Charge",
    officer_name: "Name:",
    rank: "Rank:",
    officer_no: "No.:",
    signature: "14. Complainant's Signature",
    thumb: "Signature/Thumb Impression",
    dispatch: "15. Date & Time of despatch to court:",
};

pub(crate) static HINDI: FormTemplate = FormTemplate {
    form_title: "फॉर्म – IF1 - (एकीकृत फॉर्म)",
    report_title: "प्रथम सूचना रिपोर्ट",
    under_section: "(धारा 154 दंड प्रक्रिया संहिता के अंतर्गत)",
    district: "1. जिला:",
    police_station: "पुलिस स्टेशन:",
    year: "वर्ष:",
    fir_no: "एफ.आई.आर. संख्या:",
    auto_generated: "स्वतः-जनित",
    date: "दिनांक:",
    acts: ["2.(i) अधिनियम:", "(ii) अधिनियम:", "(iii) अधिनियम:"],
    sections: "धाराएं:",
    other_acts: "(iv) अन्य अधिनियम और धाराएं:",
    occurrence: "3. (क) अपराध का घटित होना:",
    day: "दिन:",
    time: "समय:",
    received: "(ख) पुलिस स्टेशन में सूचना प्राप्त:",
    gd_reference: "(ग) सामान्य डायरी संदर्भ:",
    entry_no: "प्रविष्टि संख्या:",
    info_type: "4. सूचना का प्रकार:",
    written_oral: "लिखित / मौखिक",
    place: "5. घटना स्थल:",
    direction_distance: "(क) पुलिस स्टेशन से दिशा और दूरी:",
    beat_no: "बीट नंबर:",
    place_address: "(ख) पता:",
    outside_jurisdiction: "(ग) पुलिस स्टेशन क्षेत्र के बाहर:",
    complainant: "6. शिकायतकर्ता/सूचनाकर्ता:",
    name: "(क) नाम:",
    father_husband: "(ख) पिता/पति का नाम:",
    birth: "(ग) जन्म तिथि/वर्ष:",
    nationality: "(घ) राष्ट्रीयता:",
    passport: "(ङ) पासपोर्ट विवरण:",
    occupation: "(च) व्यवसाय:",
    complainant_address: "(छ) पता:",
    accused: "7. आरोपी का विवरण:",
    delay: "8. रिपोर्ट में देरी के कारण:",
    properties: "9. चोरी/शामिल संपत्ति का विवरण:",
    total_value: "10. संपत्ति का कुल मूल्य:",
    inquest: "11. पंचनामा रिपोर्ट/यू.डी. केस संख्या:",
    contents: "12. एफ.आई.आर. की विषयवस्तु:",
    action_taken: "13. की गई कार्रवाई:",
    action_text: "चूंकि उपरोक्त रिपोर्ट से मद संख्या 2 में उल्लिखित धारा के तहत अपराध का पता चलता है",
    officer: "प्रभारी अधिकारी",
    officer_name: "नाम:",
    rank: "पद:",
    officer_no: "क्रमांक:",
    signature: "14. शिकायतकर्ता के हस्ताक्षर",
    thumb: "हस्ताक्षर/अंगूठे का निशान",
    dispatch: "15. न्यायालय में प्रेषण का दिनांक और समय:",
};

pub(crate) static PUNJABI: FormTemplate = FormTemplate {
    form_title: "ਫਾਰਮ – IF1 - (ਏਕੀਕ੍ਰਿਤ ਫਾਰਮ)",
    report_title: "ਪਹਿਲੀ ਸੂਚਨਾ ਰਿਪੋਰਟ",
    under_section: "(ਧਾਰਾ 154 ਦੰਡ ਪ੍ਰਕਿਰਿਆ ਸੰਹਿਤਾ ਦੇ ਤਹਿਤ)",
    district: "1. ਜ਼ਿਲ੍ਹਾ:",
    police_station: "ਪੁਲਿਸ ਸਟੇਸ਼ਨ:",
    year: "ਸਾਲ:",
    fir_no: "ਐਫ.ਆਈ.ਆਰ. ਨੰਬਰ:",
    auto_generated: "ਸਵੈ-ਜਨਿਤ",
    date: "ਮਿਤੀ:",
    acts: ["2.(i) ਐਕਟ:", "(ii) ਐਕਟ:", "(iii) ਐਕਟ:"],
    sections: "ਧਾਰਾਵਾਂ:",
    other_acts: "(iv) ਹੋਰ ਐਕਟ ਅਤੇ ਧਾਰਾਵਾਂ:",
    occurrence: "3. (ੳ) ਅਪਰਾਧ ਦਾ ਵਾਪਰਨਾ:",
    day: "ਦਿਨ:",
    time: "ਸਮਾਂ:",
    received: "(ਅ) ਪੁਲਿਸ ਸਟੇਸ਼ਨ ਵਿੱਚ ਸੂਚਨਾ ਪ੍ਰਾਪਤ:",
    gd_reference: "(ੲ) ਆਮ ਡਾਇਰੀ ਸੰਦਰਭ:",
    entry_no: "ਐਂਟਰੀ ਨੰਬਰ:",
    info_type: "4. ਸੂਚਨਾ ਦੀ ਕਿਸਮ:",
    written_oral: "ਲਿਖਤੀ / ਜ਼ਬਾਨੀ",
    place: "5. ਘਟਨਾ ਸਥਾਨ:",
    direction_distance: "(ੳ) ਪੁਲਿਸ ਸਟੇਸ਼ਨ ਤੋਂ ਦਿਸ਼ਾ ਅਤੇ ਦੂਰੀ:",
    beat_no: "ਬੀਟ ਨੰਬਰ:",
    place_address: "(ਅ) ਪਤਾ:",
    outside_jurisdiction: "(ੲ) ਪੁਲਿਸ ਸਟੇਸ਼ਨ ਖੇਤਰ ਤੋਂ ਬਾਹਰ:",
    complainant: "6. ਸ਼ਿਕਾਇਤਕਰਤਾ/ਸੂਚਨਾਕਰਤਾ:",
    name: "(ੳ) ਨਾਮ:",
    father_husband: "(ਅ) ਪਿਤਾ/ਪਤੀ ਦਾ ਨਾਮ:",
    birth: "(ੲ) ਜਨਮ ਮਿਤੀ/ਸਾਲ:",
    nationality: "(ਸ) ਰਾਸ਼ਟਰੀਅਤਾ:",
    passport: "(ਹ) ਪਾਸਪੋਰਟ ਵੇਰਵੇ:",
    occupation: "(ਕ) ਕਿੱਤਾ:",
    complainant_address: "(ਖ) ਪਤਾ:",
    accused: "7. ਦੋਸ਼ੀ ਦੇ ਵੇਰਵੇ:",
    delay: "8. ਰਿਪੋਰਟ ਵਿੱਚ ਦੇਰੀ ਦੇ ਕਾਰਨ:",
    properties: "9. ਚੋਰੀ/ਸ਼ਾਮਲ ਜਾਇਦਾਦ ਦੇ ਵੇਰਵੇ:",
    total_value: "10. ਜਾਇਦਾਦ ਦਾ ਕੁੱਲ ਮੁੱਲ:",
    inquest: "11. ਪੰਚਨਾਮਾ ਰਿਪੋਰਟ/ਯੂ.ਡੀ. ਕੇਸ ਨੰਬਰ:",
    contents: "12. ਐਫ.ਆਈ.ਆਰ. ਦੀ ਵਿਸ਼ਾ-ਵਸਤੂ:",
    action_taken: "13. ਕੀਤੀ ਗਈ ਕਾਰਵਾਈ:",
    action_text: "ਕਿਉਂਕਿ ਉਪਰੋਕਤ ਰਿਪੋਰਟ ਤੋਂ ਮੱਦ ਨੰਬਰ 2 ਵਿੱਚ ਦਰਜ ਧਾਰਾ ਤਹਿਤ ਅਪਰਾਧ ਦਾ ਪਤਾ ਲੱਗਦਾ ਹੈ",
    officer: "ਇੰਚਾਰਜ ਅਧਿਕਾਰੀ",
    officer_name: "ਨਾਮ:",
    rank: "ਅਹੁਦਾ:",
    officer_no: "ਨੰਬਰ:",
    signature: "14. ਸ਼ਿਕਾਇਤਕਰਤਾ ਦੇ ਹਸਤਾਖਰ",
    thumb: "ਹਸਤਾਖਰ/ਅੰਗੂਠੇ ਦਾ ਨਿਸ਼ਾਨ",
    dispatch: "15. ਅਦਾਲਤ ਵਿੱਚ ਭੇਜਣ ਦੀ ਮਿਤੀ ਅਤੇ ਸਮਾਂ:",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::StolenPropertyEntry;
    use chrono::Weekday;

    fn stamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 7)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap()
    }

    fn citations() -> LegalCitationSet {
        LegalCitationSet {
            act1: "Bharatiya Nyaya Sanhita".to_string(),
            sections1: "303".to_string(),
            act2: "Information Technology Act".to_string(),
            sections2: "66C".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_weekday_for_every_format_and_language() {
        let dates = [
            "2024-01-15",
            "15-01-2024",
            "01/15/2024",
            "15/01/2024",
            "15 January 2024",
            "15 Jan 2024",
            "January 15, 2024",
            "Jan 15, 2024",
        ];
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(expected.weekday(), Weekday::Mon);

        for date in dates {
            assert_eq!(parse_incident_date(date).unwrap(), expected, "{date}");
            for lang in Language::ALL {
                assert_eq!(
                    derive_weekday(date, lang).unwrap(),
                    lang.profile().weekday_names[0],
                    "{date} {lang}"
                );
            }
        }
        assert_eq!(derive_weekday("2024-01-21", Language::Punjabi).unwrap(), "ਐਤਵਾਰ");
        assert_eq!(derive_weekday(" 2024-01-17 ", Language::Hindi).unwrap(), "बुधवार");
    }

    #[test]
    fn test_unparseable_date() {
        assert_eq!(
            derive_weekday("last Tuesday", Language::English),
            Err(PipelineError::UnparseableDate("last Tuesday".to_string()))
        );
    }

    #[test]
    fn test_stolen_block_single_entry() {
        let stolen = StolenProperties::Items(vec![StolenPropertyEntry {
            item: "Gold chain".to_string(),
            details: None,
            estimated_value: Some("₹50,000".to_string()),
        }]);
        assert_eq!(
            format_stolen_properties(&stolen, Language::English),
            "1. Item: Gold chain\n   Estimated Value: ₹50,000"
        );
    }

    #[test]
    fn test_stolen_block_multiple_entries_localized() {
        let stolen = StolenProperties::Items(vec![
            StolenPropertyEntry {
                item: "फोन".to_string(),
                details: Some("काला".to_string()),
                estimated_value: None,
            },
            StolenPropertyEntry::new("पर्स"),
        ]);
        assert_eq!(
            format_stolen_properties(&stolen, Language::Hindi),
            "1. वस्तु: फोन\n   विवरण: काला\n\n2. वस्तु: पर्स"
        );
        let text = StolenProperties::from("a red bag");
        assert_eq!(format_stolen_properties(&text, Language::Hindi), "a red bag");
    }

    #[test]
    fn test_narrative_gets_witness_and_legal_block() {
        let record = CanonicalRecord {
            incident_narrative: "My phone was snatched.".to_string(),
            witness_details: "Shopkeeper Mohan".to_string(),
            ..Default::default()
        };
        assert_eq!(
            compose_narrative(&record, &citations(), Language::English),
            "My phone was snatched.\nWitness Details: Shopkeeper Mohan\n\nApplicable Legal Sections:\n1. Bharatiya Nyaya Sanhita - Section 303\n2. Information Technology Act - Section 66C"
        );
        assert_eq!(
            compose_narrative(&record, &citations(), Language::Punjabi),
            "My phone was snatched.\nਗਵਾਹ ਵੇਰਵੇ: Shopkeeper Mohan\n\nਲਾਗੂ ਕਾਨੂੰਨੀ ਧਾਰਾਵਾਂ:\n1. Bharatiya Nyaya Sanhita - ਧਾਰਾ 303\n2. Information Technology Act - ਧਾਰਾ 66C"
        );
    }

    #[test]
    fn test_narrative_already_citing_sections_untouched() {
        for narrative in [
            "Booked under Section 303.",
            "धारा 303 के तहत",
            "ਧਾਰਾ 303 ਤਹਿਤ",
        ] {
            let record = CanonicalRecord {
                incident_narrative: narrative.to_string(),
                ..Default::default()
            };
            assert_eq!(compose_narrative(&record, &citations(), Language::English), narrative);
        }
    }

    #[test]
    fn test_narrative_skips_incomplete_first_act_and_empty_text() {
        let record = CanonicalRecord {
            incident_narrative: "Bag stolen.".to_string(),
            witness_details: "Bag stolen.".to_string(),
            ..Default::default()
        };
        let legal = LegalCitationSet {
            act1: "Bharatiya Nyaya Sanhita".to_string(),
            ..Default::default()
        };
        assert_eq!(compose_narrative(&record, &legal, Language::English), "Bag stolen.");
        assert_eq!(
            compose_narrative(&CanonicalRecord::default(), &citations(), Language::English),
            ""
        );
    }

    #[test]
    fn test_render_english_form() {
        let record = CanonicalRecord {
            victim_name: "Ram Lal".to_string(),
            incident_date: "2024-01-15".to_string(),
            incident_location: "Sector 17 market".to_string(),
            incident_narrative: "My phone was snatched.".to_string(),
            ..Default::default()
        };
        let doc = render_at(&record, &citations(), Language::English, stamp());

        assert!(doc.starts_with("FORM – IF1 - (Integrated Form)\nFIRST INFORMATION REPORT\n(Under Section 154 Cr.P.C)\n"));
        assert!(doc.contains("1. Dist.: _______  P.S.: _______  Year: 2025  F.I.R. No.: AUTO-GENERATED  Date: 2025-03-07"));
        assert!(doc.contains("2.(i) Act: Bharatiya Nyaya Sanhita Sections: 303\n"));
        assert!(doc.contains("\n(iii) Act: Sections:\n"));
        assert!(doc.contains("   Day: Monday\n   Date: 2024-01-15\n   Time:\n"));
        assert!(doc.contains("(b) Information received at P.S.:\n   Date: 2025-03-07\n   Time: 14:05\n"));
        assert!(doc.contains("   (a) Name: Ram Lal\n"));
        assert!(doc.contains("   (b) Address: Sector 17 market\n"));
        assert!(doc.contains(
            "12. F.I.R. Contents:\nMy phone was snatched.\n\nApplicable Legal Sections:\n1. Bharatiya Nyaya Sanhita - Section 303"
        ));
        assert!(doc.ends_with("15. Date & Time of despatch to court:\n_______"));
        assert!(!doc.contains("N/A"));
    }

    #[test]
    fn test_render_keeps_supplied_day() {
        let record = CanonicalRecord {
            incident_date: "2024-01-15".to_string(),
            incident_day: "Holiday".to_string(),
            ..Default::default()
        };
        let doc = render_at(&record, &LegalCitationSet::default(), Language::English, stamp());
        assert!(doc.contains("   Day: Holiday\n"));
    }

    #[test]
    fn test_render_unparseable_date_leaves_day_blank() {
        let record = CanonicalRecord {
            incident_date: "yesterday evening".to_string(),
            ..Default::default()
        };
        let doc = render_at(&record, &LegalCitationSet::default(), Language::Hindi, stamp());
        assert!(doc.contains("   दिन:\n   दिनांक: yesterday evening\n"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let record = CanonicalRecord {
            victim_name: "ਗੁਰਪ੍ਰੀਤ ਸਿੰਘ".to_string(),
            incident_date: "15/01/2024".to_string(),
            incident_narrative: "ਮੇਰਾ ਫੋਨ ਚੋਰੀ ਹੋ ਗਿਆ।".to_string(),
            ..Default::default()
        };
        let first = render_at(&record, &citations(), Language::Punjabi, stamp());
        let second = render_at(&record, &citations(), Language::Punjabi, stamp());
        assert_eq!(first, second);
        assert!(first.contains("   ਦਿਨ: ਸੋਮਵਾਰ\n"));
        assert!(first.starts_with("ਫਾਰਮ – IF1 - (ਏਕੀਕ੍ਰਿਤ ਫਾਰਮ)"));
    }

    #[test]
    fn test_render_all_languages_number_items() {
        for lang in Language::ALL {
            let doc = render_at(&CanonicalRecord::default(), &LegalCitationSet::default(), lang, stamp());
            for n in 1..=15 {
                assert!(doc.contains(&format!("{}. ", n)), "{lang}: item {n}");
            }
        }
    }
}
