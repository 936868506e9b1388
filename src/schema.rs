//! Incident record and legal citation types shared by every pipeline stage.
//!
//! Every field of [`CanonicalRecord`] is always present. Missing information is
//! an empty string, never an absent key, so rendering cannot fail on a lookup.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The structured representation of one incident report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanonicalRecord {
    pub victim_name: String,
    pub father_or_husband_name: String,
    #[serde(rename = "dob", alias = "date_of_birth")]
    pub date_of_birth: String,
    pub nationality: String,
    pub occupation: String,
    pub address: String,
    pub incident_date: String,
    pub incident_time: String,
    /// Derived from `incident_date` at render time when left empty.
    pub incident_day: String,
    pub incident_location: String,
    pub accused_description: String,
    pub stolen_properties: StolenProperties,
    pub total_value: String,
    pub delay_reason: String,
    pub witness_details: String,
    #[serde(rename = "incident_details", alias = "incident_narrative")]
    pub incident_narrative: String,
    /// Station-side form slots. Never filled by extraction.
    pub form: FormDetails,
}

/// Text-valued record fields, keyed by the names used with the language model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    VictimName,
    FatherOrHusbandName,
    DateOfBirth,
    Nationality,
    Occupation,
    Address,
    IncidentDate,
    IncidentTime,
    IncidentDay,
    IncidentLocation,
    WitnessDetails,
    AccusedDescription,
    TotalValue,
    DelayReason,
    IncidentNarrative,
}

impl Field {
    /// Every text field, in the order they are requested from the language model.
    /// `stolen_properties` is handled separately since it may be a list.
    pub const REQUESTED: [Field; 14] = [
        Field::VictimName,
        Field::FatherOrHusbandName,
        Field::DateOfBirth,
        Field::Nationality,
        Field::Occupation,
        Field::Address,
        Field::IncidentDate,
        Field::IncidentTime,
        Field::IncidentLocation,
        Field::WitnessDetails,
        Field::AccusedDescription,
        Field::TotalValue,
        Field::DelayReason,
        Field::IncidentNarrative,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::VictimName => "victim_name",
            Self::FatherOrHusbandName => "father_or_husband_name",
            Self::DateOfBirth => "dob",
            Self::Nationality => "nationality",
            Self::Occupation => "occupation",
            Self::Address => "address",
            Self::IncidentDate => "incident_date",
            Self::IncidentTime => "incident_time",
            Self::IncidentDay => "incident_day",
            Self::IncidentLocation => "incident_location",
            Self::WitnessDetails => "witness_details",
            Self::AccusedDescription => "accused_description",
            Self::TotalValue => "total_value",
            Self::DelayReason => "delay_reason",
            Self::IncidentNarrative => "incident_details",
        }
    }
}

/// Wire key for the stolen property field.
pub const STOLEN_PROPERTIES_KEY: &str = "stolen_properties";

impl CanonicalRecord {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::VictimName => &self.victim_name,
            Field::FatherOrHusbandName => &self.father_or_husband_name,
            Field::DateOfBirth => &self.date_of_birth,
            Field::Nationality => &self.nationality,
            Field::Occupation => &self.occupation,
            Field::Address => &self.address,
            Field::IncidentDate => &self.incident_date,
            Field::IncidentTime => &self.incident_time,
            Field::IncidentDay => &self.incident_day,
            Field::IncidentLocation => &self.incident_location,
            Field::WitnessDetails => &self.witness_details,
            Field::AccusedDescription => &self.accused_description,
            Field::TotalValue => &self.total_value,
            Field::DelayReason => &self.delay_reason,
            Field::IncidentNarrative => &self.incident_narrative,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::VictimName => &mut self.victim_name,
            Field::FatherOrHusbandName => &mut self.father_or_husband_name,
            Field::DateOfBirth => &mut self.date_of_birth,
            Field::Nationality => &mut self.nationality,
            Field::Occupation => &mut self.occupation,
            Field::Address => &mut self.address,
            Field::IncidentDate => &mut self.incident_date,
            Field::IncidentTime => &mut self.incident_time,
            Field::IncidentDay => &mut self.incident_day,
            Field::IncidentLocation => &mut self.incident_location,
            Field::WitnessDetails => &mut self.witness_details,
            Field::AccusedDescription => &mut self.accused_description,
            Field::TotalValue => &mut self.total_value,
            Field::DelayReason => &mut self.delay_reason,
            Field::IncidentNarrative => &mut self.incident_narrative,
        };
        *slot = value.into();
    }

    /// Build a record from a decoded reply object. Missing keys stay empty.
    pub fn from_reply_object(object: &serde_json::Map<String, Value>) -> Self {
        let mut record = Self::default();
        for field in Field::REQUESTED.iter().chain(std::iter::once(&Field::IncidentDay)) {
            if let Some(value) = object.get(field.key()) {
                record.set(*field, value_to_text(value));
            }
        }
        if let Some(value) = object.get(STOLEN_PROPERTIES_KEY) {
            record.stolen_properties = StolenProperties::from_value(value);
        }
        record
    }

    /// True when no extracted field carries any text.
    pub fn is_blank(&self) -> bool {
        Field::REQUESTED
            .iter()
            .all(|f| self.get(*f).trim().is_empty())
            && self.incident_day.trim().is_empty()
            && self.stolen_properties.is_empty()
    }
}

/// Coerce a loosely-typed reply value into field text.
///
/// `null` becomes empty, scalars their textual form, anything else its JSON.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Stolen property as reported: either free text or an ordered list of entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StolenProperties {
    Text(String),
    Items(Vec<StolenPropertyEntry>),
}

impl Default for StolenProperties {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl StolenProperties {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(items) => Self::Items(
                items
                    .iter()
                    .filter_map(StolenPropertyEntry::from_value)
                    .collect(),
            ),
            other => Self::Text(value_to_text(other)),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Items(items) => items.is_empty(),
        }
    }

    /// Single-line form used inside prompts.
    pub fn inline(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Items(items) => items
                .iter()
                .map(|entry| {
                    let extras: Vec<&str> = [&entry.details, &entry.estimated_value]
                        .into_iter()
                        .flatten()
                        .map(String::as_str)
                        .filter(|s| !s.is_empty())
                        .collect();
                    if extras.is_empty() {
                        entry.item.clone()
                    } else {
                        format!("{} ({})", entry.item, extras.join(", "))
                    }
                })
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

impl From<&str> for StolenProperties {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One stolen or involved item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StolenPropertyEntry {
    pub item: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_value: Option<String>,
}

impl StolenPropertyEntry {
    pub fn new(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            details: None,
            estimated_value: None,
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(obj) => Some(Self {
                item: obj.get("item").map(value_to_text).unwrap_or_default(),
                details: obj
                    .get("details")
                    .filter(|v| !v.is_null())
                    .map(value_to_text),
                estimated_value: obj
                    .get("estimated_value")
                    .filter(|v| !v.is_null())
                    .map(value_to_text),
            }),
            Value::Null => None,
            other => Some(Self::new(value_to_text(other))),
        }
    }
}

/// Station-side slots of the printed form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDetails {
    pub passport_details: String,
    pub distance_from_station: String,
    pub beat_no: String,
    pub outside_jurisdiction: String,
    pub inquest_report: String,
    pub other_acts: String,
}

/// Up to three (act, sections) pairs plus the rationale given for them.
///
/// Partially filled pairs are kept here but left out of [`Self::formatted`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegalCitationSet {
    pub act1: String,
    pub sections1: String,
    pub act2: String,
    pub sections2: String,
    pub act3: String,
    pub sections3: String,
    pub description: String,
}

/// Reply keys the classifier requires, in order.
pub const LEGAL_KEYS: [&str; 7] = [
    "act1",
    "sections1",
    "act2",
    "sections2",
    "act3",
    "sections3",
    "description",
];

impl LegalCitationSet {
    pub fn from_reply_object(object: &serde_json::Map<String, Value>) -> Self {
        let text = |key: &str| object.get(key).map(value_to_text).unwrap_or_default();
        Self {
            act1: text("act1"),
            sections1: text("sections1"),
            act2: text("act2"),
            sections2: text("sections2"),
            act3: text("act3"),
            sections3: text("sections3"),
            description: text("description"),
        }
    }

    pub fn pairs(&self) -> [(&str, &str); 3] {
        [
            (&self.act1, &self.sections1),
            (&self.act2, &self.sections2),
            (&self.act3, &self.sections3),
        ]
    }

    /// Pairs where both the act and its sections are present, in order.
    pub fn complete_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs()
            .into_iter()
            .filter(|(act, sections)| !act.is_empty() && !sections.is_empty())
    }

    /// Human-readable citation list: one `"<act> - Section <sections>"` line per
    /// complete pair, then a blank line and the description when present.
    pub fn formatted(&self) -> String {
        let mut lines: Vec<String> = self
            .complete_pairs()
            .map(|(act, sections)| format!("{} - Section {}", act, sections))
            .collect();

        if !self.description.is_empty() {
            if lines.is_empty() {
                lines.push(format!("Description: {}", self.description));
            } else {
                lines.push(format!("\nDescription: {}", self.description));
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_record_serializes_every_key() {
        let value = serde_json::to_value(CanonicalRecord::default()).unwrap();
        let obj = value.as_object().unwrap();
        for field in Field::REQUESTED {
            assert_eq!(obj.get(field.key()), Some(&json!("")), "{}", field.key());
        }
        assert_eq!(obj.get("incident_day"), Some(&json!("")));
        assert_eq!(obj.get(STOLEN_PROPERTIES_KEY), Some(&json!("")));
    }

    #[test]
    fn test_from_reply_object_coerces_values() {
        let reply = json!({
            "victim_name": " Ram Lal ",
            "dob": null,
            "total_value": 50000,
            "stolen_properties": [
                {"item": "Gold chain", "estimated_value": "₹50,000"},
                "Phone"
            ]
        });
        let record = CanonicalRecord::from_reply_object(reply.as_object().unwrap());

        assert_eq!(record.victim_name, "Ram Lal");
        assert_eq!(record.date_of_birth, "");
        assert_eq!(record.total_value, "50000");
        assert_eq!(record.address, "");
        assert_eq!(
            record.stolen_properties,
            StolenProperties::Items(vec![
                StolenPropertyEntry {
                    item: "Gold chain".to_string(),
                    details: None,
                    estimated_value: Some("₹50,000".to_string()),
                },
                StolenPropertyEntry::new("Phone"),
            ])
        );
    }

    #[test]
    fn test_record_deserializes_both_stolen_shapes() {
        let record: CanonicalRecord =
            serde_json::from_str(r#"{"stolen_properties": "a bag"}"#).unwrap();
        assert_eq!(record.stolen_properties, StolenProperties::from("a bag"));

        let record: CanonicalRecord =
            serde_json::from_str(r#"{"stolen_properties": [{"item": "Watch"}]}"#).unwrap();
        assert_eq!(
            record.stolen_properties,
            StolenProperties::Items(vec![StolenPropertyEntry::new("Watch")])
        );
    }

    #[test]
    fn test_formatted_skips_partial_pairs() {
        let legal = LegalCitationSet {
            act1: "Bharatiya Nyaya Sanhita".to_string(),
            sections1: "319, 324".to_string(),
            ..Default::default()
        };
        assert_eq!(legal.formatted(), "Bharatiya Nyaya Sanhita - Section 319, 324");

        let legal = LegalCitationSet {
            act1: "Bharatiya Nyaya Sanhita".to_string(),
            sections1: "303".to_string(),
            act2: "Information Technology Act".to_string(),
            act3: "Arms Act".to_string(),
            sections3: "25".to_string(),
            description: "Theft of a phone.".to_string(),
            ..Default::default()
        };
        assert_eq!(
            legal.formatted(),
            "Bharatiya Nyaya Sanhita - Section 303\nArms Act - Section 25\n\nDescription: Theft of a phone."
        );
        // the partial pair survives in the structured form
        assert_eq!(legal.act2, "Information Technology Act");

        let legal = LegalCitationSet {
            act2: "Arms Act".to_string(),
            description: "No complete citation.".to_string(),
            ..Default::default()
        };
        assert_eq!(legal.formatted(), "Description: No complete citation.");
    }

    #[test]
    fn test_is_blank() {
        assert!(CanonicalRecord::default().is_blank());
        let record = CanonicalRecord {
            incident_day: "Monday".to_string(),
            ..Default::default()
        };
        assert!(!record.is_blank());
        let record = CanonicalRecord {
            stolen_properties: StolenProperties::from("a bag"),
            ..Default::default()
        };
        assert!(!record.is_blank());
    }

    #[test]
    fn test_inline_stolen_properties() {
        let stolen = StolenProperties::Items(vec![
            StolenPropertyEntry {
                item: "Gold chain".to_string(),
                details: Some("22 carat".to_string()),
                estimated_value: Some("₹50,000".to_string()),
            },
            StolenPropertyEntry::new("Wallet"),
        ]);
        assert_eq!(stolen.inline(), "Gold chain (22 carat, ₹50,000), Wallet");
    }
}
