//! Legal classification: maps an incident narrative to statute citations.
//!
//! Unlike extraction there is no fallback. A reply without a usable JSON
//! object is reported as an error carrying the raw reply, so citations are
//! never invented.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::PipelineError;
use crate::language::Language;
use crate::llm::LanguageModel;
use crate::prompts;
use crate::reply::decode_object;
use crate::schema::{CanonicalRecord, LegalCitationSet, LEGAL_KEYS};

/// Structured citations plus their display form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalClassification {
    pub citations: LegalCitationSet,
    pub formatted: String,
}

impl LegalClassification {
    pub fn new(citations: LegalCitationSet) -> Self {
        let formatted = citations.formatted();
        Self {
            citations,
            formatted,
        }
    }
}

pub struct Classifier<'a, M: ?Sized> {
    model: &'a M,
    section_summary: Option<&'a str>,
    legal_hints: Option<&'a Value>,
}

impl<'a, M: LanguageModel + ?Sized> Classifier<'a, M> {
    pub fn new(model: &'a M) -> Self {
        Self {
            model,
            section_summary: None,
            legal_hints: None,
        }
    }

    /// Statute reference text injected into the prompt.
    pub fn with_section_summary(mut self, summary: Option<&'a str>) -> Self {
        self.section_summary = summary;
        self
    }

    /// Previously extracted legal information offered to the model as a reference.
    pub fn with_legal_hints(mut self, hints: Option<&'a Value>) -> Self {
        self.legal_hints = hints;
        self
    }

    pub async fn classify(
        &self,
        narrative: &str,
        record: Option<&CanonicalRecord>,
        language: Language,
    ) -> Result<LegalClassification, PipelineError> {
        if narrative.trim().is_empty() {
            warn!("Legal classification requested for empty narrative");
            return Err(PipelineError::EmptyInput);
        }

        let description = match record {
            Some(record) => describe_incident(narrative, record, language),
            None => narrative.to_string(),
        };
        let prompt = prompts::classification(
            &description,
            self.section_summary,
            self.legal_hints,
            language,
        );

        debug!("Calling language model for legal classification");
        let reply = self
            .model
            .complete(&prompt.system, &prompt.user)
            .await
            .map_err(|e| PipelineError::CollaboratorUnavailable(format!("{:#}", e)))?;

        let object = decode_object(&reply)?;
        let missing: Vec<&str> = LEGAL_KEYS
            .iter()
            .copied()
            .filter(|key| !object.contains_key(*key))
            .collect();
        if !missing.is_empty() {
            debug!("Classification reply missing keys {:?}, defaulting to empty", missing);
        }

        let classification = LegalClassification::new(LegalCitationSet::from_reply_object(&object));
        info!(
            "Legal classification produced {} citation(s)",
            classification.citations.complete_pairs().count()
        );
        Ok(classification)
    }
}

/// Prefix the narrative with a localized "key details" preamble built from
/// the record's victim, location, accused, stolen items and value.
pub fn describe_incident(narrative: &str, record: &CanonicalRecord, language: Language) -> String {
    let labels = &language.profile().labels;
    let stolen = record.stolen_properties.inline();
    let details: Vec<String> = [
        (labels.victim, record.victim_name.as_str()),
        (labels.location, record.incident_location.as_str()),
        (labels.accused, record.accused_description.as_str()),
        (labels.stolen_items, stolen.as_str()),
        (labels.value, record.total_value.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| !value.trim().is_empty())
    .map(|(label, value)| format!("{}: {}", label, value))
    .collect();

    if details.is_empty() {
        return narrative.to_string();
    }
    format!(
        "{}\n{}\n\n{}\n{}",
        labels.key_details,
        details.join("\n"),
        labels.full_description,
        narrative
    )
}
