//! End-to-end report drafting: extraction, legal classification, rendering.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::classifier::{Classifier, LegalClassification};
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::extractor::{ExtractionOutcome, ExtractionSource, Extractor};
use crate::language::Language;
use crate::llm::LanguageModel;
use crate::render::{render, render_at};
use crate::schema::{CanonicalRecord, LegalCitationSet};

/// Outcome of the legal classification stage as reported to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LegalOutcome {
    Classified(LegalClassification),
    /// The document was rendered without citations.
    Failed {
        kind: String,
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        raw_reply: Option<String>,
    },
}

impl LegalOutcome {
    fn failed(err: &PipelineError) -> Self {
        Self::Failed {
            kind: err.status().to_string(),
            error: err.to_string(),
            raw_reply: err.raw_reply().map(str::to_string),
        }
    }
}

/// A drafted report with everything that went into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDraft {
    pub id: String,
    /// SHA-256 of the input transcript.
    pub content_hash: String,
    pub language: Language,
    pub generated_at: DateTime<Utc>,
    pub drafter_version: String,
    pub source: ExtractionSource,
    pub record: CanonicalRecord,
    pub legal: LegalOutcome,
    pub document: String,
}

pub struct Pipeline<M> {
    model: M,
    section_summary: Option<String>,
    legal_hints: Option<Value>,
}

impl<M: LanguageModel> Pipeline<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            section_summary: None,
            legal_hints: None,
        }
    }

    /// Build a pipeline with the section summary and legal hints from `config`.
    pub fn from_config(model: M, config: &PipelineConfig) -> Self {
        Self::new(model)
            .with_section_summary(config.load_section_summary())
            .with_legal_hints(config.legal_hints.clone())
    }

    pub fn with_section_summary(mut self, summary: Option<String>) -> Self {
        self.section_summary = summary;
        self
    }

    pub fn with_legal_hints(mut self, hints: Option<Value>) -> Self {
        self.legal_hints = hints;
        self
    }

    /// Extract a record, reporting which path produced it.
    pub async fn extract(&self, text: &str, language: Language) -> ExtractionOutcome {
        Extractor::new(&self.model).extract(text, language).await
    }

    /// Extract a complete record from a transcript or free text. Never fails.
    pub async fn extract_record(&self, text: &str, language: Language) -> CanonicalRecord {
        self.extract(text, language).await.into_record()
    }

    pub async fn classify(
        &self,
        narrative: &str,
        record: Option<&CanonicalRecord>,
        language: Language,
    ) -> Result<LegalClassification, PipelineError> {
        Classifier::new(&self.model)
            .with_section_summary(self.section_summary.as_deref())
            .with_legal_hints(self.legal_hints.as_ref())
            .classify(narrative, record, language)
            .await
    }

    /// Render a (possibly edited) record into the report document.
    pub fn build_document(
        &self,
        record: &CanonicalRecord,
        legal: &LegalCitationSet,
        language: Language,
    ) -> String {
        render(record, legal, language)
    }

    /// Run the whole pipeline over one transcript.
    pub async fn process(
        &self,
        transcript: &str,
        language: Language,
    ) -> Result<ReportDraft, PipelineError> {
        let transcript = transcript.trim();
        if transcript.is_empty() {
            return Err(PipelineError::EmptyInput);
        }
        info!("Drafting report ({}, {} chars)", language, transcript.len());

        let outcome = self.extract(transcript, language).await;
        let source = outcome.source();
        let mut record = outcome.into_record();
        if record.is_blank() {
            warn!("No report fields recognised ({:?} extraction)", source);
        }
        if record.incident_narrative.trim().is_empty() {
            record.incident_narrative = transcript.to_string();
        }

        let (citations, legal) = match self.classify(transcript, Some(&record), language).await {
            Ok(classification) => (
                classification.citations.clone(),
                LegalOutcome::Classified(classification),
            ),
            Err(err) => {
                error!("Legal classification failed: {}", err);
                (LegalCitationSet::default(), LegalOutcome::failed(&err))
            }
        };

        let now = Local::now();
        let document = render_at(&record, &citations, language, now.naive_local());

        let draft = ReportDraft {
            id: format!("fir_{}", Uuid::new_v4().simple()),
            content_hash: content_hash(transcript),
            language,
            generated_at: now.with_timezone(&Utc),
            drafter_version: env!("CARGO_PKG_VERSION").to_string(),
            source,
            record,
            legal,
            document,
        };
        info!("Drafted report {} (source={:?})", draft.id, draft.source);
        Ok(draft)
    }
}

fn content_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}
