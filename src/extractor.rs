//! Delegate-backed record extraction with the heuristic extractor as fallback.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::PipelineError;
use crate::heuristics::extract_fallback;
use crate::language::Language;
use crate::llm::LanguageModel;
use crate::prompts::{self, Prompt};
use crate::reply::decode_object;
use crate::schema::CanonicalRecord;
use crate::segmenter::{format_pairs, segment};

/// Which path produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionSource {
    Delegated,
    Heuristic,
}

/// Result of one extraction attempt. Both variants carry a complete record.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionOutcome {
    Delegated(CanonicalRecord),
    /// The delegate was unusable; `reason` says why.
    Heuristic {
        record: CanonicalRecord,
        reason: PipelineError,
    },
}

impl ExtractionOutcome {
    pub fn source(&self) -> ExtractionSource {
        match self {
            Self::Delegated(_) => ExtractionSource::Delegated,
            Self::Heuristic { .. } => ExtractionSource::Heuristic,
        }
    }

    pub fn record(&self) -> &CanonicalRecord {
        match self {
            Self::Delegated(record) | Self::Heuristic { record, .. } => record,
        }
    }

    pub fn into_record(self) -> CanonicalRecord {
        match self {
            Self::Delegated(record) | Self::Heuristic { record, .. } => record,
        }
    }
}

/// Extracts a [`CanonicalRecord`] through a language model.
pub struct Extractor<'a, M: ?Sized> {
    model: &'a M,
}

impl<'a, M: LanguageModel + ?Sized> Extractor<'a, M> {
    pub fn new(model: &'a M) -> Self {
        Self { model }
    }

    /// Extract a record from a transcript or free text. Never fails: any
    /// delegate problem falls back to [`extract_fallback`] on the same text.
    pub async fn extract(&self, text: &str, language: Language) -> ExtractionOutcome {
        let pairs = segment(text, language);
        let prompt = if pairs.is_empty() {
            prompts::free_text(text, language)
        } else {
            prompts::interview(&format_pairs(&pairs), language)
        };

        match self.delegate(&prompt).await {
            Ok(record) => {
                info!("Delegate extraction succeeded ({})", language);
                ExtractionOutcome::Delegated(record)
            }
            Err(reason) => {
                warn!("Falling back to heuristic extraction: {}", reason);
                ExtractionOutcome::Heuristic {
                    record: extract_fallback(text, language),
                    reason,
                }
            }
        }
    }

    async fn delegate(&self, prompt: &Prompt) -> Result<CanonicalRecord, PipelineError> {
        debug!("Calling language model for record extraction");
        let reply = self
            .model
            .complete(&prompt.system, &prompt.user)
            .await
            .map_err(|e| PipelineError::CollaboratorUnavailable(format!("{:#}", e)))?;
        debug!("Raw extraction reply length: {} chars", reply.len());

        let object = decode_object(&reply)?;
        Ok(CanonicalRecord::from_reply_object(&object))
    }
}
