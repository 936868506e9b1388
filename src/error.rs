//! Error types shared by the extraction, classification and rendering stages.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// Transport, auth or quota failure while calling the language model.
    #[error("Language model unavailable: {0}")]
    CollaboratorUnavailable(String),

    /// The reply contained no JSON object, or the object failed to decode.
    #[error("Malformed language model reply: {reason}")]
    MalformedDelegateResponse { reason: String, raw_reply: String },

    #[error("Empty text provided")]
    EmptyInput,

    /// Never surfaced to callers; rendering swallows it.
    #[error("Unparseable date: {0}")]
    UnparseableDate(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PipelineError {
    /// Raw collaborator reply attached to the error, if any.
    pub fn raw_reply(&self) -> Option<&str> {
        match self {
            Self::MalformedDelegateResponse { raw_reply, .. } => Some(raw_reply),
            _ => None,
        }
    }

    /// Short machine-readable status, mirrored in serialized failure reports.
    pub fn status(&self) -> &'static str {
        match self {
            Self::CollaboratorUnavailable(_) => "api_error",
            Self::MalformedDelegateResponse { .. } => "format_error",
            Self::EmptyInput => "empty_input",
            Self::UnparseableDate(_) => "date_error",
            Self::Config(_) => "config_error",
        }
    }
}
