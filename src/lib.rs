//! FIR Drafter - turns complaint interviews into structured First Information Reports.

pub mod classifier;
pub mod config;
pub mod error;
pub mod extractor;
pub mod heuristics;
pub mod language;
pub mod llm;
pub mod pipeline;
pub mod prompts;
pub mod render;
pub mod reply;
pub mod schema;
pub mod segmenter;

pub use classifier::{Classifier, LegalClassification};
pub use config::PipelineConfig;
pub use error::PipelineError;
pub use extractor::{ExtractionOutcome, ExtractionSource, Extractor};
pub use heuristics::extract_fallback;
pub use language::Language;
pub use llm::{ChatCompletionClient, LanguageModel};
pub use pipeline::{LegalOutcome, Pipeline, ReportDraft};
pub use render::render;
pub use schema::{CanonicalRecord, LegalCitationSet, StolenProperties, StolenPropertyEntry};
pub use segmenter::{segment, QaPair};
