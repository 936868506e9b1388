//! Pipeline configuration.
//!
//! Loaded from an optional JSON file; every field has a default so a partial
//! file (or none at all) is valid.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::PipelineError;
use crate::llm::{DEFAULT_API_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Chat completion model identifier.
    pub model: String,
    /// OpenAI-compatible chat completions endpoint.
    pub api_url: String,
    pub max_tokens: u32,
    /// Statute summary text injected into classifier prompts.
    pub section_summary_path: Option<PathBuf>,
    /// Previously extracted legal information offered to the classifier.
    pub legal_hints: Option<Value>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            section_summary_path: None,
            legal_hints: None,
        }
    }
}

impl PipelineConfig {
    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {:?}", path))?;
        let config = Self::from_json(&content)
            .with_context(|| format!("Failed to parse config: {:?}", path))?;
        info!("Loaded pipeline config from {:?} (model={})", path, config.model);
        Ok(config)
    }

    /// Load `path` if given, otherwise use the defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.model.trim().is_empty() {
            return Err(PipelineError::Config("model must not be empty".to_string()));
        }
        if self.api_url.trim().is_empty() {
            return Err(PipelineError::Config("api_url must not be empty".to_string()));
        }
        if self.max_tokens == 0 {
            return Err(PipelineError::Config("max_tokens must be positive".to_string()));
        }
        Ok(())
    }

    /// Read the section summary. A missing or unreadable file degrades to `None`.
    pub fn load_section_summary(&self) -> Option<String> {
        let path = self.section_summary_path.as_ref()?;
        match std::fs::read_to_string(path) {
            Ok(summary) => {
                info!("Loaded section summary ({} chars) from {:?}", summary.len(), path);
                Some(summary)
            }
            Err(e) => {
                warn!("Could not read section summary {:?}: {}", path, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = PipelineConfig::from_json(r#"{"model": "gpt-4o", "legal_hints": {"act": "BNS"}}"#)
            .unwrap();
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.max_tokens, 4096);
        assert_eq!(config.legal_hints, Some(serde_json::json!({"act": "BNS"})));
        assert!(config.section_summary_path.is_none());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = PipelineConfig::from_json(r#"{"max_tokens": 0}"#).unwrap_err();
        assert_eq!(
            err.downcast_ref::<PipelineError>(),
            Some(&PipelineError::Config("max_tokens must be positive".to_string()))
        );
        assert!(PipelineConfig::from_json(r#"{"model": " "}"#).is_err());
        assert!(PipelineConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_missing_summary_degrades_to_none() {
        let config = PipelineConfig {
            section_summary_path: Some(PathBuf::from("/nonexistent/section_summary.txt")),
            ..Default::default()
        };
        assert_eq!(config.load_section_summary(), None);
        assert_eq!(PipelineConfig::default().load_section_summary(), None);
    }

    #[test]
    fn test_summary_and_config_files_are_read() {
        let dir = std::env::temp_dir().join(format!("fir-drafter-{}", uuid::Uuid::new_v4().simple()));
        std::fs::create_dir_all(&dir).unwrap();
        let summary = dir.join("section_summary.txt");
        std::fs::write(&summary, "BNS 303: Theft.").unwrap();
        let config_path = dir.join("config.json");
        std::fs::write(
            &config_path,
            serde_json::json!({"section_summary_path": summary}).to_string(),
        )
        .unwrap();

        let config = PipelineConfig::load_optional(Some(&config_path)).unwrap();
        assert_eq!(config.load_section_summary().as_deref(), Some("BNS 303: Theft."));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
