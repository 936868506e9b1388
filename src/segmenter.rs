//! Splits an interview transcript into question/answer pairs.
//!
//! Lines are scanned in order against the language's question and answer
//! prefixes. Text before the first question, and a trailing question that never
//! received an answer, are dropped.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::language::Language;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

impl QaPair {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Segment a raw transcript into ordered Q&A pairs.
pub fn segment(transcript: &str, language: Language) -> Vec<QaPair> {
    let profile = language.profile();
    let mut pairs = Vec::new();
    let mut question = String::new();
    let mut answer = String::new();

    for line in transcript.trim().lines() {
        if let Some(rest) = strip_any_prefix(line, profile.question_prefixes) {
            flush(&mut pairs, &question, &answer);
            question = rest.trim().to_string();
            answer.clear();
        } else if let Some(rest) = strip_any_prefix(line, profile.answer_prefixes) {
            answer = rest.trim().to_string();
        } else if !answer.is_empty() {
            answer.push(' ');
            answer.push_str(line.trim());
        }
    }
    flush(&mut pairs, &question, &answer);

    debug!("Segmented transcript into {} Q&A pairs ({})", pairs.len(), language);
    pairs
}

/// Render pairs as the `Question:/Answer:` block sent to the language model.
pub fn format_pairs(pairs: &[QaPair]) -> String {
    pairs
        .iter()
        .map(|p| format!("Question: {}\nAnswer: {}\n\n", p.question, p.answer))
        .collect()
}

fn strip_any_prefix<'a>(line: &'a str, prefixes: &[&str]) -> Option<&'a str> {
    prefixes.iter().find_map(|prefix| line.strip_prefix(prefix))
}

fn flush(pairs: &mut Vec<QaPair>, question: &str, answer: &str) {
    let (question, answer) = (question.trim(), answer.trim());
    if !question.is_empty() && !answer.is_empty() {
        pairs.push(QaPair::new(question, answer));
    }
}
