//! Parser error types for risk-parser.

/// Errors that can occur while pulling structured data out of LLM text.
///
/// The public extractors are total and degrade to fallbacks; these errors
/// surface from [`crate::RiskExtractor::new`] and are logged by the
/// supplementary parsers before they fall back.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("No JSON {expected} found in response")]
    NoJsonFound { expected: &'static str },

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Unexpected JSON shape: {0}")]
    UnexpectedShape(String),

    #[error("Invalid vocabulary: {0}")]
    InvalidVocabulary(String),
}
