//! Cross-cutting error types for Riskline.
//!
//! Domain-specific errors (`ParserError`, `ConfigError`) live in their
//! respective crates. The CLI converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Riskline crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A value could not be parsed into one of the core enums.
    #[error("Unknown {kind}: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let unknown = "7x7".parse::<crate::enums::MatrixSize>().unwrap_err();
        assert!(matches!(unknown, CoreError::UnknownVariant { kind: "matrix size", .. }));
        assert_eq!(unknown.to_string(), "Unknown matrix size: '7x7'");
        assert_eq!(
            CoreError::Validation("empty likelihood ladder".into()).to_string(),
            "Validation error: empty likelihood ladder"
        );
    }
}
