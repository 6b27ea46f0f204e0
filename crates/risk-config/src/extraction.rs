//! Extraction limits.
//!
//! These mirror [`risk_core::vocabulary::ExtractionLimits`] but live in their
//! own `[extraction]` section so operators can tune the caps without touching
//! the keyword tables.

use risk_core::vocabulary::ExtractionLimits;
use serde::{Deserialize, Serialize};

const fn default_min_description_chars() -> usize {
    10
}

const fn default_min_sentence_chars() -> usize {
    20
}

const fn default_max_sentence_records() -> usize {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractionConfig {
    /// Records with a shorter description (in chars) are discarded.
    #[serde(default = "default_min_description_chars")]
    pub min_description_chars: usize,

    /// Sentences shorter than this are ignored by the keyword-sentence tier.
    #[serde(default = "default_min_sentence_chars")]
    pub min_sentence_chars: usize,

    /// Maximum records produced by the keyword-sentence tier.
    #[serde(default = "default_max_sentence_records")]
    pub max_sentence_records: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_description_chars: default_min_description_chars(),
            min_sentence_chars: default_min_sentence_chars(),
            max_sentence_records: default_max_sentence_records(),
        }
    }
}

impl ExtractionConfig {
    #[must_use]
    pub const fn limits(&self) -> ExtractionLimits {
        ExtractionLimits {
            min_description_chars: self.min_description_chars,
            min_sentence_chars: self.min_sentence_chars,
            max_sentence_records: self.max_sentence_records,
        }
    }
}
