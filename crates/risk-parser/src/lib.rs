//! # risk-parser
//!
//! Heuristic extraction of structured records from LLM chat responses.
//!
//! - **Risks** ([`extract_risks`], [`RiskExtractor`]): three-tier fallback,
//!   structured JSON -> numbered risk sections -> keyword-qualified sentences.
//! - **Controls** ([`extract_controls`]): JSON array of ISO 27001 controls.
//! - **Matrices** ([`normalize_matrix`]): matrix recommendations snapped to a
//!   supported size with exactly-sized scales.
//! - **Intents** ([`parse_risk_intent`], [`sticky_risk_mode`],
//!   [`parse_control_intent`]): sub-router decisions with keyword fallbacks.
//!
//! Every extractor is a pure function of its input: no I/O, no shared
//! mutable state, safe to call from any number of threads.

pub mod error;
pub mod extractors;

pub use error::ParserError;
pub use extractors::controls::{extract_controls, try_extract_controls};
pub use extractors::intent::{
    DEFAULT_CLARIFYING_QUESTION, parse_control_intent, parse_risk_intent, sticky_risk_mode,
};
pub use extractors::matrix::{normalize_matrix, try_normalize_matrix};
pub use extractors::risks::{Extraction, ExtractionTier, RiskExtractor, extract_risks};
