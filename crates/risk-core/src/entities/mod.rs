//! Record structs produced by the Riskline parsers.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so the JSON
//! handed to the UI/DB layer can be validated against a generated schema.
//! Field naming follows what that layer consumes: camelCase for risk and matrix
//! records, snake_case for controls and router decisions.

mod control;
mod intent;
mod matrix;
mod risk;

pub use control::{AnnexMapping, ControlRecord, DEFAULT_CONTROL_STATUS};
pub use intent::{
    ControlRoute, GenerationParameters, KnowledgeParameters, LibraryParameters, RiskIntent,
};
pub use matrix::{MatrixCategory, MatrixContext, MatrixRecommendation, RiskMatrix, ScaleLevel};
pub use risk::{DEFAULT_RISK_PROGRESS, RiskRecord};
