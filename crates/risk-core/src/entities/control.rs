use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Status given to newly generated controls.
pub const DEFAULT_CONTROL_STATUS: &str = "Planned";

/// A reference into ISO 27001:2022 Annex A.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnnexMapping {
    pub id: String,
    #[serde(default)]
    pub title: String,
}

/// An ISO 27001-style control generated for one or more risks.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ControlRecord {
    pub control_id: String,
    pub control_title: String,
    #[serde(default)]
    pub control_description: String,
    #[serde(default)]
    pub objective: String,
    #[serde(rename = "annexA_map", default)]
    pub annex_a_map: Vec<AnnexMapping>,
    #[serde(default)]
    pub linked_risk_ids: Vec<String>,
    #[serde(default)]
    pub owner_role: String,
    #[serde(default)]
    pub process_steps: Vec<String>,
    #[serde(default)]
    pub evidence_samples: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<String>,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub policy_ref: String,
    pub status: String,
    #[serde(default)]
    pub rationale: String,
    #[serde(default)]
    pub assumptions: String,
}
