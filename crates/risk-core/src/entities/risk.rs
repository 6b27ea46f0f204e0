use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Progress state assigned to freshly extracted risks.
pub const DEFAULT_RISK_PROGRESS: &str = "Identified";

/// A normalized risk entry extracted from LLM output.
///
/// `id` is synthesized per extraction call (`risk-1`, `risk-2`, ...) and has
/// no meaning outside that call's result.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RiskRecord {
    pub id: String,
    pub description: String,
    pub category: String,
    pub likelihood: String,
    pub impact: String,
    pub treatment_strategy: String,
    pub is_selected: bool,
    #[serde(default)]
    pub asset_value: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub risk_owner: String,
    #[serde(default)]
    pub security_impact: String,
    #[serde(default)]
    pub target_date: String,
    #[serde(default = "default_risk_progress")]
    pub risk_progress: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residual_exposure: Option<String>,
}

fn default_risk_progress() -> String {
    DEFAULT_RISK_PROGRESS.to_string()
}

impl RiskRecord {
    /// Build a selected record with the register fields at their defaults.
    #[must_use]
    pub fn new(
        id: String,
        description: String,
        category: String,
        likelihood: String,
        impact: String,
        treatment_strategy: String,
    ) -> Self {
        Self {
            id,
            description,
            category,
            likelihood,
            impact,
            treatment_strategy,
            is_selected: true,
            asset_value: String::new(),
            department: String::new(),
            risk_owner: String::new(),
            security_impact: String::new(),
            target_date: String::new(),
            risk_progress: default_risk_progress(),
            residual_exposure: None,
        }
    }
}
