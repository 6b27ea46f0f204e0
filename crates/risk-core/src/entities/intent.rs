use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{GenerationMode, RiskMode};

/// Decision of the risk sub-router.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RiskIntent {
    pub mode: RiskMode,
    #[serde(default)]
    pub rationale: String,
    pub confidence: f64,
    /// `true` when the mode was kept from the previous turn without classification.
    #[serde(default)]
    pub sticky: bool,
}

/// Parameters for routing into control generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GenerationParameters {
    pub mode: GenerationMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_description: Option<String>,
}

/// Parameters for searching the saved control library.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LibraryParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annex_reference: Option<String>,
    /// Remaining classifier parameters, passed through untouched.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub filters: BTreeMap<String, serde_json::Value>,
}

/// Parameters for educational control questions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct KnowledgeParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_type: Option<String>,
    #[serde(default)]
    pub has_context: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub filters: BTreeMap<String, serde_json::Value>,
}

/// Decision of the control sub-router.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum ControlRoute {
    GenerateControl(GenerationParameters),
    ControlLibrary(LibraryParameters),
    ControlKnowledge(KnowledgeParameters),
    Clarify { question: String },
}
