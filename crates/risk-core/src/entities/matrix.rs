use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::MatrixSize;

/// One step of a likelihood or impact scale.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScaleLevel {
    /// 1-based position within the scale.
    pub level: u32,
    pub title: String,
    pub description: String,
}

/// A risk category with its own likelihood and impact scales.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatrixCategory {
    pub risk_type: String,
    pub definition: String,
    pub likelihood_scale: Vec<ScaleLevel>,
    pub impact_scale: Vec<ScaleLevel>,
    pub matrix_size: MatrixSize,
}

/// Organization context a matrix was built for.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MatrixContext {
    pub organization_name: String,
    pub location: String,
    pub domain: String,
    #[serde(default)]
    pub matrix_size: MatrixSize,
}

/// A normalized risk-assessment matrix.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RiskMatrix {
    pub context: MatrixContext,
    pub risk_categories: Vec<MatrixCategory>,
}

/// Result of normalizing a matrix recommendation.
///
/// `matrix` is `None` when the response carried no usable matrix; the
/// `response_text` then describes the standard framework instead.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MatrixRecommendation {
    pub response_text: String,
    pub matrix_size: MatrixSize,
    pub matrix: Option<RiskMatrix>,
}
