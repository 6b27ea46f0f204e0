//! Tier 1: a JSON object with a `risks` array.

use risk_core::entities::{DEFAULT_RISK_PROGRESS, RiskRecord};
use risk_core::ids;
use risk_core::vocabulary::Vocabulary;
use serde_json::{Map, Value};

use crate::extractors::helpers::{brace_block, str_field, string_field};

/// Records from the greedy `{...}` block, or nothing if it is absent,
/// malformed, or lacks a `risks` array.
pub(super) fn extract(text: &str, vocabulary: &Vocabulary) -> Vec<RiskRecord> {
    let Some(block) = brace_block(text) else {
        tracing::debug!("no JSON block in response");
        return Vec::new();
    };

    let value: Value = match serde_json::from_str(block) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(%error, "risk JSON block did not parse; falling back");
            return Vec::new();
        }
    };

    let Some(entries) = value.get("risks").and_then(Value::as_array) else {
        tracing::debug!("JSON block has no `risks` array");
        return Vec::new();
    };

    let mut risks = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let Some(object) = entry.as_object() else {
            tracing::debug!(index, "skipping non-object risk entry");
            continue;
        };
        match record_from_entry(object, risks.len() + 1, vocabulary) {
            Some(record) => risks.push(record),
            None => tracing::debug!(index, "skipping risk entry without description/category"),
        }
    }
    risks
}

fn record_from_entry(
    object: &Map<String, Value>,
    position: usize,
    vocabulary: &Vocabulary,
) -> Option<RiskRecord> {
    let description = str_field(object, &["description"])?;
    let category = str_field(object, &["category"])?;
    if description.chars().count() < vocabulary.limits.min_description_chars {
        return None;
    }

    let level = |keys: &[&str]| {
        str_field(object, keys).map_or_else(|| vocabulary.default_level.clone(), str::to_string)
    };
    let treatment = str_field(object, &["treatmentStrategy", "treatment_strategy", "treatment"])
        .map_or_else(|| vocabulary.default_treatment.clone(), str::to_string);

    Some(RiskRecord {
        asset_value: string_field(object, &["assetValue", "asset_value"]),
        department: string_field(object, &["department"]),
        risk_owner: string_field(object, &["riskOwner", "risk_owner"]),
        security_impact: string_field(object, &["securityImpact", "security_impact"]),
        target_date: string_field(object, &["targetDate", "target_date"]),
        risk_progress: str_field(object, &["riskProgress", "risk_progress"])
            .unwrap_or(DEFAULT_RISK_PROGRESS)
            .to_string(),
        residual_exposure: str_field(object, &["residualExposure", "residual_exposure"])
            .map(str::to_string),
        ..RiskRecord::new(
            ids::risk_id(position),
            description.to_string(),
            category.to_string(),
            level(&["likelihood"]),
            level(&["impact"]),
            treatment,
        )
    })
}
