//! Control extractor: a JSON array of generated controls.

use risk_core::entities::{AnnexMapping, ControlRecord, DEFAULT_CONTROL_STATUS};
use risk_core::ids;
use serde_json::{Map, Value};

use crate::error::ParserError;
use crate::extractors::helpers::{
    bracket_block, str_field, string_field, string_list, strip_code_fence,
};

/// Extract controls from a response, returning an empty list on any failure.
#[must_use]
pub fn extract_controls(text: &str) -> Vec<ControlRecord> {
    match try_extract_controls(text) {
        Ok(controls) => controls,
        Err(error) => {
            tracing::warn!(%error, "no controls extracted");
            Vec::new()
        }
    }
}

/// Extract controls, reporting why nothing could be read.
///
/// # Errors
///
/// Returns [`ParserError::NoJsonFound`] when the text has no `[...]` block,
/// [`ParserError::InvalidJson`] when the block does not parse, and
/// [`ParserError::UnexpectedShape`] when it is not an array.
pub fn try_extract_controls(text: &str) -> Result<Vec<ControlRecord>, ParserError> {
    let unfenced = strip_code_fence(text);
    let block = bracket_block(unfenced).ok_or(ParserError::NoJsonFound {
        expected: "control array",
    })?;
    let value: Value = serde_json::from_str(block)?;
    let Value::Array(items) = value else {
        return Err(ParserError::UnexpectedShape(
            "control block is not an array".into(),
        ));
    };

    let mut controls = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Some(object) = item.as_object() else {
            tracing::debug!(index, "skipping non-object control");
            continue;
        };
        match control_from_object(object, controls.len() + 1) {
            Some(control) => controls.push(control),
            None => tracing::debug!(index, "skipping control without a title"),
        }
    }
    tracing::debug!(count = controls.len(), "extracted controls");
    Ok(controls)
}

fn control_from_object(object: &Map<String, Value>, position: usize) -> Option<ControlRecord> {
    let control_title = str_field(object, &["control_title", "controlTitle"])?.to_string();

    Some(ControlRecord {
        control_id: str_field(object, &["control_id", "controlId"])
            .map_or_else(|| ids::control_id(position), str::to_string),
        control_title,
        control_description: string_field(object, &["control_description", "controlDescription"]),
        objective: string_field(object, &["objective"]),
        annex_a_map: annex_mappings(object),
        linked_risk_ids: string_list(object, &["linked_risk_ids", "linkedRiskIds"]),
        owner_role: string_field(object, &["owner_role", "ownerRole"]),
        process_steps: string_list(object, &["process_steps", "processSteps"]),
        evidence_samples: string_list(object, &["evidence_samples", "evidenceSamples"]),
        metrics: string_list(object, &["metrics"]),
        frequency: string_field(object, &["frequency"]),
        policy_ref: string_field(object, &["policy_ref", "policyRef"]),
        status: str_field(object, &["status"])
            .unwrap_or(DEFAULT_CONTROL_STATUS)
            .to_string(),
        rationale: string_field(object, &["rationale"]),
        assumptions: string_field(object, &["assumptions"]),
    })
}

fn annex_mappings(object: &Map<String, Value>) -> Vec<AnnexMapping> {
    let Some(items) = ["annexA_map", "annex_a_map"]
        .iter()
        .filter_map(|key| object.get(*key))
        .find_map(Value::as_array)
    else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|mapping| {
            Some(AnnexMapping {
                id: str_field(mapping, &["id"])?.to_string(),
                title: string_field(mapping, &["title"]),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const GENERATED: &str = r#"```json
[
  {
    "control_id": "C-101",
    "control_title": "Multi-factor authentication for remote access",
    "control_description": "Require MFA on VPN and webmail",
    "objective": "Prevent account takeover",
    "annexA_map": [
      {"id": "A.8.5", "title": "Secure authentication"},
      {"title": "orphan mapping"}
    ],
    "linked_risk_ids": ["risk-1", 7, "risk-4"],
    "owner_role": "IT Security Lead",
    "process_steps": ["Enable MFA", "Enroll users"],
    "evidence_samples": ["MFA enrollment report"],
    "metrics": ["% of remote logins with MFA"],
    "frequency": "Continuous",
    "policy_ref": "Access Control Policy",
    "status": "Implemented",
    "rationale": "Credential phishing is the top initial access vector",
    "assumptions": "Users have smartphones"
  },
  {
    "controlTitle": "Supplier security review",
    "objective": "Assess vendor posture before onboarding"
  },
  {"objective": "no title, skipped"}
]
```"#;

    #[test]
    fn reads_full_and_partial_controls() {
        let controls = extract_controls(GENERATED);
        assert_eq!(controls.len(), 2);

        let mfa = &controls[0];
        assert_eq!(mfa.control_id, "C-101");
        assert_eq!(
            mfa.annex_a_map,
            vec![AnnexMapping {
                id: "A.8.5".into(),
                title: "Secure authentication".into(),
            }]
        );
        assert_eq!(mfa.linked_risk_ids, vec!["risk-1", "risk-4"]);
        assert_eq!(mfa.status, "Implemented");

        let review = &controls[1];
        assert_eq!(review.control_id, "C-002");
        assert_eq!(review.control_title, "Supplier security review");
        assert_eq!(review.status, DEFAULT_CONTROL_STATUS);
        assert!(review.process_steps.is_empty());
    }

    #[test]
    fn array_embedded_in_prose_is_found() {
        let text = r#"I generated these: [{"control_title": "Quarterly access review"}] Hope it helps."#;
        let controls = extract_controls(text);
        assert_eq!(controls.len(), 1);
        assert_eq!(controls[0].control_id, "C-001");
    }

    #[test]
    fn failures_are_reported_by_kind() {
        assert!(matches!(
            try_extract_controls("no array here"),
            Err(ParserError::NoJsonFound { .. })
        ));
        assert!(matches!(
            try_extract_controls("[not json]"),
            Err(ParserError::InvalidJson(_))
        ));
        assert!(extract_controls("[1, 2").is_empty());
    }

    #[test]
    fn non_object_items_are_skipped() {
        let controls = extract_controls(r#"["text", {"control_title": "Log review"}]"#);
        assert_eq!(controls.len(), 1);
        assert_eq!(controls[0].control_id, "C-001");
    }
}
