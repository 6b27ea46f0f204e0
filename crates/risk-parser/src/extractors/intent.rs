//! Sub-router decisions read from an intent classifier's output.
//!
//! Classifier text is expected to be a JSON object, possibly fenced or
//! wrapped in chat. Missing or malformed decisions fall back to keyword
//! heuristics over the user's own message.

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use risk_core::entities::{
    ControlRoute, GenerationParameters, KnowledgeParameters, LibraryParameters, RiskIntent,
};
use risk_core::enums::{ControlSubDomain, GenerationMode, RiskMode};
use serde_json::{Map, Value};

use crate::extractors::helpers::{KeywordMatcher, brace_block, str_field, strip_code_fence};

/// Follow-ups longer than this are always re-classified.
const STICKY_MAX_CHARS: usize = 80;

/// Minimum classifier confidence for a control route to be taken.
const ROUTE_CONFIDENCE: f64 = 0.8;

const UNCLEAR_RATIONALE: &str = "Defaulting to risk knowledge for unclear query";
const UNCLEAR_CONFIDENCE: f64 = 0.5;

/// Asked whenever the control sub-router cannot route.
pub const DEFAULT_CLARIFYING_QUESTION: &str = "I'm here to help with security controls. Are you \
     looking to create new controls, review existing ones you've saved, or learn about control \
     frameworks and concepts?";

static FOLLOW_UP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:filter|sort|only|add|exclude)").expect("follow-up pattern compiles")
});

static RISK_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:r|risk)-\d+").expect("risk id pattern compiles"));

static ANNEX_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\ba\.?\s*(\d+)(?:\.\s*(\d+))?").expect("annex pattern compiles")
});

static IMPLEMENTATION_QUESTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:implement|deploy|operationali[sz]e|how to\b|how can i\b)")
        .expect("implementation pattern compiles")
});

static CONTROL_CONTEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:this|the) control\b").expect("control context pattern compiles")
});

/// Category hints in a user message and the category name each selects.
const CATEGORY_HINT_TABLE: &[(&str, &[&str])] = &[
    ("Financial", &["financial"]),
    ("Operational", &["operational"]),
    ("Strategic", &["strategic"]),
    ("Compliance", &["compliance"]),
    ("Technology", &["technology"]),
    ("Cyber Security", &["cyber"]),
    ("Data Privacy", &["data"]),
    ("Human Resources", &["hr", "human resources"]),
    ("Environmental", &["environmental"]),
    ("Legal", &["legal"]),
    ("Reputational", &["reputational"]),
    ("Supply Chain", &["supply"]),
];

static CATEGORY_HINTS: LazyLock<Vec<(&'static str, KeywordMatcher)>> = LazyLock::new(|| {
    CATEGORY_HINT_TABLE
        .iter()
        .map(|(name, keywords)| {
            let keywords: Vec<String> = keywords.iter().map(|kw| (*kw).to_string()).collect();
            (
                *name,
                KeywordMatcher::new(&keywords).expect("category hint compiles"),
            )
        })
        .collect()
});

// ---------------------------------------------------------------------------
// Risk sub-router
// ---------------------------------------------------------------------------

/// Keep `active_mode` for a short follow-up (e.g. "only show high ones").
///
/// Returns `None` when the message needs fresh classification.
#[must_use]
pub fn sticky_risk_mode(user_input: &str, active_mode: Option<RiskMode>) -> Option<RiskIntent> {
    let mode = active_mode?;
    let short = user_input.chars().count() <= STICKY_MAX_CHARS;
    if !short || !FOLLOW_UP.is_match(user_input) {
        return None;
    }
    tracing::debug!(%mode, "short follow-up keeps the active risk mode");
    Some(RiskIntent {
        mode,
        rationale: format!("Short follow-up kept in {mode}"),
        confidence: 1.0,
        sticky: true,
    })
}

/// Read the risk classifier's `{intent, rationale, confidence}` decision.
///
/// Unreadable output and unknown intents both land on
/// [`RiskMode::RiskKnowledge`].
#[must_use]
pub fn parse_risk_intent(classifier_text: &str) -> RiskIntent {
    let Some(decision) = parse_decision(classifier_text) else {
        tracing::warn!("risk intent classifier output did not parse");
        return RiskIntent {
            mode: RiskMode::RiskKnowledge,
            rationale: UNCLEAR_RATIONALE.to_string(),
            confidence: UNCLEAR_CONFIDENCE,
            sticky: false,
        };
    };

    let intent = str_field(&decision, &["intent"]).unwrap_or_default();
    let mode = RiskMode::from_str(intent).unwrap_or_else(|_| {
        tracing::debug!(intent, "unknown risk intent, using risk knowledge");
        RiskMode::RiskKnowledge
    });
    RiskIntent {
        mode,
        rationale: str_field(&decision, &["rationale", "reasoning"])
            .unwrap_or_default()
            .to_string(),
        confidence: decision
            .get("confidence")
            .and_then(Value::as_f64)
            .unwrap_or_default(),
        sticky: false,
    }
}

// ---------------------------------------------------------------------------
// Control sub-router
// ---------------------------------------------------------------------------

/// Turn the control classifier's decision into a route.
///
/// A route is taken only for `action == "route"` with a known sub-domain and
/// confidence of at least 0.8; anything else asks a clarifying question.
/// Missing parameters are recovered from `user_input`.
#[must_use]
pub fn parse_control_intent(classifier_text: &str, user_input: &str) -> ControlRoute {
    let Some(decision) = parse_decision(classifier_text) else {
        tracing::warn!("control intent classifier output did not parse");
        return clarify(None);
    };

    let action = str_field(&decision, &["action"]).unwrap_or("clarify");
    let sub_domain = str_field(&decision, &["sub_domain"])
        .and_then(|value| ControlSubDomain::from_str(value).ok());
    let confidence = decision
        .get("confidence")
        .and_then(Value::as_f64)
        .unwrap_or_default();
    tracing::debug!(action, ?sub_domain, confidence, "control intent decision");

    let route_to = sub_domain.filter(|_| action == "route" && confidence >= ROUTE_CONFIDENCE);
    let Some(sub_domain) = route_to else {
        return clarify(str_field(&decision, &["clarifying_question"]));
    };

    let parameters = decision
        .get("parameters")
        .and_then(Value::as_object)
        .filter(|parameters| !parameters.is_empty());
    match sub_domain {
        ControlSubDomain::GenerateControl => ControlRoute::GenerateControl(
            parameters.map_or_else(|| generation_from_input(user_input), generation_from),
        ),
        ControlSubDomain::ControlLibrary => ControlRoute::ControlLibrary(
            parameters.map_or_else(|| library_from_input(user_input), library_from),
        ),
        ControlSubDomain::ControlKnowledge => ControlRoute::ControlKnowledge(
            parameters.map_or_else(|| knowledge_from_input(user_input), knowledge_from),
        ),
    }
}

fn clarify(question: Option<&str>) -> ControlRoute {
    ControlRoute::Clarify {
        question: question.unwrap_or(DEFAULT_CLARIFYING_QUESTION).to_string(),
    }
}

fn generation_from(parameters: &Map<String, Value>) -> GenerationParameters {
    let owned = |key: &str| str_field(parameters, &[key]).map(str::to_string);
    GenerationParameters {
        mode: str_field(parameters, &["mode"])
            .and_then(|mode| GenerationMode::from_str(mode).ok())
            .unwrap_or_default(),
        risk_category: owned("risk_category"),
        risk_id: owned("risk_id"),
        risk_description: owned("risk_description"),
    }
}

fn generation_from_input(user_input: &str) -> GenerationParameters {
    if !user_input.to_lowercase().contains("risk") {
        return GenerationParameters::default();
    }
    if let Some((name, _)) = CATEGORY_HINTS
        .iter()
        .find(|(_, matcher)| matcher.is_match(user_input))
    {
        return GenerationParameters {
            mode: GenerationMode::Category,
            risk_category: Some((*name).to_string()),
            ..GenerationParameters::default()
        };
    }
    if let Some(id) = RISK_ID.find(user_input) {
        return GenerationParameters {
            mode: GenerationMode::RiskId,
            risk_id: Some(id.as_str().to_uppercase()),
            ..GenerationParameters::default()
        };
    }
    GenerationParameters::default()
}

fn library_from(parameters: &Map<String, Value>) -> LibraryParameters {
    LibraryParameters {
        annex_reference: str_field(parameters, &["annex_reference"]).map(str::to_string),
        filters: remaining(parameters, &["mode", "risk_category", "annex_reference"]),
    }
}

fn library_from_input(user_input: &str) -> LibraryParameters {
    let annex_reference = ANNEX_REFERENCE.captures(user_input).map(|captures| {
        let clause = &captures[1];
        match captures.get(2) {
            Some(control) => format!("A.{clause}.{}", control.as_str()),
            None => format!("A.{clause}"),
        }
    });
    LibraryParameters {
        annex_reference,
        filters: BTreeMap::new(),
    }
}

fn knowledge_from(parameters: &Map<String, Value>) -> KnowledgeParameters {
    KnowledgeParameters {
        query_type: str_field(parameters, &["query_type"]).map(str::to_string),
        has_context: parameters
            .get("has_context")
            .and_then(Value::as_bool)
            .unwrap_or_default(),
        filters: remaining(parameters, &["query_type", "has_context"]),
    }
}

fn knowledge_from_input(user_input: &str) -> KnowledgeParameters {
    if !IMPLEMENTATION_QUESTION.is_match(user_input) {
        return KnowledgeParameters::default();
    }
    KnowledgeParameters {
        query_type: Some("implementation".to_string()),
        has_context: CONTROL_CONTEXT.is_match(user_input),
        filters: BTreeMap::new(),
    }
}

fn remaining(parameters: &Map<String, Value>, consumed: &[&str]) -> BTreeMap<String, Value> {
    parameters
        .iter()
        .filter(|(key, _)| !consumed.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// The classifier's JSON object: the whole (unfenced) text, else its
/// `{...}` block.
fn parse_decision(text: &str) -> Option<Map<String, Value>> {
    let unfenced = strip_code_fence(text);
    let value = serde_json::from_str::<Value>(unfenced).ok().or_else(|| {
        brace_block(unfenced).and_then(|block| serde_json::from_str(block).ok())
    })?;
    match value {
        Value::Object(object) => Some(object),
        _ => None,
    }
}
