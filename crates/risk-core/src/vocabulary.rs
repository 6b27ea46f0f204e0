//! Keyword vocabulary for heuristic risk classification.
//!
//! The vocabulary is the single canonical table the sentence tier uses to
//! classify free prose into categories and likelihood/impact levels. It is
//! data, not code: every table can be overridden from configuration.
//!
//! Canonical choices:
//! - likelihood ladder `High` → `Medium` → `Low`, impact ladder
//!   `Critical` → `High` → `Medium` → `Low`, both defaulting to `Medium`;
//! - categories are scanned in declaration order and the first category with
//!   a matching keyword wins, falling back to `Operational Risk`.
//!
//! Keywords match case-insensitively at a word start, so a keyword behaves
//! like a word prefix (`vulnerab` matches `vulnerabilities`, while `likely`
//! does not match inside `unlikely`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A category name and the keywords that select it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategoryRule {
    pub name: String,
    pub keywords: Vec<String>,
}

/// A severity level and the keywords that select it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LevelRule {
    pub level: String,
    pub keywords: Vec<String>,
}

/// Levels in descending severity order, scanned first to last.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LevelLadder {
    pub levels: Vec<LevelRule>,
    pub default_level: String,
}

impl LevelLadder {
    /// Whether `level` names one of this ladder's levels (case-insensitive).
    #[must_use]
    pub fn contains(&self, level: &str) -> bool {
        self.levels
            .iter()
            .any(|rule| rule.level.eq_ignore_ascii_case(level))
    }
}

/// Length and count limits applied during extraction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct ExtractionLimits {
    /// Records whose description is shorter than this (in chars) are discarded.
    pub min_description_chars: usize,
    /// Sentences shorter than this (in chars) are never considered.
    pub min_sentence_chars: usize,
    /// Cap on records produced from qualifying sentences.
    pub max_sentence_records: usize,
}

impl Default for ExtractionLimits {
    fn default() -> Self {
        Self {
            min_description_chars: 10,
            min_sentence_chars: 20,
            max_sentence_records: 10,
        }
    }
}

/// The complete classification vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct Vocabulary {
    /// Values accepted verbatim from `Likelihood:`/`Impact:` labels.
    pub section_levels: Vec<String>,
    /// Level assigned when a label value or JSON field is missing or invalid.
    pub default_level: String,
    pub likelihood: LevelLadder,
    pub impact: LevelLadder,
    /// Ordered category table; earlier entries win ties.
    pub categories: Vec<CategoryRule>,
    /// Category for qualifying sentences that match no category keyword.
    pub fallback_category: String,
    /// Category for labelled sections without a `Category:` label.
    pub section_default_category: String,
    /// Risk-nature words that make a sentence qualify.
    pub risk_keywords: Vec<String>,
    /// Domain words that make a sentence qualify.
    pub domain_keywords: Vec<String>,
    /// Treatment strategy used whenever the source provides none.
    pub default_treatment: String,
    pub limits: ExtractionLimits,
}

fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

fn category(name: &str, keywords: &[&str]) -> CategoryRule {
    CategoryRule {
        name: name.to_string(),
        keywords: words(keywords),
    }
}

fn level(name: &str, keywords: &[&str]) -> LevelRule {
    LevelRule {
        level: name.to_string(),
        keywords: words(keywords),
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            section_levels: words(&["High", "Medium", "Low"]),
            default_level: "Medium".to_string(),
            likelihood: LevelLadder {
                levels: vec![
                    level(
                        "High",
                        &[
                            "likely",
                            "probable",
                            "frequent",
                            "often",
                            "common",
                            "almost certain",
                            "imminent",
                            "expected",
                        ],
                    ),
                    level("Medium", &["possible", "occasional", "may", "could"]),
                    level("Low", &["unlikely", "rare", "seldom", "remote", "improbable"]),
                ],
                default_level: "Medium".to_string(),
            },
            impact: LevelLadder {
                levels: vec![
                    level(
                        "Critical",
                        &["critical", "catastrophic", "severe", "devastating", "existential"],
                    ),
                    level(
                        "High",
                        &["major", "significant", "substantial", "serious", "breach"],
                    ),
                    level("Medium", &["moderate", "noticeable", "disruption"]),
                    level("Low", &["minor", "negligible", "minimal", "limited"]),
                ],
                default_level: "Medium".to_string(),
            },
            categories: vec![
                category(
                    "Cybersecurity Risk",
                    &[
                        "cyber",
                        "hack",
                        "malware",
                        "ransomware",
                        "phishing",
                        "data breach",
                        "unpatched",
                        "vulnerab",
                    ],
                ),
                category(
                    "Technology Risk",
                    &[
                        "technolog",
                        "system",
                        "software",
                        "hardware",
                        "infrastructure",
                        "outage",
                        "legacy",
                    ],
                ),
                category(
                    "Compliance Risk",
                    &["complian", "regulat", "legal", "law", "gdpr", "audit", "licens"],
                ),
                category(
                    "Financial Risk",
                    &[
                        "financ", "revenue", "cost", "budget", "currency", "credit", "liquidity",
                        "fraud",
                    ],
                ),
                category(
                    "Strategic Risk",
                    &["strateg", "market", "competit", "growth", "merger"],
                ),
                category(
                    "Reputational Risk",
                    &["reputation", "brand", "public perception", "media", "customer trust"],
                ),
                category(
                    "Environmental Risk",
                    &["environment", "climate", "weather", "flood", "pollution", "emission"],
                ),
                category(
                    "Supply Chain Risk",
                    &["supplier", "vendor", "supply chain", "logistic", "third-party"],
                ),
                category(
                    "Health and Safety Risk",
                    &["safety", "injur", "health", "workplace accident"],
                ),
                category(
                    "Operational Risk",
                    &["operation", "process", "staff", "employee", "human error"],
                ),
            ],
            fallback_category: "Operational Risk".to_string(),
            section_default_category: "Operational Risks".to_string(),
            risk_keywords: words(&["risk", "threat", "vulnerab", "exposure", "exposed", "hazard"]),
            domain_keywords: words(&[
                "operational",
                "financial",
                "strategic",
                "compliance",
                "cybersecurity",
                "environmental",
                "reputational",
            ]),
            default_treatment:
                "Implement appropriate controls and monitoring to mitigate this risk.".to_string(),
            limits: ExtractionLimits::default(),
        }
    }
}

impl Vocabulary {
    /// Check that the vocabulary can uphold the record invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first offending table.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.section_levels.is_empty() {
            return Err(invalid("section_levels must not be empty"));
        }
        if !self
            .section_levels
            .iter()
            .any(|level| level.eq_ignore_ascii_case(&self.default_level))
        {
            return Err(invalid(format!(
                "default_level '{}' is not one of section_levels",
                self.default_level
            )));
        }
        for (name, ladder) in [("likelihood", &self.likelihood), ("impact", &self.impact)] {
            if ladder.levels.is_empty() {
                return Err(invalid(format!("{name} ladder has no levels")));
            }
            if !ladder.contains(&ladder.default_level) {
                return Err(invalid(format!(
                    "{name} default '{}' is not a level of its ladder",
                    ladder.default_level
                )));
            }
        }
        if let Some(rule) = self.categories.iter().find(|rule| rule.name.trim().is_empty()) {
            return Err(invalid(format!(
                "category with keywords {:?} has an empty name",
                rule.keywords
            )));
        }
        if self.fallback_category.trim().is_empty() {
            return Err(invalid("fallback_category must not be empty"));
        }
        if self.section_default_category.trim().is_empty() {
            return Err(invalid("section_default_category must not be empty"));
        }
        if self.default_treatment.trim().is_empty() {
            return Err(invalid("default_treatment must not be empty"));
        }
        if self.limits.min_description_chars == 0 {
            return Err(invalid("limits.min_description_chars must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> CoreError {
    CoreError::Validation(format!("vocabulary: {}", message.into()))
}
