//! Risk-text extractor: three-tier fallback over an LLM response.
//!
//! 1. **Structured JSON**: the greedy `{...}` block, when it parses and holds
//!    a `risks` array.
//! 2. **Section split**: text split at numbered `Risk` headers, each section
//!    read through the label table in `labels.rs`.
//! 3. **Keyword sentences**: sentences qualified and classified by the
//!    [`Vocabulary`] keyword tables.
//!
//! A tier runs only when every earlier tier produced zero records. The
//! extractor never fails: the weakest outcome is an empty list.

mod json_tier;
mod labels;
mod section_tier;
mod sentence_tier;

#[cfg(test)]
mod tests;

use std::sync::LazyLock;

use risk_core::entities::RiskRecord;
use risk_core::vocabulary::{LevelLadder, Vocabulary};
use serde::Serialize;

use crate::error::ParserError;
use crate::extractors::helpers::KeywordMatcher;

/// The strategy that produced an extraction result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionTier {
    StructuredJson,
    SectionSplit,
    KeywordSentence,
}

impl ExtractionTier {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StructuredJson => "structured_json",
            Self::SectionSplit => "section_split",
            Self::KeywordSentence => "keyword_sentence",
        }
    }
}

impl std::fmt::Display for ExtractionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Records plus the tier that produced them (`None` when nothing was found).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub tier: Option<ExtractionTier>,
    pub risks: Vec<RiskRecord>,
}

/// A level ladder with its keyword matchers compiled.
#[derive(Debug, Clone)]
pub(crate) struct CompiledLadder {
    levels: Vec<(String, KeywordMatcher)>,
    default_level: String,
}

impl CompiledLadder {
    fn new(ladder: &LevelLadder) -> Result<Self, regex::Error> {
        let levels = ladder
            .levels
            .iter()
            .map(|rule| Ok((rule.level.clone(), KeywordMatcher::new(&rule.keywords)?)))
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self {
            levels,
            default_level: ladder.default_level.clone(),
        })
    }

    /// First level (in descending severity order) whose keywords match.
    pub(crate) fn classify(&self, text: &str) -> &str {
        self.levels
            .iter()
            .find(|(_, matcher)| matcher.is_match(text))
            .map_or(self.default_level.as_str(), |(level, _)| level.as_str())
    }
}

/// Risk extractor bound to one vocabulary, with its matchers compiled once.
#[derive(Debug, Clone)]
pub struct RiskExtractor {
    vocabulary: Vocabulary,
    categories: Vec<(String, KeywordMatcher)>,
    likelihood: CompiledLadder,
    impact: CompiledLadder,
    risk_nature: KeywordMatcher,
    domain: KeywordMatcher,
}

static DEFAULT_EXTRACTOR: LazyLock<RiskExtractor> = LazyLock::new(|| {
    RiskExtractor::new(&Vocabulary::default()).expect("default vocabulary compiles")
});

/// Extract risks with the built-in vocabulary.
#[must_use]
pub fn extract_risks(text: &str) -> Vec<RiskRecord> {
    DEFAULT_EXTRACTOR.extract(text)
}

impl RiskExtractor {
    /// Validate `vocabulary` and compile its keyword tables.
    ///
    /// # Errors
    ///
    /// Returns [`ParserError::InvalidVocabulary`] when the vocabulary fails
    /// validation or a keyword table cannot be compiled.
    pub fn new(vocabulary: &Vocabulary) -> Result<Self, ParserError> {
        vocabulary
            .validate()
            .map_err(|error| ParserError::InvalidVocabulary(error.to_string()))?;
        let compile_error = |error: regex::Error| ParserError::InvalidVocabulary(error.to_string());

        let categories = vocabulary
            .categories
            .iter()
            .map(|rule| Ok((rule.name.clone(), KeywordMatcher::new(&rule.keywords)?)))
            .collect::<Result<Vec<_>, regex::Error>>()
            .map_err(compile_error)?;

        Ok(Self {
            categories,
            likelihood: CompiledLadder::new(&vocabulary.likelihood).map_err(compile_error)?,
            impact: CompiledLadder::new(&vocabulary.impact).map_err(compile_error)?,
            risk_nature: KeywordMatcher::new(&vocabulary.risk_keywords).map_err(compile_error)?,
            domain: KeywordMatcher::new(&vocabulary.domain_keywords).map_err(compile_error)?,
            vocabulary: vocabulary.clone(),
        })
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Extract risk records from `text`.
    #[must_use]
    pub fn extract(&self, text: &str) -> Vec<RiskRecord> {
        self.extract_with_tier(text).risks
    }

    /// Extract risk records and report which tier produced them.
    #[must_use]
    pub fn extract_with_tier(&self, text: &str) -> Extraction {
        let risks = json_tier::extract(text, &self.vocabulary);
        if !risks.is_empty() {
            return finish(ExtractionTier::StructuredJson, risks);
        }

        let risks = section_tier::extract(text, &self.vocabulary);
        if !risks.is_empty() {
            return finish(ExtractionTier::SectionSplit, risks);
        }

        let risks = sentence_tier::extract(text, self);
        if !risks.is_empty() {
            return finish(ExtractionTier::KeywordSentence, risks);
        }

        tracing::debug!(chars = text.len(), "no extraction tier produced risks");
        Extraction {
            tier: None,
            risks: Vec::new(),
        }
    }

    /// Whether a sentence mentions a risk-nature or domain keyword.
    pub(crate) fn qualifies(&self, sentence: &str) -> bool {
        self.risk_nature.is_match(sentence) || self.domain.is_match(sentence)
    }

    /// First category (in priority order) with a matching keyword.
    pub(crate) fn classify_category(&self, sentence: &str) -> &str {
        self.categories
            .iter()
            .find(|(_, matcher)| matcher.is_match(sentence))
            .map_or(self.vocabulary.fallback_category.as_str(), |(name, _)| {
                name.as_str()
            })
    }

    pub(crate) const fn likelihood(&self) -> &CompiledLadder {
        &self.likelihood
    }

    pub(crate) const fn impact(&self) -> &CompiledLadder {
        &self.impact
    }
}

fn finish(tier: ExtractionTier, risks: Vec<RiskRecord>) -> Extraction {
    tracing::debug!(%tier, count = risks.len(), "extracted risks");
    Extraction {
        tier: Some(tier),
        risks,
    }
}
