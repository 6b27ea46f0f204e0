//! Section-split tier: numbered `Risk` headers delimit one record each.

use std::sync::LazyLock;

use regex::Regex;
use risk_core::entities::RiskRecord;
use risk_core::ids;
use risk_core::vocabulary::Vocabulary;
use tracing::debug;

use super::labels::{self, LabelScan};

/// `3. Risk`, `Risk 2:`, or a line starting with `Risk 4`.
static RISK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)\b\d+\.\s*risk\b|\brisk[ \t]*\d+[ \t]*:|^[ \t]*risk[ \t]*\d+")
        .expect("risk header pattern compiles")
});

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n\s*\r?\n").expect("paragraph break pattern compiles"));

pub(super) fn extract(text: &str, vocabulary: &Vocabulary) -> Vec<RiskRecord> {
    let sections = split_sections(text);
    if sections.is_empty() {
        return Vec::new();
    }

    let mut risks = Vec::new();
    for section in &sections {
        match parse_section(section, risks.len() + 1, vocabulary) {
            Some(record) => risks.push(record),
            None => debug!(chars = section.len(), "dropped unparseable risk section"),
        }
    }
    debug!(
        sections = sections.len(),
        accepted = risks.len(),
        "section split finished"
    );
    risks
}

/// Non-empty spans starting at each header. Text before the first header is
/// not a section; without any header there are no sections at all.
fn split_sections(text: &str) -> Vec<&str> {
    let starts: Vec<usize> = RISK_HEADER.find_iter(text).map(|m| m.start()).collect();
    starts
        .iter()
        .enumerate()
        .map(|(index, &start)| {
            let end = starts.get(index + 1).copied().unwrap_or(text.len());
            text[start..end].trim()
        })
        .filter(|section| !section.is_empty())
        .collect()
}

fn parse_section(section: &str, position: usize, vocabulary: &Vocabulary) -> Option<RiskRecord> {
    let LabelScan {
        fields,
        first_label,
    } = labels::scan(section, vocabulary);
    let paragraphs = paragraphs(section);

    let description = fields.description.or_else(|| {
        // First paragraph, minus the header and any labelled tail.
        let first = paragraphs.first()?;
        let unlabelled = first_label
            .filter(|offset| *offset < first.len())
            .map_or(*first, |offset| &first[..offset]);
        Some(labels::clean_field(strip_header(unlabelled)))
    })?;
    if description.chars().count() < vocabulary.limits.min_description_chars {
        return None;
    }

    let treatment = fields
        .treatment
        .or_else(|| {
            let last = paragraphs.last().filter(|_| paragraphs.len() > 1)?;
            (!labels::has_label(last))
                .then(|| labels::clean_field(last))
                .filter(|value| !value.is_empty())
        })
        .unwrap_or_else(|| vocabulary.default_treatment.clone());

    Some(RiskRecord::new(
        ids::risk_id(position),
        description,
        fields
            .category
            .unwrap_or_else(|| vocabulary.section_default_category.clone()),
        fields
            .likelihood
            .unwrap_or_else(|| vocabulary.default_level.clone()),
        fields
            .impact
            .unwrap_or_else(|| vocabulary.default_level.clone()),
        treatment,
    ))
}

fn strip_header(text: &str) -> &str {
    RISK_HEADER
        .find(text)
        .filter(|header| text[..header.start()].trim().is_empty())
        .map_or(text, |header| &text[header.end()..])
}

fn paragraphs(section: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(section)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .collect()
}
