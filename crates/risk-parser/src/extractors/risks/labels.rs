//! Label table for risk sections.
//!
//! Each entry pairs a label pattern with the setter that stores its value.
//! Labels are located independently; a value runs from the end of its label
//! to the start of the next recognized label (or the end of the section).
//! Recognizing a new label means adding a row here.

use std::sync::LazyLock;

use regex::Regex;
use risk_core::vocabulary::Vocabulary;

/// Field values read from one section's labels, already cleaned.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(super) struct SectionFields {
    pub description: Option<String>,
    pub category: Option<String>,
    pub likelihood: Option<String>,
    pub impact: Option<String>,
    pub treatment: Option<String>,
}

type Setter = fn(&mut SectionFields, &str, &Vocabulary);

struct LabelRule {
    pattern: &'static str,
    set: Setter,
}

const LABELS: &[LabelRule] = &[
    LabelRule {
        pattern: r"(?:risk\s+)?description",
        set: |fields, value, _| fields.description = non_empty(clean_field(value)),
    },
    LabelRule {
        pattern: r"(?:risk\s+)?category",
        set: |fields, value, _| fields.category = non_empty(clean_short_value(value)),
    },
    LabelRule {
        pattern: r"likelihood",
        set: |fields, value, vocabulary| fields.likelihood = section_level(value, vocabulary),
    },
    LabelRule {
        pattern: r"impact",
        set: |fields, value, vocabulary| fields.impact = section_level(value, vocabulary),
    },
    LabelRule {
        pattern: r"treatment(?:\s+strategy)?|strategy",
        set: |fields, value, _| fields.treatment = non_empty(clean_field(value)),
    },
];

/// Each label may be wrapped in markdown bold and must be followed by `:`.
static LABEL_PATTERNS: LazyLock<Vec<(Regex, Setter)>> = LazyLock::new(|| {
    LABELS
        .iter()
        .map(|rule| {
            let pattern = format!(r"(?i)\**\b(?:{})\b\**[ \t]*:[ \t]*\**", rule.pattern);
            (
                Regex::new(&pattern).expect("label pattern compiles"),
                rule.set,
            )
        })
        .collect()
});

/// Optional bullet, then optional `N.` enumeration, then optional `:` or `.`.
static LEADING_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[-•*]?\s*(?:\d+\.\s*)?[:.]?\s*").expect("leading noise pattern compiles")
});

/// Trailing whitespace and the next line's bullet or bold markers.
static TRAILING_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-•*]+$").expect("trailing noise pattern compiles"));

/// Result of scanning a section for labels.
#[derive(Debug, Default)]
pub(super) struct LabelScan {
    pub fields: SectionFields,
    /// Byte offset of the earliest label in the section, if any.
    pub first_label: Option<usize>,
}

pub(super) fn scan(section: &str, vocabulary: &Vocabulary) -> LabelScan {
    let hits: Vec<(usize, usize, Setter)> = LABEL_PATTERNS
        .iter()
        .filter_map(|(regex, set)| regex.find(section).map(|m| (m.start(), m.end(), *set)))
        .collect();

    // Every occurrence of every label bounds the value before it.
    let mut boundaries: Vec<usize> = LABEL_PATTERNS
        .iter()
        .flat_map(|(regex, _)| regex.find_iter(section).map(|m| m.start()))
        .collect();
    boundaries.sort_unstable();

    let mut scan = LabelScan {
        first_label: boundaries.first().copied(),
        ..LabelScan::default()
    };
    for (_, value_start, set) in hits {
        let value_end = boundaries
            .iter()
            .copied()
            .find(|start| *start >= value_start)
            .unwrap_or(section.len());
        set(&mut scan.fields, &section[value_start..value_end], vocabulary);
    }
    scan
}

/// Whether `text` contains any recognized label.
pub(super) fn has_label(text: &str) -> bool {
    LABEL_PATTERNS.iter().any(|(regex, _)| regex.is_match(text))
}

/// Strip one leading bullet, enumeration and separator, then any trailing
/// markers, then trim.
pub(super) fn clean_field(value: &str) -> String {
    let value = LEADING_NOISE.replace(value, "");
    TRAILING_NOISE.replace(&value, "").trim().to_string()
}

/// [`clean_field`] plus trailing sentence punctuation, for one-phrase values.
fn clean_short_value(value: &str) -> String {
    clean_field(value)
        .trim_end_matches(['.', ',', ';', '*'])
        .trim_end()
        .to_string()
}

/// The value's first word, if it is one of the accepted section levels.
fn section_level(value: &str, vocabulary: &Vocabulary) -> Option<String> {
    let word = value
        .split(|ch: char| !ch.is_alphanumeric())
        .find(|word| !word.is_empty())?;
    vocabulary
        .section_levels
        .iter()
        .find(|level| level.eq_ignore_ascii_case(word))
        .cloned()
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
