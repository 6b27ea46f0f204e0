use pretty_assertions::assert_eq;
use risk_core::vocabulary::Vocabulary;
use rstest::rstest;

use super::super::{ExtractionTier, section_tier};
use super::{classifications, ids};
use crate::RiskExtractor;

fn extract(text: &str) -> Vec<risk_core::entities::RiskRecord> {
    section_tier::extract(text, &Vocabulary::default())
}

#[test]
fn single_inline_section() {
    let risks = extract(
        "1. Risk Description: Aging server hardware may fail. Category: Technology. \
         Likelihood: High. Impact: High. Treatment Strategy: Replace hardware within 6 months.",
    );
    assert_eq!(risks.len(), 1);
    assert_eq!(risks[0].id, "risk-1");
    assert_eq!(risks[0].description, "Aging server hardware may fail.");
    assert_eq!(classifications(&risks), [("Technology", "High", "High")]);
    assert_eq!(risks[0].treatment_strategy, "Replace hardware within 6 months.");
}

#[test]
fn multiline_markdown_sections() {
    let text = "\
Here are the main risks I identified.

**Risk 1:**
- **Description:** Phishing emails target finance staff with fake invoices
- **Category:** Cybersecurity Risk
- **Likelihood:** high
- **Impact:** Medium
- **Treatment:** Run quarterly phishing simulations

**Risk 2:**
- **Description:** Warehouse is in a flood plain
- **Category:** Environmental Risk
- **Likelihood:** Low
- **Impact:** High
- **Strategy:** Move critical stock to the upper floor
";
    let risks = extract(text);
    assert_eq!(ids(&risks), ["risk-1", "risk-2"]);
    assert_eq!(
        risks[0].description,
        "Phishing emails target finance staff with fake invoices"
    );
    assert_eq!(
        classifications(&risks),
        [
            ("Cybersecurity Risk", "High", "Medium"),
            ("Environmental Risk", "Low", "High"),
        ]
    );
    assert_eq!(
        risks[0].treatment_strategy,
        "Run quarterly phishing simulations"
    );
    assert_eq!(
        risks[1].treatment_strategy,
        "Move critical stock to the upper floor"
    );
}

#[rstest]
#[case("Very High")]
#[case("5")]
#[case("")]
fn unrecognized_levels_default_to_medium(#[case] level: &str) {
    let risks = extract(&format!(
        "Risk 1: Description: Contractors keep shared admin passwords\nLikelihood: {level}\nImpact: {level}"
    ));
    assert_eq!(risks[0].likelihood, "Medium");
    assert_eq!(risks[0].impact, "Medium");
}

#[test]
fn missing_labels_fall_back_to_paragraphs_and_defaults() {
    let text = "\
Risk 1: Legacy ERP system is no longer supported by the vendor

Budget approval for the replacement is pending.

Plan a phased migration to a supported platform.";
    let risks = extract(text);
    assert_eq!(risks.len(), 1);
    assert_eq!(
        risks[0].description,
        "Legacy ERP system is no longer supported by the vendor"
    );
    assert_eq!(risks[0].category, "Operational Risks");
    assert_eq!(
        risks[0].treatment_strategy,
        "Plan a phased migration to a supported platform."
    );
}

#[test]
fn single_paragraph_without_treatment_uses_default() {
    let risks = extract("Risk 1: Key staff could leave after the merger closes");
    assert_eq!(risks.len(), 1);
    assert_eq!(
        risks[0].treatment_strategy,
        Vocabulary::default().default_treatment
    );
}

#[test]
fn short_descriptions_reject_only_their_section() {
    let text = "\
Risk 1: Description: Too short
Category: Financial Risk

Risk 2: Description: Customer churn rising in the enterprise segment
Category: Strategic Risk";
    let risks = extract(text);
    assert_eq!(ids(&risks), ["risk-1"]);
    assert_eq!(risks[0].category, "Strategic Risk");
}

#[test]
fn preamble_before_first_header_is_ignored() {
    let text = "Several risks deserve attention this quarter.\n\n\
                3. Risk Description: Backups have not been restore-tested in a year";
    let risks = extract(text);
    assert_eq!(risks.len(), 1);
    assert_eq!(
        risks[0].description,
        "Backups have not been restore-tested in a year"
    );
}

#[test]
fn text_without_headers_has_no_sections() {
    assert!(extract("Description: Servers are old and failing often.").is_empty());
}

#[test]
fn all_sections_rejected_falls_through_to_sentences() {
    let extractor = RiskExtractor::new(&Vocabulary::default()).unwrap();
    let extraction = extractor.extract_with_tier(
        "Overall the financial exposure from late invoices is growing.\n\nRisk 1: Description: n/a",
    );
    assert_eq!(extraction.tier, Some(ExtractionTier::KeywordSentence));
    assert!(!extraction.risks.is_empty());
}
