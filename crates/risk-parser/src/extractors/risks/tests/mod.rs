mod section_tier;

use risk_core::entities::RiskRecord;

/// `(category, likelihood, impact)` of each record, for compact assertions.
fn classifications(risks: &[RiskRecord]) -> Vec<(&str, &str, &str)> {
    risks
        .iter()
        .map(|risk| {
            (
                risk.category.as_str(),
                risk.likelihood.as_str(),
                risk.impact.as_str(),
            )
        })
        .collect()
}

fn ids(risks: &[RiskRecord]) -> Vec<&str> {
    risks.iter().map(|risk| risk.id.as_str()).collect()
}
