//! Keyword-sentence tier: the last resort for free prose.

use std::sync::LazyLock;

use regex::Regex;
use risk_core::entities::RiskRecord;
use risk_core::ids;

use super::RiskExtractor;

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence end pattern compiles"));

pub(super) fn extract(text: &str, extractor: &RiskExtractor) -> Vec<RiskRecord> {
    let vocabulary = extractor.vocabulary();
    let limits = &vocabulary.limits;
    // A sentence also has to be long enough to be a valid description.
    let min_chars = limits.min_sentence_chars.max(limits.min_description_chars);

    SENTENCE_END
        .split(text)
        .map(str::trim)
        .filter(|sentence| sentence.chars().count() >= min_chars)
        .filter(|sentence| extractor.qualifies(sentence))
        .take(limits.max_sentence_records)
        .zip(1..)
        .map(|(sentence, position)| {
            RiskRecord::new(
                ids::risk_id(position),
                sentence.to_string(),
                extractor.classify_category(sentence).to_string(),
                extractor.likelihood().classify(sentence).to_string(),
                extractor.impact().classify(sentence).to_string(),
                vocabulary.default_treatment.clone(),
            )
        })
        .collect()
}
