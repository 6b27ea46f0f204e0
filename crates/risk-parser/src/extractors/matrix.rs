//! Matrix normalizer: snaps a recommended matrix to a supported size and
//! forces every category's scales to exactly match it.

use risk_core::entities::{
    MatrixCategory, MatrixContext, MatrixRecommendation, RiskMatrix, ScaleLevel,
};
use risk_core::enums::MatrixSize;
use serde_json::{Map, Value};

use crate::error::ParserError;
use crate::extractors::helpers::{brace_block, str_field};

const DEFAULT_RESPONSE_TEXT: &str = "Matrix recommendation created successfully.";
const DEFAULT_RISK_TYPE: &str = "Unknown Risk";
const DEFAULT_DEFINITION: &str = "Risk definition";
const DEFAULT_LEVEL_DESCRIPTION: &str = "Contextual description";
const MAX_CATEGORIES: usize = 10;

const LIKELIHOOD_TITLES: [&str; 5] = ["Rare", "Unlikely", "Possible", "Likely", "Almost Certain"];
const IMPACT_TITLES: [&str; 5] = ["Minor", "Moderate", "Major", "Severe", "Critical"];

/// Normalize a matrix recommendation.
///
/// `requested` is the size the user asked for and `context` the organization
/// profile; both fill gaps in the response. A JSON object with no matrix in it
/// yields an empty-category matrix for the profile. When no object can be
/// read the result carries no matrix and a fallback message for `requested`.
#[must_use]
pub fn normalize_matrix(
    text: &str,
    requested: MatrixSize,
    context: &MatrixContext,
) -> MatrixRecommendation {
    match try_normalize_matrix(text, requested, context) {
        Ok(recommendation) => recommendation,
        Err(error) => {
            tracing::warn!(%error, size = %requested, "matrix recommendation fell back");
            MatrixRecommendation {
                response_text: fallback_text(requested),
                matrix_size: requested,
                matrix: None,
            }
        }
    }
}

/// Normalize a matrix recommendation, reporting why it could not be read.
///
/// # Errors
///
/// Returns [`ParserError::NoJsonFound`] when the text has no `{...}` block,
/// [`ParserError::InvalidJson`] when it does not parse, and
/// [`ParserError::UnexpectedShape`] when the JSON is not an object or its
/// `matrix_data` is not an object.
pub fn try_normalize_matrix(
    text: &str,
    requested: MatrixSize,
    context: &MatrixContext,
) -> Result<MatrixRecommendation, ParserError> {
    let block = brace_block(text).ok_or(ParserError::NoJsonFound {
        expected: "matrix object",
    })?;
    let parsed: Value = serde_json::from_str(block)?;
    let root = parsed
        .as_object()
        .ok_or_else(|| ParserError::UnexpectedShape("matrix response is not an object".into()))?;

    let empty = Map::new();
    let stated_text = str_field(root, &["response_text"]).unwrap_or(DEFAULT_RESPONSE_TEXT);
    let (payload, response_text) = match root.get("matrix_data") {
        Some(Value::Object(data)) if !data.is_empty() => (data, stated_text),
        // Legacy responses put the matrix at the top level.
        None | Some(Value::Object(_) | Value::Null) if root.contains_key("context") => {
            (root, DEFAULT_RESPONSE_TEXT)
        }
        // No matrix at all: an empty one built from the profile.
        None | Some(Value::Object(_)) => (&empty, stated_text),
        Some(_) => {
            return Err(ParserError::UnexpectedShape(
                "matrix_data is not an object".into(),
            ));
        }
    };

    let raw_context = payload
        .get("context")
        .and_then(Value::as_object)
        .unwrap_or(&empty);
    let size = str_field(raw_context, &["matrix_size"])
        .and_then(MatrixSize::snap)
        .unwrap_or(requested);

    let risk_categories = payload
        .get("risk_categories")
        .and_then(Value::as_array)
        .map(|categories| {
            categories
                .iter()
                .filter_map(Value::as_object)
                .take(MAX_CATEGORIES)
                .map(|category| normalize_category(category, size))
                .collect()
        })
        .unwrap_or_default();

    let resolved = |key: &str, fallback: &str| {
        str_field(raw_context, &[key]).unwrap_or(fallback).to_string()
    };
    let matrix = RiskMatrix {
        context: MatrixContext {
            organization_name: resolved("organization_name", &context.organization_name),
            location: resolved("location", &context.location),
            domain: resolved("domain", &context.domain),
            matrix_size: size,
        },
        risk_categories,
    };
    tracing::debug!(
        %size,
        categories = matrix.risk_categories.len(),
        "normalized matrix"
    );

    Ok(MatrixRecommendation {
        response_text: response_text.to_string(),
        matrix_size: size,
        matrix: Some(matrix),
    })
}

fn normalize_category(category: &Map<String, Value>, size: MatrixSize) -> MatrixCategory {
    MatrixCategory {
        risk_type: str_field(category, &["riskType", "risk_type"])
            .unwrap_or(DEFAULT_RISK_TYPE)
            .to_string(),
        definition: str_field(category, &["definition"])
            .unwrap_or(DEFAULT_DEFINITION)
            .to_string(),
        likelihood_scale: fit_scale(
            category.get("likelihoodScale").or_else(|| category.get("likelihood_scale")),
            size.rows(),
            &LIKELIHOOD_TITLES,
        ),
        impact_scale: fit_scale(
            category.get("impactScale").or_else(|| category.get("impact_scale")),
            size.cols(),
            &IMPACT_TITLES,
        ),
        matrix_size: size,
    }
}

/// Truncate or pad `raw` to exactly `count` levels numbered `1..=count`.
fn fit_scale(raw: Option<&Value>, count: usize, base_titles: &[&str]) -> Vec<ScaleLevel> {
    let given = raw.and_then(Value::as_array).map_or(&[][..], Vec::as_slice);
    (0..count)
        .zip(1u32..)
        .map(|(index, level)| {
            let entry = given.get(index).and_then(Value::as_object);
            let field = |key: &str| entry.and_then(|object| str_field(object, &[key]));
            let base_title = base_titles[index.min(base_titles.len() - 1)];
            ScaleLevel {
                level,
                title: field("title").unwrap_or(base_title).to_string(),
                description: field("description")
                    .unwrap_or(DEFAULT_LEVEL_DESCRIPTION)
                    .to_string(),
            }
        })
        .collect()
}

fn fallback_text(size: MatrixSize) -> String {
    format!(
        "I've created a {size} risk matrix framework. The risk profile dashboard will show you \
         the standard risk categories with customizable scales."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn profile() -> MatrixContext {
        MatrixContext {
            organization_name: "Acme Logistics".into(),
            location: "Rotterdam".into(),
            domain: "Shipping".into(),
            matrix_size: MatrixSize::FiveByFive,
        }
    }

    fn titles(scale: &[ScaleLevel]) -> Vec<&str> {
        scale.iter().map(|level| level.title.as_str()).collect()
    }

    #[test]
    fn pads_and_truncates_scales_to_size() {
        let text = r#"Here you go:
{
  "response_text": "A 4x4 matrix suits a mid-size shipper.",
  "matrix_data": {
    "context": {"organization_name": "Acme", "matrix_size": "4x4"},
    "risk_categories": [{
      "riskType": "Supply Chain Risk",
      "definition": "Disruption of inbound freight",
      "likelihoodScale": [
        {"level": 9, "title": "Seldom", "description": "Once a decade"},
        {"title": "Sometimes"}
      ],
      "impactScale": [
        {"title": "Tiny"}, {"title": "Small"}, {"title": "Big"},
        {"title": "Huge"}, {"title": "Enormous"}
      ]
    }]
  }
}"#;
        let recommendation = normalize_matrix(text, MatrixSize::FiveByFive, &profile());
        assert_eq!(recommendation.matrix_size, MatrixSize::FourByFour);
        assert_eq!(
            recommendation.response_text,
            "A 4x4 matrix suits a mid-size shipper."
        );

        let matrix = recommendation.matrix.unwrap();
        assert_eq!(matrix.context.organization_name, "Acme");
        assert_eq!(matrix.context.location, "Rotterdam");
        assert_eq!(matrix.context.matrix_size, MatrixSize::FourByFour);

        let category = &matrix.risk_categories[0];
        assert_eq!(
            titles(&category.likelihood_scale),
            ["Seldom", "Sometimes", "Possible", "Likely"]
        );
        assert_eq!(
            category
                .likelihood_scale
                .iter()
                .map(|level| level.level)
                .collect::<Vec<_>>(),
            [1, 2, 3, 4]
        );
        assert_eq!(category.likelihood_scale[0].description, "Once a decade");
        assert_eq!(
            category.likelihood_scale[1].description,
            DEFAULT_LEVEL_DESCRIPTION
        );
        assert_eq!(titles(&category.impact_scale), ["Tiny", "Small", "Big", "Huge"]);
        assert_eq!(category.matrix_size, MatrixSize::FourByFour);
    }

    #[rstest]
    #[case("3x3", MatrixSize::ThreeByThree)]
    #[case("3x4", MatrixSize::ThreeByThree)]
    #[case("4x5", MatrixSize::FourByFour)]
    #[case("5x4", MatrixSize::FourByFour)]
    #[case("6x6", MatrixSize::FiveByFive)]
    #[case("4294967295x4294967295", MatrixSize::FiveByFive)]
    #[case("big", MatrixSize::FiveByFive)]
    fn sizes_snap_by_average(#[case] size: &str, #[case] expected: MatrixSize) {
        let text = format!(r#"{{"context": {{"matrix_size": "{size}"}}, "risk_categories": []}}"#);
        let recommendation = normalize_matrix(&text, MatrixSize::FiveByFive, &profile());
        assert_eq!(recommendation.matrix_size, expected);
    }

    #[test]
    fn legacy_shape_and_category_defaults() {
        let text = r#"{
          "context": {},
          "risk_categories": [{}, "not an object"]
        }"#;
        let recommendation = normalize_matrix(text, MatrixSize::ThreeByThree, &profile());
        assert_eq!(recommendation.response_text, DEFAULT_RESPONSE_TEXT);

        let matrix = recommendation.matrix.unwrap();
        assert_eq!(matrix.context, MatrixContext {
            matrix_size: MatrixSize::ThreeByThree,
            ..profile()
        });
        assert_eq!(matrix.risk_categories.len(), 1);
        let category = &matrix.risk_categories[0];
        assert_eq!(category.risk_type, DEFAULT_RISK_TYPE);
        assert_eq!(category.definition, DEFAULT_DEFINITION);
        assert_eq!(titles(&category.likelihood_scale), ["Rare", "Unlikely", "Possible"]);
        assert_eq!(titles(&category.impact_scale), ["Minor", "Moderate", "Major"]);
    }

    #[test]
    fn categories_are_capped() {
        let categories = (0..14)
            .map(|n| format!(r#"{{"riskType": "Risk {n}"}}"#))
            .collect::<Vec<_>>()
            .join(",");
        let text = format!(r#"{{"matrix_data": {{"context": {{}}, "risk_categories": [{categories}]}}}}"#);
        let matrix = normalize_matrix(&text, MatrixSize::FiveByFive, &profile())
            .matrix
            .unwrap();
        assert_eq!(matrix.risk_categories.len(), MAX_CATEGORIES);
        assert_eq!(matrix.risk_categories[9].risk_type, "Risk 9");
    }

    #[test]
    fn object_without_matrix_yields_empty_profile_matrix() {
        let text = r#"{"response_text": "A 5x5 matrix is the usual starting point."}"#;
        let recommendation = normalize_matrix(text, MatrixSize::FourByFour, &profile());
        assert_eq!(
            recommendation.response_text,
            "A 5x5 matrix is the usual starting point."
        );
        assert_eq!(recommendation.matrix_size, MatrixSize::FourByFour);
        assert_eq!(
            recommendation.matrix,
            Some(RiskMatrix {
                context: MatrixContext {
                    matrix_size: MatrixSize::FourByFour,
                    ..profile()
                },
                risk_categories: Vec::new(),
            })
        );

        let empty_data = r#"{"matrix_data": {}, "risk_categories": [{"riskType": "ignored"}]}"#;
        let matrix = normalize_matrix(empty_data, MatrixSize::ThreeByThree, &profile())
            .matrix
            .unwrap();
        assert!(matrix.risk_categories.is_empty());
    }

    #[rstest]
    #[case("Sorry, I cannot build a matrix right now.")]
    #[case(r#"{"matrix_data": {"context": "#)]
    #[case(r#"{"matrix_data": "pending", "response_text": "Working on it"}"#)]
    #[case(r#"["3x3"]"#)]
    fn unusable_responses_fall_back(#[case] text: &str) {
        let recommendation = normalize_matrix(text, MatrixSize::FourByFour, &profile());
        assert_eq!(recommendation.matrix, None);
        assert_eq!(recommendation.matrix_size, MatrixSize::FourByFour);
        assert_eq!(
            recommendation.response_text,
            "I've created a 4x4 risk matrix framework. The risk profile dashboard will show you \
             the standard risk categories with customizable scales."
        );
    }
}
