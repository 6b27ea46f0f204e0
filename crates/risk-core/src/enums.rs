//! Routing modes, matrix sizes, and control sub-domains for Riskline.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`,
//! except [`MatrixSize`] which serializes as the `RxC` string the UI expects.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// RiskMode
// ---------------------------------------------------------------------------

/// Destination chosen by the risk sub-router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskMode {
    RiskGeneration,
    RiskRegister,
    MatrixRecommendation,
    RiskKnowledge,
}

impl RiskMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RiskGeneration => "risk_generation",
            Self::RiskRegister => "risk_register",
            Self::MatrixRecommendation => "matrix_recommendation",
            Self::RiskKnowledge => "risk_knowledge",
        }
    }
}

impl fmt::Display for RiskMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskMode {
    type Err = CoreError;

    /// Accepts the intent name with or without the `_node` suffix the chat
    /// graph uses for its active-mode bookkeeping.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        let name = normalized.strip_suffix("_node").unwrap_or(&normalized);
        match name {
            "risk_generation" => Ok(Self::RiskGeneration),
            "risk_register" => Ok(Self::RiskRegister),
            "matrix_recommendation" => Ok(Self::MatrixRecommendation),
            "risk_knowledge" => Ok(Self::RiskKnowledge),
            _ => Err(CoreError::UnknownVariant {
                kind: "risk mode",
                value: value.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// MatrixSize
// ---------------------------------------------------------------------------

/// Supported risk-assessment matrix dimensions.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum MatrixSize {
    #[serde(rename = "3x3")]
    ThreeByThree,
    #[serde(rename = "4x4")]
    FourByFour,
    #[default]
    #[serde(rename = "5x5")]
    FiveByFive,
}

impl MatrixSize {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ThreeByThree => "3x3",
            Self::FourByFour => "4x4",
            Self::FiveByFive => "5x5",
        }
    }

    /// Number of likelihood levels (rows).
    #[must_use]
    pub const fn rows(self) -> usize {
        match self {
            Self::ThreeByThree => 3,
            Self::FourByFour => 4,
            Self::FiveByFive => 5,
        }
    }

    /// Number of impact levels (columns).
    #[must_use]
    pub const fn cols(self) -> usize {
        self.rows()
    }

    /// Snap an arbitrary `RxC` string to the nearest supported size.
    ///
    /// The average of rows and columns decides: `<= 3.5` → 3x3, `<= 4.5` → 4x4,
    /// anything larger → 5x5. Returns `None` when the string is not `RxC`.
    #[must_use]
    pub fn snap(value: &str) -> Option<Self> {
        let lower = value.trim().to_ascii_lowercase();
        let (rows, cols) = lower.split_once('x')?;
        let rows: u32 = rows.trim().parse().ok()?;
        let cols: u32 = cols.trim().parse().ok()?;
        // Compare doubled sums to keep the thresholds exact in integers.
        let doubled_avg = rows.saturating_add(cols);
        Some(if doubled_avg <= 7 {
            Self::ThreeByThree
        } else if doubled_avg <= 9 {
            Self::FourByFour
        } else {
            Self::FiveByFive
        })
    }
}

impl fmt::Display for MatrixSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatrixSize {
    type Err = CoreError;

    /// Strict parse: only the three supported sizes are accepted.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "3x3" => Ok(Self::ThreeByThree),
            "4x4" => Ok(Self::FourByFour),
            "5x5" => Ok(Self::FiveByFive),
            _ => Err(CoreError::UnknownVariant {
                kind: "matrix size",
                value: value.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// ControlSubDomain
// ---------------------------------------------------------------------------

/// Sub-domain targeted by the control sub-router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ControlSubDomain {
    GenerateControl,
    ControlLibrary,
    ControlKnowledge,
}

impl ControlSubDomain {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GenerateControl => "generate_control",
            Self::ControlLibrary => "control_library",
            Self::ControlKnowledge => "control_knowledge",
        }
    }
}

impl fmt::Display for ControlSubDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControlSubDomain {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "generate_control" => Ok(Self::GenerateControl),
            "control_library" => Ok(Self::ControlLibrary),
            "control_knowledge" => Ok(Self::ControlKnowledge),
            _ => Err(CoreError::UnknownVariant {
                kind: "control sub-domain",
                value: value.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// GenerationMode
// ---------------------------------------------------------------------------

/// How control generation selects the risks it covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    #[default]
    All,
    Category,
    RiskId,
    RiskDescription,
}

impl GenerationMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Category => "category",
            Self::RiskId => "risk_id",
            Self::RiskDescription => "risk_description",
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenerationMode {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "category" => Ok(Self::Category),
            "risk_id" => Ok(Self::RiskId),
            "risk_description" => Ok(Self::RiskDescription),
            _ => Err(CoreError::UnknownVariant {
                kind: "generation mode",
                value: value.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(
        mode_matrix,
        RiskMode,
        RiskMode::MatrixRecommendation,
        "matrix_recommendation"
    );
    test_serde_roundtrip!(size_three, MatrixSize, MatrixSize::ThreeByThree, "3x3");
    test_serde_roundtrip!(size_five, MatrixSize, MatrixSize::FiveByFive, "5x5");
    test_serde_roundtrip!(
        sub_domain_library,
        ControlSubDomain,
        ControlSubDomain::ControlLibrary,
        "control_library"
    );
    test_serde_roundtrip!(
        generation_risk_id,
        GenerationMode,
        GenerationMode::RiskId,
        "risk_id"
    );

    #[test]
    fn risk_mode_accepts_node_suffix() {
        assert_eq!(
            "risk_register_node".parse::<RiskMode>().unwrap(),
            RiskMode::RiskRegister
        );
        assert_eq!(
            "Risk_Knowledge".parse::<RiskMode>().unwrap(),
            RiskMode::RiskKnowledge
        );
        assert!("dashboard".parse::<RiskMode>().is_err());
    }

    #[test]
    fn matrix_size_snaps_by_average() {
        assert_eq!(MatrixSize::snap("3x4"), Some(MatrixSize::ThreeByThree));
        assert_eq!(MatrixSize::snap("4x5"), Some(MatrixSize::FourByFour));
        assert_eq!(MatrixSize::snap("6x6"), Some(MatrixSize::FiveByFive));
        assert_eq!(MatrixSize::snap("2X2"), Some(MatrixSize::ThreeByThree));
        assert_eq!(MatrixSize::snap("five"), None);
        assert_eq!(MatrixSize::snap("5x"), None);
    }

    #[test]
    fn matrix_size_snap_saturates_huge_dimensions() {
        assert_eq!(
            MatrixSize::snap("4294967295x4294967295"),
            Some(MatrixSize::FiveByFive)
        );
        assert_eq!(MatrixSize::snap("4294967296x3"), None);
    }

    #[test]
    fn matrix_size_strict_parse() {
        assert_eq!("4x4".parse::<MatrixSize>().unwrap(), MatrixSize::FourByFour);
        assert!("4x5".parse::<MatrixSize>().is_err());
        assert_eq!(MatrixSize::FourByFour.rows(), 4);
        assert_eq!(MatrixSize::FourByFour.cols(), 4);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", RiskMode::RiskGeneration), "risk_generation");
        assert_eq!(format!("{}", MatrixSize::FourByFour), "4x4");
        assert_eq!(
            format!("{}", ControlSubDomain::GenerateControl),
            "generate_control"
        );
        assert_eq!(
            format!("{}", GenerationMode::RiskDescription),
            "risk_description"
        );
    }
}
