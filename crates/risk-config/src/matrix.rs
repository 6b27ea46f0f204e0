//! Risk matrix defaults.

use risk_core::entities::MatrixContext;
use risk_core::enums::MatrixSize;
use serde::{Deserialize, Serialize};

/// Fallback organization context used when a recommendation omits it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatrixConfig {
    /// Size requested when the caller does not specify one.
    #[serde(default)]
    pub default_size: MatrixSize,

    #[serde(default = "default_organization")]
    pub organization_name: String,

    #[serde(default = "default_location")]
    pub location: String,

    #[serde(default = "default_domain")]
    pub domain: String,
}

fn default_organization() -> String {
    String::from("your organization")
}

fn default_location() -> String {
    String::from("your location")
}

fn default_domain() -> String {
    String::from("your industry")
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            default_size: MatrixSize::default(),
            organization_name: default_organization(),
            location: default_location(),
            domain: default_domain(),
        }
    }
}

impl MatrixConfig {
    /// Context handed to the matrix normalizer for the given size.
    #[must_use]
    pub fn context(&self, size: MatrixSize) -> MatrixContext {
        MatrixContext {
            organization_name: self.organization_name.clone(),
            location: self.location.clone(),
            domain: self.domain.clone(),
            matrix_size: size,
        }
    }
}
