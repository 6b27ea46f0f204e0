//! ID formatting helpers.
//!
//! Risk IDs are synthesized per extraction call as `risk-<n>` (1-based, dense).
//! Control IDs follow the `C-<nnn>` convention used in generated control sets.
//! Neither carries meaning across calls.

/// Prefix for synthesized risk IDs.
pub const PREFIX_RISK: &str = "risk";

/// Prefix for synthesized control IDs.
pub const PREFIX_CONTROL: &str = "C";

/// Format a risk ID from its 1-based position in an extraction result.
#[must_use]
pub fn risk_id(position: usize) -> String {
    format!("{PREFIX_RISK}-{position}")
}

/// Format a control ID from its 1-based position, zero-padded to three digits.
#[must_use]
pub fn control_id(position: usize) -> String {
    format!("{PREFIX_CONTROL}-{position:03}")
}
