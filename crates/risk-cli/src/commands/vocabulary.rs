use risk_config::RisklineConfig;

use crate::output::output;

/// Handle `rkl vocabulary`.
pub fn handle(config: &RisklineConfig) -> anyhow::Result<()> {
    output(&config.vocabulary())
}
