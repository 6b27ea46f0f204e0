use risk_config::RisklineConfig;

use crate::cli::root_commands::MatrixArgs;
use crate::input::read_input;
use crate::output::output;

/// Handle `rkl matrix`.
pub fn handle(args: &MatrixArgs, config: &RisklineConfig) -> anyhow::Result<()> {
    let size = args.size.unwrap_or(config.matrix.default_size);
    let text = read_input(args.input.file.as_deref())?;
    let recommendation = risk_parser::normalize_matrix(&text, size, &config.matrix.context(size));
    output(&recommendation)
}
