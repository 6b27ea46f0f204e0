use anyhow::Context;
use risk_config::RisklineConfig;
use risk_parser::RiskExtractor;

use crate::cli::root_commands::RisksArgs;
use crate::input::read_input;
use crate::output::output;

/// Handle `rkl risks`.
pub fn handle(args: &RisksArgs, config: &RisklineConfig) -> anyhow::Result<()> {
    let extractor = RiskExtractor::new(&config.vocabulary())
        .context("configured vocabulary cannot be compiled")?;
    let text = read_input(args.input.file.as_deref())?;

    let extraction = extractor.extract_with_tier(&text);
    if extraction.risks.is_empty() {
        tracing::info!("no risks found in response");
    }

    if args.show_tier {
        output(&extraction)
    } else {
        output(&extraction.risks)
    }
}
