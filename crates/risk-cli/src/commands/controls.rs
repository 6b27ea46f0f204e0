use crate::cli::root_commands::InputArgs;
use crate::input::read_input;
use crate::output::output;

/// Handle `rkl controls`.
pub fn handle(args: &InputArgs) -> anyhow::Result<()> {
    let text = read_input(args.file.as_deref())?;
    output(&risk_parser::extract_controls(&text))
}
