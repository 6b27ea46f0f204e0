use crate::cli::root_commands::IntentCommands;
use crate::input::read_input;
use crate::output::output;

/// Handle `rkl intent`.
pub fn handle(action: &IntentCommands) -> anyhow::Result<()> {
    match action {
        IntentCommands::Risk(args) => {
            // A sticky follow-up needs no classifier output at all.
            if let Some(user_input) = &args.user_input {
                if let Some(intent) = risk_parser::sticky_risk_mode(user_input, args.active_mode) {
                    return output(&intent);
                }
            }
            let text = read_input(args.input.file.as_deref())?;
            output(&risk_parser::parse_risk_intent(&text))
        }
        IntentCommands::Control(args) => {
            let text = read_input(args.input.file.as_deref())?;
            output(&risk_parser::parse_control_intent(&text, &args.user_input))
        }
    }
}
