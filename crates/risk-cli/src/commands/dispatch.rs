use risk_config::RisklineConfig;

use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, config: &RisklineConfig) -> anyhow::Result<()> {
    match command {
        Commands::Risks(args) => commands::risks::handle(&args, config),
        Commands::Controls(args) => commands::controls::handle(&args),
        Commands::Matrix(args) => commands::matrix::handle(&args, config),
        Commands::Intent { action } => commands::intent::handle(&action),
        Commands::Vocabulary => commands::vocabulary::handle(config),
    }
}
