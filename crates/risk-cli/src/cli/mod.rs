use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `rkl` binary.
#[derive(Debug, Parser)]
#[command(
    name = "rkl",
    version,
    about = "Riskline - structured risks, controls, and matrices from LLM responses"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to general.default_format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra TOML config layered above the project config
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use risk_core::enums::{MatrixSize, RiskMode};

    use super::{Cli, Commands, OutputFormat};
    use crate::cli::root_commands::IntentCommands;

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::try_parse_from(["rkl", "risks", "reply.txt", "--format", "table", "-v"])
            .expect("should parse");
        assert_eq!(cli.format, Some(OutputFormat::Table));
        assert!(cli.verbose);
        let Commands::Risks(args) = cli.command else {
            panic!("expected risks");
        };
        assert_eq!(args.input.file.as_deref(), Some(std::path::Path::new("reply.txt")));
    }

    #[test]
    fn format_defaults_to_config() {
        let cli = Cli::try_parse_from(["rkl", "vocabulary"]).expect("should parse");
        assert_eq!(cli.format, None);
        assert_eq!(OutputFormat::from_config("Table"), Some(OutputFormat::Table));
        assert_eq!(OutputFormat::from_config("yaml"), None);
    }

    #[test]
    fn matrix_size_is_validated() {
        let cli = Cli::try_parse_from(["rkl", "matrix", "--size", "4x4"]).expect("should parse");
        let Commands::Matrix(args) = cli.command else {
            panic!("expected matrix");
        };
        assert_eq!(args.size, Some(MatrixSize::FourByFour));
        assert!(Cli::try_parse_from(["rkl", "matrix", "--size", "6x6"]).is_err());
    }

    #[test]
    fn intent_subcommands_parse() {
        let cli = Cli::try_parse_from([
            "rkl",
            "intent",
            "risk",
            "--user-input",
            "only high ones",
            "--active-mode",
            "risk_register_node",
        ])
        .expect("should parse");
        let Commands::Intent { action: IntentCommands::Risk(args) } = cli.command else {
            panic!("expected intent risk");
        };
        assert_eq!(args.active_mode, Some(RiskMode::RiskRegister));
        assert_eq!(args.user_input.as_deref(), Some("only high ones"));

        assert!(
            Cli::try_parse_from(["rkl", "intent", "control", "classifier.json"]).is_err(),
            "control routing needs --user-input"
        );
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["rkl", "risks", "--format", "yaml"]).is_err());
    }
}
