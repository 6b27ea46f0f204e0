use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod input;
mod output;
mod ui;

fn main() {
    if let Err(error) = run() {
        eprintln!("rkl error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    let config = load_config(&flags)?;
    ui::init(&flags, &config);

    commands::dispatch::dispatch(cli.command, &config)
}

fn load_config(flags: &cli::GlobalFlags) -> anyhow::Result<risk_config::RisklineConfig> {
    let config = match &flags.config {
        Some(path) => {
            let _ = dotenvy::dotenv();
            risk_config::RisklineConfig::load_with_file(std::path::Path::new(path))
                .with_context(|| format!("failed to load config file {path}"))?
        }
        None => risk_config::RisklineConfig::load_with_dotenv()?,
    };
    config.validate()?;
    Ok(config)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("RISKLINE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
