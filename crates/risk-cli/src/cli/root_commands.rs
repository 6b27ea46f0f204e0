use std::path::PathBuf;

use clap::{Args, Subcommand};
use risk_core::enums::{MatrixSize, RiskMode};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Extract risk records from an LLM response.
    Risks(RisksArgs),
    /// Extract generated controls from an LLM response.
    Controls(InputArgs),
    /// Normalize a risk-matrix recommendation.
    Matrix(MatrixArgs),
    /// Read a sub-router decision from intent-classifier output.
    Intent {
        #[command(subcommand)]
        action: IntentCommands,
    },
    /// Print the active classification vocabulary.
    Vocabulary,
}

/// Response text source shared by every extractor command.
#[derive(Clone, Debug, Args)]
pub struct InputArgs {
    /// File holding the response text (stdin when omitted or `-`)
    pub file: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct RisksArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Also report which extraction tier produced the records
    #[arg(long)]
    pub show_tier: bool,
}

#[derive(Clone, Debug, Args)]
pub struct MatrixArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Requested size: 3x3, 4x4, 5x5 (defaults to matrix.default_size)
    #[arg(short, long)]
    pub size: Option<MatrixSize>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum IntentCommands {
    /// Risk sub-router: risk generation, register, matrix, or knowledge.
    Risk(RiskIntentArgs),
    /// Control sub-router: generate, library, knowledge, or clarify.
    Control(ControlIntentArgs),
}

#[derive(Clone, Debug, Args)]
pub struct RiskIntentArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// The user's message, checked for short follow-ups
    #[arg(long)]
    pub user_input: Option<String>,

    /// Mode of the previous turn (e.g. risk_register)
    #[arg(long)]
    pub active_mode: Option<RiskMode>,
}

#[derive(Clone, Debug, Args)]
pub struct ControlIntentArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// The user's message, used when the classifier omits parameters
    #[arg(long)]
    pub user_input: String,
}
