//! # risk-config
//!
//! Layered configuration loading for Riskline using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`RISKLINE_*` prefix, `__` as separator)
//! 2. An explicit file passed by the caller (the CLI's `--config`)
//! 3. Project-level `.riskline/config.toml`
//! 4. User-level `~/.config/riskline/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `RISKLINE_EXTRACTION__MAX_SENTENCE_RECORDS` -> `extraction.max_sentence_records`,
//! `RISKLINE_MATRIX__DEFAULT_SIZE` -> `matrix.default_size`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use risk_config::RisklineConfig;
//!
//! let config = RisklineConfig::load_with_dotenv().expect("config");
//! config.validate().expect("valid config");
//!
//! let vocabulary = config.vocabulary();
//! println!("fallback category: {}", vocabulary.fallback_category);
//! ```

mod error;
mod extraction;
mod general;
mod matrix;

pub use error::ConfigError;
pub use extraction::ExtractionConfig;
pub use general::GeneralConfig;
pub use matrix::MatrixConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use risk_core::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RisklineConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub vocabulary: Vocabulary,
    #[serde(default)]
    pub matrix: MatrixConfig,
}

impl RisklineConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with an extra TOML file layered above the
    /// project config and below the environment.
    pub fn load_with_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }
        Self::base_figment()
            .merge(Toml::file(path))
            .merge(Self::env_provider())
            .extract()
            .map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads `.env` from the current directory (if present) before building
    /// the figment. This is the typical entry point for the CLI.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        Self::base_figment().merge(Self::env_provider())
    }

    /// Defaults plus the user-global and project-local TOML layers.
    fn base_figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".riskline/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
    }

    fn env_provider() -> Env {
        Env::prefixed("RISKLINE_").split("__")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("riskline").join("config.toml"))
    }

    /// The vocabulary with the `[extraction]` limits applied.
    #[must_use]
    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary {
            limits: self.extraction.limits(),
            ..self.vocabulary.clone()
        }
    }

    /// Check cross-field constraints figment cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.general.has_known_format() {
            return Err(ConfigError::InvalidValue {
                field: "general.default_format".into(),
                reason: format!(
                    "'{}' is not one of json, table, raw",
                    self.general.default_format
                ),
            });
        }
        if self.extraction.max_sentence_records == 0 {
            return Err(ConfigError::InvalidValue {
                field: "extraction.max_sentence_records".into(),
                reason: "must be at least 1".into(),
            });
        }
        self.vocabulary()
            .validate()
            .map_err(|error| ConfigError::InvalidValue {
                field: "vocabulary".into(),
                reason: error.to_string(),
            })
    }
}
