use std::io::IsTerminal;
use std::sync::OnceLock;

use risk_config::RisklineConfig;

use crate::cli::{GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub format: OutputFormat,
    pub table_color: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

/// Resolve output preferences from flags, then config, then the terminal.
pub fn init(flags: &GlobalFlags, config: &RisklineConfig) {
    let _ = UI_PREFS.set(resolve(flags, config, std::io::stdout().is_terminal()));
}

fn resolve(flags: &GlobalFlags, config: &RisklineConfig, is_tty: bool) -> UiPrefs {
    let format = flags
        .format
        .or_else(|| OutputFormat::from_config(&config.general.default_format))
        .unwrap_or(OutputFormat::Json);

    let table_color = config.general.table_color
        && is_tty
        && format == OutputFormat::Table
        && !flags.quiet
        && std::env::var_os("NO_COLOR").is_none();

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    UiPrefs {
        format,
        table_color,
        term_width,
    }
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        format: OutputFormat::Json,
        table_color: false,
        term_width: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(format: Option<OutputFormat>) -> GlobalFlags {
        GlobalFlags {
            format,
            quiet: false,
            config: None,
        }
    }

    #[test]
    fn flag_overrides_config_format() {
        let mut config = RisklineConfig::default();
        config.general.default_format = "raw".into();
        assert_eq!(resolve(&flags(None), &config, false).format, OutputFormat::Raw);
        assert_eq!(
            resolve(&flags(Some(OutputFormat::Table)), &config, false).format,
            OutputFormat::Table
        );
    }

    #[test]
    fn color_needs_a_terminal_and_table_output() {
        let config = RisklineConfig::default();
        assert!(!resolve(&flags(Some(OutputFormat::Table)), &config, false).table_color);
        assert!(!resolve(&flags(Some(OutputFormat::Json)), &config, true).table_color);
    }
}
