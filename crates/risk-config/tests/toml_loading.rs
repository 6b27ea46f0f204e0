//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and cwd manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use risk_config::RisklineConfig;
use risk_core::enums::MatrixSize;

#[test]
fn loads_extraction_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[extraction]
min_description_chars = 15
min_sentence_chars = 30
max_sentence_records = 5
"#,
        )?;

        let config: RisklineConfig = Figment::from(Serialized::defaults(RisklineConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.extraction.min_description_chars, 15);
        assert_eq!(config.extraction.min_sentence_chars, 30);
        assert_eq!(config.extraction.max_sentence_records, 5);
        assert_eq!(config.vocabulary().limits.min_sentence_chars, 30);
        Ok(())
    });
}

#[test]
fn loads_vocabulary_overrides_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[vocabulary]
fallback_category = "General Risk"
default_treatment = "Escalate to the risk committee."

[[vocabulary.categories]]
name = "Privacy Risk"
keywords = ["personal data", "privacy"]

[[vocabulary.categories]]
name = "General Risk"
keywords = ["risk"]
"#,
        )?;

        let config: RisklineConfig = Figment::from(Serialized::defaults(RisklineConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        let names: Vec<_> = config
            .vocabulary
            .categories
            .iter()
            .map(|rule| rule.name.as_str())
            .collect();
        assert_eq!(names, ["Privacy Risk", "General Risk"]);
        assert_eq!(config.vocabulary.fallback_category, "General Risk");
        assert_eq!(
            config.vocabulary.default_treatment,
            "Escalate to the risk committee."
        );
        // Untouched tables keep their defaults.
        assert_eq!(config.vocabulary.impact.levels.len(), 4);
        assert!(config.validate().is_ok());
        Ok(())
    });
}

#[test]
fn loads_matrix_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[matrix]
default_size = "4x4"
organization_name = "Acme Logistics"
location = "Rotterdam"
domain = "Shipping"
"#,
        )?;

        let config: RisklineConfig = Figment::from(Serialized::defaults(RisklineConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.matrix.default_size, MatrixSize::FourByFour);
        assert_eq!(config.matrix.organization_name, "Acme Logistics");
        assert_eq!(config.matrix.location, "Rotterdam");
        assert_eq!(config.matrix.domain, "Shipping");
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".riskline")?;
        jail.create_file(
            ".riskline/config.toml",
            r#"
[general]
default_format = "table"
table_color = false
"#,
        )?;

        let config = RisklineConfig::load().expect("config loads");
        assert_eq!(config.general.default_format, "table");
        assert!(!config.general.table_color);
        Ok(())
    });
}

#[test]
fn explicit_file_overrides_project_config() {
    Jail::expect_with(|jail| {
        jail.create_dir(".riskline")?;
        jail.create_file(
            ".riskline/config.toml",
            r#"
[extraction]
max_sentence_records = 4
min_sentence_chars = 25
"#,
        )?;
        jail.create_file(
            "override.toml",
            r#"
[extraction]
max_sentence_records = 2
"#,
        )?;

        let config = RisklineConfig::load_with_file(std::path::Path::new("override.toml"))
            .expect("config loads");
        assert_eq!(config.extraction.max_sentence_records, 2);
        assert_eq!(config.extraction.min_sentence_chars, 25);
        Ok(())
    });
}

#[test]
fn invalid_vocabulary_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[vocabulary]
default_level = "Severe"
"#,
        )?;

        let config: RisklineConfig = Figment::from(Serialized::defaults(RisklineConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("vocabulary"));
        Ok(())
    });
}
