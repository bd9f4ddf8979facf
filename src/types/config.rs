use crate::error::{CreditError, Result};
use crate::types::mode::EvaluationMode;
use serde::Deserialize;

pub const DEFAULT_ASSESSMENTS_FILE: &str = "assessments.json";
pub const DEFAULT_SETTINGS_FILE: &str = ".credit/settings.json";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreditConfig {
    pub evaluation: Option<EvaluationConfig>,
    pub storage: Option<StorageConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationConfig {
    pub default_mode: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub assessments_file: Option<String>,
    pub settings_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl CreditConfig {
    /// Site-wide fallback mode, `proportional` when unconfigured.
    pub fn default_mode(&self) -> Result<EvaluationMode> {
        match self
            .evaluation
            .as_ref()
            .and_then(|evaluation| evaluation.default_mode.as_deref())
        {
            Some(mode) => mode.parse(),
            None => Ok(EvaluationMode::default()),
        }
    }

    pub fn assessments_file(&self) -> &str {
        self.storage
            .as_ref()
            .and_then(|storage| storage.assessments_file.as_deref())
            .unwrap_or(DEFAULT_ASSESSMENTS_FILE)
    }

    pub fn settings_file(&self) -> &str {
        self.storage
            .as_ref()
            .and_then(|storage| storage.settings_file.as_deref())
            .unwrap_or(DEFAULT_SETTINGS_FILE)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
    }

    pub fn validate(&self) -> Result<()> {
        self.default_mode()?;

        for (key, value) in [
            ("storage.assessments_file", self.assessments_file()),
            ("storage.settings_file", self.settings_file()),
        ] {
            if value.trim().is_empty() {
                return Err(CreditError::ConfigParse(format!(
                    "{key} must be a non-empty path"
                )));
            }
        }

        if let Some(level) = self.log_level() {
            if !matches!(level, "error" | "warn" | "info" | "debug" | "trace") {
                return Err(CreditError::ConfigParse(format!(
                    "unsupported logging.level: {level}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config_uses_defaults() {
        let cfg: CreditConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(
            cfg.default_mode().expect("default mode should resolve"),
            EvaluationMode::Proportional
        );
        assert_eq!(cfg.assessments_file(), DEFAULT_ASSESSMENTS_FILE);
        assert_eq!(cfg.settings_file(), DEFAULT_SETTINGS_FILE);
        assert!(cfg.log_level().is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let cfg: CreditConfig = toml::from_str(
            r#"
[evaluation]
default_mode = "one"

[storage]
assessments_file = "data/rows.json"
settings_file = "state/settings.json"

[logging]
level = "debug"
"#,
        )
        .expect("config should parse");

        assert_eq!(
            cfg.default_mode().expect("mode should parse"),
            EvaluationMode::One
        );
        assert_eq!(cfg.assessments_file(), "data/rows.json");
        assert_eq!(cfg.settings_file(), "state/settings.json");
        assert_eq!(cfg.log_level(), Some("debug"));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn unknown_default_mode_is_invalid_mode() {
        let cfg: CreditConfig = toml::from_str(
            r#"
[evaluation]
default_mode = "best"
"#,
        )
        .expect("config should parse");

        assert!(matches!(
            cfg.validate(),
            Err(CreditError::InvalidMode(ref mode)) if mode == "best"
        ));
    }

    #[test]
    fn validate_rejects_empty_storage_path() {
        let cfg: CreditConfig = toml::from_str(
            r#"
[storage]
settings_file = "  "
"#,
        )
        .expect("config should parse");

        let err = cfg.validate().expect_err("blank path must fail");
        assert!(err.to_string().contains("storage.settings_file"));
    }

    #[test]
    fn validate_rejects_unknown_log_level() {
        let cfg: CreditConfig = toml::from_str(
            r#"
[logging]
level = "loud"
"#,
        )
        .expect("config should parse");

        assert!(matches!(cfg.validate(), Err(CreditError::ConfigParse(_))));
    }
}
