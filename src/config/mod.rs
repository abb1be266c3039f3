#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::runner::SAMPLE_WORDS;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use toml_config::TomlConfig;

pub const DEFAULT_WORD_LIST: &str = "words.txt";
pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

/// `words.txt` next to the running executable, or in the working directory
/// when the executable location is unknown.
pub fn default_word_list_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_WORD_LIST)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_WORD_LIST))
}

/// Effective settings after merging defaults, the TOML file and CLI overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub word_list_path: String,
    pub words: Vec<String>,
    pub cancel_after_ms: Option<u64>,
    pub output_format: String,
    pub monitoring: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            word_list_path: default_word_list_path().display().to_string(),
            words: SAMPLE_WORDS.iter().map(|w| w.to_string()).collect(),
            cancel_after_ms: None,
            output_format: "text".to_string(),
            monitoring: false,
        }
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        let mut settings = Self::default();
        if let Some(path) = config.word_list_path() {
            settings.word_list_path = path.to_string();
        }
        if let Some(words) = config.words() {
            settings.words = words.to_vec();
        }
        if let Some(format) = config.output_format() {
            settings.output_format = format.to_string();
        }
        settings.cancel_after_ms = config.cancel_after_ms();
        settings.monitoring = config.monitoring_enabled();
        settings
    }
}

impl ConfigProvider for Settings {
    fn word_list_path(&self) -> &str {
        &self.word_list_path
    }

    fn words(&self) -> &[String] {
        &self.words
    }

    fn cancel_after_ms(&self) -> Option<u64> {
        self.cancel_after_ms
    }

    fn output_format(&self) -> &str {
        &self.output_format
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("word_list.path", &self.word_list_path)?;
        validation::validate_words("query.words", &self.words)?;
        validation::validate_one_of("output.format", &self.output_format, &OUTPUT_FORMATS)?;
        if let Some(ms) = self.cancel_after_ms {
            validation::validate_positive_number("query.cancel_after_ms", ms, 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_sample_words() {
        let settings = Settings::default();
        assert_eq!(settings.words.len(), SAMPLE_WORDS.len());
        assert!(settings.word_list_path.ends_with(DEFAULT_WORD_LIST));
        assert_eq!(settings.output_format, "text");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_from_toml_overrides_defaults() {
        let config = TomlConfig::from_toml_str(
            r#"
[word_list]
path = "other.txt"

[query]
cancel_after_ms = 250
"#,
        )
        .unwrap();

        let settings = Settings::from_toml(&config);
        assert_eq!(settings.word_list_path, "other.txt");
        assert_eq!(settings.cancel_after_ms, Some(250));
        assert_eq!(settings.words.len(), SAMPLE_WORDS.len());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let settings = Settings {
            output_format: "xml".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            cancel_after_ms: Some(0),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            words: vec![],
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
