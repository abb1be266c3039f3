use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "word-count")]
#[command(about = "Count how many times a word appears in a newline-delimited word list")]
pub struct CliConfig {
    /// Words to look up; the built-in sample words are used when none are given
    pub words: Vec<String>,

    /// Word list file (defaults to words.txt next to the executable)
    #[arg(short, long)]
    pub word_list: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Cancel each query after this many milliseconds
    #[arg(long)]
    pub cancel_after_ms: Option<u64>,

    /// Output format: text or json
    #[arg(long)]
    pub format: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Log process memory while scanning")]
    pub monitor: bool,

    #[arg(long, help = "Exit with an error if the word list cannot be read")]
    pub strict: bool,
}

impl CliConfig {
    /// 合併 TOML 配置與命令列覆蓋設定
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                Settings::from_toml(&TomlConfig::from_file(path)?)
            }
            None => Settings::default(),
        };

        if let Some(path) = &self.word_list {
            settings.word_list_path = path.clone();
        }
        if !self.words.is_empty() {
            settings.words = self.words.clone();
        }
        if let Some(ms) = self.cancel_after_ms {
            settings.cancel_after_ms = Some(ms);
        }
        if let Some(format) = &self.format {
            settings.output_format = format.clone();
        }
        settings.monitoring |= self.monitor;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_words_and_flags() {
        let cli = CliConfig::parse_from([
            "word-count",
            "AAA",
            "swim",
            "--word-list",
            "list.txt",
            "--cancel-after-ms",
            "100",
        ]);
        let settings = cli.settings().unwrap();

        assert_eq!(settings.words, vec!["AAA".to_string(), "swim".to_string()]);
        assert_eq!(settings.word_list_path, "list.txt");
        assert_eq!(settings.cancel_after_ms, Some(100));
    }

    #[test]
    fn test_cli_overrides_toml() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            b"[word_list]\npath = \"from-file.txt\"\n\n[query]\nwords = [\"magic\"]\n\n[output]\nformat = \"json\"\n",
        )
        .unwrap();
        let config_path = file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from(["word-count", "--config", config_path.as_str(), "--format", "text"]);
        let settings = cli.settings().unwrap();

        assert_eq!(settings.word_list_path, "from-file.txt");
        assert_eq!(settings.words, vec!["magic".to_string()]);
        assert_eq!(settings.output_format, "text");
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = CliConfig::parse_from(["word-count", "--config", "/nonexistent/word-count.toml"]);
        assert!(cli.settings().is_err());
    }
}
