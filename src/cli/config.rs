//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::tui::DEFAULT_TAG;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Database file
    pub db_path: Option<PathBuf>,

    /// Tag given to notes created in the editor
    pub default_tag: Option<String>,

    /// Where log output is written
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/zettl/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("zettl")
            .join("config.toml")
    }

    /// Returns the directory holding the database and log by default.
    ///
    /// Default: `~/.local/share/zettl`
    pub fn data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("zettl")
    }

    /// Resolve the database path, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--db` argument
    /// 2. Config file `db_path` setting
    /// 3. `zettl.db` in the data directory
    pub fn db_path(&self, cli_db: Option<&PathBuf>) -> PathBuf {
        cli_db
            .cloned()
            .or_else(|| self.db_path.clone())
            .unwrap_or_else(|| Self::data_dir().join("zettl.db"))
    }

    /// Resolve the log file path.
    ///
    /// Precedence order:
    /// 1. CLI `--log-file` argument
    /// 2. Config file `log_file` setting
    /// 3. `zettl.log` in the data directory
    pub fn log_file(&self, cli_log: Option<&PathBuf>) -> PathBuf {
        cli_log
            .cloned()
            .or_else(|| self.log_file.clone())
            .unwrap_or_else(|| Self::data_dir().join("zettl.log"))
    }

    /// Resolve the tag for new notes, falling back to `notebook`.
    pub fn default_tag(&self) -> &str {
        self.default_tag.as_deref().unwrap_or(DEFAULT_TAG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_empty() {
        let config = Config::default();
        assert!(config.db_path.is_none());
        assert!(config.default_tag.is_none());
        assert!(config.log_file.is_none());
    }

    #[test]
    fn db_path_prefers_cli_arg() {
        let config = Config {
            db_path: Some(PathBuf::from("/config/notes.db")),
            ..Config::default()
        };
        let cli_db = PathBuf::from("/cli/notes.db");
        assert_eq!(config.db_path(Some(&cli_db)), PathBuf::from("/cli/notes.db"));
    }

    #[test]
    fn db_path_falls_back_to_config() {
        let config = Config {
            db_path: Some(PathBuf::from("/config/notes.db")),
            ..Config::default()
        };
        assert_eq!(config.db_path(None), PathBuf::from("/config/notes.db"));
    }

    #[test]
    fn db_path_falls_back_to_data_dir() {
        let config = Config::default();
        let path = config.db_path(None);
        assert!(path.ends_with("zettl/zettl.db"));
    }

    #[test]
    fn log_file_precedence() {
        let config = Config {
            log_file: Some(PathBuf::from("/config/zettl.log")),
            ..Config::default()
        };
        let cli_log = PathBuf::from("/cli/zettl.log");

        assert_eq!(config.log_file(Some(&cli_log)), cli_log);
        assert_eq!(config.log_file(None), PathBuf::from("/config/zettl.log"));
        assert!(Config::default().log_file(None).ends_with("zettl/zettl.log"));
    }

    #[test]
    fn default_tag_falls_back_to_notebook() {
        assert_eq!(Config::default().default_tag(), "notebook");

        let config = Config {
            default_tag: Some("inbox".to_string()),
            ..Config::default()
        };
        assert_eq!(config.default_tag(), "inbox");
    }

    #[test]
    fn parses_toml() {
        let config: Config = toml::from_str(
            r#"
            db_path = "/tmp/notes.db"
            default_tag = "journal"
            "#,
        )
        .unwrap();

        assert_eq!(config.db_path, Some(PathBuf::from("/tmp/notes.db")));
        assert_eq!(config.default_tag.as_deref(), Some("journal"));
        assert!(config.log_file.is_none());
    }

    #[test]
    fn rejects_unknown_value_types() {
        let result: Result<Config, _> = toml::from_str("default_tag = 42");
        assert!(result.is_err());
    }

    #[test]
    fn config_path_is_in_config_dir() {
        let path = Config::config_path();
        assert!(path.ends_with("zettl/config.toml"));
    }
}
