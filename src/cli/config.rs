//! Configuration file support.

use crate::store::DEFAULT_UNDO_WINDOW_SECS;
use anyhow::{Context, Result};
use chrono::Duration;
use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Directory holding the persisted note and preference blobs
    pub data_dir: Option<PathBuf>,

    /// Override for the undo window, in seconds
    pub undo_secs: Option<i64>,
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
    /// Default: `~/.config/inkr/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("inkr")
            .join("config.toml")
    }

    /// Resolve the data directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--data-dir` argument
    /// 2. Config file `data_dir` setting
    /// 3. Platform data dir (`~/.local/share/inkr` on Linux)
    pub fn data_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.data_dir.clone())
            .unwrap_or_else(|| {
                dirs::data_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("inkr")
            })
    }

    /// The undo window to run with, config override applied.
    pub fn undo_window(&self) -> Duration {
        Duration::seconds(self.undo_secs.unwrap_or(DEFAULT_UNDO_WINDOW_SECS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_has_no_data_dir() {
        let config = Config::default();
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn data_dir_prefers_cli_arg() {
        let config = Config {
            data_dir: Some(PathBuf::from("/config/inkr")),
            undo_secs: None,
        };
        let cli_dir = PathBuf::from("/cli/inkr");
        assert_eq!(config.data_dir(Some(&cli_dir)), PathBuf::from("/cli/inkr"));
    }

    #[test]
    fn data_dir_falls_back_to_config() {
        let config = Config {
            data_dir: Some(PathBuf::from("/config/inkr")),
            undo_secs: None,
        };
        assert_eq!(config.data_dir(None), PathBuf::from("/config/inkr"));
    }

    #[test]
    fn undo_window_defaults_to_five_seconds() {
        assert_eq!(Config::default().undo_window(), Duration::seconds(5));
    }

    #[test]
    fn undo_window_honors_override() {
        let config = Config {
            data_dir: None,
            undo_secs: Some(30),
        };
        assert_eq!(config.undo_window(), Duration::seconds(30));
    }

    #[test]
    fn config_path_is_in_config_dir() {
        let path = Config::config_path();
        assert!(path.ends_with("inkr/config.toml"));
    }

    #[test]
    fn parses_toml_fields() {
        let config: Config = toml::from_str("data_dir = \"/tmp/notes\"\nundo_secs = 10\n").unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/notes")));
        assert_eq!(config.undo_secs, Some(10));
    }
}
