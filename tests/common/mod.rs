//! Shared test harness: isolated data directory plus a configured command.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated test environment with temporary data and config directories.
///
/// Every command runs with `--data-dir` pointing into the temp dir and
/// `XDG_CONFIG_HOME` redirected there, so tests never touch (or read)
/// the developer's real notes or config. Cleaned up on drop.
pub struct TestEnv {
    _temp_dir: TempDir,
    data_dir: PathBuf,
    config_home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp directory");
        let data_dir = temp_dir.path().join("data");
        let config_home = temp_dir.path().join("config");
        std::fs::create_dir_all(&config_home).expect("failed to create config home");
        Self {
            _temp_dir: temp_dir,
            data_dir,
            config_home,
        }
    }

    /// Creates an `inkr` command pointed at this environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("inkr").expect("binary builds");
        cmd.arg("--data-dir")
            .arg(&self.data_dir)
            .env("XDG_CONFIG_HOME", &self.config_home);
        cmd
    }

    /// Writes a config file the next command invocation will pick up.
    pub fn write_config(&self, contents: &str) {
        let dir = self.config_home.join("inkr");
        std::fs::create_dir_all(&dir).expect("failed to create config dir");
        std::fs::write(dir.join("config.toml"), contents).expect("failed to write config");
    }

    /// Creates a note and returns its id prefix, parsed from the
    /// `Created: … [PREFIX]` confirmation line.
    pub fn create_note(&self, content: &str) -> String {
        let output = self.cmd().args(["new", content]).output().expect("run new");
        assert!(output.status.success(), "new should succeed");
        let stdout = String::from_utf8(output.stdout).expect("utf8 output");
        let start = stdout.rfind('[').expect("confirmation includes id prefix");
        let end = stdout.rfind(']').expect("confirmation includes id prefix");
        stdout[start + 1..end].to_string()
    }
}
