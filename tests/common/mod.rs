//! Shared helpers for integration tests.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment with its own config, data and log locations.
///
/// The temp directory is removed when the TestEnv is dropped.
pub struct TestEnv {
    temp_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn log_path(&self) -> PathBuf {
        self.root().join("zettl.log")
    }

    /// Creates a plain file so paths beneath it cannot be created.
    pub fn blocker(&self) -> PathBuf {
        let path = self.root().join("blocker");
        std::fs::write(&path, "a file, not a directory").expect("Failed to write blocker");
        path
    }

    /// Writes a config file where the binary will look for it.
    pub fn write_config(&self, contents: &str) {
        let dir = self.root().join("config").join("zettl");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        std::fs::write(dir.join("config.toml"), contents).expect("Failed to write config");
    }

    /// Returns a command for the binary with XDG paths pointed into the env.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("zettl").expect("binary should build");
        cmd.env("XDG_CONFIG_HOME", self.root().join("config"))
            .env("XDG_DATA_HOME", self.root().join("data-home"))
            .env_remove("RUST_LOG");
        cmd
    }
}
