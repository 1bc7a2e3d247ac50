//! Shared testing utilities for wrapcfg CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CONFIG_FILE_NAME: &str = "wrap.config.json";

/// Testing harness providing an isolated project directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `wrapcfg` binary in the project directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("wrapcfg").expect("Failed to locate wrapcfg binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Path to the config file in the project directory.
    pub fn config_path(&self) -> PathBuf {
        self.work_dir.join(CONFIG_FILE_NAME)
    }

    /// Write raw config file content.
    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write test config");
    }

    /// Read the config file back as a string.
    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).expect("Failed to read test config")
    }

    /// Create the web asset directory referenced by the config.
    pub fn create_web_dir(&self, name: &str) {
        fs::create_dir_all(self.work_dir.join(name)).expect("Failed to create web dir");
    }
}
