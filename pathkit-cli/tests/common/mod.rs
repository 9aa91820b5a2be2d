//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builders isolated from the user's configuration

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated home directory.
///
/// `HOME` points at an empty directory so no user configuration leaks into
/// a test, and the marker environment variables are cleared.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path of the temporary directory
    pub temp_path: PathBuf,
    /// Fake home directory
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        let home = temp_path.join("home");
        std::fs::create_dir_all(&home).expect("Failed to create fake home");

        Self {
            temp_dir,
            temp_path,
            home,
        }
    }

    /// Get a command builder with an isolated environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathkit").expect("Failed to find pathkit binary");
        cmd.env("HOME", &self.home)
            .env_remove("PATHKIT_MARKERS")
            .env_remove("PATHKIT_EXTRA_MARKERS")
            .env_remove("PATHKIT_CONFIG")
            .env_remove("PATHKIT_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment and return its path.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file (and its parents) in the test environment.
    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// String form of a path inside the environment.
    pub fn str(&self, name: &str) -> String {
        self.temp_path.join(name).to_str().unwrap().to_string()
    }
}
