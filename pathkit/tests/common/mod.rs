//! Shared helpers for pathkit integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// A temporary directory tree addressed by canonical string paths.
///
/// Temp directories often live behind a symlink (`/tmp` on macOS), so
/// assertions compare against the canonical root.
pub struct Fixture {
    dir: TempDir,
    root: String,
}

impl Fixture {
    /// Create an empty fixture.
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let root = fs::canonicalize(dir.path())
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        Self { dir, root }
    }

    /// Canonical path of the fixture root.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Canonical path of `rel` below the root. Nothing is created.
    pub fn path(&self, rel: &str) -> String {
        format!("{}/{}", self.root, rel)
    }

    /// Create directory `rel` (and its parents) and return its path.
    pub fn mkdir(&self, rel: &str) -> String {
        let path = self.path(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Create file `rel` (and its parent directories) and return its path.
    pub fn touch(&self, rel: &str) -> String {
        let path = self.path(rel);
        if let Some(parent) = Path::new(&path).parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "").unwrap();
        path
    }

    /// Path of the fixture as handed out by the OS, before canonicalization.
    pub fn raw(&self) -> &Path {
        self.dir.path()
    }
}

/// Create a symlink at `link` pointing to `target`.
#[cfg(unix)]
pub fn symlink(target: &str, link: &str) {
    std::os::unix::fs::symlink(target, link).unwrap();
}
