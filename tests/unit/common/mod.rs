//! Shared test fixtures and helpers
//!
//! This module provides a scratch directory for comment file tests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory holding comment files
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create an empty scratch directory
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Get the root path of the scratch directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of `name` inside the directory (not created)
    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `content` to `name` and return its path
    pub fn add_file(&self, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.file(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Read `name` back as bytes
    pub fn read(&self, name: &str) -> Vec<u8> {
        fs::read(self.file(name)).unwrap()
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
