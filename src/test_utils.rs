//! Test utilities for building temporary media trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add an empty file, creating parent directories as needed.
    pub fn add_file(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, b"").expect("Failed to write file");
        full_path
    }

    /// Add a directory (and any missing parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Populate a tree `depth` levels deep with `per_dir` matching files per level.
    pub fn populate(&self, depth: usize, per_dir: usize, suffix: &str) -> usize {
        let mut dir = String::new();
        let mut created = 0;
        for level in 0..depth {
            for i in 0..per_dir {
                self.add_file(&format!("{}file_{}{}", dir, i, suffix));
                self.add_file(&format!("{}skip_{}.txt", dir, i));
                created += 1;
            }
            dir.push_str(&format!("level_{}/", level));
        }
        created
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
