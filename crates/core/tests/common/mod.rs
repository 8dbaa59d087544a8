//! Common test utilities

use std::path::PathBuf;
use tempfile::TempDir;

/// Write `content` to `name` inside a fresh temporary directory
pub fn write_input(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write input file");
    (dir, path)
}
