/*!
 * Common test utilities for the rawvtt test suite
 */

use std::path::PathBuf;
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample raw transcript file for testing
pub fn create_test_transcript(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    let content = "00:00:01\nThis is a test transcript.\n00:00:05\nIt contains multiple cues.\n00:00:10\nFor testing purposes.\n";
    create_test_file(dir, filename, content)
}
