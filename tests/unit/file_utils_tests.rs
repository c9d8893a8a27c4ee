/*!
 * Tests for file utility functions
 */

use std::path::Path;
use anyhow::Result;
use rawvtt::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file =
        common::create_test_file(&temp_dir.path().to_path_buf(), "exists.txt", "content")?;

    assert!(FileManager::file_exists(&test_file));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that dir_exists returns true for existing directories
#[test]
fn test_dir_exists_withExistingDir_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    assert!(FileManager::dir_exists(temp_dir.path()));
    Ok(())
}

/// Test that dir_exists returns false for non-existent directories
#[test]
fn test_dir_exists_withNonExistentDir_shouldReturnFalse() {
    assert!(!FileManager::dir_exists("./non_existent_directory_12345"));
}

/// Test that the output path appends the extension to the full filename
#[test]
fn test_generate_output_path_withTxtInput_shouldAppendExtension() {
    let output = FileManager::generate_output_path(Path::new("/tmp/input/talk.txt"), "vtt");
    assert_eq!(output, Path::new("/tmp/input/talk.txt.vtt"));
}

/// Test that find_files only returns files with the requested extension
#[test]
fn test_find_files_withMixedExtensions_shouldFilterByExtension() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_test_file(&dir, "a.txt", "a")?;
    common::create_test_file(&dir, "b.txt", "b")?;
    common::create_test_file(&dir, "c.vtt", "c")?;

    let mut found = FileManager::find_files(&dir, "txt")?;
    found.sort();

    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|p| p.extension().unwrap() == "txt"));

    Ok(())
}

/// Test writing then reading a file back
#[test]
fn test_write_and_read_withRoundTrip_shouldPreserveContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("nested/dir/out.txt");

    FileManager::write_to_file(&path, "round trip")?;
    assert_eq!(FileManager::read_to_string(&path)?, "round trip");

    Ok(())
}
