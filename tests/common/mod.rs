//! Common test utilities for integration tests
//!
//! Shared fixtures for tests that touch the real process environment.

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

use service_config::vars;

/// Every variable the loader reads, paired with `None` so `temp_env` unsets
/// them for the duration of a test and restores them afterwards.
pub fn all_unset() -> Vec<(&'static str, Option<&'static str>)> {
    vars::ALL.iter().map(|&name| (name, None)).collect()
}

/// `all_unset` with the given overrides applied
pub fn only(overrides: &[(&'static str, &'static str)]) -> Vec<(&'static str, Option<&'static str>)> {
    let mut vars = all_unset();
    for &(name, value) in overrides {
        match vars.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = Some(value),
            None => vars.push((name, Some(value))),
        }
    }
    vars
}

/// Write an env file into a fresh temporary directory
///
/// Returns the directory guard alongside the file path.
pub fn env_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(".env");
    std::fs::write(&path, contents).expect("Failed to write env file");
    (dir, path)
}
