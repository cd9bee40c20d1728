//! Common test utilities for integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Shorthand for a calendar date
pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Create an empty notes directory
pub fn notes_dir() -> TempDir {
    TempDir::new().unwrap()
}

/// Write a note into `dir` and return its path
pub fn write_note(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// A note whose only content is a dateblock
pub fn dateblock_note(entries: &[&str]) -> String {
    let mut content = String::from("rsf:\n");
    content.push_str(&entries.join("\n"));
    content
}
