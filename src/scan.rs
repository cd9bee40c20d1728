//! Directory driver
//!
//! Collects the notes of one directory and runs the per-file pipeline on
//! each of them. A note that cannot be read does not stop the scan.

use crate::pipeline::{DueQuery, get_duestr_from_file};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const MARKDOWN_EXTENSIONS: &[&str] = &["md"];
const TEXT_EXTENSIONS: &[&str] = &["txt"];

/// Options for one scan
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub query: DueQuery,
    /// Emit a placeholder line for notes without a due date
    pub verbose: bool,
    /// Scan `.txt` notes as well as Markdown
    pub include_txt: bool,
    /// Lines read per note, 0 for no limit
    pub limit: usize,
}

/// Outcome of a scan, in enumeration order
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Report lines, one per note that produced output
    pub lines: Vec<String>,
    /// Notes that could not be read
    pub failures: Vec<(PathBuf, anyhow::Error)>,
}

fn note_extensions(include_txt: bool) -> Vec<&'static str> {
    let mut extensions = MARKDOWN_EXTENSIONS.to_vec();
    if include_txt {
        extensions.extend_from_slice(TEXT_EXTENSIONS);
    }
    extensions
}

fn has_note_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

/// List the notes directly inside `dir`
///
/// Matches `.md` (and `.txt` when `include_txt` is set) case-insensitively
/// and returns them sorted by name in descending order.
pub fn collect_notes(dir: &Path, include_txt: bool) -> Result<Vec<PathBuf>> {
    let extensions = note_extensions(include_txt);

    let mut notes = Vec::new();
    for entry in
        fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))?
    {
        let path = entry
            .with_context(|| format!("Failed to list {}", dir.display()))?
            .path();
        if path.is_file() && has_note_extension(&path, &extensions) {
            notes.push(path);
        }
    }

    notes.sort_by(|a, b| b.cmp(a));
    debug!(?notes, "notes found");
    Ok(notes)
}

/// Run the pipeline on every note in `dir`
///
/// # Errors
/// Only when the directory itself cannot be listed. Per-note read errors
/// are collected in `ScanReport::failures`.
pub fn scan_directory(dir: &Path, options: &ScanOptions) -> Result<ScanReport> {
    info!(dir = %dir.display(), ?options, "scanning directory");
    let notes = collect_notes(dir, options.include_txt)?;

    let mut report = ScanReport::default();
    for note in notes {
        info!(note = %note.display(), "processing next note");
        match get_duestr_from_file(&note, &options.query, options.verbose, options.limit) {
            Ok(Some(line)) => report.lines.push(line),
            Ok(None) => {}
            Err(e) => {
                warn!(note = %note.display(), error = %e, "skipping unreadable note");
                report.failures.push((note, e));
            }
        }
    }
    Ok(report)
}
