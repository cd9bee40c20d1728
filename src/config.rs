use crate::pipeline::{DEFAULT_ADVANCE, DEFAULT_OVERDUE};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the settings file looked up in the scanned directory
pub const DEFAULT_CONFIG_FILE: &str = ".rsf.toml";

/// Run settings that can be stored in a TOML file
///
/// Missing keys fall back to the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Days before the reference date that still count as due
    pub overdue: i64,
    /// Days after the reference date that already count as due
    pub advance: i64,
    /// Report notes without a due date as well
    pub verbose: bool,
    /// Scan `.txt` notes in addition to Markdown
    pub include_txt: bool,
    /// Lines read per note, 0 for no limit
    pub limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            overdue: DEFAULT_OVERDUE,
            advance: DEFAULT_ADVANCE,
            verbose: false,
            include_txt: false,
            limit: 0,
        }
    }
}

pub struct ConfigFile {
    file_path: PathBuf,
}

impl ConfigFile {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Settings file inside the directory being scanned
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_CONFIG_FILE))
    }

    /// Load settings, using defaults when the file does not exist
    pub fn load(&self) -> Result<Settings> {
        if !self.file_path.exists() {
            return Ok(Settings::default());
        }
        self.load_existing()
    }

    /// Load settings from a file that must exist
    pub fn load_existing(&self) -> Result<Settings> {
        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read config {}", self.file_path.display()))?;
        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", self.file_path.display()))?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = ConfigFile::in_dir(dir.path()).load().unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.overdue, 3);
        assert_eq!(settings.advance, 0);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let config = ConfigFile::new(dir.path().join("nope.toml"));
        assert!(config.load_existing().is_err());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "advance = 7\ninclude_txt = true\n").unwrap();

        let settings = ConfigFile::in_dir(dir.path()).load().unwrap();
        assert_eq!(settings.advance, 7);
        assert!(settings.include_txt);
        assert_eq!(settings.overdue, 3);
        assert!(!settings.verbose);
        assert_eq!(settings.limit, 0);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "overdue = \"three\"\n").unwrap();
        assert!(ConfigFile::in_dir(dir.path()).load().is_err());
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let settings = Settings {
            overdue: 1,
            advance: 2,
            verbose: true,
            include_txt: true,
            limit: 40,
        };
        let text = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }
}
