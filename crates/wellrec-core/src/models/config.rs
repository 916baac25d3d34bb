//! Configuration structures for the extraction pipeline.
//!
//! Configuration is loaded once by the caller and handed to the components
//! that need it. Nothing in the library reads the environment.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, WellrecError};

/// Main configuration for the wellrec pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WellrecConfig {
    /// PDF text extraction configuration.
    pub pdf: PdfConfig,

    /// OCR fallback configuration.
    pub ocr: OcrConfig,

    /// Database configuration.
    pub database: DatabaseConfig,
}

/// PDF text extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Minimum non-whitespace characters for the text layer to count as present.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self { min_text_length: 1 }
    }
}

/// OCR fallback configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Run OCR when a PDF has no usable text layer.
    pub enabled: bool,

    /// OCR executable.
    pub command: String,

    /// Arguments passed before the input and output paths.
    pub extra_args: Vec<String>,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: "ocrmypdf".to_string(),
            extra_args: vec!["--force-ocr".to_string()],
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("wells.db"),
        }
    }
}

impl WellrecConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| WellrecError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| WellrecError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: WellrecConfig =
            serde_json::from_str(r#"{ "ocr": { "enabled": false } }"#).unwrap();

        assert!(!config.ocr.enabled);
        assert_eq!(config.ocr.command, "ocrmypdf");
        assert_eq!(config.database.path, PathBuf::from("wells.db"));
        assert_eq!(config.pdf.min_text_length, 1);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = WellrecConfig::default();
        config.database.path = PathBuf::from("/data/wells.db");
        config.save(&path).unwrap();

        let loaded = WellrecConfig::from_file(&path).unwrap();
        assert_eq!(loaded.database.path, PathBuf::from("/data/wells.db"));
        assert_eq!(loaded.ocr.extra_args, vec!["--force-ocr".to_string()]);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "ocr": { "enabled": "yes" } }"#).unwrap();

        let err = WellrecConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, WellrecError::Config(ref msg) if msg.contains("config.json")));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = WellrecConfig::from_file(Path::new("/nonexistent/wellrec.json")).unwrap_err();
        assert!(matches!(err, WellrecError::Io(_)));
    }
}
