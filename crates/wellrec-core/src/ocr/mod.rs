//! OCR fallback through an external `ocrmypdf`-compatible tool.
//!
//! The tool writes a text-searchable copy of the scanned PDF into a temporary
//! directory; the text layer of that copy is then read like any other PDF.

use std::path::Path;
use std::process::Command;
use std::time::Instant;

use tracing::{debug, info};

use crate::error::OcrError;
use crate::models::config::OcrConfig;
use crate::pdf::{PdfExtractor, PdfProcessor};

/// Result type for OCR operations.
pub type Result<T> = std::result::Result<T, OcrError>;

/// Result of OCR processing.
#[derive(Debug, Clone)]
pub struct OcrResult {
    /// Recognized text.
    pub text: String,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Runs the configured OCR command on PDF files.
#[derive(Debug, Clone)]
pub struct OcrRunner {
    command: String,
    extra_args: Vec<String>,
}

impl OcrRunner {
    /// Create a runner from OCR configuration.
    pub fn new(config: &OcrConfig) -> Self {
        Self {
            command: config.command.clone(),
            extra_args: config.extra_args.clone(),
        }
    }

    /// OCR `input` and return the text of the searchable output.
    pub fn run(&self, input: &Path) -> Result<OcrResult> {
        let start = Instant::now();
        let workdir = tempfile::tempdir().map_err(|e| self.launch_error(e))?;
        let output = workdir.path().join("ocr_output.pdf");

        info!("Running {} on {}", self.command, input.display());
        self.invoke(input, &output)?;

        let extractor = PdfExtractor::open(&output)?;
        let text = extractor.extract_text()?;

        debug!("OCR produced {} characters", text.len());
        Ok(OcrResult {
            text,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn invoke(&self, input: &Path, output: &Path) -> Result<()> {
        let result = Command::new(&self.command)
            .args(&self.extra_args)
            .arg(input)
            .arg(output)
            .output()
            .map_err(|e| self.launch_error(e))?;

        if !result.status.success() {
            return Err(OcrError::Failed {
                command: self.command.clone(),
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }
        Ok(())
    }

    fn launch_error(&self, source: std::io::Error) -> OcrError {
        OcrError::Launch {
            command: self.command.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_command() {
        let runner = OcrRunner::new(&OcrConfig {
            enabled: true,
            command: "wellrec-no-such-ocr-tool".to_string(),
            extra_args: vec![],
        });

        let err = runner.run(Path::new("scan.pdf")).unwrap_err();
        assert!(matches!(err, OcrError::Launch { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_command() {
        let runner = OcrRunner::new(&OcrConfig {
            enabled: true,
            command: "false".to_string(),
            extra_args: vec![],
        });

        let err = runner.run(Path::new("scan.pdf")).unwrap_err();
        assert!(matches!(err, OcrError::Failed { .. }));
    }
}
