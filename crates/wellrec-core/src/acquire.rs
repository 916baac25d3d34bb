//! Document text acquisition: PDF text layer first, OCR when it is blank.

use std::fmt;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{OcrError, Result};
use crate::models::config::{OcrConfig, PdfConfig, WellrecConfig};
use crate::ocr::OcrRunner;
use crate::pdf::{classify_text, PdfExtractor, PdfProcessor, PdfType};

/// Where the text of a document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSource {
    /// The PDF's own text layer.
    Embedded,
    /// OCR of a scanned PDF.
    Ocr,
    /// A plain-text file, read as is.
    Plain,
}

impl fmt::Display for TextSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextSource::Embedded => write!(f, "embedded"),
            TextSource::Ocr => write!(f, "ocr"),
            TextSource::Plain => write!(f, "plain"),
        }
    }
}

/// Text of one document.
#[derive(Debug, Clone)]
pub struct AcquiredText {
    pub text: String,
    pub source: TextSource,
    /// Page count of a PDF that could be opened.
    pub page_count: Option<u32>,
    /// Time spent in the OCR tool, when it ran.
    pub ocr_time_ms: Option<u64>,
}

/// Reads document text from PDF or plain-text files.
#[derive(Debug, Clone)]
pub struct TextAcquirer {
    pdf: PdfConfig,
    ocr: OcrConfig,
}

impl TextAcquirer {
    pub fn new(config: &WellrecConfig) -> Self {
        Self {
            pdf: config.pdf.clone(),
            ocr: config.ocr.clone(),
        }
    }

    /// Disable or enable the OCR fallback.
    pub fn with_ocr(mut self, enabled: bool) -> Self {
        self.ocr.enabled = enabled;
        self
    }

    /// Acquire the full text of the document at `path`.
    ///
    /// `.txt` files are read directly. Anything else is treated as a PDF: its
    /// text layer is used when present, otherwise the OCR tool is run.
    pub fn acquire(&self, path: &Path) -> Result<AcquiredText> {
        if is_plain_text(path) {
            let text = std::fs::read_to_string(path)?;
            return Ok(AcquiredText {
                text,
                source: TextSource::Plain,
                page_count: None,
                ocr_time_ms: None,
            });
        }

        let pdf = PdfExtractor::open(path)
            .inspect_err(|e| warn!("Could not open {}: {}", path.display(), e))
            .ok();
        let page_count = pdf.as_ref().map(|pdf| pdf.page_count());

        let embedded = match pdf.as_ref().map(|pdf| pdf.extract_text()) {
            Some(Ok(text)) => text,
            Some(Err(e)) => {
                warn!("Could not read text layer of {}: {}", path.display(), e);
                String::new()
            }
            None => String::new(),
        };

        if classify_text(&embedded, self.pdf.min_text_length) == PdfType::Text {
            return Ok(AcquiredText {
                text: embedded,
                source: TextSource::Embedded,
                page_count,
                ocr_time_ms: None,
            });
        }

        if !self.ocr.enabled {
            return Err(OcrError::Disabled.into());
        }

        info!("No text found in {}, running OCR", path.display());
        let result = OcrRunner::new(&self.ocr).run(path)?;
        Ok(AcquiredText {
            text: result.text,
            source: TextSource::Ocr,
            page_count,
            ocr_time_ms: Some(result.processing_time_ms),
        })
    }
}

fn is_plain_text(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WellrecError;

    #[test]
    fn test_plain_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("W28654.TXT");
        std::fs::write(&path, "Well Information\nDatum: NAD83\n").unwrap();

        let acquired = TextAcquirer::new(&WellrecConfig::default()).acquire(&path).unwrap();
        assert_eq!(acquired.source, TextSource::Plain);
        assert!(acquired.text.contains("Datum: NAD83"));
        assert_eq!(acquired.page_count, None);
        assert_eq!(acquired.ocr_time_ms, None);
    }

    #[test]
    fn test_unreadable_pdf_without_ocr() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"%PDF-garbage").unwrap();

        let acquirer = TextAcquirer::new(&WellrecConfig::default()).with_ocr(false);
        let err = acquirer.acquire(&path).unwrap_err();
        assert!(matches!(err, WellrecError::Ocr(OcrError::Disabled)));
    }

    #[test]
    fn test_missing_ocr_tool_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.pdf");
        std::fs::write(&path, b"").unwrap();

        let mut config = WellrecConfig::default();
        config.ocr.command = "wellrec-no-such-ocr-tool".to_string();

        let err = TextAcquirer::new(&config).acquire(&path).unwrap_err();
        assert!(matches!(err, WellrecError::Ocr(OcrError::Launch { .. })));
    }

    #[test]
    fn test_text_source_display() {
        assert_eq!(TextSource::Embedded.to_string(), "embedded");
        assert_eq!(TextSource::Ocr.to_string(), "ocr");
    }
}
