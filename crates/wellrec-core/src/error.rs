//! Error types for the wellrec-core library.
//!
//! Field extraction itself has no failure kind: a field is either found or
//! absent. These errors belong to the collaborators around it (reading PDFs,
//! running OCR, persisting records).

use thiserror::Error;

/// Main error type for the wellrec library.
#[derive(Error, Debug)]
pub enum WellrecError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Persistence error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to the external OCR tool.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The OCR command could not be started.
    #[error("failed to launch `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The OCR command ran but reported failure.
    #[error("`{command}` exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },

    /// OCR is disabled by configuration but the document has no text layer.
    #[error("document has no text layer and OCR is disabled")]
    Disabled,

    /// The OCR output could not be read back.
    #[error("failed to read OCR output: {0}")]
    Output(#[from] PdfError),
}

/// Errors related to record persistence.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying database error.
    #[cfg(feature = "sqlite")]
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stimulation record referenced a well id the store does not know.
    #[error("unknown well id: {0}")]
    UnknownWell(i64),

    /// The store lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    Poisoned,
}

/// Result type for the wellrec library.
pub type Result<T> = std::result::Result<T, WellrecError>;
