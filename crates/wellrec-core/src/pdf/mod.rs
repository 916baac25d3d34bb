//! PDF text-layer extraction.

mod extractor;

pub use extractor::PdfExtractor;

use crate::error::PdfError;

/// Kind of text content a PDF carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfType {
    /// Has an extractable text layer.
    Text,
    /// Has pages but no usable text layer (scanned document).
    Scanned,
}

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from the entire PDF.
    fn extract_text(&self) -> Result<String>;
}

/// `Text` when `text` has at least `min_text_length` non-whitespace characters.
pub fn classify_text(text: &str, min_text_length: usize) -> PdfType {
    let visible = text.chars().filter(|c| !c.is_whitespace()).count();
    if visible >= min_text_length.max(1) {
        PdfType::Text
    } else {
        PdfType::Scanned
    }
}
