//! Core library for oil-well regulatory document extraction.
//!
//! This crate provides:
//! - Well identification and stimulation-treatment extraction from document text
//! - Text acquisition (PDF text layer, OCR fallback)
//! - Record persistence (SQLite) and the well-then-stimulation hand-off

pub mod acquire;
pub mod error;
pub mod extract;
pub mod models;
pub mod ocr;
pub mod orchestrator;
pub mod pdf;
pub mod store;

pub use acquire::{AcquiredText, TextAcquirer, TextSource};
pub use error::{OcrError, PdfError, Result, StoreError, WellrecError};
pub use extract::{extract_document, DocumentExtractor, RecordExtractor};
pub use models::config::WellrecConfig;
pub use models::well::{DocumentRecords, StimulationRecord, WellRecord};
pub use orchestrator::{PersistOutcome, RecordOrchestrator};
pub use pdf::{PdfExtractor, PdfProcessor, PdfType};
pub use store::{MemoryStore, StoreCounts, WellStore};
#[cfg(feature = "sqlite")]
pub use store::SqliteStore;
