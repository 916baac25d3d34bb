//! Data models: extracted records and pipeline configuration.

pub mod config;
pub mod well;

pub use config::{DatabaseConfig, OcrConfig, PdfConfig, WellrecConfig};
pub use well::{DocumentRecords, StimulationRecord, WellRecord};
