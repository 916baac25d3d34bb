//! Text-to-record extraction.
//!
//! Every extractor here is a pure function of the document text. Nothing can
//! fail: a field that does not match is simply left unset.

pub mod dates;
pub mod grammar;
pub mod patterns;
pub mod section;
pub mod stimulation;
pub mod well;

pub use dates::normalize_date;
pub use grammar::{parse_date_row, parse_treatment_row, DateRow, TreatmentRow};
pub use section::isolate_section;
pub use stimulation::StimulationExtractor;
pub use well::WellFieldExtractor;

use tracing::info;

use crate::models::well::DocumentRecords;

/// Trait for extractors that build one record from a whole document.
pub trait RecordExtractor {
    /// The record this extractor produces.
    type Output;

    /// Extract the record. Unmatched fields stay `None`.
    fn extract(&self, text: &str) -> Self::Output;
}

/// Runs the well and stimulation extractors over one document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentExtractor {
    well: WellFieldExtractor,
    stimulation: StimulationExtractor,
}

impl DocumentExtractor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordExtractor for DocumentExtractor {
    type Output = DocumentRecords;

    fn extract(&self, text: &str) -> DocumentRecords {
        info!("Extracting records from {} characters of text", text.len());

        DocumentRecords {
            well: self.well.extract(text),
            stimulation: self.stimulation.extract(text),
        }
    }
}

/// Extract both records from one document's text.
pub fn extract_document(text: &str) -> DocumentRecords {
    DocumentExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    const WELL_FILE: &str = r#"
NORTH DAKOTA INDUSTRIAL COMMISSION
Well File No. 28654
Operator: Ignored Before Header API #: 00-000-00000

WELL DATA SUMMARY
Operator: Oasis Petroleum North America LLC API #: 33-053-06139-00-00
Well Name: Kline Federal 5300 41-18 12TX
Enseco Job #: ND1505-0012CON
Well Type: Horizontal
County, State: McKenzie County, North Dakota
Surface Location: Sec 18, T153N, R100W
Latitude: 48.064194
Longitude: -103.599658
Datum: NAD83

Well Specific Stimulations
Date Stimulated Stimulated Formation Top (Ft) Bottom (Ft) Stimulation Stages Volume Volume Units
06/09/2015 Three Forks Second Bench 11185 20754 50 I 126978 Barrels
Type Treatment Acid % Lbs Proppant Maximum Treatment Pressure (PSI) Maximum Treatment Rate (BBLS/Min)
Sand Frac 4230380 9122 39.0
Details
100 Mesh White: 1096120
40/70 White: 3134260

Details
should never be read
"#;

    #[test]
    fn test_extract_document() {
        let records = extract_document(WELL_FILE);

        assert_eq!(
            records.well.operator.as_deref(),
            Some("Oasis Petroleum North America LLC")
        );
        assert_eq!(records.well.api_number.as_deref(), Some("33-053-06139-00-00"));
        assert_eq!(records.well.longitude.as_deref(), Some("-103.599658"));
        assert_eq!(
            records.stimulation.date_stimulated,
            NaiveDate::from_ymd_opt(2015, 6, 9)
        );
        assert_eq!(records.stimulation.type_treatment.as_deref(), Some("Sand Frac"));
        assert_eq!(
            records.stimulation.proppant_details.as_deref(),
            Some("100 Mesh White: 1096120\n40/70 White: 3134260")
        );
        assert!(records.stimulation.is_materializable());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let first = extract_document(WELL_FILE);
        let second = extract_document(WELL_FILE);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_unknown_template_yields_empty_records() {
        let records = extract_document("Invoice #1234\nTotal: 12.00\n");
        assert_eq!(records, DocumentRecords::default());
    }
}
