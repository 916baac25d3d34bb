//! Label-anchored well field extraction.

use regex::Regex;
use tracing::debug;

use crate::models::well::WellRecord;

use super::patterns::*;
use super::section::isolate_section;
use super::RecordExtractor;

/// Extracts the ten well identification fields.
///
/// The document is first narrowed to the well section, then every field is
/// matched on its own label. A missing label only affects its own field.
#[derive(Debug, Clone, Copy, Default)]
pub struct WellFieldExtractor;

impl WellFieldExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl RecordExtractor for WellFieldExtractor {
    type Output = WellRecord;

    fn extract(&self, text: &str) -> WellRecord {
        let section = isolate_section(text);

        let record = WellRecord {
            operator: capture(&OPERATOR, section),
            api_number: capture(&API_NUMBER, section),
            well_name: capture(&WELL_NAME, section),
            enseco_job_number: capture(&ENSECO_JOB_NUMBER, section),
            job_type: capture(&JOB_TYPE, section),
            county_state: capture(&COUNTY_STATE, section),
            well_shl: capture(&SURFACE_LOCATION, section),
            latitude: capture(&LATITUDE, section),
            longitude: capture(&LONGITUDE, section),
            datum: capture(&DATUM, section),
        };

        debug!(
            "Extracted {} of 10 well fields",
            record.fields().iter().filter(|(_, v)| v.is_some()).count()
        );
        record
    }
}

/// First capture group of the first match, trimmed. Blank captures count as absent.
fn capture(pattern: &Regex, text: &str) -> Option<String> {
    let caps = pattern.captures(text)?;
    let value = caps.get(1)?.as_str().trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const REPORT: &str = r#"
Enseco Energy Services
Geological Report
Operator: Boilerplate Petroleum API #: 99-999-99999
Well Information
Operator: Oasis Petroleum North America LLC API #: 33-053-06139-00-00
Well Name: Kline Federal 5300 41-18 12TX
Enseco Job #: ND1505-0012CON
Well Type: Horizontal
County, State: McKenzie County, North Dakota
Surface Location: 1140' FSL & 270' FWL, Sec 18, T153N, R100W
Latitude: 48.064194 N
Longitude: 103.599658 W
Datum: NAD83
"#;

    #[test]
    fn test_extract_all_fields() {
        let record = WellFieldExtractor::new().extract(REPORT);

        assert_eq!(
            record,
            WellRecord {
                operator: Some("Oasis Petroleum North America LLC".to_string()),
                api_number: Some("33-053-06139-00-00".to_string()),
                well_name: Some("Kline Federal 5300 41-18 12TX".to_string()),
                enseco_job_number: Some("ND1505-0012CON".to_string()),
                job_type: Some("Horizontal".to_string()),
                county_state: Some("McKenzie County, North Dakota".to_string()),
                well_shl: Some("1140' FSL & 270' FWL, Sec 18, T153N, R100W".to_string()),
                latitude: Some("48.064194 N".to_string()),
                longitude: Some("103.599658 W".to_string()),
                datum: Some("NAD83".to_string()),
            }
        );
    }

    #[test]
    fn test_missing_labels_leave_fields_unset() {
        let text = "Well Information\nWell Name: Lonely 1-2H\nDatum: NAD27\n";
        let record = WellFieldExtractor::new().extract(text);

        assert_eq!(record.well_name.as_deref(), Some("Lonely 1-2H"));
        assert_eq!(record.datum.as_deref(), Some("NAD27"));
        assert_eq!(record.operator, None);
        assert_eq!(record.api_number, None);
        assert_eq!(record.latitude, None);
    }

    #[test]
    fn test_labels_are_case_insensitive() {
        let text = "WELL DATA SUMMARY\nOPERATOR: Whiting Oil and Gas API#: 33-105-03711\nLATITUDE: 48.1\n";
        let record = WellFieldExtractor::new().extract(text);

        assert_eq!(record.operator.as_deref(), Some("Whiting Oil and Gas"));
        assert_eq!(record.api_number.as_deref(), Some("33-105-03711"));
        assert_eq!(record.latitude.as_deref(), Some("48.1"));
    }

    #[test]
    fn test_labels_before_summary_header_ignored() {
        let text = "Datum: WGS84\nWell Name: Cover Sheet\nWELL DATA SUMMARY\nWell Name: Hovde 21-12\n";
        let record = WellFieldExtractor::new().extract(text);

        assert_eq!(record.well_name.as_deref(), Some("Hovde 21-12"));
        assert_eq!(record.datum, None);
    }

    #[test]
    fn test_operator_without_api_is_unset() {
        let text = "Operator: Continental Resources\nWell Name: Hawkinson 1-22H";
        let record = WellFieldExtractor::new().extract(text);

        assert_eq!(record.operator, None);
        assert_eq!(record.well_name.as_deref(), Some("Hawkinson 1-22H"));
    }

    #[test]
    fn test_malformed_api_number() {
        let text = "API #: pending\nDatum: NAD83";
        let record = WellFieldExtractor::new().extract(text);

        assert_eq!(record.api_number, None);
        assert_eq!(record.datum.as_deref(), Some("NAD83"));
    }

    #[test]
    fn test_blank_value_at_end_is_unset() {
        let text = "Well Information\nWell Name: Hovde 21-12\nDatum:   ";
        let record = WellFieldExtractor::new().extract(text);

        assert_eq!(record.well_name.as_deref(), Some("Hovde 21-12"));
        assert_eq!(record.datum, None);
    }

    #[test]
    fn test_unknown_template_is_empty() {
        let record = WellFieldExtractor::new().extract("nothing to see here\n\n");
        assert!(record.is_empty());
    }
}
