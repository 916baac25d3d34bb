//! Well identification and stimulation-treatment records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Well identification data, one per document.
///
/// Every field is independent: a label missing from the document leaves only
/// its own field unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellRecord {
    /// Operating company.
    pub operator: Option<String>,

    /// Regulatory API number (digits and hyphens).
    pub api_number: Option<String>,

    /// Well name.
    pub well_name: Option<String>,

    /// Enseco job number.
    pub enseco_job_number: Option<String>,

    /// Well/job type.
    pub job_type: Option<String>,

    /// County and state, as printed.
    pub county_state: Option<String>,

    /// Surface hole location.
    pub well_shl: Option<String>,

    /// Latitude, as printed.
    pub latitude: Option<String>,

    /// Longitude, as printed.
    pub longitude: Option<String>,

    /// Geodetic datum.
    pub datum: Option<String>,
}

impl WellRecord {
    /// Check if no field was extracted.
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_none())
    }

    /// Field names paired with their values, in schema order.
    pub fn fields(&self) -> [(&'static str, Option<&str>); 10] {
        [
            ("operator", self.operator.as_deref()),
            ("api_number", self.api_number.as_deref()),
            ("well_name", self.well_name.as_deref()),
            ("enseco_job_number", self.enseco_job_number.as_deref()),
            ("job_type", self.job_type.as_deref()),
            ("county_state", self.county_state.as_deref()),
            ("well_shl", self.well_shl.as_deref()),
            ("latitude", self.latitude.as_deref()),
            ("longitude", self.longitude.as_deref()),
            ("datum", self.datum.as_deref()),
        ]
    }
}

/// Stimulation-treatment data for one episode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StimulationRecord {
    /// Date of the stimulation.
    pub date_stimulated: Option<NaiveDate>,

    /// Formation that was stimulated.
    pub stimulated_formation: Option<String>,

    /// Treatment type (e.g. "Sand Frac").
    pub type_treatment: Option<String>,

    /// Top of the stimulated interval.
    pub top_depth: Option<String>,

    /// Bottom of the stimulated interval.
    pub bottom_depth: Option<String>,

    /// Number of stages.
    pub stimulation_stages: Option<u32>,

    /// Fluid volume.
    pub volume: Option<String>,

    /// Unit of `volume`.
    pub volume_units: Option<String>,

    /// Acid concentration. No known template row carries it.
    pub acid_percent: Option<String>,

    /// Pounds of proppant.
    pub lbs_proppant: Option<String>,

    /// Maximum treatment pressure.
    pub max_treatment_pressure: Option<String>,

    /// Maximum treatment rate.
    pub max_treatment_rate: Option<String>,

    /// Free-text proppant breakdown, one line per entry.
    pub proppant_details: Option<String>,
}

impl StimulationRecord {
    /// Whether the record carries enough signal to be stored.
    ///
    /// A record is kept only when its date or its formation was found.
    pub fn is_materializable(&self) -> bool {
        self.date_stimulated.is_some() || self.stimulated_formation.is_some()
    }
}

/// Both records extracted from a single document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecords {
    /// Well identification.
    pub well: WellRecord,

    /// Stimulation treatment.
    pub stimulation: StimulationRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_well_record() {
        let record = WellRecord::default();
        assert!(record.is_empty());

        let record = WellRecord {
            datum: Some("NAD83".to_string()),
            ..Default::default()
        };
        assert!(!record.is_empty());
    }

    #[test]
    fn test_materializable_needs_date_or_formation() {
        let mut record = StimulationRecord {
            type_treatment: Some("Sand Frac".to_string()),
            lbs_proppant: Some("4230380".to_string()),
            ..Default::default()
        };
        assert!(!record.is_materializable());

        record.stimulated_formation = Some("Bakken".to_string());
        assert!(record.is_materializable());

        let record = StimulationRecord {
            date_stimulated: NaiveDate::from_ymd_opt(2015, 6, 9),
            ..Default::default()
        };
        assert!(record.is_materializable());
    }

    #[test]
    fn test_date_serializes_as_iso() {
        let record = StimulationRecord {
            date_stimulated: NaiveDate::from_ymd_opt(2015, 6, 9),
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date_stimulated"], "2015-06-09");
        assert!(json["volume"].is_null());
    }
}
