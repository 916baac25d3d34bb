//! Label patterns for well document extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Section headers, either template
    pub static ref SECTION_HEADER: Regex = Regex::new(
        r"(?i)(?:Well Information|WELL DATA SUMMARY)"
    ).unwrap();

    // Operator shares its line with the API number, so stop at "API"
    pub static ref OPERATOR: Regex = Regex::new(
        r"(?i)Operator:\s*(.+?)\s+API"
    ).unwrap();

    pub static ref API_NUMBER: Regex = Regex::new(
        r"(?i)API\s*#:\s*([0-9\-]+)"
    ).unwrap();

    pub static ref WELL_NAME: Regex = Regex::new(
        r"(?i)Well Name:\s*([^\n]+)"
    ).unwrap();

    pub static ref ENSECO_JOB_NUMBER: Regex = Regex::new(
        r"(?i)Enseco\s*Job\s*#:\s*([^\n]+)"
    ).unwrap();

    pub static ref JOB_TYPE: Regex = Regex::new(
        r"(?i)Well\s*Type:\s*([^\n]+)"
    ).unwrap();

    pub static ref COUNTY_STATE: Regex = Regex::new(
        r"(?i)County,\s*State:\s*([^\n]+)"
    ).unwrap();

    pub static ref SURFACE_LOCATION: Regex = Regex::new(
        r"(?i)Surface Location:\s*([^\n]+)"
    ).unwrap();

    pub static ref LATITUDE: Regex = Regex::new(
        r"(?i)Latitude:\s*([^\n]+)"
    ).unwrap();

    pub static ref LONGITUDE: Regex = Regex::new(
        r"(?i)Longitude:\s*([^\n]+)"
    ).unwrap();

    pub static ref DATUM: Regex = Regex::new(
        r"(?i)Datum:\s*([^\n]+)"
    ).unwrap();
}
