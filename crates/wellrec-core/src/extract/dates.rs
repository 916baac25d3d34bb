//! Stimulation date normalization.

use chrono::NaiveDate;
use tracing::trace;

/// Date format used on stimulation rows.
pub const STIMULATION_DATE_FORMAT: &str = "%m/%d/%Y";

/// Convert a `MM/DD/YYYY` token into a calendar date.
///
/// Returns `None` for anything that is not a valid date in that format.
pub fn normalize_date(token: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(token.trim(), STIMULATION_DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            trace!("Rejected date token {:?}: {}", token, e);
            None
        }
    }
}
