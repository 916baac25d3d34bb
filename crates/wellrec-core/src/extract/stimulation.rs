//! Marker-driven scan for the stimulation-treatment block.
//!
//! Stimulation forms print a header line and put its data on the line right
//! below it. The scan walks the document once, top to bottom:
//!
//! - `Seek` looks for a marker on the current line.
//! - `AfterDate` parses the line below a "Date Stimulated" marker as a date row.
//! - `AfterType` parses the line below a "Type Treatment" marker as a treatment row.
//! - `InDetails` collects the free-text lines below a "Details" marker.
//! - `Done` ends the scan.
//!
//! One line may carry several markers; they are handled in that order. The
//! first `InDetails` always leads to `Done`, so only the first stimulation
//! episode of a document is ever captured.

use tracing::{debug, trace};

use crate::models::well::StimulationRecord;

use super::dates::normalize_date;
use super::grammar::{parse_date_row, parse_treatment_row};
use super::RecordExtractor;

pub const DATE_MARKER: &str = "Date Stimulated";
pub const TREATMENT_MARKER: &str = "Type Treatment";
pub const DETAILS_MARKER: &str = "Details";

/// Scan position. Every state except `Done` holds the index of the line it is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Seek(usize),
    AfterDate(usize),
    AfterType(usize),
    InDetails(usize),
    Done,
}

/// Extracts the stimulation record from a whole document.
#[derive(Debug, Clone, Copy, Default)]
pub struct StimulationExtractor;

impl StimulationExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl RecordExtractor for StimulationExtractor {
    type Output = StimulationRecord;

    fn extract(&self, text: &str) -> StimulationRecord {
        let lines = document_lines(text);
        let mut record = StimulationRecord::default();
        let mut state = ScanState::Seek(0);

        loop {
            state = match state {
                ScanState::Seek(index) => match lines.get(index) {
                    Some(line) if line.contains(DATE_MARKER) => ScanState::AfterDate(index),
                    Some(line) if line.contains(TREATMENT_MARKER) => ScanState::AfterType(index),
                    Some(line) if line.contains(DETAILS_MARKER) => ScanState::InDetails(index),
                    Some(_) => ScanState::Seek(index + 1),
                    None => ScanState::Done,
                },
                ScanState::AfterDate(index) => {
                    if let Some(next) = lines.get(index + 1) {
                        apply_date_row(&mut record, next);
                    }
                    let line = lines[index];
                    if line.contains(TREATMENT_MARKER) {
                        ScanState::AfterType(index)
                    } else if line.contains(DETAILS_MARKER) {
                        ScanState::InDetails(index)
                    } else {
                        ScanState::Seek(index + 1)
                    }
                }
                ScanState::AfterType(index) => {
                    if let Some(next) = lines.get(index + 1) {
                        apply_treatment_row(&mut record, next);
                    }
                    if lines[index].contains(DETAILS_MARKER) {
                        ScanState::InDetails(index)
                    } else {
                        ScanState::Seek(index + 1)
                    }
                }
                ScanState::InDetails(index) => {
                    record.proppant_details = collect_details(&lines[index + 1..]);
                    // Later episodes are never read.
                    ScanState::Done
                }
                ScanState::Done => break,
            };
        }

        record
    }
}

/// Separators that end a line besides `\n`.
const LINE_BREAKS: [char; 9] = [
    '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split into lines, also breaking on stray carriage returns, page feeds and
/// Unicode line separators.
fn document_lines(text: &str) -> Vec<&str> {
    text.lines()
        .flat_map(|line| line.split(LINE_BREAKS))
        .collect()
}

fn apply_date_row(record: &mut StimulationRecord, line: &str) {
    let Some(row) = parse_date_row(line.trim()) else {
        trace!("Line after date marker is not a date row: {:?}", line);
        return;
    };
    debug!("Matched date row for formation {:?}", row.formation);

    record.date_stimulated = normalize_date(&row.date);
    record.stimulated_formation = (!row.formation.is_empty()).then_some(row.formation);
    record.top_depth = Some(row.top_depth);
    record.bottom_depth = Some(row.bottom_depth);
    record.stimulation_stages = row.stages;
    record.volume = Some(row.volume);
    record.volume_units = Some(row.volume_units);
}

fn apply_treatment_row(record: &mut StimulationRecord, line: &str) {
    let Some(row) = parse_treatment_row(line.trim()) else {
        trace!("Line after treatment marker is not a treatment row: {:?}", line);
        return;
    };
    debug!("Matched treatment row {:?}", row.treatment);

    record.type_treatment = Some(row.treatment);
    record.lbs_proppant = Some(row.lbs_proppant);
    record.max_treatment_pressure = Some(row.max_pressure);
    record.max_treatment_rate = Some(row.max_rate);
}

/// Trimmed lines up to a blank line or the next marker row, newline-joined.
fn collect_details(lines: &[&str]) -> Option<String> {
    let details: Vec<&str> = lines
        .iter()
        .map(|line| line.trim())
        .take_while(|line| {
            !line.is_empty()
                && !line.starts_with(DATE_MARKER)
                && !line.starts_with(TREATMENT_MARKER)
        })
        .collect();

    (!details.is_empty()).then(|| details.join("\n"))
}
