//! CLI subcommands and the helpers they share.

pub mod batch;
pub mod config;
pub mod db;
pub mod process;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use wellrec_core::models::config::WellrecConfig;
use wellrec_core::models::well::DocumentRecords;
use wellrec_core::store::{MemoryStore, SqliteStore, WellStore};

/// Open the configured database, or an in-memory store for dry runs.
pub fn open_store(
    config: &WellrecConfig,
    database: Option<&PathBuf>,
    dry_run: bool,
) -> anyhow::Result<Box<dyn WellStore>> {
    if dry_run {
        return Ok(Box::new(MemoryStore::new()));
    }

    let mut db_config = config.database.clone();
    if let Some(path) = database {
        db_config.path = path.clone();
    }
    debug!("Opening database {}", db_config.path.display());
    Ok(Box::new(SqliteStore::open(&db_config)?))
}

/// Write the acquired text next to other extracted texts as `<stem>_extracted.txt`.
pub fn save_extracted_text(dir: &Path, source: &Path, text: &str) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    let path = dir.join(format!("{}_extracted.txt", stem));

    fs::write(&path, text)?;
    debug!("Saved extracted text to {}", path.display());
    Ok(path)
}

/// Human-readable rendering of both records.
pub fn format_records_text(records: &DocumentRecords) -> String {
    let mut output = String::new();

    output.push_str("Well:\n");
    for (name, value) in records.well.fields() {
        output.push_str(&format!("  {:<24} {}\n", name, value.unwrap_or("-")));
    }

    let stim = &records.stimulation;
    let stages = stim.stimulation_stages.map(|s| s.to_string());
    let date = stim.date_stimulated.map(|d| d.to_string());

    output.push_str("\nStimulation:\n");
    let rows = [
        ("date_stimulated", date.as_deref()),
        ("stimulated_formation", stim.stimulated_formation.as_deref()),
        ("type_treatment", stim.type_treatment.as_deref()),
        ("top_depth", stim.top_depth.as_deref()),
        ("bottom_depth", stim.bottom_depth.as_deref()),
        ("stimulation_stages", stages.as_deref()),
        ("volume", stim.volume.as_deref()),
        ("volume_units", stim.volume_units.as_deref()),
        ("acid_percent", stim.acid_percent.as_deref()),
        ("lbs_proppant", stim.lbs_proppant.as_deref()),
        ("max_treatment_pressure", stim.max_treatment_pressure.as_deref()),
        ("max_treatment_rate", stim.max_treatment_rate.as_deref()),
    ];
    for (name, value) in rows {
        output.push_str(&format!("  {:<24} {}\n", name, value.unwrap_or("-")));
    }

    if let Some(details) = &stim.proppant_details {
        output.push_str("  proppant_details:\n");
        for line in details.lines() {
            output.push_str(&format!("    {}\n", line));
        }
    }

    if !stim.is_materializable() {
        output.push_str("\n(no stimulation date or formation found; record would not be stored)\n");
    }

    output
}
