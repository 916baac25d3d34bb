//! SQLite store.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

use super::{Result, StoreCounts, WellStore};
use crate::error::StoreError;
use crate::models::config::DatabaseConfig;
use crate::models::well::{StimulationRecord, WellRecord};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS well_info (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        operator TEXT,
        api_number TEXT,
        well_name TEXT,
        enseco_job_number TEXT,
        job_type TEXT,
        county_state TEXT,
        well_shl TEXT,
        latitude TEXT,
        longitude TEXT,
        datum TEXT
    );

    CREATE TABLE IF NOT EXISTS stimulation_data (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        well_info_id INTEGER NOT NULL REFERENCES well_info(id),
        date_stimulated TEXT,  -- ISO YYYY-MM-DD
        stimulated_formation TEXT,
        type_treatment TEXT,
        top_depth TEXT,
        bottom_depth TEXT,
        stimulation_stages INTEGER,
        volume TEXT,
        volume_units TEXT,
        acid_percent TEXT,
        lbs_proppant TEXT,
        max_treatment_pressure TEXT,
        max_treatment_rate TEXT,
        proppant_details TEXT
    );

    CREATE INDEX IF NOT EXISTS idx_stimulation_well ON stimulation_data(well_info_id);
";

/// Record store backed by a SQLite database file.
pub struct SqliteStore {
    conn: Mutex<Connection>,
    path: PathBuf,
}

impl SqliteStore {
    /// Open (creating if needed) the database named by `config`.
    pub fn open(config: &DatabaseConfig) -> Result<Self> {
        let conn = Connection::open(&config.path)?;
        let store = Self {
            conn: Mutex::new(conn),
            path: config.path.clone(),
        };
        store.init()?;
        Ok(store)
    }

    /// Open a private in-memory database.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
            path: PathBuf::from(":memory:"),
        };
        store.init()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn init(&self) -> Result<()> {
        let conn = self.conn.lock().map_err(|_| StoreError::Poisoned)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(SCHEMA)?;
        debug!("Initialized schema in {}", self.path.display());
        Ok(())
    }

    /// Fetch a well record by id.
    pub fn well(&self, id: i64) -> Result<Option<WellRecord>> {
        let conn = self.conn.lock().map_err(|_| StoreError::Poisoned)?;
        let well = conn
            .query_row(
                "SELECT operator, api_number, well_name, enseco_job_number, job_type,
                        county_state, well_shl, latitude, longitude, datum
                 FROM well_info WHERE id = ?1",
                params![id],
                row_to_well,
            )
            .optional()?;
        Ok(well)
    }

    /// Fetch the stimulation records of a well, oldest first.
    pub fn stimulations_for(&self, well_id: i64) -> Result<Vec<StimulationRecord>> {
        let conn = self.conn.lock().map_err(|_| StoreError::Poisoned)?;
        let mut stmt = conn.prepare(
            "SELECT date_stimulated, stimulated_formation, type_treatment, top_depth,
                    bottom_depth, stimulation_stages, volume, volume_units, acid_percent,
                    lbs_proppant, max_treatment_pressure, max_treatment_rate, proppant_details
             FROM stimulation_data WHERE well_info_id = ?1 ORDER BY id",
        )?;
        let records = stmt
            .query_map(params![well_id], row_to_stimulation)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(records)
    }
}

impl WellStore for SqliteStore {
    fn insert_well(&self, well: &WellRecord) -> Result<i64> {
        let conn = self.conn.lock().map_err(|_| StoreError::Poisoned)?;
        conn.execute(
            "INSERT INTO well_info (
                operator, api_number, well_name, enseco_job_number, job_type,
                county_state, well_shl, latitude, longitude, datum
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                well.operator,
                well.api_number,
                well.well_name,
                well.enseco_job_number,
                well.job_type,
                well.county_state,
                well.well_shl,
                well.latitude,
                well.longitude,
                well.datum,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn insert_stimulation(&self, well_id: i64, stimulation: &StimulationRecord) -> Result<i64> {
        let conn = self.conn.lock().map_err(|_| StoreError::Poisoned)?;

        let known: Option<i64> = conn
            .query_row("SELECT id FROM well_info WHERE id = ?1", params![well_id], |row| {
                row.get(0)
            })
            .optional()?;
        if known.is_none() {
            return Err(StoreError::UnknownWell(well_id));
        }

        conn.execute(
            "INSERT INTO stimulation_data (
                well_info_id, date_stimulated, stimulated_formation, type_treatment,
                top_depth, bottom_depth, stimulation_stages, volume, volume_units,
                acid_percent, lbs_proppant, max_treatment_pressure, max_treatment_rate,
                proppant_details
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
            params![
                well_id,
                stimulation.date_stimulated.map(|d| d.to_string()),
                stimulation.stimulated_formation,
                stimulation.type_treatment,
                stimulation.top_depth,
                stimulation.bottom_depth,
                stimulation.stimulation_stages,
                stimulation.volume,
                stimulation.volume_units,
                stimulation.acid_percent,
                stimulation.lbs_proppant,
                stimulation.max_treatment_pressure,
                stimulation.max_treatment_rate,
                stimulation.proppant_details,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn counts(&self) -> Result<StoreCounts> {
        let conn = self.conn.lock().map_err(|_| StoreError::Poisoned)?;
        let wells: i64 = conn.query_row("SELECT COUNT(*) FROM well_info", [], |row| row.get(0))?;
        let stimulations: i64 =
            conn.query_row("SELECT COUNT(*) FROM stimulation_data", [], |row| row.get(0))?;
        Ok(StoreCounts {
            wells: wells as u64,
            stimulations: stimulations as u64,
        })
    }
}

fn row_to_well(row: &Row) -> rusqlite::Result<WellRecord> {
    Ok(WellRecord {
        operator: row.get(0)?,
        api_number: row.get(1)?,
        well_name: row.get(2)?,
        enseco_job_number: row.get(3)?,
        job_type: row.get(4)?,
        county_state: row.get(5)?,
        well_shl: row.get(6)?,
        latitude: row.get(7)?,
        longitude: row.get(8)?,
        datum: row.get(9)?,
    })
}

fn row_to_stimulation(row: &Row) -> rusqlite::Result<StimulationRecord> {
    let date: Option<String> = row.get(0)?;
    Ok(StimulationRecord {
        date_stimulated: date.and_then(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d").ok()),
        stimulated_formation: row.get(1)?,
        type_treatment: row.get(2)?,
        top_depth: row.get(3)?,
        bottom_depth: row.get(4)?,
        stimulation_stages: row.get(5)?,
        volume: row.get(6)?,
        volume_units: row.get(7)?,
        acid_percent: row.get(8)?,
        lbs_proppant: row.get(9)?,
        max_treatment_pressure: row.get(10)?,
        max_treatment_rate: row.get(11)?,
        proppant_details: row.get(12)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_stimulation() -> StimulationRecord {
        StimulationRecord {
            date_stimulated: NaiveDate::from_ymd_opt(2015, 6, 9),
            stimulated_formation: Some("Three Forks Second Bench".to_string()),
            stimulation_stages: Some(50),
            proppant_details: Some("100 Mesh White: 1096120\n40/70 White: 3134260".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_round_trip() {
        let store = SqliteStore::in_memory().unwrap();
        let well = WellRecord {
            api_number: Some("33-053-06139-00-00".to_string()),
            datum: Some("NAD83".to_string()),
            ..Default::default()
        };

        let well_id = store.insert_well(&well).unwrap();
        store.insert_stimulation(well_id, &sample_stimulation()).unwrap();

        assert_eq!(store.well(well_id).unwrap(), Some(well));
        assert_eq!(store.stimulations_for(well_id).unwrap(), vec![sample_stimulation()]);
        assert_eq!(
            store.counts().unwrap(),
            StoreCounts {
                wells: 1,
                stimulations: 1
            }
        );
    }

    #[test]
    fn test_unknown_well_rejected() {
        let store = SqliteStore::in_memory().unwrap();
        let err = store.insert_stimulation(42, &sample_stimulation()).unwrap_err();
        assert!(matches!(err, StoreError::UnknownWell(42)));
    }

    #[test]
    fn test_file_database_persists() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig {
            path: dir.path().join("wells.db"),
        };

        {
            let store = SqliteStore::open(&config).unwrap();
            store.insert_well(&WellRecord::default()).unwrap();
        }

        let store = SqliteStore::open(&config).unwrap();
        assert_eq!(store.counts().unwrap().wells, 1);
        assert_eq!(store.path(), config.path.as_path());
    }
}
