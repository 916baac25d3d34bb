//! In-memory store, used for dry runs.

use std::sync::Mutex;

use super::{Result, StoreCounts, WellStore};
use crate::error::StoreError;
use crate::models::well::{StimulationRecord, WellRecord};

#[derive(Debug, Default)]
struct Tables {
    wells: Vec<WellRecord>,
    stimulations: Vec<(i64, StimulationRecord)>,
}

/// Keeps records in memory. Ids start at 1, like an autoincrement column.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored well records, in insertion order.
    pub fn wells(&self) -> Result<Vec<WellRecord>> {
        let tables = self.tables.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(tables.wells.clone())
    }

    /// Stored stimulation records with the id of the well they belong to.
    pub fn stimulations(&self) -> Result<Vec<(i64, StimulationRecord)>> {
        let tables = self.tables.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(tables.stimulations.clone())
    }
}

impl WellStore for MemoryStore {
    fn insert_well(&self, well: &WellRecord) -> Result<i64> {
        let mut tables = self.tables.lock().map_err(|_| StoreError::Poisoned)?;
        tables.wells.push(well.clone());
        Ok(tables.wells.len() as i64)
    }

    fn insert_stimulation(&self, well_id: i64, stimulation: &StimulationRecord) -> Result<i64> {
        let mut tables = self.tables.lock().map_err(|_| StoreError::Poisoned)?;
        if well_id < 1 || well_id as usize > tables.wells.len() {
            return Err(StoreError::UnknownWell(well_id));
        }
        tables.stimulations.push((well_id, stimulation.clone()));
        Ok(tables.stimulations.len() as i64)
    }

    fn counts(&self) -> Result<StoreCounts> {
        let tables = self.tables.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(StoreCounts {
            wells: tables.wells.len() as u64,
            stimulations: tables.stimulations.len() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential() {
        let store = MemoryStore::new();
        assert_eq!(store.insert_well(&WellRecord::default()).unwrap(), 1);
        assert_eq!(store.insert_well(&WellRecord::default()).unwrap(), 2);
        assert_eq!(
            store.insert_stimulation(2, &StimulationRecord::default()).unwrap(),
            1
        );
        assert_eq!(store.stimulations().unwrap()[0].0, 2);
    }

    #[test]
    fn test_unknown_well() {
        let store = MemoryStore::new();
        let err = store
            .insert_stimulation(7, &StimulationRecord::default())
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownWell(7)));
        assert_eq!(store.counts().unwrap(), StoreCounts::default());
    }
}
