//! Persistence of extracted records.
//!
//! A well row is written first; the store assigns its id, which the
//! stimulation row then references.

mod memory;
#[cfg(feature = "sqlite")]
mod sqlite;

pub use memory::MemoryStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

use serde::Serialize;

use crate::error::StoreError;
use crate::models::well::{StimulationRecord, WellRecord};

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Row counts per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreCounts {
    pub wells: u64,
    pub stimulations: u64,
}

/// Trait for record stores.
pub trait WellStore {
    /// Insert a well record and return its assigned id.
    fn insert_well(&self, well: &WellRecord) -> Result<i64>;

    /// Insert a stimulation record for an existing well and return its id.
    fn insert_stimulation(&self, well_id: i64, stimulation: &StimulationRecord) -> Result<i64>;

    /// Count stored rows.
    fn counts(&self) -> Result<StoreCounts>;
}

impl<T: WellStore + ?Sized> WellStore for Box<T> {
    fn insert_well(&self, well: &WellRecord) -> Result<i64> {
        (**self).insert_well(well)
    }

    fn insert_stimulation(&self, well_id: i64, stimulation: &StimulationRecord) -> Result<i64> {
        (**self).insert_stimulation(well_id, stimulation)
    }

    fn counts(&self) -> Result<StoreCounts> {
        (**self).counts()
    }
}
