//! Hands extracted records to a store.

use serde::Serialize;
use tracing::{debug, info};

use crate::models::well::DocumentRecords;
use crate::store::{Result, WellStore};

/// Ids assigned to the records of one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersistOutcome {
    /// Id of the well row.
    pub well_id: i64,
    /// Id of the stimulation row, when the stimulation record was stored.
    pub stimulation_id: Option<i64>,
}

/// Forwards document records to a [`WellStore`].
///
/// The well record is always stored. The stimulation record is stored only
/// when it is materializable (its date or formation was found), and always
/// after the well so it can reference the well's id.
pub struct RecordOrchestrator<S> {
    store: S,
}

impl<S: WellStore> RecordOrchestrator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the orchestrator and return its store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Store the records of one document.
    pub fn persist(&self, records: &DocumentRecords) -> Result<PersistOutcome> {
        let well_id = self.store.insert_well(&records.well)?;
        info!("Inserted well info with id {}", well_id);

        let stimulation_id = if records.stimulation.is_materializable() {
            let id = self.store.insert_stimulation(well_id, &records.stimulation)?;
            info!("Inserted stimulation data with id {} for well {}", id, well_id);
            Some(id)
        } else {
            debug!("Stimulation record for well {} has no date or formation, skipped", well_id);
            None
        };

        Ok(PersistOutcome {
            well_id,
            stimulation_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::well::{StimulationRecord, WellRecord};
    use crate::store::{MemoryStore, StoreCounts};
    use chrono::NaiveDate;

    fn records(stimulation: StimulationRecord) -> DocumentRecords {
        DocumentRecords {
            well: WellRecord {
                well_name: Some("Kline Federal 5300 41-18 12TX".to_string()),
                ..Default::default()
            },
            stimulation,
        }
    }

    #[test]
    fn test_materializable_stimulation_is_stored() {
        let orchestrator = RecordOrchestrator::new(MemoryStore::new());
        let outcome = orchestrator
            .persist(&records(StimulationRecord {
                date_stimulated: NaiveDate::from_ymd_opt(2015, 6, 9),
                ..Default::default()
            }))
            .unwrap();

        assert_eq!(
            outcome,
            PersistOutcome {
                well_id: 1,
                stimulation_id: Some(1)
            }
        );
        let store = orchestrator.into_store();
        assert_eq!(store.stimulations().unwrap()[0].0, outcome.well_id);
    }

    #[test]
    fn test_formation_alone_is_enough() {
        let orchestrator = RecordOrchestrator::new(MemoryStore::new());
        let outcome = orchestrator
            .persist(&records(StimulationRecord {
                stimulated_formation: Some("Bakken".to_string()),
                ..Default::default()
            }))
            .unwrap();
        assert!(outcome.stimulation_id.is_some());
    }

    #[test]
    fn test_stimulation_without_signal_is_skipped() {
        let orchestrator = RecordOrchestrator::new(MemoryStore::new());
        let outcome = orchestrator
            .persist(&records(StimulationRecord {
                type_treatment: Some("Sand Frac".to_string()),
                proppant_details: Some("40/70 White: 3134260".to_string()),
                ..Default::default()
            }))
            .unwrap();

        assert_eq!(outcome.stimulation_id, None);
        assert_eq!(
            orchestrator.store().counts().unwrap(),
            StoreCounts {
                wells: 1,
                stimulations: 0
            }
        );
    }

    #[test]
    fn test_empty_document_still_stores_well() {
        let orchestrator = RecordOrchestrator::new(MemoryStore::new());
        let outcome = orchestrator.persist(&DocumentRecords::default()).unwrap();

        assert_eq!(outcome.well_id, 1);
        assert_eq!(outcome.stimulation_id, None);
        assert_eq!(orchestrator.store().wells().unwrap(), vec![WellRecord::default()]);
    }
}
