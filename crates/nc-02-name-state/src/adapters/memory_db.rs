use crate::domain::StateError;
use crate::ports::NameDatabase;
use shared_types::{HistoryEntry, NameKey, NameRecord};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory implementation of NameDatabase
pub struct InMemoryNameDb {
    records: RwLock<HashMap<NameKey, NameRecord>>,
    history: RwLock<HashMap<NameKey, Vec<HistoryEntry>>>,
}

impl InMemoryNameDb {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            history: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryNameDb {
    fn default() -> Self {
        Self::new()
    }
}

impl NameDatabase for InMemoryNameDb {
    fn get_record(&self, name: &NameKey) -> Result<Option<NameRecord>, StateError> {
        let records = self
            .records
            .read()
            .map_err(|_| StateError::LockPoisoned)?;
        Ok(records.get(name).cloned())
    }

    fn put_record(&self, record: NameRecord) -> Result<(), StateError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StateError::LockPoisoned)?;
        records.insert(record.name.clone(), record);
        Ok(())
    }

    fn append_history(&self, name: &NameKey, entry: HistoryEntry) -> Result<(), StateError> {
        let mut history = self
            .history
            .write()
            .map_err(|_| StateError::LockPoisoned)?;
        history.entry(name.clone()).or_default().push(entry);
        Ok(())
    }

    fn get_history(&self, name: &NameKey) -> Result<Vec<HistoryEntry>, StateError> {
        let history = self
            .history
            .read()
            .map_err(|_| StateError::LockPoisoned)?;
        Ok(history.get(name).cloned().unwrap_or_default())
    }

    fn record_count(&self) -> Result<usize, StateError> {
        let records = self
            .records
            .read()
            .map_err(|_| StateError::LockPoisoned)?;
        Ok(records.len())
    }

    fn clear(&self) -> Result<(), StateError> {
        self.records
            .write()
            .map_err(|_| StateError::LockPoisoned)?
            .clear();
        self.history
            .write()
            .map_err(|_| StateError::LockPoisoned)?
            .clear();
        Ok(())
    }
}
