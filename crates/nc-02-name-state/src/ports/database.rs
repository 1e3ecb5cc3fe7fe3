use crate::domain::StateError;
use shared_types::{HistoryEntry, NameKey, NameRecord};

/// Name record database abstraction
pub trait NameDatabase: Send + Sync {
    fn get_record(&self, name: &NameKey) -> Result<Option<NameRecord>, StateError>;
    fn put_record(&self, record: NameRecord) -> Result<(), StateError>;
    fn append_history(&self, name: &NameKey, entry: HistoryEntry) -> Result<(), StateError>;
    fn get_history(&self, name: &NameKey) -> Result<Vec<HistoryEntry>, StateError>;
    fn record_count(&self) -> Result<usize, StateError>;
    fn clear(&self) -> Result<(), StateError>;
}
