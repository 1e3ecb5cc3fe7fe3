use crate::domain::StateError;
use shared_types::{HistoryEntry, NameKey, NameRecord};

/// Read API over confirmed name state
pub trait NameStateApi: Send + Sync {
    /// Current confirmed record, expired or not. `None` if never registered.
    fn get(&self, name: &NameKey) -> Result<Option<NameRecord>, StateError>;

    /// Confirmed history, oldest first.
    ///
    /// Fails with `HistoryDisabled` when tracking is off.
    fn history(&self, name: &NameKey) -> Result<Vec<HistoryEntry>, StateError>;

    fn history_enabled(&self) -> bool;
}
