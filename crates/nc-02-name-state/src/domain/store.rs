//! # Name State Store
//!
//! Authoritative mapping from name to its confirmed record, plus the
//! optional append-only history.
//!
//! ## Invariants
//!
//! - At most one record per name; a re-registration replaces the expired
//!   record in place.
//! - History is append-only across the whole lifetime of a name, including
//!   expiry and re-registration cycles. It is never reset except by
//!   `reset()`, which only precedes a full replay of the chain.

use crate::domain::StateError;
use crate::ports::{NameDatabase, NameStateApi};
use crate::adapters::InMemoryNameDb;
use shared_types::{short_hex, HistoryEntry, NameKey, NameRecord};
use tracing::debug;

/// Confirmed name state.
pub struct NameStateStore {
    db: Box<dyn NameDatabase>,
    history_enabled: bool,
}

impl NameStateStore {
    /// Creates a store over `db`.
    pub fn new(db: Box<dyn NameDatabase>, history_enabled: bool) -> Self {
        Self {
            db,
            history_enabled,
        }
    }

    /// Creates a store backed by `InMemoryNameDb`.
    pub fn in_memory(history_enabled: bool) -> Self {
        Self::new(Box::new(InMemoryNameDb::new()), history_enabled)
    }

    /// Writes a confirmed record and, if tracking is on, appends it to the
    /// name's history.
    ///
    /// Only called while connecting a block, after validation accepted the
    /// operation at that block's height.
    pub fn put(&self, record: NameRecord) -> Result<(), StateError> {
        debug!(
            name = %record.name,
            txid = %short_hex(&record.txid),
            height = record.last_updated_at,
            "writing name record"
        );
        let entry = self.history_enabled.then(|| HistoryEntry::from(&record));
        let name = record.name.clone();
        self.db.put_record(record)?;
        if let Some(entry) = entry {
            self.db.append_history(&name, entry)?;
        }
        Ok(())
    }

    /// Number of names with a record, active or expired.
    pub fn record_count(&self) -> Result<usize, StateError> {
        self.db.record_count()
    }

    /// Drops every record and all history ahead of a chain replay.
    pub fn reset(&self) -> Result<(), StateError> {
        debug!("resetting name state for replay");
        self.db.clear()
    }
}

impl NameStateApi for NameStateStore {
    fn get(&self, name: &NameKey) -> Result<Option<NameRecord>, StateError> {
        self.db.get_record(name)
    }

    fn history(&self, name: &NameKey) -> Result<Vec<HistoryEntry>, StateError> {
        if !self.history_enabled {
            return Err(StateError::HistoryDisabled);
        }
        self.db.get_history(name)
    }

    fn history_enabled(&self) -> bool {
        self.history_enabled
    }
}
