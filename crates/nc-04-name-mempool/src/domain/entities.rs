//! Core domain entities for the name mempool.

use serde::Deserialize;
use shared_types::{BlockHeight, NameTransaction, TxId};

/// Entry state in the two-phase commit.
///
/// ```text
/// [PENDING] ──propose──→ [PENDING_INCLUSION] ──confirm──→ [DELETED]
///                               │
///                               └── rollback ──→ [PENDING]
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EntryState {
    /// Available for block inclusion.
    #[default]
    Pending,
    /// Proposed for a block, awaiting confirmation.
    PendingInclusion {
        /// Height of the block the entry was proposed for.
        block_height: BlockHeight,
    },
}

/// A transaction in the pool with its bookkeeping.
#[derive(Clone, Debug)]
pub struct PoolEntry {
    /// The pooled transaction.
    pub tx: NameTransaction,
    /// Current state in the two-phase commit.
    pub state: EntryState,
    /// Admission sequence number. Blocks take entries in this order.
    pub sequence: u64,
}

impl PoolEntry {
    /// Creates a pending entry.
    pub fn new(tx: NameTransaction, sequence: u64) -> Self {
        Self {
            tx,
            state: EntryState::Pending,
            sequence,
        }
    }

    /// Transaction id.
    pub fn txid(&self) -> TxId {
        self.tx.txid
    }

    /// Returns true if the entry is available for block inclusion.
    pub fn is_pending(&self) -> bool {
        matches!(self.state, EntryState::Pending)
    }

    /// Returns true if the entry is awaiting confirmation.
    pub fn is_pending_inclusion(&self) -> bool {
        matches!(self.state, EntryState::PendingInclusion { .. })
    }

    /// Moves the entry to `PendingInclusion`.
    ///
    /// # Errors
    /// Returns error if the entry is already pending inclusion.
    pub fn propose(&mut self, block_height: BlockHeight) -> Result<(), &'static str> {
        if self.is_pending_inclusion() {
            return Err("entry already pending inclusion");
        }
        self.state = EntryState::PendingInclusion { block_height };
        Ok(())
    }

    /// Returns the entry to `Pending`.
    ///
    /// # Errors
    /// Returns error if the entry is not pending inclusion.
    pub fn rollback(&mut self) -> Result<(), &'static str> {
        if !self.is_pending_inclusion() {
            return Err("entry not pending inclusion");
        }
        self.state = EntryState::Pending;
        Ok(())
    }
}

/// Mempool configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct MempoolConfig {
    /// Maximum entries in the pool.
    pub max_transactions: usize,
    /// Maximum entries taken into one block.
    pub max_block_transactions: usize,
}

impl Default for MempoolConfig {
    fn default() -> Self {
        Self {
            max_transactions: 5000,
            max_block_transactions: 1000,
        }
    }
}

impl MempoolConfig {
    /// Creates a minimal config for testing.
    pub fn for_testing() -> Self {
        Self {
            max_transactions: 4,
            max_block_transactions: 2,
        }
    }
}
