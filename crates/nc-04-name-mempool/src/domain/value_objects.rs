//! Value objects for the name mempool.

use shared_types::TxId;

/// Pooled reveal and update currently touching one name.
///
/// At most one of each may be pooled per name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NameSlots {
    /// Pooled reveal for the name.
    pub reveal: Option<TxId>,
    /// Pooled update for the name.
    pub update: Option<TxId>,
}

impl NameSlots {
    /// Returns true when neither slot is taken.
    pub fn is_empty(&self) -> bool {
        self.reveal.is_none() && self.update.is_none()
    }
}

/// Mempool status snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PoolStatus {
    /// Entries available for inclusion.
    pub pending_count: usize,
    /// Entries proposed for a block.
    pub pending_inclusion_count: usize,
    /// Pooled claims.
    pub claim_count: usize,
    /// Names with a pooled reveal.
    pub reveal_count: usize,
    /// Names with a pooled update.
    pub update_count: usize,
}

/// Result of proposing entries for a block.
#[derive(Clone, Debug, Default)]
pub struct ProposeResult {
    /// Entries moved to pending inclusion.
    pub proposed: Vec<TxId>,
    /// Entries that were already pending inclusion.
    pub already_pending: Vec<TxId>,
    /// Entries not in the pool.
    pub not_found: Vec<TxId>,
}
