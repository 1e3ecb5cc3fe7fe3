//! # Name Pool - Conflict Indices and Two-Phase Commit
//!
//! ## Data Structures
//!
//! - `by_txid`: O(1) lookup by transaction id
//! - `queue`: admission-ordered queue (BTreeMap), only PENDING entries
//! - `by_name`: pooled reveal / update per name
//! - `claims`: pooled claims by commitment
//!
//! ## Invariants Enforced
//!
//! - Oversized identifiers and values never reach a state lookup
//! - No duplicate txids (checked in `add()`)
//! - At most one pooled reveal and one pooled update per name
//! - At most one pooled claim per commitment, and none already on chain
//! - A claim backs at most one pooled reveal (its commitment binds the
//!   name, so the per-name reveal slot covers it)
//! - PENDING_INCLUSION entries excluded from `get_for_block()`
//! - Transactions returned by a disconnected block queue ahead of
//!   everything admitted since (`reinsert()`)

use super::entities::{MempoolConfig, PoolEntry};
use super::value_objects::{NameSlots, PoolStatus, ProposeResult};
use crate::ports::ChainView;
use shared_types::{
    check_limits, short_hex, BlockHeight, Commitment, ConflictReason, NameError, NameKey,
    NameOperation, NameParams, NameTransaction, TxId,
};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// First sequence number handed out. Admissions count up from here and
/// reinsertions count down.
const SEQUENCE_ORIGIN: u64 = u64::MAX / 2;

/// Pool of unconfirmed name transactions.
#[derive(Debug)]
pub struct NamePool {
    /// Configuration.
    config: MempoolConfig,

    /// Structural limits checked before any policy lookup.
    params: NameParams,

    /// All entries indexed by txid.
    by_txid: HashMap<TxId, PoolEntry>,

    /// Pending entries in admission order.
    queue: BTreeMap<u64, TxId>,

    /// Pooled reveal and update per name.
    by_name: HashMap<NameKey, NameSlots>,

    /// Pooled claims by commitment.
    claims: HashMap<Commitment, TxId>,

    /// Next admission sequence number.
    next_sequence: u64,

    /// Lowest sequence number handed out so far.
    front_sequence: u64,
}

impl NamePool {
    /// Creates an empty pool enforcing the limits in `params`.
    pub fn new(config: MempoolConfig, params: NameParams) -> Self {
        Self {
            config,
            params,
            by_txid: HashMap::new(),
            queue: BTreeMap::new(),
            by_name: HashMap::new(),
            claims: HashMap::new(),
            next_sequence: SEQUENCE_ORIGIN,
            front_sequence: SEQUENCE_ORIGIN,
        }
    }

    /// Creates a pool with default configuration and parameters.
    #[cfg(test)]
    pub fn with_defaults() -> Self {
        Self::new(MempoolConfig::default(), NameParams::default())
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &MempoolConfig {
        &self.config
    }

    /// Number of entries in the pool.
    pub fn len(&self) -> usize {
        self.by_txid.len()
    }

    /// Returns true if the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.by_txid.is_empty()
    }

    /// Number of entries available for inclusion.
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Number of entries proposed for a block.
    pub fn pending_inclusion_count(&self) -> usize {
        self.by_txid.len() - self.queue.len()
    }

    /// Gets an entry by txid.
    pub fn get(&self, txid: &TxId) -> Option<&PoolEntry> {
        self.by_txid.get(txid)
    }

    /// Checks if a transaction is pooled.
    pub fn contains(&self, txid: &TxId) -> bool {
        self.by_txid.contains_key(txid)
    }

    /// Returns true if a claim with `commitment` is pooled.
    pub fn has_claim(&self, commitment: &Commitment) -> bool {
        self.claims.contains_key(commitment)
    }

    /// Pooled reveal and update for `name`.
    pub fn slots(&self, name: &NameKey) -> NameSlots {
        self.by_name.get(name).copied().unwrap_or_default()
    }

    /// Runs pool policy for `tx` without inserting it.
    ///
    /// # Errors
    /// - `NameTooLong` / `ValueTooLong` before anything else is looked at
    /// - `DuplicateTransaction` if the txid is already pooled
    /// - `PoolFull` if the pool is at capacity
    /// - `DuplicateClaim` if the commitment is pooled or confirmed
    /// - `Conflict` if the name already has a pooled reveal or update of the
    ///   same kind, or a revealed name is active at the tip
    pub fn check<C: ChainView + ?Sized>(
        &self,
        tx: &NameTransaction,
        chain: &C,
    ) -> Result<(), NameError> {
        check_limits(&tx.operation, &self.params)?;

        if self.by_txid.contains_key(&tx.txid) {
            return Err(NameError::DuplicateTransaction(tx.txid));
        }

        if self.by_txid.len() >= self.config.max_transactions {
            return Err(NameError::PoolFull {
                capacity: self.config.max_transactions,
            });
        }

        match &tx.operation {
            NameOperation::Claim { commitment } => {
                if self.claims.contains_key(commitment) || chain.claim_exists(commitment)? {
                    return Err(NameError::DuplicateClaim {
                        commitment: *commitment,
                    });
                }
            }
            NameOperation::Reveal { name, .. } => {
                if self.slots(name).reveal.is_some() {
                    return Err(NameError::conflict(name, ConflictReason::PendingRegistration));
                }
                if chain.is_name_active(name)? {
                    return Err(NameError::conflict(name, ConflictReason::NameActive));
                }
            }
            NameOperation::Update { name, .. } => {
                if self.slots(name).update.is_some() {
                    return Err(NameError::conflict(name, ConflictReason::PendingUpdate));
                }
            }
        }

        Ok(())
    }

    /// Adds a transaction after running pool policy.
    ///
    /// Policy and insertion happen under the same `&mut self` borrow, so no
    /// other admission can interleave between them.
    pub fn add<C: ChainView + ?Sized>(
        &mut self,
        tx: NameTransaction,
        chain: &C,
    ) -> Result<TxId, NameError> {
        self.check(&tx, chain)?;
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        Ok(self.insert(tx, sequence))
    }

    /// Returns the transactions of a disconnected block to the pool.
    ///
    /// They keep their block order and queue ahead of every pooled entry,
    /// so operations admitted on top of them are rebuilt after them. Pool
    /// policy still applies; refused transactions are returned with the
    /// reason.
    pub fn reinsert<C: ChainView + ?Sized>(
        &mut self,
        txs: Vec<NameTransaction>,
        chain: &C,
    ) -> Vec<(TxId, NameError)> {
        let count = u64::try_from(txs.len()).unwrap_or(u64::MAX);
        let first = self.front_sequence.saturating_sub(count);
        self.front_sequence = first;

        let mut refused = Vec::new();
        for (sequence, tx) in (first..).zip(txs) {
            match self.check(&tx, chain) {
                Ok(()) => {
                    self.insert(tx, sequence);
                }
                Err(err) => refused.push((tx.txid, err)),
            }
        }
        refused
    }

    /// Internal insert (assumes policy passed).
    fn insert(&mut self, tx: NameTransaction, sequence: u64) -> TxId {
        let txid = tx.txid;
        match &tx.operation {
            NameOperation::Claim { commitment } => {
                self.claims.insert(*commitment, txid);
            }
            NameOperation::Reveal { name, .. } => {
                self.by_name.entry(name.clone()).or_default().reveal = Some(txid);
            }
            NameOperation::Update { name, .. } => {
                self.by_name.entry(name.clone()).or_default().update = Some(txid);
            }
        }

        self.queue.insert(sequence, txid);
        self.by_txid.insert(txid, PoolEntry::new(tx, sequence));

        debug!(txid = %short_hex(&txid), pooled = self.by_txid.len(), "transaction pooled");
        txid
    }

    /// Removes an entry from the pool.
    pub fn remove(&mut self, txid: &TxId) -> Result<PoolEntry, NameError> {
        let entry = self
            .by_txid
            .remove(txid)
            .ok_or(NameError::TransactionNotFound(*txid))?;

        self.queue.remove(&entry.sequence);

        match &entry.tx.operation {
            NameOperation::Claim { commitment } => {
                self.claims.remove(commitment);
            }
            NameOperation::Reveal { name, .. } => {
                self.release_slot(name, |slots| &mut slots.reveal, txid);
            }
            NameOperation::Update { name, .. } => {
                self.release_slot(name, |slots| &mut slots.update, txid);
            }
        }

        Ok(entry)
    }

    fn release_slot(
        &mut self,
        name: &NameKey,
        slot: impl Fn(&mut NameSlots) -> &mut Option<TxId>,
        txid: &TxId,
    ) {
        let Some(slots) = self.by_name.get_mut(name) else {
            return;
        };
        let held = slot(slots);
        if held.as_ref() == Some(txid) {
            *held = None;
        }
        if slots.is_empty() {
            self.by_name.remove(name);
        }
    }

    /// Removes an entry that can no longer confirm.
    pub fn evict(&mut self, txid: &TxId, reason: &NameError) -> Result<PoolEntry, NameError> {
        let entry = self.remove(txid)?;
        debug!(
            txid = %short_hex(txid),
            op = entry.tx.operation.label(),
            reason = %reason,
            "transaction evicted"
        );
        Ok(entry)
    }

    /// Pending transactions for block building, in admission order.
    ///
    /// Only returns PENDING entries, not PENDING_INCLUSION.
    pub fn get_for_block(&self, max_count: usize) -> Vec<&NameTransaction> {
        self.queue
            .values()
            .filter_map(|txid| self.by_txid.get(txid))
            .take(max_count)
            .map(|entry| &entry.tx)
            .collect()
    }

    /// Proposes entries for block inclusion (phase 1).
    ///
    /// Moves entries from PENDING to PENDING_INCLUSION. Entries are NOT
    /// deleted.
    pub fn propose(&mut self, txids: &[TxId], block_height: BlockHeight) -> ProposeResult {
        let mut result = ProposeResult::default();

        for txid in txids {
            let Some(entry) = self.by_txid.get_mut(txid) else {
                result.not_found.push(*txid);
                continue;
            };

            if entry.propose(block_height).is_err() {
                result.already_pending.push(*txid);
                continue;
            }

            self.queue.remove(&entry.sequence);
            result.proposed.push(*txid);
        }

        result
    }

    /// Confirms inclusion (phase 2a). Permanently deletes the entries.
    pub fn confirm(&mut self, txids: &[TxId]) -> Vec<TxId> {
        txids
            .iter()
            .filter_map(|txid| self.remove(txid).ok())
            .map(|entry| entry.txid())
            .collect()
    }

    /// Rolls back proposed entries (phase 2b). Returns them to PENDING in
    /// their original admission position.
    pub fn rollback(&mut self, txids: &[TxId]) -> Vec<TxId> {
        let mut rolled_back = Vec::new();

        for txid in txids {
            let Some(entry) = self.by_txid.get_mut(txid) else {
                continue;
            };

            if entry.rollback().is_err() {
                continue;
            }

            self.queue.insert(entry.sequence, *txid);
            rolled_back.push(*txid);
        }

        rolled_back
    }

    /// Gets the pool status.
    pub fn status(&self) -> PoolStatus {
        PoolStatus {
            pending_count: self.pending_count(),
            pending_inclusion_count: self.pending_inclusion_count(),
            claim_count: self.claims.len(),
            reveal_count: self.by_name.values().filter(|s| s.reveal.is_some()).count(),
            update_count: self.by_name.values().filter(|s| s.update.is_some()).count(),
        }
    }
}
