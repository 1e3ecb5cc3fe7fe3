//! # In-Memory Ledger
//!
//! Confirmed blocks, the claim index and the Name State Store of one chain.
//!
//! The ledger only changes by applying the effects of validated operations
//! while a block connects. Disconnecting a block never patches state
//! backwards: the remaining blocks are replayed from genesis through the
//! same validation rules.

use nc_02_name_state::{NameStateApi, NameStateStore};
use nc_03_name_validation::{validate, LedgerView, NameEffect, ValidationContext};
use nc_04_name_mempool::ChainView;
use nc_05_name_lifecycle::is_active;
use shared_types::{
    short_hex, BlockHeight, ClaimRecord, Commitment, HistoryEntry, NameBlock, NameError,
    NameKey, NameParams, NameRecord,
};
use std::collections::HashMap;
use tracing::{debug, info};

/// Confirmed chain state.
pub struct Ledger {
    params: NameParams,
    /// Blocks by height; index 0 is the empty genesis block.
    blocks: Vec<NameBlock>,
    claims: HashMap<Commitment, ClaimRecord>,
    state: NameStateStore,
}

impl Ledger {
    /// Creates a ledger holding only the genesis block.
    pub fn new(params: NameParams, history_enabled: bool) -> Self {
        Self::with_store(params, NameStateStore::in_memory(history_enabled))
    }

    /// Creates a ledger over an existing (empty) store.
    pub fn with_store(params: NameParams, state: NameStateStore) -> Self {
        Self {
            params,
            blocks: vec![NameBlock::new(0)],
            claims: HashMap::new(),
            state,
        }
    }

    /// Policy parameters of this chain.
    pub fn params(&self) -> &NameParams {
        &self.params
    }

    /// Confirmed block at `height`.
    pub fn block(&self, height: BlockHeight) -> Option<&NameBlock> {
        usize::try_from(height).ok().and_then(|i| self.blocks.get(i))
    }

    /// Current confirmed record of `name`, active or expired.
    pub fn record(&self, name: &NameKey) -> Result<Option<NameRecord>, NameError> {
        Ok(self.state.get(name)?)
    }

    /// History of `name`.
    pub fn history(&self, name: &NameKey) -> Result<Vec<HistoryEntry>, NameError> {
        Ok(self.state.history(name)?)
    }

    /// Returns true if value history is tracked.
    pub fn history_enabled(&self) -> bool {
        self.state.history_enabled()
    }

    /// Applies the effect of an operation confirmed in the block being
    /// connected.
    pub fn apply(&mut self, effect: &NameEffect) -> Result<(), NameError> {
        match effect {
            NameEffect::Claim(claim) => {
                debug!(
                    commitment = %short_hex(&claim.commitment),
                    height = claim.created_at,
                    "claim confirmed"
                );
                self.claims.insert(claim.commitment, claim.clone());
            }
            NameEffect::Register { claim, record } => {
                if let Some(entry) = self.claims.get_mut(claim) {
                    entry.revealed_by = Some(record.txid);
                }
                info!(
                    name = %record.name,
                    txid = %short_hex(&record.txid),
                    height = record.registered_at,
                    "name registered"
                );
                self.state.put(record.clone())?;
            }
            NameEffect::Update(record) => {
                info!(
                    name = %record.name,
                    txid = %short_hex(&record.txid),
                    height = record.last_updated_at,
                    "name updated"
                );
                self.state.put(record.clone())?;
            }
        }
        Ok(())
    }

    /// Appends a block whose operations were already applied.
    pub fn push_block(&mut self, block: NameBlock) {
        info!(
            height = block.height,
            transactions = block.transactions.len(),
            "block connected"
        );
        self.blocks.push(block);
    }

    /// Removes the tip block and rebuilds state from the remaining chain.
    ///
    /// Returns `None` when only genesis is left.
    pub fn disconnect_tip(&mut self) -> Result<Option<NameBlock>, NameError> {
        if self.blocks.len() <= 1 {
            return Ok(None);
        }
        let block = self.blocks.pop();
        if let Some(ref block) = block {
            info!(height = block.height, "block disconnected");
        }
        self.rebuild()?;
        Ok(block)
    }

    /// Rebuilds the claim index and name state by replaying every block
    /// from genesis.
    pub fn rebuild(&mut self) -> Result<(), NameError> {
        self.state.reset()?;
        self.claims.clear();

        let blocks = std::mem::take(&mut self.blocks);
        let result = self.replay(&blocks);
        self.blocks = blocks;
        result?;

        let names = self.state.record_count()?;
        debug!(
            tip = self.tip_height(),
            names,
            claims = self.claims.len(),
            "ledger rebuilt"
        );
        Ok(())
    }

    fn replay(&mut self, blocks: &[NameBlock]) -> Result<(), NameError> {
        let params = self.params;
        for block in blocks {
            let ctx = ValidationContext::confirmation(&params, block.height);
            for tx in &block.transactions {
                let effect = validate(tx, &*self, &ctx)?;
                self.apply(&effect)?;
            }
        }
        Ok(())
    }
}

impl LedgerView for Ledger {
    fn tip_height(&self) -> BlockHeight {
        self.blocks.last().map_or(0, |block| block.height)
    }

    fn name_record(&self, name: &NameKey) -> Result<Option<NameRecord>, NameError> {
        self.record(name)
    }

    fn claim(&self, commitment: &Commitment) -> Result<Option<ClaimRecord>, NameError> {
        Ok(self.claims.get(commitment).cloned())
    }
}

impl ChainView for Ledger {
    fn is_name_active(&self, name: &NameKey) -> Result<bool, NameError> {
        let record = self.record(name)?;
        Ok(is_active(record.as_ref(), self.tip_height(), &self.params))
    }

    fn claim_exists(&self, commitment: &Commitment) -> Result<bool, NameError> {
        Ok(self.claims.contains_key(commitment))
    }
}
