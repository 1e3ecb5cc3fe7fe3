//! # Name Engine
//!
//! Public face of the name chain: submission, queries, block assembly and
//! tip disconnection.
//!
//! ## Submission Paths
//!
//! | Method | Pool policy | Validation |
//! |--------|-------------|------------|
//! | `submit_claim` / `submit_reveal` / `submit_update` | yes | yes, at tip / tip + 1 |
//! | `inject_transaction` | yes | no |
//!
//! Pool policy cannot be skipped by any path. The injection path exists so
//! that operations the checked path would refuse can be handed straight to
//! the pool, which must still refuse the ones that could never be mined.

use crate::config::{ConfigError, NodeConfig};
use crate::ledger::Ledger;
use nc_01_commitment::{commit, random_salt, verify};
use nc_03_name_validation::{validate, LedgerView, ValidationContext};
use nc_04_name_mempool::{MempoolConfig, NamePool, PoolStatus};
use nc_05_name_lifecycle::{expires_in, matures_at, status, NameStatus};
use parking_lot::{Mutex, RwLock};
use shared_types::{
    check_limits, check_name_len, short_hex, Address, BlockHeight, Commitment, HistoryEntry,
    NameBlock, NameError, NameKey, NameOperation, NameParams, NameTransaction, Salt, TxId,
};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, warn};

/// Receipt of a pooled claim, needed to reveal it later.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimHandle {
    /// Claim transaction id.
    pub txid: TxId,
    /// Claimed name. Kept by the claimant, never published with the claim.
    pub name: NameKey,
    /// Salt mixed into the commitment.
    pub salt: Salt,
    /// Published commitment.
    pub commitment: Commitment,
    /// Address that submitted the claim and must authorize the reveal.
    pub claimant: Address,
}

/// Confirmed state of a name as reported by `query_name`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameInfo {
    /// The name.
    pub name: NameKey,
    /// Current value.
    pub value: Vec<u8>,
    /// Current owner.
    pub owner: Address,
    /// Transaction that last wrote the record.
    pub txid: TxId,
    /// Height of the reveal that started the current lifecycle.
    pub registered_at: BlockHeight,
    /// Height of the last reveal or update.
    pub height: BlockHeight,
    /// Lifecycle status at the tip.
    pub status: NameStatus,
    /// Blocks until expiry; zero or negative once expired.
    pub expires_in: i64,
    /// True once the validity window has passed.
    pub expired: bool,
}

/// The name chain engine.
pub struct NameEngine {
    params: NameParams,
    max_block_transactions: usize,
    /// Always locked before `ledger`.
    pool: Mutex<NamePool>,
    ledger: RwLock<Ledger>,
    nonce: AtomicU64,
}

impl NameEngine {
    /// Creates an engine at genesis.
    pub fn new(params: NameParams, mempool: MempoolConfig, history_enabled: bool) -> Self {
        info!(
            claim_maturity = params.claim_maturity,
            expiry_window = params.expiry_window,
            history_enabled,
            "creating name engine"
        );
        Self {
            params,
            max_block_transactions: mempool.max_block_transactions,
            pool: Mutex::new(NamePool::new(mempool, params)),
            ledger: RwLock::new(Ledger::new(params, history_enabled)),
            nonce: AtomicU64::new(0),
        }
    }

    /// Creates an engine from a validated configuration.
    pub fn from_config(config: &NodeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(
            config.names,
            config.mempool.clone(),
            config.name_history,
        ))
    }

    /// Engine with the regression-test profile.
    pub fn regtest() -> Self {
        let config = NodeConfig::regtest();
        Self::new(config.names, config.mempool, config.name_history)
    }

    /// Policy parameters.
    pub fn params(&self) -> &NameParams {
        &self.params
    }

    /// Height of the confirmed tip.
    pub fn tip_height(&self) -> BlockHeight {
        self.ledger.read().tip_height()
    }

    fn next_nonce(&self) -> u64 {
        self.nonce.fetch_add(1, Ordering::Relaxed)
    }

    // =========================================================================
    // SUBMISSION
    // =========================================================================

    /// Submits a claim for `name` under `salt`.
    ///
    /// Only the commitment is published. The returned handle carries what
    /// the claimant needs to reveal later.
    pub fn submit_claim(
        &self,
        name: &NameKey,
        salt: Salt,
        claimant: Address,
    ) -> Result<ClaimHandle, NameError> {
        check_name_len(name, &self.params)?;
        let commitment = commit(name, &salt);
        let tx = NameTransaction::new(NameOperation::Claim { commitment }, claimant, self.next_nonce());
        let txid = self.admit(tx)?;
        Ok(ClaimHandle {
            txid,
            name: name.clone(),
            salt,
            commitment,
            claimant,
        })
    }

    /// Submits a claim for `name` under a fresh random salt.
    pub fn submit_claim_with_random_salt(
        &self,
        name: &NameKey,
        claimant: Address,
    ) -> Result<ClaimHandle, NameError> {
        self.submit_claim(name, random_salt(), claimant)
    }

    /// Reveals a claim, registering its name with `value` and `owner`.
    ///
    /// A handle whose name or salt no longer matches its commitment is
    /// refused as `BadCommitment` without consulting chain or pool state.
    pub fn submit_reveal(
        &self,
        handle: &ClaimHandle,
        value: &[u8],
        owner: Address,
    ) -> Result<TxId, NameError> {
        let op = NameOperation::Reveal {
            name: handle.name.clone(),
            salt: handle.salt,
            value: value.to_vec(),
            owner,
        };
        check_limits(&op, &self.params)?;
        if !verify(&handle.commitment, &handle.name, &handle.salt) {
            warn!(name = %handle.name, "claim handle does not match its commitment");
            return Err(NameError::BadCommitment {
                name: handle.name.clone(),
            });
        }
        self.admit(NameTransaction::new(op, handle.claimant, self.next_nonce()))
    }

    /// Updates an active name. Absent fields keep their current values.
    pub fn submit_update(
        &self,
        name: &NameKey,
        value: Option<&[u8]>,
        owner: Option<Address>,
        authorizer: Address,
    ) -> Result<TxId, NameError> {
        let op = NameOperation::Update {
            name: name.clone(),
            value: value.map(<[u8]>::to_vec),
            owner,
        };
        self.admit(NameTransaction::new(op, authorizer, self.next_nonce()))
    }

    /// Hands `tx` to the pool without validating it against the ledger.
    ///
    /// Pool policy still applies.
    pub fn inject_transaction(&self, tx: NameTransaction) -> Result<TxId, NameError> {
        let mut pool = self.pool.lock();
        let ledger = self.ledger.read();
        pool.add(tx, &*ledger).map_err(|err| {
            warn!(error = %err, "injected transaction rejected");
            err
        })
    }

    /// Checked admission: structural limits, then pool policy, validation
    /// and insertion under the pool lock.
    fn admit(&self, tx: NameTransaction) -> Result<TxId, NameError> {
        let mut pool = self.pool.lock();
        let ledger = self.ledger.read();
        let ctx = ValidationContext::admission(&self.params, ledger.tip_height());

        let result = check_limits(&tx.operation, &self.params)
            .and_then(|()| pool.check(&tx, &*ledger))
            .and_then(|()| {
                validate(&tx, &*ledger, &ctx)
                    .map_err(|err| pooled_claim_is_immature(err, &tx, &pool, &ctx))
            })
            .and_then(|_effect| pool.add(tx.clone(), &*ledger));

        match &result {
            Ok(txid) => debug!(
                op = tx.operation.label(),
                txid = %short_hex(txid),
                "transaction admitted"
            ),
            Err(err) => warn!(
                op = tx.operation.label(),
                name = %tx.name().map(ToString::to_string).unwrap_or_default(),
                kind = ?err.kind(),
                error = %err,
                "transaction rejected"
            ),
        }
        result
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Confirmed state of `name` at the tip, or `None` if it was never
    /// registered. Pooled operations are never visible.
    pub fn query_name(&self, name: &NameKey) -> Result<Option<NameInfo>, NameError> {
        let ledger = self.ledger.read();
        let tip = ledger.tip_height();
        let Some(record) = ledger.record(name)? else {
            return Ok(None);
        };

        let status = status(Some(&record), tip, &self.params);
        Ok(Some(NameInfo {
            expires_in: expires_in(&record, tip, &self.params),
            expired: !status.is_active(),
            status,
            registered_at: record.registered_at,
            height: record.last_updated_at,
            name: record.name,
            value: record.value,
            owner: record.owner,
            txid: record.txid,
        }))
    }

    /// Every value `name` has held, oldest first.
    ///
    /// # Errors
    /// `HistoryDisabled` when the node does not track history.
    pub fn query_history(&self, name: &NameKey) -> Result<Vec<HistoryEntry>, NameError> {
        self.ledger.read().history(name)
    }

    /// Confirmed block at `height`.
    pub fn block(&self, height: BlockHeight) -> Option<NameBlock> {
        self.ledger.read().block(height).cloned()
    }

    /// Returns true if `txid` is pooled.
    pub fn is_pooled(&self, txid: &TxId) -> bool {
        self.pool.lock().contains(txid)
    }

    /// Pool status snapshot.
    pub fn pool_status(&self) -> PoolStatus {
        self.pool.lock().status()
    }

    // =========================================================================
    // CHAIN CONTROL
    // =========================================================================

    /// Mines `count` blocks from the pool and returns them.
    pub fn generate(&self, count: usize) -> Result<Vec<NameBlock>, NameError> {
        let mut pool = self.pool.lock();
        let mut ledger = self.ledger.write();
        (0..count)
            .map(|_| self.mine_block(&mut pool, &mut ledger))
            .collect()
    }

    /// Assembles and connects one block.
    ///
    /// Candidates are proposed, then re-validated one by one at the block
    /// height, each seeing the effects of those accepted before it.
    fn mine_block(&self, pool: &mut NamePool, ledger: &mut Ledger) -> Result<NameBlock, NameError> {
        let height = ledger.tip_height() + 1;
        let ctx = ValidationContext::confirmation(&self.params, height);

        let candidates: Vec<NameTransaction> = pool
            .get_for_block(self.max_block_transactions)
            .into_iter()
            .cloned()
            .collect();
        let proposed: Vec<TxId> = candidates.iter().map(|tx| tx.txid).collect();
        pool.propose(&proposed, height);

        let mut block = NameBlock::new(height);
        let mut deferred = Vec::new();
        let mut invalid = Vec::new();

        for tx in candidates {
            let effect = validate(&tx, &*ledger, &ctx)
                .map_err(|err| pooled_claim_is_immature(err, &tx, &*pool, &ctx));
            match effect {
                Ok(effect) => {
                    if let Err(err) = ledger.apply(&effect) {
                        // Undo the partial block.
                        pool.rollback(&proposed);
                        ledger.rebuild()?;
                        return Err(err);
                    }
                    block.transactions.push(tx);
                }
                Err(err) if err.is_transient() => deferred.push(tx.txid),
                Err(err) => invalid.push((tx.txid, err)),
            }
        }

        let included: Vec<TxId> = block.transactions.iter().map(|tx| tx.txid).collect();
        pool.confirm(&included);
        pool.rollback(&deferred);
        for (txid, reason) in &invalid {
            if pool.evict(txid, reason).is_ok() {
                warn!(
                    txid = %short_hex(txid),
                    height,
                    reason = %reason,
                    "pooled transaction can no longer confirm"
                );
            }
        }

        ledger.push_block(block.clone());
        Ok(block)
    }

    /// Disconnects the tip block and returns its transactions to the pool.
    ///
    /// Ledger state is rebuilt by replaying the remaining chain. The
    /// disconnected transactions go back through pool policy ahead of
    /// everything already pooled, in block order; those it refuses are
    /// dropped. Returns `None` at genesis.
    pub fn disconnect_tip(&self) -> Result<Option<NameBlock>, NameError> {
        let mut pool = self.pool.lock();
        let mut ledger = self.ledger.write();

        let Some(block) = ledger.disconnect_tip()? else {
            return Ok(None);
        };

        let refused = pool.reinsert(block.transactions.clone(), &*ledger);
        for (txid, err) in &refused {
            warn!(
                txid = %short_hex(txid),
                error = %err,
                "disconnected transaction not re-admitted"
            );
        }
        Ok(Some(block))
    }
}

/// A reveal whose claim is still pooled is reported as immature rather than
/// as a bad commitment: the claim exists, it just has no height yet.
fn pooled_claim_is_immature(
    err: NameError,
    tx: &NameTransaction,
    pool: &NamePool,
    ctx: &ValidationContext<'_>,
) -> NameError {
    match (&err, &tx.operation) {
        (NameError::BadCommitment { .. }, NameOperation::Reveal { name, salt, .. })
            if pool.has_claim(&commit(name, salt)) =>
        {
            NameError::Immature {
                name: name.clone(),
                mature_at: matures_at(ctx.inclusion_height, ctx.params),
                height: ctx.inclusion_height,
            }
        }
        _ => err,
    }
}
