//! Claim, reveal and update rules.
//!
//! Checks run in a fixed order so a transaction failing several rules is
//! always reported under the same category: structural limits first, then
//! commitment and authorization, then height-dependent rules.

use crate::domain::{NameEffect, ValidationContext};
use crate::ports::LedgerView;
use nc_01_commitment::commit;
use nc_05_name_lifecycle::{is_active, is_mature, matures_at};
use shared_types::{
    check_name_len, check_value_len, Address, ClaimRecord, Commitment, ConflictReason,
    NameError, NameKey, NameOperation, NameRecord, NameTransaction, Salt,
};
use tracing::trace;

/// Validates `tx` against confirmed state and returns its effect.
pub fn validate<L: LedgerView + ?Sized>(
    tx: &NameTransaction,
    ledger: &L,
    ctx: &ValidationContext<'_>,
) -> Result<NameEffect, NameError> {
    let result = match &tx.operation {
        NameOperation::Claim { commitment } => check_claim(tx, commitment, ledger, ctx),
        NameOperation::Reveal {
            name,
            salt,
            value,
            owner,
        } => check_reveal(tx, name, salt, value, *owner, ledger, ctx),
        NameOperation::Update { name, value, owner } => {
            check_update(tx, name, value.as_deref(), *owner, ledger, ctx)
        }
    };
    if let Err(ref err) = result {
        trace!(
            op = tx.operation.label(),
            stage = ?ctx.stage,
            height = ctx.inclusion_height,
            error = %err,
            "operation rejected"
        );
    }
    result
}

/// A claim is valid unless its commitment is already on chain.
pub fn check_claim<L: LedgerView + ?Sized>(
    tx: &NameTransaction,
    commitment: &Commitment,
    ledger: &L,
    ctx: &ValidationContext<'_>,
) -> Result<NameEffect, NameError> {
    if ledger.claim(commitment)?.is_some() {
        return Err(NameError::DuplicateClaim {
            commitment: *commitment,
        });
    }
    Ok(NameEffect::Claim(ClaimRecord {
        txid: tx.txid,
        commitment: *commitment,
        claimant: tx.authorizer,
        created_at: ctx.inclusion_height,
        revealed_by: None,
    }))
}

/// A reveal must match a mature, unconsumed claim of the same authorizer
/// and target a name that is not active.
pub fn check_reveal<L: LedgerView + ?Sized>(
    tx: &NameTransaction,
    name: &NameKey,
    salt: &Salt,
    value: &[u8],
    owner: Address,
    ledger: &L,
    ctx: &ValidationContext<'_>,
) -> Result<NameEffect, NameError> {
    check_name_len(name, ctx.params)?;
    check_value_len(value, ctx.params)?;

    let commitment = commit(name, salt);
    let claim = ledger
        .claim(&commitment)?
        .ok_or_else(|| NameError::BadCommitment { name: name.clone() })?;

    if claim.claimant != tx.authorizer {
        return Err(NameError::NotOwner { name: name.clone() });
    }

    if !is_mature(claim.created_at, ctx.inclusion_height, ctx.params) {
        return Err(NameError::Immature {
            name: name.clone(),
            mature_at: matures_at(claim.created_at, ctx.params),
            height: ctx.inclusion_height,
        });
    }

    let current = ledger.name_record(name)?;
    if is_active(current.as_ref(), ctx.activity_height, ctx.params) {
        return Err(NameError::conflict(name, ConflictReason::NameActive));
    }

    if claim.is_revealed() {
        return Err(NameError::conflict(name, ConflictReason::ClaimAlreadyRevealed));
    }

    Ok(NameEffect::Register {
        claim: commitment,
        record: NameRecord {
            name: name.clone(),
            value: value.to_vec(),
            owner,
            txid: tx.txid,
            registered_at: ctx.inclusion_height,
            last_updated_at: ctx.inclusion_height,
        },
    })
}

/// An update must target an active name and be authorized by its owner.
pub fn check_update<L: LedgerView + ?Sized>(
    tx: &NameTransaction,
    name: &NameKey,
    value: Option<&[u8]>,
    owner: Option<Address>,
    ledger: &L,
    ctx: &ValidationContext<'_>,
) -> Result<NameEffect, NameError> {
    check_name_len(name, ctx.params)?;
    if let Some(value) = value {
        check_value_len(value, ctx.params)?;
    }

    let current = match ledger.name_record(name)? {
        Some(record) if is_active(Some(&record), ctx.activity_height, ctx.params) => record,
        _ => return Err(NameError::NotActive { name: name.clone() }),
    };

    if current.owner != tx.authorizer {
        return Err(NameError::NotOwner { name: name.clone() });
    }

    Ok(NameEffect::Update(NameRecord {
        name: name.clone(),
        value: value.map_or(current.value, <[u8]>::to_vec),
        owner: owner.unwrap_or(current.owner),
        txid: tx.txid,
        registered_at: current.registered_at,
        last_updated_at: ctx.inclusion_height,
    }))
}
