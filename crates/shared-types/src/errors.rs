//! # Error Types
//!
//! Defines the rejection type used across the name subsystems.

use crate::entities::{short_hex, BlockHeight, Commitment, NameKey, TxId};
use std::fmt;
use thiserror::Error;

/// Why an operation conflicts with chain or pool state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictReason {
    /// The name is active on chain.
    NameActive,
    /// Another reveal for the name is already pooled.
    PendingRegistration,
    /// Another update for the name is already pooled.
    PendingUpdate,
    /// The claim was already consumed by a confirmed reveal.
    ClaimAlreadyRevealed,
}

impl fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NameActive => "name is active",
            Self::PendingRegistration => "registration already pending",
            Self::PendingUpdate => "update already pending",
            Self::ClaimAlreadyRevealed => "claim already revealed",
        };
        f.write_str(text)
    }
}

/// Rejection category. Callers branch on this, never on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectKind {
    /// Identifier or value exceeds its structural limit.
    TooLong,
    /// Reveal does not match any confirmed claim.
    BadCommitment,
    /// Claim has not reached maturity.
    Immature,
    /// At-most-one-active or at-most-one-pending invariant violated.
    Conflict,
    /// Update targets a name that is not active.
    NotActive,
    /// Authorizer does not control the name or claim.
    NotOwner,
    /// Feature switched off in this node (history queries).
    FeatureDisabled,
    /// Pool bookkeeping failure (duplicate, capacity, unknown entry).
    Pool,
    /// Storage or internal failure unrelated to the submitted operation.
    Internal,
}

/// Errors returned by name submission, validation and queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// Identifier longer than `max_name_len`.
    #[error("name too long: {len} bytes exceeds limit of {max}")]
    NameTooLong { len: usize, max: usize },

    /// Value longer than `max_value_len`.
    #[error("value too long: {len} bytes exceeds limit of {max}")]
    ValueTooLong { len: usize, max: usize },

    /// No confirmed claim matches `(name, salt)`.
    #[error("no claim matches commitment for name {name}")]
    BadCommitment { name: NameKey },

    /// Claim is younger than the maturity threshold.
    #[error("claim for {name} immature: needs height {mature_at}, at {height}")]
    Immature {
        name: NameKey,
        mature_at: BlockHeight,
        height: BlockHeight,
    },

    /// Operation conflicts with chain or pool state.
    #[error("conflict on {name}: {reason}")]
    Conflict { name: NameKey, reason: ConflictReason },

    /// A claim with the same commitment is already confirmed or pooled.
    #[error("duplicate claim for commitment {}", short_hex(.commitment))]
    DuplicateClaim { commitment: Commitment },

    /// Update of a name that is expired or was never registered.
    #[error("name {name} is not active")]
    NotActive { name: NameKey },

    /// Authorizer is not the current owner.
    #[error("not the owner of {name}")]
    NotOwner { name: NameKey },

    /// History tracking is disabled on this node.
    #[error("name history is disabled")]
    HistoryDisabled,

    /// Transaction id already pooled.
    #[error("duplicate transaction {}", short_hex(.0))]
    DuplicateTransaction(TxId),

    /// Pool has reached capacity.
    #[error("pool full at {capacity} transactions")]
    PoolFull { capacity: usize },

    /// Transaction id not present in the pool.
    #[error("transaction not found: {}", short_hex(.0))]
    TransactionNotFound(TxId),

    /// Name state storage failure.
    #[error("state error: {0}")]
    State(String),
}

impl NameError {
    /// Returns the rejection category.
    pub fn kind(&self) -> RejectKind {
        match self {
            Self::NameTooLong { .. } | Self::ValueTooLong { .. } => RejectKind::TooLong,
            Self::BadCommitment { .. } => RejectKind::BadCommitment,
            Self::Immature { .. } => RejectKind::Immature,
            Self::Conflict { .. } | Self::DuplicateClaim { .. } => RejectKind::Conflict,
            Self::NotActive { .. } => RejectKind::NotActive,
            Self::NotOwner { .. } => RejectKind::NotOwner,
            Self::HistoryDisabled => RejectKind::FeatureDisabled,
            Self::DuplicateTransaction(_)
            | Self::PoolFull { .. }
            | Self::TransactionNotFound(_) => RejectKind::Pool,
            Self::State(_) => RejectKind::Internal,
        }
    }

    /// Shorthand for a conflict rejection.
    pub fn conflict(name: &NameKey, reason: ConflictReason) -> Self {
        Self::Conflict {
            name: name.clone(),
            reason,
        }
    }

    /// Returns true for rejections that may succeed later without any change
    /// to the transaction (the claim only needs to age).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Immature { .. })
    }
}
