//! # Core Domain Entities
//!
//! Defines the name-registration entities used across subsystems.
//!
//! ## Clusters
//!
//! - **Primitives**: `Hash`, `TxId`, `Address`, `BlockHeight`, `Salt`, `NameKey`
//! - **Chain**: `NameOperation`, `NameTransaction`, `NameBlock`
//! - **State**: `NameRecord`, `ClaimRecord`, `HistoryEntry`

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

// =============================================================================
// CLUSTER A: PRIMITIVES
// =============================================================================

/// A 32-byte hash.
pub type Hash = [u8; 32];

/// Transaction identifier (SHA-256 over the canonical encoding).
pub type TxId = Hash;

/// Output of the commitment codec over `(name, salt)`.
pub type Commitment = Hash;

/// A 20-byte address identifying the output that controls a name.
pub type Address = [u8; 20];

/// Height of a block in the linear chain. Genesis is height 0.
pub type BlockHeight = u64;

/// Length in bytes of a claim salt.
pub const SALT_LEN: usize = 20;

/// Random salt mixed into a claim commitment so the name stays hidden until
/// the reveal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Salt(pub [u8; SALT_LEN]);

impl Salt {
    /// Returns the raw salt bytes.
    pub fn as_bytes(&self) -> &[u8; SALT_LEN] {
        &self.0
    }
}

impl fmt::Debug for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Salt({})", hex::encode(self.0))
    }
}

/// The identifier of a name: an opaque byte string.
///
/// Length limits are policy (see `NameParams`) and are enforced by
/// `check_limits` at admission and validation, not by this type.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NameKey(Vec<u8>);

impl NameKey {
    /// Wraps raw identifier bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Returns the identifier bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the identifier in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for the empty identifier.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for NameKey {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for NameKey {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Long identifiers are truncated so log lines stay readable.
        let text = String::from_utf8_lossy(&self.0);
        if text.chars().count() > 64 {
            let head: String = text.chars().take(61).collect();
            write!(f, "{}...", head)
        } else {
            write!(f, "{}", text)
        }
    }
}

impl fmt::Debug for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NameKey({})", self)
    }
}

/// Short hex rendering of a hash for log fields and error messages.
pub fn short_hex(hash: &Hash) -> String {
    hex::encode(&hash[..4])
}

// =============================================================================
// CLUSTER B: THE CHAIN
// =============================================================================

/// A name operation carried by a transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameOperation {
    /// Hidden reservation of a name (phase one).
    Claim {
        /// Commitment over `(name, salt)`.
        commitment: Commitment,
    },
    /// Disclosure of a claimed name, creating or replacing its record.
    Reveal {
        /// The name being registered.
        name: NameKey,
        /// Salt used by the matching claim.
        salt: Salt,
        /// Initial value.
        value: Vec<u8>,
        /// Address that will control the name.
        owner: Address,
    },
    /// Change of value and/or owner of an active name.
    Update {
        /// The name being updated.
        name: NameKey,
        /// New value; the current value is kept when absent.
        value: Option<Vec<u8>>,
        /// New owner; the current owner is kept when absent.
        owner: Option<Address>,
    },
}

impl NameOperation {
    /// The name this operation touches in clear text. Claims hide it.
    pub fn name(&self) -> Option<&NameKey> {
        match self {
            Self::Claim { .. } => None,
            Self::Reveal { name, .. } | Self::Update { name, .. } => Some(name),
        }
    }

    /// Short label used in log fields.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Claim { .. } => "claim",
            Self::Reveal { .. } => "reveal",
            Self::Update { .. } => "update",
        }
    }

    fn encode_into(&self, hasher: &mut Sha256) {
        match self {
            Self::Claim { commitment } => {
                hasher.update([0u8]);
                hasher.update(commitment);
            }
            Self::Reveal {
                name,
                salt,
                value,
                owner,
            } => {
                hasher.update([1u8]);
                update_prefixed(hasher, name.as_bytes());
                hasher.update(salt.as_bytes());
                update_prefixed(hasher, value);
                hasher.update(owner);
            }
            Self::Update { name, value, owner } => {
                hasher.update([2u8]);
                update_prefixed(hasher, name.as_bytes());
                match value {
                    Some(v) => {
                        hasher.update([1u8]);
                        update_prefixed(hasher, v);
                    }
                    None => hasher.update([0u8]),
                }
                match owner {
                    Some(o) => {
                        hasher.update([1u8]);
                        hasher.update(o);
                    }
                    None => hasher.update([0u8]),
                }
            }
        }
    }
}

fn update_prefixed(hasher: &mut Sha256, bytes: &[u8]) {
    hasher.update((bytes.len() as u32).to_le_bytes());
    hasher.update(bytes);
}

/// A name transaction as submitted to the pool and stored in blocks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameTransaction {
    /// Transaction identifier.
    pub txid: TxId,
    /// The carried operation.
    pub operation: NameOperation,
    /// Address authorising the operation (claimant for claims and reveals,
    /// current owner for updates).
    pub authorizer: Address,
    /// Submission nonce keeping otherwise identical operations distinct.
    pub nonce: u64,
}

impl NameTransaction {
    /// Builds a transaction and computes its id.
    pub fn new(operation: NameOperation, authorizer: Address, nonce: u64) -> Self {
        let txid = Self::compute_txid(&operation, &authorizer, nonce);
        Self {
            txid,
            operation,
            authorizer,
            nonce,
        }
    }

    /// Computes the transaction id over the canonical encoding.
    pub fn compute_txid(operation: &NameOperation, authorizer: &Address, nonce: u64) -> TxId {
        let mut hasher = Sha256::new();
        operation.encode_into(&mut hasher);
        hasher.update(authorizer);
        hasher.update(nonce.to_le_bytes());
        hasher.finalize().into()
    }

    /// The name touched in clear text, if any.
    pub fn name(&self) -> Option<&NameKey> {
        self.operation.name()
    }
}

/// A confirmed block of name transactions.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NameBlock {
    /// Height of this block.
    pub height: BlockHeight,
    /// Transactions in confirmation order.
    pub transactions: Vec<NameTransaction>,
}

impl NameBlock {
    /// Creates an empty block at `height`.
    pub fn new(height: BlockHeight) -> Self {
        Self {
            height,
            transactions: Vec::new(),
        }
    }
}

// =============================================================================
// CLUSTER C: STATE
// =============================================================================

/// The confirmed record of a name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    /// The name.
    pub name: NameKey,
    /// Current value.
    pub value: Vec<u8>,
    /// Address controlling further updates.
    pub owner: Address,
    /// Transaction that last wrote this record.
    pub txid: TxId,
    /// Height of the reveal that started the current lifecycle.
    pub registered_at: BlockHeight,
    /// Height of the last reveal or update.
    pub last_updated_at: BlockHeight,
}

/// A confirmed claim in the ledger's claim index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// Transaction that carried the claim.
    pub txid: TxId,
    /// Commitment over `(name, salt)`.
    pub commitment: Commitment,
    /// Address that submitted the claim.
    pub claimant: Address,
    /// Height at which the claim confirmed.
    pub created_at: BlockHeight,
    /// Reveal that consumed this claim, once one has confirmed.
    pub revealed_by: Option<TxId>,
}

impl ClaimRecord {
    /// Returns true once a reveal has consumed the claim.
    pub fn is_revealed(&self) -> bool {
        self.revealed_by.is_some()
    }
}

/// One entry of a name's append-only history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Value written by the operation.
    pub value: Vec<u8>,
    /// Owner after the operation.
    pub owner: Address,
    /// Transaction that wrote the value.
    pub txid: TxId,
    /// Height at which the operation confirmed.
    pub height: BlockHeight,
}

impl From<&NameRecord> for HistoryEntry {
    fn from(record: &NameRecord) -> Self {
        Self {
            value: record.value.clone(),
            owner: record.owner,
            txid: record.txid,
            height: record.last_updated_at,
        }
    }
}
