//! Effects of accepted operations, applied by the runtime on confirmation.

use shared_types::{ClaimRecord, Commitment, NameKey, NameRecord, TxId};

/// What an accepted operation changes once its block confirms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NameEffect {
    /// A new claim enters the ledger's claim index.
    Claim(ClaimRecord),
    /// A reveal consumes `claim` and writes a fresh record.
    Register {
        /// Commitment of the consumed claim.
        claim: Commitment,
        /// The new record (new lifecycle).
        record: NameRecord,
    },
    /// An update rewrites an active record.
    Update(NameRecord),
}

impl NameEffect {
    /// Transaction that produced the effect.
    pub fn txid(&self) -> TxId {
        match self {
            Self::Claim(claim) => claim.txid,
            Self::Register { record, .. } | Self::Update(record) => record.txid,
        }
    }

    /// Name written by the effect. Claims write none.
    pub fn name(&self) -> Option<&NameKey> {
        match self {
            Self::Claim(_) => None,
            Self::Register { record, .. } | Self::Update(record) => Some(&record.name),
        }
    }

    /// Record written by the effect, if any.
    pub fn record(&self) -> Option<&NameRecord> {
        match self {
            Self::Claim(_) => None,
            Self::Register { record, .. } | Self::Update(record) => Some(record),
        }
    }
}
