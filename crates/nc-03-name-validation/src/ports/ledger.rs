//! # Outbound Port - LedgerView
//!
//! Read-only access to confirmed chain state.

use shared_types::{BlockHeight, ClaimRecord, Commitment, NameError, NameKey, NameRecord};

/// Read-only view over the confirmed chain.
///
/// Implemented by the runtime's ledger. Never reflects pooled operations.
pub trait LedgerView {
    /// Height of the confirmed tip.
    fn tip_height(&self) -> BlockHeight;

    /// Confirmed record of `name`, active or expired.
    fn name_record(&self, name: &NameKey) -> Result<Option<NameRecord>, NameError>;

    /// Confirmed claim carrying `commitment`.
    fn claim(&self, commitment: &Commitment) -> Result<Option<ClaimRecord>, NameError>;
}

/// Mock ledger for testing.
#[cfg(test)]
#[derive(Default)]
pub struct MockLedger {
    pub tip: BlockHeight,
    pub names: std::collections::HashMap<NameKey, NameRecord>,
    pub claims: std::collections::HashMap<Commitment, ClaimRecord>,
}

#[cfg(test)]
impl MockLedger {
    pub fn at(tip: BlockHeight) -> Self {
        Self {
            tip,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, record: NameRecord) -> Self {
        self.names.insert(record.name.clone(), record);
        self
    }

    pub fn with_claim(mut self, claim: ClaimRecord) -> Self {
        self.claims.insert(claim.commitment, claim);
        self
    }
}

#[cfg(test)]
impl LedgerView for MockLedger {
    fn tip_height(&self) -> BlockHeight {
        self.tip
    }

    fn name_record(&self, name: &NameKey) -> Result<Option<NameRecord>, NameError> {
        Ok(self.names.get(name).cloned())
    }

    fn claim(&self, commitment: &Commitment) -> Result<Option<ClaimRecord>, NameError> {
        Ok(self.claims.get(commitment).cloned())
    }
}
