//! Outbound (Driven) ports for the name mempool.

use shared_types::{Commitment, NameError, NameKey};

/// Confirmed chain state the pool policy consults.
///
/// Answers are taken at the current tip.
pub trait ChainView {
    /// Returns true if `name` is active at the tip.
    fn is_name_active(&self, name: &NameKey) -> Result<bool, NameError>;

    /// Returns true if a claim with `commitment` is confirmed.
    fn claim_exists(&self, commitment: &Commitment) -> Result<bool, NameError>;
}

/// Mock chain view for testing.
#[cfg(test)]
#[derive(Default)]
pub struct MockChainView {
    active: std::collections::HashSet<NameKey>,
    claims: std::collections::HashSet<Commitment>,
}

#[cfg(test)]
impl MockChainView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_active(mut self, name: &str) -> Self {
        self.active.insert(NameKey::from(name));
        self
    }

    pub fn with_claim(mut self, commitment: Commitment) -> Self {
        self.claims.insert(commitment);
        self
    }
}

#[cfg(test)]
impl ChainView for MockChainView {
    fn is_name_active(&self, name: &NameKey) -> Result<bool, NameError> {
        Ok(self.active.contains(name))
    }

    fn claim_exists(&self, commitment: &Commitment) -> Result<bool, NameError> {
        Ok(self.claims.contains(commitment))
    }
}
