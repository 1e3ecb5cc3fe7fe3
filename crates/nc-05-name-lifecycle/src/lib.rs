//! # nc-05-name-lifecycle
//!
//! Expiry and maturity arithmetic for names and claims.
//!
//! Every function here is a pure function of a record and a height. Nothing
//! caches "is active": heights move between pool admission and block
//! confirmation, so callers always re-evaluate against the height they care
//! about.
//!
//! ```text
//! unregistered ──reveal──→ active ──height ≥ last_updated_at + window──→ expired
//!                            ↑  │                                          │
//!                            └──┘ update (renews)          reveal (new lifecycle)
//! ```

use serde::{Deserialize, Serialize};
use shared_types::{BlockHeight, NameParams, NameRecord};

/// Lifecycle status of a name at a given height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameStatus {
    /// No record exists.
    Unregistered,
    /// Active, with `remaining` blocks until expiry (always ≥ 1).
    Active { remaining: u64 },
    /// Record exists but its validity window has passed.
    Expired,
}

impl NameStatus {
    /// Returns true for `Active`.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    /// Returns true if the name may be registered by a fresh reveal.
    pub fn is_available(&self) -> bool {
        !self.is_active()
    }
}

/// First height at which the record is no longer active.
pub fn expires_at(record: &NameRecord, params: &NameParams) -> BlockHeight {
    record.last_updated_at.saturating_add(params.expiry_window)
}

/// Signed blocks remaining until expiry, as reported by name queries.
///
/// Zero or negative once expired.
pub fn expires_in(record: &NameRecord, height: BlockHeight, params: &NameParams) -> i64 {
    let delta = expires_at(record, params) as i128 - height as i128;
    delta.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

/// Lifecycle status of `record` at `height`.
pub fn status(record: Option<&NameRecord>, height: BlockHeight, params: &NameParams) -> NameStatus {
    let Some(record) = record else {
        return NameStatus::Unregistered;
    };
    let end = expires_at(record, params);
    if height < end {
        NameStatus::Active {
            remaining: end - height,
        }
    } else {
        NameStatus::Expired
    }
}

/// Returns true if `record` is active at `height`.
pub fn is_active(record: Option<&NameRecord>, height: BlockHeight, params: &NameParams) -> bool {
    status(record, height, params).is_active()
}

/// First height at which a claim confirmed at `claim_height` may back a
/// reveal.
pub fn matures_at(claim_height: BlockHeight, params: &NameParams) -> BlockHeight {
    claim_height.saturating_add(params.claim_maturity)
}

/// Returns true if a claim confirmed at `claim_height` may back a reveal
/// confirming at `height`.
pub fn is_mature(claim_height: BlockHeight, height: BlockHeight, params: &NameParams) -> bool {
    height >= matures_at(claim_height, params)
}
