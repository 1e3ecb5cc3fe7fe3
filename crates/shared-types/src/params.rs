//! # Name Policy Parameters
//!
//! Structural limits and height windows shared by validation, the mempool
//! and the lifecycle scheduler.

use serde::{Deserialize, Serialize};

/// Default maximum identifier length in bytes.
pub const DEFAULT_MAX_NAME_LEN: usize = 255;

/// Default maximum value length in bytes.
pub const DEFAULT_MAX_VALUE_LEN: usize = 520;

/// Default number of confirmations before a claim may be revealed.
pub const DEFAULT_CLAIM_MATURITY: u64 = 12;

/// Default number of blocks a name stays active after its last update.
pub const DEFAULT_EXPIRY_WINDOW: u64 = 36_000;

/// Expiry window of the regression-test network.
pub const REGTEST_EXPIRY_WINDOW: u64 = 30;

/// Name policy parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameParams {
    /// Maximum identifier length in bytes.
    pub max_name_len: usize,
    /// Maximum value length in bytes.
    pub max_value_len: usize,
    /// Confirmations required before a claim can back a reveal.
    pub claim_maturity: u64,
    /// Blocks after `last_updated_at` during which a name is active.
    pub expiry_window: u64,
}

impl Default for NameParams {
    fn default() -> Self {
        Self {
            max_name_len: DEFAULT_MAX_NAME_LEN,
            max_value_len: DEFAULT_MAX_VALUE_LEN,
            claim_maturity: DEFAULT_CLAIM_MATURITY,
            expiry_window: DEFAULT_EXPIRY_WINDOW,
        }
    }
}

impl NameParams {
    /// Parameters of the regression-test network (short expiry).
    pub fn regtest() -> Self {
        Self {
            expiry_window: REGTEST_EXPIRY_WINDOW,
            ..Self::default()
        }
    }
}
