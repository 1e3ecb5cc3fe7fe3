//! # Name Chain Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── integration/      # Cross-crate flows through NameEngine
//! │   ├── name_registration.rs   # Full claim/reveal/update/expiry walk
//! │   ├── lifecycle.rs           # Expiry, re-registration, reorgs
//! │   └── concurrent_admission.rs
//! │
//! └── regression/       # Previously broken behaviour
//!     └── pool_injection.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p nc-tests
//!
//! # By category
//! cargo test -p nc-tests integration::
//! cargo test -p nc-tests regression::
//! ```


/// Shared fixtures.
#[cfg(test)]
pub mod fixtures {
    use name_node::NameEngine;
    use shared_types::{Address, NameKey};

    /// First test wallet.
    pub const ALICE: Address = [0xA1; 20];
    /// Second test wallet.
    pub const BOB: Address = [0xB0; 20];

    /// Height the regression network starts the name tests at.
    pub const START_HEIGHT: usize = 200;

    /// Regtest engine with `START_HEIGHT` empty blocks mined.
    pub fn engine_at_start() -> NameEngine {
        let engine = NameEngine::regtest();
        engine
            .generate(START_HEIGHT)
            .expect("mining empty blocks cannot fail");
        engine
    }

    /// Shorthand for a name key.
    pub fn key(name: &str) -> NameKey {
        NameKey::from(name)
    }

    /// Value history of `name` as strings.
    pub fn history(engine: &NameEngine, name: &str) -> Vec<String> {
        engine
            .query_history(&key(name))
            .expect("history is enabled on regtest")
            .into_iter()
            .map(|entry| String::from_utf8_lossy(&entry.value).into_owned())
            .collect()
    }
}
