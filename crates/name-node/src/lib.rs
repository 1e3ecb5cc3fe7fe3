//! # Name Node Runtime
//!
//! Wires the name subsystems into a single engine over an in-memory,
//! height-ordered linear chain.
//!
//! ## Modules
//!
//! - `config` - `NodeConfig` (TOML, environment overrides, validation)
//! - `telemetry` - tracing subscriber setup
//! - `ledger` - confirmed blocks, claim index and name state
//! - `engine` - `NameEngine`: submission, queries, block assembly, reorgs
//!
//! ## Transaction Flow
//!
//! ```text
//! submit_* ──→ [pool lock] ──→ Mempool Policy (nc-04)
//!                                   │ ok
//!                                   ↓
//!                          Validation Engine (nc-03) at tip / tip+1
//!                                   │ ok
//!                                   ↓
//!                              pool insert
//!
//! generate ──→ [pool lock] ──→ propose ──→ re-validate at block height
//!                                            │
//!              ┌─────────────────────────────┼───────────────────┐
//!              ↓                             ↓                   ↓
//!         valid: apply to ledger     immature: rollback    invalid: evict
//!         and confirm in pool        (stays pooled)
//! ```
//!
//! ## Locking
//!
//! The pool mutex is always taken before the ledger lock. Admission holds the
//! pool mutex across policy, validation and insertion, so two racing
//! submissions for the same name can never both pass.

#![warn(missing_docs)]

pub mod config;
pub mod engine;
pub mod ledger;
pub mod telemetry;

pub use config::{load_config, ConfigError, LoggingConfig, NodeConfig};
pub use engine::{ClaimHandle, NameEngine, NameInfo};
pub use ledger::Ledger;
pub use telemetry::init_logging;
