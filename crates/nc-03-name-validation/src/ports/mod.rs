//! Ports layer for the Validation Engine.
//!
//! The engine only needs read access to confirmed ledger state.

pub mod ledger;

pub use ledger::*;
