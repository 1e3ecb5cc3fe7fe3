//! Ports for the name mempool.

pub mod outbound;

pub use outbound::*;
