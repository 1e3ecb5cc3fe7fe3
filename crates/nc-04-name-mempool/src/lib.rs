//! # Name Mempool Subsystem
//!
//! Holds unconfirmed name transactions and enforces the pool-level conflict
//! policy, which is strictly tighter than chain-level validation: it keeps
//! mutually exclusive operations from ever sharing a future block.
//!
//! ## Pool Policy
//!
//! | Operation | Rejected when | Error |
//! |-----------|---------------|-------|
//! | Reveal / Update | identifier or value over its limit | `NameTooLong` / `ValueTooLong` |
//! | any | txid already pooled | `DuplicateTransaction` |
//! | any | pool at `max_transactions` | `PoolFull` |
//! | Claim | commitment pooled or on chain | `DuplicateClaim` |
//! | Reveal | a reveal for the name is pooled | `Conflict` (pending registration) |
//! | Reveal | the name is active at the tip | `Conflict` (name active) |
//! | Update | an update for the name is pooled | `Conflict` (pending update) |
//!
//! Policy runs on every insertion, whichever path submitted the
//! transaction, and length limits are checked before any other row. Nothing
//! bypasses `NamePool::add` or `NamePool::reinsert`.
//!
//! ## Two-Phase Commit
//!
//! Entries are never deleted when proposed for a block. Deletion occurs only
//! on confirmation.
//!
//! ```text
//! [PENDING] ──propose──→ [PENDING_INCLUSION] ──confirm──→ [DELETED]
//!                               │
//!                               └── rollback ──→ [PENDING]
//! ```
//!
//! ## Outbound Dependencies
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | `ChainView` | Name activity at the tip, confirmed claim lookup |
//!
//! ## Module Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ports/outbound.rs - ChainView trait                           │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  domain/entities.rs      - PoolEntry, EntryState, MempoolConfig │
//! │  domain/pool.rs          - NamePool with per-name indices      │
//! │  domain/value_objects.rs - NameSlots, PoolStatus, ProposeResult │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pool itself is not synchronised. The runtime wraps it in a single
//! mutex and runs policy, validation and insertion under that one lock, so
//! check-then-insert is atomic for every name.

pub mod domain;
pub mod ports;

pub use domain::*;
pub use ports::*;
