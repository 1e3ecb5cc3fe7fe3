//! # nc-03-name-validation - Validation Engine
//!
//! Pure decision functions deciding whether a claim, reveal or update is
//! valid against confirmed ledger state at a given height.
//!
//! ## Rules
//!
//! | Operation | Rejection | Error |
//! |-----------|-----------|-------|
//! | Claim submission | identifier over `max_name_len` | `NameTooLong` |
//! | Claim | commitment already on chain | `DuplicateClaim` |
//! | Reveal | identifier / value over limit | `NameTooLong` / `ValueTooLong` |
//! | Reveal | no confirmed claim for `(name, salt)` | `BadCommitment` |
//! | Reveal | authorizer is not the claimant | `NotOwner` |
//! | Reveal | claim younger than `claim_maturity` | `Immature` |
//! | Reveal | claim already consumed | `Conflict` |
//! | Reveal | name active | `Conflict` |
//! | Update | identifier / value over limit | `NameTooLong` / `ValueTooLong` |
//! | Update | name expired or unregistered | `NotActive` |
//! | Update | authorizer is not the owner | `NotOwner` |
//!
//! ## Heights
//!
//! Every check takes a `ValidationContext` carrying two heights: the height
//! name activity is judged at and the height the transaction would confirm
//! at. Pool admission judges activity at the tip and maturity at tip + 1;
//! block connection uses the block height for both. The same functions run
//! at both stages, because an admission-time snapshot can be stale by the
//! time the transaction is mined.
//!
//! Functions never mutate anything. They return a `NameEffect` that the
//! runtime applies when (and only when) a block confirms the transaction.

pub mod domain;
pub mod ports;

pub use domain::*;
pub use ports::*;
