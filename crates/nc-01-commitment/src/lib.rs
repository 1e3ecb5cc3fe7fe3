//! # nc-01-commitment - Claim Commitment Codec
//!
//! Builds and checks the salted commitment that hides a name during the
//! claim phase of registration.
//!
//! ## Components
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `hashing` | Domain-separated BLAKE3 hasher |
//! | `commitment` | `commit`, `verify`, salt generation |
//!
//! ## Security Properties
//!
//! - **Binding**: the commitment is a BLAKE3 derive-key hash over a
//!   length-prefixed name followed by the salt, so distinct `(name, salt)`
//!   pairs cannot collide by re-splitting bytes.
//! - **Hiding**: the 160-bit random salt prevents dictionary attacks on
//!   short names before the reveal.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod commitment;
pub mod hashing;

pub use commitment::{commit, random_salt, verify};
pub use hashing::Blake3Hasher;
