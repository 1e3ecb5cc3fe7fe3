//! # Shared Types Crate
//!
//! This crate contains the domain entities and error types shared by every
//! name subsystem: the commitment codec, the name state store, the
//! validation engine, the name mempool and the node runtime.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Confirmed vs. pooled**: `NameRecord` and `ClaimRecord` only ever
//!   describe confirmed chain state. Pooled operations are plain
//!   `NameTransaction`s.
//! - **Categorised rejections**: Every rejection is a `NameError` whose
//!   `kind()` callers branch on; message text is for humans only.

pub mod entities;
pub mod errors;
pub mod limits;
pub mod params;

pub use entities::*;
pub use errors::*;
pub use limits::*;
pub use params::*;
