//! # nc-02-name-state
//!
//! Name State Store for the name chain.
//!
//! ## Role in System
//!
//! - **Single Source of Truth**: authoritative confirmed record of every name
//! - **History**: optional append-only log of every value a name has held,
//!   spanning expiry and re-registration
//! - **Confirmed only**: nothing here ever reflects pooled operations
//!
//! ## Mutation Contract
//!
//! Records are written only while a block is being connected, after the
//! validation engine has accepted the operation at that block's height.
//! Disconnecting a block never inverse-patches the store: the runtime calls
//! `reset()` and replays the remaining chain.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! adapters/memory_db.rs  - InMemoryNameDb (NameDatabase)
//!        ↑ implements
//! ports/database.rs      - NameDatabase trait
//! ports/api.rs           - NameStateApi trait
//!        ↑ uses
//! domain/store.rs        - NameStateStore
//! domain/errors.rs       - StateError
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
