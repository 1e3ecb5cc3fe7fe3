//! # Domain Layer - Validation Engine
//!
//! - `context`: `ValidationContext` (heights + params)
//! - `effects`: `NameEffect` produced by accepted operations
//! - `rules`: claim / reveal / update decisions

pub mod context;
pub mod effects;
pub mod rules;

pub use context::*;
pub use effects::*;
pub use rules::*;
