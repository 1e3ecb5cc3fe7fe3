//! Domain layer for the name mempool.

pub mod entities;
pub mod pool;
pub mod value_objects;

pub use entities::*;
pub use pool::*;
pub use value_objects::*;
