pub mod errors;
pub mod store;

pub use errors::*;
pub use store::*;
