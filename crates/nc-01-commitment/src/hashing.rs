//! # BLAKE3 Hashing
//!
//! Hashing primitives backing the commitment codec.

use blake3::Hasher;
use shared_types::Hash;

/// Stateful BLAKE3 hasher.
pub struct Blake3Hasher {
    inner: Hasher,
}

impl Blake3Hasher {
    /// Create a hasher bound to a domain-separation context.
    pub fn new_derive_key(context: &str) -> Self {
        Self {
            inner: Hasher::new_derive_key(context),
        }
    }

    /// Update with data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Update with a little-endian length prefix followed by the data.
    pub fn update_prefixed(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(&(data.len() as u32).to_le_bytes());
        self.inner.update(data);
        self
    }

    /// Finalize and return hash.
    pub fn finalize(&self) -> Hash {
        *self.inner.finalize().as_bytes()
    }
}
