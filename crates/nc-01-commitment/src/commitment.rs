//! # Claim Commitments
//!
//! `commit(name, salt)` is published by the claim; the reveal later
//! discloses `(name, salt)` and validation recomputes the hash.

use crate::hashing::Blake3Hasher;
use rand::RngCore;
use shared_types::{Commitment, NameKey, Salt, SALT_LEN};

/// Domain-separation context for claim commitments.
const COMMITMENT_CONTEXT: &str = "name-chain 2024-01 claim commitment";

/// Computes the commitment over `(name, salt)`.
pub fn commit(name: &NameKey, salt: &Salt) -> Commitment {
    let mut hasher = Blake3Hasher::new_derive_key(COMMITMENT_CONTEXT);
    hasher.update_prefixed(name.as_bytes()).update(salt.as_bytes());
    hasher.finalize()
}

/// Returns true if `commitment` was produced from `(name, salt)`.
pub fn verify(commitment: &Commitment, name: &NameKey, salt: &Salt) -> bool {
    // Inputs are public once revealed; no constant-time requirement.
    commit(name, salt) == *commitment
}

/// Generates a fresh random salt from the OS RNG.
pub fn random_salt() -> Salt {
    let mut bytes = [0u8; SALT_LEN];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    Salt(bytes)
}
