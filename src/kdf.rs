//! KDF
//!
//! key = PBKDF2-HMAC-SHA256(password, salt, iterations=100_000, len=32)
//!
//! The parameters are not recorded in the container. Changing any of them
//! makes every existing container undecryptable.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::wire::{KEY_BYTES, SALT_BYTES};

/// Fixed PBKDF2 iteration count.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Password-based key derivation.
///
/// Implementations must be deterministic: the same password and salt always
/// yield the same key.
pub trait KeyDerivation {
    fn derive_key(&self, password: &[u8], salt: &[u8; SALT_BYTES]) -> Zeroizing<[u8; KEY_BYTES]>;
}

/// PBKDF2 with HMAC-SHA256.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pbkdf2Sha256 {
    iterations: u32,
}

impl Default for Pbkdf2Sha256 {
    fn default() -> Self {
        Self {
            iterations: PBKDF2_ITERATIONS,
        }
    }
}

impl Pbkdf2Sha256 {
    /// Non-standard iteration count. Containers produced this way only open
    /// with the same count; use [`Pbkdf2Sha256::default`] for real files.
    pub fn with_iterations(iterations: u32) -> Self {
        Self {
            iterations: iterations.max(1),
        }
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}

impl KeyDerivation for Pbkdf2Sha256 {
    fn derive_key(&self, password: &[u8], salt: &[u8; SALT_BYTES]) -> Zeroizing<[u8; KEY_BYTES]> {
        let mut key = Zeroizing::new([0u8; KEY_BYTES]);
        pbkdf2_hmac::<Sha256>(password, salt, self.iterations, &mut key[..]);
        key
    }
}
