//! Password-based encrypt/decrypt engine.

use core::ops::Deref;

use tracing::{debug, trace};

use crate::aead;
use crate::error::{OpenError, SealError};
use crate::kdf::{KeyDerivation, Pbkdf2Sha256};
use crate::rng::{OsRandom, RandomSource};
use crate::wire::{self, NONCE_BYTES, SALT_BYTES};

/// An encrypted container: `salt || nonce || ciphertext+tag`.
///
/// Immutable once produced. Dereferences to its bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Container(Vec<u8>);

impl Container {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    pub fn salt(&self) -> &[u8] {
        &self.0[..SALT_BYTES]
    }

    pub fn nonce(&self) -> &[u8] {
        &self.0[SALT_BYTES..wire::HEADER_BYTES]
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.0[wire::HEADER_BYTES..]
    }
}

impl Deref for Container {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Container {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Container> for Vec<u8> {
    fn from(c: Container) -> Self {
        c.0
    }
}

impl core::fmt::Debug for Container {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Container")
            .field("len", &self.0.len())
            .finish_non_exhaustive()
    }
}

/// File encryption engine.
///
/// Stateless between calls: every `encrypt` draws a fresh salt and nonce,
/// and the derived key is wiped before the call returns. One instance can be
/// shared across threads.
///
/// # Example
///
/// ```
/// use filecipher::FileCipher;
///
/// let cipher = FileCipher::new();
/// let container = cipher.encrypt(b"hello world", "correcthorsebattery")?;
/// assert_eq!(container.len(), 28 + 11 + 16);
///
/// let plaintext = cipher.decrypt(&container, "correcthorsebattery")?;
/// assert_eq!(plaintext, b"hello world");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileCipher<K = Pbkdf2Sha256, R = OsRandom> {
    kdf: K,
    rng: R,
}

impl FileCipher {
    /// PBKDF2-HMAC-SHA256 (100 000 iterations) and the OS random source.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K: KeyDerivation, R: RandomSource> FileCipher<K, R> {
    pub fn with_parts(kdf: K, rng: R) -> Self {
        Self { kdf, rng }
    }

    pub fn kdf(&self) -> &K {
        &self.kdf
    }

    pub fn encrypt(&self, plaintext: &[u8], password: &str) -> Result<Container, SealError> {
        if password.is_empty() {
            return Err(SealError::EmptyPassword);
        }

        let mut salt = [0u8; SALT_BYTES];
        let mut nonce = [0u8; NONCE_BYTES];
        self.rng.fill(&mut salt).map_err(|_| SealError::RandomSource)?;
        self.rng.fill(&mut nonce).map_err(|_| SealError::RandomSource)?;

        let key = self.kdf.derive_key(password.as_bytes(), &salt);
        trace!("derived encryption key");
        let aead_ct = aead::aead_seal(&key, &nonce, plaintext)?;

        let out = wire::encode_container(&salt, &nonce, &aead_ct);
        debug!(
            plaintext_bytes = plaintext.len(),
            container_bytes = out.len(),
            "encrypted"
        );
        Ok(Container(out))
    }

    pub fn decrypt(&self, container: &[u8], password: &str) -> Result<Vec<u8>, OpenError> {
        let parts = wire::decode_container(container).map_err(|e| {
            debug!(container_bytes = container.len(), "rejected malformed container");
            e
        })?;

        let key = self.kdf.derive_key(password.as_bytes(), parts.salt);
        trace!("derived decryption key");
        let plaintext = aead::aead_open(&key, parts.nonce, parts.ciphertext).map_err(|e| {
            debug!(container_bytes = container.len(), "authentication failed");
            e
        })?;

        debug!(
            container_bytes = container.len(),
            plaintext_bytes = plaintext.len(),
            "decrypted"
        );
        Ok(plaintext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use rand::{rngs::StdRng, SeedableRng};

    use crate::wire::{AEAD_TAG_BYTES, HEADER_BYTES};

    fn fast() -> FileCipher<Pbkdf2Sha256, Mutex<StdRng>> {
        FileCipher::with_parts(
            Pbkdf2Sha256::with_iterations(16),
            Mutex::new(StdRng::seed_from_u64(1)),
        )
    }

    struct BrokenRng;

    impl RandomSource for BrokenRng {
        fn fill(&self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
            let code = core::num::NonZeroU32::new(rand_core::Error::CUSTOM_START).unwrap();
            Err(rand_core::Error::from(code))
        }
    }

    #[test]
    fn container_accessors_split_header() {
        let c = fast().encrypt(b"abc", "password").unwrap();
        assert_eq!(c.salt().len(), SALT_BYTES);
        assert_eq!(c.nonce().len(), NONCE_BYTES);
        assert_eq!(c.ciphertext().len(), 3 + AEAD_TAG_BYTES);
        assert_eq!(c.len(), HEADER_BYTES + 3 + AEAD_TAG_BYTES);
    }

    #[test]
    fn seeded_source_advances_between_calls() {
        let cipher = fast();
        let a = cipher.encrypt(b"abc", "password").unwrap();
        let b = cipher.encrypt(b"abc", "password").unwrap();
        assert_ne!(a.salt(), b.salt());
        assert_ne!(a.nonce(), b.nonce());
    }

    #[test]
    fn empty_password_rejected() {
        assert_eq!(
            fast().encrypt(b"abc", "").unwrap_err(),
            SealError::EmptyPassword
        );
    }

    #[test]
    fn random_failure_aborts() {
        let cipher = FileCipher::with_parts(Pbkdf2Sha256::with_iterations(1), BrokenRng);
        assert_eq!(
            cipher.encrypt(b"abc", "password").unwrap_err(),
            SealError::RandomSource
        );
    }

    #[test]
    fn debug_does_not_dump_bytes() {
        let c = fast().encrypt(b"secret", "password").unwrap();
        let s = format!("{:?}", c);
        assert!(s.starts_with("Container { len: 50"));
    }
}
