//! Random source for salts and nonces.

use std::sync::{Mutex, PoisonError};

use rand_core::{CryptoRng, OsRng, RngCore};

/// Source of salt and nonce bytes.
///
/// Takes `&self` so one cipher can serve concurrent callers. Implementations
/// must be cryptographically secure outside of tests.
pub trait RandomSource {
    fn fill(&self, dest: &mut [u8]) -> Result<(), rand_core::Error>;
}

/// Operating-system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        OsRng.try_fill_bytes(dest)
    }
}

/// Any stateful CSPRNG behind a mutex, e.g. a seeded `StdRng` in tests.
impl<R: RngCore + CryptoRng> RandomSource for Mutex<R> {
    fn fill(&self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        let mut rng = self.lock().unwrap_or_else(PoisonError::into_inner);
        rng.try_fill_bytes(dest)
    }
}
