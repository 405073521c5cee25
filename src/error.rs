//! Unified error types for filecipher.
//!
//! Decryption has exactly two outcomes besides success. A container that is
//! too short to hold the header is rejected before any key derivation; every
//! other failure collapses into [`OpenError::AuthenticationFailed`], so a
//! wrong password and a tampered file are indistinguishable to the caller.

use thiserror::Error;

/// Failure while producing a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SealError {
    /// The password was empty.
    #[error("password must not be empty")]
    EmptyPassword,

    /// The random source could not produce salt or nonce bytes.
    #[error("random source unavailable")]
    RandomSource,

    /// The AEAD primitive rejected the input.
    #[error("encryption failed")]
    Cipher,
}

/// Failure while opening a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OpenError {
    /// Input is shorter than salt + nonce.
    #[error("malformed container: shorter than the 28-byte header")]
    MalformedContainer,

    /// Tag verification failed: wrong password, corrupted, or truncated data.
    #[error("incorrect password or corrupted file")]
    AuthenticationFailed,
}
