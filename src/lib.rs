//! # filecipher
//!
//! Password-based file encryption.
//!
//! ## Quick Start
//!
//! ```rust
//! use filecipher::{FileCipher, OpenError};
//!
//! let cipher = FileCipher::new();
//!
//! let container = cipher.encrypt(b"secret", "correcthorsebattery").unwrap();
//! let plaintext = cipher.decrypt(&container, "correcthorsebattery").unwrap();
//! assert_eq!(plaintext, b"secret");
//!
//! let err = cipher.decrypt(&container, "wrongpassword").unwrap_err();
//! assert_eq!(err, OpenError::AuthenticationFailed);
//! ```
//!
//! ## Container
//!
//! ```text
//! salt[16] || nonce[12] || AES-256-GCM(ciphertext || tag[16])
//! key = PBKDF2-HMAC-SHA256(password, salt, 100_000 iterations)
//! ```
//!
//! ## Security Properties
//!
//! - **Fresh randomness**: new salt and nonce on every encryption
//! - **All-or-nothing decryption**: no plaintext without a valid tag
//! - **Uniform errors**: wrong password and tampering report identically
//! - **Self-contained**: the password and the container are all that is needed
//!
//! ## What's NOT Provided
//!
//! - Streaming encryption
//! - Parameter agility (KDF settings are fixed, not stored)
//! - Password recovery

#![deny(unsafe_code)]

// ---------------------------------------------------------------------------
// Internal modules
// ---------------------------------------------------------------------------

mod aead;
mod engine;
mod error;

// ---------------------------------------------------------------------------
// Public modules
// ---------------------------------------------------------------------------

pub mod kdf;
pub mod naming;
pub mod password;
pub mod rng;
pub mod sniff;
pub mod wire;

#[cfg(feature = "tokio")]
pub mod task;

pub use engine::{Container, FileCipher};
pub use error::{OpenError, SealError};
pub use kdf::{KeyDerivation, Pbkdf2Sha256, PBKDF2_ITERATIONS};
pub use password::{Password, WeakPassword, MIN_PASSWORD_CHARS};
pub use rng::{OsRandom, RandomSource};
pub use wire::{inspect, ContainerInfo, HEADER_BYTES, MIN_CONTAINER_BYTES};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
