//! Container format
//!
//! Format:
//!   salt[16] || nonce[12] || aead_ct[16+]
//!
//! No version byte and no length prefixes: salt and nonce are fixed-width, so
//! the split is unambiguous. KDF and cipher parameters are not stored; both
//! ends must agree on them out of band (see [`crate::kdf`]).

use core::fmt;

use crate::error::OpenError;

// ---------------------------------------------------------------------------
// Component sizes
// ---------------------------------------------------------------------------

/// KDF salt size.
pub const SALT_BYTES: usize = 16;

/// AES-GCM nonce size (96 bits).
pub const NONCE_BYTES: usize = 12;

/// AES-GCM authentication tag size.
pub const AEAD_TAG_BYTES: usize = 16;

/// AES-256 key size.
pub const KEY_BYTES: usize = 32;

/// Header size: salt + nonce
pub const HEADER_BYTES: usize = SALT_BYTES + NONCE_BYTES; // 28

/// Size of a container holding an empty plaintext: header + tag
pub const MIN_CONTAINER_BYTES: usize = HEADER_BYTES + AEAD_TAG_BYTES; // 44

/// Borrowed view of a parsed container.
#[derive(Debug, Clone, Copy)]
pub struct ContainerParts<'a> {
    pub salt: &'a [u8; SALT_BYTES],
    pub nonce: &'a [u8; NONCE_BYTES],
    pub ciphertext: &'a [u8],
}

/// Split a container into salt, nonce and AEAD ciphertext.
///
/// Only the header length is checked here. A ciphertext shorter than the tag
/// is left for the cipher to reject, so truncation reports as an
/// authentication failure rather than a format error.
pub fn decode_container(data: &[u8]) -> Result<ContainerParts<'_>, OpenError> {
    if data.len() < HEADER_BYTES {
        return Err(OpenError::MalformedContainer);
    }

    let (salt, rest) = data.split_at(SALT_BYTES);
    let (nonce, ciphertext) = rest.split_at(NONCE_BYTES);

    let salt: &[u8; SALT_BYTES] = salt.try_into().map_err(|_| OpenError::MalformedContainer)?;
    let nonce: &[u8; NONCE_BYTES] = nonce.try_into().map_err(|_| OpenError::MalformedContainer)?;

    Ok(ContainerParts {
        salt,
        nonce,
        ciphertext,
    })
}

pub fn encode_container(
    salt: &[u8; SALT_BYTES],
    nonce: &[u8; NONCE_BYTES],
    aead_ct: &[u8],
) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_BYTES + aead_ct.len());
    out.extend_from_slice(salt);
    out.extend_from_slice(nonce);
    out.extend_from_slice(aead_ct);
    out
}

// ---------------------------------------------------------------------------
// Inspection
// ---------------------------------------------------------------------------

/// Container metadata readable without the password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerInfo {
    pub total_bytes: usize,
    pub salt: [u8; SALT_BYTES],
    pub nonce: [u8; NONCE_BYTES],
    /// Plaintext size implied by the container length, assuming it is intact.
    pub plaintext_bytes: usize,
}

/// Read header metadata. Performs no cryptographic work.
pub fn inspect(data: &[u8]) -> Result<ContainerInfo, OpenError> {
    let parts = decode_container(data)?;
    Ok(ContainerInfo {
        total_bytes: data.len(),
        salt: *parts.salt,
        nonce: *parts.nonce,
        plaintext_bytes: parts.ciphertext.len().saturating_sub(AEAD_TAG_BYTES),
    })
}

impl fmt::Display for ContainerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Encrypted Container")?;
        writeln!(f, "===================")?;
        writeln!(f, "Salt:            {}", hex::encode(self.salt))?;
        writeln!(f, "Nonce:           {}", hex::encode(self.nonce))?;
        writeln!(f, "KDF:             PBKDF2-HMAC-SHA256")?;
        writeln!(f, "Cipher:          AES-256-GCM")?;
        writeln!(f)?;
        writeln!(f, "Total Size:      {} bytes", self.total_bytes)?;
        writeln!(f, "Overhead:        {} bytes", MIN_CONTAINER_BYTES)?;
        write!(f, "Plaintext Size:  {} bytes", self.plaintext_bytes)
    }
}
