//! AEAD: AES-256-GCM, no associated data

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};

use crate::error::{OpenError, SealError};
use crate::wire::{KEY_BYTES, NONCE_BYTES};

/// AEAD seal (encrypt path). Output carries the 16-byte tag appended.
pub fn aead_seal(
    key: &[u8; KEY_BYTES],
    nonce: &[u8; NONCE_BYTES],
    plaintext: &[u8],
) -> Result<Vec<u8>, SealError> {
    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| SealError::Cipher)?;
    let n = Nonce::from_slice(nonce);
    cipher.encrypt(n, plaintext).map_err(|_| SealError::Cipher)
}

/// AEAD open (decrypt path). All-or-nothing: any failure is
/// [`OpenError::AuthenticationFailed`] and no plaintext escapes.
pub fn aead_open(
    key: &[u8; KEY_BYTES],
    nonce: &[u8; NONCE_BYTES],
    ciphertext: &[u8],
) -> Result<Vec<u8>, OpenError> {
    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| OpenError::AuthenticationFailed)?;
    let n = Nonce::from_slice(nonce);
    cipher
        .decrypt(n, ciphertext)
        .map_err(|_| OpenError::AuthenticationFailed)
}
