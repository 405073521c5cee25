//! Known Answer tests (fixed salt/nonce through an injected random source)

use std::sync::atomic::{AtomicU8, Ordering};

use filecipher::wire::{
    decode_container, AEAD_TAG_BYTES, HEADER_BYTES, KEY_BYTES, MIN_CONTAINER_BYTES, NONCE_BYTES,
    SALT_BYTES,
};
use filecipher::{FileCipher, Pbkdf2Sha256, RandomSource, PBKDF2_ITERATIONS};

/// Yields 0x00, 0x01, 0x02, ... so salt = 00..0f and nonce = 10..1b.
struct Counter(AtomicU8);

impl RandomSource for Counter {
    fn fill(&self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        for b in dest {
            *b = self.0.fetch_add(1, Ordering::Relaxed);
        }
        Ok(())
    }
}

fn counter_cipher() -> FileCipher<Pbkdf2Sha256, Counter> {
    FileCipher::with_parts(Pbkdf2Sha256::default(), Counter(AtomicU8::new(0)))
}

const HEADER_HEX: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b";
const HELLO_CT_HEX: &str = "2a32e64b71fdfc7c2d1357791d7f66eebb8c9175f6c5c439d51833";
const EMPTY_CT_HEX: &str = "2167cb99ae983c4b837f4dc9b829b022";

fn vector(ct_hex: &str) -> Vec<u8> {
    hex::decode(format!("{}{}", HEADER_HEX, ct_hex)).unwrap()
}

#[test]
fn test_wire_constants() {
    assert_eq!(SALT_BYTES, 16);
    assert_eq!(NONCE_BYTES, 12);
    assert_eq!(AEAD_TAG_BYTES, 16);
    assert_eq!(KEY_BYTES, 32);
    assert_eq!(HEADER_BYTES, 28);
    assert_eq!(MIN_CONTAINER_BYTES, 28 + 16);
    assert_eq!(PBKDF2_ITERATIONS, 100_000);
}

#[test]
fn test_encrypt_matches_vector() {
    let ct = counter_cipher()
        .encrypt(b"hello world", "correcthorsebattery")
        .unwrap();
    assert_eq!(ct.len(), 55);
    assert_eq!(ct.as_bytes(), vector(HELLO_CT_HEX).as_slice());
}

#[test]
fn test_decrypt_vector() {
    let pt = FileCipher::new()
        .decrypt(&vector(HELLO_CT_HEX), "correcthorsebattery")
        .unwrap();
    assert_eq!(pt, b"hello world");
}

#[test]
fn test_empty_plaintext_vector() {
    let ct = counter_cipher().encrypt(b"", "password123").unwrap();
    assert_eq!(ct.as_bytes(), vector(EMPTY_CT_HEX).as_slice());

    let pt = FileCipher::new().decrypt(&ct, "password123").unwrap();
    assert!(pt.is_empty());
}

#[test]
fn test_vector_layout() {
    let data = vector(HELLO_CT_HEX);
    let parts = decode_container(&data).unwrap();
    assert_eq!(parts.salt.as_slice(), &hex::decode(&HEADER_HEX[..32]).unwrap()[..]);
    assert_eq!(parts.nonce.as_slice(), &hex::decode(&HEADER_HEX[32..]).unwrap()[..]);
    assert_eq!(parts.ciphertext.len(), 11 + AEAD_TAG_BYTES);
}

#[test]
fn test_vector_rejects_wrong_password() {
    assert!(FileCipher::new()
        .decrypt(&vector(HELLO_CT_HEX), "wrongpassword")
        .is_err());
}

#[test]
fn test_iteration_count_is_part_of_the_format() {
    let cipher =
        FileCipher::with_parts(Pbkdf2Sha256::with_iterations(99_999), filecipher::OsRandom);
    assert!(cipher
        .decrypt(&vector(HELLO_CT_HEX), "correcthorsebattery")
        .is_err());
}
