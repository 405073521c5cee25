#![no_main]

use libfuzzer_sys::fuzz_target;

use filecipher::{FileCipher, OsRandom, Pbkdf2Sha256};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks where the password ends; the rest is the container
    let split = 1 + (data[0] as usize) % data.len();
    let password = String::from_utf8_lossy(&data[1..split]);
    let container = &data[split..];

    // One round: the fuzzer is after parsing and tag handling, not the KDF
    let cipher = FileCipher::with_parts(Pbkdf2Sha256::with_iterations(1), OsRandom);
    let _ = cipher.decrypt(container, &password);
});
