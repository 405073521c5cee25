#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = filecipher::wire::decode_container(data);
    let _ = filecipher::inspect(data);
});
