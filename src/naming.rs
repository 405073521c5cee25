//! Output file naming: `<name>.encrypted` on the way in, suffix stripped on
//! the way out.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const ENCRYPTED_SUFFIX: &str = ".encrypted";

/// Appended when a decrypt input lacks [`ENCRYPTED_SUFFIX`].
pub const DECRYPTED_SUFFIX: &str = ".decrypted";

/// `report.pdf` -> `report.pdf.encrypted`
pub fn encrypted_path(input: &Path) -> PathBuf {
    with_suffix(input, ENCRYPTED_SUFFIX)
}

/// `report.pdf.encrypted` -> `report.pdf`, anything else -> `<name>.decrypted`
///
/// Never returns the input path.
pub fn decrypted_path(input: &Path) -> PathBuf {
    let stripped = input
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_suffix(ENCRYPTED_SUFFIX))
        .filter(|n| !n.is_empty());

    match stripped {
        Some(name) => input.with_file_name(name),
        None => with_suffix(input, DECRYPTED_SUFFIX),
    }
}

fn with_suffix(input: &Path, suffix: &str) -> PathBuf {
    let mut name = input
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(suffix);
    input.with_file_name(name)
}
