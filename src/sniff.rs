//! Content-type detection from leading magic bytes.
//!
//! The container does not record what it holds; after decryption the type
//! is re-inferred from the plaintext signature.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentType {
    pub mime: &'static str,
    pub extension: &'static str,
}

pub const OCTET_STREAM: ContentType = ContentType {
    mime: "application/octet-stream",
    extension: "bin",
};

struct Signature {
    offset: usize,
    magic: &'static [u8],
    content_type: ContentType,
}

const fn sig(
    offset: usize,
    magic: &'static [u8],
    mime: &'static str,
    extension: &'static str,
) -> Signature {
    Signature {
        offset,
        magic,
        content_type: ContentType { mime, extension },
    }
}

const SIGNATURES: &[Signature] = &[
    sig(0, b"\x89PNG\r\n\x1a\n", "image/png", "png"),
    sig(0, b"\xFF\xD8\xFF", "image/jpeg", "jpg"),
    sig(0, b"GIF87a", "image/gif", "gif"),
    sig(0, b"GIF89a", "image/gif", "gif"),
    sig(8, b"WEBP", "image/webp", "webp"),
    sig(0, b"BM", "image/bmp", "bmp"),
    sig(0, b"%PDF-", "application/pdf", "pdf"),
    sig(0, b"PK\x03\x04", "application/zip", "zip"),
    sig(0, b"\x1F\x8B", "application/gzip", "gz"),
    sig(0, b"ID3", "audio/mpeg", "mp3"),
    sig(4, b"ftyp", "video/mp4", "mp4"),
];

/// Best-effort type of `bytes`, or `None` if no signature matches.
pub fn sniff(bytes: &[u8]) -> Option<ContentType> {
    SIGNATURES.iter().find_map(|s| {
        let end = s.offset + s.magic.len();
        // WEBP is the only offset-8 signature and lives inside a RIFF wrapper
        let matched = bytes.get(s.offset..end) == Some(s.magic)
            && (s.offset != 8 || bytes.starts_with(b"RIFF"));
        matched.then_some(s.content_type)
    })
}

/// Like [`sniff`] but falls back to `application/octet-stream`.
pub fn sniff_or_default(bytes: &[u8]) -> ContentType {
    sniff(bytes).unwrap_or(OCTET_STREAM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_common_formats() {
        assert_eq!(sniff(b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR").unwrap().mime, "image/png");
        assert_eq!(sniff(b"\xFF\xD8\xFF\xE0\0\x10JFIF").unwrap().extension, "jpg");
        assert_eq!(sniff(b"%PDF-1.7\n").unwrap().mime, "application/pdf");
        assert_eq!(sniff(b"PK\x03\x04\x14\0").unwrap().mime, "application/zip");
        assert_eq!(sniff(b"\0\0\0\x18ftypmp42").unwrap().mime, "video/mp4");
    }

    #[test]
    fn webp_requires_riff_header() {
        assert_eq!(sniff(b"RIFF\x24\0\0\0WEBPVP8 ").unwrap().mime, "image/webp");
        assert_eq!(sniff(b"XXXX\x24\0\0\0WEBPVP8 "), None);
    }

    #[test]
    fn short_or_unknown_is_none() {
        assert_eq!(sniff(b""), None);
        assert_eq!(sniff(b"\x89PN"), None);
        assert_eq!(sniff(b"hello world"), None);
        assert_eq!(sniff_or_default(b"hello world"), OCTET_STREAM);
    }
}
