//! Codec functions backing the encoding table.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::error::BufferError;

// Padded on output, padding optional on input.
const BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

pub(super) fn utf8_to_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

pub(super) fn utf8_from_text(text: &str) -> Result<Vec<u8>, BufferError> {
    Ok(text.as_bytes().to_vec())
}

pub(super) fn hex_to_text(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

pub(super) fn hex_from_text(text: &str) -> Result<Vec<u8>, BufferError> {
    hex::decode(text).map_err(|e| BufferError::InvalidEncodedText {
        encoding: "hex",
        reason: e.to_string(),
    })
}

pub(super) fn base64_to_text(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

pub(super) fn base64_from_text(text: &str) -> Result<Vec<u8>, BufferError> {
    BASE64
        .decode(text)
        .map_err(|e| BufferError::InvalidEncodedText {
            encoding: "base64",
            reason: e.to_string(),
        })
}

#[cfg(feature = "extended-encodings")]
pub(super) fn ascii_to_text(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b & 0x7f)).collect()
}

#[cfg(feature = "extended-encodings")]
pub(super) fn latin1_to_text(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Keeps the low byte of every code point.
#[cfg(feature = "extended-encodings")]
pub(super) fn latin1_from_text(text: &str) -> Result<Vec<u8>, BufferError> {
    Ok(text.chars().map(|c| (u32::from(c) & 0xff) as u8).collect())
}

/// A trailing odd byte is ignored.
#[cfg(feature = "extended-encodings")]
pub(super) fn ucs2_to_text(bytes: &[u8]) -> String {
    let units = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
    char::decode_utf16(units)
        .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

#[cfg(feature = "extended-encodings")]
pub(super) fn ucs2_from_text(text: &str) -> Result<Vec<u8>, BufferError> {
    Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_lossy() {
        assert_eq!(utf8_to_text(&[0x64, 0xff, 0x6f]), "d\u{fffd}o");
        assert_eq!(utf8_from_text("tést").unwrap(), "tést".as_bytes());
    }

    #[test]
    fn test_hex() {
        assert_eq!(hex_to_text(b"deno land"), "64656e6f206c616e64");
        assert_eq!(hex_from_text("64656E6F").unwrap(), b"deno");
        assert!(hex_from_text("abc").is_err());
        assert!(hex_from_text("zz").is_err());
    }

    #[test]
    fn test_base64() {
        assert_eq!(base64_to_text(b"deno land"), "ZGVubyBsYW5k");
        assert_eq!(base64_from_text("aGVsbG8=").unwrap(), b"hello");
        assert_eq!(base64_from_text("aGVsbG8").unwrap(), b"hello");
        assert!(base64_from_text("a$==").is_err());
    }

    #[cfg(feature = "extended-encodings")]
    #[test]
    fn test_latin1_and_ascii() {
        assert_eq!(latin1_to_text(&[0x74, 0xe9]), "té");
        assert_eq!(latin1_from_text("té").unwrap(), vec![0x74, 0xe9]);
        assert_eq!(ascii_to_text(&[0x74, 0xe9]), "ti");
    }

    #[cfg(feature = "extended-encodings")]
    #[test]
    fn test_ucs2() {
        assert_eq!(ucs2_from_text("hé").unwrap(), vec![0x68, 0x00, 0xe9, 0x00]);
        assert_eq!(ucs2_to_text(&[0x68, 0x00, 0xe9, 0x00, 0x41]), "hé");
    }
}
