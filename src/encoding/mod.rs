//! Text encodings understood by [`ByteBuffer`](crate::ByteBuffer).
//!
//! Every recognized name maps to one [`Encoding`], and every encoding owns a
//! codec pair. An entry whose codec half is missing is *recognized but not
//! implemented*, which is reported differently from an unknown name:
//!
//! - unknown name: [`BufferError::UnknownEncoding`]
//! - known name, no codec: [`BufferError::EncodingNotImplemented`]
//!
//! `ascii`, `latin1`/`binary` and `ucs2`/`utf16le` only have codecs with the
//! `extended-encodings` feature.
//!
//! # Example
//!
//! ```
//! use nodebuf::encoding::{self, Encoding};
//!
//! assert_eq!(Encoding::parse("UTF-8"), Some(Encoding::Utf8));
//! assert!(encoding::is_encoding("BASE64"));
//! assert!(!encoding::is_encoding("utf9"));
//!
//! let text = encoding::encode_with(b"deno", Some("hex"))?;
//! assert_eq!(text, "64656e6f");
//! # Ok::<(), nodebuf::BufferError>(())
//! ```

mod codec;

use std::fmt;
use std::str::FromStr;

use crate::error::BufferError;

/// A recognized text encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    /// UTF-8, the default everywhere an encoding is optional.
    #[default]
    Utf8,
    /// Lowercase hex digit pairs.
    Hex,
    /// Standard-alphabet base64 with padding.
    Base64,
    /// 7-bit ASCII.
    Ascii,
    /// ISO-8859-1, also known as `binary`.
    Latin1,
    /// UTF-16 little endian, also known as `ucs2`.
    Ucs2,
}

/// Conversion functions for one encoding. `None` means not implemented.
#[derive(Clone, Copy)]
pub(crate) struct Codec {
    pub(crate) to_text: Option<fn(&[u8]) -> String>,
    pub(crate) from_text: Option<fn(&str) -> Result<Vec<u8>, BufferError>>,
}

impl Codec {
    #[cfg(not(feature = "extended-encodings"))]
    const UNIMPLEMENTED: Codec = Codec {
        to_text: None,
        from_text: None,
    };
}

impl Encoding {
    /// All encodings, in table order.
    pub const ALL: [Encoding; 6] = [
        Encoding::Utf8,
        Encoding::Hex,
        Encoding::Base64,
        Encoding::Ascii,
        Encoding::Latin1,
        Encoding::Ucs2,
    ];

    /// Looks up an encoding by name, ignoring ASCII case.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Some(Encoding::Utf8),
            "hex" => Some(Encoding::Hex),
            "base64" => Some(Encoding::Base64),
            "ascii" => Some(Encoding::Ascii),
            "latin1" | "binary" => Some(Encoding::Latin1),
            "ucs2" | "ucs-2" | "utf16le" | "utf-16le" => Some(Encoding::Ucs2),
            _ => None,
        }
    }

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf8",
            Encoding::Hex => "hex",
            Encoding::Base64 => "base64",
            Encoding::Ascii => "ascii",
            Encoding::Latin1 => "latin1",
            Encoding::Ucs2 => "utf16le",
        }
    }

    /// Returns true when both directions of this encoding are compiled in.
    pub fn is_implemented(self) -> bool {
        let codec = self.codec();
        codec.to_text.is_some() && codec.from_text.is_some()
    }

    pub(crate) fn codec(self) -> Codec {
        match self {
            Encoding::Utf8 => Codec {
                to_text: Some(codec::utf8_to_text),
                from_text: Some(codec::utf8_from_text),
            },
            Encoding::Hex => Codec {
                to_text: Some(codec::hex_to_text),
                from_text: Some(codec::hex_from_text),
            },
            Encoding::Base64 => Codec {
                to_text: Some(codec::base64_to_text),
                from_text: Some(codec::base64_from_text),
            },
            #[cfg(feature = "extended-encodings")]
            Encoding::Ascii => Codec {
                to_text: Some(codec::ascii_to_text),
                from_text: Some(codec::latin1_from_text),
            },
            #[cfg(feature = "extended-encodings")]
            Encoding::Latin1 => Codec {
                to_text: Some(codec::latin1_to_text),
                from_text: Some(codec::latin1_from_text),
            },
            #[cfg(feature = "extended-encodings")]
            Encoding::Ucs2 => Codec {
                to_text: Some(codec::ucs2_to_text),
                from_text: Some(codec::ucs2_from_text),
            },
            #[cfg(not(feature = "extended-encodings"))]
            Encoding::Ascii | Encoding::Latin1 | Encoding::Ucs2 => Codec::UNIMPLEMENTED,
        }
    }

    /// Renders `bytes` as text in this encoding.
    ///
    /// # Errors
    ///
    /// [`BufferError::EncodingNotImplemented`] if no codec is compiled in.
    pub fn to_text(self, bytes: &[u8]) -> Result<String, BufferError> {
        self.codec()
            .to_text
            .map(|f| f(bytes))
            .ok_or_else(|| BufferError::EncodingNotImplemented(self.name().to_owned()))
    }

    /// Parses `text` in this encoding into bytes.
    ///
    /// # Errors
    ///
    /// [`BufferError::EncodingNotImplemented`] if no codec is compiled in, or
    /// [`BufferError::InvalidEncodedText`] for malformed hex/base64 input.
    pub fn from_text(self, text: &str) -> Result<Vec<u8>, BufferError> {
        match self.codec().from_text {
            Some(f) => f(text),
            None => Err(BufferError::EncodingNotImplemented(self.name().to_owned())),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = BufferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Encoding::parse(s).ok_or_else(|| BufferError::UnknownEncoding(s.to_owned()))
    }
}

/// Returns true if `name` is a recognized encoding name (case-insensitive).
pub fn is_encoding(name: impl AsRef<str>) -> bool {
    Encoding::parse(name.as_ref()).is_some()
}

/// Resolves an encoding argument used to render bytes as text.
///
/// `None` means utf8. An empty or unknown name is an error.
fn resolve_strict(name: Option<&str>) -> Result<Encoding, BufferError> {
    match name {
        None => Ok(Encoding::Utf8),
        Some(name) => {
            Encoding::parse(name).ok_or_else(|| BufferError::UnknownEncoding(name.to_owned()))
        }
    }
}

/// Resolves an encoding argument used to parse text into bytes.
///
/// `None` and the empty string silently mean utf8.
fn resolve_lenient(name: Option<&str>) -> Result<Encoding, BufferError> {
    match name {
        None | Some("") => Ok(Encoding::Utf8),
        Some(name) => resolve_strict(Some(name)),
    }
}

/// Renders `bytes` as text using the named encoding.
///
/// Not-implemented errors carry the name as the caller spelled it.
pub fn encode_with(bytes: &[u8], name: Option<&str>) -> Result<String, BufferError> {
    let encoding = resolve_strict(name)?;
    encoding.to_text(bytes).map_err(|e| rename(e, name))
}

/// Parses `text` using the named encoding.
pub fn decode_with(text: &str, name: Option<&str>) -> Result<Vec<u8>, BufferError> {
    let encoding = resolve_lenient(name)?;
    encoding.from_text(text).map_err(|e| rename(e, name))
}

fn rename(err: BufferError, name: Option<&str>) -> BufferError {
    match (err, name) {
        (BufferError::EncodingNotImplemented(_), Some(given)) => {
            BufferError::EncodingNotImplemented(given.to_owned())
        }
        (err, _) => err,
    }
}
