//! Allocation and pattern fill.

use std::borrow::Cow;
use std::fmt;

use super::ByteBuffer;
use crate::config::MAX_LENGTH;
use crate::encoding;
use crate::error::BufferError;

/// Values accepted as an allocation size.
///
/// Integers are valid when non-negative and at most [`MAX_LENGTH`]. Floats
/// must also be finite and integral.
pub trait BufferSize: Copy + fmt::Display {
    /// Converts to a length, or `None` if the value is not a valid size.
    fn to_len(self) -> Option<usize>;
}

macro_rules! int_buffer_size {
    ($($ty:ty),*) => {
        $(
            impl BufferSize for $ty {
                fn to_len(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }
            }
        )*
    };
}

int_buffer_size!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl BufferSize for f64 {
    fn to_len(self) -> Option<usize> {
        if self.is_finite() && self >= 0.0 && self.fract() == 0.0 && self <= MAX_LENGTH as f64 {
            Some(self as usize)
        } else {
            None
        }
    }
}

impl BufferSize for f32 {
    fn to_len(self) -> Option<usize> {
        f64::from(self).to_len()
    }
}

fn validate_size(size: impl BufferSize) -> Result<usize, BufferError> {
    size.to_len()
        .filter(|&len| len <= MAX_LENGTH)
        .ok_or_else(|| BufferError::InvalidSize {
            received: size.to_string(),
        })
}

/// Allocates `len` zeroed bytes, reporting allocation failure as an error.
pub(super) fn zeroed(len: usize) -> Result<Vec<u8>, BufferError> {
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(len)
        .map_err(|_| BufferError::InvalidSize {
            received: len.to_string(),
        })?;
    bytes.resize(len, 0);
    Ok(bytes)
}

/// A pattern used to fill a buffer.
#[derive(Debug, Clone, Copy)]
pub enum FillValue<'a> {
    /// Every byte becomes `value mod 256`.
    Int(i64),
    /// Text decoded with the fill encoding, then repeated.
    Text(&'a str),
    /// Raw bytes, repeated.
    Bytes(&'a [u8]),
    /// Another buffer's bytes, repeated.
    Buffer(&'a ByteBuffer),
}

impl<'a> FillValue<'a> {
    /// Resolves the fill to the byte pattern it repeats.
    ///
    /// `target_len` is only used to reject empty byte patterns for
    /// non-empty targets.
    fn pattern(
        self,
        encoding: Option<&str>,
        target_len: usize,
    ) -> Result<Cow<'a, [u8]>, BufferError> {
        let pattern: Cow<'a, [u8]> = match self {
            FillValue::Int(value) => Cow::Owned(vec![value.rem_euclid(256) as u8]),
            FillValue::Text(text) => Cow::Owned(encoding::decode_with(text, encoding)?),
            FillValue::Bytes(bytes) => Cow::Borrowed(bytes),
            FillValue::Buffer(buffer) => Cow::Owned(buffer.to_vec()),
        };

        if pattern.is_empty() && target_len > 0 {
            match self {
                FillValue::Bytes(_) => {
                    return Err(BufferError::InvalidFillValue {
                        type_name: "Uint8Array",
                    });
                }
                FillValue::Buffer(_) => {
                    return Err(BufferError::InvalidFillValue { type_name: "Buffer" });
                }
                FillValue::Int(_) | FillValue::Text(_) => {}
            }
        }
        Ok(pattern)
    }
}

impl From<i64> for FillValue<'_> {
    fn from(value: i64) -> Self {
        FillValue::Int(value)
    }
}

impl From<i32> for FillValue<'_> {
    fn from(value: i32) -> Self {
        FillValue::Int(i64::from(value))
    }
}

impl From<u8> for FillValue<'_> {
    fn from(value: u8) -> Self {
        FillValue::Int(i64::from(value))
    }
}

impl<'a> From<&'a str> for FillValue<'a> {
    fn from(text: &'a str) -> Self {
        FillValue::Text(text)
    }
}

impl<'a> From<&'a String> for FillValue<'a> {
    fn from(text: &'a String) -> Self {
        FillValue::Text(text)
    }
}

impl<'a> From<&'a [u8]> for FillValue<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        FillValue::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for FillValue<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        FillValue::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for FillValue<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        FillValue::Bytes(bytes)
    }
}

impl<'a> From<&'a ByteBuffer> for FillValue<'a> {
    fn from(buffer: &'a ByteBuffer) -> Self {
        FillValue::Buffer(buffer)
    }
}

/// Repeats `pattern` over `target`; an empty pattern zeroes it.
fn fill_cyclic(target: &mut [u8], pattern: &[u8]) {
    if pattern.is_empty() {
        target.fill(0);
        return;
    }
    for chunk in target.chunks_mut(pattern.len()) {
        chunk.copy_from_slice(&pattern[..chunk.len()]);
    }
}

impl ByteBuffer {
    /// Allocates `size` zeroed bytes.
    ///
    /// # Errors
    ///
    /// [`BufferError::InvalidSize`] for negative, fractional, non-finite or
    /// oversized values.
    ///
    /// # Example
    ///
    /// ```
    /// use nodebuf::ByteBuffer;
    ///
    /// let buf = ByteBuffer::alloc(3)?;
    /// assert_eq!(buf, [0u8, 0, 0]);
    /// assert!(ByteBuffer::alloc(-1).is_err());
    /// # Ok::<(), nodebuf::BufferError>(())
    /// ```
    pub fn alloc(size: impl BufferSize) -> Result<Self, BufferError> {
        let len = validate_size(size)?;
        tracing::trace!(len, "allocating zeroed buffer");
        Ok(Self::from_vec(zeroed(len)?))
    }

    /// Allocates `size` bytes filled from a pattern.
    ///
    /// `encoding` only applies to text fills and defaults to utf8. A zero
    /// size always succeeds, whatever the fill.
    ///
    /// # Errors
    ///
    /// [`BufferError::InvalidSize`], [`BufferError::InvalidFillValue`] for an
    /// empty byte pattern, or any decoding error of a text fill.
    ///
    /// # Example
    ///
    /// ```
    /// use nodebuf::ByteBuffer;
    ///
    /// let buf = ByteBuffer::alloc_with(13, "64656e6f", Some("hex"))?;
    /// assert_eq!(buf.to_string(), "denodenodenod");
    /// # Ok::<(), nodebuf::BufferError>(())
    /// ```
    pub fn alloc_with<'a>(
        size: impl BufferSize,
        fill: impl Into<FillValue<'a>>,
        encoding: Option<&str>,
    ) -> Result<Self, BufferError> {
        let buffer = Self::alloc(size)?;
        if !buffer.is_empty() {
            buffer.fill(fill, encoding)?;
        }
        Ok(buffer)
    }

    /// Allocates `size` bytes without promising their content.
    ///
    /// This implementation zeroes them anyway.
    pub fn alloc_unsafe(size: impl BufferSize) -> Result<Self, BufferError> {
        Self::alloc(size)
    }

    /// Overwrites every visible byte with a repeating pattern.
    ///
    /// The pattern is copied out before the write, so filling a buffer from
    /// a view of itself is fine.
    pub fn fill<'a>(
        &self,
        value: impl Into<FillValue<'a>>,
        encoding: Option<&str>,
    ) -> Result<(), BufferError> {
        let value = value.into();
        let pattern = value.pattern(encoding, self.len)?;
        self.with_bytes_mut(|bytes| fill_cyclic(bytes, &pattern));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_size() {
        assert_eq!(validate_size(0).unwrap(), 0);
        assert_eq!(validate_size(7u8).unwrap(), 7);
        assert_eq!(validate_size(3.0).unwrap(), 3);
        assert!(validate_size(-1).is_err());
        assert!(validate_size(1.5).is_err());
        assert!(validate_size(f64::NAN).is_err());
        assert!(validate_size(f64::INFINITY).is_err());
        assert!(validate_size(u128::MAX).is_err());
        assert_eq!(validate_size(MAX_LENGTH).unwrap(), MAX_LENGTH);
    }

    #[test]
    fn test_alloc_above_max_length() {
        let err = ByteBuffer::alloc(MAX_LENGTH + 1).unwrap_err();
        assert!(matches!(err, BufferError::InvalidSize { .. }));
        assert!(ByteBuffer::alloc(1usize << 55).is_err());
        assert!(ByteBuffer::alloc((MAX_LENGTH + 1) as f64).is_err());
    }

    #[test]
    fn test_zeroed_reports_failed_reservation() {
        let err = zeroed(usize::MAX).unwrap_err();
        assert!(matches!(
            err,
            BufferError::InvalidSize { received } if received == usize::MAX.to_string()
        ));
        assert_eq!(zeroed(3).unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn test_invalid_size_message() {
        let err = validate_size(-1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The \"size\" argument must be of type number and a valid length. Received -1"
        );
    }

    #[test]
    fn test_fill_cyclic() {
        let mut target = [0u8; 7];
        fill_cyclic(&mut target, &[1, 2, 3]);
        assert_eq!(target, [1, 2, 3, 1, 2, 3, 1]);

        let mut target = [9u8; 2];
        fill_cyclic(&mut target, &[1, 2, 3]);
        assert_eq!(target, [1, 2]);

        let mut target = [9u8; 2];
        fill_cyclic(&mut target, &[]);
        assert_eq!(target, [0, 0]);
    }

    #[test]
    fn test_int_fill_wraps() {
        assert_eq!(ByteBuffer::alloc_with(2, 257, None).unwrap(), [1u8, 1]);
        assert_eq!(ByteBuffer::alloc_with(2, -1, None).unwrap(), [255u8, 255]);
    }

    #[test]
    fn test_fill_from_own_view() {
        let buf = ByteBuffer::from("ab____");
        let head = buf.slice(Some(0), Some(2));
        buf.fill(&head, None).unwrap();
        assert_eq!(buf.to_string(), "ababab");
    }

    #[test]
    fn test_empty_text_fill_zeroes() {
        let buf = ByteBuffer::from("xyz");
        buf.fill("", None).unwrap();
        assert_eq!(buf, [0u8, 0, 0]);
    }
}
