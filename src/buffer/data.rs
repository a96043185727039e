//! The ByteBuffer type - a fixed-length, shareable, mutable byte region.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use parking_lot::RwLock;

use crate::encoding;
use crate::error::BufferError;

/// A fixed-length sequence of bytes with Node.js `Buffer` semantics.
///
/// The bytes live in shared storage. [`slice`](ByteBuffer::slice) returns a
/// view over the same storage, so a write through one handle is visible
/// through every handle whose range overlaps it. Constructors and
/// [`concat`](ByteBuffer::concat) always copy.
///
/// Writes take `&self`; the storage is guarded by a lock, so handles can be
/// shared across threads. No ordering between concurrent writers is promised.
///
/// # Example
///
/// ```
/// use nodebuf::ByteBuffer;
///
/// let buf = ByteBuffer::from("ceno");
/// let view = buf.slice(None, None);
/// view.set(0, b'd')?;
///
/// assert_eq!(buf.to_string(), "deno");
/// assert_eq!(buf.to_string_with(Some("hex"))?, "64656e6f");
/// # Ok::<(), nodebuf::BufferError>(())
/// ```
pub struct ByteBuffer {
    pub(super) storage: Arc<RwLock<Box<[u8]>>>,
    pub(super) offset: usize,
    pub(super) len: usize,
}

impl ByteBuffer {
    /// Takes ownership of `bytes` as fresh storage.
    pub(crate) fn from_vec(bytes: Vec<u8>) -> Self {
        let len = bytes.len();
        Self {
            storage: Arc::new(RwLock::new(bytes.into_boxed_slice())),
            offset: 0,
            len,
        }
    }

    /// Creates a buffer holding a copy of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_vec(bytes.to_vec())
    }

    /// Creates a buffer holding a copy of another buffer's visible bytes.
    pub fn from_buffer(other: &ByteBuffer) -> Self {
        Self::from_vec(other.to_vec())
    }

    /// Creates a buffer from text in the named encoding.
    ///
    /// `None` and `Some("")` mean utf8.
    ///
    /// # Errors
    ///
    /// [`BufferError::UnknownEncoding`], [`BufferError::EncodingNotImplemented`]
    /// or [`BufferError::InvalidEncodedText`].
    ///
    /// # Example
    ///
    /// ```
    /// use nodebuf::ByteBuffer;
    ///
    /// let buf = ByteBuffer::from_text("dGhpcyBpcyBhIHTDqXN0", Some("BASE64"))?;
    /// assert_eq!(buf.to_string(), "this is a tést");
    /// # Ok::<(), nodebuf::BufferError>(())
    /// ```
    pub fn from_text(text: &str, encoding: Option<&str>) -> Result<Self, BufferError> {
        encoding::decode_with(text, encoding).map(Self::from_vec)
    }

    /// Number of visible bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true for a zero-length buffer.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Offset of this view into its backing storage.
    pub fn byte_offset(&self) -> usize {
        self.offset
    }

    /// Returns true if both handles view the same backing storage.
    pub fn shares_storage(&self, other: &ByteBuffer) -> bool {
        Arc::ptr_eq(&self.storage, &other.storage)
    }

    /// Returns the byte at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<u8> {
        (index < self.len).then(|| self.storage.read()[self.offset + index])
    }

    /// Overwrites the byte at `index`.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfBounds`] if `index >= len()`.
    pub fn set(&self, index: usize, value: u8) -> Result<(), BufferError> {
        self.check_access(index, 1)?;
        self.storage.write()[self.offset + index] = value;
        Ok(())
    }

    /// Runs `f` over the visible bytes under a read lock.
    pub fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        let guard = self.storage.read();
        f(&guard[self.offset..self.offset + self.len])
    }

    /// Runs `f` over the visible bytes under a write lock.
    ///
    /// `f` must not access another handle onto the same storage.
    pub fn with_bytes_mut<R>(&self, f: impl FnOnce(&mut [u8]) -> R) -> R {
        let mut guard = self.storage.write();
        f(&mut guard[self.offset..self.offset + self.len])
    }

    /// Copies the visible bytes out.
    pub fn to_vec(&self) -> Vec<u8> {
        self.with_bytes(<[u8]>::to_vec)
    }

    /// Copies the visible bytes into a [`Bytes`].
    pub fn to_bytes(&self) -> Bytes {
        Bytes::from(self.to_vec())
    }

    /// Returns a view over `[start, end)` sharing this buffer's storage.
    ///
    /// Negative indices count back from the end. Both ends are clamped to
    /// `0..=len()`, and an end before the start yields an empty view.
    ///
    /// # Example
    ///
    /// ```
    /// use nodebuf::ByteBuffer;
    ///
    /// let buf = ByteBuffer::from("deno land");
    /// assert_eq!(buf.slice(Some(-4), None).to_string(), "land");
    /// assert_eq!(buf.slice(Some(0), Some(4)).to_string(), "deno");
    /// ```
    pub fn slice(&self, start: Option<isize>, end: Option<isize>) -> ByteBuffer {
        let start = start.map_or(0, |i| relative_index(i, self.len));
        let end = end.map_or(self.len, |i| relative_index(i, self.len));
        let len = end.saturating_sub(start);
        tracing::trace!(start, len, "slicing buffer view");
        ByteBuffer {
            storage: Arc::clone(&self.storage),
            offset: self.offset + start,
            len,
        }
    }

    /// Renders the whole buffer as text.
    ///
    /// `None` means utf8. Unlike decoding, an empty name is rejected.
    ///
    /// # Errors
    ///
    /// [`BufferError::UnknownEncoding`] or [`BufferError::EncodingNotImplemented`].
    pub fn to_string_with(&self, encoding: Option<&str>) -> Result<String, BufferError> {
        self.with_bytes(|bytes| encoding::encode_with(bytes, encoding))
    }

    /// Renders `[start, end)` as text. Both ends are clamped to the buffer.
    pub fn to_string_range(
        &self,
        encoding: Option<&str>,
        start: Option<usize>,
        end: Option<usize>,
    ) -> Result<String, BufferError> {
        let start = start.unwrap_or(0).min(self.len);
        let end = end.unwrap_or(self.len).min(self.len).max(start);
        self.with_bytes(|bytes| encoding::encode_with(&bytes[start..end], encoding))
    }

    /// Byte-wise equality with another buffer.
    pub fn equals(&self, other: &ByteBuffer) -> bool {
        if self.len != other.len {
            return false;
        }
        if self.shares_storage(other) {
            let guard = self.storage.read();
            return guard[self.offset..self.offset + self.len]
                == guard[other.offset..other.offset + other.len];
        }
        // Never hold two storage locks at once.
        let theirs = other.to_vec();
        self.with_bytes(|ours| ours == theirs.as_slice())
    }

    /// Returns true exactly when `value` is a [`ByteBuffer`].
    ///
    /// # Example
    ///
    /// ```
    /// use nodebuf::ByteBuffer;
    ///
    /// assert!(ByteBuffer::is_buffer(&ByteBuffer::from("test")));
    /// assert!(!ByteBuffer::is_buffer(&vec![1u8, 2, 3]));
    /// ```
    pub fn is_buffer(value: &dyn Any) -> bool {
        value.is::<ByteBuffer>()
    }

    /// Returns true if `name` is a recognized encoding (case-insensitive).
    pub fn is_encoding(name: impl AsRef<str>) -> bool {
        encoding::is_encoding(name)
    }

    /// Number of bytes `value` occupies: utf8 length for text, length for bytes.
    pub fn byte_length<T: ByteLength + ?Sized>(value: &T) -> usize {
        value.byte_length()
    }

    /// Number of bytes `text` decodes to under the named encoding.
    pub fn byte_length_with(text: &str, encoding: Option<&str>) -> Result<usize, BufferError> {
        encoding::decode_with(text, encoding).map(|bytes| bytes.len())
    }

    pub(super) fn check_access(&self, offset: usize, size: usize) -> Result<(), BufferError> {
        match offset.checked_add(size) {
            Some(end) if end <= self.len => Ok(()),
            _ => Err(BufferError::offset_out_of_range(offset, size, self.len)),
        }
    }
}

/// Resolves a possibly negative index against `len`, clamped to `0..=len`.
fn relative_index(index: isize, len: usize) -> usize {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        index.unsigned_abs().min(len)
    }
}

/// Values with a byte length, for [`ByteBuffer::byte_length`].
pub trait ByteLength {
    /// Length in bytes; text is measured as utf8.
    fn byte_length(&self) -> usize;
}

impl ByteLength for str {
    fn byte_length(&self) -> usize {
        self.len()
    }
}

impl ByteLength for String {
    fn byte_length(&self) -> usize {
        self.len()
    }
}

impl ByteLength for [u8] {
    fn byte_length(&self) -> usize {
        self.len()
    }
}

impl<const N: usize> ByteLength for [u8; N] {
    fn byte_length(&self) -> usize {
        N
    }
}

impl ByteLength for Vec<u8> {
    fn byte_length(&self) -> usize {
        self.len()
    }
}

impl ByteLength for Bytes {
    fn byte_length(&self) -> usize {
        self.len()
    }
}

impl ByteLength for ByteBuffer {
    fn byte_length(&self) -> usize {
        self.len
    }
}

impl Default for ByteBuffer {
    fn default() -> Self {
        Self::from_vec(Vec::new())
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_vec(bytes)
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<const N: usize> From<&[u8; N]> for ByteBuffer {
    fn from(bytes: &[u8; N]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&str> for ByteBuffer {
    fn from(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }
}

impl From<String> for ByteBuffer {
    fn from(text: String) -> Self {
        Self::from_vec(text.into_bytes())
    }
}

impl From<Bytes> for ByteBuffer {
    fn from(bytes: Bytes) -> Self {
        Self::from_vec(bytes.to_vec())
    }
}

impl From<&ByteBuffer> for Bytes {
    fn from(buffer: &ByteBuffer) -> Self {
        buffer.to_bytes()
    }
}

impl PartialEq for ByteBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for ByteBuffer {}

impl PartialEq<[u8]> for ByteBuffer {
    fn eq(&self, other: &[u8]) -> bool {
        self.with_bytes(|bytes| bytes == other)
    }
}

impl PartialEq<&[u8]> for ByteBuffer {
    fn eq(&self, other: &&[u8]) -> bool {
        self == *other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for ByteBuffer {
    fn eq(&self, other: &[u8; N]) -> bool {
        self == &other[..]
    }
}

impl PartialEq<Vec<u8>> for ByteBuffer {
    fn eq(&self, other: &Vec<u8>) -> bool {
        self == other.as_slice()
    }
}

impl PartialEq<ByteBuffer> for Vec<u8> {
    fn eq(&self, other: &ByteBuffer) -> bool {
        other == self
    }
}

impl fmt::Display for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_bytes(|bytes| f.write_str(&String::from_utf8_lossy(bytes)))
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Buffer")?;
        self.with_bytes(|bytes| {
            for byte in bytes {
                write!(f, " {:02x}", byte)?;
            }
            Ok(())
        })?;
        write!(f, ">")
    }
}
