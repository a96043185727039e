//! Concatenation and copies between buffers.

use super::ByteBuffer;
use super::alloc::zeroed;
use crate::config::MAX_LENGTH;
use crate::encoding;
use crate::error::BufferError;

impl ByteBuffer {
    /// Copies `list` into one new buffer.
    ///
    /// Without `total_length` the result is exactly as long as the inputs
    /// together. With it, the result has exactly `total_length` bytes and any
    /// space after the inputs is zeroed.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfBounds`] if an input does not fit at its position,
    /// i.e. the inputs together are longer than `total_length`, and
    /// [`BufferError::InvalidSize`] if `total_length` exceeds
    /// [`MAX_LENGTH`](crate::config::MAX_LENGTH).
    ///
    /// # Example
    ///
    /// ```
    /// use nodebuf::ByteBuffer;
    ///
    /// let a = ByteBuffer::from("de");
    /// let b = ByteBuffer::from("no");
    ///
    /// assert_eq!(ByteBuffer::concat([&a, &b], None)?.to_string(), "deno");
    /// assert_eq!(ByteBuffer::concat([&a, &b], Some(6))?, *b"deno\0\0");
    /// assert!(ByteBuffer::concat([&a, &b], Some(3)).is_err());
    /// # Ok::<(), nodebuf::BufferError>(())
    /// ```
    pub fn concat<'a, I>(list: I, total_length: Option<usize>) -> Result<ByteBuffer, BufferError>
    where
        I: IntoIterator<Item = &'a ByteBuffer>,
    {
        let parts: Vec<&ByteBuffer> = list.into_iter().collect();
        let total = total_length.unwrap_or_else(|| parts.iter().map(|part| part.len()).sum());
        tracing::trace!(parts = parts.len(), total, "concatenating buffers");
        if total > MAX_LENGTH {
            return Err(BufferError::InvalidSize {
                received: total.to_string(),
            });
        }

        let mut out = zeroed(total)?;
        let mut pos = 0;
        for part in parts {
            let end = pos + part.len();
            if end > total {
                return Err(BufferError::OutOfBounds("offset is out of bounds".into()));
            }
            part.with_bytes(|bytes| out[pos..end].copy_from_slice(bytes));
            pos = end;
        }
        Ok(ByteBuffer::from_vec(out))
    }

    /// Copies `[source_start, source_end)` of this buffer into `target` at
    /// `target_start`, returning the number of bytes copied.
    ///
    /// The source range is clamped to this buffer and the copy is cut short
    /// at the end of `target`. Source and target may overlap.
    pub fn copy_to(
        &self,
        target: &ByteBuffer,
        target_start: usize,
        source_start: usize,
        source_end: Option<usize>,
    ) -> usize {
        let source_end = source_end.unwrap_or(self.len).min(self.len);
        let source_start = source_start.min(source_end);
        let room = target.len().saturating_sub(target_start);
        let count = (source_end - source_start).min(room);
        if count == 0 {
            return 0;
        }

        let chunk = self.with_bytes(|bytes| bytes[source_start..source_start + count].to_vec());
        target.with_bytes_mut(|bytes| {
            bytes[target_start..target_start + count].copy_from_slice(&chunk);
        });
        count
    }

    /// Decodes `text` and writes it at `offset`, returning the number of
    /// bytes written.
    ///
    /// At most `length` bytes are written (default: all remaining space);
    /// decoded bytes that do not fit are dropped.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfBounds`] if `offset > len()`, or any decoding error.
    ///
    /// # Example
    ///
    /// ```
    /// use nodebuf::ByteBuffer;
    ///
    /// let buf = ByteBuffer::alloc(6)?;
    /// assert_eq!(buf.write("deno land", 2, None, None)?, 4);
    /// assert_eq!(buf, *b"\0\0deno");
    /// # Ok::<(), nodebuf::BufferError>(())
    /// ```
    pub fn write(
        &self,
        text: &str,
        offset: usize,
        length: Option<usize>,
        encoding: Option<&str>,
    ) -> Result<usize, BufferError> {
        if offset > self.len {
            return Err(BufferError::offset_out_of_range(offset, 0, self.len));
        }
        let bytes = encoding::decode_with(text, encoding)?;
        let room = self.len - offset;
        let count = bytes.len().min(length.unwrap_or(room)).min(room);
        self.with_bytes_mut(|dst| dst[offset..offset + count].copy_from_slice(&bytes[..count]));
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_copies() {
        let a = ByteBuffer::from("ab");
        let joined = ByteBuffer::concat([&a], None).unwrap();
        joined.set(0, b'x').unwrap();

        assert_eq!(a.to_string(), "ab");
        assert!(!joined.shares_storage(&a));
    }

    #[test]
    fn test_concat_exact_total() {
        let a = ByteBuffer::from("ab");
        let b = ByteBuffer::from("cd");
        let joined = ByteBuffer::concat([&a, &b], Some(4)).unwrap();
        assert_eq!(joined.to_string(), "abcd");
    }

    #[test]
    fn test_concat_overflow_fails() {
        let a = ByteBuffer::alloc(2).unwrap();
        let b = ByteBuffer::alloc(2).unwrap();
        let err = ByteBuffer::concat([&a, &b], Some(3)).unwrap_err();
        assert_eq!(err.to_string(), "offset is out of bounds");

        let err = ByteBuffer::concat([&a], Some(1)).unwrap_err();
        assert!(matches!(err, BufferError::OutOfBounds(_)));
    }

    #[test]
    fn test_concat_total_above_max_length() {
        let a = ByteBuffer::from("ab");
        for total in [usize::MAX, MAX_LENGTH + 1] {
            let err = ByteBuffer::concat([&a], Some(total)).unwrap_err();
            assert!(matches!(err, BufferError::InvalidSize { .. }), "total {total}");
        }

        let err = ByteBuffer::concat(Vec::<&ByteBuffer>::new(), Some(usize::MAX)).unwrap_err();
        assert!(matches!(err, BufferError::InvalidSize { .. }));
    }

    #[test]
    fn test_concat_of_views() {
        let buf = ByteBuffer::from("deno land");
        let parts = [buf.slice(Some(5), None), buf.slice(Some(0), Some(4))];
        let joined = ByteBuffer::concat(&parts, None).unwrap();
        assert_eq!(joined.to_string(), "landdeno");
    }

    #[test]
    fn test_copy_to() {
        let source = ByteBuffer::from("deno");
        let target = ByteBuffer::from("______");

        assert_eq!(source.copy_to(&target, 1, 0, None), 4);
        assert_eq!(target.to_string(), "_deno_");

        assert_eq!(source.copy_to(&target, 4, 0, None), 2);
        assert_eq!(target.to_string(), "_dende");

        assert_eq!(source.copy_to(&target, 9, 0, None), 0);
    }

    #[test]
    fn test_copy_to_overlapping() {
        let buf = ByteBuffer::from("abcdef");
        let tail = buf.slice(Some(2), None);
        assert_eq!(buf.copy_to(&tail, 0, 0, Some(3)), 3);
        assert_eq!(buf.to_string(), "ababcf");
    }

    #[test]
    fn test_write_limits() {
        let buf = ByteBuffer::alloc(4).unwrap();
        assert_eq!(buf.write("abcdef", 0, Some(2), None).unwrap(), 2);
        assert_eq!(buf, *b"ab\0\0");

        assert_eq!(buf.write("ff", 3, None, Some("hex")).unwrap(), 1);
        assert_eq!(buf, [b'a', b'b', 0, 0xff]);

        assert_eq!(buf.write("x", 4, None, None).unwrap(), 0);
        assert!(buf.write("x", 5, None, None).is_err());
    }
}
