//! Fixed-width numeric access at byte offsets.

use bytes::{Buf, BufMut};

use super::ByteBuffer;
use crate::error::BufferError;

macro_rules! numeric_access {
    ($($ty:ty => $read:ident / $write:ident via $get:ident / $put:ident;)*) => {
        impl ByteBuffer {
            $(
                #[doc = concat!("Reads a `", stringify!($ty), "` starting at `offset` (`", stringify!($get), "`).")]
                ///
                /// # Errors
                ///
                /// [`BufferError::OutOfBounds`] if the value does not fit.
                pub fn $read(&self, offset: usize) -> Result<$ty, BufferError> {
                    const SIZE: usize = std::mem::size_of::<$ty>();
                    self.check_access(offset, SIZE)?;
                    Ok(self.with_bytes(|bytes| (&bytes[offset..offset + SIZE]).$get()))
                }

                #[doc = concat!("Writes a `", stringify!($ty), "` at `offset` (`", stringify!($put), "`) and returns the offset past it.")]
                ///
                /// # Errors
                ///
                /// [`BufferError::OutOfBounds`] if the value does not fit.
                pub fn $write(&self, value: $ty, offset: usize) -> Result<usize, BufferError> {
                    const SIZE: usize = std::mem::size_of::<$ty>();
                    self.check_access(offset, SIZE)?;
                    self.with_bytes_mut(|bytes| (&mut bytes[offset..offset + SIZE]).$put(value));
                    Ok(offset + SIZE)
                }
            )*
        }
    };
}

numeric_access! {
    u8 => read_u8 / write_u8 via get_u8 / put_u8;
    i8 => read_i8 / write_i8 via get_i8 / put_i8;
    u16 => read_u16_le / write_u16_le via get_u16_le / put_u16_le;
    u16 => read_u16_be / write_u16_be via get_u16 / put_u16;
    i16 => read_i16_le / write_i16_le via get_i16_le / put_i16_le;
    i16 => read_i16_be / write_i16_be via get_i16 / put_i16;
    u32 => read_u32_le / write_u32_le via get_u32_le / put_u32_le;
    u32 => read_u32_be / write_u32_be via get_u32 / put_u32;
    i32 => read_i32_le / write_i32_le via get_i32_le / put_i32_le;
    i32 => read_i32_be / write_i32_be via get_i32 / put_i32;
    u64 => read_u64_le / write_u64_le via get_u64_le / put_u64_le;
    u64 => read_u64_be / write_u64_be via get_u64 / put_u64;
    i64 => read_i64_le / write_i64_le via get_i64_le / put_i64_le;
    i64 => read_i64_be / write_i64_be via get_i64 / put_i64;
    f32 => read_f32_le / write_f32_le via get_f32_le / put_f32_le;
    f32 => read_f32_be / write_f32_be via get_f32 / put_f32;
    f64 => read_f64_le / write_f64_le via get_f64_le / put_f64_le;
    f64 => read_f64_be / write_f64_be via get_f64 / put_f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_endianness() {
        let buf = ByteBuffer::from(&[0x01u8, 0x02, 0x03, 0x04]);
        assert_eq!(buf.read_u16_le(0).unwrap(), 0x0201);
        assert_eq!(buf.read_u16_be(0).unwrap(), 0x0102);
        assert_eq!(buf.read_u32_le(0).unwrap(), 0x04030201);
        assert_eq!(buf.read_u32_be(0).unwrap(), 0x01020304);
        assert_eq!(buf.read_u8(3).unwrap(), 4);
    }

    #[test]
    fn test_signed_reads() {
        let buf = ByteBuffer::from(&[0xffu8, 0xfe]);
        assert_eq!(buf.read_i8(0).unwrap(), -1);
        assert_eq!(buf.read_i16_be(0).unwrap(), -2);
        assert_eq!(buf.read_i16_le(0).unwrap(), -257);
    }

    #[test]
    fn test_write_returns_next_offset() {
        let buf = ByteBuffer::alloc(12).unwrap();
        let next = buf.write_u32_be(0xdeadbeef, 0).unwrap();
        let next = buf.write_f64_le(1.5, next).unwrap();
        assert_eq!(next, 12);

        assert_eq!(buf.read_u32_be(0).unwrap(), 0xdeadbeef);
        assert_eq!(buf.read_f64_le(4).unwrap(), 1.5);
    }

    #[test]
    fn test_write_through_view() {
        let buf = ByteBuffer::alloc(8).unwrap();
        let view = buf.slice(Some(4), None);
        view.write_i32_le(-2, 0).unwrap();
        assert_eq!(buf.read_i32_le(4).unwrap(), -2);
        assert_eq!(buf.read_u64_be(0).unwrap(), 0x0000_0000_feff_ffff);
    }

    #[test]
    fn test_out_of_range() {
        let buf = ByteBuffer::alloc(4).unwrap();
        let err = buf.read_u32_le(1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The value of \"offset\" is out of range. It must be >= 0 and <= 0. Received 1"
        );
        assert!(buf.write_u64_le(0, 0).is_err());
        assert!(buf.read_u8(usize::MAX).is_err());
    }
}
