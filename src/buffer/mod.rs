//! Fixed-length byte buffers with Node.js `Buffer` semantics.
//!
//! [`ByteBuffer`] handles share storage with the slices taken from them.
//! Constructors, [`ByteBuffer::concat`] and [`ByteBuffer::from_buffer`] copy.

mod alloc;
mod concat;
mod data;
mod json;
mod numeric;

pub use alloc::{BufferSize, FillValue};
pub use data::{ByteBuffer, ByteLength};
