//! nodebuf
//!
//! Node.js-style byte buffers and interchangeable hash providers for Rust.
//!
//! The crate has two halves:
//!
//! - [`ByteBuffer`], a fixed-length byte region whose slices alias their
//!   source, with allocation, pattern fill, text encodings, concatenation,
//!   numeric access and a JSON form
//! - [`hash`], a [`HashProvider`](hash::HashProvider) abstraction with a
//!   native backend (RustCrypto) and a portable one, plus the [`bench`]
//!   driver behind the `hashbench` binary
//!
//! # Buffers
//!
//! ```
//! use nodebuf::ByteBuffer;
//!
//! let buf = ByteBuffer::alloc_with(11, "aGVsbG8gd29ybGQ=", Some("base64"))?;
//! assert_eq!(buf.to_string(), "hello world");
//!
//! let world = buf.slice(Some(6), None);
//! world.fill("W", None)?;
//! assert_eq!(buf.to_string(), "hello WWWWW");
//! # Ok::<(), nodebuf::BufferError>(())
//! ```
//!
//! # Hashing
//!
//! ```
//! use nodebuf::hash::{Backend, create_hash};
//!
//! let mut md5 = create_hash(Backend::Portable, "md5")?;
//! md5.update(b"abc");
//! assert_eq!(md5.digest().to_hex(), "900150983cd24fb0d6963f7d28e17f72");
//! # Ok::<(), nodebuf::HashError>(())
//! ```
//!
//! # Features
//!
//! - `native-hash` (default): the [`Backend::Native`](hash::Backend::Native) provider
//! - `extended-encodings`: ascii, latin1 and utf16le codecs

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod error;

pub mod bench;
pub mod config;
pub mod encoding;
pub mod hash;

pub use buffer::{BufferSize, ByteBuffer, ByteLength, FillValue};
pub use encoding::Encoding;
pub use error::{BenchError, BufferError, HashError};
