//! Fixed-capacity, seekable byte buffers with structured binary encoding.
//!
//! A [`Buffer`] wraps a byte region whose length never changes and keeps a
//! cursor into it. On top of raw byte access it can encode and decode
//! fixed-layout values in either byte order.
//!
//! # Overview
//!
//! - [`Buffer`] - Positional, sequential and seekable access to a fixed region
//! - [`FixedLayout`] - Values with a fixed-width binary representation
//! - [`FixedSize`] - Layouts whose width is known from the type alone
//! - [`ByteOrder`] - Little- or big-endian selection for structured access
//! - [`Whence`] - Seek addressing mode
//!
//! # Example
//!
//! ```
//! use bufferio::{Buffer, Whence};
//!
//! let mut buf = Buffer::with_capacity(8);
//! buf.write_data_be(&[0x0102_0304u32, 0x0506_0708]).unwrap();
//! assert_eq!(buf.as_bytes(), &[1, 2, 3, 4, 5, 6, 7, 8]);
//!
//! buf.seek(4, Whence::Start).unwrap();
//! let mut word = 0u32;
//! buf.read_data_le(&mut word).unwrap();
//! assert_eq!(word, 0x0807_0605);
//! ```
//!
//! # Concurrency
//!
//! A `Buffer` has no internal synchronization. Every mutating operation takes
//! `&mut self`; share one across threads only behind an external lock.

extern crate self as bufferio;

mod buffer;
mod error;
mod io;
mod layout;
mod order;
mod reader;

pub use buffer::{Buffer, Whence};
pub use error::{BufferError, EncodingError, Result};
pub use layout::{encode_to_vec, Complex, FixedLayout, FixedSize};
pub use order::ByteOrder;
pub use reader::Reader;

/// Derives [`FixedLayout`] and [`FixedSize`] for a struct by encoding its
/// fields in declaration order.
#[cfg(feature = "derive")]
pub use bufferio_derive::FixedLayout;
