//! Typed binary reads and writes over a seekable byte stream.
//!
//! [`TypedStream`] wraps any `std::io` backend and reads or writes:
//!
//! * integers of any whole-byte width from 8 to 64 bits, in little- or big-endian order, read back
//!   as either unsigned or two's-complement values;
//! * IEEE-754 floats and doubles;
//! * booleans, raw byte arrays and zero padding;
//! * fixed-width, space-padded string fields, optionally transcoded to another charset.
//!
//! The number crunching lives in [`codec`], which has no I/O and can be used on its own.
//!
//! ```
//! use binary_stream::{Endianness, FieldLength, TypedStream};
//!
//! let mut s = TypedStream::new();
//! s.set_endianness(Endianness::Big);
//! s.write_int(-12122342343223234, 64)?;
//! s.write_string("AB", FieldLength::Fixed(5), None)?;
//! assert_eq!(&s.bytes()[8..], b"AB   ");
//!
//! s.rewind()?;
//! assert_eq!(s.read_int(64, false)?, -12122342343223234);
//! assert_eq!(s.read_string(5, None)?, "AB");
//! # Ok::<(), binary_stream::Error>(())
//! ```

#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

pub mod codec;

mod charset;
mod config;
mod endian;
mod error;
mod reader;
mod stream;
mod writer;


pub use charset::{resolve as resolve_charset, Charset};
pub use codec::BitWidth;
pub use config::StreamConfig;
pub use endian::{Endianness, FloatOrder};
pub use error::{Direction, Error, Result};
pub use stream::TypedStream;
pub use writer::FieldLength;
