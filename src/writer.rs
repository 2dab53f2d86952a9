use std::borrow::Cow;
use std::io::{self, Read, Write};

use tracing::trace;

use crate::charset;
use crate::codec::{self, BitWidth};
use crate::error::Result;
use crate::stream::TypedStream;

/// Width of a string field written by [`TypedStream::write_string`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum FieldLength {
    /// The field is exactly as long as the encoded text.
    #[default]
    All,
    /// The field is exactly this many bytes: shorter text is padded with spaces, longer text is
    /// cut off.
    Fixed(usize),
}

impl From<usize> for FieldLength {
    fn from(len: usize) -> Self {
        Self::Fixed(len)
    }
}

impl From<Option<usize>> for FieldLength {
    fn from(len: Option<usize>) -> Self {
        len.map_or(Self::All, Self::Fixed)
    }
}

impl<B: Write> TypedStream<B> {
    /// Writes `bytes` to the backend as-is. Returns the number of bytes written.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<usize> {
        self.inner.write_all(bytes)?;
        Ok(bytes.len())
    }

    /// Writes a small, fixed-size array of bytes.
    pub fn write_cbytes<const N: usize>(&mut self, value: [u8; N]) -> Result<usize> {
        self.write_bytes(&value)
    }

    /// Writes `value` as an integer field of `bits` bits, rounded up to whole bytes.
    ///
    /// The field holds `value mod 2^width`: values that do not fit wrap rather than fail, and
    /// negative values are written in two's complement. Returns the number of bytes written.
    pub fn write_int(&mut self, value: i128, bits: u32) -> Result<usize> {
        let width = BitWidth::new(bits)?;
        let mut bytes = codec::int_to_bytes(value, width);
        self.endianness.arrange(&mut bytes);
        trace!(bits = width.bits(), endianness = ?self.endianness, "write_int");
        self.write_bytes(&bytes)
    }

    /// Writes a one-byte boolean: 1 for `true`, 0 for `false`.
    pub fn write_bool(&mut self, value: bool) -> Result<usize> {
        self.write_int(value as i128, 8)
    }

    /// Writes a 4-byte IEEE-754 single.
    pub fn write_float(&mut self, value: f32) -> Result<usize> {
        let mut bytes = codec::float_to_bytes(value);
        self.arrange_float(&mut bytes);
        self.write_cbytes(bytes)
    }

    /// Writes an 8-byte IEEE-754 double.
    pub fn write_double(&mut self, value: f64) -> Result<usize> {
        let mut bytes = codec::double_to_bytes(value);
        self.arrange_float(&mut bytes);
        self.write_cbytes(bytes)
    }

    /// Writes `value` as a string field.
    ///
    /// The text is transcoded from UTF-8 into `charset`, or into the stream's default charset
    /// when `charset` is `None`; with neither it is written as UTF-8. A [`FieldLength::Fixed`]
    /// field is right-padded with spaces (0x20) or truncated to exactly that many bytes.
    /// Truncation counts bytes, so it may cut a multi-byte character.
    pub fn write_string(
        &mut self,
        value: &str,
        length: FieldLength,
        charset: Option<&str>,
    ) -> Result<usize> {
        let encoded = match charset::resolve(charset, self.charset)? {
            Some(cs) => cs.encode(value)?,
            None => Cow::Borrowed(value.as_bytes()),
        };
        match length {
            FieldLength::All => self.write_bytes(&encoded),
            FieldLength::Fixed(len) if encoded.len() >= len => self.write_bytes(&encoded[..len]),
            FieldLength::Fixed(len) => {
                let written = self.write_bytes(&encoded)?;
                Ok(written + self.write_fill(b' ', len - written)?)
            }
        }
    }

    /// Writes `len` zero bytes.
    pub fn write_null(&mut self, len: usize) -> Result<usize> {
        self.write_fill(b'\0', len)
    }

    fn write_fill(&mut self, byte: u8, len: usize) -> Result<usize> {
        let copied = io::copy(&mut io::repeat(byte).take(len as u64), &mut self.inner)?;
        Ok(copied as usize)
    }
}
