use std::io::{ErrorKind, Read};

use tracing::{debug, trace};

use crate::charset;
use crate::codec::{self, BitWidth};
use crate::error::{Error, Result};
use crate::stream::TypedStream;

/// Bytes stripped from the end of a fixed-width string field.
const PAD_BYTES: [u8; 2] = [b'\0', b' '];

impl<B: Read> TypedStream<B> {
    /// Fills `buf` completely from the backend.
    ///
    /// Fails with [`Error::ShortRead`] if the backend reports end of data first. Bytes consumed
    /// before that point are gone from the backend; they are not returned to the caller.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => {
                    debug!(requested = buf.len(), available = filled, "short read");
                    return Err(Error::ShortRead {
                        requested: buf.len(),
                        available: filled,
                    });
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    /// Reads exactly `len` bytes.
    ///
    /// A zero-length read succeeds with an empty vector. Fewer than `len` bytes left in the
    /// backend is an error, never a truncated result.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Reads a small array of bytes, with a constant length.
    pub fn read_cbytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Reads an integer field of `bits` bits, rounded up to whole bytes.
    ///
    /// With `unsigned` true the result is in `0..2^width`; otherwise it is the two's-complement
    /// value in `-2^(width-1)..2^(width-1)`. Either way a 64-bit field is returned exactly.
    pub fn read_int(&mut self, bits: u32, unsigned: bool) -> Result<i128> {
        let width = BitWidth::new(bits)?;
        let mut buf = [0u8; 8];
        let bytes = &mut buf[..width.bytes()];
        self.fill(bytes)?;
        self.endianness.arrange(bytes);
        trace!(bits = width.bits(), endianness = ?self.endianness, unsigned, "read_int");
        codec::bytes_to_int(bytes, unsigned)
    }

    /// Reads an unsigned integer field of `bits` bits.
    pub fn read_uint(&mut self, bits: u32) -> Result<u64> {
        Ok(self.read_int(bits, true)? as u64)
    }

    /// Reads a two's-complement integer field of `bits` bits.
    pub fn read_sint(&mut self, bits: u32) -> Result<i64> {
        Ok(self.read_int(bits, false)? as i64)
    }

    /// Reads a one-byte boolean. Any non-zero byte is `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_int(8, true)? != 0)
    }

    /// Reads a 4-byte IEEE-754 single.
    pub fn read_float(&mut self) -> Result<f32> {
        let mut bytes = self.read_cbytes::<4>()?;
        self.arrange_float(&mut bytes);
        codec::bytes_to_float(&bytes)
    }

    /// Reads an 8-byte IEEE-754 double.
    pub fn read_double(&mut self) -> Result<f64> {
        let mut bytes = self.read_cbytes::<8>()?;
        self.arrange_float(&mut bytes);
        codec::bytes_to_double(&bytes)
    }

    /// Reads a fixed-width string field of `len` bytes.
    ///
    /// Trailing NUL and space bytes are stripped, then the rest is transcoded to UTF-8 from
    /// `charset`, or from the stream's default charset when `charset` is `None`. With neither,
    /// the bytes must already be UTF-8.
    pub fn read_string(&mut self, len: usize, charset: Option<&str>) -> Result<String> {
        let charset = charset::resolve(charset, self.charset)?;
        let raw = self.read_bytes(len)?;
        let data = trim_padding(&raw);
        let text = match charset {
            Some(cs) => cs.decode(data)?,
            None => charset::utf8(data)?,
        };
        Ok(text.into_owned())
    }

    /// Reads a fixed-width string field of `len` bytes without transcoding or validating it.
    ///
    /// Trailing NUL and space bytes are stripped, as for [`TypedStream::read_string`].
    #[cfg(feature = "bstr")]
    pub fn read_bstring(&mut self, len: usize) -> Result<bstr::BString> {
        let mut raw = self.read_bytes(len)?;
        raw.truncate(trim_padding(&raw).len());
        Ok(bstr::BString::from(raw))
    }

    /// Reads a line of at most `max` bytes (delimiter included), stopping after `ending`.
    ///
    /// The delimiter is consumed but not included in the result. Returns `None` when the backend
    /// is already at end of data. Reaching end of data part-way through a line is not an error;
    /// the partial line is returned.
    ///
    /// Reads one byte at a time so that nothing past the delimiter is consumed.
    pub fn read_line(&mut self, max: usize, ending: &[u8]) -> Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        let mut byte = [0u8; 1];
        let mut at_end = false;
        while line.len() < max {
            match self.inner.read(&mut byte) {
                Ok(0) => {
                    at_end = true;
                    break;
                }
                Ok(_) => line.push(byte[0]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
            if !ending.is_empty() && line.ends_with(ending) {
                line.truncate(line.len() - ending.len());
                return Ok(Some(line));
            }
        }
        if at_end && line.is_empty() {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

fn trim_padding(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|b| !PAD_BYTES.contains(b))
        .map_or(0, |i| i + 1);
    &bytes[..end]
}
