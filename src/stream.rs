use std::io::{Cursor, Seek, SeekFrom, Write};

use crate::charset::{self, Charset};
use crate::config::StreamConfig;
use crate::endian::{Endianness, FloatOrder};
use crate::error::Result;

/// Reads and writes typed values against a byte-oriented backend.
///
/// The backend is anything implementing [`std::io::Read`], [`std::io::Write`] and/or
/// [`std::io::Seek`]: a `File`, a `TcpStream`, or a `Cursor<Vec<u8>>` for an in-memory buffer.
/// Each method only requires the traits it uses, so a read-only backend still gets every `read_*`
/// method.
///
/// Every operation runs to completion against the backend's current position. The stream keeps
/// no buffered state of its own between calls; the backend owns the cursor. Because every call
/// advances that cursor, a `TypedStream` must not be driven from more than one place at a time.
///
/// Integers follow the stream's [`Endianness`]. Floats follow the [`FloatOrder`], which by default
/// is the platform's native order. Strings and raw bytes are never reordered.
#[derive(Debug)]
pub struct TypedStream<B> {
    pub(crate) inner: B,
    pub(crate) endianness: Endianness,
    pub(crate) charset: Option<Charset>,
    pub(crate) float_order: FloatOrder,
}

impl<B> TypedStream<B> {
    /// Wraps `inner` with default settings: little-endian, no charset, native float order.
    pub fn wrap(inner: B) -> Self {
        Self {
            inner,
            endianness: Endianness::default(),
            charset: None,
            float_order: FloatOrder::default(),
        }
    }

    /// Wraps `inner` with the given settings. Fails if the config names an unknown charset.
    pub fn with_config(inner: B, config: &StreamConfig) -> Result<Self> {
        let charset = charset::resolve(config.charset.as_deref(), None)?;
        Ok(Self {
            inner,
            endianness: config.endianness,
            charset,
            float_order: config.float_order,
        })
    }

    /// Byte order used for integers.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Changes the byte order used for integers from now on.
    pub fn set_endianness(&mut self, endianness: Endianness) {
        self.endianness = endianness;
    }

    /// The default charset for string fields, if any.
    pub fn charset(&self) -> Option<Charset> {
        self.charset
    }

    /// Sets (or with `None`, clears) the default charset for string fields.
    pub fn set_charset(&mut self, label: Option<&str>) -> Result<()> {
        self.charset = charset::resolve(label, None)?;
        Ok(())
    }

    /// Byte order policy for floats and doubles.
    pub fn float_order(&self) -> FloatOrder {
        self.float_order
    }

    /// Changes the byte order policy for floats and doubles.
    pub fn set_float_order(&mut self, float_order: FloatOrder) {
        self.float_order = float_order;
    }

    /// Extracts the backend.
    pub fn into_inner(self) -> B {
        self.inner
    }

    /// Accesses the backend.
    pub fn inner(&self) -> &B {
        &self.inner
    }

    /// Accesses the backend mutably. Moving its cursor moves this stream's position.
    pub fn inner_mut(&mut self) -> &mut B {
        &mut self.inner
    }

    /// Rearranges native-order float bytes into wire order, or wire order back into native.
    pub(crate) fn arrange_float(&self, bytes: &mut [u8]) {
        if self.float_order.resolve(self.endianness) != Endianness::native() {
            bytes.reverse();
        }
    }
}

impl<B: Seek> TypedStream<B> {
    /// Moves the backend's cursor and returns the new offset from the start.
    pub fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        Ok(self.inner.seek(pos)?)
    }

    /// Current offset from the start.
    pub fn position(&mut self) -> Result<u64> {
        Ok(self.inner.stream_position()?)
    }

    /// Total length of the backend. The position is left where it was.
    pub fn size(&mut self) -> Result<u64> {
        let pos = self.inner.stream_position()?;
        let end = self.inner.seek(SeekFrom::End(0))?;
        if pos != end {
            self.inner.seek(SeekFrom::Start(pos))?;
        }
        Ok(end)
    }

    /// Moves back to the start.
    pub fn rewind(&mut self) -> Result<()> {
        Ok(self.inner.rewind()?)
    }

    /// Moves the cursor by `offset` bytes relative to the current position.
    pub fn skip(&mut self, offset: i64) -> Result<u64> {
        self.seek(SeekFrom::Current(offset))
    }
}

impl<B: Write> TypedStream<B> {
    /// Flushes the backend.
    pub fn flush(&mut self) -> Result<()> {
        Ok(self.inner.flush()?)
    }
}

impl TypedStream<Cursor<Vec<u8>>> {
    /// Creates a stream over an empty in-memory buffer.
    pub fn new() -> Self {
        Self::wrap(Cursor::new(Vec::new()))
    }

    /// Creates a stream over an in-memory buffer holding `data`, positioned at the start.
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self::wrap(Cursor::new(data))
    }

    /// The whole in-memory buffer, regardless of the current position.
    pub fn bytes(&self) -> &[u8] {
        self.inner.get_ref()
    }

    /// Extracts the in-memory buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.inner.into_inner()
    }
}

impl Default for TypedStream<Cursor<Vec<u8>>> {
    fn default() -> Self {
        Self::new()
    }
}
