use thiserror::Error;

/// Result alias used by every fallible operation in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Which way a charset conversion was going when it failed.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Direction {
    /// UTF-8 text was being converted into the target charset.
    Encode,
    /// Bytes in the source charset were being converted into UTF-8.
    Decode,
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Encode => f.write_str("encode"),
            Self::Decode => f.write_str("decode"),
        }
    }
}

/// Error type for `TypedStream` and the numeric codec.
#[derive(Debug, Error)]
pub enum Error {
    /// A bit width was zero or too wide to fit in 64 bits once rounded up to whole bytes.
    #[error("invalid bit width {bits}: must be between 1 and 64")]
    InvalidWidth {
        /// The width that was requested, before rounding.
        bits: u32,
    },

    /// A byte sequence handed to the codec has the wrong length for the value being decoded.
    #[error("cannot decode {len} bytes as {target}")]
    InvalidByteCount {
        /// Number of bytes that were supplied.
        len: usize,
        /// What the bytes were meant to become.
        target: &'static str,
    },

    /// The charset label is not known to the transcoder.
    #[error("unknown charset {label:?}")]
    UnknownCharset {
        /// The label as given by the caller.
        label: String,
    },

    /// The backend ran out of data before the field was complete.
    ///
    /// Bytes that were consumed before the backend reported end of data are not pushed back.
    #[error("short read: needed {requested} bytes, only {available} available")]
    ShortRead {
        /// Number of bytes the operation needed.
        requested: usize,
        /// Number of bytes the backend actually produced.
        available: usize,
    },

    /// Transcoding between UTF-8 and a charset failed.
    #[error("cannot {direction} text as {charset}")]
    Encoding {
        /// Canonical name of the charset involved.
        charset: &'static str,
        /// Whether the failure happened while writing or reading.
        direction: Direction,
    },

    /// The underlying backend failed.
    #[error("backend error: {0}")]
    Backend(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` for errors caused by a bad argument rather than by the data or the backend.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidWidth { .. } | Self::InvalidByteCount { .. } | Self::UnknownCharset { .. }
        )
    }

    /// Returns `true` if the backend did not have enough bytes for the requested field.
    pub fn is_short_read(&self) -> bool {
        matches!(self, Self::ShortRead { .. })
    }
}
