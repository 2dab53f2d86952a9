/// Byte order used for multi-byte integers.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endianness {
    /// Least-significant byte first.
    #[default]
    Little,
    /// Most-significant byte first.
    Big,
}

impl Endianness {
    /// The byte order of the platform this code was compiled for.
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::Big
        } else {
            Self::Little
        }
    }

    /// Returns `true` for [`Endianness::Little`].
    pub const fn is_little(self) -> bool {
        matches!(self, Self::Little)
    }

    /// Puts bytes that are in little-endian order into this byte order, in place.
    ///
    /// The operation is its own inverse, so it also normalizes wire bytes in this order back to
    /// little-endian.
    #[inline(always)]
    pub fn arrange(self, bytes: &mut [u8]) {
        if let Self::Big = self {
            bytes.reverse();
        }
    }
}

/// Byte order used for `f32` and `f64` values.
///
/// Integers always honor the stream's [`Endianness`]. Floats do not by default: they are written
/// in the platform's native byte order, which is how existing files in this format were produced.
/// Select [`FloatOrder::Stream`] to make floats follow the stream's endianness instead.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FloatOrder {
    /// Platform byte order, ignoring the stream's endianness.
    #[default]
    Native,
    /// Same byte order as integers on this stream.
    Stream,
}

impl FloatOrder {
    /// Resolves the concrete byte order floats use on a stream with the given endianness.
    pub fn resolve(self, stream: Endianness) -> Endianness {
        match self {
            Self::Native => Endianness::native(),
            Self::Stream => stream,
        }
    }
}
