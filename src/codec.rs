//! Conversions between byte sequences and numbers. Nothing here does I/O.
//!
//! Integer byte sequences are always least-significant byte first. Callers that need another byte
//! order rearrange the bytes themselves (see [`Endianness::arrange`](crate::Endianness::arrange)).
//!
//! Values cross the API as `i128`, which holds every unsigned and every signed 64-bit value at
//! once, so a 64-bit field never loses precision no matter how it is interpreted.

use core::ops::{Deref, DerefMut};

use zerocopy::byteorder::{LE, U16, U32};
use zerocopy::FromBytes;

use crate::error::{Error, Result};

/// Width of an integer field in bits, always a whole number of bytes between 8 and 64.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub struct BitWidth(u32);

impl BitWidth {
    /// 8-bit field.
    pub const W8: Self = Self(8);
    /// 16-bit field.
    pub const W16: Self = Self(16);
    /// 24-bit field.
    pub const W24: Self = Self(24);
    /// 32-bit field.
    pub const W32: Self = Self(32);
    /// 40-bit field.
    pub const W40: Self = Self(40);
    /// 48-bit field.
    pub const W48: Self = Self(48);
    /// 56-bit field.
    pub const W56: Self = Self(56);
    /// 64-bit field.
    pub const W64: Self = Self(64);

    /// Every supported width, narrowest first.
    pub const ALL: [Self; 8] = [
        Self::W8,
        Self::W16,
        Self::W24,
        Self::W32,
        Self::W40,
        Self::W48,
        Self::W56,
        Self::W64,
    ];

    /// Rounds `bits` up to the next multiple of 8.
    ///
    /// Fails with [`Error::InvalidWidth`] for zero and for anything wider than 64 bits.
    pub fn new(bits: u32) -> Result<Self> {
        if bits == 0 || bits > 64 {
            return Err(Error::InvalidWidth { bits });
        }
        Ok(Self(bits.div_ceil(8) * 8))
    }

    /// The width for a field of `len` bytes.
    pub fn from_byte_len(len: usize) -> Result<Self> {
        match len {
            1..=8 => Ok(Self(len as u32 * 8)),
            _ => Err(Error::InvalidByteCount {
                len,
                target: "an integer of at most 64 bits",
            }),
        }
    }

    /// Number of bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Number of bytes.
    pub const fn bytes(self) -> usize {
        (self.0 / 8) as usize
    }

    /// All-ones mask covering this width.
    pub const fn mask(self) -> u64 {
        if self.0 == 64 {
            u64::MAX
        } else {
            (1u64 << self.0) - 1
        }
    }

    /// Smallest signed value a field of this width can hold.
    pub const fn signed_min(self) -> i64 {
        !self.signed_max()
    }

    /// Largest signed value a field of this width can hold.
    pub const fn signed_max(self) -> i64 {
        (self.mask() >> 1) as i64
    }
}

/// `ceil(bits / 8) * 8`, checked against the supported range.
pub fn round_up_to_byte(bits: u32) -> Result<BitWidth> {
    BitWidth::new(bits)
}

/// The bytes of one encoded integer, least-significant first. At most 8 bytes; never allocates.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct IntBytes {
    buf: [u8; 8],
    len: u8,
}

impl Deref for IntBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }
}

impl DerefMut for IntBytes {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.buf[..self.len as usize]
    }
}

impl AsRef<[u8]> for IntBytes {
    fn as_ref(&self) -> &[u8] {
        self
    }
}

/// Splits `value` into `width.bytes()` bytes, least-significant byte first.
///
/// Byte `i` is `(value >> 8*i) & 0xff`. Values outside the field wrap: the result encodes
/// `value mod 2^width`, and negative values come out in two's complement.
pub fn int_to_bytes(value: i128, width: BitWidth) -> IntBytes {
    let mut buf = [0u8; 8];
    for (i, b) in buf.iter_mut().take(width.bytes()).enumerate() {
        *b = (value >> (8 * i)) as u8;
    }
    IntBytes {
        buf,
        len: width.bytes() as u8,
    }
}

/// Reassembles least-significant-first `bytes` into an integer.
///
/// The width is `8 * bytes.len()`, which must be 1 to 8 bytes. With `unsigned` false the value
/// is sign-corrected: values at or above `2^(width-1)` have `2^width` subtracted.
pub fn bytes_to_int(bytes: &[u8], unsigned: bool) -> Result<i128> {
    let width = BitWidth::from_byte_len(bytes.len())?;
    let raw = assemble(bytes);
    Ok(if unsigned {
        raw as i128
    } else {
        unsigned_to_signed(raw, width) as i128
    })
}

pub(crate) fn assemble(bytes: &[u8]) -> u64 {
    match *bytes {
        [b0] => b0 as u64,
        [b0, b1] => U16::<LE>::from_bytes([b0, b1]).get() as u64,
        [b0, b1, b2, b3] => U32::<LE>::from_bytes([b0, b1, b2, b3]).get() as u64,
        [l0, l1, l2, l3, h0, h1, h2, h3] => {
            // low | high * 2^32
            let lo = U32::<LE>::from_bytes([l0, l1, l2, l3]).get() as u64;
            let hi = U32::<LE>::from_bytes([h0, h1, h2, h3]).get() as u64;
            lo | (hi << 32)
        }
        _ => assemble_generic(bytes),
    }
}

/// `sum(byte[i] << 8*i)` for any length up to 8.
pub(crate) fn assemble_generic(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, &b)| acc | (b as u64) << (8 * i))
}

/// Reinterprets the low `width` bits of `value` as a two's-complement number.
pub fn unsigned_to_signed(value: u64, width: BitWidth) -> i64 {
    let value = value & width.mask();
    if width.bits() == 64 {
        return value as i64;
    }
    if value >= 1u64 << (width.bits() - 1) {
        (value as i64) - (1i64 << width.bits())
    } else {
        value as i64
    }
}

/// Two's-complement representation of `value` in `width` bits, as an unsigned number.
pub fn signed_to_unsigned(value: i64, width: BitWidth) -> u64 {
    (value as u64) & width.mask()
}

/// Bit pattern of an `f32`, in the platform's native byte order.
pub fn float_to_bytes(value: f32) -> [u8; 4] {
    value.to_ne_bytes()
}

/// Reinterprets 4 native-order bytes as an `f32`.
pub fn bytes_to_float(bytes: &[u8]) -> Result<f32> {
    f32::read_from_bytes(bytes).map_err(|_| Error::InvalidByteCount {
        len: bytes.len(),
        target: "an f32",
    })
}

/// Bit pattern of an `f64`, in the platform's native byte order.
pub fn double_to_bytes(value: f64) -> [u8; 8] {
    value.to_ne_bytes()
}

/// Reinterprets 8 native-order bytes as an `f64`.
pub fn bytes_to_double(bytes: &[u8]) -> Result<f64> {
    f64::read_from_bytes(bytes).map_err(|_| Error::InvalidByteCount {
        len: bytes.len(),
        target: "an f64",
    })
}
