use crate::endian::{Endianness, FloatOrder};

/// Settings a [`TypedStream`](crate::TypedStream) starts out with.
///
/// The charset is kept as a label so that a config can be built or deserialized before it is
/// known whether the label is valid; it is checked when the config is applied.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StreamConfig {
    /// Byte order of multi-byte integers.
    pub endianness: Endianness,
    /// Default charset label for string fields. `None` means strings are raw UTF-8.
    pub charset: Option<String>,
    /// Byte order of floats and doubles.
    pub float_order: FloatOrder,
}

impl StreamConfig {
    /// Little-endian, no charset, native float order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the integer byte order.
    pub fn with_endianness(mut self, endianness: Endianness) -> Self {
        self.endianness = endianness;
        self
    }

    /// Sets the default charset label.
    pub fn with_charset(mut self, label: impl Into<String>) -> Self {
        self.charset = Some(label.into());
        self
    }

    /// Sets the float byte order.
    pub fn with_float_order(mut self, float_order: FloatOrder) -> Self {
        self.float_order = float_order;
        self
    }
}
