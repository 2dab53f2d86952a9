use std::borrow::Cow;

use encoding_rs::Encoding;
use tracing::debug;

use crate::error::{Direction, Error, Result};

/// A character encoding that string fields can be transcoded to and from.
///
/// Charsets are looked up by their WHATWG label (`"windows-1251"`, `"koi8-r"`, `"shift_jis"`,
/// `"utf-8"`, ...). Note that the WHATWG tables treat `"iso-8859-1"` and `"latin1"` as aliases of
/// `windows-1252`.
///
/// Only charsets that text can be both written in and read back from are accepted. The UTF-16
/// labels and the labels WHATWG maps to its decode-only "replacement" encoding (`"iso-2022-kr"`,
/// `"hz-gb-2312"`, ...) are rejected as unknown.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Charset(&'static Encoding);

impl Charset {
    /// Looks up a charset by label. Case and surrounding whitespace are ignored.
    pub fn for_label(label: &str) -> Result<Self> {
        match Encoding::for_label(label.as_bytes()) {
            // Encoders for these fall back to UTF-8, so the bytes would not read back.
            Some(encoding) if encoding.output_encoding() == encoding => Ok(Self(encoding)),
            Some(encoding) => {
                debug!(label, charset = encoding.name(), "charset cannot be encoded");
                Err(Error::UnknownCharset {
                    label: label.to_owned(),
                })
            }
            None => Err(Error::UnknownCharset {
                label: label.to_owned(),
            }),
        }
    }

    /// Canonical name of the charset.
    pub fn name(self) -> &'static str {
        self.0.name()
    }

    /// Converts UTF-8 text into this charset.
    ///
    /// Fails with [`Error::Encoding`] if the text contains a character the charset cannot
    /// represent. No replacement characters are ever written.
    pub fn encode(self, text: &str) -> Result<Cow<'_, [u8]>> {
        let (bytes, _, had_errors) = self.0.encode(text);
        if had_errors {
            debug!(charset = self.name(), "unmappable character while encoding");
            return Err(self.error(Direction::Encode));
        }
        Ok(bytes)
    }

    /// Converts bytes in this charset into UTF-8.
    ///
    /// Fails with [`Error::Encoding`] on any malformed sequence.
    pub fn decode(self, bytes: &[u8]) -> Result<Cow<'_, str>> {
        self.0
            .decode_without_bom_handling_and_without_replacement(bytes)
            .ok_or_else(|| {
                debug!(charset = self.name(), len = bytes.len(), "malformed input while decoding");
                self.error(Direction::Decode)
            })
    }

    fn error(self, direction: Direction) -> Error {
        Error::Encoding {
            charset: self.name(),
            direction,
        }
    }
}

impl core::fmt::Display for Charset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Picks the charset for one call: an explicit label wins, then the stream's default, and with
/// neither the text is passed through as raw UTF-8 (`None`).
pub fn resolve(explicit: Option<&str>, default: Option<Charset>) -> Result<Option<Charset>> {
    match explicit {
        Some(label) => Charset::for_label(label).map(Some),
        None => Ok(default),
    }
}

/// Plain UTF-8 conversion used when no charset applies.
pub(crate) fn utf8(bytes: &[u8]) -> Result<Cow<'_, str>> {
    match core::str::from_utf8(bytes) {
        Ok(s) => Ok(Cow::Borrowed(s)),
        Err(_) => Err(Error::Encoding {
            charset: encoding_rs::UTF_8.name(),
            direction: Direction::Decode,
        }),
    }
}
