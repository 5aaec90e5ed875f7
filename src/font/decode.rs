// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Text input forms and code point decoding.
//!
//! Wide units pass through one-to-one; surrogate halves stay separate code
//! points and resolve through the fallback glyph like any other unmapped
//! value. UTF-8 bytes are validated up front, so a malformed sequence fails
//! before any layout starts.

use crate::font::{FontError, FontResult};

/// Borrowed text in one of the supported encodings.
#[derive(Debug, Clone, Copy)]
pub enum TextInput<'a> {
    /// Already-validated UTF-8
    Str(&'a str),
    /// Raw UTF-8 bytes, validated on decode
    Utf8(&'a [u8]),
    /// Wide units, one code point each
    Wide(&'a [u16]),
}

impl<'a> From<&'a str> for TextInput<'a> {
    fn from(s: &'a str) -> Self {
        TextInput::Str(s)
    }
}

impl<'a> From<&'a String> for TextInput<'a> {
    fn from(s: &'a String) -> Self {
        TextInput::Str(s)
    }
}

impl<'a> From<&'a [u8]> for TextInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        TextInput::Utf8(bytes)
    }
}

impl<'a> From<&'a [u16]> for TextInput<'a> {
    fn from(units: &'a [u16]) -> Self {
        TextInput::Wide(units)
    }
}

/// Decode `input` into `out` in reading order. The buffer is cleared but
/// keeps its capacity, so repeated calls settle on the largest text seen.
pub(crate) fn decode_into(input: TextInput<'_>, out: &mut Vec<u32>) -> FontResult<()> {
    out.clear();
    match input {
        TextInput::Str(s) => out.extend(s.chars().map(|c| c as u32)),
        TextInput::Utf8(bytes) => {
            let s = std::str::from_utf8(bytes).map_err(|e| {
                FontError::InvalidEncoding(format!(
                    "bad utf-8 sequence at byte {}",
                    e.valid_up_to()
                ))
            })?;
            out.extend(s.chars().map(|c| c as u32));
        }
        TextInput::Wide(units) => out.extend(units.iter().map(|&u| u as u32)),
    }
    Ok(())
}
