// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Sprite font engine.
//!
//! A SpriteFont couples a GlyphTable with the id of the atlas texture its
//! glyphs point into, plus a reusable decode buffer. Text goes through three
//! stages: decode (wide or UTF-8 input to code points), layout (pen walking
//! with whitespace and line-break handling) and one of two sinks, measurement
//! or quad emission into an external SpriteBatch.
//!
//! decode: text input forms and code point decoding
//! glyph: glyph metrics and the sorted lookup table
//! layout: the pen state machine shared by measuring and drawing
//! draw: draw parameters, quad commands and the batch trait

pub mod decode;
pub mod draw;
pub mod glyph;
pub mod layout;

pub use decode::TextInput;
pub use draw::{Color, DrawParams, QuadCommand, RenderEffects, SpriteBatch};
pub use glyph::{Glyph, GlyphTable};

use crate::asset::FontAtlasData;
use crate::util::{ARect, PointF32};

/// Font result type
pub type FontResult<T> = Result<T, FontError>;

/// Font error types
#[derive(Debug)]
pub enum FontError {
    /// A code point has no glyph and no default character is configured
    UnmappedCharacter(u32),
    /// Text bytes are not valid UTF-8
    InvalidEncoding(String),
    /// A font asset payload could not be decoded or failed validation
    AssetLoadFailure(String),
}

impl std::fmt::Display for FontError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontError::UnmappedCharacter(cp) => {
                write!(f, "no glyph for code point U+{:04X}", cp)
            }
            FontError::InvalidEncoding(msg) => write!(f, "invalid encoding: {}", msg),
            FontError::AssetLoadFailure(msg) => write!(f, "font asset load failed: {}", msg),
        }
    }
}

impl std::error::Error for FontError {}

/// A baked sprite font: glyph table, atlas texture id and decode scratch.
///
/// Drawing and measuring take `&mut self` because decoding reuses the
/// per-font scratch buffer. One font instance per thread, or external
/// locking around all entry points.
pub struct SpriteFont {
    table: GlyphTable,
    texture: usize,
    // decode scratch, cleared per call, capacity kept
    scratch: Vec<u32>,
}

impl SpriteFont {
    /// Build from a pre-parsed asset payload and the atlas texture it was
    /// baked against.
    pub fn from_data(data: &FontAtlasData, texture: usize) -> FontResult<Self> {
        let mut table = GlyphTable::new(data.glyphs.clone(), data.line_spacing);
        if let Some(cp) = data.default_codepoint {
            if !table.contains(cp) {
                return Err(FontError::AssetLoadFailure(format!(
                    "default code point U+{:04X} has no glyph in the payload",
                    cp
                )));
            }
            table.set_fallback(Some(cp))?;
        }
        Ok(Self {
            table,
            texture,
            scratch: Vec::new(),
        })
    }

    /// Build directly from caller-supplied glyphs. The table sorts them
    /// itself, so any order is accepted.
    pub fn from_glyphs(glyphs: Vec<Glyph>, texture: usize, line_spacing: f32) -> Self {
        Self {
            table: GlyphTable::new(glyphs, line_spacing),
            texture,
            scratch: Vec::new(),
        }
    }

    /// Vertical distance between baselines.
    pub fn line_spacing(&self) -> f32 {
        self.table.line_spacing()
    }

    pub fn set_line_spacing(&mut self, spacing: f32) {
        self.table.set_line_spacing(spacing);
    }

    /// Character substituted for unmapped code points, if any.
    pub fn default_char(&self) -> Option<char> {
        self.table.fallback_codepoint().and_then(char::from_u32)
    }

    /// Set or clear the default character. It must itself be in the table.
    pub fn set_default_char(&mut self, ch: Option<char>) -> FontResult<()> {
        self.table.set_fallback(ch.map(|c| c as u32))
    }

    /// True when the table maps `ch` itself; the default character does not
    /// count.
    pub fn contains(&self, ch: char) -> bool {
        self.table.contains(ch as u32)
    }

    pub fn find_glyph(&self, ch: char) -> FontResult<&Glyph> {
        self.table.find(ch as u32)
    }

    /// Id of the atlas texture the glyph source rects index into.
    pub fn texture(&self) -> usize {
        self.texture
    }

    pub fn glyph_table(&self) -> &GlyphTable {
        &self.table
    }

    /// Emit one quad per visible glyph into `batch`, in code point order.
    pub fn draw_text<'a, T>(
        &mut self,
        batch: &mut dyn SpriteBatch,
        text: T,
        params: &DrawParams,
    ) -> FontResult<()>
    where
        T: Into<TextInput<'a>>,
    {
        decode::decode_into(text.into(), &mut self.scratch)?;
        draw::draw_glyphs(batch, self.texture, &self.table, &self.scratch, params)
    }

    /// Advance-based size of the text: widest line and the final pen y plus
    /// one line spacing. Trailing whitespace advances are included.
    pub fn measure_text<'a, T>(&mut self, text: T, ignore_whitespace: bool) -> FontResult<PointF32>
    where
        T: Into<TextInput<'a>>,
    {
        decode::decode_into(text.into(), &mut self.scratch)?;
        layout::measure_extent(&self.table, &self.scratch, ignore_whitespace)
    }

    /// Tight pixel bounds of the visible glyph quads, anchored at `position`.
    /// Trailing whitespace advances do not widen the result.
    pub fn measure_bounds<'a, T>(
        &mut self,
        text: T,
        position: PointF32,
        ignore_whitespace: bool,
    ) -> FontResult<ARect>
    where
        T: Into<TextInput<'a>>,
    {
        decode::decode_into(text.into(), &mut self.scratch)?;
        layout::measure_bounds(&self.table, &self.scratch, position, ignore_whitespace)
    }
}
