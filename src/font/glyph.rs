// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Glyph metrics and the sorted lookup table.
//!
//! A table is built once at font-load time and stays immutable afterwards
//! except for two knobs: the fallback glyph and the line spacing. Lookup is a
//! binary search keyed on the code point, so the glyph vec must stay sorted
//! strictly ascending with no duplicates. Construction enforces that itself.

use crate::font::{FontError, FontResult};
use crate::util::ARect;
use serde::{Deserialize, Serialize};

/// Placement metrics for one character.
///
/// `source` is the sub-rectangle inside the packed atlas. `x_offset` and
/// `y_offset` shift the quad relative to the pen when the glyph is placed,
/// and `x_advance` moves the pen afterwards. A zero-size `source` marks a
/// non-printing placeholder such as space or tab.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    pub codepoint: u32,
    pub source: ARect,
    pub x_offset: f32,
    pub y_offset: f32,
    pub x_advance: f32,
}

impl Glyph {
    pub fn new(codepoint: u32, source: ARect, x_offset: f32, y_offset: f32, x_advance: f32) -> Self {
        Self {
            codepoint,
            source,
            x_offset,
            y_offset,
            x_advance,
        }
    }

    /// Zero-size source rect, the table convention for whitespace
    /// placeholders that advance the pen without drawing.
    pub fn is_blank(&self) -> bool {
        self.source.is_empty()
    }
}

/// Sorted glyph collection with binary-search lookup, an optional fallback
/// glyph and the baseline-to-baseline line spacing.
pub struct GlyphTable {
    glyphs: Vec<Glyph>,
    // index into glyphs; stays valid because the vec never changes after new()
    fallback: Option<usize>,
    line_spacing: f32,
}

impl GlyphTable {
    /// Build a table from glyphs in any order. The input is stable-sorted by
    /// code point; when the same code point appears more than once, the first
    /// occurrence in the sorted input wins and the rest are dropped.
    pub fn new(mut glyphs: Vec<Glyph>, line_spacing: f32) -> Self {
        glyphs.sort_by_key(|g| g.codepoint);
        glyphs.dedup_by_key(|g| g.codepoint);
        Self {
            glyphs,
            fallback: None,
            line_spacing,
        }
    }

    /// Look up a code point. Misses resolve to the fallback glyph when one
    /// is set, otherwise the code point is unmapped.
    pub fn find(&self, codepoint: u32) -> FontResult<&Glyph> {
        match self.glyphs.binary_search_by_key(&codepoint, |g| g.codepoint) {
            Ok(i) => Ok(&self.glyphs[i]),
            Err(_) => self
                .fallback
                .map(|i| &self.glyphs[i])
                .ok_or(FontError::UnmappedCharacter(codepoint)),
        }
    }

    /// Exact containment only; the fallback glyph does not count.
    pub fn contains(&self, codepoint: u32) -> bool {
        self.glyphs
            .binary_search_by_key(&codepoint, |g| g.codepoint)
            .is_ok()
    }

    /// Record the glyph for `codepoint` as the fallback, or clear it with
    /// `None`. The code point must have an exact entry in the table.
    pub fn set_fallback(&mut self, codepoint: Option<u32>) -> FontResult<()> {
        match codepoint {
            Some(cp) => match self.glyphs.binary_search_by_key(&cp, |g| g.codepoint) {
                Ok(i) => {
                    self.fallback = Some(i);
                    Ok(())
                }
                Err(_) => Err(FontError::UnmappedCharacter(cp)),
            },
            None => {
                self.fallback = None;
                Ok(())
            }
        }
    }

    pub fn fallback_glyph(&self) -> Option<&Glyph> {
        self.fallback.map(|i| &self.glyphs[i])
    }

    pub fn fallback_codepoint(&self) -> Option<u32> {
        self.fallback_glyph().map(|g| g.codepoint)
    }

    pub fn line_spacing(&self) -> f32 {
        self.line_spacing
    }

    /// Negative spacing is legal and draws lines upwards; it is stored as
    /// given, never clamped.
    pub fn set_line_spacing(&mut self, spacing: f32) {
        debug_assert!(spacing.is_finite(), "line spacing must be finite");
        self.line_spacing = spacing;
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
