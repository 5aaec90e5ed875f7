// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! pixel_font renders text with pre-baked sprite fonts: a packed texture atlas
//! holds one sub-rectangle per character, and a sorted glyph table maps Unicode
//! code points to those rectangles plus placement metrics.
//!
//! The crate is the layout half of the pipeline. Text (wide units or UTF-8)
//! decodes to code points, and a pen cursor walks them with whitespace and
//! line-break handling. The walk feeds either a measurement pass or quad
//! emission into an external batched sprite renderer behind the SpriteBatch
//! trait. Building the atlas image, uploading textures and rasterizing glyphs
//! belong to other layers of the engine.
//!
//! Measuring and drawing run the exact same walk, so a measured box always
//! matches what gets drawn.

/// pre-parsed font asset payloads, bincode or json
pub mod asset;

/// glyph table, text decoding, layout walking, measuring and drawing
pub mod font;

/// log
pub mod log;

/// points, rects and the 2d transform used when emitting quads
pub mod util;

pub use asset::FontAtlasData;
pub use font::{
    decode::TextInput,
    draw::{Color, DrawParams, QuadCommand, RenderEffects, SpriteBatch},
    glyph::{Glyph, GlyphTable},
    FontError, FontResult, SpriteFont,
};
pub use util::{ARect, PointF32};
