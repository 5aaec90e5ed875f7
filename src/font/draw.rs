// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Draw parameters, quad commands and the external batch interface.
//!
//! Drawing always ignores whitespace placeholders; the pen still advances
//! past them but no quad goes out. Quads are submitted in code point order,
//! and consumers must preserve that order when alpha blending.

use crate::font::glyph::GlyphTable;
use crate::font::{layout, FontResult};
use crate::util::{ARect, PointF32, Transform2D};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Mirror flags applied to every glyph quad of a draw call.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct RenderEffects: u8 {
        const FLIP_H = 0b01;
        const FLIP_V = 0b10;
    }
}

/// Straight RGBA color in the 0.0 to 1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// One textured quad handed to the batch renderer.
///
/// `position` is the transformed top-left corner of the quad. The renderer
/// sizes the quad from `source` times `scale`, rotates it by `rotation`
/// around `position`, and mirrors texels per `effects`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadCommand {
    pub texture: usize,
    pub source: ARect,
    pub position: PointF32,
    pub scale: PointF32,
    pub rotation: f32,
    pub color: Color,
    pub effects: RenderEffects,
    pub depth: f32,
}

/// Batched sprite renderer seam. Submission order is draw order.
pub trait SpriteBatch {
    fn draw(&mut self, quad: &QuadCommand);
}

/// Caller transform and paint state for one text draw call.
///
/// `origin` is the point in glyph-space that rotation and scaling pivot
/// around; it lands on `position` on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawParams {
    pub position: PointF32,
    pub color: Color,
    pub rotation: f32,
    pub origin: PointF32,
    pub scale: PointF32,
    pub effects: RenderEffects,
    pub depth: f32,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            position: PointF32::zero(),
            color: Color::white(),
            rotation: 0.0,
            origin: PointF32::zero(),
            scale: PointF32::new(1.0, 1.0),
            effects: RenderEffects::empty(),
            depth: 0.0,
        }
    }
}

impl DrawParams {
    pub fn position(mut self, x: f32, y: f32) -> Self {
        self.position = PointF32::new(x, y);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Rotation in radians around the origin point.
    pub fn rotation(mut self, radians: f32) -> Self {
        self.rotation = radians;
        self
    }

    pub fn origin(mut self, x: f32, y: f32) -> Self {
        self.origin = PointF32::new(x, y);
        self
    }

    /// Uniform scale on both axes.
    pub fn scale(mut self, s: f32) -> Self {
        self.scale = PointF32::new(s, s);
        self
    }

    pub fn scale_xy(mut self, sx: f32, sy: f32) -> Self {
        self.scale = PointF32::new(sx, sy);
        self
    }

    pub fn effects(mut self, effects: RenderEffects) -> Self {
        self.effects = effects;
        self
    }

    pub fn depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }
}

/// Walk the code points and emit one quad per visible glyph.
pub(crate) fn draw_glyphs(
    batch: &mut dyn SpriteBatch,
    texture: usize,
    table: &GlyphTable,
    codepoints: &[u32],
    params: &DrawParams,
) -> FontResult<()> {
    // Flips mirror glyphs inside the measured text block, so the extent is
    // needed before the first quad goes out.
    let block = if params.effects.is_empty() {
        None
    } else {
        Some(layout::for_each_glyph(table, codepoints, true, |_, _| {})?)
    };

    let mut t = Transform2D::new();
    t.translate(params.position.x, params.position.y);
    t.rotate(params.rotation);
    t.scale(params.scale.x, params.scale.y);
    t.translate(-params.origin.x, -params.origin.y);

    layout::for_each_glyph(table, codepoints, true, |glyph, pos| {
        let mut local = pos;
        if let Some(block) = block {
            if params.effects.contains(RenderEffects::FLIP_H) {
                local.x = block.x - pos.x - glyph.source.w as f32;
            }
            if params.effects.contains(RenderEffects::FLIP_V) {
                local.y = block.y - pos.y - glyph.source.h as f32;
            }
        }
        batch.draw(&QuadCommand {
            texture,
            source: glyph.source,
            position: t.apply(local),
            scale: params.scale,
            rotation: params.rotation,
            color: params.color,
            effects: params.effects,
            depth: params.depth,
        });
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::glyph::Glyph;

    struct RecordBatch {
        quads: Vec<QuadCommand>,
    }

    impl SpriteBatch for RecordBatch {
        fn draw(&mut self, quad: &QuadCommand) {
            self.quads.push(*quad);
        }
    }

    fn table() -> GlyphTable {
        GlyphTable::new(
            vec![
                Glyph::new(0x41, ARect::new(0, 0, 8, 16), 0.0, 0.0, 10.0),
                Glyph::new(0x42, ARect::new(8, 0, 8, 16), 0.0, 0.0, 12.0),
                Glyph::new(0x20, ARect::new(0, 0, 0, 0), 0.0, 0.0, 8.0),
            ],
            20.0,
        )
    }

    fn cps(s: &str) -> Vec<u32> {
        s.chars().map(|c| c as u32).collect()
    }

    #[test]
    fn test_quads_in_codepoint_order() {
        let mut batch = RecordBatch { quads: vec![] };
        draw_glyphs(&mut batch, 3, &table(), &cps("AB"), &DrawParams::default()).unwrap();
        assert_eq!(batch.quads.len(), 2);
        assert_eq!(batch.quads[0].source, ARect::new(0, 0, 8, 16));
        assert_eq!(batch.quads[1].source, ARect::new(8, 0, 8, 16));
        assert_eq!(batch.quads[1].position, PointF32::new(10.0, 0.0));
        assert_eq!(batch.quads[0].texture, 3);
    }

    #[test]
    fn test_whitespace_emits_nothing() {
        let mut batch = RecordBatch { quads: vec![] };
        draw_glyphs(&mut batch, 0, &table(), &cps("A B"), &DrawParams::default()).unwrap();
        assert_eq!(batch.quads.len(), 2);
        assert_eq!(batch.quads[1].position.x, 18.0);
    }

    #[test]
    fn test_position_and_scale() {
        let mut batch = RecordBatch { quads: vec![] };
        let params = DrawParams::default().position(100.0, 50.0).scale(2.0);
        draw_glyphs(&mut batch, 0, &table(), &cps("AB"), &params).unwrap();
        assert_eq!(batch.quads[0].position, PointF32::new(100.0, 50.0));
        assert_eq!(batch.quads[1].position, PointF32::new(120.0, 50.0));
        assert_eq!(batch.quads[1].scale, PointF32::new(2.0, 2.0));
    }

    #[test]
    fn test_origin_shifts_against_position() {
        let mut batch = RecordBatch { quads: vec![] };
        let params = DrawParams::default().position(30.0, 0.0).origin(5.0, 7.0);
        draw_glyphs(&mut batch, 0, &table(), &cps("A"), &params).unwrap();
        assert_eq!(batch.quads[0].position, PointF32::new(25.0, -7.0));
    }

    #[test]
    fn test_flip_h_mirrors_block() {
        // extent of "AB" is 22 wide; A (8 wide at 0) lands at 14, B (8 wide
        // at 10) lands at 4, while submission order stays A then B
        let mut batch = RecordBatch { quads: vec![] };
        let params = DrawParams::default().effects(RenderEffects::FLIP_H);
        draw_glyphs(&mut batch, 0, &table(), &cps("AB"), &params).unwrap();
        assert_eq!(batch.quads[0].position.x, 14.0);
        assert_eq!(batch.quads[0].source, ARect::new(0, 0, 8, 16));
        assert_eq!(batch.quads[1].position.x, 4.0);
        assert_eq!(batch.quads[0].effects, RenderEffects::FLIP_H);
    }

    #[test]
    fn test_flip_v_mirrors_lines() {
        // two lines, extent y = 40; line 0 glyphs land at 40 - 0 - 16 = 24
        let mut batch = RecordBatch { quads: vec![] };
        let params = DrawParams::default().effects(RenderEffects::FLIP_V);
        draw_glyphs(&mut batch, 0, &table(), &cps("A\nB"), &params).unwrap();
        assert_eq!(batch.quads[0].position.y, 24.0);
        assert_eq!(batch.quads[1].position.y, 4.0);
    }

    #[test]
    fn test_color_and_depth_pass_through() {
        let mut batch = RecordBatch { quads: vec![] };
        let params = DrawParams::default()
            .color(Color::new(1.0, 0.5, 0.0, 1.0))
            .depth(0.25);
        draw_glyphs(&mut batch, 0, &table(), &cps("A"), &params).unwrap();
        assert_eq!(batch.quads[0].color.to_array(), [1.0, 0.5, 0.0, 1.0]);
        assert_eq!(batch.quads[0].depth, 0.25);
    }
}
