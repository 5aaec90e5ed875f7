// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Pen state machine walking code points against a glyph table.
//!
//! Exactly one walker serves measuring and drawing. Carriage returns are
//! dropped, line feeds reset the pen x and step y by the line spacing, and
//! blank glyphs advance the pen without emitting when whitespace is ignored.
//! The walk is strictly forward: no lookahead, no kerning, no wrapping.

use crate::font::glyph::{Glyph, GlyphTable};
use crate::font::FontResult;
use crate::util::{ARect, PointF32};

const CARRIAGE_RETURN: u32 = 0x0D;
const LINE_FEED: u32 = 0x0A;

/// Walk `codepoints`, invoking `action` once per emitted glyph with the pen
/// position shifted by the glyph offsets. Returns the advance extent: the
/// widest pen x reached on any line, and the final pen y plus one line
/// spacing.
pub(crate) fn for_each_glyph<F>(
    table: &GlyphTable,
    codepoints: &[u32],
    ignore_whitespace: bool,
    mut action: F,
) -> FontResult<PointF32>
where
    F: FnMut(&Glyph, PointF32),
{
    let mut pen = PointF32::zero();
    let mut max_x = 0.0f32;
    for &cp in codepoints {
        match cp {
            CARRIAGE_RETURN => {}
            LINE_FEED => {
                pen.x = 0.0;
                pen.y += table.line_spacing();
            }
            _ => {
                let glyph = table.find(cp)?;
                if !(ignore_whitespace && glyph.is_blank()) {
                    action(
                        glyph,
                        PointF32::new(pen.x + glyph.x_offset, pen.y + glyph.y_offset),
                    );
                }
                pen.x += glyph.x_advance;
                max_x = max_x.max(pen.x);
            }
        }
    }
    Ok(PointF32::new(max_x, pen.y + table.line_spacing()))
}

/// Advance extent of the text. Trailing whitespace counts because the pen
/// moved; empty text still spans one line of height.
pub(crate) fn measure_extent(
    table: &GlyphTable,
    codepoints: &[u32],
    ignore_whitespace: bool,
) -> FontResult<PointF32> {
    for_each_glyph(table, codepoints, ignore_whitespace, |_, _| {})
}

/// Tight integer bounds of the emitted quads, anchored at `position`.
/// Mins are floored and maxes ceiled so the rect always covers the f32
/// union. No emission gives a zero-size rect at the anchor.
pub(crate) fn measure_bounds(
    table: &GlyphTable,
    codepoints: &[u32],
    position: PointF32,
    ignore_whitespace: bool,
) -> FontResult<ARect> {
    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;
    let mut any = false;
    for_each_glyph(table, codepoints, ignore_whitespace, |glyph, pos| {
        any = true;
        let x0 = position.x + pos.x;
        let y0 = position.y + pos.y;
        min_x = min_x.min(x0);
        min_y = min_y.min(y0);
        max_x = max_x.max(x0 + glyph.source.w as f32);
        max_y = max_y.max(y0 + glyph.source.h as f32);
    })?;
    if !any {
        return Ok(ARect::new(position.x as i32, position.y as i32, 0, 0));
    }
    let left = min_x.floor() as i32;
    let top = min_y.floor() as i32;
    let right = max_x.ceil() as i32;
    let bottom = max_y.ceil() as i32;
    Ok(ARect::new(
        left,
        top,
        (right - left) as u32,
        (bottom - top) as u32,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontError;

    fn table() -> GlyphTable {
        GlyphTable::new(
            vec![
                Glyph::new(0x41, ARect::new(0, 0, 8, 16), 0.0, 0.0, 10.0),
                Glyph::new(0x42, ARect::new(8, 0, 8, 16), 0.0, 0.0, 12.0),
                Glyph::new(0x20, ARect::new(0, 0, 0, 0), 0.0, 0.0, 8.0),
                Glyph::new(0x09, ARect::new(0, 0, 0, 0), 0.0, 0.0, 40.0),
                Glyph::new(0x67, ARect::new(16, 0, 8, 12), 1.5, 4.0, 9.0),
            ],
            20.0,
        )
    }

    fn cps(s: &str) -> Vec<u32> {
        s.chars().map(|c| c as u32).collect()
    }

    #[test]
    fn test_extent_single_line() {
        let e = measure_extent(&table(), &cps("AB"), true).unwrap();
        assert_eq!((e.x, e.y), (22.0, 20.0));
    }

    #[test]
    fn test_extent_widest_line_wins() {
        let e = measure_extent(&table(), &cps("A\nB"), true).unwrap();
        assert_eq!((e.x, e.y), (12.0, 40.0));
        let e = measure_extent(&table(), &cps("AB\nA"), true).unwrap();
        assert_eq!((e.x, e.y), (22.0, 40.0));
    }

    #[test]
    fn test_extent_counts_lines() {
        let t = table();
        for (text, lines) in [("", 1.0f32), ("A", 1.0), ("A\nB", 2.0), ("A\n\nB", 3.0)] {
            let e = measure_extent(&t, &cps(text), true).unwrap();
            assert_eq!(e.y, lines * 20.0, "text {:?}", text);
        }
    }

    #[test]
    fn test_carriage_return_ignored() {
        let t = table();
        let a = measure_extent(&t, &cps("A\r\nB"), true).unwrap();
        let b = measure_extent(&t, &cps("A\nB"), true).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_extent_includes_trailing_whitespace() {
        let e = measure_extent(&table(), &cps("A "), true).unwrap();
        assert_eq!(e.x, 18.0);
    }

    #[test]
    fn test_bounds_exclude_trailing_whitespace() {
        let t = table();
        let r = measure_bounds(&t, &cps("A "), PointF32::zero(), true).unwrap();
        assert_eq!(r, ARect::new(0, 0, 8, 16));
    }

    #[test]
    fn test_bounds_anchored_at_position() {
        let t = table();
        let r = measure_bounds(&t, &cps("AB"), PointF32::new(5.0, 7.0), true).unwrap();
        assert_eq!(r, ARect::new(5, 7, 18, 16));
    }

    #[test]
    fn test_bounds_apply_glyph_offsets() {
        // 'g' sits at pen + (1.5, 4.0) with a 8x12 source
        let t = table();
        let r = measure_bounds(&t, &cps("g"), PointF32::zero(), true).unwrap();
        assert_eq!(r, ARect::new(1, 4, 9, 12));
    }

    #[test]
    fn test_bounds_empty_text() {
        let t = table();
        let r = measure_bounds(&t, &[], PointF32::new(3.0, 4.0), true).unwrap();
        assert_eq!(r, ARect::new(3, 4, 0, 0));
    }

    #[test]
    fn test_blank_glyphs_emit_when_not_ignored() {
        // the space placeholder at pen x=10 stretches the union to its
        // position even with zero size
        let t = table();
        let r = measure_bounds(&t, &cps("A "), PointF32::zero(), false).unwrap();
        assert_eq!(r, ARect::new(0, 0, 10, 16));
    }

    #[test]
    fn test_unmapped_propagates() {
        let t = table();
        let err = measure_extent(&t, &cps("AZ"), true).unwrap_err();
        assert!(matches!(err, FontError::UnmappedCharacter(0x5A)));
    }

    #[test]
    fn test_negative_line_spacing_walks_upwards() {
        let mut t = table();
        t.set_line_spacing(-5.0);
        let e = measure_extent(&t, &cps("A\nB"), true).unwrap();
        assert_eq!(e.y, -10.0);
    }
}
