// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Utilities shared across the crate: float points, the integer pixel rect
//! used for atlas sub-rectangles and measured bounds, and a small 2d affine
//! transform applied when emitting quads.

use keyframe_derive::CanTween;
use serde::{Deserialize, Serialize};

#[derive(CanTween, Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF32 {
    pub x: f32,
    pub y: f32,
}

impl PointF32 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// Pixel rectangle with a signed position and an unsigned size.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ARect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl ARect {
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// True when the rect covers no pixels on at least one axis.
    pub fn is_empty(self) -> bool {
        self.w == 0 || self.h == 0
    }

    pub fn right(self) -> i32 {
        self.x + self.w as i32
    }

    pub fn bottom(self) -> i32 {
        self.y + self.h as i32
    }
}

/// 2D transformation matrix.
///
/// ```text
/// |m00  m01  m20|   Translation: (m20, m21)
/// |m10  m11  m21|   Scale:       (m00, m11)
/// | 0    0    1 |   Rotation:    cos/sin in m00,m01,m10,m11
/// ```
///
/// Each mutating call composes on the inside: the most recently applied
/// operation acts on points first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    pub m00: f32,
    pub m01: f32,
    pub m10: f32,
    pub m11: f32,
    pub m20: f32,
    pub m21: f32,
}

impl Transform2D {
    /// Create identity transform
    pub fn new() -> Self {
        Self {
            m00: 1.0,
            m01: 0.0,
            m10: 0.0,
            m11: 1.0,
            m20: 0.0,
            m21: 0.0,
        }
    }

    /// Apply scaling transformation
    pub fn scale(&mut self, x: f32, y: f32) {
        self.m00 *= x;
        self.m10 *= y;
        self.m01 *= x;
        self.m11 *= y;
    }

    /// Apply translation transformation
    pub fn translate(&mut self, x: f32, y: f32) {
        self.m20 += self.m00 * x + self.m10 * y;
        self.m21 += self.m01 * x + self.m11 * y;
    }

    /// Apply rotation (angle in radians)
    pub fn rotate(&mut self, angle: f32) {
        let cos_a = angle.cos();
        let sin_a = angle.sin();

        let m00 = self.m00;
        let m01 = self.m01;
        let m10 = self.m10;
        let m11 = self.m11;

        self.m00 = m00 * cos_a - m10 * sin_a;
        self.m10 = m00 * sin_a + m10 * cos_a;
        self.m01 = m01 * cos_a - m11 * sin_a;
        self.m11 = m01 * sin_a + m11 * cos_a;
    }

    /// Transform a point
    pub fn apply(&self, p: PointF32) -> PointF32 {
        PointF32 {
            x: self.m00 * p.x + self.m10 * p.y + self.m20,
            y: self.m01 * p.x + self.m11 * p.y + self.m21,
        }
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::new()
    }
}
