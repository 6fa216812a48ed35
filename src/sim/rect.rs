//! Axis-aligned rectangles and the overlap test used for crashes
//!
//! Screen space: x grows right, y grows down, `(x, y)` is the top-left corner.

use glam::Vec2;

/// An axis-aligned rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min() + self.max()) * 0.5
    }

    /// Shrink by `amount` on every side
    pub fn inset(&self, amount: f32) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            self.w - 2.0 * amount,
            self.h - 2.0 * amount,
        )
    }

    /// Interiors intersect. Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.right() <= other.x
            || other.right() <= self.x
            || self.bottom() <= other.y
            || other.bottom() <= self.y)
    }

    /// Keep the left edge within `[min_x, max_x]`; `min_x` wins if the range is empty
    pub fn clamp_x(&mut self, min_x: f32, max_x: f32) {
        self.x = min_x.max(self.x.min(max_x));
    }
}
