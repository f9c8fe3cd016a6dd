//! Pixel Rectangles
//!
//! Integer axis-aligned boxes used for sprite bounds and hitboxes.
//! Center accessors use floor division so that setting a center and
//! reading it back is stable, matching how sprites are placed on screen.

use serde::{Serialize, Deserialize};

use super::vec2::Vec2;

/// Axis-aligned rectangle in whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width (non-negative)
    pub w: i32,
    /// Height (non-negative)
    pub h: i32,
}

impl Rect {
    /// Create from top-left corner and size.
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a rect of the given size centered on a (rounded) point.
    pub fn from_center(center: Vec2, w: i32, h: i32) -> Self {
        let mut rect = Self::new(0, 0, w, h);
        rect.set_center(center.x.round() as i32, center.y.round() as i32);
        rect
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[inline]
    pub fn centerx(&self) -> i32 {
        self.x + self.w / 2
    }

    #[inline]
    pub fn centery(&self) -> i32 {
        self.y + self.h / 2
    }

    /// Center as a vector.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.centerx() as f32, self.centery() as f32)
    }

    #[inline]
    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }

    #[inline]
    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.w;
    }

    #[inline]
    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    #[inline]
    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.h;
    }

    #[inline]
    pub fn set_centerx(&mut self, cx: i32) {
        self.x = cx - self.w / 2;
    }

    #[inline]
    pub fn set_centery(&mut self, cy: i32) {
        self.y = cy - self.h / 2;
    }

    #[inline]
    pub fn set_center(&mut self, cx: i32, cy: i32) {
        self.set_centerx(cx);
        self.set_centery(cy);
    }

    /// Grow (or shrink, with negative deltas) around the same center.
    ///
    /// Sizes are clamped at zero.
    pub fn inflate(&self, dw: i32, dh: i32) -> Self {
        let w = (self.w + dw).max(0);
        let h = (self.h + dh).max(0);
        let mut rect = Self::new(0, 0, w, h);
        rect.set_center(self.centerx(), self.centery());
        rect
    }

    /// Strict overlap test. Rects that only share an edge do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.w > 0
            && self.h > 0
            && other.w > 0
            && other.h > 0
            && self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
