// filepath: src/layout.rs
//! Rectangle math used to place text and icons.

use serde::{Deserialize, Serialize};

/// Pixel rectangle, origin at the top-left, y growing downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at the origin
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Same origin, different size
    pub const fn with_size(self, width: u32, height: u32) -> Self {
        Self::new(self.x, self.y, width, height)
    }

    /// One past the last column, clamped to `i32::MAX`
    pub fn right(&self) -> i32 {
        clamp_i32(i64::from(self.x) + i64::from(self.width))
    }

    /// One past the last row, clamped to `i32::MAX`
    pub fn bottom(&self) -> i32 {
        clamp_i32(i64::from(self.y) + i64::from(self.height))
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && x < self.right() && y < self.bottom()
    }

    /// Place a `width` x `height` child in the middle of this rectangle.
    ///
    /// Halves are taken with integer division on both sides, so an odd
    /// remainder leans toward the top-left. A child larger than `self`
    /// overhangs it evenly and may start at a negative offset. Positions
    /// past the `i32` range are clamped to it.
    pub fn centered(&self, width: u32, height: u32) -> Rect {
        let x = clamp_i32(i64::from(self.x) + i64::from(self.width / 2) - i64::from(width / 2));
        let y = clamp_i32(i64::from(self.y) + i64::from(self.height / 2) - i64::from(height / 2));
        Rect::new(x, y, width, height)
    }

    /// Overlap of two rectangles, `None` when they do not touch
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= x || bottom <= y {
            return None;
        }
        let width = (i64::from(right) - i64::from(x)) as u32;
        let height = (i64::from(bottom) - i64::from(y)) as u32;
        Some(Rect::new(x, y, width, height))
    }
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
