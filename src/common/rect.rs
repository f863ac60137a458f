use std::fmt;

/// Axis-aligned rectangle in pixel units.
///
/// Fields are signed so callers can describe regions that start before the
/// frame origin; [`crate::analysis::correct_rect`] pulls them back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn full(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// The empty rectangle is the "whole frame" sentinel.
    pub fn is_empty(&self) -> bool {
        self.width == 0 && self.height == 0
    }

    /// Exclusive right edge, widened so extreme sizes cannot overflow.
    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Unsigned `(x, y, width, height)` suitable for cropping, or `None` when
    /// the rectangle is degenerate or pokes outside a `frame_width` x
    /// `frame_height` frame.
    pub fn to_crop_bounds(
        &self,
        frame_width: i32,
        frame_height: i32,
    ) -> Option<(u32, u32, u32, u32)> {
        if self.x < 0 || self.y < 0 || self.width <= 0 || self.height <= 0 {
            return None;
        }
        if !Rect::full(frame_width, frame_height).contains(self) {
            return None;
        }
        Some((
            self.x as u32,
            self.y as u32,
            self.width as u32,
            self.height as u32,
        ))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ {}, {}, {}, {} ]",
            self.x, self.y, self.width, self.height
        )
    }
}
