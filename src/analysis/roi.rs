use tracing::{error, warn};

use crate::common::{Frame, Rect};

/// Clamps `rect` into the bounds of `frame`.
///
/// An empty `rect` selects the whole frame. An empty `frame` leaves `rect`
/// untouched. Otherwise the adjustments run in a fixed order, each one seeing
/// the value left by the previous step: an origin past the far edge is pulled
/// back by the rectangle's size, a negative origin is reset to zero, and
/// finally the size is trimmed to the frame.
pub fn correct_rect(rect: Rect, frame: &Frame) -> Rect {
    if frame.is_empty() {
        error!(function = "correct_rect", "image is empty");
        return rect;
    }
    if rect.is_empty() {
        return frame.bounds();
    }

    let (cols, rows) = (frame.width(), frame.height());
    let mut res = rect;

    if cols < res.x {
        error!(cols, rows, roi = %res, "roi is out of range");
        res.x = cols.saturating_sub(res.width);
    }
    if rows < res.y {
        error!(cols, rows, roi = %res, "roi is out of range");
        res.y = rows.saturating_sub(res.height);
    }

    if res.x < 0 {
        warn!(cols, rows, roi = %res, "roi is out of range");
        res.x = 0;
    }
    if res.y < 0 {
        warn!(cols, rows, roi = %res, "roi is out of range");
        res.y = 0;
    }
    if (cols as i64) < res.right() {
        warn!(cols, rows, roi = %res, "roi is out of range");
        res.width = cols - res.x;
    }
    if (rows as i64) < res.bottom() {
        warn!(cols, rows, roi = %res, "roi is out of range");
        res.height = rows - res.y;
    }
    res
}
