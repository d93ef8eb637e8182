use super::{stroke_span, Coverage, PixelBounds};
use crate::types::Point;

/// Thick straight line between two inclusive endpoints, without caps.
///
/// Horizontal and vertical segments (all the icon uses) are exact pixel
/// bands; any other direction falls back to a distance test against the
/// segment's centre line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub width: i32,
}

impl Segment {
    pub fn new(from: Point, to: Point, width: i32) -> Self {
        Self {
            from,
            to,
            width: width.max(1),
        }
    }

    #[inline]
    fn is_horizontal(&self) -> bool {
        self.from.y == self.to.y
    }

    #[inline]
    fn is_vertical(&self) -> bool {
        self.from.x == self.to.x
    }

    fn covers_diagonal(&self, x: i32, y: i32) -> bool {
        let (ax, ay) = (self.from.x as f64, self.from.y as f64);
        let (vx, vy) = (self.to.x as f64 - ax, self.to.y as f64 - ay);
        let (wx, wy) = (x as f64 - ax, y as f64 - ay);
        let length_sq = vx * vx + vy * vy;

        let t = (vx * wx + vy * wy) / length_sq;
        if !(0.0..=1.0).contains(&t) {
            return false;
        }

        let (dx, dy) = (wx - vx * t, wy - vy * t);
        let half = self.width as f64 / 2.0;
        dx * dx + dy * dy <= half * half
    }
}

impl Coverage for Segment {
    fn bounds(&self) -> PixelBounds {
        let (lo_x, hi_x) = (self.from.x.min(self.to.x), self.from.x.max(self.to.x));
        let (lo_y, hi_y) = (self.from.y.min(self.to.y), self.from.y.max(self.to.y));

        if self.is_vertical() {
            let (x1, x2) = stroke_span(self.from.x, self.width);
            return PixelBounds::new(x1, lo_y, x2, hi_y);
        }
        if self.is_horizontal() {
            let (y1, y2) = stroke_span(self.from.y, self.width);
            return PixelBounds::new(lo_x, y1, hi_x, y2);
        }

        let pad = self.width / 2 + 1;
        PixelBounds::new(lo_x - pad, lo_y - pad, hi_x + pad, hi_y + pad)
    }

    fn covers(&self, x: i32, y: i32) -> bool {
        if self.is_vertical() || self.is_horizontal() {
            let bounds = self.bounds();
            return x >= bounds.min_x && x <= bounds.max_x && y >= bounds.min_y && y <= bounds.max_y;
        }
        self.covers_diagonal(x, y)
    }
}
