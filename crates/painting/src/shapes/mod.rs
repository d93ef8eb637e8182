//! Coverage shapes and the drawing entry points built on them
//!
//! Every primitive is expressed as a [`Coverage`]: a bounding box plus a
//! per-pixel predicate. Composite outlines (edges + corner arcs) and fills
//! (bands + corner discs) are unions of parts, and [`Canvas::fill_coverage`]
//! blends each covered pixel exactly once, so overlapping parts never
//! double-blend a translucent color.
//!
//! Geometry is integer pixel coordinates with inclusive corners. A stroke of
//! width `w` centred on coordinate `c` covers `c - w/2 ..= c + (w-1)/2`.

mod circle;
mod line;
mod rect;
mod rounded;

use tracing::trace;

use crate::surface::Canvas;
use crate::types::{Color, Point};

pub use circle::{Disc, Quadrant, QuarterArc};
pub use line::Segment;
pub use rect::{FilledRect, Rect, RectOutline};
pub use rounded::{RoundedFill, RoundedOutline, RoundedRect};

/// Inclusive pixel bounding box; may extend past the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl PixelBounds {
    pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Clamp to a `width` x `height` canvas
    /// Returns None if nothing remains on the canvas
    pub fn clip(&self, width: u32, height: u32) -> Option<PixelBounds> {
        if width == 0 || height == 0 {
            return None;
        }
        let clipped = PixelBounds {
            min_x: self.min_x.max(0),
            min_y: self.min_y.max(0),
            max_x: self.max_x.min(width as i32 - 1),
            max_y: self.max_y.min(height as i32 - 1),
        };
        (!clipped.is_empty()).then_some(clipped)
    }
}

/// A set of pixels described by a bounding box and a membership test
pub trait Coverage {
    /// Box outside of which `covers` is always false
    fn bounds(&self) -> PixelBounds;

    /// Whether pixel `(x, y)` belongs to the shape
    fn covers(&self, x: i32, y: i32) -> bool;
}

/// Pixels a stroke of `width` centred on `center` spans along its normal
#[inline]
pub(crate) fn stroke_span(center: i32, width: i32) -> (i32, i32) {
    let width = width.max(1);
    (center - width / 2, center + (width - 1) / 2)
}

impl Canvas {
    /// Draw a straight line of the given stroke width
    pub fn draw_line(&mut self, from: Point, to: Point, color: Color, width: i32) {
        self.fill_coverage(&Segment::new(from, to, width), color);
    }

    /// Fill the rectangle spanned by two opposite corners (inclusive)
    pub fn fill_rect(&mut self, a: Point, b: Point, color: Color) {
        self.fill_coverage(&FilledRect::from_corners(a, b), color);
    }

    /// Stroke the outline of the rectangle spanned by two opposite corners
    pub fn draw_rect(&mut self, a: Point, b: Point, color: Color, width: i32) {
        self.fill_coverage(&RectOutline::new(Rect::from_corners(a, b), width), color);
    }

    /// Stroke a rounded rectangle outline.
    ///
    /// Corners may be passed in any order. The radius is clamped to half the
    /// shorter side; a radius that clamps to zero or below draws a plain
    /// rectangle outline instead.
    pub fn draw_rounded_rect(&mut self, a: Point, b: Point, radius: i32, color: Color, width: i32) {
        let shape = RoundedRect::new(a, b, radius);
        trace!(
            "draw_rounded_rect: {:?} radius={} width={} color={:?}",
            shape.rect(),
            shape.radius(),
            width,
            color
        );
        self.fill_coverage(&shape.outline(width), color);
    }

    /// Fill a rounded rectangle, compositing `color` (with its alpha) over the canvas.
    ///
    /// Same corner normalization and radius clamping as [`Canvas::draw_rounded_rect`];
    /// degenerate radii fill a plain rectangle.
    pub fn fill_rounded_rect(&mut self, a: Point, b: Point, radius: i32, color: Color) {
        let shape = RoundedRect::new(a, b, radius);
        trace!(
            "fill_rounded_rect: {:?} radius={} color={:?}",
            shape.rect(),
            shape.radius(),
            color
        );
        self.fill_coverage(&shape.fill(), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_span_widths() {
        assert_eq!(stroke_span(10, 1), (10, 10));
        assert_eq!(stroke_span(10, 2), (9, 10));
        assert_eq!(stroke_span(10, 3), (9, 11));
        assert_eq!(stroke_span(10, 8), (6, 13));
        // Non-positive widths still draw a hairline
        assert_eq!(stroke_span(10, 0), (10, 10));
    }

    #[test]
    fn test_bounds_clip() {
        let bounds = PixelBounds::new(-3, 2, 20, 5);
        assert_eq!(bounds.clip(10, 10), Some(PixelBounds::new(0, 2, 9, 5)));
        assert_eq!(PixelBounds::new(12, 0, 15, 3).clip(10, 10), None);
        assert_eq!(bounds.clip(0, 10), None);
    }
}
