use super::{Coverage, PixelBounds};
use crate::types::Point;

/// Axis-aligned rectangle with inclusive, normalized corners (`x1 <= x2`, `y1 <= y2`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rect {
    /// Build from two opposite corners in any order
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x1: a.x.min(b.x),
            y1: a.y.min(b.y),
            x2: a.x.max(b.x),
            y2: a.y.max(b.y),
        }
    }

    /// Distance between the left and right edges
    #[inline]
    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    /// Distance between the top and bottom edges
    #[inline]
    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    /// Grow (positive) or shrink (negative) every side by `amount`
    pub fn expand(&self, amount: i32) -> Rect {
        Rect::from_corners(
            Point::new(self.x1 - amount, self.y1 - amount),
            Point::new(self.x2 + amount, self.y2 + amount),
        )
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }

    pub fn bounds(&self) -> PixelBounds {
        PixelBounds::new(self.x1, self.y1, self.x2, self.y2)
    }
}

/// Solid rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilledRect(pub Rect);

impl FilledRect {
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self(Rect::from_corners(a, b))
    }
}

impl Coverage for FilledRect {
    fn bounds(&self) -> PixelBounds {
        self.0.bounds()
    }

    fn covers(&self, x: i32, y: i32) -> bool {
        self.0.contains(x, y)
    }
}

/// Rectangle outline with square corners; the stroke is centred on the edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectOutline {
    outer: Rect,
    rect: Rect,
    width: i32,
}

impl RectOutline {
    pub fn new(rect: Rect, width: i32) -> Self {
        let width = width.max(1);
        let outer = Rect {
            x1: rect.x1 - width / 2,
            y1: rect.y1 - width / 2,
            x2: rect.x2 + (width - 1) / 2,
            y2: rect.y2 + (width - 1) / 2,
        };
        Self { outer, rect, width }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    /// Strictly inside the inner edge of the stroke
    #[inline]
    fn in_hole(&self, x: i32, y: i32) -> bool {
        let inner_lo = (self.width - 1) / 2;
        let inner_hi = self.width / 2;
        x > self.rect.x1 + inner_lo
            && x < self.rect.x2 - inner_hi
            && y > self.rect.y1 + inner_lo
            && y < self.rect.y2 - inner_hi
    }
}

impl Coverage for RectOutline {
    fn bounds(&self) -> PixelBounds {
        self.outer.bounds()
    }

    fn covers(&self, x: i32, y: i32) -> bool {
        self.outer.contains(x, y) && !self.in_hole(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_normalizes() {
        let rect = Rect::from_corners(Point::new(10, 2), Point::new(3, 8));
        assert_eq!(rect, Rect { x1: 3, y1: 2, x2: 10, y2: 8 });
        assert_eq!(rect.width(), 7);
        assert_eq!(rect.height(), 6);
    }

    #[test]
    fn test_expand() {
        let rect = Rect::from_corners(Point::new(10, 10), Point::new(20, 20));
        assert_eq!(rect.expand(2), Rect { x1: 8, y1: 8, x2: 22, y2: 22 });
        assert_eq!(rect.expand(-3), Rect { x1: 13, y1: 13, x2: 17, y2: 17 });
    }

    #[test]
    fn test_hairline_outline_is_border_only() {
        let outline = RectOutline::new(Rect::from_corners(Point::new(1, 1), Point::new(4, 4)), 1);
        assert!(outline.covers(1, 1));
        assert!(outline.covers(4, 2));
        assert!(outline.covers(2, 4));
        assert!(!outline.covers(2, 2));
        assert!(!outline.covers(0, 0));
        assert!(!outline.covers(5, 5));
    }

    #[test]
    fn test_wide_outline_pixel_count() {
        // Edges at 0 and 9 with width 2 span -1..=0 and 8..=9, leaving a 1..=7 hole
        let outline = RectOutline::new(Rect::from_corners(Point::new(0, 0), Point::new(9, 9)), 2);
        let bounds = outline.bounds();
        let mut count = 0;
        for y in bounds.min_y..=bounds.max_y {
            for x in bounds.min_x..=bounds.max_x {
                if outline.covers(x, y) {
                    count += 1;
                }
            }
        }
        assert_eq!(bounds, PixelBounds::new(-1, -1, 9, 9));
        assert_eq!(count, 11 * 11 - 7 * 7);
    }
}
