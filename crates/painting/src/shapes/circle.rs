use super::{Coverage, PixelBounds};
use crate::types::Point;

/// Solid circle: pixels within `radius` of `center`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disc {
    pub center: Point,
    pub radius: i32,
}

impl Disc {
    pub fn new(center: Point, radius: i32) -> Self {
        Self {
            center,
            radius: radius.max(0),
        }
    }
}

impl Coverage for Disc {
    fn bounds(&self) -> PixelBounds {
        let Point { x, y } = self.center;
        PixelBounds::new(x - self.radius, y - self.radius, x + self.radius, y + self.radius)
    }

    fn covers(&self, x: i32, y: i32) -> bool {
        let dx = (x - self.center.x) as i64;
        let dy = (y - self.center.y) as i64;
        let r = self.radius as i64;
        dx * dx + dy * dy <= r * r
    }
}

/// Which corner of a rounded rectangle an arc belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// Whether an offset from the arc centre falls in this quadrant (axes included)
    #[inline]
    fn contains(self, dx: i32, dy: i32) -> bool {
        match self {
            Quadrant::TopLeft => dx <= 0 && dy <= 0,
            Quadrant::TopRight => dx >= 0 && dy <= 0,
            Quadrant::BottomLeft => dx <= 0 && dy >= 0,
            Quadrant::BottomRight => dx >= 0 && dy >= 0,
        }
    }
}

/// 90° arc of a circle, stroked with the given width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuarterArc {
    pub center: Point,
    pub radius: i32,
    pub width: i32,
    pub quadrant: Quadrant,
}

impl QuarterArc {
    pub fn new(center: Point, radius: i32, width: i32, quadrant: Quadrant) -> Self {
        Self {
            center,
            radius: radius.max(0),
            width: width.max(1),
            quadrant,
        }
    }
}

impl Coverage for QuarterArc {
    fn bounds(&self) -> PixelBounds {
        let reach = self.radius + self.width;
        let Point { x, y } = self.center;
        let (min_x, max_x) = match self.quadrant {
            Quadrant::TopLeft | Quadrant::BottomLeft => (x - reach, x),
            Quadrant::TopRight | Quadrant::BottomRight => (x, x + reach),
        };
        let (min_y, max_y) = match self.quadrant {
            Quadrant::TopLeft | Quadrant::TopRight => (y - reach, y),
            Quadrant::BottomLeft | Quadrant::BottomRight => (y, y + reach),
        };
        PixelBounds::new(min_x, min_y, max_x, max_y)
    }

    fn covers(&self, x: i32, y: i32) -> bool {
        let dx = x - self.center.x;
        let dy = y - self.center.y;
        if !self.quadrant.contains(dx, dy) {
            return false;
        }

        // Straight edges of width w centred on c cover c - w/2 ..= c + (w-1)/2,
        // i.e. a band of half-width (w-1)/2 around c - 0.5 for even w. The arc
        // uses the same shifted centre so it meets every edge pixel for pixel.
        let shift = if self.width % 2 == 0 { 0.5 } else { 0.0 };
        let fx = dx as f64 + shift;
        let fy = dy as f64 + shift;
        let half = (self.width - 1) as f64 / 2.0;
        let inner = (self.radius as f64 - half - 0.5).max(0.0);
        let outer = self.radius as f64 + half + 0.5;
        let dist_sq = fx * fx + fy * fy;
        dist_sq >= inner * inner && dist_sq < outer * outer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disc_bounds_and_extremes() {
        let disc = Disc::new(Point::new(10, 10), 4);
        assert_eq!(disc.bounds(), PixelBounds::new(6, 6, 14, 14));
        assert!(disc.covers(10, 6));
        assert!(disc.covers(14, 10));
        assert!(!disc.covers(14, 14));
        assert!(!disc.covers(10, 15));
    }

    #[test]
    fn test_zero_disc_is_single_pixel() {
        let disc = Disc::new(Point::new(3, 3), -2);
        assert_eq!(disc.radius, 0);
        assert!(disc.covers(3, 3));
        assert!(!disc.covers(3, 4));
    }

    #[test]
    fn test_arc_axis_pixels_match_edge_span() {
        // Top-left arc of radius 10, width 3: along the vertical axis above the
        // centre it must cover radius-1 ..= radius+1, like a centred edge of width 3.
        let arc = QuarterArc::new(Point::new(20, 20), 10, 3, Quadrant::TopLeft);
        assert!(!arc.covers(20, 20 - 8));
        assert!(arc.covers(20, 20 - 9));
        assert!(arc.covers(20, 20 - 10));
        assert!(arc.covers(20, 20 - 11));
        assert!(!arc.covers(20, 20 - 12));
    }

    #[test]
    fn test_arc_even_width_leans_like_edges() {
        let tl = QuarterArc::new(Point::new(20, 20), 10, 2, Quadrant::TopLeft);
        // Top edge at y=10, width 2 spans 9..=10
        assert!(tl.covers(20, 9));
        assert!(tl.covers(20, 10));
        assert!(!tl.covers(20, 11));

        let br = QuarterArc::new(Point::new(20, 20), 10, 2, Quadrant::BottomRight);
        // Bottom edge at y=30, width 2 spans 29..=30
        assert!(br.covers(20, 29));
        assert!(br.covers(20, 30));
        assert!(!br.covers(20, 31));
    }

    #[test]
    fn test_arc_even_width_on_right_and_bottom_edges() {
        let tr = QuarterArc::new(Point::new(20, 20), 10, 2, Quadrant::TopRight);
        // Right edge at x=30, width 2 spans 29..=30
        assert!(!tr.covers(28, 20));
        assert!(tr.covers(29, 20));
        assert!(tr.covers(30, 20));
        assert!(!tr.covers(31, 20));

        let bl = QuarterArc::new(Point::new(20, 20), 10, 2, Quadrant::BottomLeft);
        // Bottom edge at y=30, width 2 spans 29..=30
        assert!(!bl.covers(20, 28));
        assert!(bl.covers(20, 29));
        assert!(bl.covers(20, 30));
        assert!(!bl.covers(20, 31));
    }

    #[test]
    fn test_arc_respects_quadrant() {
        let arc = QuarterArc::new(Point::new(20, 20), 10, 1, Quadrant::TopRight);
        assert!(arc.covers(30, 20));
        assert!(arc.covers(20, 10));
        assert!(!arc.covers(10, 20));
        assert!(!arc.covers(20, 30));
        assert!(arc.bounds().min_x == 20 && arc.bounds().max_y == 20);
    }
}
