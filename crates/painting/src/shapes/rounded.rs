use super::{Coverage, Disc, FilledRect, PixelBounds, Quadrant, QuarterArc, Rect, RectOutline, Segment};
use crate::types::Point;

/// Rectangle with quarter-circle corners.
///
/// Construction normalizes the corners and clamps the radius to half the
/// shorter side, so every `RoundedRect` is geometrically valid. A radius that
/// ends up at zero or below marks the shape as degenerate: its outline and
/// fill are plain rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundedRect {
    rect: Rect,
    radius: i32,
}

impl RoundedRect {
    pub fn new(a: Point, b: Point, radius: i32) -> Self {
        let rect = Rect::from_corners(a, b);
        let radius = radius.min(Self::max_radius(&rect));
        Self { rect, radius }
    }

    /// Largest radius that fits `rect`
    pub fn max_radius(rect: &Rect) -> i32 {
        (rect.width() / 2).min(rect.height() / 2)
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Effective (clamped) radius, zero when degenerate
    pub fn radius(&self) -> i32 {
        self.radius.max(0)
    }

    pub fn is_degenerate(&self) -> bool {
        self.radius <= 0
    }

    /// Arc centres in [`Quadrant::ALL`] order
    fn corner_centers(&self) -> [Point; 4] {
        let Rect { x1, y1, x2, y2 } = self.rect;
        let r = self.radius;
        [
            Point::new(x1 + r, y1 + r),
            Point::new(x2 - r, y1 + r),
            Point::new(x1 + r, y2 - r),
            Point::new(x2 - r, y2 - r),
        ]
    }

    /// Outline stroked with `width`, centred on the rectangle's edges
    pub fn outline(&self, width: i32) -> RoundedOutline {
        let width = width.max(1);
        if self.is_degenerate() {
            return RoundedOutline::Plain(RectOutline::new(self.rect, width));
        }

        let Rect { x1, y1, x2, y2 } = self.rect;
        let r = self.radius;
        let edges = [
            Segment::new(Point::new(x1 + r, y1), Point::new(x2 - r, y1), width),
            Segment::new(Point::new(x1 + r, y2), Point::new(x2 - r, y2), width),
            Segment::new(Point::new(x1, y1 + r), Point::new(x1, y2 - r), width),
            Segment::new(Point::new(x2, y1 + r), Point::new(x2, y2 - r), width),
        ];
        let centers = self.corner_centers();
        let arcs = std::array::from_fn(|i| QuarterArc::new(centers[i], r, width, Quadrant::ALL[i]));

        RoundedOutline::Rounded {
            bounds: RectOutline::new(self.rect, width).bounds(),
            edges,
            arcs,
        }
    }

    /// Solid interior: two corner-trimmed bands plus four corner discs
    pub fn fill(&self) -> RoundedFill {
        if self.is_degenerate() {
            return RoundedFill::Plain(FilledRect(self.rect));
        }

        let Rect { x1, y1, x2, y2 } = self.rect;
        let r = self.radius;
        let bands = [
            Rect { x1: x1 + r, y1, x2: x2 - r, y2 },
            Rect { x1, y1: y1 + r, x2, y2: y2 - r },
        ];
        let corners = self.corner_centers().map(|center| Disc::new(center, r));

        RoundedFill::Rounded {
            rect: self.rect,
            bands,
            corners,
        }
    }
}

/// Stroke of a [`RoundedRect`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundedOutline {
    Plain(RectOutline),
    Rounded {
        bounds: PixelBounds,
        edges: [Segment; 4],
        arcs: [QuarterArc; 4],
    },
}

impl Coverage for RoundedOutline {
    fn bounds(&self) -> PixelBounds {
        match self {
            RoundedOutline::Plain(outline) => outline.bounds(),
            RoundedOutline::Rounded { bounds, .. } => *bounds,
        }
    }

    fn covers(&self, x: i32, y: i32) -> bool {
        match self {
            RoundedOutline::Plain(outline) => outline.covers(x, y),
            RoundedOutline::Rounded { edges, arcs, .. } => {
                edges.iter().any(|edge| edge.covers(x, y))
                    || arcs.iter().any(|arc| arc.covers(x, y))
            }
        }
    }
}

/// Interior of a [`RoundedRect`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundedFill {
    Plain(FilledRect),
    Rounded {
        rect: Rect,
        bands: [Rect; 2],
        corners: [Disc; 4],
    },
}

impl Coverage for RoundedFill {
    fn bounds(&self) -> PixelBounds {
        match self {
            RoundedFill::Plain(fill) => fill.bounds(),
            RoundedFill::Rounded { rect, .. } => rect.bounds(),
        }
    }

    fn covers(&self, x: i32, y: i32) -> bool {
        match self {
            RoundedFill::Plain(fill) => fill.covers(x, y),
            RoundedFill::Rounded { bands, corners, .. } => {
                bands.iter().any(|band| band.contains(x, y))
                    || corners.iter().any(|disc| disc.covers(x, y))
            }
        }
    }
}
