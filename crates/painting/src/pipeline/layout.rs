//! Size-dependent icon geometry
//!
//! Every value is derived from a constant at [`REFERENCE_SIZE`] scaled by
//! `size / REFERENCE_SIZE` and truncated toward zero, so proportions hold
//! across the whole size table and results are reproducible.

use crate::constants::*;
use crate::shapes::Rect;
use crate::types::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconLayout {
    pub size: u32,
    pub scale: f64,
    pub grid_spacing: i32,
    pub grid_line_width: i32,
    pub padding: i32,
    pub border_width: i32,
    pub corner_radius: i32,
    pub glow_width_step: i32,
    pub tile_grid_padding: i32,
    pub tile_gap: i32,
    pub tile_size: i32,
    pub tile_radius: i32,
    pub tile_glow_width: i32,
    pub tile_border_width: i32,
    pub accent_length: i32,
    pub accent_width: i32,
}

impl IconLayout {
    pub fn for_size(size: u32) -> Self {
        let scale = size as f64 / REFERENCE_SIZE as f64;
        let scaled = |value: i32| (value as f64 * scale) as i32;

        let tile_grid_padding = scaled(TILE_GRID_PADDING);
        let tile_gap = scaled(TILE_GAP);
        let tile_grid_size = size as i32 - tile_grid_padding * 2;

        Self {
            size,
            scale,
            grid_spacing: scaled(GRID_SPACING),
            grid_line_width: (scale as i32).max(1),
            padding: scaled(CONTENT_PADDING),
            border_width: scaled(BORDER_WIDTH).max(MIN_BORDER_WIDTH),
            corner_radius: scaled(CORNER_RADIUS),
            glow_width_step: scaled(GLOW_WIDTH_STEP),
            tile_grid_padding,
            tile_gap,
            tile_size: ((tile_grid_size - tile_gap) / 2).max(0),
            tile_radius: scaled(TILE_RADIUS),
            tile_glow_width: scaled(TILE_GLOW_WIDTH).max(1),
            tile_border_width: scaled(TILE_BORDER_WIDTH).max(1),
            accent_length: scaled(ACCENT_LENGTH),
            accent_width: scaled(ACCENT_WIDTH).max(MIN_ACCENT_WIDTH),
        }
    }

    /// Canvas edge as a signed coordinate
    #[inline]
    pub fn extent(&self) -> i32 {
        self.size as i32
    }

    /// The background grid disappears once it would be denser than every 3px
    pub fn has_grid(&self) -> bool {
        self.grid_spacing > 2
    }

    pub fn has_scanlines(&self) -> bool {
        self.size >= SCANLINE_MIN_SIZE
    }

    /// Square framed by the main neon border
    pub fn content_rect(&self) -> Rect {
        let far = self.extent() - self.padding;
        Rect::from_corners(
            Point::new(self.padding, self.padding),
            Point::new(far, far),
        )
    }

    /// Top-left corners of the 2x2 tiles in reading order
    pub fn tile_origins(&self) -> [Point; 4] {
        let near = self.tile_grid_padding;
        let far = near + self.tile_size + self.tile_gap;
        [
            Point::new(near, near),
            Point::new(far, near),
            Point::new(near, far),
            Point::new(far, far),
        ]
    }

    /// Gaussian sigma for the blurred glow style
    pub fn glow_sigma(&self) -> f32 {
        (GLOW_BLUR_SIGMA * self.scale as f32).max(1.0)
    }
}
