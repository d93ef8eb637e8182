//! Layout constants, all expressed at [`REFERENCE_SIZE`] and scaled linearly.

/// Size at which every geometric constant below is defined.
pub const REFERENCE_SIZE: u32 = 512;

/// Largest canvas the pipeline will allocate. Not a magic number - may change.
pub const MAX_CANVAS_SIZE: u32 = 8192;

/// Background grid spacing; the grid is skipped once it scales to 2px or less.
pub const GRID_SPACING: i32 = 32;
pub const GRID_ALPHA: u8 = 40;

/// Inset of the main content border from the canvas edge.
pub const CONTENT_PADDING: i32 = 60;
pub const BORDER_WIDTH: i32 = 8;
pub const MIN_BORDER_WIDTH: i32 = 2;
pub const CORNER_RADIUS: i32 = 80;

/// Number of nested glow outlines around the content border.
pub const GLOW_LAYERS: i32 = 3;
/// Extra stroke width added per glow layer.
pub const GLOW_WIDTH_STEP: i32 = 4;
/// Outward offset (and radius growth) per glow layer, in unscaled pixels.
pub const GLOW_OFFSET_STEP: i32 = 2;
pub const GLOW_BASE_ALPHA: u8 = 80;
pub const GLOW_ALPHA_STEP: u8 = 20;
/// Gaussian sigma used by the blurred glow style.
pub const GLOW_BLUR_SIGMA: f32 = 6.0;

/// Inset of the 2x2 tile grid from the canvas edge.
pub const TILE_GRID_PADDING: i32 = 100;
pub const TILE_GAP: i32 = 16;
pub const TILE_RADIUS: i32 = 12;
pub const TILE_GLOW_LAYERS: i32 = 2;
pub const TILE_GLOW_WIDTH: i32 = 2;
pub const TILE_GLOW_BASE_ALPHA: u8 = 60;
pub const TILE_FILL_ALPHA: u8 = 40;
pub const TILE_BORDER_ALPHA: u8 = 220;
pub const TILE_BORDER_WIDTH: i32 = 3;

/// Scanlines are only drawn on canvases at least this large.
pub const SCANLINE_MIN_SIZE: u32 = 128;
pub const SCANLINE_SPACING: usize = 4;
pub const SCANLINE_ALPHA: u8 = 15;

pub const ACCENT_LENGTH: i32 = 30;
pub const ACCENT_WIDTH: i32 = 4;
pub const MIN_ACCENT_WIDTH: i32 = 2;
