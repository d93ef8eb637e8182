//! Neon palette shared by every icon size

use crate::types::Color;

pub const DARK_BG: Color = Color::rgb(10, 10, 15);
pub const NEON_CYAN: Color = Color::rgb(0, 255, 255);
pub const NEON_MAGENTA: Color = Color::rgb(255, 0, 150);
pub const NEON_BLUE: Color = Color::rgb(30, 144, 255);
pub const GRID: Color = Color::rgb(0, 80, 100);
pub const GLOW_CYAN: Color = Color::rgb(0, 200, 220);
pub const SCANLINE: Color = Color::rgb(0, 0, 0);

/// Tile colors in reading order: top-left, top-right, bottom-left, bottom-right.
/// Cyan repeats on the diagonal.
pub const TILE_COLORS: [Color; 4] = [NEON_CYAN, NEON_MAGENTA, NEON_BLUE, NEON_CYAN];
