//! Individual drawing passes, applied in order by [`super::compose_icon`]

use tileglow_config::GlowStyle;
use tracing::debug;

use super::layout::IconLayout;
use crate::blur::gaussian_blur;
use crate::constants::*;
use crate::palette;
use crate::surface::Canvas;
use crate::types::Point;

/// Faint background grid of vertical and horizontal lines
pub(crate) fn grid(canvas: &mut Canvas, layout: &IconLayout) {
    if !layout.has_grid() {
        debug!("grid: skipped (spacing {}px)", layout.grid_spacing);
        return;
    }

    let color = palette::GRID.with_alpha(GRID_ALPHA);
    let size = layout.extent();
    let spacing = layout.grid_spacing as usize;
    for x in (0..size).step_by(spacing) {
        canvas.draw_line(Point::new(x, 0), Point::new(x, size), color, layout.grid_line_width);
    }
    for y in (0..size).step_by(spacing) {
        canvas.draw_line(Point::new(0, y), Point::new(size, y), color, layout.grid_line_width);
    }
}

/// Nested glow outlines around the content square, then the crisp border
pub(crate) fn content_border(canvas: &mut Canvas, layout: &IconLayout, glow: GlowStyle) {
    match glow {
        GlowStyle::Layered => border_glow(canvas, layout),
        GlowStyle::Blur => {
            let mut layer = Canvas::new(canvas.width(), canvas.height());
            border_glow(&mut layer, layout);
            let blurred = gaussian_blur(&layer, layout.glow_sigma());
            canvas.composite(&blurred);
        }
    }

    canvas.draw_rounded_rect(
        Point::new(layout.padding, layout.padding),
        Point::new(layout.extent() - layout.padding, layout.extent() - layout.padding),
        layout.corner_radius,
        palette::NEON_CYAN,
        layout.border_width,
    );
}

/// Outermost (faintest, widest) layer first
fn border_glow(canvas: &mut Canvas, layout: &IconLayout) {
    let content = layout.content_rect();
    for layer in (1..=GLOW_LAYERS).rev() {
        let offset = layer * GLOW_OFFSET_STEP;
        let rect = content.expand(offset);
        let alpha = GLOW_BASE_ALPHA - layer as u8 * GLOW_ALPHA_STEP;
        let width = layout.border_width + layer * layout.glow_width_step;
        canvas.draw_rounded_rect(
            Point::new(rect.x1, rect.y1),
            Point::new(rect.x2, rect.y2),
            layout.corner_radius + offset,
            palette::NEON_CYAN.with_alpha(alpha),
            width,
        );
    }
}

/// 2x2 grid of glowing translucent tiles
pub(crate) fn tiles(canvas: &mut Canvas, layout: &IconLayout) {
    let cell = layout.tile_size;
    for (origin, color) in layout.tile_origins().into_iter().zip(palette::TILE_COLORS) {
        let far = Point::new(origin.x + cell, origin.y + cell);

        for grow in (1..=TILE_GLOW_LAYERS).rev() {
            let alpha = TILE_GLOW_BASE_ALPHA - grow as u8 * GLOW_ALPHA_STEP;
            canvas.draw_rounded_rect(
                Point::new(origin.x - grow, origin.y - grow),
                Point::new(far.x + grow, far.y + grow),
                layout.tile_radius + grow,
                color.with_alpha(alpha),
                layout.tile_glow_width,
            );
        }

        canvas.fill_rounded_rect(origin, far, layout.tile_radius, color.with_alpha(TILE_FILL_ALPHA));
        canvas.draw_rounded_rect(
            origin,
            far,
            layout.tile_radius,
            color.with_alpha(TILE_BORDER_ALPHA),
            layout.tile_border_width,
        );
    }
}

/// Near-black 1px lines every few rows as a CRT texture
pub(crate) fn scanlines(canvas: &mut Canvas, layout: &IconLayout) {
    if !layout.has_scanlines() {
        return;
    }

    let color = palette::SCANLINE.with_alpha(SCANLINE_ALPHA);
    let size = layout.extent();
    for y in (0..size).step_by(SCANLINE_SPACING) {
        canvas.draw_line(Point::new(0, y), Point::new(size, y), color, 1);
    }
}

/// L-shaped marks continuing the top-left and bottom-right border corners
pub(crate) fn corner_accents(canvas: &mut Canvas, layout: &IconLayout) {
    let color = palette::NEON_MAGENTA;
    let width = layout.accent_width;
    let len = layout.accent_length;
    let near = layout.padding;
    let far = layout.extent() - layout.padding;
    let r = layout.corner_radius;

    canvas.draw_line(Point::new(near, near + r), Point::new(near, near + r + len), color, width);
    canvas.draw_line(Point::new(near + r, near), Point::new(near + r + len, near), color, width);

    canvas.draw_line(Point::new(far, far - r), Point::new(far, far - r - len), color, width);
    canvas.draw_line(Point::new(far - r, far), Point::new(far - r - len, far), color, width);
}
