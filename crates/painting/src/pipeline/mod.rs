//! Icon composition pipeline
//!
//! Produces one finished canvas per target size by painting layered passes
//! over a dark background (painter's algorithm, source-over blending):
//! 1. Opaque background fill
//! 2. Faint grid (skipped on tiny sizes)
//! 3. Glowing rounded content border
//! 4. 2x2 tile grid with per-tile glow, fill and border
//! 5. Scanline texture (sizes >= 128)
//! 6. Magenta corner accents
//!
//! The pipeline is a pure function of the size and options; it has no
//! state and no randomness.

mod layout;
mod passes;

use tileglow_config::{GeneratorConfig, GlowStyle};
use tracing::debug;

use crate::error::{validate_size, PaintError};
use crate::palette;
use crate::surface::Canvas;

pub use layout::IconLayout;

/// Rendering options that do not depend on the target size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComposeOptions {
    pub glow: GlowStyle,
}

impl From<&GeneratorConfig> for ComposeOptions {
    fn from(config: &GeneratorConfig) -> Self {
        Self { glow: config.glow }
    }
}

/// Compose the icon for a square canvas of `size` pixels
pub fn compose_icon(size: u32, options: &ComposeOptions) -> Result<Canvas, PaintError> {
    validate_size(size)?;
    let layout = IconLayout::for_size(size);
    debug!("compose_icon: size={} glow={:?} layout={:?}", size, options.glow, layout);

    let mut canvas = Canvas::filled(size, size, palette::DARK_BG);
    passes::grid(&mut canvas, &layout);
    passes::content_border(&mut canvas, &layout, options.glow);
    passes::tiles(&mut canvas, &layout);
    passes::scanlines(&mut canvas, &layout);
    passes::corner_accents(&mut canvas, &layout);

    Ok(canvas)
}
