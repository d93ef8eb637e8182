//! tileglow painting system - raster canvas and icon composition
//!
//! This crate provides the drawing core of the icon generator:
//! - [`types::Color`] / [`types::Point`] - 8-bit RGBA color and integer pixel coordinates
//! - [`surface`] - CPU RGBA canvas with source-over blending
//! - [`shapes`] - Coverage shapes (lines, rects, discs, arcs, rounded rects)
//! - [`blur`] - Separable Gaussian blur for glow layers
//! - [`palette`] - Named neon colors
//! - [`pipeline`] - Layered icon composition for a target size

pub mod blur;
pub mod constants;
pub mod error;
pub mod palette;
pub mod pipeline;
pub mod shapes;
pub mod surface;
pub mod types;

pub use blur::*;
pub use constants::*;
pub use error::*;
pub use pipeline::*;
pub use shapes::*;
pub use surface::*;
pub use types::*;
