use thiserror::Error;

use crate::constants::MAX_CANVAS_SIZE;

#[derive(Debug, Error)]
pub enum PaintError {
    #[error("Invalid canvas size: {0} (must be 1..={max})", max = MAX_CANVAS_SIZE)]
    InvalidSize(u32),
    #[error("Pixel buffer does not match {width}x{height}")]
    BufferSize { width: u32, height: u32 },
}

/// Check a square canvas size before allocating it
pub fn validate_size(size: u32) -> Result<(), PaintError> {
    if size == 0 || size > MAX_CANVAS_SIZE {
        return Err(PaintError::InvalidSize(size));
    }
    Ok(())
}
