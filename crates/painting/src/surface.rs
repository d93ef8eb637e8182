//! CPU canvas for icon rendering - 8-bit straight-alpha RGBA storage

use crate::error::PaintError;
use crate::shapes::Coverage;
use crate::types::Color;

/// An 8-bit RGBA CPU canvas
/// Stores pixels as [`Color`] in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Create a new canvas with the given dimensions, initialized to transparent black
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Color::TRANSPARENT)
    }

    /// Create a new canvas filled with a solid color
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![color; pixel_count],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Clear the canvas to a solid color
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|index| self.pixels[index])
    }

    /// Set a pixel at the given coordinates
    /// Does nothing if coordinates are out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(index) = self.index(x, y) {
            self.pixels[index] = color;
        }
    }

    /// Composite a color over an existing pixel
    /// Does nothing if coordinates are out of bounds
    #[inline]
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(index) = self.index(x, y) {
            self.pixels[index] = color.over(self.pixels[index]);
        }
    }

    /// Blend `color` into every pixel the shape covers, each pixel at most once.
    /// Returns the number of pixels touched.
    pub fn fill_coverage<C: Coverage + ?Sized>(&mut self, shape: &C, color: Color) -> usize {
        let Some(bounds) = shape.bounds().clip(self.width, self.height) else {
            return 0;
        };

        let mut touched = 0;
        for y in bounds.min_y..=bounds.max_y {
            for x in bounds.min_x..=bounds.max_x {
                if shape.covers(x, y) {
                    self.blend_pixel(x, y, color);
                    touched += 1;
                }
            }
        }
        touched
    }

    /// Composite another canvas of the same size over this one.
    /// Only the overlapping region is used if the sizes differ.
    pub fn composite(&mut self, layer: &Canvas) {
        let width = self.width.min(layer.width) as usize;
        let height = self.height.min(layer.height) as usize;
        for y in 0..height {
            let dst_row = y * self.width as usize;
            let src_row = y * layer.width as usize;
            for x in 0..width {
                let dst = &mut self.pixels[dst_row + x];
                *dst = layer.pixels[src_row + x].over(*dst);
            }
        }
    }

    /// Get the total number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Get direct access to pixel data
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Get mutable access to pixel data
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Raw RGBA8 bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Copy into an `image` buffer for encoding
    pub fn to_rgba_image(&self) -> Result<image::RgbaImage, PaintError> {
        image::RgbaImage::from_raw(self.width, self.height, self.as_bytes().to_vec()).ok_or(
            PaintError::BufferSize {
                width: self.width,
                height: self.height,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::FilledRect;
    use crate::types::Point;

    #[test]
    fn test_new_canvas() {
        let canvas = Canvas::new(100, 100);
        assert_eq!(canvas.width(), 100);
        assert_eq!(canvas.height(), 100);
        assert_eq!(canvas.pixel_count(), 10000);
        assert_eq!(canvas.get_pixel(0, 0), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_get_set_pixel() {
        let mut canvas = Canvas::new(10, 10);
        let color = Color::rgb(255, 128, 64);

        canvas.set_pixel(5, 5, color);
        assert_eq!(canvas.get_pixel(5, 5), Some(color));

        // Out of bounds should return None and writes are ignored
        assert_eq!(canvas.get_pixel(100, 100), None);
        assert_eq!(canvas.get_pixel(-1, 0), None);
        canvas.set_pixel(-1, 3, color);
        canvas.set_pixel(10, 3, color);
    }

    #[test]
    fn test_clear() {
        let mut canvas = Canvas::new(10, 10);
        let white = Color::rgb(255, 255, 255);
        canvas.clear(white);
        assert!(canvas.pixels().iter().all(|p| *p == white));
    }

    #[test]
    fn test_blend_pixel() {
        let mut canvas = Canvas::filled(4, 4, Color::rgb(0, 0, 0));
        canvas.blend_pixel(1, 1, Color::rgba(255, 0, 0, 128));
        let result = canvas.get_pixel(1, 1).unwrap();
        assert_eq!(result, Color::rgb(128, 0, 0));
        // Neighbours untouched
        assert_eq!(canvas.get_pixel(0, 0), Some(Color::rgb(0, 0, 0)));
    }

    #[test]
    fn test_fill_coverage_clips_to_canvas() {
        let mut canvas = Canvas::new(8, 8);
        let shape = FilledRect::from_corners(Point::new(-5, -5), Point::new(2, 2));
        let touched = canvas.fill_coverage(&shape, Color::rgb(1, 2, 3));
        assert_eq!(touched, 9);
        assert_eq!(canvas.get_pixel(2, 2), Some(Color::rgb(1, 2, 3)));
        assert_eq!(canvas.get_pixel(3, 3), Some(Color::TRANSPARENT));

        let offscreen = FilledRect::from_corners(Point::new(20, 20), Point::new(30, 30));
        assert_eq!(canvas.fill_coverage(&offscreen, Color::rgb(1, 2, 3)), 0);
    }

    #[test]
    fn test_composite_layer() {
        let mut base = Canvas::filled(2, 2, Color::rgb(0, 0, 0));
        let mut layer = Canvas::new(2, 2);
        layer.set_pixel(1, 0, Color::rgb(0, 255, 0));
        base.composite(&layer);
        assert_eq!(base.get_pixel(1, 0), Some(Color::rgb(0, 255, 0)));
        assert_eq!(base.get_pixel(0, 0), Some(Color::rgb(0, 0, 0)));
    }

    #[test]
    fn test_as_bytes_and_image() {
        let canvas = Canvas::filled(2, 3, Color::rgba(1, 2, 3, 4));
        assert_eq!(canvas.as_bytes().len(), 2 * 3 * 4);
        let image = canvas.to_rgba_image().unwrap();
        assert_eq!(image.dimensions(), (2, 3));
        assert_eq!(image.get_pixel(1, 2).0, [1, 2, 3, 4]);
    }
}
