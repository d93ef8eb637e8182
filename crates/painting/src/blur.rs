//! Separable Gaussian blur for glow layers
//!
//! Works on premultiplied f32 copies of the pixels so transparent regions do
//! not bleed black into the glow. Samples outside the canvas are transparent.

use tracing::debug;

use crate::surface::Canvas;
use crate::types::Color;

/// Normalized 1-D Gaussian kernel covering +/- ceil(3 * sigma)
pub fn gaussian_kernel(sigma: f32) -> Vec<f32> {
    let radius = (sigma * 3.0).ceil().max(1.0) as i32;
    let two_sigma_sq = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (-radius..=radius)
        .map(|i| (-((i * i) as f32) / two_sigma_sq).exp())
        .collect();
    let sum: f32 = kernel.iter().sum();
    for weight in &mut kernel {
        *weight /= sum;
    }
    kernel
}

/// Blur a canvas with a Gaussian of the given sigma (in pixels).
/// A non-positive sigma returns an unchanged copy.
pub fn gaussian_blur(canvas: &Canvas, sigma: f32) -> Canvas {
    if sigma <= 0.0 || canvas.pixel_count() == 0 {
        return canvas.clone();
    }

    let width = canvas.width() as usize;
    let height = canvas.height() as usize;
    let kernel = gaussian_kernel(sigma);
    let radius = (kernel.len() / 2) as isize;
    debug!(
        "gaussian_blur: {}x{} sigma={:.2} taps={}",
        width,
        height,
        sigma,
        kernel.len()
    );

    let premultiplied: Vec<[f32; 4]> = canvas.pixels().iter().map(|p| premultiply(*p)).collect();

    let mut horizontal = vec![[0.0f32; 4]; width * height];
    for y in 0..height {
        for x in 0..width {
            let mut acc = [0.0f32; 4];
            for (k, weight) in kernel.iter().enumerate() {
                let sx = x as isize + k as isize - radius;
                if sx < 0 || sx >= width as isize {
                    continue;
                }
                accumulate(&mut acc, &premultiplied[y * width + sx as usize], *weight);
            }
            horizontal[y * width + x] = acc;
        }
    }

    let mut out = Canvas::new(canvas.width(), canvas.height());
    let pixels = out.pixels_mut();
    for y in 0..height {
        for x in 0..width {
            let mut acc = [0.0f32; 4];
            for (k, weight) in kernel.iter().enumerate() {
                let sy = y as isize + k as isize - radius;
                if sy < 0 || sy >= height as isize {
                    continue;
                }
                accumulate(&mut acc, &horizontal[sy as usize * width + x], *weight);
            }
            pixels[y * width + x] = unpremultiply(acc);
        }
    }
    out
}

#[inline]
fn accumulate(acc: &mut [f32; 4], sample: &[f32; 4], weight: f32) {
    for (a, s) in acc.iter_mut().zip(sample) {
        *a += s * weight;
    }
}

#[inline]
fn premultiply(color: Color) -> [f32; 4] {
    let alpha = color.a as f32 / 255.0;
    [
        color.r as f32 * alpha,
        color.g as f32 * alpha,
        color.b as f32 * alpha,
        alpha,
    ]
}

#[inline]
fn unpremultiply(value: [f32; 4]) -> Color {
    let alpha = value[3];
    if alpha <= f32::EPSILON {
        return Color::TRANSPARENT;
    }
    let channel = |v: f32| (v / alpha).round().clamp(0.0, 255.0) as u8;
    Color {
        r: channel(value[0]),
        g: channel(value[1]),
        b: channel(value[2]),
        a: (alpha * 255.0).round().clamp(0.0, 255.0) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_is_normalized_and_symmetric() {
        let kernel = gaussian_kernel(2.0);
        assert_eq!(kernel.len(), 13);
        let sum: f32 = kernel.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
        for i in 0..kernel.len() / 2 {
            assert!((kernel[i] - kernel[kernel.len() - 1 - i]).abs() < 1e-7);
        }
        assert!(kernel[6] > kernel[5]);
    }

    #[test]
    fn test_zero_sigma_is_identity() {
        let mut canvas = Canvas::new(4, 4);
        canvas.set_pixel(1, 2, Color::rgb(9, 8, 7));
        assert_eq!(gaussian_blur(&canvas, 0.0), canvas);
    }

    #[test]
    fn test_transparent_stays_transparent() {
        let canvas = Canvas::new(8, 8);
        assert_eq!(gaussian_blur(&canvas, 1.5), canvas);
    }

    #[test]
    fn test_point_spreads_without_changing_hue() {
        let mut canvas = Canvas::new(15, 15);
        canvas.set_pixel(7, 7, Color::rgb(0, 255, 255));
        let blurred = gaussian_blur(&canvas, 1.0);

        let center = blurred.get_pixel(7, 7).unwrap();
        let neighbour = blurred.get_pixel(8, 7).unwrap();
        let far = blurred.get_pixel(0, 0).unwrap();
        assert!(center.a < 255 && center.a > neighbour.a);
        assert!(neighbour.a > 0);
        assert_eq!(far, Color::TRANSPARENT);
        // Premultiplied blur keeps the color, only alpha spreads
        assert_eq!((neighbour.r, neighbour.g, neighbour.b), (0, 255, 255));
        // Symmetric spread
        assert_eq!(blurred.get_pixel(6, 7), Some(neighbour));
        assert_eq!(blurred.get_pixel(7, 8), Some(neighbour));
    }

    #[test]
    fn test_opaque_interior_stays_opaque() {
        let canvas = Canvas::filled(20, 20, Color::rgb(30, 144, 255));
        let blurred = gaussian_blur(&canvas, 1.0);
        assert_eq!(blurred.get_pixel(10, 10), Some(Color::rgb(30, 144, 255)));
        // Edges fade against the transparent outside
        assert!(blurred.get_pixel(0, 0).unwrap().a < 255);
    }
}
