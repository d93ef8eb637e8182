/// 8-bit straight-alpha RGBA color
///
/// Layout matches an `image::Rgba<u8>` pixel so a canvas can be handed to the
/// encoder as raw bytes with bytemuck.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, bytemuck::Pod, bytemuck::Zeroable,
)]
#[repr(C)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Composite `self` over `dst` (Porter-Duff source-over, straight alpha)
    #[inline]
    pub fn over(self, dst: Color) -> Color {
        if self.a == 255 || dst.a == 0 {
            return self;
        }
        if self.a == 0 {
            return dst;
        }

        let src_a = self.a as f32 / 255.0;
        let dst_a = dst.a as f32 / 255.0;
        let dst_weight = dst_a * (1.0 - src_a);
        let out_a = src_a + dst_weight;

        let channel = |s: u8, d: u8| -> u8 {
            let value = (s as f32 * src_a + d as f32 * dst_weight) / out_a;
            value.round().clamp(0.0, 255.0) as u8
        };

        Color {
            r: channel(self.r, dst.r),
            g: channel(self.g, dst.g),
            b: channel(self.b, dst.b),
            a: (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
        }
    }
}

/// Integer pixel coordinate; may lie outside the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
