use image::Rgb;
use serde::Serialize;

/// Linear RGB, channels nominally in [0, 1] once shaded.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };

    pub const fn new(r: f64, g: f64, b: f64) -> Self { Self { r, g, b } }

    pub fn add(self, c: Self) -> Self { Self::new(self.r+c.r, self.g+c.g, self.b+c.b) }
    pub fn scale(self, f: f64) -> Self { Self::new(self.r*f, self.g*f, self.b*f) }
    /// Same amount on every channel (white light).
    pub fn add_scalar(self, s: f64) -> Self { Self::new(self.r+s, self.g+s, self.b+s) }

    /// Upper clamp only; negative channels pass through.
    pub fn clamp_max(self, max: f64) -> Self {
        Self::new(self.r.min(max), self.g.min(max), self.b.min(max))
    }

    /// Truncating 8-bit quantization: `channel * 255` cast down, no rounding.
    pub fn to_rgb8(self) -> Rgb<u8> {
        Rgb([
            (self.r * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.b * 255.0) as u8,
        ])
    }
}
