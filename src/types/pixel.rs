//! Pixel and integer RGB types.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

/// An RGBA pixel with floating-point channels in `[0, 255]`.
///
/// Channels are floats so intermediate arithmetic (sums, differences,
/// scaling) does not saturate. Use [`Pixel::to_rgb`] to get back to integers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pixel {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Pixel {
    /// Create a new pixel from RGBA components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a pixel from 8-bit RGBA bytes.
    pub fn from_rgba8(rgba: [u8; 4]) -> Self {
        Self::new(
            f32::from(rgba[0]),
            f32::from(rgba[1]),
            f32::from(rgba[2]),
            f32::from(rgba[3]),
        )
    }

    /// Integer RGB triple, each channel clamped to `[0, 255]` and truncated.
    pub fn to_rgb(self) -> Rgb {
        Rgb::new(channel(self.r), channel(self.g), channel(self.b))
    }
}

fn channel(v: f32) -> i32 {
    if v.is_nan() {
        0
    } else {
        v.clamp(0.0, 255.0) as i32
    }
}

impl Add for Pixel {
    type Output = Pixel;

    fn add(self, other: Pixel) -> Pixel {
        Pixel::new(
            self.r + other.r,
            self.g + other.g,
            self.b + other.b,
            self.a + other.a,
        )
    }
}

impl Sub for Pixel {
    type Output = Pixel;

    fn sub(self, other: Pixel) -> Pixel {
        Pixel::new(
            self.r - other.r,
            self.g - other.g,
            self.b - other.b,
            self.a - other.a,
        )
    }
}

impl Mul<f32> for Pixel {
    type Output = Pixel;

    fn mul(self, factor: f32) -> Pixel {
        Pixel::new(
            self.r * factor,
            self.g * factor,
            self.b * factor,
            self.a * factor,
        )
    }
}

impl Div<f32> for Pixel {
    type Output = Pixel;

    fn div(self, divisor: f32) -> Pixel {
        Pixel::new(
            self.r / divisor,
            self.g / divisor,
            self.b / divisor,
            self.a / divisor,
        )
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} {} {} {})",
            self.r as i32, self.g as i32, self.b as i32, self.a as i32
        )
    }
}

/// An integer RGB triple.
///
/// Channels are conceptually `[0, 255]` but are not range-enforced; extreme
/// HSV inputs can produce values outside that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Rgb {
    /// Create a new RGB triple.
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Channels clamped into `[0, 255]`.
    pub fn to_u8(self) -> [u8; 3] {
        [
            self.r.clamp(0, 255) as u8,
            self.g.clamp(0, 255) as u8,
            self.b.clamp(0, 255) as u8,
        ]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_arithmetic() {
        let a = Pixel::new(10.0, 20.0, 30.0, 255.0);
        let b = Pixel::new(5.0, 5.0, 5.0, 0.0);

        assert_eq!(a + b, Pixel::new(15.0, 25.0, 35.0, 255.0));
        assert_eq!(a - b, Pixel::new(5.0, 15.0, 25.0, 255.0));
        assert_eq!(a * 2.0, Pixel::new(20.0, 40.0, 60.0, 510.0));
        assert_eq!((a + a) / 2.0, a);
    }

    #[test]
    fn test_pixel_to_rgb_truncates() {
        let p = Pixel::new(12.9, 0.4, 254.99, 255.0);
        assert_eq!(p.to_rgb(), Rgb::new(12, 0, 254));
    }

    #[test]
    fn test_pixel_to_rgb_clamps() {
        let p = Pixel::new(-40.0, 300.0, f32::NAN, 0.0);
        assert_eq!(p.to_rgb(), Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_from_rgba8() {
        let p = Pixel::from_rgba8([255, 128, 0, 64]);
        assert_eq!(p, Pixel::new(255.0, 128.0, 0.0, 64.0));
        assert_eq!(p.to_rgb(), Rgb::new(255, 128, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Pixel::new(1.7, 2.0, 3.0, 255.0).to_string(), "(1 2 3 255)");
        assert_eq!(Rgb::new(255, 0, 10).to_string(), "rgb(255, 0, 10)");
    }

    #[test]
    fn test_rgb_to_u8_clamps() {
        assert_eq!(Rgb::new(-3, 128, 300).to_u8(), [0, 128, 255]);
    }
}
