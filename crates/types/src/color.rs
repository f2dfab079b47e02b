//! Color types and the HSV conversion used by the wheel background.

use serde::{Deserialize, Serialize};

/// RGBA color with alpha channel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    /// Apply to Cairo context
    #[cfg(feature = "cairo")]
    pub fn apply_to_cairo(&self, cr: &cairo::Context) {
        cr.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

/// 8-bit opaque RGB triple
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack as a cairo ARGB32 pixel value (`0xAARRGGBB`) with full alpha.
    pub fn to_argb32(self) -> u32 {
        0xff00_0000 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

fn channel_to_u8(c: f64) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Convert HSV to 8-bit RGB.
///
/// `hue` is a fraction of a full turn in `[0, 1]`; 1.0 wraps back to 0.0.
/// `saturation` and `value` are nominally in `[0, 1]`. Saturation above 1
/// pushes the smallest channel negative; channels are clamped to the byte
/// range rather than rejected.
pub fn hsv_to_rgb8(hue: f64, saturation: f64, value: f64) -> Rgb8 {
    if saturation == 0.0 {
        let v = channel_to_u8(value);
        return Rgb8::new(v, v, v);
    }

    let mut h = hue * 6.0;
    if h >= 6.0 {
        h = 0.0;
    }

    let sector = h.floor();
    let f = h - sector;
    let w = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * f);
    let t = value * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match sector as i32 {
        0 => (value, t, w),
        1 => (q, value, w),
        2 => (w, value, t),
        3 => (w, q, value),
        4 => (t, w, value),
        _ => (value, w, q),
    };

    Rgb8::new(channel_to_u8(r), channel_to_u8(g), channel_to_u8(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(hsv_to_rgb8(0.0, 1.0, 1.0), Rgb8::new(255, 0, 0));
        assert_eq!(hsv_to_rgb8(1.0 / 3.0, 1.0, 1.0), Rgb8::new(0, 255, 0));
        assert_eq!(hsv_to_rgb8(2.0 / 3.0, 1.0, 1.0), Rgb8::new(0, 0, 255));
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        assert_eq!(hsv_to_rgb8(0.42, 0.0, 1.0), Rgb8::WHITE);
        assert_eq!(hsv_to_rgb8(0.42, 0.0, 0.0), Rgb8::BLACK);
        assert_eq!(hsv_to_rgb8(0.9, 0.0, 0.5), Rgb8::new(128, 128, 128));
    }

    #[test]
    fn test_full_turn_wraps() {
        assert_eq!(hsv_to_rgb8(1.0, 0.7, 0.9), hsv_to_rgb8(0.0, 0.7, 0.9));
    }

    #[test]
    fn test_oversaturated_channels_clamp() {
        let rgb = hsv_to_rgb8(0.0, 1.5, 1.0);
        assert_eq!(rgb, Rgb8::new(255, 0, 0));
    }

    #[test]
    fn test_argb32_packing() {
        assert_eq!(Rgb8::new(0x12, 0x34, 0x56).to_argb32(), 0xff12_3456);
    }

    #[test]
    fn test_from_rgba8() {
        let c = Color::from_rgba8(255, 0, 51, 255);
        assert_eq!(c, Color::new(1.0, 0.0, 0.2, 1.0));
    }
}
