//! HSV color wheel pixel fill

use std::f64::consts::TAU;

use circle_widget_types::{hsv_to_rgb8, CircleBackground, Rgb8};

use crate::geometry::angle_and_distance;

const BYTES_PER_PIXEL: usize = 4;

/// Wheel color at a polar position.
///
/// Hue follows the angle, saturation is the normalized distance (not clamped,
/// points past the rim are clipped away later) and value falls off from 1.0
/// at the center to 0.75 at the rim along a square root.
pub fn hsv_background(angle: f64, distance: f64) -> Rgb8 {
    let value = 1.0 - distance.sqrt() / 4.0;

    hsv_to_rgb8(angle / TAU, distance, value)
}

/// A `size` x `size` pixel buffer in Cairo ARGB32 layout.
///
/// Every pixel is opaque, including the corners outside the disc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelBuffer {
    size: i32,
    stride: i32,
    data: Vec<u8>,
}

impl WheelBuffer {
    /// Compute the buffer for `background`. Backgrounds without a per-pixel
    /// color leave every pixel opaque black.
    pub fn new(size: i32, background: CircleBackground) -> Result<Self, cairo::Error> {
        let size = size.max(0);
        let stride = cairo::Format::ARgb32.stride_for_width(size as u32)?;
        let mut data = vec![0u8; stride as usize * size as usize];

        let center = size as f64 / 2.0;

        if stride == 0 {
            return Ok(Self { size, stride, data });
        }

        for (y, row) in data.chunks_exact_mut(stride as usize).enumerate() {
            for x in 0..size as usize {
                let rgb = match background {
                    CircleBackground::Hsv => {
                        let (angle, distance) =
                            angle_and_distance(center, center, center, x as f64, y as f64);
                        hsv_background(angle, distance)
                    }
                    CircleBackground::Plain => Rgb8::BLACK,
                };

                let offset = x * BYTES_PER_PIXEL;
                row[offset..offset + BYTES_PER_PIXEL]
                    .copy_from_slice(&rgb.to_argb32().to_ne_bytes());
            }
        }

        Ok(Self { size, stride, data })
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn stride(&self) -> i32 {
        self.stride
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// ARGB32 value of the pixel at `(x, y)`, or `None` outside the buffer
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 || x >= self.size || y >= self.size {
            return None;
        }
        let offset = y as usize * self.stride as usize + x as usize * BYTES_PER_PIXEL;
        let bytes: [u8; 4] = self.data[offset..offset + BYTES_PER_PIXEL].try_into().ok()?;
        Some(u32::from_ne_bytes(bytes))
    }

    /// Hand the pixels to Cairo as an image surface
    pub fn into_surface(self) -> Result<cairo::ImageSurface, cairo::Error> {
        cairo::ImageSurface::create_for_data(
            self.data,
            cairo::Format::ARgb32,
            self.size,
            self.size,
            self.stride,
        )
    }
}
