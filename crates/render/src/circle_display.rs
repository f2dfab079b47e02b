//! Circle background rendering: plain ring or clipped HSV wheel

use std::f64::consts::TAU;

use circle_widget_types::{CircleBackground, Color};

use crate::wheel::WheelBuffer;

/// Soft light band under the ring
const RING_HIGHLIGHT: Color = Color::new(1.0, 1.0, 1.0, 0.6);
const RING_HIGHLIGHT_WIDTH: f64 = 3.0;

/// Crisp dark line on top of the highlight
const RING_SHADOW: Color = Color::new(0.0, 0.0, 0.0, 0.8);
const RING_SHADOW_WIDTH: f64 = 1.0;

/// Draw the circle background into the `size` x `size` square at the
/// context origin. The context state is restored afterwards.
pub fn draw_background(
    cr: &cairo::Context,
    size: i32,
    background: CircleBackground,
) -> Result<(), cairo::Error> {
    cr.save()?;

    let result = match background {
        CircleBackground::Plain => draw_ring(cr, size),
        CircleBackground::Hsv => draw_wheel(cr, size, background),
    };

    cr.restore()?;
    result
}

fn draw_ring(cr: &cairo::Context, size: i32) -> Result<(), cairo::Error> {
    let center = size as f64 / 2.0;

    cr.arc(center, center, center - 1.5, 0.0, TAU);

    cr.set_line_width(RING_HIGHLIGHT_WIDTH);
    RING_HIGHLIGHT.apply_to_cairo(cr);
    cr.stroke_preserve()?;

    cr.set_line_width(RING_SHADOW_WIDTH);
    RING_SHADOW.apply_to_cairo(cr);
    cr.stroke()?;

    Ok(())
}

fn draw_wheel(
    cr: &cairo::Context,
    size: i32,
    background: CircleBackground,
) -> Result<(), cairo::Error> {
    let center = size as f64 / 2.0;

    let surface = WheelBuffer::new(size, background)?.into_surface()?;
    cr.set_source_surface(&surface, 0.0, 0.0)?;

    cr.arc(center, center, center, 0.0, TAU);
    cr.clip();

    cr.paint()
}

/// Render the background into a new transparent ARGB32 surface of
/// `size` x `size`.
pub fn render_to_surface(
    size: i32,
    background: CircleBackground,
) -> Result<cairo::ImageSurface, cairo::Error> {
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, size, size)?;

    {
        let cr = cairo::Context::new(&surface)?;
        draw_background(&cr, size, background)?;
    }

    surface.flush();
    log::trace!("rendered {} circle background at {}px", background, size);

    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::angle_and_distance;

    /// Copy the surface pixels out as `(stride, bytes)`
    fn surface_bytes(mut surface: cairo::ImageSurface) -> (usize, Vec<u8>) {
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap().to_vec();
        (stride, data)
    }

    /// Premultiplied `[a, r, g, b]` of a pixel
    fn argb(stride: usize, data: &[u8], x: usize, y: usize) -> [u8; 4] {
        let offset = y * stride + x * 4;
        let bytes: [u8; 4] = data[offset..offset + 4].try_into().unwrap();
        let pixel = u32::from_ne_bytes(bytes);
        [
            (pixel >> 24) as u8,
            (pixel >> 16) as u8,
            (pixel >> 8) as u8,
            pixel as u8,
        ]
    }

    #[test]
    fn test_wheel_outside_disc_is_transparent() {
        let size = 100;
        let (stride, data) = surface_bytes(render_to_surface(size, CircleBackground::Hsv).unwrap());
        let margin = 0.5 / 50.0;

        for y in 0..size as usize {
            for x in 0..size as usize {
                let (x0, y0) = (x as f64, y as f64);

                // Closest and farthest points of the pixel square from the center
                let near_x = 50f64.clamp(x0, x0 + 1.0);
                let near_y = 50f64.clamp(y0, y0 + 1.0);
                let (_, nearest) = angle_and_distance(50.0, 50.0, 50.0, near_x, near_y);
                let far_x = if x0 + 0.5 < 50.0 { x0 } else { x0 + 1.0 };
                let far_y = if y0 + 0.5 < 50.0 { y0 } else { y0 + 1.0 };
                let (_, farthest) = angle_and_distance(50.0, 50.0, 50.0, far_x, far_y);

                let alpha = argb(stride, &data, x, y)[0];
                if nearest > 1.0 + margin {
                    assert_eq!(alpha, 0, "pixel ({}, {}) outside the disc", x, y);
                } else if farthest < 1.0 - margin {
                    assert_eq!(alpha, 255, "pixel ({}, {}) inside the disc", x, y);
                }
            }
        }
    }

    #[test]
    fn test_wheel_center_is_white() {
        let (stride, data) = surface_bytes(render_to_surface(100, CircleBackground::Hsv).unwrap());
        assert_eq!(argb(stride, &data, 50, 50), [255, 255, 255, 255]);
        assert_eq!(argb(stride, &data, 0, 0)[0], 0);
        assert_eq!(argb(stride, &data, 99, 99)[0], 0);
    }

    #[test]
    fn test_plain_ring_double_stroke() {
        let (stride, data) =
            surface_bytes(render_to_surface(100, CircleBackground::Plain).unwrap());

        // The ring is centered on radius 48.5: at the top it spans y 0..3 for
        // the highlight and y 1..2 for the dark line.
        let outer = argb(stride, &data, 50, 0);
        let line = argb(stride, &data, 50, 1);
        let inner = argb(stride, &data, 50, 2);

        // Highlight only: translucent white, premultiplied
        for band in [outer, inner] {
            assert!((140..=166).contains(&band[0]), "highlight alpha {:?}", band);
            assert!(band[1].abs_diff(band[0]) <= 2, "highlight color {:?}", band);
            assert_eq!(band[1], band[3]);
        }

        // Dark line composited over the highlight
        assert!(line[0] >= 220, "line alpha {:?}", line);
        assert!(line[1] <= 45, "line color {:?}", line);

        // Nothing inside or outside the ring
        assert_eq!(argb(stride, &data, 50, 5)[0], 0);
        assert_eq!(argb(stride, &data, 50, 50)[0], 0);
        assert_eq!(argb(stride, &data, 0, 0)[0], 0);
    }

    #[test]
    fn test_plain_ring_is_symmetric() {
        let (stride, data) =
            surface_bytes(render_to_surface(100, CircleBackground::Plain).unwrap());

        let top = argb(stride, &data, 50, 1);
        let left = argb(stride, &data, 1, 50);
        let bottom = argb(stride, &data, 50, 98);
        let right = argb(stride, &data, 98, 50);

        for other in [left, bottom, right] {
            for channel in 0..4 {
                assert!(top[channel].abs_diff(other[channel]) <= 4, "{:?} vs {:?}", top, other);
            }
        }
    }

    #[test]
    fn test_draw_restores_context_state() {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 64, 64).unwrap();
        let cr = cairo::Context::new(&surface).unwrap();
        cr.set_line_width(7.0);

        draw_background(&cr, 64, CircleBackground::Plain).unwrap();
        assert_eq!(cr.line_width(), 7.0);

        draw_background(&cr, 64, CircleBackground::Hsv).unwrap();
        let (x1, y1, x2, y2) = cr.clip_extents().unwrap();
        assert_eq!((x1, y1, x2, y2), (0.0, 0.0, 64.0, 64.0));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        for background in [CircleBackground::Plain, CircleBackground::Hsv] {
            let (_, first) = surface_bytes(render_to_surface(96, background).unwrap());
            let (_, second) = surface_bytes(render_to_surface(96, background).unwrap());
            assert_eq!(first, second);
        }
    }
}
