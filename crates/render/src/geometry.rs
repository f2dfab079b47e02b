//! Polar coordinates relative to the circle center

use std::f64::consts::TAU;

/// Angle and normalized distance of `(x, y)` around the center `(cx, cy)`.
///
/// The angle is in `[0, 2π)` and grows counter-clockwise on screen (the y
/// term is inverted because screen y points down). The distance is divided
/// by `radius`, so it is exactly 1.0 on the rim and above 1.0 outside.
pub fn angle_and_distance(cx: f64, cy: f64, radius: f64, x: f64, y: f64) -> (f64, f64) {
    let mut angle = (cy - y).atan2(x - cx);
    if angle < 0.0 {
        angle += TAU;
    }
    // A tiny negative angle can round up to a full turn
    if angle >= TAU {
        angle = 0.0;
    }

    let dx = x - cx;
    let dy = y - cy;
    let distance = ((dx * dx + dy * dy) / (radius * radius)).sqrt();

    (angle, distance)
}
