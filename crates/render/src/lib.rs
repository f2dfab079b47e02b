//! circle-widget-render: pixel math and Cairo rendering for circle backgrounds.
//!
//! Nothing in here touches GTK, so every function can run against an
//! in-memory image surface.

pub mod circle_display;
pub mod geometry;
pub mod wheel;

pub use circle_display::{draw_background, render_to_surface};
pub use geometry::angle_and_distance;
pub use wheel::{hsv_background, WheelBuffer};
