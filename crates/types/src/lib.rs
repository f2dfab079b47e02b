//! circle-widget-types: Shared data types for the circle widget.
//!
//! Pure configuration and color types with no GTK dependency, so that the
//! render crate and the widget can share them and they can be tested
//! headless.

pub mod circle;
pub mod color;

pub use circle::{
    CircleBackground, CircleConfig, Invalidation, ParseBackgroundError, BORDER_WIDTH_RANGE,
    DEFAULT_BORDER_WIDTH, DEFAULT_SIZE, SIZE_RANGE,
};
pub use color::{hsv_to_rgb8, Color, Rgb8};
