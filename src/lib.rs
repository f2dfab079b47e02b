//! circle-widget: a circular GTK4 control with a ring or HSV wheel background.
//!
//! This library provides:
//! - The `CircleWidget` GTK4 widget and its input region handling
//! - Configuration management
//!
//! The pixel math and Cairo drawing live in `circle-widget-render`, the
//! shared configuration types in `circle-widget-types`.

pub mod config;
pub mod ui;

// Re-export commonly used types
pub use circle_widget_types::{CircleBackground, CircleConfig};
pub use config::AppConfig;
pub use ui::{CircleWidget, PointerEvent};
