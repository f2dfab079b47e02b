//! UI components

mod circle_widget;
mod input_region;
mod main_window;

pub use circle_widget::{CircleWidget, PointerEvent, PointerHandler};
pub use input_region::{InputRegion, RegionBounds, RegionLifecycle};
pub use main_window::MainWindow;
