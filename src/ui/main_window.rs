//! Main application window contents: the circle plus a status line

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Label, ToggleButton, Widget};

use circle_widget_types::{CircleBackground, CircleConfig};

use super::{CircleWidget, PointerEvent};

pub struct MainWindow {
    container: GtkBox,
    circle: CircleWidget,
}

impl MainWindow {
    pub fn new(config: CircleConfig) -> Self {
        let container = GtkBox::new(gtk4::Orientation::Vertical, 6);
        container.set_margin_top(12);
        container.set_margin_bottom(12);
        container.set_margin_start(12);
        container.set_margin_end(12);

        let circle = CircleWidget::with_config(config);
        circle.set_halign(gtk4::Align::Center);
        circle.set_valign(gtk4::Align::Center);
        circle.set_vexpand(true);

        let status = Label::new(Some(""));
        status.add_css_class("dim-label");

        let status_clone = status.clone();
        circle.connect_pointer(move |event| {
            let text = match event {
                PointerEvent::Pressed { x, y, button } => {
                    log::info!("pressed button {} at ({:.1}, {:.1})", button, x, y);
                    format!("Pressed {} at {:.0}, {:.0}", button, x, y)
                }
                PointerEvent::Released { x, y, button } => {
                    log::info!("released button {} at ({:.1}, {:.1})", button, x, y);
                    format!("Released {} at {:.0}, {:.0}", button, x, y)
                }
                PointerEvent::Motion { x, y } => {
                    log::trace!("motion at ({:.1}, {:.1})", x, y);
                    format!("{:.0}, {:.0}", x, y)
                }
            };
            status_clone.set_text(&text);
        });

        // Switch between ring and wheel
        let wheel_toggle = ToggleButton::with_label("HSV wheel");
        wheel_toggle.set_active(config.background() == CircleBackground::Hsv);
        wheel_toggle.set_halign(gtk4::Align::Center);
        let circle_clone = circle.clone();
        wheel_toggle.connect_toggled(move |toggle| {
            let background = if toggle.is_active() {
                CircleBackground::Hsv
            } else {
                CircleBackground::Plain
            };
            circle_clone.set_background(background);
        });

        container.append(&circle);
        container.append(&wheel_toggle);
        container.append(&status);

        Self { container, circle }
    }

    pub fn widget(&self) -> Widget {
        self.container.clone().upcast()
    }

    pub fn circle(&self) -> &CircleWidget {
        &self.circle
    }
}

impl Default for MainWindow {
    fn default() -> Self {
        Self::new(CircleConfig::default())
    }
}
