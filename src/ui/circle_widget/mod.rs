//! Circular control painting a ring or an HSV color wheel.
//!
//! The widget requests a square of `size + 2 * border_width` and centers the
//! circle inside whatever it is allocated. Pointer input is forwarded to
//! handlers registered with [`CircleWidget::connect_pointer`] while the
//! widget is realized and mapped.

mod imp;

use gtk4::glib;
use gtk4::prelude::*;
use gtk4::subclass::prelude::*;
use std::rc::Rc;

use circle_widget_types::{CircleBackground, CircleConfig, Invalidation};

/// Pointer input in circle coordinates (origin at the circle's top-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed { x: f64, y: f64, button: u32 },
    Released { x: f64, y: f64, button: u32 },
    Motion { x: f64, y: f64 },
}

impl PointerEvent {
    pub fn position(&self) -> (f64, f64) {
        match *self {
            PointerEvent::Pressed { x, y, .. }
            | PointerEvent::Released { x, y, .. }
            | PointerEvent::Motion { x, y } => (x, y),
        }
    }

    fn translated(self, dx: f64, dy: f64) -> Self {
        match self {
            PointerEvent::Pressed { x, y, button } => PointerEvent::Pressed {
                x: x + dx,
                y: y + dy,
                button,
            },
            PointerEvent::Released { x, y, button } => PointerEvent::Released {
                x: x + dx,
                y: y + dy,
                button,
            },
            PointerEvent::Motion { x, y } => PointerEvent::Motion {
                x: x + dx,
                y: y + dy,
            },
        }
    }
}

pub type PointerHandler = Rc<dyn Fn(&PointerEvent)>;

glib::wrapper! {
    pub struct CircleWidget(ObjectSubclass<imp::CircleWidget>)
        @extends gtk4::Widget,
        @implements gtk4::Accessible, gtk4::Buildable, gtk4::ConstraintTarget;
}

impl CircleWidget {
    pub fn new() -> Self {
        glib::Object::new()
    }

    pub fn with_config(config: CircleConfig) -> Self {
        let widget = Self::new();
        widget.imp().config.set(config.normalized());
        widget
    }

    pub fn config(&self) -> CircleConfig {
        self.imp().config.get()
    }

    pub fn size(&self) -> i32 {
        self.config().size()
    }

    pub fn set_size(&self, size: i32) {
        self.update(|config| config.set_size(size));
    }

    pub fn border_width(&self) -> i32 {
        self.config().border_width()
    }

    pub fn set_border_width(&self, border_width: i32) {
        self.update(|config| config.set_border_width(border_width));
    }

    pub fn background(&self) -> CircleBackground {
        self.config().background()
    }

    pub fn set_background(&self, background: CircleBackground) {
        self.update(|config| config.set_background(background));
    }

    /// Register a handler for pointer input over the widget
    pub fn connect_pointer<F: Fn(&PointerEvent) + 'static>(&self, handler: F) {
        self.imp()
            .pointer_handlers
            .borrow_mut()
            .push(Rc::new(handler));
    }

    fn update<F: FnOnce(&mut CircleConfig) -> Invalidation>(&self, change: F) {
        let imp = self.imp();
        let mut config = imp.config.get();
        let invalidation = change(&mut config);
        imp.config.set(config);

        match invalidation {
            Invalidation::None => {}
            Invalidation::Redraw => self.queue_draw(),
            Invalidation::Resize => self.queue_resize(),
        }
    }
}

impl Default for CircleWidget {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_event_translation_keeps_kind() {
        let pressed = PointerEvent::Pressed { x: 60.0, y: 40.0, button: 1 };
        assert_eq!(
            pressed.translated(-10.0, -20.0),
            PointerEvent::Pressed { x: 50.0, y: 20.0, button: 1 }
        );

        let motion = PointerEvent::Motion { x: 1.5, y: 2.5 };
        assert_eq!(motion.translated(1.0, 1.0).position(), (2.5, 3.5));

        let released = PointerEvent::Released { x: 0.0, y: 0.0, button: 3 };
        assert_eq!(
            released.translated(5.0, 5.0),
            PointerEvent::Released { x: 5.0, y: 5.0, button: 3 }
        );
    }
}
