use gtk4::prelude::*;
use gtk4::subclass::prelude::*;
use gtk4::{glib, graphene, EventController, EventControllerMotion, GestureClick, PropagationPhase};
use std::cell::{Cell, RefCell};

use circle_widget_render::draw_background;
use circle_widget_types::CircleConfig;

use super::{PointerEvent, PointerHandler};
use crate::ui::input_region::{RegionBounds, RegionLifecycle};

#[derive(Default)]
pub struct CircleWidget {
    pub config: Cell<CircleConfig>,
    pub lifecycle: RefCell<RegionLifecycle>,
    /// Event controllers backing the input region, present while realized
    pub controllers: RefCell<Vec<EventController>>,
    pub pointer_handlers: RefCell<Vec<PointerHandler>>,
}

#[glib::object_subclass]
impl ObjectSubclass for CircleWidget {
    const NAME: &'static str = "CircleWidget";
    type Type = super::CircleWidget;
    type ParentType = gtk4::Widget;

    fn class_init(klass: &mut Self::Class) {
        klass.set_css_name("circle");
    }
}

impl CircleWidget {
    fn allocation_bounds(&self) -> RegionBounds {
        let obj = self.obj();
        RegionBounds::new(0, 0, obj.width(), obj.height())
    }

    /// Route a pointer event from the controllers to the registered
    /// handlers, in circle-local coordinates
    pub(super) fn forward_pointer(&self, event: PointerEvent) {
        let (x, y) = event.position();
        if !self.lifecycle.borrow().accepts(x, y) {
            return;
        }

        let obj = self.obj();
        let (origin_x, origin_y) = self
            .config
            .get()
            .circle_origin(obj.width(), obj.height());
        let event = event.translated(-origin_x as f64, -origin_y as f64);

        // Handlers may register further handlers
        let handlers = self.pointer_handlers.borrow().clone();
        for handler in handlers {
            handler(&event);
        }
    }

    fn create_controllers(&self) -> Vec<EventController> {
        let obj = self.obj();

        let click = GestureClick::new();
        click.set_button(0);
        let widget = obj.downgrade();
        click.connect_pressed(move |gesture, _n_press, x, y| {
            if let Some(widget) = widget.upgrade() {
                let button = gesture.current_button();
                widget.imp().forward_pointer(PointerEvent::Pressed { x, y, button });
            }
        });
        let widget = obj.downgrade();
        click.connect_released(move |gesture, _n_press, x, y| {
            if let Some(widget) = widget.upgrade() {
                let button = gesture.current_button();
                widget.imp().forward_pointer(PointerEvent::Released { x, y, button });
            }
        });

        let motion = EventControllerMotion::new();
        let widget = obj.downgrade();
        motion.connect_motion(move |_, x, y| {
            if let Some(widget) = widget.upgrade() {
                widget.imp().forward_pointer(PointerEvent::Motion { x, y });
            }
        });

        vec![click.upcast(), motion.upcast()]
    }

    fn set_controllers_phase(&self, phase: PropagationPhase) {
        for controller in self.controllers.borrow().iter() {
            controller.set_propagation_phase(phase);
        }
    }
}

impl ObjectImpl for CircleWidget {}

impl WidgetImpl for CircleWidget {
    fn realize(&self) {
        self.parent_realize();

        let obj = self.obj();
        let controllers = self.create_controllers();
        for controller in &controllers {
            // Hidden until mapped
            controller.set_propagation_phase(PropagationPhase::None);
            obj.add_controller(controller.clone());
        }
        *self.controllers.borrow_mut() = controllers;

        self.lifecycle.borrow_mut().realize(self.allocation_bounds());
        log::debug!("circle realized at {:?}", self.allocation_bounds());
    }

    fn unrealize(&self) {
        let obj = self.obj();
        for controller in self.controllers.borrow_mut().drain(..) {
            obj.remove_controller(&controller);
        }
        self.lifecycle.borrow_mut().unrealize();
        log::debug!("circle unrealized");

        self.parent_unrealize();
    }

    fn map(&self) {
        self.parent_map();

        self.lifecycle.borrow_mut().map();
        if self.lifecycle.borrow().is_realized() {
            self.set_controllers_phase(PropagationPhase::Bubble);
        }
    }

    fn unmap(&self) {
        self.set_controllers_phase(PropagationPhase::None);
        self.lifecycle.borrow_mut().unmap();

        self.parent_unmap();
    }

    fn measure(&self, _orientation: gtk4::Orientation, _for_size: i32) -> (i32, i32, i32, i32) {
        let side = self.config.get().requisition();
        (side, side, -1, -1)
    }

    fn size_allocate(&self, width: i32, height: i32, baseline: i32) {
        self.parent_size_allocate(width, height, baseline);

        self.lifecycle
            .borrow_mut()
            .allocate(RegionBounds::new(0, 0, width, height));
    }

    fn snapshot(&self, snapshot: &gtk4::Snapshot) {
        let obj = self.obj();
        if !obj.is_drawable() {
            return;
        }

        let width = obj.width();
        let height = obj.height();
        let config = self.config.get();

        let cr = snapshot.append_cairo(&graphene::Rect::new(
            0.0,
            0.0,
            width as f32,
            height as f32,
        ));

        let (origin_x, origin_y) = config.circle_origin(width, height);
        cr.translate(origin_x as f64, origin_y as f64);

        if let Err(e) = draw_background(&cr, config.size(), config.background()) {
            log::error!("Failed to draw {} circle background: {}", config.background(), e);
        }
    }
}
