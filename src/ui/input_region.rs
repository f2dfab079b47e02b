//! Input region bookkeeping for the circle widget.
//!
//! GTK4 has no input-only child windows, so the region is a rectangle plus a
//! visibility flag. `RegionLifecycle` follows the widget through
//! realize/map/unmap/unrealize: the region exists only while the widget is
//! realized and is visible only while it is also mapped.

/// Rectangle in widget coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionBounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl RegionBounds {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x as f64
            && y >= self.y as f64
            && x < (self.x + self.width) as f64
            && y < (self.y + self.height) as f64
    }
}

/// Event-receiving area owned by one widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRegion {
    bounds: RegionBounds,
    visible: bool,
}

impl InputRegion {
    fn new(bounds: RegionBounds) -> Self {
        Self {
            bounds,
            visible: false,
        }
    }

    pub fn bounds(&self) -> RegionBounds {
        self.bounds
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// True if the region is shown and covers the point
    pub fn accepts(&self, x: f64, y: f64) -> bool {
        self.visible && self.bounds.contains(x, y)
    }
}

#[derive(Debug, Default)]
pub struct RegionLifecycle {
    realized: bool,
    mapped: bool,
    region: Option<InputRegion>,
}

impl RegionLifecycle {
    pub fn realize(&mut self, bounds: RegionBounds) {
        self.realized = true;
        let mut region = InputRegion::new(bounds);
        region.visible = self.mapped;
        self.region = Some(region);
    }

    pub fn unrealize(&mut self) {
        self.realized = false;
        self.region = None;
    }

    pub fn map(&mut self) {
        self.mapped = true;
        if let Some(region) = self.region.as_mut() {
            region.visible = true;
        }
    }

    pub fn unmap(&mut self) {
        self.mapped = false;
        if let Some(region) = self.region.as_mut() {
            region.visible = false;
        }
    }

    /// Follow a new allocation. Ignored while unrealized; `realize` picks up
    /// the current allocation itself.
    pub fn allocate(&mut self, bounds: RegionBounds) {
        if let Some(region) = self.region.as_mut() {
            region.bounds = bounds;
        }
    }

    pub fn region(&self) -> Option<&InputRegion> {
        self.region.as_ref()
    }

    pub fn is_realized(&self) -> bool {
        self.realized
    }

    pub fn is_mapped(&self) -> bool {
        self.mapped
    }

    pub fn accepts(&self, x: f64, y: f64) -> bool {
        self.region.as_ref().is_some_and(|region| region.accepts(x, y))
    }
}
