//! Circle widget configuration.
//!
//! Values are clamped at this boundary so that everything downstream (layout,
//! rasterizer) can assume they are in range.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;

/// Allowed circle diameters in pixels
pub const SIZE_RANGE: RangeInclusive<i32> = 32..=1024;
pub const DEFAULT_SIZE: i32 = 96;

/// Allowed extra inset around the circle in pixels
pub const BORDER_WIDTH_RANGE: RangeInclusive<i32> = 0..=64;
pub const DEFAULT_BORDER_WIDTH: i32 = 0;

/// Background painted inside the circle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum CircleBackground {
    /// Ring outline only
    #[serde(rename = "plain")]
    Plain,
    /// Raster HSV color wheel
    #[serde(rename = "hsv")]
    #[default]
    Hsv,
}

impl CircleBackground {
    pub fn name(&self) -> &'static str {
        match self {
            CircleBackground::Plain => "plain",
            CircleBackground::Hsv => "hsv",
        }
    }
}

impl fmt::Display for CircleBackground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown circle background '{0}' (expected 'plain' or 'hsv')")]
pub struct ParseBackgroundError(pub String);

impl FromStr for CircleBackground {
    type Err = ParseBackgroundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(CircleBackground::Plain),
            "hsv" => Ok(CircleBackground::Hsv),
            _ => Err(ParseBackgroundError(s.to_string())),
        }
    }
}

/// What a configuration change requires from the owning widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalidation {
    /// Nothing changed
    None,
    /// Appearance changed, geometry did not
    Redraw,
    /// Requested geometry changed
    Resize,
}

/// Size, inset and background of a circle widget
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CircleConfig {
    #[serde(default = "default_size")]
    size: i32,
    #[serde(default)]
    border_width: i32,
    #[serde(default)]
    background: CircleBackground,
}

fn default_size() -> i32 {
    DEFAULT_SIZE
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            border_width: DEFAULT_BORDER_WIDTH,
            background: CircleBackground::default(),
        }
    }
}

fn clamp_logged(name: &str, value: i32, range: &RangeInclusive<i32>) -> i32 {
    let clamped = value.clamp(*range.start(), *range.end());
    if clamped != value {
        log::warn!(
            "{} {} out of range {}..={}, using {}",
            name,
            value,
            range.start(),
            range.end(),
            clamped
        );
    }
    clamped
}

impl CircleConfig {
    /// Build a config, clamping `size` and `border_width` into range
    pub fn new(size: i32, border_width: i32, background: CircleBackground) -> Self {
        Self {
            size: clamp_logged("size", size, &SIZE_RANGE),
            border_width: clamp_logged("border-width", border_width, &BORDER_WIDTH_RANGE),
            background,
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn border_width(&self) -> i32 {
        self.border_width
    }

    pub fn background(&self) -> CircleBackground {
        self.background
    }

    pub fn set_size(&mut self, size: i32) -> Invalidation {
        let size = clamp_logged("size", size, &SIZE_RANGE);
        if size == self.size {
            return Invalidation::None;
        }
        self.size = size;
        Invalidation::Resize
    }

    pub fn set_border_width(&mut self, border_width: i32) -> Invalidation {
        let border_width = clamp_logged("border-width", border_width, &BORDER_WIDTH_RANGE);
        if border_width == self.border_width {
            return Invalidation::None;
        }
        self.border_width = border_width;
        Invalidation::Resize
    }

    pub fn set_background(&mut self, background: CircleBackground) -> Invalidation {
        if background == self.background {
            return Invalidation::None;
        }
        self.background = background;
        Invalidation::Redraw
    }

    /// Re-apply the range limits, e.g. after deserializing from a file
    pub fn normalized(self) -> Self {
        Self::new(self.size, self.border_width, self.background)
    }

    /// Side length of the square the widget requests: the circle plus the
    /// border on both sides
    pub fn requisition(&self) -> i32 {
        self.size + 2 * self.border_width
    }

    /// Top-left corner of the circle's square inside an allocation of
    /// `width` x `height`, centered with integer division
    pub fn circle_origin(&self, width: i32, height: i32) -> (i32, i32) {
        ((width - self.size) / 2, (height - self.size) / 2)
    }
}
