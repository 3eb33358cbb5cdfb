use serde::{Deserialize, Serialize};

/// A position in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An extent in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Places `other` below `self`: widths take the max, heights add up.
    #[must_use]
    pub fn stack_below(self, other: Size) -> Size {
        Size {
            width: self.width.max(other.width),
            height: self.height + other.height,
        }
    }

    #[must_use]
    pub fn grow(self, insets: Insets) -> Size {
        Size {
            width: self.width + insets.left + insets.right,
            height: self.height + insets.top + insets.bottom,
        }
    }
}

/// Decoration padding around a frame's content area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl Insets {
    pub const NONE: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            left: value,
            bottom: value,
            right: value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.origin.x + self.size.width / 2.0,
            y: self.origin.y + self.size.height / 2.0,
        }
    }

    /// Returns the origin that puts a rectangle of `size` at the center of
    /// `self`. On an axis where `size` does not fit, the origin is pinned to
    /// `self`'s origin instead so the leading edge stays inside.
    pub fn centered_origin(&self, size: Size) -> Point {
        Point {
            x: centered_axis(self.origin.x, self.size.width, size.width),
            y: centered_axis(self.origin.y, self.size.height, size.height),
        }
    }
}

fn centered_axis(start: f32, available: f32, extent: f32) -> f32 {
    if extent > available {
        start
    } else {
        start + (available - extent) / 2.0
    }
}
