//! Primitive 2D math: axis-masked vector helpers, sizes and bounds.
//!
//! Vectors are `glam::Vec2`, which is `Copy`; every helper here returns a new
//! value and never touches its operands.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One of the two world axes. The world is Y-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn perpendicular(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// Axis-only arithmetic on vectors.
pub trait AxisExt: Sized {
    fn plus_x(self, dx: f32) -> Self;
    fn plus_y(self, dy: f32) -> Self;
    fn minus_x(self, dx: f32) -> Self;
    fn minus_y(self, dy: f32) -> Self;
    /// Component along `axis`.
    fn axis(self, axis: Axis) -> f32;
    /// Copy of `self` with the `axis` component replaced.
    fn with_axis(self, axis: Axis, value: f32) -> Self;
}

impl AxisExt for Vec2 {
    fn plus_x(self, dx: f32) -> Self {
        Vec2::new(self.x + dx, self.y)
    }

    fn plus_y(self, dy: f32) -> Self {
        Vec2::new(self.x, self.y + dy)
    }

    fn minus_x(self, dx: f32) -> Self {
        Vec2::new(self.x - dx, self.y)
    }

    fn minus_y(self, dy: f32) -> Self {
        Vec2::new(self.x, self.y - dy)
    }

    fn axis(self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    fn with_axis(self, axis: Axis, value: f32) -> Self {
        match axis {
            Axis::X => Vec2::new(value, self.y),
            Axis::Y => Vec2::new(self.x, value),
        }
    }
}

/// Width/height pair used for hit boxes, draw boxes, tiles and viewports.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn set_width(&mut self, width: f32) -> &mut Self {
        self.width = width;
        self
    }

    pub fn set_height(&mut self, height: f32) -> &mut Self {
        self.height = height;
        self
    }

    /// Extent along `axis`.
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Axis-aligned rectangle derived from a position and a size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    pub fn new(pos: Vec2, size: Size) -> Self {
        Self {
            left: pos.x,
            top: pos.y,
            right: pos.x + size.width,
            bottom: pos.y + size.height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }

    /// Lower and upper edge along `axis`.
    pub fn span(&self, axis: Axis) -> (f32, f32) {
        match axis {
            Axis::X => (self.left, self.right),
            Axis::Y => (self.top, self.bottom),
        }
    }

    /// Strict overlap: rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }
}
