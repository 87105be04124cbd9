//! Geometry for a screen with y growing downward
//!
//! Everything the collision code needs and nothing more: polar vectors,
//! line segments with exact intersection, and axis-aligned rects.

pub mod rect;
pub mod segment;
pub mod vector;

use serde::Serialize;

pub use rect::Rect;
pub use segment::{Line, Segment};
pub use vector::Vector;

/// A point in screen space
pub type Point = glam::DVec2;

/// RGB display color (presentation only, never read by the physics)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One value per rect side
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Sides<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl Sides<bool> {
    pub fn any(&self) -> bool {
        self.top || self.right || self.bottom || self.left
    }
}

impl<T> Sides<Option<T>> {
    pub fn any_some(&self) -> bool {
        self.top.is_some() || self.right.is_some() || self.bottom.is_some() || self.left.is_some()
    }
}

/// One value per rect corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Corners<T> {
    pub top_left: T,
    pub top_right: T,
    pub bottom_right: T,
    pub bottom_left: T,
}

impl<T> Corners<T> {
    /// Values in clockwise order starting top-left
    pub fn into_array(self) -> [T; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }
}
