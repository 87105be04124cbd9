//! Polar velocity vectors
//!
//! Angles are degrees counter-clockwise from the positive x axis, as seen on
//! screen. Because screen y grows downward, a vector at 90° moves *up* and
//! its Cartesian y component is negative.

use serde::Serialize;

use super::Point;
use crate::normalize_degrees;

/// An immutable velocity in polar form
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vector {
    /// Degrees, always in [0, 360)
    angle: f64,
    magnitude: f64,
}

impl Vector {
    pub fn new(angle: f64, magnitude: f64) -> Self {
        Self {
            angle: normalize_degrees(angle),
            magnitude,
        }
    }

    /// Build a vector from a screen-space delta
    pub fn from_cartesian(x: f64, y: f64) -> Self {
        let magnitude = (x * x + y * y).sqrt();
        // Flip into math orientation (y up) before taking the arctangent
        let y = -y;
        let angle = if x == 0.0 {
            if y >= 0.0 { 90.0 } else { 270.0 }
        } else {
            y.atan2(x).to_degrees()
        };
        Self::new(angle, magnitude)
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn with_angle(&self, angle: f64) -> Self {
        Self::new(angle, self.magnitude)
    }

    pub fn with_magnitude(&self, magnitude: f64) -> Self {
        Self::new(self.angle, magnitude)
    }

    /// Screen-space delta of this vector
    ///
    /// Axis-aligned angles are snapped so a paddle moving straight up never
    /// drifts sideways through trigonometric error.
    pub fn to_cartesian(&self) -> Point {
        let radians = self.angle.to_radians();
        let mut x = self.magnitude * radians.cos();
        let mut y = -self.magnitude * radians.sin();
        if self.angle == 0.0 {
            (x, y) = (self.magnitude, 0.0);
        } else if self.angle == 90.0 {
            (x, y) = (0.0, -self.magnitude);
        } else if self.angle == 180.0 {
            (x, y) = (-self.magnitude, 0.0);
        } else if self.angle == 270.0 {
            (x, y) = (0.0, self.magnitude);
        }
        Point::new(x, y)
    }

    /// Bounce off a vertical surface (`horizontally`) and/or a horizontal one
    /// (`vertically`). The vertical reflection is applied second.
    pub fn reflect(&self, horizontally: bool, vertically: bool) -> Self {
        let mut angle = self.angle;
        if horizontally {
            angle = normalize_degrees(360.0 - (angle - 180.0));
        }
        if vertically {
            angle = normalize_degrees(360.0 - angle);
        }
        Self::new(angle, self.magnitude)
    }

    pub fn reflect_horizontally(&self) -> Self {
        self.reflect(true, false)
    }

    pub fn reflect_vertically(&self) -> Self {
        self.reflect(false, true)
    }

    pub fn is_heading_left(&self) -> bool {
        90.0 < self.angle && self.angle < 270.0
    }

    pub fn is_heading_right(&self) -> bool {
        self.angle < 90.0 || self.angle > 270.0
    }

    pub fn is_heading_up(&self) -> bool {
        0.0 < self.angle && self.angle < 180.0
    }

    pub fn is_heading_down(&self) -> bool {
        self.angle > 180.0
    }
}
