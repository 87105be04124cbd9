//! Line segments with exact, closed-form intersection
//!
//! Intersecting the swept path of a ball corner against a paddle edge is how
//! fast balls are caught: at top speed the ball moves several paddle widths
//! per frame, so an overlap test alone would let it pass straight through.

use serde::Serialize;

use super::Point;

/// The infinite line through a segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Line {
    /// x = constant
    Vertical { x: f64 },
    /// y = slope * x + intercept
    Sloped { slope: f64, intercept: f64 },
}

impl Line {
    /// y on this line at `x` (None for vertical lines)
    pub fn y_at(&self, x: f64) -> Option<f64> {
        match self {
            Line::Vertical { .. } => None,
            Line::Sloped { slope, intercept } => Some(slope * x + intercept),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn line(&self) -> Line {
        let diff_x = self.end.x - self.start.x;
        let diff_y = self.end.y - self.start.y;
        if diff_x == 0.0 {
            Line::Vertical { x: self.start.x }
        } else {
            let slope = diff_y / diff_x;
            Line::Sloped {
                slope,
                intercept: self.start.y - slope * self.start.x,
            }
        }
    }

    /// (min x, max x)
    pub fn domain(&self) -> (f64, f64) {
        (self.start.x.min(self.end.x), self.start.x.max(self.end.x))
    }

    /// (min y, max y)
    pub fn range(&self) -> (f64, f64) {
        (self.start.y.min(self.end.y), self.start.y.max(self.end.y))
    }

    pub fn in_domain(&self, x: f64) -> bool {
        let (min, max) = self.domain();
        min <= x && x <= max
    }

    pub fn in_range(&self, y: f64) -> bool {
        let (min, max) = self.range();
        min <= y && y <= max
    }

    /// Point where the two segments cross, if any
    ///
    /// Parallel segments never intersect, collinear ones included. The point
    /// must fall inside both segments' bounding boxes (inclusive).
    pub fn intersection(&self, other: &Segment) -> Option<Point> {
        let (x, y) = match (self.line(), other.line()) {
            (Line::Vertical { .. }, Line::Vertical { .. }) => return None,
            (Line::Vertical { x }, theirs @ Line::Sloped { .. }) => (x, theirs.y_at(x)?),
            (ours @ Line::Sloped { .. }, Line::Vertical { x }) => (x, ours.y_at(x)?),
            (
                Line::Sloped {
                    slope: m1,
                    intercept: b1,
                },
                Line::Sloped {
                    slope: m2,
                    intercept: b2,
                },
            ) => {
                if m1 == m2 {
                    return None;
                }
                let x = (b2 - b1) / (m1 - m2);
                (x, m1 * x + b1)
            }
        };

        let within = |seg: &Segment| seg.in_domain(x) && seg.in_range(y);
        if within(self) && within(other) {
            Some(Point::new(x, y))
        } else {
            None
        }
    }
}
