//! Axis-aligned rectangles in screen space

use serde::Serialize;

use super::{Color, Corners, Point, Segment, Sides, Vector};

/// Position and size of a ball, paddle or the screen itself
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Fill color when drawn
    pub color: Option<Color>,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
            color: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Move horizontally so the right edge sits at `right`
    pub fn set_right(&mut self, right: f64) {
        self.left = right - self.width;
    }

    /// Move vertically so the bottom edge sits at `bottom`
    pub fn set_bottom(&mut self, bottom: f64) {
        self.top = bottom - self.height;
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn corners(&self) -> Corners<Point> {
        Corners {
            top_left: Point::new(self.left, self.top),
            top_right: Point::new(self.right(), self.top),
            bottom_right: Point::new(self.right(), self.bottom()),
            bottom_left: Point::new(self.left, self.bottom()),
        }
    }

    /// The four edges, each running left-to-right or top-to-bottom
    pub fn segments(&self) -> Sides<Segment> {
        let c = self.corners();
        Sides {
            top: Segment::new(c.top_left, c.top_right),
            right: Segment::new(c.top_right, c.bottom_right),
            bottom: Segment::new(c.bottom_left, c.bottom_right),
            left: Segment::new(c.top_left, c.bottom_left),
        }
    }

    /// Whether `other` lies strictly inside this rect
    pub fn contains(&self, other: &Rect) -> bool {
        self.left < other.left
            && self.top < other.top
            && self.right() > other.right()
            && self.bottom() > other.bottom()
    }

    /// Inclusive overlap test (touching edges count)
    pub fn collides(&self, other: &Rect) -> bool {
        self.left <= other.right()
            && self.right() >= other.left
            && self.top <= other.bottom()
            && self.bottom() >= other.top
    }

    /// Which of our edges touch or cross the edges of `container`
    pub fn uncontained_edges(&self, container: &Rect) -> Sides<bool> {
        if container.contains(self) {
            return Sides::default();
        }
        Sides {
            top: self.top <= container.top,
            right: self.right() >= container.right(),
            bottom: self.bottom() >= container.bottom(),
            left: self.left <= container.left,
        }
    }

    /// Which of our edges lie within the span of `other`
    pub fn overlapping_edges(&self, other: &Rect) -> Sides<bool> {
        if !self.collides(other) {
            return Sides::default();
        }
        let in_x = |x: f64| other.left <= x && x <= other.right();
        let in_y = |y: f64| other.top <= y && y <= other.bottom();
        Sides {
            top: in_y(self.top),
            right: in_x(self.right()),
            bottom: in_y(self.bottom()),
            left: in_x(self.left),
        }
    }

    /// Translate by the vector's screen-space delta
    pub fn move_by(&mut self, vector: &Vector) {
        let delta = vector.to_cartesian();
        self.left += delta.x;
        self.top += delta.y;
    }

    /// Shrink by `dx` on the left and right and `dy` on the top and bottom
    pub fn inset(&self, dx: f64, dy: f64) -> Rect {
        Rect {
            left: self.left + dx,
            top: self.top + dy,
            width: self.width - 2.0 * dx,
            height: self.height - 2.0 * dy,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Rect {
        Rect::new(15.0, 20.0, 60.0, 80.0)
    }

    #[test]
    fn test_derived_edges() {
        let rect = sample();
        assert_eq!(rect.left, 15.0);
        assert_eq!(rect.top, 20.0);
        assert_eq!(rect.right(), 75.0);
        assert_eq!(rect.bottom(), 100.0);
        assert_eq!(rect.center(), Point::new(45.0, 60.0));
    }

    #[test]
    fn test_setters_keep_size() {
        let mut rect = sample();
        rect.set_right(200.0);
        rect.set_bottom(300.0);
        assert_eq!(rect.left, 140.0);
        assert_eq!(rect.top, 220.0);
        assert_eq!(rect.width, 60.0);
    }

    #[test]
    fn test_contains_is_strict() {
        let rect = sample();
        assert!(rect.contains(&Rect::new(16.0, 21.0, 10.0, 10.0)));
        assert!(!rect.contains(&Rect::new(13.0, 19.0, 10.0, 10.0)));
        assert!(!rect.contains(&Rect::new(15.0, 21.0, 10.0, 10.0)));
    }

    #[test]
    fn test_collides_counts_touching() {
        let rect = sample();
        assert!(rect.collides(&Rect::new(13.0, 19.0, 10.0, 10.0)));
        assert!(rect.collides(&Rect::new(75.0, 100.0, 5.0, 5.0)));
        assert!(!rect.collides(&Rect::new(76.0, 20.0, 5.0, 5.0)));
    }

    #[test]
    fn test_uncontained_edges() {
        let screen = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(!Rect::new(10.0, 10.0, 10.0, 10.0).uncontained_edges(&screen).any());

        let edges = Rect::new(-5.0, 95.0, 10.0, 10.0).uncontained_edges(&screen);
        assert!(edges.left && edges.bottom);
        assert!(!edges.right && !edges.top);
    }

    #[test]
    fn test_overlapping_edges() {
        let paddle = Rect::new(100.0, 100.0, 10.0, 100.0);
        let ball = Rect::new(95.0, 150.0, 10.0, 10.0);
        let edges = ball.overlapping_edges(&paddle);
        assert!(edges.right && edges.top && edges.bottom);
        assert!(!edges.left);
        assert!(!Rect::new(0.0, 0.0, 5.0, 5.0).overlapping_edges(&paddle).any());
    }

    #[test]
    fn test_segments_follow_corners() {
        let rect = sample();
        let sides = rect.segments();
        assert_eq!(sides.top.start, Point::new(15.0, 20.0));
        assert_eq!(sides.top.end, Point::new(75.0, 20.0));
        assert_eq!(sides.right.end, Point::new(75.0, 100.0));
        assert_eq!(sides.left.end, Point::new(15.0, 100.0));
    }

    #[test]
    fn test_move_by_vector() {
        let mut rect = sample();
        rect.move_by(&Vector::new(270.0, 10.0));
        assert_eq!(rect.top, 30.0);
        assert!((rect.left - 15.0).abs() < 1e-9);
        rect.move_by(&Vector::new(0.0, 5.0));
        assert!((rect.left - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_inset() {
        let screen = Rect::new(0.0, 0.0, 1600.0, 1000.0);
        let field = screen.inset(0.0, 10.0);
        assert_eq!(field.top, 10.0);
        assert_eq!(field.bottom(), 990.0);
        assert_eq!(field.right(), 1600.0);
    }
}
