//! The automated opponent
//!
//! Never tired, never hungry: it projects the ball's straight-line path to
//! its own paddle, bouncing the projection off the top and bottom of the
//! field the same way the ball bounces, and moves to meet it.

use serde::Serialize;

use super::ball::Ball;
use super::controller::Controller;
use super::paddle::Paddle;
use crate::consts::DEBUG_PATH_COLOR;
use crate::geometry::{Color, Point, Rect, Vector};
use crate::platform::KeySet;

/// Below this |cos(angle)| the ball is treated as moving vertically
const MIN_COSINE: f64 = 1e-9;

/// Which half of the screen a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    Left,
    Right,
}

/// Waypoints of the latest prediction, for the debug overlay
#[derive(Debug, Clone, Serialize)]
pub struct Path {
    pub points: Vec<Point>,
    pub color: Color,
}

impl Default for Path {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            color: DEBUG_PATH_COLOR,
        }
    }
}

impl Path {
    pub fn add(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// A polyline needs at least two points
    pub fn is_drawable(&self) -> bool {
        self.points.len() > 1
    }
}

/// Outcome of projecting the ball to a paddle's x position
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Prediction {
    /// Where the ball's center will cross the target x
    Intercept(Point),
    /// Needs more wall bounces than we are willing to simulate
    Exhausted,
    /// Ball moves vertically or away from the target, it never arrives
    Unreachable,
}

#[derive(Debug, Clone)]
pub struct Opponent {
    pub paddle: Paddle,
    side: Side,
    /// Where the ball's center can travel: the screen inset by half a ball
    field: Rect,
    prediction: Path,
    sweet_spot_radius: f64,
    max_reflections: u32,
}

impl Opponent {
    pub fn new(paddle: Paddle, side: Side, field: Rect, max_reflections: u32) -> Self {
        let sweet_spot_radius = paddle.rect.height / 2.0;
        Self {
            paddle,
            side,
            field,
            prediction: Path::default(),
            sweet_spot_radius,
            max_reflections,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn path(&self) -> &Path {
        &self.prediction
    }

    /// Decide this frame's move
    pub fn play(&mut self, ball: &Ball) {
        self.prediction.clear();
        if !self.is_ball_incoming(ball) {
            self.paddle.recenter();
            return;
        }

        let target_x = match self.side {
            Side::Left => self.paddle.rect.right() + ball.rect.width / 2.0,
            Side::Right => self.paddle.rect.left - ball.rect.width / 2.0,
        };
        let prediction =
            self.predict_intercept(ball.rect.center(), ball.vector, target_x, self.max_reflections);
        log::trace!("{:?} opponent predicts {:?}", self.side, prediction);

        match prediction {
            Prediction::Intercept(intercept) => {
                let center = self.paddle.rect.center().y;
                if intercept.y < center - self.sweet_spot_radius {
                    self.paddle.up();
                } else if intercept.y > center + self.sweet_spot_radius {
                    self.paddle.down();
                }
            }
            Prediction::Exhausted => {}
            Prediction::Unreachable => self.paddle.recenter(),
        }
    }

    /// Project `start` along `vector` to `intercept_x`
    ///
    /// Whenever the projection leaves the field through the top or bottom,
    /// it restarts from the exit point with the vector reflected, for at
    /// most `max_reflections` bounces. Waypoints go to the debug path.
    pub fn predict_intercept(
        &mut self,
        start: Point,
        vector: Vector,
        intercept_x: f64,
        max_reflections: u32,
    ) -> Prediction {
        let field = self.field;
        // The field may be inverted (top > bottom) on a screen shorter than a ball
        let mut start = Point::new(start.x, start.y.max(field.top).min(field.bottom()));
        let mut vector = vector;
        let mut reflections_left = max_reflections;

        loop {
            self.prediction.add(start);
            let radians = vector.angle().to_radians();
            let cos = radians.cos();
            let diff_x = intercept_x - start.x;
            if cos.abs() < MIN_COSINE || diff_x * cos < 0.0 {
                return Prediction::Unreachable;
            }

            let tan = radians.tan();
            // Screen y grows downward, hence the minus
            let projected_y = start.y - diff_x * tan;
            if field.top <= projected_y && projected_y <= field.bottom() {
                let intercept = Point::new(intercept_x, projected_y);
                self.prediction.add(intercept);
                return Prediction::Intercept(intercept);
            }
            if reflections_left == 0 {
                return Prediction::Exhausted;
            }

            let edge_y = if projected_y < field.top {
                field.top
            } else {
                field.bottom()
            };
            let run = ((edge_y - start.y) / tan).abs();
            start = Point::new(start.x + run.copysign(cos), edge_y);
            vector = vector.reflect_vertically();
            reflections_left -= 1;
        }
    }

    fn is_ball_incoming(&self, ball: &Ball) -> bool {
        match self.side {
            Side::Left => {
                ball.vector.is_heading_left() && ball.rect.right() >= self.paddle.rect.right()
            }
            Side::Right => {
                ball.vector.is_heading_right() && ball.rect.left <= self.paddle.rect.left
            }
        }
    }
}

impl Controller for Opponent {
    fn advance(&mut self, _keys: &KeySet, ball: &Ball) {
        self.play(ball);
    }

    fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    fn paddle_mut(&mut self) -> &mut Paddle {
        &mut self.paddle
    }

    fn is_human(&self) -> bool {
        false
    }

    fn prediction(&self) -> Option<&Path> {
        Some(&self.prediction)
    }
}
