//! The ball: wall bounces, paddle hits and sauce

use serde::Serialize;

use super::paddle::Paddle;
use crate::consts::{BALL_COLOR, BALL_HEIGHT, BALL_WIDTH};
use crate::geometry::{Point, Rect, Segment, Sides, Vector};
use crate::tuning::BallTuning;

#[derive(Debug, Clone, Serialize)]
pub struct Ball {
    pub rect: Rect,
    pub vector: Vector,
    /// Spin from the last paddle hit, spent on the next update
    pub sauce: i32,
    #[serde(skip)]
    tuning: BallTuning,
}

impl Ball {
    /// A ball at the center of `screen`, served at the start angle
    pub fn new(screen: &Rect, tuning: BallTuning) -> Self {
        let center = screen.center();
        let rect = Rect::new(
            center.x - BALL_WIDTH / 2.0,
            center.y - BALL_HEIGHT / 2.0,
            BALL_WIDTH,
            BALL_HEIGHT,
        )
        .with_color(BALL_COLOR);
        Self {
            rect,
            vector: Vector::new(tuning.start_angle, tuning.min_speed),
            sauce: 0,
            tuning,
        }
    }

    pub fn tuning(&self) -> &BallTuning {
        &self.tuning
    }

    /// Bounce off the screen boundary
    ///
    /// A protruding ball is pulled one unit back inside so it cannot stick to
    /// the edge and re-trigger every frame. It only reflects when travelling
    /// into the edge it touches. Returns whether it bounced.
    pub fn handle_screen_edges(&mut self, screen: &Rect) -> bool {
        let edges = self.rect.uncontained_edges(screen);
        if !edges.any() {
            return false;
        }

        let reflect_h = (edges.left && self.vector.is_heading_left())
            || (edges.right && self.vector.is_heading_right());
        let reflect_v = (edges.top && self.vector.is_heading_up())
            || (edges.bottom && self.vector.is_heading_down());

        if edges.bottom {
            self.rect.set_bottom(screen.bottom() - 1.0);
        } else if edges.top {
            self.rect.top = screen.top + 1.0;
        }
        if edges.right {
            self.rect.set_right(screen.right() - 1.0);
        } else if edges.left {
            self.rect.left = screen.left + 1.0;
        }

        self.vector = self.vector.reflect(reflect_h, reflect_v);
        if reflect_h || reflect_v {
            log::debug!("ball bounced off screen edge, angle now {:.1}", self.vector.angle());
        }
        reflect_h || reflect_v
    }

    /// Bounce off `paddle` if this frame's movement would cross it
    ///
    /// Each corner of the ball is swept along the velocity and tested
    /// against each side of the paddle, so a ball moving faster than the
    /// paddle is wide still connects. Returns whether the paddle was hit.
    pub fn handle_paddle_collision(&mut self, paddle: &Paddle) -> bool {
        let going_left = self.vector.is_heading_left();
        let going_up = self.vector.is_heading_up();
        let ball_y = self.rect.center().y;

        let origin = Point::new(self.rect.left, self.rect.top);
        let delta = self.vector.to_cartesian();
        let corners = self.rect.corners().into_array();
        let sweeps = corners.map(|corner| (Segment::new(corner, corner + delta), corner - origin));

        // Faces the ball is travelling toward; a corner crossing any other
        // face is leaving the paddle, not hitting it
        let facing = Sides {
            top: self.vector.is_heading_down(),
            right: going_left,
            bottom: going_up,
            left: self.vector.is_heading_right(),
        };

        // First corner to cross each paddle side, with that corner's offset
        // from the ball's top-left
        let segments = paddle.rect.segments();
        let first_hit = |side: Segment, facing: bool| {
            if !facing {
                return None;
            }
            sweeps
                .iter()
                .find_map(|(sweep, offset)| sweep.intersection(&side).map(|hit| (hit, *offset)))
        };
        let hits: Sides<Option<(Point, Point)>> = Sides {
            top: first_hit(segments.top, facing.top),
            right: first_hit(segments.right, facing.right),
            bottom: first_hit(segments.bottom, facing.bottom),
            left: first_hit(segments.left, facing.left),
        };
        if !hits.any_some() {
            return false;
        }

        self.vector = self.vector.reflect_horizontally();
        if going_left {
            if let Some((hit, offset)) = hits.right {
                self.rect.left = hit.x + 1.0;
                self.rect.top = hit.y - offset.y;
            }
        } else if let Some((hit, offset)) = hits.left {
            self.rect.set_right(hit.x - 1.0);
            self.rect.top = hit.y - offset.y;
        }

        if going_up {
            if let Some((hit, _)) = hits.bottom {
                self.rect.top = hit.y + 1.0;
                self.vector = self.vector.reflect_vertically();
            }
        } else if let Some((hit, _)) = hits.top {
            self.rect.set_bottom(hit.y - 1.0);
            self.vector = self.vector.reflect_vertically();
        }

        let tuning = &self.tuning;
        let off_center = (paddle.rect.center().y - ball_y) / paddle.rect.height;
        let sauce = (off_center * tuning.sauce_multiplier).round() as i32;
        let sign = if going_up { 1 } else { -1 };
        self.sauce = (sauce * sign).clamp(tuning.sauce_min, tuning.sauce_max);

        let speed = (self.vector.magnitude() + tuning.speed_incr).min(tuning.max_speed);
        self.vector = self.vector.with_magnitude(speed);

        log::debug!(
            "paddle hit: angle {:.1}, speed {:.1}, sauce {}",
            self.vector.angle(),
            speed,
            self.sauce
        );
        true
    }

    /// Nudge `vector` by `sauce` degrees
    ///
    /// Positive sauce steepens the shot and negative sauce flattens it,
    /// whichever quadrant the ball travels in. The result stays within
    /// `min_angle..=max_angle` of the horizontal.
    pub fn apply_sauce(&self, vector: Vector, sauce: i32) -> Vector {
        let angle = vector.angle();
        let within_half_turn = angle % 180.0;
        let from_horizontal = 90.0 - (90.0 - within_half_turn).abs();
        let direction = if within_half_turn < 90.0 { 1.0 } else { -1.0 };
        let change = f64::from(sauce).clamp(
            self.tuning.min_angle - from_horizontal,
            self.tuning.max_angle - from_horizontal,
        );
        vector.with_angle(angle + direction * change)
    }

    /// Spend pending sauce, or move when there is none
    pub fn update(&mut self) {
        if self.sauce != 0 {
            self.vector = self.apply_sauce(self.vector, self.sauce);
            self.sauce = 0;
        } else {
            self.rect.move_by(&self.vector);
        }
    }
}
