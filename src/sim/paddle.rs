//! Paddles and their acceleration model
//!
//! Velocity is a vertical [`Vector`]: 90° while moving up, 270° while moving
//! down. Holding a direction accelerates, switching direction snaps to the
//! minimum speed, and letting go coasts down to a stop.

use serde::Serialize;

use crate::consts::{PADDLE_COLOR, PADDLE_HEIGHT, PADDLE_WIDTH};
use crate::geometry::{Rect, Vector};
use crate::tuning::PaddleTuning;

const UP: f64 = 90.0;
const DOWN: f64 = 270.0;

#[derive(Debug, Clone, Serialize)]
pub struct Paddle {
    pub rect: Rect,
    pub vector: Vector,
    /// Received a direction this frame (skips coasting)
    pub moved: bool,
    /// Area the paddle must stay inside vertically
    #[serde(skip)]
    bounds: Rect,
    #[serde(skip)]
    tuning: PaddleTuning,
}

impl Paddle {
    pub fn new(left: f64, top: f64, bounds: Rect, tuning: PaddleTuning) -> Self {
        Self {
            rect: Rect::new(left, top, PADDLE_WIDTH, PADDLE_HEIGHT).with_color(PADDLE_COLOR),
            vector: Vector::new(UP, 0.0),
            moved: false,
            bounds,
            tuning,
        }
    }

    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    pub fn is_moving_up(&self) -> bool {
        self.vector.angle() == UP && self.vector.magnitude() > 0.0
    }

    pub fn is_moving_down(&self) -> bool {
        self.vector.angle() == DOWN && self.vector.magnitude() > 0.0
    }

    pub fn up(&mut self) {
        self.moved = true;
        let speed = if self.is_moving_up() {
            self.tuning.accelerate(self.vector.magnitude())
        } else {
            self.tuning.min_speed
        };
        let room = self.rect.top - self.bounds.top;
        self.vector = Vector::new(UP, speed.min(room).max(0.0));
    }

    pub fn down(&mut self) {
        self.moved = true;
        let speed = if self.is_moving_down() {
            self.tuning.accelerate(self.vector.magnitude())
        } else {
            self.tuning.min_speed
        };
        let room = self.bounds.bottom() - self.rect.bottom();
        self.vector = Vector::new(DOWN, speed.min(room).max(0.0));
    }

    /// Drift back toward the vertical middle of the bounds
    pub fn recenter(&mut self) {
        self.moved = true;
        let offset = self.rect.center().y - self.bounds.center().y;
        // Screen y grows downward, so above center means heading down
        let angle = if offset < 0.0 { DOWN } else { UP };
        let turned_around = (angle == UP && self.vector.angle() == DOWN)
            || (angle == DOWN && self.vector.angle() == UP);
        let speed = if turned_around {
            self.tuning.min_speed
        } else {
            self.tuning.accelerate(self.vector.magnitude())
        };
        self.vector = Vector::new(angle, speed.min(offset.abs()));
    }

    /// Coast when idle, move, then stay in bounds
    pub fn update(&mut self) {
        if !self.moved {
            let speed = self.tuning.decelerate(self.vector.magnitude());
            self.vector = self.vector.with_magnitude(speed);
        }
        self.moved = false;
        self.rect.move_by(&self.vector);
        if self.rect.top < self.bounds.top {
            self.rect.top = self.bounds.top;
        } else if self.rect.bottom() > self.bounds.bottom() {
            self.rect.set_bottom(self.bounds.bottom());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::tuning::Tuning;

    fn paddle_at(top: f64) -> Paddle {
        let screen = Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT);
        Paddle::new(100.0, top, screen, Tuning::default().paddle)
    }

    #[test]
    fn test_first_press_snaps_to_min_speed() {
        let mut paddle = paddle_at(400.0);
        paddle.up();
        assert_eq!(paddle.vector.angle(), 90.0);
        assert_eq!(paddle.vector.magnitude(), PADDLE_MIN_SPEED);
        assert!(paddle.moved);
    }

    #[test]
    fn test_holding_accelerates_to_max() {
        let mut paddle = paddle_at(800.0);
        let mut last = 0.0;
        for _ in 0..20 {
            paddle.up();
            assert!(paddle.vector.magnitude() >= last);
            last = paddle.vector.magnitude();
        }
        assert_eq!(paddle.vector.magnitude(), PADDLE_MAX_SPEED);
    }

    #[test]
    fn test_reversing_resets_speed() {
        let mut paddle = paddle_at(400.0);
        paddle.down();
        paddle.down();
        assert_eq!(paddle.vector.magnitude(), PADDLE_MIN_SPEED + PADDLE_SPEED_INCR);
        paddle.up();
        assert_eq!(paddle.vector.angle(), 90.0);
        assert_eq!(paddle.vector.magnitude(), PADDLE_MIN_SPEED);
    }

    #[test]
    fn test_speed_capped_by_boundary() {
        let mut paddle = paddle_at(10.0);
        paddle.up();
        assert_eq!(paddle.vector.magnitude(), 10.0);
        paddle.update();
        assert_eq!(paddle.rect.top, 0.0);

        let mut paddle = paddle_at(SCREEN_HEIGHT - PADDLE_HEIGHT - 5.0);
        paddle.down();
        assert_eq!(paddle.vector.magnitude(), 5.0);
    }

    #[test]
    fn test_idle_paddle_coasts_to_stop() {
        let mut paddle = paddle_at(400.0);
        paddle.down();
        paddle.update();
        let after_press = paddle.rect.top;
        assert_eq!(after_press, 400.0 + PADDLE_MIN_SPEED);

        let mut frames = 0;
        while paddle.vector.magnitude() > 0.0 {
            paddle.update();
            frames += 1;
            assert!(frames < 100, "paddle never stopped");
        }
        assert_eq!(frames, (PADDLE_MIN_SPEED / PADDLE_SPEED_DECR) as usize);
        assert!(paddle.rect.top > after_press);
        assert!(!paddle.moved);
    }

    #[test]
    fn test_update_clamps_to_bounds() {
        let mut paddle = paddle_at(SCREEN_HEIGHT - PADDLE_HEIGHT - 1.0);
        paddle.vector = Vector::new(270.0, 30.0);
        paddle.moved = true;
        paddle.update();
        assert_eq!(paddle.rect.bottom(), SCREEN_HEIGHT);
    }

    #[test]
    fn test_recenter_heads_to_middle() {
        // Paddle near the top: center y = 110, screen middle = 500
        let mut paddle = paddle_at(50.0);
        paddle.recenter();
        assert_eq!(paddle.vector.angle(), 270.0);

        // Paddle near the bottom heads up
        let mut paddle = paddle_at(800.0);
        paddle.recenter();
        assert_eq!(paddle.vector.angle(), 90.0);
    }

    #[test]
    fn test_recenter_turnaround_uses_min_speed() {
        let mut paddle = paddle_at(800.0);
        paddle.down();
        paddle.recenter();
        assert_eq!(paddle.vector.angle(), 90.0);
        assert_eq!(paddle.vector.magnitude(), PADDLE_MIN_SPEED);
    }

    #[test]
    fn test_recenter_settles_on_center() {
        let mut paddle = paddle_at(50.0);
        for _ in 0..200 {
            paddle.recenter();
            paddle.update();
        }
        assert_eq!(paddle.rect.center().y, SCREEN_HEIGHT / 2.0);
        assert_eq!(paddle.vector.magnitude(), 0.0);
    }
}
