//! Frame-rate aware game balance
//!
//! Every speed in [`crate::consts`] is "units per frame at 60 FPS". Running
//! at another rate scales them by `REFERENCE_FPS / fps` so the game feels
//! the same regardless of how often we tick.

use serde::Serialize;

use crate::consts::*;

/// Ball speeds and spin limits
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallTuning {
    pub start_angle: f64,
    pub min_speed: f64,
    pub max_speed: f64,
    pub speed_incr: f64,
    pub min_angle: f64,
    pub max_angle: f64,
    pub sauce_multiplier: f64,
    pub sauce_min: i32,
    pub sauce_max: i32,
}

/// Paddle acceleration profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaddleTuning {
    pub min_speed: f64,
    pub max_speed: f64,
    pub speed_incr: f64,
    pub speed_decr: f64,
}

impl PaddleTuning {
    /// One step faster, never above the top speed
    pub fn accelerate(&self, speed: f64) -> f64 {
        (speed + self.speed_incr).min(self.max_speed)
    }

    /// One step slower, never below standstill
    pub fn decelerate(&self, speed: f64) -> f64 {
        (speed - self.speed_decr).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tuning {
    pub fps: u32,
    pub ball: BallTuning,
    pub paddle: PaddleTuning,
    pub max_predicted_reflections: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::for_fps(FRAMES_PER_SECOND)
    }
}

impl Tuning {
    /// Scale the reference constants for a target frame rate
    pub fn for_fps(fps: u32) -> Self {
        let fps = fps.max(1);
        let scale = f64::from(REFERENCE_FPS) / f64::from(fps);
        Self {
            fps,
            ball: BallTuning {
                start_angle: BALL_START_ANGLE,
                min_speed: BALL_MIN_SPEED * scale,
                max_speed: BALL_MAX_SPEED * scale,
                speed_incr: BALL_SPEED_INCR * scale,
                min_angle: BALL_MIN_ANGLE,
                max_angle: BALL_MAX_ANGLE,
                sauce_multiplier: SAUCE_MULTIPLIER,
                sauce_min: SAUCE_MIN,
                sauce_max: SAUCE_MAX,
            },
            paddle: PaddleTuning {
                min_speed: PADDLE_MIN_SPEED * scale,
                max_speed: PADDLE_MAX_SPEED * scale,
                speed_incr: PADDLE_SPEED_INCR * scale,
                speed_decr: PADDLE_SPEED_DECR * scale,
            },
            max_predicted_reflections: MAX_PREDICTED_REFLECTIONS,
        }
    }
}
