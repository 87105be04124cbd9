//! Sauce Pong - a two-paddle arcade game
//!
//! Core modules:
//! - `geometry`: Vectors, segments and rects (the collision math)
//! - `sim`: Ball, paddles, controllers and the per-frame tick
//! - `game`: Menu/Playing/Paused state machine driving a presentation layer
//! - `platform`: Presentation interface, input types and frame pacing
//! - `tuning`: Reference constants scaled to the running frame rate
//! - `settings`: User preferences loaded from JSON

pub mod game;
pub mod geometry;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::{Game, Phase};
pub use geometry::{Color, Point, Rect, Segment, Vector};
pub use settings::{PlayerCount, Settings};
pub use tuning::Tuning;

/// Game configuration constants
///
/// Speeds and increments are in units per frame at `REFERENCE_FPS`. Use
/// [`Tuning::for_fps`] to get values for another frame rate.
pub mod consts {
    use crate::geometry::Color;

    /// Frame rate the per-frame constants were tuned at
    pub const REFERENCE_FPS: u32 = 60;
    /// Default target frame rate
    pub const FRAMES_PER_SECOND: u32 = 60;
    /// Frame rate while paused
    pub const PAUSED_FPS: u32 = 10;

    /// Screen dimensions (logical units)
    pub const SCREEN_WIDTH: f64 = 1600.0;
    pub const SCREEN_HEIGHT: f64 = 1000.0;
    pub const BACKGROUND_COLOR: Color = Color::new(0, 0, 0);

    /// Ball defaults
    pub const BALL_START_ANGLE: f64 = 48.0;
    pub const BALL_MIN_SPEED: f64 = 20.0;
    pub const BALL_MAX_SPEED: f64 = 80.0;
    pub const BALL_SPEED_INCR: f64 = 1.0;
    /// Band (degrees from the horizontal) that sauce keeps the ball inside
    pub const BALL_MIN_ANGLE: f64 = 20.0;
    pub const BALL_MAX_ANGLE: f64 = 70.0;
    pub const BALL_WIDTH: f64 = 20.0;
    pub const BALL_HEIGHT: f64 = 20.0;
    pub const BALL_COLOR: Color = Color::new(127, 216, 127);

    /// Paddle defaults
    pub const PADDLE_MIN_SPEED: f64 = 24.0;
    pub const PADDLE_MAX_SPEED: f64 = 40.0;
    pub const PADDLE_SPEED_INCR: f64 = 2.0;
    pub const PADDLE_SPEED_DECR: f64 = 4.0;
    pub const PADDLE_WIDTH: f64 = 10.0;
    pub const PADDLE_HEIGHT: f64 = 120.0;
    /// Distance from the screen side to the paddle's outer edge
    pub const PADDLE_MARGIN: f64 = 100.0;
    pub const PADDLE_START_TOP: f64 = 50.0;
    pub const PADDLE_COLOR: Color = Color::new(127, 216, 127);

    /// Sauce (spin) applied after a paddle hit, in degrees
    pub const SAUCE_MULTIPLIER: f64 = 30.0;
    pub const SAUCE_MAX: i32 = 15;
    pub const SAUCE_MIN: i32 = -SAUCE_MAX;

    /// Wall bounces the opponent is willing to look ahead through
    pub const MAX_PREDICTED_REFLECTIONS: u32 = 5;

    pub const DEBUG_PATH_COLOR: Color = Color::new(128, 0, 0);
    pub const FONT_COLOR: Color = Color::new(127, 216, 127);
    /// Top of the "PAUSED" banner
    pub const PAUSE_TEXT_TOP: f64 = 200.0;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if normalized >= 360.0 { 0.0 } else { normalized }
}

/// Smallest difference between two angles in degrees, in [0, 180]
#[inline]
pub fn angle_distance(a: f64, b: f64) -> f64 {
    let diff = normalize_degrees(a - b);
    diff.min(360.0 - diff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(-15.0), 345.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert_eq!(normalize_degrees(-1e-15), 0.0);
    }

    #[test]
    fn test_angle_distance_wraps() {
        assert!((angle_distance(359.0, 1.0) - 2.0).abs() < 1e-9);
        assert!((angle_distance(90.0, 270.0) - 180.0).abs() < 1e-9);
    }
}
