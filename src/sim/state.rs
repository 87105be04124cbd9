//! Match state
//!
//! One ball, two controlled paddles and the screen they live on. Everything
//! the tick mutates is here; the frame loop in `game` owns one of these.

use serde::Serialize;

use super::ball::Ball;
use super::controller::Controller;
use super::opponent::{Opponent, Path, Side};
use super::paddle::Paddle;
use super::player::{KeyMap, Player};
use crate::consts::{BALL_HEIGHT, PADDLE_MARGIN, PADDLE_START_TOP, PADDLE_WIDTH};
use crate::geometry::Rect;
use crate::tuning::Tuning;

/// Who controls the two paddles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum Lineup {
    /// Arrow keys on the left, opponent on the right
    #[default]
    OnePlayer,
    /// Arrow keys on the left, W/S on the right
    TwoPlayers,
    /// Opponents on both sides, nobody at the keyboard
    Demo,
}

/// What happened during the last tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FrameEvents {
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl FrameEvents {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug)]
pub struct MatchState {
    pub screen: Rect,
    pub tuning: Tuning,
    pub ball: Ball,
    /// Left paddle first
    pub controllers: Vec<Box<dyn Controller>>,
    /// Frames simulated so far
    pub frame: u64,
    pub events: FrameEvents,
    pub paddle_hits: u64,
    pub wall_bounces: u64,
}

/// Serializable view of a match at one instant
#[derive(Debug, Clone, Serialize)]
pub struct MatchSnapshot {
    pub frame: u64,
    pub ball: Ball,
    pub paddles: Vec<Paddle>,
    pub paddle_hits: u64,
    pub wall_bounces: u64,
    pub events: FrameEvents,
}

impl MatchState {
    /// Serve a fresh ball between two paddles near the top of the screen
    pub fn new(width: f64, height: f64, tuning: Tuning, lineup: Lineup) -> Self {
        let screen = Rect::new(0.0, 0.0, width, height);
        let left_x = PADDLE_MARGIN;
        let right_x = width - PADDLE_MARGIN - PADDLE_WIDTH;
        let paddle = |left: f64| Paddle::new(left, PADDLE_START_TOP, screen, tuning.paddle);
        let opponent = |left: f64, side: Side| -> Box<dyn Controller> {
            let field = screen.inset(0.0, BALL_HEIGHT / 2.0);
            Box::new(Opponent::new(
                paddle(left),
                side,
                field,
                tuning.max_predicted_reflections,
            ))
        };

        let controllers: Vec<Box<dyn Controller>> = match lineup {
            Lineup::OnePlayer => vec![
                Box::new(Player::new(KeyMap::ARROWS, paddle(left_x))),
                opponent(right_x, Side::Right),
            ],
            Lineup::TwoPlayers => vec![
                Box::new(Player::new(KeyMap::ARROWS, paddle(left_x))),
                Box::new(Player::new(KeyMap::WASD, paddle(right_x))),
            ],
            Lineup::Demo => vec![opponent(left_x, Side::Left), opponent(right_x, Side::Right)],
        };

        log::info!(
            "new match: {:?} on a {}x{} screen at {} fps",
            lineup,
            width,
            height,
            tuning.fps
        );

        Self {
            screen,
            tuning,
            ball: Ball::new(&screen, tuning.ball),
            controllers,
            frame: 0,
            events: FrameEvents::default(),
            paddle_hits: 0,
            wall_bounces: 0,
        }
    }

    pub fn paddles(&self) -> impl Iterator<Item = &Paddle> {
        self.controllers.iter().map(|c| c.paddle())
    }

    /// Opponent prediction paths worth drawing
    pub fn predictions(&self) -> impl Iterator<Item = &Path> {
        self.controllers
            .iter()
            .filter_map(|c| c.prediction())
            .filter(|path| path.is_drawable())
    }

    pub fn humans(&self) -> usize {
        self.controllers.iter().filter(|c| c.is_human()).count()
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            frame: self.frame,
            ball: self.ball.clone(),
            paddles: self.paddles().cloned().collect(),
            paddle_hits: self.paddle_hits,
            wall_bounces: self.wall_bounces,
            events: self.events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn new_match(lineup: Lineup) -> MatchState {
        MatchState::new(SCREEN_WIDTH, SCREEN_HEIGHT, Tuning::default(), lineup)
    }

    #[test]
    fn test_start_positions() {
        let state = new_match(Lineup::OnePlayer);
        let paddles: Vec<_> = state.paddles().collect();
        assert_eq!(paddles.len(), 2);
        assert_eq!(paddles[0].rect.left, 100.0);
        assert_eq!(paddles[1].rect.left, SCREEN_WIDTH - 100.0 - PADDLE_WIDTH);
        assert!(paddles.iter().all(|p| p.rect.top == PADDLE_START_TOP));
        assert_eq!(state.ball.rect.center(), state.screen.center());
        assert_eq!(state.frame, 0);
    }

    #[test]
    fn test_lineups() {
        assert_eq!(new_match(Lineup::OnePlayer).humans(), 1);
        assert_eq!(new_match(Lineup::TwoPlayers).humans(), 2);
        assert_eq!(new_match(Lineup::Demo).humans(), 0);
    }

    #[test]
    fn test_fresh_match_has_no_predictions() {
        assert_eq!(new_match(Lineup::Demo).predictions().count(), 0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = new_match(Lineup::OnePlayer);
        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["frame"], 0);
        assert_eq!(json["paddles"].as_array().map(Vec::len), Some(2));
        assert_eq!(json["ball"]["sauce"], 0);
        assert_eq!(json["ball"]["vector"]["angle"], BALL_START_ANGLE);
    }
}
