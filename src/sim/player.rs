//! Human players

use serde::Serialize;

use super::ball::Ball;
use super::controller::Controller;
use super::paddle::Paddle;
use crate::platform::{Key, KeySet};

/// Keys that move a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyMap {
    pub up: Key,
    pub down: Key,
}

impl KeyMap {
    pub const ARROWS: KeyMap = KeyMap {
        up: Key::Up,
        down: Key::Down,
    };
    pub const WASD: KeyMap = KeyMap {
        up: Key::W,
        down: Key::S,
    };
}

#[derive(Debug, Clone)]
pub struct Player {
    pub key_map: KeyMap,
    pub paddle: Paddle,
}

impl Player {
    pub fn new(key_map: KeyMap, paddle: Paddle) -> Self {
        Self { key_map, paddle }
    }

    /// Move the paddle for every mapped key being held
    pub fn dispatch(&mut self, keys: &KeySet) {
        if keys.contains(&self.key_map.up) {
            self.paddle.up();
        }
        if keys.contains(&self.key_map.down) {
            self.paddle.down();
        }
    }
}

impl Controller for Player {
    fn advance(&mut self, keys: &KeySet, _ball: &Ball) {
        self.dispatch(keys);
    }

    fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    fn paddle_mut(&mut self) -> &mut Paddle {
        &mut self.paddle
    }

    fn is_human(&self) -> bool {
        true
    }
}
