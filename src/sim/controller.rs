//! Whatever steers a paddle each frame

use std::fmt::Debug;

use super::ball::Ball;
use super::opponent::Path;
use super::paddle::Paddle;
use crate::platform::KeySet;

/// A human at the keyboard or the automated opponent
pub trait Controller: Debug {
    /// Steer the paddle for this frame (before paddles and ball update)
    fn advance(&mut self, keys: &KeySet, ball: &Ball);

    fn paddle(&self) -> &Paddle;

    fn paddle_mut(&mut self) -> &mut Paddle;

    fn is_human(&self) -> bool;

    /// Predicted ball path for the debug overlay
    fn prediction(&self) -> Option<&Path> {
        None
    }
}
