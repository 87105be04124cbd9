//! Match simulation
//!
//! All gameplay logic lives here. It is deterministic given the held keys:
//! - One tick per frame, speeds are per frame
//! - Controllers run in a fixed order (left paddle first)
//! - No rendering or platform dependencies beyond the key types

pub mod ball;
pub mod controller;
pub mod opponent;
pub mod paddle;
pub mod player;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use controller::Controller;
pub use opponent::{Opponent, Path, Prediction, Side};
pub use paddle::Paddle;
pub use player::{KeyMap, Player};
pub use state::{FrameEvents, Lineup, MatchSnapshot, MatchState};
pub use tick::tick;
