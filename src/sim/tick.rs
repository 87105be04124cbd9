//! One simulation frame
//!
//! Order matters: walls first, then every controller steers and gets its
//! swept paddle check against the ball's *current* velocity, then paddles
//! move, then the ball moves (or spends its sauce).

use super::state::MatchState;
use crate::platform::KeySet;

/// Advance the match by one frame with `keys` held
pub fn tick(state: &mut MatchState, keys: &KeySet) {
    state.events.clear();
    state.frame += 1;

    if state.ball.handle_screen_edges(&state.screen) {
        state.events.ball_hit_wall = true;
        state.wall_bounces += 1;
    }

    for controller in state.controllers.iter_mut() {
        controller.advance(keys, &state.ball);
        if state.ball.handle_paddle_collision(controller.paddle()) {
            state.events.ball_hit_paddle = true;
            state.paddle_hits += 1;
        }
    }

    for controller in state.controllers.iter_mut() {
        controller.paddle_mut().update();
    }
    state.ball.update();
}
