//! Sauce Pong - native entry point
//!
//! Runs a match on the headless presentation.
//!
//! Usage: `sauce-pong [--debug] [settings.json]`. `--debug` draws the
//! opponent's predicted path.

use sauce_pong::platform::HeadlessPresentation;
use sauce_pong::{Game, Settings};

fn main() {
    env_logger::init();
    log::info!("Sauce Pong starting...");

    let settings = Settings::from_args(std::env::args().skip(1));
    log::info!(
        "{} player(s), demo {}, {} fps, {} frames",
        settings.players.as_str(),
        settings.demo,
        settings.fps,
        settings.headless_frames
    );

    let mut platform = HeadlessPresentation::new(settings.headless_frames);
    if settings.pace {
        platform = platform.paced();
    }

    let mut game = Game::new(platform, settings);
    game.run();

    let state = game.state();
    log::info!(
        "{} paddle hits, {} wall bounces",
        state.paddle_hits,
        state.wall_bounces
    );
    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize final state: {}", e),
    }

    let stats = &game.platform().stats;
    log::info!("Presented {} frames ({} rects)", stats.frames, stats.rects);
}
