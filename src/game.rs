//! Top-level game flow
//!
//! `Menu -> Playing <-> Paused`, and out. Each phase runs its own frame
//! loop against the presentation layer and returns the phase to switch to,
//! or `None` to exit.

use crate::consts::{BACKGROUND_COLOR, FONT_COLOR, PAUSE_TEXT_TOP, PAUSED_FPS};
use crate::geometry::{Color, Point};
use crate::platform::{Event, Presentation};
use crate::settings::Settings;
use crate::sim::{MatchState, tick};
use crate::tuning::Tuning;

/// Fallback fill for rects without their own color
const DEFAULT_RECT_COLOR: Color = FONT_COLOR;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Resolves the lineup and starts a match right away
    Menu,
    Playing,
    /// Simulation frozen, "PAUSED" shown at a low frame rate
    Paused,
}

impl Phase {
    /// Run this phase until it hands over. `None` means exit.
    pub fn run<P: Presentation>(self, game: &mut Game<P>) -> Option<Phase> {
        match self {
            Phase::Menu => game.menu(),
            Phase::Playing => game.play(),
            Phase::Paused => game.pause(),
        }
    }
}

pub struct Game<P: Presentation> {
    platform: P,
    settings: Settings,
    tuning: Tuning,
    state: MatchState,
    /// Draw opponent predictions
    pub debug: bool,
}

impl<P: Presentation> Game<P> {
    pub fn new(platform: P, settings: Settings) -> Self {
        let settings = settings.validated();
        let tuning = settings.tuning();
        let state = MatchState::new(
            settings.screen_width,
            settings.screen_height,
            tuning,
            settings.lineup(),
        );
        Self {
            platform,
            debug: settings.debug,
            settings,
            tuning,
            state,
        }
    }

    /// Drive phases from the menu until one of them exits
    pub fn run(&mut self) {
        let mut phase = Some(Phase::Menu);
        while let Some(current) = phase {
            phase = current.run(self);
            log::info!("{:?} -> {:?}", current, phase);
        }
        log::info!("Game over after {} frames", self.state.frame);
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn into_platform(self) -> P {
        self.platform
    }

    fn menu(&mut self) -> Option<Phase> {
        self.state = MatchState::new(
            self.settings.screen_width,
            self.settings.screen_height,
            self.tuning,
            self.settings.lineup(),
        );
        Some(Phase::Playing)
    }

    fn play(&mut self) -> Option<Phase> {
        loop {
            let events = self.platform.poll_events();
            if events.iter().any(Event::is_quit) {
                return None;
            }
            if events.iter().any(Event::is_pause) {
                return Some(Phase::Paused);
            }

            let keys = self.platform.pressed_keys();
            tick(&mut self.state, &keys);
            if self.state.events.ball_hit_paddle {
                log::debug!("frame {}: paddle hit #{}", self.state.frame, self.state.paddle_hits);
            }

            self.draw_scene();
            self.platform.present();
            self.platform.tick(self.tuning.fps);
        }
    }

    fn pause(&mut self) -> Option<Phase> {
        let banner_at = Point::new(self.state.screen.center().x, PAUSE_TEXT_TOP);
        loop {
            let events = self.platform.poll_events();
            if events.iter().any(Event::is_quit) {
                return None;
            }
            if events.iter().any(Event::is_pause) {
                return Some(Phase::Playing);
            }

            self.draw_scene();
            self.platform.draw_text("PAUSED", banner_at, FONT_COLOR);
            self.platform.present();
            self.platform.tick(PAUSED_FPS);
        }
    }

    fn draw_scene(&mut self) {
        self.platform.clear(BACKGROUND_COLOR);
        let ball = &self.state.ball.rect;
        self.platform
            .draw_rect(ball, ball.color.unwrap_or(DEFAULT_RECT_COLOR));
        for paddle in self.state.paddles() {
            let color = paddle.rect.color.unwrap_or(DEFAULT_RECT_COLOR);
            self.platform.draw_rect(&paddle.rect, color);
        }
        if self.debug {
            for path in self.state.predictions() {
                self.platform.draw_polyline(&path.points, path.color);
            }
        }
    }
}
