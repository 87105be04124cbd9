//! Game settings and preferences
//!
//! Read from an optional JSON file. Missing fields take their defaults and a
//! broken file falls back to defaults entirely, so a bad config never stops
//! the game from starting.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{
    BALL_HEIGHT, BALL_WIDTH, FRAMES_PER_SECOND, PADDLE_HEIGHT, PADDLE_MARGIN, PADDLE_WIDTH,
    SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::sim::Lineup;
use crate::tuning::Tuning;

/// Room for both paddles, their margins and a ball between them
const MIN_SCREEN_WIDTH: f64 = 2.0 * (PADDLE_MARGIN + PADDLE_WIDTH) + 2.0 * BALL_WIDTH;
/// Room for a paddle with a ball above or below it
const MIN_SCREEN_HEIGHT: f64 = PADDLE_HEIGHT + 2.0 * BALL_HEIGHT;

/// How many people are at the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlayerCount {
    #[default]
    One,
    Two,
}

impl PlayerCount {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerCount::One => "one",
            PlayerCount::Two => "two",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "one" | "1" => Some(PlayerCount::One),
            "two" | "2" => Some(PlayerCount::Two),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Target frame rate; speeds are rescaled to it
    pub fps: u32,
    pub screen_width: f64,
    pub screen_height: f64,
    /// Picked on the menu
    pub players: PlayerCount,
    /// Opponents on both sides, ignores `players`
    pub demo: bool,
    /// Draw the opponent's predicted ball path
    pub debug: bool,

    // === Headless runs ===
    /// Frames before the headless presentation quits
    pub headless_frames: u64,
    /// Sleep out each frame instead of running flat out
    pub pace: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps: FRAMES_PER_SECOND,
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            players: PlayerCount::One,
            demo: false,
            debug: false,
            headless_frames: 600,
            pace: false,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::validated)
    }

    /// Replace a screen size too small to play on with the default
    pub fn validated(mut self) -> Self {
        if !(self.screen_width >= MIN_SCREEN_WIDTH && self.screen_width.is_finite()) {
            log::warn!(
                "screen_width {} is below {}, using {}",
                self.screen_width,
                MIN_SCREEN_WIDTH,
                SCREEN_WIDTH
            );
            self.screen_width = SCREEN_WIDTH;
        }
        if !(self.screen_height >= MIN_SCREEN_HEIGHT && self.screen_height.is_finite()) {
            log::warn!(
                "screen_height {} is below {}, using {}",
                self.screen_height,
                MIN_SCREEN_HEIGHT,
                SCREEN_HEIGHT
            );
            self.screen_height = SCREEN_HEIGHT;
        }
        self
    }

    /// Load settings from `path`, falling back to defaults on any error
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings from {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Command line: `[--debug] [settings.json]`
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Self {
        let mut debug = false;
        let mut path = None;
        for arg in args {
            if arg == "--debug" {
                debug = true;
            } else if arg.starts_with("--") {
                log::warn!("Ignoring unknown flag {}", arg);
            } else {
                path = Some(arg);
            }
        }
        let mut settings = match path {
            Some(path) => Self::load(path),
            None => Self::default(),
        };
        settings.debug |= debug;
        settings
    }

    pub fn tuning(&self) -> Tuning {
        Tuning::for_fps(self.fps)
    }

    /// Who plays, once the menu has resolved the player count
    pub fn lineup(&self) -> Lineup {
        if self.demo {
            return Lineup::Demo;
        }
        match self.players {
            PlayerCount::One => Lineup::OnePlayer,
            PlayerCount::Two => Lineup::TwoPlayers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_count_names() {
        assert_eq!(PlayerCount::from_str("Two"), Some(PlayerCount::Two));
        assert_eq!(PlayerCount::from_str("1"), Some(PlayerCount::One));
        assert_eq!(PlayerCount::from_str("three"), None);
        assert_eq!(PlayerCount::Two.as_str(), "two");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{"players": "two", "fps": 30}"#).unwrap();
        assert_eq!(settings.players, PlayerCount::Two);
        assert_eq!(settings.fps, 30);
        assert_eq!(settings.screen_width, SCREEN_WIDTH);
        assert!(!settings.debug);
        assert_eq!(settings.lineup(), Lineup::TwoPlayers);
    }

    #[test]
    fn test_demo_overrides_players() {
        let settings = Settings {
            demo: true,
            players: PlayerCount::Two,
            ..Default::default()
        };
        assert_eq!(settings.lineup(), Lineup::Demo);
    }

    #[test]
    fn test_tuning_follows_fps() {
        let settings = Settings {
            fps: 30,
            ..Default::default()
        };
        assert_eq!(settings.tuning().ball.min_speed, 40.0);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
        assert!(Settings::from_json(r#"{"players": "many"}"#).is_err());
    }

    #[test]
    fn test_unplayable_screen_falls_back() {
        let settings = Settings::from_json(r#"{"screen_height": 15, "screen_width": -3}"#).unwrap();
        assert_eq!(settings.screen_height, SCREEN_HEIGHT);
        assert_eq!(settings.screen_width, SCREEN_WIDTH);

        let small = Settings::from_json(r#"{"screen_width": 400, "screen_height": 300}"#).unwrap();
        assert_eq!(small.screen_width, 400.0);
        assert_eq!(small.screen_height, 300.0);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = Settings::load("/nonexistent/sauce-pong/settings.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_debug_flag() {
        let settings = Settings::from_args(["--debug".to_string()]);
        assert!(settings.debug);
        assert_eq!(settings.players, PlayerCount::One);

        assert!(!Settings::from_args(Vec::new()).debug);
    }

    #[test]
    fn test_debug_flag_with_settings_file() {
        let path = std::env::temp_dir().join("sauce_pong_args_test.json");
        std::fs::write(&path, r#"{"players": "two"}"#).unwrap();
        let args = ["--debug".to_string(), path.display().to_string()];
        let settings = Settings::from_args(args);
        let _ = std::fs::remove_file(&path);

        assert!(settings.debug);
        assert_eq!(settings.players, PlayerCount::Two);
    }

    #[test]
    fn test_load_round_trip() {
        let path = std::env::temp_dir().join("sauce_pong_settings_test.json");
        let settings = Settings {
            debug: true,
            headless_frames: 42,
            ..Default::default()
        };
        std::fs::write(&path, serde_json::to_string(&settings).unwrap()).unwrap();
        assert_eq!(Settings::load(&path), settings);
        let _ = std::fs::remove_file(&path);
    }
}
