//! Platform abstraction layer
//!
//! The game core only talks to the outside world through [`Presentation`]:
//! - Drawing (rects, polylines, text)
//! - Input (held keys and discrete events)
//! - Frame pacing
//!
//! A windowed backend implements the same trait; [`HeadlessPresentation`]
//! runs the game without one.

pub mod clock;
pub mod headless;

use std::collections::HashSet;
use std::time::Duration;

use serde::Serialize;

use crate::geometry::{Color, Point, Rect};

pub use clock::FrameClock;
pub use headless::{DrawStats, HeadlessPresentation};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Key {
    Up,
    Down,
    W,
    S,
    P,
    Escape,
}

/// Keys held down this frame
pub type KeySet = HashSet<Key>;

/// Discrete input since the last poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Event {
    /// Window closed
    Quit,
    /// Dedicated pause signal (focus loss, media key)
    Pause,
    KeyDown(Key),
}

impl Event {
    pub fn is_quit(&self) -> bool {
        matches!(self, Event::Quit | Event::KeyDown(Key::Escape))
    }

    pub fn is_pause(&self) -> bool {
        matches!(self, Event::Pause | Event::KeyDown(Key::P))
    }
}

/// Everything the game needs from a display, keyboard and clock
pub trait Presentation {
    fn clear(&mut self, color: Color);

    fn draw_rect(&mut self, rect: &Rect, color: Color);

    fn draw_polyline(&mut self, points: &[Point], color: Color);

    fn draw_text(&mut self, text: &str, at: Point, color: Color);

    /// Show the frame drawn since the last `clear`
    fn present(&mut self);

    fn pressed_keys(&mut self) -> KeySet;

    fn poll_events(&mut self) -> Vec<Event>;

    /// Wait out the rest of the frame at `fps`, returning the time spent
    fn tick(&mut self, fps: u32) -> Duration;
}
