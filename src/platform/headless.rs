//! Presentation without a window
//!
//! Draw calls are counted instead of rasterized, input is scripted per
//! frame, and the run ends with a `Quit` event after a fixed number of
//! frames. Pacing is optional so tests run as fast as the CPU allows.

use std::ops::Range;
use std::time::Duration;

use serde::Serialize;

use super::{Event, FrameClock, Key, KeySet, Presentation};
use crate::geometry::{Color, Point, Rect};

/// What was drawn over the whole run
#[derive(Debug, Clone, Default, Serialize)]
pub struct DrawStats {
    pub frames: u64,
    pub clears: u64,
    pub rects: u64,
    pub polylines: u64,
    /// Every text drawn, in order
    pub texts: Vec<String>,
}

#[derive(Debug)]
pub struct HeadlessPresentation {
    max_frames: u64,
    frame: u64,
    clock: Option<FrameClock>,
    events: Vec<(u64, Event)>,
    held: Vec<(Range<u64>, Key)>,
    pub stats: DrawStats,
}

impl HeadlessPresentation {
    /// Quit once `max_frames` frames have been ticked
    pub fn new(max_frames: u64) -> Self {
        Self {
            max_frames,
            frame: 0,
            clock: None,
            events: Vec::new(),
            held: Vec::new(),
            stats: DrawStats::default(),
        }
    }

    /// Sleep out each frame like a real display would
    pub fn paced(mut self) -> Self {
        self.clock = Some(FrameClock::new());
        self
    }

    /// Deliver `event` once, on the first poll at or after frame `frame`
    pub fn with_event(mut self, frame: u64, event: Event) -> Self {
        self.events.push((frame, event));
        self
    }

    /// Report `key` as held for every frame in `frames`
    pub fn with_held_key(mut self, key: Key, frames: Range<u64>) -> Self {
        self.held.push((frames, key));
        self
    }

    /// Frames ticked so far
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl Presentation for HeadlessPresentation {
    fn clear(&mut self, _color: Color) {
        self.stats.clears += 1;
    }

    fn draw_rect(&mut self, _rect: &Rect, _color: Color) {
        self.stats.rects += 1;
    }

    fn draw_polyline(&mut self, points: &[Point], _color: Color) {
        if points.len() > 1 {
            self.stats.polylines += 1;
        }
    }

    fn draw_text(&mut self, text: &str, _at: Point, _color: Color) {
        self.stats.texts.push(text.to_string());
    }

    fn present(&mut self) {
        self.stats.frames += 1;
    }

    fn pressed_keys(&mut self) -> KeySet {
        self.held
            .iter()
            .filter(|(frames, _)| frames.contains(&self.frame))
            .map(|(_, key)| *key)
            .collect()
    }

    fn poll_events(&mut self) -> Vec<Event> {
        let (due, later): (Vec<_>, Vec<_>) =
            self.events.drain(..).partition(|(frame, _)| *frame <= self.frame);
        self.events = later;
        let mut events: Vec<Event> = due.into_iter().map(|(_, event)| event).collect();
        if self.frame >= self.max_frames {
            events.push(Event::Quit);
        }
        events
    }

    fn tick(&mut self, fps: u32) -> Duration {
        self.frame += 1;
        match self.clock.as_mut() {
            Some(clock) => clock.tick(fps),
            None => FrameClock::budget(fps),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input() {
        let mut headless = HeadlessPresentation::new(10)
            .with_event(1, Event::Pause)
            .with_held_key(Key::Up, 0..2);

        assert!(headless.poll_events().is_empty());
        assert_eq!(headless.pressed_keys(), KeySet::from([Key::Up]));

        headless.tick(60);
        assert_eq!(headless.poll_events(), vec![Event::Pause]);
        // Delivered events are consumed
        assert!(headless.poll_events().is_empty());
        assert!(headless.pressed_keys().contains(&Key::Up));

        headless.tick(60);
        assert!(headless.poll_events().is_empty());
        assert!(headless.pressed_keys().is_empty());
    }

    #[test]
    fn test_quits_after_max_frames() {
        let mut headless = HeadlessPresentation::new(2);
        headless.tick(60);
        assert!(!headless.poll_events().iter().any(Event::is_quit));
        headless.tick(60);
        assert!(headless.poll_events().iter().any(Event::is_quit));
        assert_eq!(headless.frame(), 2);
    }

    #[test]
    fn test_unpaced_tick_reports_budget() {
        let mut headless = HeadlessPresentation::new(1);
        assert_eq!(headless.tick(10), Duration::from_millis(100));
    }

    #[test]
    fn test_counts_draw_calls() {
        let mut headless = HeadlessPresentation::new(1);
        let color = Color::new(1, 2, 3);
        headless.clear(color);
        headless.draw_rect(&Rect::new(0.0, 0.0, 1.0, 1.0), color);
        headless.draw_polyline(&[Point::ZERO], color);
        headless.draw_polyline(&[Point::ZERO, Point::ONE], color);
        headless.draw_text("hi", Point::ZERO, color);
        headless.present();

        assert_eq!(headless.stats.clears, 1);
        assert_eq!(headless.stats.rects, 1);
        assert_eq!(headless.stats.polylines, 1);
        assert_eq!(headless.stats.texts, vec!["hi".to_string()]);
        assert_eq!(headless.stats.frames, 1);
    }
}
