//! Frame pacing

use std::time::{Duration, Instant};

/// Longest frame budget we honour (one frame per second)
const MIN_FPS: u32 = 1;

/// Sleeps out whatever is left of each frame's time budget
#[derive(Debug)]
pub struct FrameClock {
    last_frame: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    pub fn budget(fps: u32) -> Duration {
        Duration::from_secs(1) / fps.max(MIN_FPS)
    }

    /// Block until a full frame at `fps` has elapsed since the last call
    ///
    /// Returns the real time between the two calls. A frame that already
    /// overran its budget does not sleep.
    pub fn tick(&mut self, fps: u32) -> Duration {
        let budget = Self::budget(fps);
        let elapsed = self.last_frame.elapsed();
        if let Some(remaining) = budget.checked_sub(elapsed) {
            std::thread::sleep(remaining);
        }
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame);
        self.last_frame = now;
        frame_time
    }
}
