//! Frame clock for wall-clock driven stepping.
//!
//! The first frame has no previous frame to measure against (and in a
//! windowed app it also absorbs start-up cost), so its delta is replaced
//! by [`DEFAULT_DT`].

use std::time::Instant;

use silk_types::constants::DEFAULT_DT;

/// Measures the time between successive frames.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<Instant>,
    frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous tick, or [`DEFAULT_DT`] on the first.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// [`FrameClock::tick`] with an explicit "now".
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let dt = match self.last {
            None => DEFAULT_DT,
            Some(prev) => now.saturating_duration_since(prev).as_secs_f32(),
        };
        self.last = Some(now);
        self.frames += 1;
        dt
    }

    /// Ticks taken so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Forgets the previous frame; the next tick is a first tick again.
    pub fn reset(&mut self) {
        self.last = None;
        self.frames = 0;
    }
}
