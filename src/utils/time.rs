#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

/// Source of the frame timestamps the explorer consumes.
///
/// Every timestamp is a [`Duration`] offset from the clock's creation.
/// Interactive hosts call [`FrameClock::tick`] once per displayed frame;
/// headless runs and replays step it with [`FrameClock::advance`]. The two
/// can be mixed and the reported time never goes backwards.
#[derive(Debug, Clone)]
pub struct FrameClock {
    origin: Instant,
    now: Duration,
    frames: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            now: Duration::ZERO,
            frames: 0,
        }
    }

    /// Starts a frame at the current wall-clock time and returns its timestamp.
    pub fn tick(&mut self) -> Duration {
        self.now = self.now.max(self.origin.elapsed());
        self.frames += 1;
        self.now
    }

    /// Starts a frame `step` after the previous one, ignoring the wall clock.
    pub fn advance(&mut self, step: Duration) -> Duration {
        self.now += step;
        self.frames += 1;
        self.now
    }

    /// Timestamp of the current frame, for handlers fired between frames.
    #[inline]
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Frames started so far.
    #[inline]
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Converts a millisecond count from configuration into a [`Duration`].
#[inline]
#[must_use]
pub const fn millis(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
