use std::time::Duration;

use crate::animation::easing::Easing;
use crate::animation::values::Interpolatable;

/// Normalised progress of a timed interpolation at `now`.
///
/// A zero duration is complete immediately; a `now` before `start_time`
/// reads as not started.
#[inline]
#[must_use]
pub fn progress_at(start_time: Duration, duration: Duration, now: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_sub(start_time);
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

/// One time-bounded interpolation of a value from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T: Interpolatable = f32> {
    pub start: T,
    pub end: T,
    pub start_time: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl<T: Interpolatable> Tween<T> {
    #[must_use]
    pub fn new(start: T, end: T, start_time: Duration, duration: Duration, easing: Easing) -> Self {
        Self {
            start,
            end,
            start_time,
            duration,
            easing,
        }
    }

    #[inline]
    #[must_use]
    pub fn progress(&self, now: Duration) -> f32 {
        progress_at(self.start_time, self.duration, now)
    }

    /// Eased value at `now`.
    #[inline]
    #[must_use]
    pub fn sample(&self, now: Duration) -> T {
        let eased = self.easing.apply(self.progress(now));
        T::interpolate_linear(self.start, self.end, eased)
    }

    #[inline]
    #[must_use]
    pub fn is_finished(&self, now: Duration) -> bool {
        self.progress(now) >= 1.0
    }
}
