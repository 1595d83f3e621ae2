//! Timing module - the difficulty curve.
//!
//! The curve maps a difficulty level to the interval between scroll ticks:
//!
//! ```text
//! interval(level) = max(minimum, initial - ln(max(level, 1)) / log_divisor)
//! ```
//!
//! The logarithm keeps early levels noticeably faster than the previous one
//! while late levels converge gently onto the floor instead of becoming
//! unplayable. Presets differ only in the parameter triple.

use std::time::Duration;

/// Difficulty-to-tick-interval curve.
///
/// Immutable once constructed. All three parameters must be positive;
/// the floor is enforced on every query regardless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingCurve {
    initial_interval: Duration,
    log_divisor: f64,
    minimum_interval: Duration,
}

impl TimingCurve {
    pub fn new(initial_interval: Duration, log_divisor: f64, minimum_interval: Duration) -> Self {
        Self {
            initial_interval,
            log_divisor,
            minimum_interval,
        }
    }

    /// Relaxed pacing with a shallow floor.
    pub fn cruise() -> Self {
        Self::new(Duration::from_millis(1100), 6.0, Duration::from_millis(400))
    }

    /// Standard pacing.
    pub fn fast() -> Self {
        Self::new(Duration::from_millis(900), 5.0, Duration::from_millis(300))
    }

    /// Aggressive pacing with a deep floor.
    pub fn rapid() -> Self {
        Self::new(Duration::from_millis(700), 4.0, Duration::from_millis(200))
    }

    /// Tick interval for a difficulty level.
    ///
    /// Strictly non-increasing as the level grows, floored at the minimum
    /// interval. Levels 0 and 1 both yield exactly the initial interval
    /// (`ln(1) == 0`).
    pub fn interval_for_level(&self, level: u32) -> Duration {
        let level = f64::from(level.max(1));
        let decay = level.ln() / self.log_divisor;
        let seconds = self.initial_interval.as_secs_f64() - decay;
        let floor = self.minimum_interval.as_secs_f64();
        Duration::from_secs_f64(seconds.max(floor))
    }

    pub fn initial_interval(&self) -> Duration {
        self.initial_interval
    }

    pub fn minimum_interval(&self) -> Duration {
        self.minimum_interval
    }
}

impl Default for TimingCurve {
    fn default() -> Self {
        Self::fast()
    }
}
