//! Fixed-interval tick timer
//!
//! Wall-clock time is accumulated and paid out in whole ticks, like a
//! periodic timer callback that never runs two callbacks at once.

use std::time::{Duration, Instant};

/// Longest frame gap counted toward ticks; anything longer (debugger, window
/// drag) is dropped.
const MAX_FRAME_GAP: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct FixedTimer {
    interval: Duration,
    max_ticks: u32,
    accumulator: Duration,
    last: Instant,
}

impl FixedTimer {
    pub fn new(interval: Duration, max_ticks: u32, now: Instant) -> Self {
        Self {
            interval,
            max_ticks,
            accumulator: Duration::ZERO,
            last: now,
        }
    }

    /// Number of ticks due at `now`
    pub fn update(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last).min(MAX_FRAME_GAP);
        self.last = now;
        self.accumulator += elapsed;

        let mut due = 0;
        while self.accumulator >= self.interval && due < self.max_ticks {
            self.accumulator -= self.interval;
            due += 1;
        }

        if due == self.max_ticks && self.accumulator >= self.interval {
            log::trace!("Dropping {:?} of tick backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
        }

        due
    }

    /// When the next tick falls due
    pub fn next_deadline(&self) -> Instant {
        self.last + self.interval.saturating_sub(self.accumulator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS5: Duration = Duration::from_millis(5);

    #[test]
    fn test_whole_ticks_only() {
        let start = Instant::now();
        let mut timer = FixedTimer::new(MS5, 16, start);

        assert_eq!(timer.update(start + Duration::from_millis(4)), 0);
        assert_eq!(timer.update(start + Duration::from_millis(6)), 1);
        assert_eq!(timer.update(start + Duration::from_millis(21)), 3);
    }

    #[test]
    fn test_backlog_capped() {
        let start = Instant::now();
        let mut timer = FixedTimer::new(MS5, 4, start);

        assert_eq!(timer.update(start + Duration::from_millis(50)), 4);
        // The rest of the backlog was dropped
        assert_eq!(timer.update(start + Duration::from_millis(51)), 0);
    }

    #[test]
    fn test_long_gap_clamped() {
        let start = Instant::now();
        let mut timer = FixedTimer::new(MS5, 1000, start);
        assert_eq!(timer.update(start + Duration::from_secs(5)), 20);
    }

    #[test]
    fn test_next_deadline() {
        let start = Instant::now();
        let mut timer = FixedTimer::new(MS5, 16, start);
        assert_eq!(timer.next_deadline(), start + MS5);

        let now = start + Duration::from_millis(7);
        timer.update(now);
        assert_eq!(timer.next_deadline(), now + Duration::from_millis(3));
    }
}
