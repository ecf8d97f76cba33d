// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Virtual-clock timer.
//!
//! [`ManualTimer`] implements [`IntervalTimer`] against a millisecond clock
//! that only moves when the host polls it. Tests use it to drive autoplay
//! deterministically; hosts without a native repeating timer can pump it from
//! their own frame loop.
//!
//! # Usage
//!
//! A controller that owns a `ManualTimer` pumps it itself:
//!
//! ```text
//! let deadline = slider.timer().now_ms() + 10_000;
//! let landed = slider.poll_autoplay(deadline);
//! ```
//!
//! [`SliderController::poll_autoplay`] polls one fire at a time, because each
//! tick re-arms autoplay and replaces the interval that just fired.
//!
//! [`SliderController::poll_autoplay`]: crate::controller::SliderController::poll_autoplay

use alloc::vec::Vec;

use crate::backend::{IntervalTimer, TimerHandle};
use crate::time::Millis;

#[derive(Clone, Copy, Debug)]
struct Interval {
    handle: TimerHandle,
    period: u64,
    next_fire: u64,
}

/// An [`IntervalTimer`] driven by explicit polling.
#[derive(Clone, Debug, Default)]
pub struct ManualTimer {
    now: u64,
    next_handle: u32,
    intervals: Vec<Interval>,
}

impl ManualTimer {
    /// Creates a timer at time zero with no intervals.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    #[inline]
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now
    }

    /// Number of intervals that have been started and not cancelled.
    #[inline]
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.intervals.len()
    }

    /// Earliest pending fire time, if any interval is live.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.intervals.iter().map(|i| i.next_fire).min()
    }

    /// Fires the earliest interval due at or before `deadline`.
    ///
    /// Advances the clock to that fire time (never backwards), schedules the
    /// interval's next fire, and returns its handle. When nothing is due, moves the clock to
    /// `deadline` and returns `None`.
    pub fn poll_until(&mut self, deadline: u64) -> Option<TimerHandle> {
        let due = self
            .intervals
            .iter_mut()
            .filter(|i| i.next_fire <= deadline)
            .min_by_key(|i| i.next_fire);

        match due {
            Some(interval) => {
                self.now = self.now.max(interval.next_fire);
                interval.next_fire += interval.period;
                Some(interval.handle)
            }
            None => {
                self.now = self.now.max(deadline);
                None
            }
        }
    }

    /// Moves the clock forward by `by` without firing anything.
    ///
    /// Intervals that fall due inside the skipped span stay pending and fire
    /// on the next poll.
    pub fn skip(&mut self, by: Millis) {
        self.now += by.as_u64();
    }
}

impl IntervalTimer for ManualTimer {
    fn start(&mut self, period: Millis) -> TimerHandle {
        self.next_handle += 1;
        let handle = TimerHandle(self.next_handle);
        // A zero period would fire forever at the same instant.
        let period = period.as_u64().max(1);
        self.intervals.push(Interval {
            handle,
            period,
            next_fire: self.now + period,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.intervals.retain(|i| i.handle != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_repeats_on_period() {
        let mut timer = ManualTimer::new();
        let h = timer.start(Millis(100));

        assert_eq!(timer.poll_until(99), None);
        assert_eq!(timer.now_ms(), 99);
        assert_eq!(timer.poll_until(250), Some(h));
        assert_eq!(timer.now_ms(), 100);
        assert_eq!(timer.poll_until(250), Some(h));
        assert_eq!(timer.now_ms(), 200);
        assert_eq!(timer.poll_until(250), None);
        assert_eq!(timer.now_ms(), 250);
    }

    #[test]
    fn cancelled_interval_never_fires() {
        let mut timer = ManualTimer::new();
        let h = timer.start(Millis(100));
        timer.cancel(h);
        assert_eq!(timer.poll_until(1_000), None);
        assert_eq!(timer.live_count(), 0);
    }

    #[test]
    fn earliest_interval_fires_first() {
        let mut timer = ManualTimer::new();
        let slow = timer.start(Millis(300));
        let fast = timer.start(Millis(200));
        assert_eq!(timer.next_deadline(), Some(200));
        assert_eq!(timer.poll_until(1_000), Some(fast));
        assert_eq!(timer.poll_until(1_000), Some(slow));
    }

    #[test]
    fn skipped_deadlines_fire_late() {
        let mut timer = ManualTimer::new();
        let h = timer.start(Millis(100));
        timer.skip(Millis(150));
        assert_eq!(timer.now_ms(), 150);
        assert_eq!(timer.poll_until(150), Some(h));
        assert_eq!(timer.now_ms(), 150, "clock never runs backwards");
    }
}
