// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Autoplay timer lifecycle.
//!
//! [`AutoplayScheduler`] owns at most one live [`TimerHandle`]. Every
//! successful transition calls [`arm`](AutoplayScheduler::arm), which cancels
//! the pending interval and starts a fresh one, so a manual navigation resets
//! the countdown instead of letting the old interval fire early.
//!
//! The interval's tick is delivered back through
//! [`SliderController::autoplay_tick`](crate::controller::SliderController::autoplay_tick)
//! together with the handle that fired. A handle that is no longer live
//! (cancelled by a re-arm whose tick was already queued) is ignored, which
//! rules out a double advance.

use crate::backend::{IntervalTimer, TimerHandle};
use crate::config::SliderConfig;
use crate::time::Millis;

/// Starts, restarts, and cancels the autoplay interval.
#[derive(Clone, Copy, Debug)]
pub struct AutoplayScheduler {
    enabled: bool,
    interval: Millis,
    live: Option<TimerHandle>,
    halted: bool,
}

impl AutoplayScheduler {
    /// Creates an unarmed scheduler.
    #[must_use]
    pub const fn new(enabled: bool, interval: Millis) -> Self {
        Self {
            enabled,
            interval,
            live: None,
            halted: false,
        }
    }

    /// Creates an unarmed scheduler from the autoplay fields of `config`.
    #[must_use]
    pub const fn from_config(config: &SliderConfig) -> Self {
        Self::new(config.autoplay, config.autoplay_interval)
    }

    /// (Re)starts the interval.
    ///
    /// No-op when autoplay is disabled or the scheduler was halted. Otherwise
    /// cancels any live interval and starts a new one, returning its handle.
    pub fn arm<T: IntervalTimer + ?Sized>(&mut self, timer: &mut T) -> Option<TimerHandle> {
        if !self.enabled || self.halted {
            return None;
        }
        self.disarm(timer);
        let handle = timer.start(self.interval);
        self.live = Some(handle);
        Some(handle)
    }

    /// Cancels the live interval, returning its handle. Idempotent.
    pub fn disarm<T: IntervalTimer + ?Sized>(&mut self, timer: &mut T) -> Option<TimerHandle> {
        let handle = self.live.take()?;
        timer.cancel(handle);
        Some(handle)
    }

    /// Disarms and refuses any later [`arm`](Self::arm). Used on teardown.
    pub fn halt<T: IntervalTimer + ?Sized>(&mut self, timer: &mut T) -> Option<TimerHandle> {
        self.halted = true;
        self.disarm(timer)
    }

    /// Returns `true` if `handle` is the live interval.
    #[inline]
    #[must_use]
    pub fn is_live(&self, handle: TimerHandle) -> bool {
        self.live == Some(handle)
    }

    /// The live interval, if armed.
    #[inline]
    #[must_use]
    pub const fn live(&self) -> Option<TimerHandle> {
        self.live
    }

    /// Whether autoplay was enabled at construction.
    #[inline]
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Tick interval.
    #[inline]
    #[must_use]
    pub const fn interval(&self) -> Millis {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manual::ManualTimer;

    #[test]
    fn disabled_scheduler_never_starts() {
        let mut timer = ManualTimer::new();
        let mut sched = AutoplayScheduler::new(false, Millis(3000));
        assert_eq!(sched.arm(&mut timer), None);
        assert_eq!(timer.live_count(), 0);
    }

    #[test]
    fn rearm_keeps_a_single_live_timer() {
        let mut timer = ManualTimer::new();
        let mut sched = AutoplayScheduler::new(true, Millis(3000));

        let first = sched.arm(&mut timer).unwrap();
        let second = sched.arm(&mut timer).unwrap();

        assert_ne!(first, second);
        assert!(!sched.is_live(first), "old handle retired");
        assert!(sched.is_live(second), "new handle live");
        assert_eq!(timer.live_count(), 1);
    }

    #[test]
    fn disarm_is_idempotent() {
        let mut timer = ManualTimer::new();
        let mut sched = AutoplayScheduler::new(true, Millis(3000));
        let handle = sched.arm(&mut timer).unwrap();

        assert_eq!(sched.disarm(&mut timer), Some(handle));
        assert_eq!(sched.disarm(&mut timer), None);
        assert_eq!(timer.live_count(), 0);
    }

    #[test]
    fn halt_blocks_rearm() {
        let mut timer = ManualTimer::new();
        let mut sched = AutoplayScheduler::new(true, Millis(3000));
        sched.arm(&mut timer);
        sched.halt(&mut timer);

        assert_eq!(sched.arm(&mut timer), None);
        assert_eq!(timer.live_count(), 0);
    }

    #[test]
    fn from_config_copies_autoplay_fields() {
        let sched = AutoplayScheduler::from_config(&SliderConfig::page());
        assert!(sched.is_enabled(), "page preset autoplays");
        assert_eq!(sched.interval(), Millis(3000));
        assert_eq!(sched.live(), None);
    }
}
