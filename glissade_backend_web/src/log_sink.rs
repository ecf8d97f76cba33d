// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`TraceSink`] that forwards slider events to the `log` facade.
//!
//! Navigation and resizes log at `debug`, autoplay churn at `trace`, and
//! rejected click intents at `warn`. Install any `log` backend (the demo uses
//! `console_log`) to see them in the browser console.

use glissade_core::trace::{
    AutoplayAction, AutoplayEvent, IntentRejectedEvent, NavigateEvent, ResizeEvent,
    ResizeSkippedEvent, TraceSink,
};
use log::{debug, trace, warn};

const TARGET: &str = "glissade";

/// Logs slider events, tagged with the slider's position on the page.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink {
    slider: usize,
}

impl LogSink {
    /// Creates a sink for the `slider`-th mounted slider.
    #[must_use]
    pub const fn new(slider: usize) -> Self {
        Self { slider }
    }
}

impl TraceSink for LogSink {
    fn on_navigate(&mut self, e: &NavigateEvent) {
        debug!(
            target: TARGET,
            "slider={} navigate {} -> {} cause={:?} offset={}px",
            self.slider, e.from, e.to, e.cause, e.offset
        );
    }

    fn on_resize(&mut self, e: &ResizeEvent) {
        debug!(
            target: TARGET,
            "slider={} resize slide={}px track={}px offset={}px",
            self.slider, e.slide_width, e.track_width, e.offset
        );
    }

    fn on_resize_skipped(&mut self, e: &ResizeSkippedEvent) {
        debug!(
            target: TARGET,
            "slider={} resize skipped, container width {}px",
            self.slider, e.container_width
        );
    }

    fn on_autoplay(&mut self, e: &AutoplayEvent) {
        match e.action {
            AutoplayAction::StaleTick => trace!(
                target: TARGET,
                "slider={} ignored stale tick {:?}",
                self.slider, e.handle
            ),
            action => trace!(
                target: TARGET,
                "slider={} autoplay {action:?} {:?}",
                self.slider, e.handle
            ),
        }
    }

    fn on_intent_rejected(&mut self, e: &IntentRejectedEvent) {
        warn!(
            target: TARGET,
            "slider={} ignored click at slide {}: {}",
            self.slider, e.current, e.error
        );
    }
}
