// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use glissade_core::trace::{
    AutoplayAction, AutoplayEvent, IntentRejectedEvent, NavigateEvent, NavigationCause,
    ResizeEvent, ResizeSkippedEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn cause_name(cause: NavigationCause) -> &'static str {
    match cause {
        NavigationCause::Arrow => "arrow",
        NavigationCause::Pagination => "dot",
        NavigationCause::Autoplay => "autoplay",
        NavigationCause::Api => "api",
    }
}

fn action_name(action: AutoplayAction) -> &'static str {
    match action {
        AutoplayAction::Armed => "armed",
        AutoplayAction::Disarmed => "disarmed",
        AutoplayAction::Tick => "tick",
        AutoplayAction::StaleTick => "stale",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_navigate(&mut self, e: &NavigateEvent) {
        let _ = writeln!(
            self.writer,
            "[navigate] from={} to={} cause={} offset={}px",
            e.from,
            e.to,
            cause_name(e.cause),
            e.offset,
        );
    }

    fn on_resize(&mut self, e: &ResizeEvent) {
        let _ = writeln!(
            self.writer,
            "[resize] slide={}px track={}px offset={}px",
            e.slide_width, e.track_width, e.offset,
        );
    }

    fn on_resize_skipped(&mut self, e: &ResizeSkippedEvent) {
        let _ = writeln!(
            self.writer,
            "[resize:skip] container={}px",
            e.container_width,
        );
    }

    fn on_autoplay(&mut self, e: &AutoplayEvent) {
        let _ = writeln!(
            self.writer,
            "[autoplay] {} handle={}",
            action_name(e.action),
            e.handle.0,
        );
    }

    fn on_intent_rejected(&mut self, e: &IntentRejectedEvent) {
        let _ = writeln!(
            self.writer,
            "[reject] at={} {}",
            e.current, e.error,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glissade_core::backend::TimerHandle;
    use glissade_core::error::IntentError;

    #[test]
    fn pretty_print_navigate() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_navigate(&NavigateEvent {
            from: 3,
            to: 0,
            cause: NavigationCause::Autoplay,
            offset: 0.0,
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "[navigate] from=3 to=0 cause=autoplay offset=0px\n");
    }

    #[test]
    fn one_line_per_event() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_autoplay(&AutoplayEvent {
            action: AutoplayAction::StaleTick,
            handle: TimerHandle(7),
        });
        sink.on_intent_rejected(&IntentRejectedEvent {
            error: IntentError::IndexOutOfRange { index: 9, count: 4 },
            current: 1,
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2, "got: {output}");
        assert_eq!(lines[0], "[autoplay] stale handle=7");
        assert!(lines[1].starts_with("[reject] at=1 "), "got: {output}");
    }
}
