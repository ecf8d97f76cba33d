// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and appends every event to a
//! shared log as a [`RecordedEvent`]. Controllers take ownership of their
//! sink, so the recorder is cheaply cloneable: hand one clone to the
//! controller and keep another to read the log back.

use std::cell::RefCell;
use std::rc::Rc;

use glissade_core::trace::{
    AutoplayEvent, IntentRejectedEvent, NavigateEvent, ResizeEvent, ResizeSkippedEvent, TraceSink,
};

/// A recorded trace event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecordedEvent {
    /// A [`NavigateEvent`].
    Navigate(NavigateEvent),
    /// A [`ResizeEvent`].
    Resize(ResizeEvent),
    /// A [`ResizeSkippedEvent`].
    ResizeSkipped(ResizeSkippedEvent),
    /// An [`AutoplayEvent`].
    Autoplay(AutoplayEvent),
    /// An [`IntentRejectedEvent`].
    IntentRejected(IntentRejectedEvent),
}

/// A [`TraceSink`] that records events into a shared log.
#[derive(Clone, Debug, Default)]
pub struct RecorderSink {
    events: Rc<RefCell<Vec<RecordedEvent>>>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.borrow().clone()
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Drains the log, returning what was recorded.
    pub fn take(&self) -> Vec<RecordedEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    fn push(&self, event: RecordedEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl TraceSink for RecorderSink {
    fn on_navigate(&mut self, e: &NavigateEvent) {
        self.push(RecordedEvent::Navigate(*e));
    }

    fn on_resize(&mut self, e: &ResizeEvent) {
        self.push(RecordedEvent::Resize(*e));
    }

    fn on_resize_skipped(&mut self, e: &ResizeSkippedEvent) {
        self.push(RecordedEvent::ResizeSkipped(*e));
    }

    fn on_autoplay(&mut self, e: &AutoplayEvent) {
        self.push(RecordedEvent::Autoplay(*e));
    }

    fn on_intent_rejected(&mut self, e: &IntentRejectedEvent) {
        self.push(RecordedEvent::IntentRejected(*e));
    }
}
