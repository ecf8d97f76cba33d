// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for slider transitions.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! [controller](crate::controller) calls as it navigates, resizes, and cycles
//! the autoplay timer. All method bodies default to no-ops, so implementing
//! only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::backend::TimerHandle;
use crate::error::IntentError;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// What triggered a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavigationCause {
    /// A prev/next arrow click.
    Arrow,
    /// A pagination dot click.
    Pagination,
    /// An autoplay tick.
    Autoplay,
    /// A direct call from host code.
    Api,
}

/// What happened to the autoplay interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AutoplayAction {
    /// A new interval started.
    Armed,
    /// The interval was cancelled.
    Disarmed,
    /// The live interval fired.
    Tick,
    /// A cancelled interval fired and was ignored.
    StaleTick,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted after every navigation transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigateEvent {
    /// Index before the transition.
    pub from: usize,
    /// Index after the transition.
    pub to: usize,
    /// What triggered it.
    pub cause: NavigationCause,
    /// Track offset applied, in pixels.
    pub offset: f64,
}

/// Emitted when a resize recomputed the geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeEvent {
    /// New slide width in pixels.
    pub slide_width: f64,
    /// New track width in pixels.
    pub track_width: f64,
    /// Offset reapplied for the current slide.
    pub offset: f64,
}

/// Emitted when a resize read an unusable container width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeSkippedEvent {
    /// The width the renderer reported.
    pub container_width: f64,
}

/// Emitted on every autoplay interval change or fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoplayEvent {
    /// What happened.
    pub action: AutoplayAction,
    /// The interval concerned.
    pub handle: TimerHandle,
}

/// Emitted when a click intent was dropped at the dispatch boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntentRejectedEvent {
    /// Why it was dropped.
    pub error: IntentError,
    /// Index at the time of the click.
    pub current: usize,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from a slider controller.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after a navigation transition.
    fn on_navigate(&mut self, e: &NavigateEvent) {
        _ = e;
    }

    /// Called after a resize applied new geometry.
    fn on_resize(&mut self, e: &ResizeEvent) {
        _ = e;
    }

    /// Called when a resize was skipped.
    fn on_resize_skipped(&mut self, e: &ResizeSkippedEvent) {
        _ = e;
    }

    /// Called on autoplay arm, disarm, and tick.
    fn on_autoplay(&mut self, e: &AutoplayEvent) {
        _ = e;
    }

    /// Called when a click intent was rejected.
    fn on_intent_rejected(&mut self, e: &IntentRejectedEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`NavigateEvent`].
    #[inline]
    pub fn navigate(&mut self, e: &NavigateEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_navigate(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ResizeEvent`].
    #[inline]
    pub fn resize(&mut self, e: &ResizeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_resize(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ResizeSkippedEvent`].
    #[inline]
    pub fn resize_skipped(&mut self, e: &ResizeSkippedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_resize_skipped(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`AutoplayEvent`].
    #[inline]
    pub fn autoplay(&mut self, e: &AutoplayEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_autoplay(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`IntentRejectedEvent`].
    #[inline]
    pub fn intent_rejected(&mut self, e: &IntentRejectedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_intent_rejected(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
