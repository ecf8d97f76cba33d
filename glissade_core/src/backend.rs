// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! Glissade splits platform-specific work into *backend* crates. Each backend
//! provides the following pieces:
//!
//! - **Renderer**: Implements the [`Renderer`] trait: moves the track,
//!   sizes the slides, toggles pagination markers, and reports the live
//!   container width.
//!
//! - **Timer**: Implements the [`IntervalTimer`] trait over the platform's
//!   repeating timer (e.g. `setInterval`). When an interval fires, the
//!   backend hands the fired [`TimerHandle`] to
//!   [`SliderController::autoplay_tick`].
//!
//! - **Event wiring**: Subscribes to container clicks and window resizes and
//!   forwards them to [`SliderController::handle_click`] and
//!   [`SliderController::resize`]. Subscription mechanics differ too much
//!   between platforms to sit behind a trait.
//!
//! # Crate boundaries
//!
//! `glissade_core` owns the index model, the autoplay lifecycle, the
//! controller, and this contract module. Backend crates depend on
//! `glissade_core` and provide platform glue. Application code depends on
//! both and mounts one controller per slider container.
//!
//! [`SliderController::autoplay_tick`]: crate::controller::SliderController::autoplay_tick
//! [`SliderController::handle_click`]: crate::controller::SliderController::handle_click
//! [`SliderController::resize`]: crate::controller::SliderController::resize

use core::fmt;

use crate::time::Millis;

/// Applies slider render commands to a platform-native presentation tree.
///
/// DOM-based renderers and recording test doubles both implement this trait.
/// All pixel values are CSS pixels.
pub trait Renderer {
    /// Translates the track so that the slide starting at `offset` pixels is
    /// visible. The track moves left, so backends apply `-offset`.
    fn apply_track_offset(&mut self, offset: f64);

    /// Sets every slide to `slide_width` and the track to `track_width`.
    fn set_slide_widths(&mut self, slide_width: f64, track_width: f64);

    /// Marks the pagination marker at `index` as active.
    fn set_marker_active(&mut self, index: usize);

    /// Marks the pagination marker at `index` as inactive.
    fn set_marker_inactive(&mut self, index: usize);

    /// Returns the number of pagination markers, zero when pagination is off.
    fn marker_count(&self) -> usize;

    /// Reads the live width of the slider container.
    ///
    /// May return `0.0` before the host has laid the container out.
    fn read_container_width(&self) -> f64;
}

/// Identifies one started interval.
///
/// Backends assign handles; core only compares them to decide whether a fired
/// tick belongs to the live interval.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(pub u32);

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimerHandle({})", self.0)
    }
}

/// A platform repeating timer.
///
/// Both operations are infallible. Cancelling a handle that already stopped
/// is a no-op.
pub trait IntervalTimer {
    /// Starts a repeating interval that fires every `period`.
    fn start(&mut self, period: Millis) -> TimerHandle;

    /// Stops the interval identified by `handle`.
    fn cancel(&mut self, handle: TimerHandle);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn apply_track_offset(&mut self, offset: f64) {
        (**self).apply_track_offset(offset);
    }

    fn set_slide_widths(&mut self, slide_width: f64, track_width: f64) {
        (**self).set_slide_widths(slide_width, track_width);
    }

    fn set_marker_active(&mut self, index: usize) {
        (**self).set_marker_active(index);
    }

    fn set_marker_inactive(&mut self, index: usize) {
        (**self).set_marker_inactive(index);
    }

    fn marker_count(&self) -> usize {
        (**self).marker_count()
    }

    fn read_container_width(&self) -> f64 {
        (**self).read_container_width()
    }
}

impl<T: IntervalTimer + ?Sized> IntervalTimer for &mut T {
    fn start(&mut self, period: Millis) -> TimerHandle {
        (**self).start(period)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        (**self).cancel(handle);
    }
}
