// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slider state machine.
//!
//! [`SliderController`] composes an [`IndexModel`] and an
//! [`AutoplayScheduler`], receives environment events, and issues render
//! commands. Every navigation follows the same sequence:
//!
//! ```text
//!   arrow / dot / autoplay tick
//!       │
//!       ▼
//!   resolve target ──► set current ──► apply_track_offset(offset_for(current))
//!                                           │
//!                 ┌─────────────────────────┘
//!                 ▼
//!   activate marker[current], deactivate the rest ──► re-arm autoplay
//! ```
//!
//! Resizes never change the current index; they re-measure the container and
//! reapply sizes plus the offset of the current slide.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::num::NonZeroUsize;

use crate::autoplay::AutoplayScheduler;
use crate::backend::{IntervalTimer, Renderer, TimerHandle};
use crate::config::SliderConfig;
use crate::error::{IntentError, SliderError};
use crate::index::{Geometry, IndexModel};
use crate::intent::{ClickTarget, NavIntent};
use crate::manual::ManualTimer;
use crate::trace::{
    AutoplayAction, AutoplayEvent, IntentRejectedEvent, NavigateEvent, NavigationCause,
    ResizeEvent, ResizeSkippedEvent, TraceSink, Tracer,
};

/// One carousel: current slide, geometry, autoplay, and the backends they
/// drive.
///
/// All methods run to completion on the host's event loop. Each navigation
/// finishes its render commands and re-arm before returning, so transitions
/// never interleave.
pub struct SliderController<R, T> {
    index: IndexModel,
    autoplay: AutoplayScheduler,
    renderer: R,
    timer: T,
    config: SliderConfig,
    sink: Option<Box<dyn TraceSink>>,
}

impl<R, T> fmt::Debug for SliderController<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderController")
            .field("index", &self.index)
            .field("autoplay", &self.autoplay)
            .field("config", &self.config)
            .field("traced", &self.sink.is_some())
            .finish_non_exhaustive()
    }
}

impl<R: Renderer, T: IntervalTimer> SliderController<R, T> {
    /// Creates a controller on the first slide.
    ///
    /// Measures the container, applies sizes and the initial offset, activates
    /// the first pagination marker (if any), and arms autoplay when enabled.
    /// A zero container width leaves the slides unsized until the first
    /// usable [`resize`](Self::resize).
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::NoSlides`] when `slides_count` is zero and
    /// [`SliderError::ZeroInterval`] when autoplay is enabled with a zero
    /// interval.
    pub fn new(
        renderer: R,
        timer: T,
        slides_count: usize,
        config: SliderConfig,
    ) -> Result<Self, SliderError> {
        Self::build(renderer, timer, slides_count, config, None)
    }

    /// Like [`new`](Self::new), reporting every event to `sink`.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn with_sink(
        renderer: R,
        timer: T,
        slides_count: usize,
        config: SliderConfig,
        sink: Box<dyn TraceSink>,
    ) -> Result<Self, SliderError> {
        Self::build(renderer, timer, slides_count, config, Some(sink))
    }

    fn build(
        renderer: R,
        timer: T,
        slides_count: usize,
        config: SliderConfig,
        sink: Option<Box<dyn TraceSink>>,
    ) -> Result<Self, SliderError> {
        let count = NonZeroUsize::new(slides_count).ok_or(SliderError::NoSlides)?;
        config.validate()?;

        let geometry = Geometry::measure(renderer.read_container_width(), count)
            .unwrap_or(Geometry::UNMEASURED);

        let mut slider = Self {
            index: IndexModel::new(count, geometry),
            autoplay: AutoplayScheduler::from_config(&config),
            renderer,
            timer,
            config,
            sink,
        };
        slider.apply_geometry();
        slider.update_pagination();
        slider.rearm();
        Ok(slider)
    }

    // -- navigation --------------------------------------------------------

    /// Advances one slide, wrapping from the last to the first.
    pub fn next(&mut self) -> usize {
        let next = self.index.normalize(self.index.current() as isize + 1);
        self.transition(next, NavigationCause::Api)
    }

    /// Goes back one slide, wrapping from the first to the last.
    pub fn prev(&mut self) -> usize {
        let prev = self.index.normalize(self.index.current() as isize - 1);
        self.transition(prev, NavigationCause::Api)
    }

    /// Moves by a signed step, exactly as an arrow carrying `delta` would.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError::StepOutOfRange`] when the step lands more than
    /// one position outside the slide range.
    pub fn step(&mut self, delta: isize) -> Result<usize, IntentError> {
        self.dispatch(NavIntent::Step(delta), NavigationCause::Api)
    }

    /// Jumps straight to `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError::IndexOutOfRange`] when `index` is not a slide.
    pub fn go_to(&mut self, index: usize) -> Result<usize, IntentError> {
        self.dispatch(NavIntent::Jump(index), NavigationCause::Api)
    }

    /// Handles a click somewhere inside the container.
    ///
    /// The arrow and dot parts of `target` are checked independently. Rejected
    /// intents are reported to the trace sink and otherwise ignored. Returns
    /// the index after the last successful navigation, or `None` if the click
    /// did not navigate.
    pub fn handle_click(&mut self, target: &ClickTarget<'_>) -> Option<usize> {
        let mut landed = None;
        for intent in target.intents() {
            let outcome = match intent {
                Ok(intent @ NavIntent::Step(_)) => self.dispatch(intent, NavigationCause::Arrow),
                Ok(intent @ NavIntent::Jump(_)) => {
                    self.dispatch(intent, NavigationCause::Pagination)
                }
                Err(error) => {
                    self.reject(error);
                    Err(error)
                }
            };
            if let Ok(index) = outcome {
                landed = Some(index);
            }
        }
        landed
    }

    /// Handles a fired autoplay interval.
    ///
    /// Advances one slide if `handle` is the live interval and returns `true`.
    /// Ticks from an interval that was already replaced are ignored.
    pub fn autoplay_tick(&mut self, handle: TimerHandle) -> bool {
        if !self.autoplay.is_live(handle) {
            self.tracer().autoplay(&AutoplayEvent {
                action: AutoplayAction::StaleTick,
                handle,
            });
            return false;
        }
        self.tracer().autoplay(&AutoplayEvent {
            action: AutoplayAction::Tick,
            handle,
        });
        let next = self.index.normalize(self.index.current() as isize + 1);
        self.transition(next, NavigationCause::Autoplay);
        true
    }

    /// Re-measures the container after a viewport resize.
    ///
    /// Keeps the current index and reapplies sizes and offset. Returns `false`
    /// without touching anything when the container reports no usable width.
    pub fn resize(&mut self) -> bool {
        let container_width = self.renderer.read_container_width();
        let Some(geometry) = Geometry::measure(container_width, self.index.count()) else {
            self.tracer()
                .resize_skipped(&ResizeSkippedEvent { container_width });
            return false;
        };
        self.index.set_geometry(geometry);
        self.apply_geometry();

        let offset = self.index.offset();
        self.tracer().resize(&ResizeEvent {
            slide_width: geometry.slide_width(),
            track_width: geometry.track_width(),
            offset,
        });
        true
    }

    /// Stops autoplay for good. Navigation keeps working but never re-arms.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.autoplay.halt(&mut self.timer) {
            self.tracer().autoplay(&AutoplayEvent {
                action: AutoplayAction::Disarmed,
                handle,
            });
        }
    }

    // -- accessors ---------------------------------------------------------

    /// Index of the visible slide.
    #[must_use]
    pub fn current(&self) -> usize {
        self.index.current()
    }

    /// Number of slides.
    #[must_use]
    pub fn slides_count(&self) -> usize {
        self.index.count().get()
    }

    /// Latest geometry.
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.index.geometry()
    }

    /// Offset of the current slide, in pixels.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.index.offset()
    }

    /// The index model.
    #[must_use]
    pub fn index(&self) -> &IndexModel {
        &self.index
    }

    /// Construction options.
    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Returns `true` while an autoplay interval is live.
    #[must_use]
    pub fn is_autoplay_armed(&self) -> bool {
        self.autoplay.live().is_some()
    }

    /// The renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The timer.
    #[must_use]
    pub fn timer(&self) -> &T {
        &self.timer
    }

    // -- internals ---------------------------------------------------------

    fn resolve(&self, intent: NavIntent) -> Result<usize, IntentError> {
        let count = self.index.count().get();
        match intent {
            NavIntent::Step(step) => {
                let current = self.index.current();
                let out_of_range = IntentError::StepOutOfRange {
                    step,
                    current,
                    count,
                };
                let requested = (current as isize)
                    .checked_add(step)
                    .ok_or(out_of_range)?;
                if requested < -1 || requested > count as isize {
                    return Err(out_of_range);
                }
                Ok(self.index.normalize(requested))
            }
            NavIntent::Jump(index) if index < count => Ok(index),
            NavIntent::Jump(index) => Err(IntentError::IndexOutOfRange { index, count }),
        }
    }

    fn dispatch(&mut self, intent: NavIntent, cause: NavigationCause) -> Result<usize, IntentError> {
        match self.resolve(intent) {
            Ok(next) => Ok(self.transition(next, cause)),
            Err(error) => {
                self.reject(error);
                Err(error)
            }
        }
    }

    fn transition(&mut self, next: usize, cause: NavigationCause) -> usize {
        let from = self.index.current();
        self.index.set_current(next);

        let offset = self.index.offset();
        self.renderer.apply_track_offset(offset);
        self.update_pagination();
        self.tracer().navigate(&NavigateEvent {
            from,
            to: next,
            cause,
            offset,
        });
        self.rearm();
        next
    }

    fn apply_geometry(&mut self) {
        let geometry = self.index.geometry();
        if geometry.is_measured() {
            self.renderer
                .set_slide_widths(geometry.slide_width(), geometry.track_width());
        }
        self.renderer.apply_track_offset(self.index.offset());
    }

    fn update_pagination(&mut self) {
        let current = self.index.current();
        for marker in 0..self.renderer.marker_count() {
            if marker == current {
                self.renderer.set_marker_active(marker);
            } else {
                self.renderer.set_marker_inactive(marker);
            }
        }
    }

    fn rearm(&mut self) {
        if let Some(handle) = self.autoplay.arm(&mut self.timer) {
            self.tracer().autoplay(&AutoplayEvent {
                action: AutoplayAction::Armed,
                handle,
            });
        }
    }

    fn reject(&mut self, error: IntentError) {
        let current = self.index.current();
        self.tracer()
            .intent_rejected(&IntentRejectedEvent { error, current });
    }

    fn tracer(&mut self) -> Tracer<'_> {
        match self.sink.as_deref_mut() {
            Some(sink) => Tracer::new(sink),
            None => Tracer::none(),
        }
    }
}

impl<R: Renderer> SliderController<R, ManualTimer> {
    /// Advances the virtual clock to `deadline`, delivering each fire in
    /// order through [`autoplay_tick`](Self::autoplay_tick).
    ///
    /// Returns the index every tick landed on. Each tick re-arms autoplay, so
    /// fires are polled one at a time against the interval that replaced the
    /// last one.
    pub fn poll_autoplay(&mut self, deadline: u64) -> Vec<usize> {
        let mut landed = Vec::new();
        while let Some(handle) = self.timer.poll_until(deadline) {
            if self.autoplay_tick(handle) {
                landed.push(self.index.current());
            }
        }
        landed
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;
    use crate::time::Millis;

    #[derive(Debug, Default)]
    struct RecordingRenderer {
        width: f64,
        markers: Vec<bool>,
        offsets: Vec<f64>,
        widths: Vec<(f64, f64)>,
    }

    impl RecordingRenderer {
        fn new(width: f64, markers: usize) -> Self {
            Self {
                width,
                markers: vec![false; markers],
                ..Self::default()
            }
        }

        fn active_markers(&self) -> Vec<usize> {
            self.markers
                .iter()
                .enumerate()
                .filter_map(|(i, &active)| active.then_some(i))
                .collect()
        }
    }

    impl Renderer for RecordingRenderer {
        fn apply_track_offset(&mut self, offset: f64) {
            self.offsets.push(offset);
        }

        fn set_slide_widths(&mut self, slide_width: f64, track_width: f64) {
            self.widths.push((slide_width, track_width));
        }

        fn set_marker_active(&mut self, index: usize) {
            self.markers[index] = true;
        }

        fn set_marker_inactive(&mut self, index: usize) {
            self.markers[index] = false;
        }

        fn marker_count(&self) -> usize {
            self.markers.len()
        }

        fn read_container_width(&self) -> f64 {
            self.width
        }
    }

    type Slider = SliderController<RecordingRenderer, ManualTimer>;

    fn paginated() -> SliderConfig {
        SliderConfig {
            pagination: true,
            ..SliderConfig::new()
        }
    }

    fn autoplaying(interval: u32) -> SliderConfig {
        SliderConfig {
            pagination: true,
            autoplay: true,
            autoplay_interval: Millis(interval),
            ..SliderConfig::new()
        }
    }

    fn slider(count: usize, width: f64, config: SliderConfig) -> Slider {
        let markers = if config.pagination { count } else { 0 };
        SliderController::new(
            RecordingRenderer::new(width, markers),
            ManualTimer::new(),
            count,
            config,
        )
        .unwrap()
    }

    fn assert_consistent(slider: &Slider) {
        let current = slider.current();
        assert_eq!(
            slider.renderer().offsets.last().copied(),
            Some(slider.index().offset_for(current)),
            "offset must track current index {current}"
        );
        if slider.renderer().marker_count() > 0 {
            assert_eq!(
                slider.renderer().active_markers(),
                [current],
                "exactly one active marker"
            );
        }
    }

    #[test]
    fn initial_state_is_first_slide() {
        let s = slider(4, 300.0, autoplaying(3000));

        assert_eq!(s.current(), 0);
        assert_eq!(s.renderer().offsets, [0.0]);
        assert_eq!(s.renderer().widths, [(300.0, 1200.0)]);
        assert_eq!(s.renderer().active_markers(), [0]);
        assert!(s.is_autoplay_armed(), "autoplay armed at start");
        assert_eq!(s.timer().live_count(), 1);
    }

    #[test]
    fn zero_slides_rejected() {
        let err = SliderController::new(
            RecordingRenderer::new(300.0, 0),
            ManualTimer::new(),
            0,
            SliderConfig::new(),
        )
        .unwrap_err();
        assert_eq!(err, SliderError::NoSlides);
    }

    #[test]
    fn zero_interval_rejected_only_with_autoplay() {
        let err = SliderController::new(
            RecordingRenderer::new(300.0, 0),
            ManualTimer::new(),
            3,
            autoplaying(0),
        )
        .unwrap_err();
        assert_eq!(err, SliderError::ZeroInterval);

        let config = SliderConfig {
            autoplay_interval: Millis(0),
            ..SliderConfig::new()
        };
        assert!(
            SliderController::new(RecordingRenderer::new(300.0, 0), ManualTimer::new(), 3, config)
                .is_ok(),
            "interval unused without autoplay"
        );
    }

    #[test]
    fn right_arrow_four_times_wraps() {
        let mut s = slider(4, 300.0, paginated());
        let visited: Vec<_> = (0..4)
            .map(|_| s.handle_click(&ClickTarget::arrow("1")).unwrap())
            .collect();
        assert_eq!(visited, [1, 2, 3, 0]);
        assert_consistent(&s);
    }

    #[test]
    fn left_arrow_from_first_goes_to_last() {
        let mut s = slider(4, 300.0, paginated());
        assert_eq!(s.handle_click(&ClickTarget::arrow("-1")), Some(3));
        assert_eq!(s.renderer().offsets.last(), Some(&900.0));
        assert_consistent(&s);
    }

    #[test]
    fn dot_jumps_directly() {
        let mut s = slider(5, 200.0, paginated());
        assert_eq!(s.handle_click(&ClickTarget::dot("3")), Some(3));
        // Initial offset plus exactly one navigation, no intermediate steps.
        assert_eq!(s.renderer().offsets, [0.0, 600.0]);
        assert_eq!(s.renderer().active_markers(), [3]);
    }

    #[test]
    fn resize_keeps_index_and_rescales() {
        let mut s = slider(4, 300.0, paginated());
        s.go_to(2).unwrap();
        assert_eq!(s.offset(), 600.0);

        s.renderer.width = 500.0;
        assert!(s.resize(), "usable width");

        assert_eq!(s.current(), 2);
        assert_eq!(s.renderer().offsets.last(), Some(&1000.0));
        assert_eq!(s.renderer().widths.last(), Some(&(500.0, 2000.0)));
        assert_eq!(s.geometry().track_width(), 2000.0);
        assert_consistent(&s);
    }

    #[test]
    fn zero_width_resize_is_a_noop() {
        let mut s = slider(3, 300.0, paginated());
        s.next();
        let offsets = s.renderer().offsets.len();

        s.renderer.width = 0.0;
        assert!(!s.resize(), "zero width skipped");
        assert_eq!(s.renderer().offsets.len(), offsets);
        assert_eq!(s.geometry().slide_width(), 300.0);
    }

    #[test]
    fn unmeasured_container_sizes_on_first_resize() {
        let mut s = slider(3, 0.0, paginated());
        assert!(s.renderer().widths.is_empty(), "nothing to size yet");
        assert_eq!(s.renderer().offsets, [0.0]);

        s.next();
        assert_eq!(s.offset(), 0.0);

        s.renderer.width = 400.0;
        assert!(s.resize(), "layout arrived");
        assert_eq!(s.renderer().widths, [(400.0, 1200.0)]);
        assert_eq!(s.renderer().offsets.last(), Some(&400.0));
    }

    #[test]
    fn one_active_marker_across_long_sequences() {
        let mut s = slider(7, 120.0, paginated());
        // Small LCG so the sequence is deterministic without extra crates.
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            match seed >> 30 {
                0 => {
                    s.handle_click(&ClickTarget::arrow("1"));
                }
                1 => {
                    s.handle_click(&ClickTarget::arrow("-1"));
                }
                _ => {
                    let dot = alloc::format!("{}", (seed >> 8) % 7);
                    s.handle_click(&ClickTarget::dot(&dot));
                }
            }
            assert!(s.current() < 7, "index in range");
            assert_consistent(&s);
        }
    }

    #[test]
    fn out_of_range_intents_are_ignored() {
        let mut s = slider(4, 300.0, paginated());
        let offsets = s.renderer().offsets.len();

        assert_eq!(s.handle_click(&ClickTarget::dot("9")), None);
        assert_eq!(s.handle_click(&ClickTarget::arrow("abc")), None);
        assert_eq!(s.handle_click(&ClickTarget::default()), None);
        assert_eq!(
            s.step(5),
            Err(IntentError::StepOutOfRange {
                step: 5,
                current: 0,
                count: 4
            })
        );
        assert_eq!(
            s.go_to(4),
            Err(IntentError::IndexOutOfRange { index: 4, count: 4 })
        );

        assert_eq!(s.current(), 0);
        assert_eq!(s.renderer().offsets.len(), offsets, "no render commands");
    }

    #[test]
    fn api_step_uses_single_step_wrapping() {
        let mut s = slider(4, 100.0, SliderConfig::new());
        assert_eq!(s.step(-1), Ok(3));
        assert_eq!(s.step(1), Ok(0));
        assert_eq!(s.step(2), Ok(2));
        assert_eq!(s.prev(), 1);
        assert_eq!(s.next(), 2);
    }

    #[test]
    fn without_pagination_navigation_still_works() {
        let mut s = slider(3, 100.0, SliderConfig::new());
        assert_eq!(s.renderer().marker_count(), 0);
        assert_eq!(s.handle_click(&ClickTarget::arrow("1")), Some(1));
        assert_consistent(&s);
    }

    #[test]
    fn autoplay_cycles_and_wraps() {
        let mut s = slider(3, 100.0, autoplaying(3000));
        for (deadline, expected) in [(3_000, 1), (6_000, 2), (9_000, 0), (12_000, 1)] {
            assert_eq!(s.poll_autoplay(deadline), [expected], "tick at {deadline}");
            assert_consistent(&s);
        }
    }

    #[test]
    fn click_hitting_arrow_and_dot_applies_both_in_order() {
        let mut s = slider(4, 300.0, paginated());
        let both = ClickTarget {
            arrow_step: Some("1"),
            dot_index: Some("3"),
        };
        assert_eq!(s.handle_click(&both), Some(3));
        assert_eq!(s.renderer().offsets, [0.0, 300.0, 900.0]);
        assert_consistent(&s);

        // A rejected dot does not undo the arrow.
        let bad_dot = ClickTarget {
            arrow_step: Some("-1"),
            dot_index: Some("7"),
        };
        assert_eq!(s.handle_click(&bad_dot), Some(2));
        assert_consistent(&s);
    }

    fn assert_armed_matches_timer(s: &Slider, after: &str) {
        let live = s.timer().live_count();
        assert!(live <= 1, "at most one interval after {after}, got {live}");
        assert_eq!(
            s.is_autoplay_armed(),
            live == 1,
            "armed flag disagrees with timer after {after}"
        );
    }

    #[test]
    fn armed_flag_always_matches_live_interval() {
        let mut s = slider(4, 100.0, autoplaying(1000));
        assert_armed_matches_timer(&s, "construction");

        s.handle_click(&ClickTarget::arrow("1"));
        assert_armed_matches_timer(&s, "arrow");
        s.handle_click(&ClickTarget::dot("9"));
        assert_armed_matches_timer(&s, "rejected dot");
        s.go_to(3).unwrap();
        assert_armed_matches_timer(&s, "go_to");
        assert_eq!(s.poll_autoplay(5_000).len(), 5);
        assert_armed_matches_timer(&s, "autoplay ticks");
        assert!(!s.autoplay_tick(TimerHandle(1)), "first handle is stale");
        assert_armed_matches_timer(&s, "stale tick");
        s.renderer.width = 0.0;
        s.resize();
        assert_armed_matches_timer(&s, "skipped resize");
        s.teardown();
        assert_armed_matches_timer(&s, "teardown");
        s.next();
        assert_armed_matches_timer(&s, "navigation after teardown");
    }

    #[test]
    fn manual_navigation_restarts_autoplay_countdown() {
        let mut s = slider(4, 100.0, autoplaying(3000));

        assert!(s.poll_autoplay(2_000).is_empty(), "nothing due yet");
        s.handle_click(&ClickTarget::arrow("1"));

        // The first interval would have fired at 3000.
        assert!(s.poll_autoplay(4_999).is_empty(), "countdown restarted");
        assert_eq!(s.poll_autoplay(5_000), [2]);
        assert_eq!(s.timer().live_count(), 1);
    }

    #[test]
    fn stale_tick_is_ignored() {
        let mut s = slider(4, 100.0, autoplaying(3000));
        let stale = TimerHandle(1);
        assert_eq!(s.timer().live_count(), 1, "armed");

        s.next();
        assert!(!s.autoplay_tick(stale), "replaced interval");
        assert_eq!(s.current(), 1);
    }

    #[test]
    fn teardown_disarms_for_good() {
        let mut s = slider(4, 100.0, autoplaying(3000));
        s.teardown();
        assert!(!s.is_autoplay_armed(), "disarmed");
        assert_eq!(s.timer().live_count(), 0);

        s.next();
        assert!(!s.is_autoplay_armed(), "navigation does not re-arm");
        assert!(s.poll_autoplay(30_000).is_empty(), "no ticks");
    }

    #[cfg(feature = "trace")]
    #[test]
    fn sink_sees_navigation_causes() {
        use alloc::rc::Rc;
        use core::cell::RefCell;

        #[derive(Default)]
        struct CauseSink {
            causes: Rc<RefCell<Vec<NavigationCause>>>,
            rejected: Rc<RefCell<usize>>,
        }
        impl TraceSink for CauseSink {
            fn on_navigate(&mut self, e: &NavigateEvent) {
                self.causes.borrow_mut().push(e.cause);
            }
            fn on_intent_rejected(&mut self, _e: &IntentRejectedEvent) {
                *self.rejected.borrow_mut() += 1;
            }
        }

        let sink = CauseSink::default();
        let causes = Rc::clone(&sink.causes);
        let rejected = Rc::clone(&sink.rejected);
        let mut s = SliderController::with_sink(
            RecordingRenderer::new(100.0, 4),
            ManualTimer::new(),
            4,
            autoplaying(1000),
            Box::new(sink),
        )
        .unwrap();

        s.handle_click(&ClickTarget::arrow("1"));
        s.handle_click(&ClickTarget::dot("3"));
        s.handle_click(&ClickTarget::dot("8"));
        assert_eq!(s.poll_autoplay(1_000), [0]);
        s.next();

        assert_eq!(
            *causes.borrow(),
            [
                NavigationCause::Arrow,
                NavigationCause::Pagination,
                NavigationCause::Autoplay,
                NavigationCause::Api,
            ]
        );
        assert_eq!(*rejected.borrow(), 1);
    }
}
