// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Current-slide index and track geometry.
//!
//! [`IndexModel`] owns the current index, the slide count, and the latest
//! [`Geometry`]. Everything here is pure arithmetic; the
//! [controller](crate::controller) decides when to mutate it.
//!
//! # Wrapping
//!
//! [`IndexModel::normalize`] wraps exactly one step past either end:
//!
//! ```text
//!   requested   -1   0   1  ..  n-1   n
//!   normalized  n-1  0   1  ..  n-1   0
//! ```
//!
//! Callers only request `current ± 1` or an in-range pagination index, so the
//! single-step rule is enough. Anything farther out is rejected before it
//! reaches the model (see [`IntentError`](crate::error::IntentError)).

use core::num::NonZeroUsize;

/// Slide and track widths derived from one container measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    slide_width: f64,
    track_width: f64,
}

impl Geometry {
    /// Geometry before the container has a usable width.
    pub const UNMEASURED: Self = Self {
        slide_width: 0.0,
        track_width: 0.0,
    };

    /// Derives geometry from the container width.
    ///
    /// Returns `None` for a zero, negative, or non-finite width, which the
    /// host reports before layout has completed.
    #[must_use]
    pub fn measure(container_width: f64, slides_count: NonZeroUsize) -> Option<Self> {
        if !container_width.is_finite() || container_width <= 0.0 {
            return None;
        }
        Some(Self {
            slide_width: container_width,
            track_width: container_width * slides_count.get() as f64,
        })
    }

    /// Width of one slide (the container width), in pixels.
    #[inline]
    #[must_use]
    pub const fn slide_width(&self) -> f64 {
        self.slide_width
    }

    /// Width of the whole track, in pixels.
    #[inline]
    #[must_use]
    pub const fn track_width(&self) -> f64 {
        self.track_width
    }

    /// Returns `true` once a real width has been measured.
    #[inline]
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.slide_width > 0.0
    }
}

/// The current slide plus the arithmetic over it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexModel {
    current: usize,
    count: NonZeroUsize,
    geometry: Geometry,
}

impl IndexModel {
    /// Creates a model positioned on the first slide.
    #[must_use]
    pub const fn new(count: NonZeroUsize, geometry: Geometry) -> Self {
        Self {
            current: 0,
            count,
            geometry,
        }
    }

    /// Index of the visible slide.
    #[inline]
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Number of slides.
    #[inline]
    #[must_use]
    pub const fn count(&self) -> NonZeroUsize {
        self.count
    }

    /// Latest geometry.
    #[inline]
    #[must_use]
    pub const fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Wraps a requested index one step past either end.
    ///
    /// Values below zero become the last slide, values at or past the count
    /// become the first slide, and everything else passes through.
    #[must_use]
    pub fn normalize(&self, requested: isize) -> usize {
        if requested < 0 {
            return self.count.get() - 1;
        }
        let requested = requested.unsigned_abs();
        if requested >= self.count.get() {
            0
        } else {
            requested
        }
    }

    /// Pixel offset of the slide at `index`.
    #[inline]
    #[must_use]
    pub fn offset_for(&self, index: usize) -> f64 {
        index as f64 * self.geometry.slide_width
    }

    /// Pixel offset of the current slide.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset_for(self.current)
    }

    pub(crate) fn set_current(&mut self, index: usize) {
        debug_assert!(
            index < self.count.get(),
            "index {index} out of range for {} slides",
            self.count
        );
        self.current = index;
    }

    pub(crate) fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = geometry;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn model(n: usize, width: f64) -> IndexModel {
        IndexModel::new(count(n), Geometry::measure(width, count(n)).unwrap())
    }

    #[test]
    fn forward_step_wraps_only_from_last() {
        for n in 1..=6 {
            let m = model(n, 100.0);
            for current in 0..n {
                let next = m.normalize(current as isize + 1);
                if current == n - 1 {
                    assert_eq!(next, 0, "n={n} current={current}");
                } else {
                    assert_eq!(next, current + 1, "n={n} current={current}");
                }
            }
        }
    }

    #[test]
    fn backward_step_from_first_wraps_to_last() {
        for n in 1..=6 {
            assert_eq!(model(n, 100.0).normalize(-1), n - 1, "n={n}");
        }
    }

    #[test]
    fn in_range_passes_through() {
        let m = model(5, 100.0);
        assert_eq!(m.normalize(3), 3);
        assert_eq!(m.normalize(0), 0);
    }

    #[test]
    fn offset_is_index_times_width() {
        let m = model(4, 320.0);
        for i in 0..4 {
            assert_eq!(m.offset_for(i), i as f64 * 320.0);
        }
    }

    #[test]
    fn measure_rejects_unusable_widths() {
        assert_eq!(Geometry::measure(0.0, count(3)), None);
        assert_eq!(Geometry::measure(-10.0, count(3)), None);
        assert_eq!(Geometry::measure(f64::NAN, count(3)), None);

        let g = Geometry::measure(500.0, count(3)).unwrap();
        assert_eq!(g.slide_width(), 500.0);
        assert_eq!(g.track_width(), 1500.0);
        assert!(g.is_measured(), "real width");
        assert!(!Geometry::UNMEASURED.is_measured(), "placeholder");
    }
}
