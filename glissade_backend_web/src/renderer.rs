// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM rendering.
//!
//! [`DomRenderer`] applies [`Renderer`] commands to the elements built by
//! [`mount`](crate::mount()): the track's `transform`, inline widths on the
//! track and slides, and the `active` class on pagination dots.
//!
//! [`Renderer`]: glissade_core::backend::Renderer

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use glissade_core::backend::Renderer;
use glissade_core::intent::ACTIVE_CLASS;
use web_sys::{Element, HtmlElement};

/// Drives a mounted slider's DOM.
pub struct DomRenderer {
    container: HtmlElement,
    track: HtmlElement,
    slides: Vec<HtmlElement>,
    markers: Vec<Element>,
}

impl core::fmt::Debug for DomRenderer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomRenderer")
            .field("container", &"HtmlElement")
            .field("track", &"HtmlElement")
            .field("slides_len", &self.slides.len())
            .field("markers_len", &self.markers.len())
            .finish()
    }
}

impl DomRenderer {
    /// Creates a renderer over already-built slider markup.
    ///
    /// `markers` must be ordered by slide index; pass an empty vec when
    /// pagination is off.
    #[must_use]
    pub fn new(
        container: HtmlElement,
        track: HtmlElement,
        slides: Vec<HtmlElement>,
        markers: Vec<Element>,
    ) -> Self {
        Self {
            container,
            track,
            slides,
            markers,
        }
    }
}

impl Renderer for DomRenderer {
    fn apply_track_offset(&mut self, offset: f64) {
        let _ = self
            .track
            .style()
            .set_property("transform", &translate_css(offset));
    }

    fn set_slide_widths(&mut self, slide_width: f64, track_width: f64) {
        let slide = format!("{slide_width}px");
        for el in &self.slides {
            let _ = el.style().set_property("width", &slide);
        }
        let _ = self
            .track
            .style()
            .set_property("width", &format!("{track_width}px"));
    }

    fn set_marker_active(&mut self, index: usize) {
        if let Some(marker) = self.markers.get(index) {
            let _ = marker.class_list().add_1(ACTIVE_CLASS);
        }
    }

    fn set_marker_inactive(&mut self, index: usize) {
        if let Some(marker) = self.markers.get(index) {
            let _ = marker.class_list().remove_1(ACTIVE_CLASS);
        }
    }

    fn marker_count(&self) -> usize {
        self.markers.len()
    }

    fn read_container_width(&self) -> f64 {
        f64::from(self.container.client_width())
    }
}

/// CSS `transform` value that shifts the track left by `offset` pixels.
pub(crate) fn translate_css(offset: f64) -> String {
    format!("translate3d(-{offset}px, 0px, 0px)")
}

/// CSS `transition` value for the track.
pub(crate) fn transition_css(animation_ms: u32) -> String {
    format!("transform {animation_ms}ms")
}
