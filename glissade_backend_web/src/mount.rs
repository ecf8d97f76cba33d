// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning a `.slider` container into a live slider.
//!
//! [`mount`] rewrites the container's markup (track, arrows, pagination),
//! builds a [`WebSlider`] over it, and wires clicks, window resizes, and
//! autoplay ticks back into the controller. The returned [`SliderHandle`]
//! owns all of it.

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use glissade_core::config::SliderConfig;
use glissade_core::controller::SliderController;
use glissade_core::error::SliderError;
use glissade_core::intent::{
    ARROW_CLASS, DOT_CLASS, ITEM_SELECTOR, LEFT_ARROW_CLASS, NavIntent, PAGINATION_CLASS,
    RIGHT_ARROW_CLASS, TRACK_CLASS,
};
use glissade_core::trace::TraceSink;

use crate::events::{EventListener, on_container_click, on_window_resize};
use crate::log_sink::LogSink;
use crate::renderer::{DomRenderer, transition_css};
use crate::timer::WindowTimer;

/// A slider controller driving the DOM.
pub type WebSlider = SliderController<DomRenderer, WindowTimer>;

type SharedSlider = Rc<RefCell<WebSlider>>;

/// Errors from [`mount`].
#[derive(Debug)]
pub enum MountError {
    /// The controller refused the container or config.
    Slider(SliderError),
    /// A DOM call threw.
    Dom(JsValue),
    /// The container has no owning document or window.
    Detached,
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slider(err) => write!(f, "{err}"),
            Self::Dom(err) => write!(f, "DOM call failed: {err:?}"),
            Self::Detached => f.write_str("slider container is not attached to a window"),
        }
    }
}

impl core::error::Error for MountError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Slider(err) => Some(err),
            Self::Dom(_) | Self::Detached => None,
        }
    }
}

impl From<SliderError> for MountError {
    fn from(err: SliderError) -> Self {
        Self::Slider(err)
    }
}

impl From<JsValue> for MountError {
    fn from(err: JsValue) -> Self {
        Self::Dom(err)
    }
}

/// A mounted slider.
///
/// Dropping the handle halts autoplay, removes the click and resize listeners,
/// and clears the interval. The rewritten markup stays in place.
pub struct SliderHandle {
    slider: SharedSlider,
    _click: EventListener,
    _resize: EventListener,
}

impl SliderHandle {
    /// The shared controller, for programmatic navigation.
    #[must_use]
    pub fn slider(&self) -> &Rc<RefCell<WebSlider>> {
        &self.slider
    }

    /// Index of the visible slide.
    #[must_use]
    pub fn current(&self) -> usize {
        self.slider.borrow().current()
    }

    /// Keeps the slider running for the rest of the page's life.
    pub fn forget(self) {
        core::mem::forget(self);
    }
}

impl Drop for SliderHandle {
    fn drop(&mut self) {
        if let Ok(mut slider) = self.slider.try_borrow_mut() {
            slider.teardown();
        }
    }
}

impl fmt::Debug for SliderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderHandle")
            .field("slider", &self.slider)
            .finish_non_exhaustive()
    }
}

/// Mounts a slider on `container`, logging through [`LogSink`].
///
/// # Errors
///
/// See [`mount_with_sink`].
pub fn mount(container: HtmlElement, config: SliderConfig) -> Result<SliderHandle, MountError> {
    mount_with_sink(container, config, Box::new(LogSink::default()))
}

/// Mounts a slider on `container`, reporting controller events to `sink`.
///
/// The container's children move into a new track element; arrows and a
/// pagination list are appended after it as `config` asks. Nothing is
/// touched when the container has no HTML `.slider-item` or `config` is
/// invalid.
///
/// # Errors
///
/// Returns [`MountError::Slider`] for an empty container or an invalid
/// config, [`MountError::Detached`] when the container is not in a document
/// with a window, and [`MountError::Dom`] when a DOM call throws part-way.
pub fn mount_with_sink(
    container: HtmlElement,
    config: SliderConfig,
    sink: Box<dyn TraceSink>,
) -> Result<SliderHandle, MountError> {
    // Slides are collected before the markup changes; moving them into the
    // track keeps the same nodes.
    let slides = collect_slides(&container)?;
    if slides.is_empty() {
        return Err(SliderError::NoSlides.into());
    }
    config.validate()?;
    let document = container.owner_document().ok_or(MountError::Detached)?;
    let window = web_sys::window().ok_or(MountError::Detached)?;

    let track = build_track(&document, &container, &config)?;
    if config.arrows {
        append_arrows(&document, &container)?;
    }
    let markers = if config.pagination {
        append_pagination(&document, &container, slides.len())?
    } else {
        Vec::new()
    };

    // The timer callback needs the controller that owns the timer. The slot
    // is filled once the controller exists.
    let slot: Rc<RefCell<Weak<RefCell<WebSlider>>>> = Rc::default();
    let timer = {
        let slot = Rc::clone(&slot);
        WindowTimer::new(move |handle| {
            let Some(slider) = slot.borrow().upgrade() else {
                return;
            };
            if let Ok(mut slider) = slider.try_borrow_mut() {
                slider.autoplay_tick(handle);
            }
        })
    };

    let count = slides.len();
    let renderer = DomRenderer::new(container.clone(), track, slides, markers);
    let slider = Rc::new(RefCell::new(SliderController::with_sink(
        renderer, timer, count, config, sink,
    )?));
    *slot.borrow_mut() = Rc::downgrade(&slider);

    let click = {
        let weak = Rc::downgrade(&slider);
        on_container_click(&container, move |target| {
            let Some(slider) = weak.upgrade() else {
                return;
            };
            if let Ok(mut slider) = slider.try_borrow_mut() {
                slider.handle_click(target);
            }
        })?
    };
    let resize = {
        let weak = Rc::downgrade(&slider);
        on_window_resize(&window, move || {
            let Some(slider) = weak.upgrade() else {
                return;
            };
            if let Ok(mut slider) = slider.try_borrow_mut() {
                slider.resize();
            }
        })?
    };

    Ok(SliderHandle {
        slider,
        _click: click,
        _resize: resize,
    })
}

/// Moves the container's children into a fresh track and appends it.
fn build_track(
    document: &Document,
    container: &HtmlElement,
    config: &SliderConfig,
) -> Result<HtmlElement, JsValue> {
    let track: HtmlElement = document.create_element("div")?.unchecked_into();
    track.set_class_name(TRACK_CLASS);
    let _ = track
        .style()
        .set_property("transition", &transition_css(config.animation_time.get()));

    while let Some(child) = container.first_child() {
        track.append_child(&child)?;
    }
    container.append_child(&track)?;
    Ok(track)
}

/// The container's `.slider-item` elements, in document order. Non-HTML
/// items (SVG) cannot be sized and are left out.
fn collect_slides(container: &HtmlElement) -> Result<Vec<HtmlElement>, JsValue> {
    let list = container.query_selector_all(ITEM_SELECTOR)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

fn append_arrows(document: &Document, container: &HtmlElement) -> Result<(), JsValue> {
    for (intent, side, label) in [
        (NavIntent::PREV, LEFT_ARROW_CLASS, "<"),
        (NavIntent::NEXT, RIGHT_ARROW_CLASS, ">"),
    ] {
        let button = document.create_element("button")?;
        let (name, value) = intent.to_attribute();
        button.set_attribute(name, &value)?;
        button.set_class_name(&format!("{ARROW_CLASS} {side}"));
        button.set_text_content(Some(label));
        container.append_child(&button)?;
    }
    Ok(())
}

/// Appends one dot per slide and returns them in slide order.
fn append_pagination(
    document: &Document,
    container: &HtmlElement,
    count: usize,
) -> Result<Vec<Element>, JsValue> {
    let list = document.create_element("ul")?;
    list.set_class_name(PAGINATION_CLASS);
    let mut dots = Vec::with_capacity(count);
    for index in 0..count {
        let dot = document.create_element("li")?;
        dot.set_class_name(DOT_CLASS);
        let (name, value) = NavIntent::Jump(index).to_attribute();
        dot.set_attribute(name, &value)?;
        list.append_child(&dot)?;
        dots.push(dot);
    }
    container.append_child(&list)?;
    Ok(dots)
}
