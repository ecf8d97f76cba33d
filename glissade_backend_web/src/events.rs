// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM event subscription.
//!
//! [`EventListener`] owns a JS closure registered with `addEventListener` and
//! removes it again on drop. [`on_container_click`] resolves each click to a
//! [`ClickTarget`] via closest-ancestor lookup before handing it on, so
//! handlers never see raw DOM nodes.

use alloc::boxed::Box;
use alloc::string::String;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, EventTarget, HtmlElement, Window};

use glissade_core::intent::{ARROW_SELECTOR, ClickTarget, DOT_SELECTOR, INDEX_ATTR, STEP_ATTR};

type ListenerClosure = Closure<dyn FnMut(Event)>;

/// A registered event listener, removed when dropped.
pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    closure: ListenerClosure,
}

impl EventListener {
    /// Registers `handler` for `event_type` events on `target`.
    ///
    /// # Errors
    ///
    /// Returns the JS exception if `addEventListener` throws.
    pub fn new(
        target: &EventTarget,
        event_type: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event_type,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_type,
            self.closure.as_ref().unchecked_ref(),
        );
    }
}

impl core::fmt::Debug for EventListener {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventListener")
            .field("event_type", &self.event_type)
            .finish_non_exhaustive()
    }
}

/// Subscribes to clicks anywhere inside `container`.
///
/// Each click is resolved to the nearest arrow and dot above the event target;
/// `handler` receives their attribute values. Clicks that hit neither control
/// never reach `handler`.
///
/// # Errors
///
/// Returns the JS exception if `addEventListener` throws.
pub fn on_container_click(
    container: &HtmlElement,
    mut handler: impl FnMut(&ClickTarget<'_>) + 'static,
) -> Result<EventListener, JsValue> {
    EventListener::new(container, "click", move |event: Event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let arrow_step = closest_attribute(&target, ARROW_SELECTOR, STEP_ATTR);
        let dot_index = closest_attribute(&target, DOT_SELECTOR, INDEX_ATTR);
        let click = ClickTarget {
            arrow_step: arrow_step.as_deref(),
            dot_index: dot_index.as_deref(),
        };
        if !click.is_empty() {
            handler(&click);
        }
    })
}

/// Subscribes to window resizes.
///
/// # Errors
///
/// Returns the JS exception if `addEventListener` throws.
pub fn on_window_resize(
    window: &Window,
    mut handler: impl FnMut() + 'static,
) -> Result<EventListener, JsValue> {
    EventListener::new(window, "resize", move |_: Event| handler())
}

/// Reads `attribute` from the closest ancestor of `el` (inclusive) matching
/// `selector`.
fn closest_attribute(el: &Element, selector: &str, attribute: &str) -> Option<String> {
    el.closest(selector).ok().flatten()?.get_attribute(attribute)
}
