// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-level startup: one slider per matching container.

use alloc::boxed::Box;
use alloc::vec::Vec;

use wasm_bindgen::JsCast as _;
use web_sys::{Document, Element, HtmlElement};

use glissade_core::config::{OPTION_ATTRS, SliderConfig};

use crate::log_sink::LogSink;
use crate::mount::{SliderHandle, mount_with_sink};

/// Mounts a slider on every element matching `selector`.
///
/// Each container starts from `defaults` with its own `data-*` option
/// attributes layered on top. Containers that fail to mount are logged and
/// skipped; the rest still start.
pub fn bootstrap(document: &Document, selector: &str, defaults: SliderConfig) -> Vec<SliderHandle> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::error!("invalid slider selector {selector:?}: {err:?}");
            return Vec::new();
        }
    };

    let mut handles = Vec::with_capacity(list.length() as usize);
    for (position, node) in (0..list.length()).filter_map(|i| list.get(i)).enumerate() {
        let Ok(container) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        let config = config_from_attributes(&container, defaults);
        match mount_with_sink(container, config, Box::new(LogSink::new(position))) {
            Ok(handle) => handles.push(handle),
            Err(err) => log::warn!("slider {position} not mounted: {err}"),
        }
    }
    log::info!("mounted {} slider(s) for {selector:?}", handles.len());
    handles
}

/// Reads `data-*` option overrides from `el` on top of `defaults`.
///
/// An unusable value is logged and leaves that option at its default.
#[must_use]
pub fn config_from_attributes(el: &Element, defaults: SliderConfig) -> SliderConfig {
    let mut config = defaults;
    for name in OPTION_ATTRS {
        let Some(value) = el.get_attribute(name) else {
            continue;
        };
        if let Err(err) = config.apply_attribute(name, &value) {
            log::warn!("{err}; keeping default");
        }
    }
    config
}
