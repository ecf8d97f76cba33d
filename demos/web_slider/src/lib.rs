// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: mounts a slider on every `.slider` element of the page.
//!
//! Each container starts from [`SliderConfig::page`] (arrows, pagination, and
//! a 3 s autoplay) and may override any option through `data-*` attributes.
//! Controller events are logged to the browser console.
//!
//! Build with: `wasm-pack build --target web demos/web_slider`
//!
//! Then serve `demos/web_slider/` and open `index.html` in a browser.

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

use wasm_bindgen::prelude::*;

use glissade_backend_web::{SliderHandle, bootstrap};
use glissade_core::config::SliderConfig;

/// Selector for slider containers.
const SLIDER_SELECTOR: &str = ".slider";

/// Entry point, called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // A second init (hot reload) keeps the first logger.
    let _ = console_log::init_with_level(log::Level::Debug);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // The sliders live as long as the page.
    bootstrap(&document, SLIDER_SELECTOR, SliderConfig::page())
        .into_iter()
        .for_each(SliderHandle::forget);
    Ok(())
}
