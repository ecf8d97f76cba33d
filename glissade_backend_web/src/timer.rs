// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `setInterval` autoplay timer.
//!
//! [`WindowTimer`] implements [`IntervalTimer`] over the browser's
//! `setInterval` / `clearInterval`. A single JS closure serves every interval
//! the timer starts: each `setInterval` call passes the interval's
//! [`TimerHandle`] as an extra argument, and the closure forwards it to the
//! host's `on_fire` callback. The closure therefore never needs to be dropped
//! while it is running, even when a tick re-arms the timer.
//!
//! [`IntervalTimer`]: glissade_core::backend::IntervalTimer

use alloc::boxed::Box;
use alloc::vec::Vec;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use glissade_core::backend::{IntervalTimer, TimerHandle};
use glissade_core::time::Millis;

// Direct global bindings instead of `web_sys::Window` methods, so the extra
// handle argument can be passed through to the callback.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "setInterval")]
    fn set_interval(handler: &JsValue, timeout: i32, handle: u32) -> i32;

    #[wasm_bindgen(js_name = "clearInterval")]
    fn clear_interval(id: i32);
}

type TickClosure = Closure<dyn FnMut(u32)>;

/// A `setInterval`-backed [`IntervalTimer`].
///
/// Dropping the timer clears every interval it started.
pub struct WindowTimer {
    /// The JS closure registered with every `setInterval` call.
    closure: TickClosure,

    /// Started intervals as `(handle, setInterval id)` pairs.
    live: Vec<(TimerHandle, i32)>,

    /// Last handle value handed out.
    last_handle: u32,
}

impl WindowTimer {
    /// Creates a timer that reports each fire to `on_fire`.
    pub fn new(mut on_fire: impl FnMut(TimerHandle) + 'static) -> Self {
        let closure = Closure::wrap(Box::new(move |handle: u32| {
            on_fire(TimerHandle(handle));
        }) as Box<dyn FnMut(u32)>);

        Self {
            closure,
            live: Vec::new(),
            last_handle: 0,
        }
    }
}

impl IntervalTimer for WindowTimer {
    fn start(&mut self, period: Millis) -> TimerHandle {
        self.last_handle = self.last_handle.wrapping_add(1);
        let handle = TimerHandle(self.last_handle);
        let timeout = i32::try_from(period.get()).unwrap_or(i32::MAX);
        let id = set_interval(self.closure.as_ref(), timeout, handle.0);
        self.live.push((handle, id));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.live.retain(|&(live, id)| {
            if live == handle {
                clear_interval(id);
                false
            } else {
                true
            }
        });
    }
}

impl Drop for WindowTimer {
    fn drop(&mut self) {
        for (_, id) in self.live.drain(..) {
            clear_interval(id);
        }
    }
}

impl core::fmt::Debug for WindowTimer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowTimer")
            .field("live", &self.live)
            .field("last_handle", &self.last_handle)
            .finish_non_exhaustive()
    }
}
