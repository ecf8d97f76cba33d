// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for glissade.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`DomRenderer`]: track transform, slide widths, and active dots
//! - [`WindowTimer`]: `setInterval` autoplay ticks
//! - [`EventListener`]: click and resize subscriptions, removed on drop
//! - [`mount`] / [`bootstrap`]: markup rewriting and wiring for `.slider`
//!   containers
//! - [`LogSink`]: controller events forwarded to the `log` facade

#![no_std]

extern crate alloc;

mod bootstrap;
mod events;
mod log_sink;
mod mount;
mod renderer;
mod timer;

pub use bootstrap::{bootstrap, config_from_attributes};
pub use events::{EventListener, on_container_click, on_window_resize};
pub use glissade_core::backend::Renderer;
pub use log_sink::LogSink;
pub use mount::{MountError, SliderHandle, WebSlider, mount, mount_with_sink};
pub use renderer::DomRenderer;
pub use timer::WindowTimer;
