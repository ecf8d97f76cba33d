// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State and transition engine for single-view carousels.
//!
//! `glissade_core` decides which slide is shown and what happens next,
//! independent of how anything is drawn. It is `no_std` compatible (with
//! `alloc`) and reaches the page only through the [`Renderer`] and
//! [`IntervalTimer`] traits that backend crates implement.
//!
//! # Architecture
//!
//! One [`SliderController`] per carousel turns environment events into render
//! commands:
//!
//! ```text
//!   Backend (click / resize / interval)
//!       │
//!       ▼
//!   SliderController ──► IndexModel::normalize() ──► Renderer commands
//!                                                        │
//!                 ┌──────────────────────────────────────┘
//!                 ▼
//!   AutoplayScheduler::arm() ──► IntervalTimer::start()
//!                                        │
//!                 ┌──────────────────────┘
//!                 ▼
//!   TimerHandle ──► SliderController::autoplay_tick()
//! ```
//!
//! **[`index`]**: Current index, slide count, and geometry. Single-step
//! wrap-around and `index × slide_width` offsets.
//!
//! **[`autoplay`]**: At most one live interval; every transition re-arms it.
//!
//! **[`controller`]**: The state machine: arrows, dots, autoplay ticks, and
//! resizes.
//!
//! **[`intent`]**: The attribute protocol between rendered markup and the
//! click dispatcher.
//!
//! **[`backend`]**: The [`Renderer`] and [`IntervalTimer`] traits.
//!
//! **[`config`]**: [`SliderConfig`](config::SliderConfig) and its presets.
//!
//! **[`manual`]**: [`ManualTimer`](manual::ManualTimer), a polled virtual
//! clock.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types,
//! with zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//!
//! [`Renderer`]: backend::Renderer
//! [`IntervalTimer`]: backend::IntervalTimer
//! [`SliderController`]: controller::SliderController

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod autoplay;
pub mod backend;
pub mod config;
pub mod controller;
pub mod error;
pub mod index;
pub mod intent;
pub mod manual;
pub mod time;
pub mod trace;
