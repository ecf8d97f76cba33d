// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing, recording, and JSON export for glissade diagnostics.
//!
//! This crate provides [`TraceSink`](glissade_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: in-memory recording of every event, shared
//!   between the controller and the host.
//! - [`json::export_json`]: writes recorded events as JSON Lines.

pub mod json;
pub mod pretty;
pub mod recorder;
