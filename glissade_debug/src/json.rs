// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON Lines exporter.
//!
//! [`export_json`] writes events captured by a
//! [`RecorderSink`](super::recorder::RecorderSink) as one JSON object per
//! line, for `jq` or any log pipeline.

use std::io::{self, Write};

use serde_json::{Value, json};

use glissade_core::trace::{AutoplayAction, NavigationCause};

use crate::recorder::RecordedEvent;

/// Writes `events` to `writer` as JSON Lines.
///
/// Every object carries an `"event"` tag; the remaining keys mirror the
/// event's fields. `seq` is the event's position in `events`.
pub fn export_json(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    for (seq, event) in events.iter().enumerate() {
        let value = to_value(seq, event);
        serde_json::to_writer(&mut *writer, &value)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

fn to_value(seq: usize, event: &RecordedEvent) -> Value {
    match event {
        RecordedEvent::Navigate(e) => json!({
            "seq": seq,
            "event": "navigate",
            "from": e.from,
            "to": e.to,
            "cause": cause_name(e.cause),
            "offset": e.offset,
        }),
        RecordedEvent::Resize(e) => json!({
            "seq": seq,
            "event": "resize",
            "slide_width": e.slide_width,
            "track_width": e.track_width,
            "offset": e.offset,
        }),
        RecordedEvent::ResizeSkipped(e) => json!({
            "seq": seq,
            "event": "resize_skipped",
            "container_width": e.container_width,
        }),
        RecordedEvent::Autoplay(e) => json!({
            "seq": seq,
            "event": "autoplay",
            "action": action_name(e.action),
            "handle": e.handle.0,
        }),
        RecordedEvent::IntentRejected(e) => json!({
            "seq": seq,
            "event": "intent_rejected",
            "current": e.current,
            "error": e.error.to_string(),
        }),
    }
}

fn cause_name(cause: NavigationCause) -> &'static str {
    match cause {
        NavigationCause::Arrow => "arrow",
        NavigationCause::Pagination => "pagination",
        NavigationCause::Autoplay => "autoplay",
        NavigationCause::Api => "api",
    }
}

fn action_name(action: AutoplayAction) -> &'static str {
    match action {
        AutoplayAction::Armed => "armed",
        AutoplayAction::Disarmed => "disarmed",
        AutoplayAction::Tick => "tick",
        AutoplayAction::StaleTick => "stale_tick",
    }
}
