// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][spec] JSON to the given writer.
//!
//! Each active mode becomes a duration span, ticks and timeline events become
//! instants, and tick summaries feed two counter tracks (visible items and
//! playback progress). Events that carry no host time of their own are
//! stamped with the time of the tick they belong to.
//!
//! [spec]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use keepsake_core::mode::Mode;
use keepsake_core::trace::VisibilityEdge;
use serde_json::{Value, json};

use crate::nanos_to_us;
use crate::recorder::{RecordedEvent, decode};

const PID: u32 = 0;
const TID_MODES: u32 = 0;
const TID_TIMELINE: u32 = 1;

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();
    let mut clock_us = 0.0;
    let mut open_mode: Option<Mode> = None;

    for recorded in decode(bytes) {
        match recorded {
            RecordedEvent::Tick(e) => {
                clock_us = nanos_to_us(e.now.nanos());
                if open_mode.is_none() {
                    events.push(mode_span("B", e.mode, clock_us));
                    open_mode = Some(e.mode);
                }
                events.push(json!({
                    "ph": "i",
                    "name": "Tick",
                    "cat": "Explorer",
                    "ts": clock_us,
                    "pid": PID,
                    "tid": TID_MODES,
                    "s": "t",
                    "args": {
                        "frame_index": e.frame_index,
                        "mode": e.mode.key(),
                    }
                }));
            }
            RecordedEvent::ModeSwitch(e) => {
                let ts = nanos_to_us(e.now.nanos());
                if e.accepted() {
                    if let Some(mode) = open_mode {
                        events.push(mode_span("E", mode, ts));
                    }
                    events.push(mode_span("B", e.to, ts));
                    open_mode = Some(e.to);
                }
                let name = if e.accepted() {
                    "ModeSwitch"
                } else {
                    "ModeSwitchLocked"
                };
                events.push(json!({
                    "ph": "i",
                    "name": name,
                    "cat": "Mode",
                    "ts": ts,
                    "pid": PID,
                    "tid": TID_MODES,
                    "s": "p",
                    "args": {
                        "frame_index": e.frame_index,
                        "from": e.from.key(),
                        "to": e.to.key(),
                        "locked_until_us": e.locked_until.map(|t| nanos_to_us(t.nanos())),
                    }
                }));
            }
            RecordedEvent::AlertAdvance(e) => {
                let name = if e.wrapped {
                    "TimelineWrap"
                } else {
                    "AlertAdvance"
                };
                events.push(json!({
                    "ph": "i",
                    "name": name,
                    "cat": "Timeline",
                    "ts": clock_us,
                    "pid": PID,
                    "tid": TID_TIMELINE,
                    "s": "t",
                    "args": {
                        "frame_index": e.frame_index,
                        "previous": e.previous,
                        "current": e.current,
                        "progress": e.progress,
                    }
                }));
            }
            RecordedEvent::VisibilityEdge(e) => {
                let name = match e.edge {
                    VisibilityEdge::Entered => "Enter",
                    VisibilityEdge::Exited => "Exit",
                };
                events.push(json!({
                    "ph": "i",
                    "name": name,
                    "cat": "Visibility",
                    "ts": clock_us,
                    "pid": PID,
                    "tid": TID_TIMELINE,
                    "s": "t",
                    "args": {
                        "frame_index": e.frame_index,
                        "item": e.item.index(),
                        "alert_index": e.alert_index,
                    }
                }));
            }
            RecordedEvent::LabelRetired(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "LabelRetired",
                    "cat": "Labels",
                    "ts": clock_us,
                    "pid": PID,
                    "tid": TID_MODES,
                    "s": "t",
                    "args": {
                        "frame_index": e.frame_index,
                        "owner": e.owner.profile().name,
                        "lifetime_ticks": e.lifetime_ticks,
                    }
                }));
            }
            RecordedEvent::TickSummary(s) => {
                let ts = nanos_to_us(s.now.nanos());
                events.push(json!({
                    "ph": "C",
                    "name": "Visible",
                    "ts": ts,
                    "pid": PID,
                    "args": { "visible": s.visible, "total": s.total }
                }));
                events.push(json!({
                    "ph": "C",
                    "name": "Playback",
                    "ts": ts,
                    "pid": PID,
                    "args": { "progress": s.progress, "max_distance": s.max_distance }
                }));
            }
        }
    }

    if let Some(mode) = open_mode {
        events.push(mode_span("E", mode, clock_us));
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn mode_span(ph: &str, mode: Mode, ts: f64) -> Value {
    json!({
        "ph": ph,
        "name": mode.title(),
        "cat": "Mode",
        "ts": ts,
        "pid": PID,
        "tid": TID_MODES,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use keepsake_core::item::ItemId;
    use keepsake_core::time::HostTime;
    use keepsake_core::trace::{
        ModeSwitchEvent, TickEvent, TickSummary, TraceSink, VisibilityEdgeEvent,
    };

    fn exported(rec: &RecorderSink) -> Vec<Value> {
        let mut out = Vec::new();
        export(rec.as_bytes(), &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        serde_json::from_str(&json_str).unwrap()
    }

    #[test]
    fn export_produces_valid_json() {
        let mut rec = RecorderSink::new();
        rec.on_tick(&TickEvent {
            frame_index: 0,
            now: HostTime::from_millis(1),
            mode: Mode::Explore,
        });
        rec.on_mode_switch(&ModeSwitchEvent {
            frame_index: 1,
            now: HostTime::from_millis(5),
            from: Mode::Explore,
            to: Mode::Time,
            locked_until: None,
        });
        rec.on_tick(&TickEvent {
            frame_index: 1,
            now: HostTime::from_millis(17),
            mode: Mode::Time,
        });
        rec.on_visibility_edge(&VisibilityEdgeEvent {
            frame_index: 1,
            item: ItemId::from_index(2),
            edge: VisibilityEdge::Exited,
            alert_index: 0,
        });

        let parsed = exported(&rec);
        let phases: Vec<&str> = parsed.iter().map(|e| e["ph"].as_str().unwrap()).collect();
        assert_eq!(
            phases,
            ["B", "i", "E", "B", "i", "i", "i", "E"],
            "explore span, switch, time span, closed at the end"
        );
        assert_eq!(parsed[0]["name"], "Explore");
        assert_eq!(parsed[3]["name"], "Time");
        assert_eq!(parsed[4]["name"], "ModeSwitch");
        assert_eq!(parsed[6]["name"], "Exit");
        assert_eq!(parsed[6]["ts"], 17_000.0, "stamped with its tick");
        assert_eq!(parsed[7]["ts"], 17_000.0, "last span closed at the last tick");
    }

    #[test]
    fn rejected_switch_keeps_span_open() {
        let mut rec = RecorderSink::new();
        rec.on_tick(&TickEvent {
            frame_index: 0,
            now: HostTime(0),
            mode: Mode::Size,
        });
        rec.on_mode_switch(&ModeSwitchEvent {
            frame_index: 1,
            now: HostTime::from_millis(100),
            from: Mode::Size,
            to: Mode::Price,
            locked_until: Some(HostTime::from_millis(2000)),
        });
        let parsed = exported(&rec);
        let spans = parsed.iter().filter(|e| e["ph"] == "B").count();
        assert_eq!(spans, 1, "no new span for a locked switch");
        assert!(
            parsed.iter().any(|e| e["name"] == "ModeSwitchLocked"),
            "rejection still recorded"
        );
    }

    #[test]
    fn summaries_become_counters() {
        let mut rec = RecorderSink::new();
        rec.on_tick_summary(&TickSummary {
            frame_index: 4,
            now: HostTime::from_millis(64),
            mode: Mode::Time,
            visible: 7,
            total: 52,
            progress: 0.5,
            max_distance: 3.0,
            entered: 0,
            exited: 0,
            labels_retired: 0,
            panned: false,
        });
        let parsed = exported(&rec);
        assert_eq!(parsed.len(), 2, "two counter tracks");
        assert!(parsed.iter().all(|e| e["ph"] == "C"), "counters only");
        assert_eq!(parsed[0]["args"]["visible"], 7);
        assert_eq!(parsed[1]["args"]["progress"], 0.5);
    }

    #[test]
    fn export_empty_recording() {
        let parsed = exported(&RecorderSink::new());
        assert!(parsed.is_empty(), "nothing recorded, nothing exported");
    }
}
