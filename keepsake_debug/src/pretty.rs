// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Host times
//! are shown in milliseconds.

use std::io::Write;

use keepsake_core::time::HostTime;
use keepsake_core::trace::{
    AlertAdvanceEvent, LabelRetiredEvent, ModeSwitchEvent, TickEvent, TickSummary, TraceSink,
    VisibilityEdge, VisibilityEdgeEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    ticks: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("ticks", &self.ticks)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::with_writer(Box::new(std::io::stderr()))
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            ticks: true,
        }
    }

    /// Whether to print the per-tick `[tick]` and `[summary]` lines. On by
    /// default; turning them off leaves only the sparse events.
    #[must_use]
    pub fn with_ticks(mut self, ticks: bool) -> Self {
        self.ticks = ticks;
        self
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn ms(t: HostTime) -> f64 {
    crate::nanos_to_us(t.nanos()) / 1000.0
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_tick(&mut self, e: &TickEvent) {
        if !self.ticks {
            return;
        }
        let _ = writeln!(
            self.writer,
            "[tick] frame={} now={:.1}ms mode={}",
            e.frame_index,
            ms(e.now),
            e.mode,
        );
    }

    fn on_mode_switch(&mut self, e: &ModeSwitchEvent) {
        let _ = match e.locked_until {
            None => writeln!(
                self.writer,
                "[mode] frame={} {} -> {} at {:.1}ms",
                e.frame_index,
                e.from,
                e.to,
                ms(e.now),
            ),
            Some(until) => writeln!(
                self.writer,
                "[mode] frame={} {} -> {} LOCKED until {:.1}ms",
                e.frame_index,
                e.from,
                e.to,
                ms(until),
            ),
        };
    }

    fn on_alert_advance(&mut self, e: &AlertAdvanceEvent) {
        let wrap = if e.wrapped { " (wrapped)" } else { "" };
        let _ = writeln!(
            self.writer,
            "[alert] frame={} {} -> {} progress={:.4}{wrap}",
            e.frame_index, e.previous, e.current, e.progress,
        );
    }

    fn on_visibility_edge(&mut self, e: &VisibilityEdgeEvent) {
        let edge = match e.edge {
            VisibilityEdge::Entered => "enter",
            VisibilityEdge::Exited => "exit",
        };
        let _ = writeln!(
            self.writer,
            "[{edge}] frame={} item={} alert={}",
            e.frame_index,
            e.item.index(),
            e.alert_index,
        );
    }

    fn on_label_retired(&mut self, e: &LabelRetiredEvent) {
        let _ = writeln!(
            self.writer,
            "[label] frame={} retired {} after {} ticks",
            e.frame_index,
            e.owner.profile().name,
            e.lifetime_ticks,
        );
    }

    fn on_tick_summary(&mut self, s: &TickSummary) {
        if !self.ticks {
            return;
        }
        let panned = if s.panned { " panned" } else { "" };
        let _ = writeln!(
            self.writer,
            "[summary] frame={} mode={} visible={}/{} progress={:.4} \
             settle={:.2} +{} -{} labels={}{panned}",
            s.frame_index,
            s.mode,
            s.visible,
            s.total,
            s.progress,
            s.max_distance,
            s.entered,
            s.exited,
            s.labels_retired,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keepsake_core::item::{ItemId, OwnerIndex};
    use keepsake_core::mode::Mode;

    fn output(sink: PrettyPrintSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn pretty_print_tick() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_tick(&TickEvent {
            frame_index: 1,
            now: HostTime::from_millis(16),
            mode: Mode::Owner,
        });
        let output = output(sink);
        assert!(output.contains("[tick]"), "got: {output}");
        assert!(output.contains("frame=1"), "got: {output}");
        assert!(output.contains("now=16.0ms"), "got: {output}");
        assert!(output.contains("mode=owner"), "got: {output}");
    }

    #[test]
    fn rejected_switch_shows_lock() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_mode_switch(&ModeSwitchEvent {
            frame_index: 5,
            now: HostTime::from_millis(100),
            from: Mode::Size,
            to: Mode::Time,
            locked_until: Some(HostTime::from_millis(2000)),
        });
        let output = output(sink);
        assert!(output.contains("size -> time LOCKED"), "got: {output}");
        assert!(output.contains("2000.0ms"), "got: {output}");
    }

    #[test]
    fn sparse_events_survive_quiet_mode() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new()).with_ticks(false);
        sink.on_tick(&TickEvent {
            frame_index: 0,
            now: HostTime(0),
            mode: Mode::Time,
        });
        sink.on_visibility_edge(&VisibilityEdgeEvent {
            frame_index: 0,
            item: ItemId::from_index(3),
            edge: VisibilityEdge::Entered,
            alert_index: 2,
        });
        sink.on_label_retired(&LabelRetiredEvent {
            frame_index: 9,
            owner: OwnerIndex::new(0).unwrap(),
            lifetime_ticks: 77,
        });
        let output = output(sink);
        assert!(!output.contains("[tick]"), "ticks muted: {output}");
        assert!(output.contains("[enter] frame=0 item=3 alert=2"), "got: {output}");
        assert!(output.contains("retired Yael after 77 ticks"), "got: {output}");
    }
}
