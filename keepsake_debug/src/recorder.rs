// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`]. Floats are stored as their IEEE bit
//! patterns, so they come back bit-exact.

use keepsake_core::item::{ItemId, OwnerIndex};
use keepsake_core::mode::Mode;
use keepsake_core::time::HostTime;
use keepsake_core::trace::{
    AlertAdvanceEvent, LabelRetiredEvent, ModeSwitchEvent, TickEvent, TickSummary, TraceSink,
    VisibilityEdge, VisibilityEdgeEvent,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_TICK: u8 = 1;
const TAG_MODE_SWITCH: u8 = 2;
const TAG_ALERT_ADVANCE: u8 = 3;
const TAG_VISIBILITY_EDGE: u8 = 4;
const TAG_LABEL_RETIRED: u8 = 5;
const TAG_TICK_SUMMARY: u8 = 6;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_option_u64(&mut self, v: Option<u64>) {
        match v {
            Some(val) => {
                self.write_u8(1);
                self.write_u64(val);
            }
            None => {
                self.write_u8(0);
                self.write_u64(0);
            }
        }
    }

    fn write_mode(&mut self, m: Mode) {
        self.write_u8(m.index());
    }
}

impl TraceSink for RecorderSink {
    fn on_tick(&mut self, e: &TickEvent) {
        self.write_u8(TAG_TICK);
        self.write_u64(e.frame_index);
        self.write_u64(e.now.nanos());
        self.write_mode(e.mode);
    }

    fn on_mode_switch(&mut self, e: &ModeSwitchEvent) {
        self.write_u8(TAG_MODE_SWITCH);
        self.write_u64(e.frame_index);
        self.write_u64(e.now.nanos());
        self.write_mode(e.from);
        self.write_mode(e.to);
        self.write_option_u64(e.locked_until.map(HostTime::nanos));
    }

    fn on_alert_advance(&mut self, e: &AlertAdvanceEvent) {
        self.write_u8(TAG_ALERT_ADVANCE);
        self.write_u64(e.frame_index);
        self.write_u32(e.previous);
        self.write_u32(e.current);
        self.write_f64(e.progress);
        self.write_bool(e.wrapped);
    }

    fn on_visibility_edge(&mut self, e: &VisibilityEdgeEvent) {
        self.write_u8(TAG_VISIBILITY_EDGE);
        self.write_u64(e.frame_index);
        self.write_u32(e.item.index());
        self.write_bool(e.edge == VisibilityEdge::Entered);
        self.write_u32(e.alert_index);
    }

    fn on_label_retired(&mut self, e: &LabelRetiredEvent) {
        self.write_u8(TAG_LABEL_RETIRED);
        self.write_u64(e.frame_index);
        self.write_u8(e.owner.get());
        self.write_u32(e.lifetime_ticks);
    }

    fn on_tick_summary(&mut self, s: &TickSummary) {
        self.write_u8(TAG_TICK_SUMMARY);
        self.write_u64(s.frame_index);
        self.write_u64(s.now.nanos());
        self.write_mode(s.mode);
        self.write_u32(s.visible);
        self.write_u32(s.total);
        self.write_f64(s.progress);
        self.write_f64(s.max_distance);
        self.write_u32(s.entered);
        self.write_u32(s.exited);
        self.write_u32(s.labels_retired);
        self.write_bool(s.panned);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// A [`TickEvent`].
    Tick(TickEvent),
    /// A [`ModeSwitchEvent`].
    ModeSwitch(ModeSwitchEvent),
    /// An [`AlertAdvanceEvent`].
    AlertAdvance(AlertAdvanceEvent),
    /// A [`VisibilityEdgeEvent`].
    VisibilityEdge(VisibilityEdgeEvent),
    /// A [`LabelRetiredEvent`].
    LabelRetired(LabelRetiredEvent),
    /// A [`TickSummary`].
    TickSummary(TickSummary),
}

impl RecordedEvent {
    /// Tick counter the event belongs to.
    #[must_use]
    pub fn frame_index(&self) -> u64 {
        match self {
            Self::Tick(e) => e.frame_index,
            Self::ModeSwitch(e) => e.frame_index,
            Self::AlertAdvance(e) => e.frame_index,
            Self::VisibilityEdge(e) => e.frame_index,
            Self::LabelRetired(e) => e.frame_index,
            Self::TickSummary(s) => s.frame_index,
        }
    }
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
///
/// Iteration stops at the first truncated record, unknown tag, or
/// out-of-range mode or owner.
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn take<const N: usize>(&mut self) -> Option<[u8; N]> {
        let end = self.pos.checked_add(N)?;
        let bytes = self.data.get(self.pos..end)?.try_into().ok()?;
        self.pos = end;
        Some(bytes)
    }

    fn read_u8(&mut self) -> Option<u8> {
        self.take::<1>().map(|[b]| b)
    }

    fn read_bool(&mut self) -> Option<bool> {
        Some(self.read_u8()? != 0)
    }

    fn read_u32(&mut self) -> Option<u32> {
        self.take().map(u32::from_le_bytes)
    }

    fn read_u64(&mut self) -> Option<u64> {
        self.take().map(u64::from_le_bytes)
    }

    fn read_f64(&mut self) -> Option<f64> {
        self.read_u64().map(f64::from_bits)
    }

    fn read_time(&mut self) -> Option<HostTime> {
        self.read_u64().map(HostTime)
    }

    fn read_option_u64(&mut self) -> Option<Option<u64>> {
        let present = self.read_u8()?;
        let val = self.read_u64()?;
        Some(if present != 0 { Some(val) } else { None })
    }

    fn read_mode(&mut self) -> Option<Mode> {
        Mode::from_index(self.read_u8()?)
    }

    fn decode_tick(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Tick(TickEvent {
            frame_index: self.read_u64()?,
            now: self.read_time()?,
            mode: self.read_mode()?,
        }))
    }

    fn decode_mode_switch(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::ModeSwitch(ModeSwitchEvent {
            frame_index: self.read_u64()?,
            now: self.read_time()?,
            from: self.read_mode()?,
            to: self.read_mode()?,
            locked_until: self.read_option_u64()?.map(HostTime),
        }))
    }

    fn decode_alert_advance(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::AlertAdvance(AlertAdvanceEvent {
            frame_index: self.read_u64()?,
            previous: self.read_u32()?,
            current: self.read_u32()?,
            progress: self.read_f64()?,
            wrapped: self.read_bool()?,
        }))
    }

    fn decode_visibility_edge(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::VisibilityEdge(VisibilityEdgeEvent {
            frame_index: self.read_u64()?,
            item: ItemId::from_index(self.read_u32()?),
            edge: if self.read_bool()? {
                VisibilityEdge::Entered
            } else {
                VisibilityEdge::Exited
            },
            alert_index: self.read_u32()?,
        }))
    }

    fn decode_label_retired(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::LabelRetired(LabelRetiredEvent {
            frame_index: self.read_u64()?,
            owner: OwnerIndex::new(self.read_u8()?)?,
            lifetime_ticks: self.read_u32()?,
        }))
    }

    fn decode_tick_summary(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::TickSummary(TickSummary {
            frame_index: self.read_u64()?,
            now: self.read_time()?,
            mode: self.read_mode()?,
            visible: self.read_u32()?,
            total: self.read_u32()?,
            progress: self.read_f64()?,
            max_distance: self.read_f64()?,
            entered: self.read_u32()?,
            exited: self.read_u32()?,
            labels_retired: self.read_u32()?,
            panned: self.read_bool()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_TICK => self.decode_tick(),
            TAG_MODE_SWITCH => self.decode_mode_switch(),
            TAG_ALERT_ADVANCE => self.decode_alert_advance(),
            TAG_VISIBILITY_EDGE => self.decode_visibility_edge(),
            TAG_LABEL_RETIRED => self.decode_label_retired(),
            TAG_TICK_SUMMARY => self.decode_tick_summary(),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> TickSummary {
        TickSummary {
            frame_index: 12,
            now: HostTime::from_millis(200),
            mode: Mode::Time,
            visible: 9,
            total: 52,
            progress: 0.375,
            max_distance: 14.25,
            entered: 2,
            exited: 1,
            labels_retired: 0,
            panned: false,
        }
    }

    #[test]
    fn round_trip_tick_and_summary() {
        let mut rec = RecorderSink::new();
        let tick = TickEvent {
            frame_index: 12,
            now: HostTime::from_millis(200),
            mode: Mode::Time,
        };
        rec.on_tick(&tick);
        rec.on_tick_summary(&sample_summary());

        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(events.len(), 2, "both records decoded");
        assert_eq!(events[0], RecordedEvent::Tick(tick));
        match &events[1] {
            RecordedEvent::TickSummary(s) => assert_eq!(*s, sample_summary()),
            other => panic!("expected TickSummary, got {other:?}"),
        }
    }

    #[test]
    fn round_trip_mode_switch_keeps_lock() {
        let mut rec = RecorderSink::new();
        let rejected = ModeSwitchEvent {
            frame_index: 3,
            now: HostTime::from_millis(50),
            from: Mode::Size,
            to: Mode::Owner,
            locked_until: Some(HostTime::from_millis(2000)),
        };
        rec.on_mode_switch(&rejected);
        rec.on_mode_switch(&ModeSwitchEvent {
            locked_until: None,
            ..rejected
        });

        let events: Vec<_> = decode(rec.as_bytes()).collect();
        match (&events[0], &events[1]) {
            (RecordedEvent::ModeSwitch(a), RecordedEvent::ModeSwitch(b)) => {
                assert_eq!(*a, rejected);
                assert!(!a.accepted(), "lock survives the trip");
                assert!(b.accepted(), "no lock");
            }
            other => panic!("expected two ModeSwitch, got {other:?}"),
        }
    }

    #[test]
    fn round_trip_timeline_events() {
        let mut rec = RecorderSink::new();
        let advance = AlertAdvanceEvent {
            frame_index: 40,
            previous: 56,
            current: 0,
            progress: 0.0,
            wrapped: true,
        };
        let edge = VisibilityEdgeEvent {
            frame_index: 40,
            item: ItemId::from_index(17),
            edge: VisibilityEdge::Exited,
            alert_index: 0,
        };
        let retired = LabelRetiredEvent {
            frame_index: 41,
            owner: OwnerIndex::new(4).unwrap(),
            lifetime_ticks: 180,
        };
        rec.on_alert_advance(&advance);
        rec.on_visibility_edge(&edge);
        rec.on_label_retired(&retired);

        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(
            events,
            vec![
                RecordedEvent::AlertAdvance(advance),
                RecordedEvent::VisibilityEdge(edge),
                RecordedEvent::LabelRetired(retired),
            ]
        );
        assert_eq!(events[2].frame_index(), 41);
    }

    #[test]
    fn truncated_record_stops() {
        let mut rec = RecorderSink::new();
        rec.on_tick_summary(&sample_summary());
        rec.on_tick_summary(&sample_summary());
        let bytes = rec.into_bytes();
        let cut = &bytes[..bytes.len() - 3];
        assert_eq!(decode(cut).count(), 1, "partial second record dropped");
    }

    #[test]
    fn unknown_tag_stops() {
        let mut rec = RecorderSink::new();
        rec.on_tick(&TickEvent {
            frame_index: 0,
            now: HostTime(0),
            mode: Mode::Explore,
        });
        let mut bytes = rec.into_bytes();
        bytes.push(0xFF);
        bytes.extend_from_slice(&[0; 16]);
        assert_eq!(decode(&bytes).count(), 1, "garbage after the tick ignored");
    }

    #[test]
    fn bad_mode_byte_stops() {
        let mut bytes = vec![TAG_TICK];
        bytes.extend_from_slice(&0_u64.to_le_bytes());
        bytes.extend_from_slice(&0_u64.to_le_bytes());
        bytes.push(42);
        assert_eq!(decode(&bytes).next(), None, "no mode 42");
    }
}
