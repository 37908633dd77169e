// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the explorer tick.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! [`Explorer`](crate::explorer::Explorer) calls as a tick and its actions
//! unfold. All method bodies default to no-ops, so implementing only the
//! events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing. When **on**, each
//! method performs a single `Option` branch before dispatching.
//!
//! [`TickSummaryBuilder`] tallies the edges seen during a tick and produces a
//! [`TickSummary`] at the end.

use crate::item::{ItemId, OwnerIndex};
use crate::mode::Mode;
use crate::time::HostTime;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Direction of a visibility change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VisibilityEdge {
    /// The item appeared.
    Entered,
    /// The item vanished.
    Exited,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted at the start of every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickEvent {
    /// Monotonic tick counter.
    pub frame_index: u64,
    /// Host time passed to the tick.
    pub now: HostTime,
    /// Mode active during the tick.
    pub mode: Mode,
}

/// Emitted for every mode switch request, accepted or not.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModeSwitchEvent {
    /// Ticks run before the request.
    pub frame_index: u64,
    /// Host time of the request.
    pub now: HostTime,
    /// Mode active before the request.
    pub from: Mode,
    /// Requested mode.
    pub to: Mode,
    /// `None` if accepted; otherwise when the blocking cooldown ends.
    pub locked_until: Option<HostTime>,
}

impl ModeSwitchEvent {
    /// Returns `true` if the switch was applied.
    #[must_use]
    pub fn accepted(&self) -> bool {
        self.locked_until.is_none()
    }
}

/// Emitted when playback or scrubbing changes the alert index or loops.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlertAdvanceEvent {
    /// Tick counter.
    pub frame_index: u64,
    /// Alert index before.
    pub previous: u32,
    /// Alert index after.
    pub current: u32,
    /// Playback progress after.
    pub progress: f64,
    /// Whether playback looped.
    pub wrapped: bool,
}

/// Emitted for each item that appears or vanishes in time mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibilityEdgeEvent {
    /// Tick counter.
    pub frame_index: u64,
    /// Item that changed.
    pub item: ItemId,
    /// Which way.
    pub edge: VisibilityEdge,
    /// Alert index that caused the change.
    pub alert_index: u32,
}

/// Emitted when a faded owner label is discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelRetiredEvent {
    /// Tick counter.
    pub frame_index: u64,
    /// Whose label it was.
    pub owner: OwnerIndex,
    /// Ticks the label existed.
    pub lifetime_ticks: u32,
}

/// Per-tick summary produced by [`TickSummaryBuilder`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickSummary {
    /// Tick counter.
    pub frame_index: u64,
    /// Host time passed to the tick.
    pub now: HostTime,
    /// Mode active at the end of the tick.
    pub mode: Mode,
    /// Items flagged visible.
    pub visible: u32,
    /// Items in the store.
    pub total: u32,
    /// Playback progress.
    pub progress: f64,
    /// Largest remaining distance between an item and its target.
    pub max_distance: f64,
    /// Items that appeared this tick.
    pub entered: u32,
    /// Items that vanished this tick.
    pub exited: u32,
    /// Owner labels discarded this tick.
    pub labels_retired: u32,
    /// Whether the camera moved by edge navigation.
    pub panned: bool,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the explorer.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called at the start of a tick.
    fn on_tick(&mut self, e: &TickEvent) {
        _ = e;
    }

    /// Called for every mode switch request.
    fn on_mode_switch(&mut self, e: &ModeSwitchEvent) {
        _ = e;
    }

    /// Called when the alert index changes or playback loops.
    fn on_alert_advance(&mut self, e: &AlertAdvanceEvent) {
        _ = e;
    }

    /// Called when an item appears or vanishes.
    fn on_visibility_edge(&mut self, e: &VisibilityEdgeEvent) {
        _ = e;
    }

    /// Called when an owner label is discarded.
    fn on_label_retired(&mut self, e: &LabelRetiredEvent) {
        _ = e;
    }

    /// Called with the per-tick summary.
    fn on_tick_summary(&mut self, s: &TickSummary) {
        _ = s;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`TickEvent`].
    #[inline]
    pub fn tick(&mut self, e: &TickEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_tick(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ModeSwitchEvent`].
    #[inline]
    pub fn mode_switch(&mut self, e: &ModeSwitchEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_mode_switch(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`AlertAdvanceEvent`].
    #[inline]
    pub fn alert_advance(&mut self, e: &AlertAdvanceEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_alert_advance(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`VisibilityEdgeEvent`].
    #[inline]
    pub fn visibility_edge(&mut self, e: &VisibilityEdgeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_visibility_edge(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LabelRetiredEvent`].
    #[inline]
    pub fn label_retired(&mut self, e: &LabelRetiredEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_label_retired(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TickSummary`].
    #[inline]
    pub fn tick_summary(&mut self, s: &TickSummary) {
        #[cfg(feature = "trace")]
        if let Some(sink) = &mut self.sink {
            sink.on_tick_summary(s);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = s;
        }
    }
}

// ---------------------------------------------------------------------------
// TickSummaryBuilder
// ---------------------------------------------------------------------------

/// Tallies edges during a tick and produces a [`TickSummary`].
#[derive(Debug)]
pub struct TickSummaryBuilder {
    tick: TickEvent,
    entered: u32,
    exited: u32,
    labels_retired: u32,
    panned: bool,
}

impl TickSummaryBuilder {
    /// Starts a summary for the given tick.
    #[must_use]
    pub fn new(tick: &TickEvent) -> Self {
        Self {
            tick: *tick,
            entered: 0,
            exited: 0,
            labels_retired: 0,
            panned: false,
        }
    }

    /// Counts one visibility edge.
    pub fn record_edge(&mut self, edge: VisibilityEdge) {
        match edge {
            VisibilityEdge::Entered => self.entered = self.entered.saturating_add(1),
            VisibilityEdge::Exited => self.exited = self.exited.saturating_add(1),
        }
    }

    /// Counts one retired label.
    pub fn record_label_retired(&mut self) {
        self.labels_retired = self.labels_retired.saturating_add(1);
    }

    /// Marks that edge navigation moved the camera.
    pub fn set_panned(&mut self, panned: bool) {
        self.panned = panned;
    }

    /// Consumes the builder and produces the final [`TickSummary`].
    ///
    /// `mode` is the mode at the end of the tick.
    #[must_use]
    pub fn finish(
        self,
        mode: Mode,
        visible: u32,
        total: u32,
        progress: f64,
        max_distance: f64,
    ) -> TickSummary {
        TickSummary {
            frame_index: self.tick.frame_index,
            now: self.tick.now,
            mode,
            visible,
            total,
            progress,
            max_distance,
            entered: self.entered,
            exited: self.exited,
            labels_retired: self.labels_retired,
            panned: self.panned,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
