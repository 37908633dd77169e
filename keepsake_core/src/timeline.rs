// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alert timeline playback.
//!
//! The timeline maps a playback position `progress ∈ [0, 1]` onto the span
//! between the first and last alert timestamp. `progress` is authoritative;
//! the current wall-clock time and the current alert index are derived from
//! it after every change.
//!
//! Playback advances `progress` by elapsed host time divided by the playback
//! duration, looping back to exactly 0 on reaching 1. Elapsed time is
//! measured from a *reference* instant that scrubbing and toggling reset, so
//! resuming never jumps by the time spent paused.
//!
//! An empty timeline ignores every operation.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use chrono::{DateTime, Utc};

use crate::config::TimelineConfig;
use crate::time::{Duration, HostTime};

/// Format of [`Timeline::current_time_label`].
pub const TIME_LABEL_FORMAT: &str = "%d/%m %H:%M";

/// Label shown when there is no current time.
pub const EMPTY_TIME_LABEL: &str = "00:00";

/// A change of alert index (or a loop) caused by playback or scrubbing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlertAdvance {
    /// Alert index before the change.
    pub previous: usize,
    /// Alert index after the change.
    pub current: usize,
    /// Playback progress after the change.
    pub progress: f64,
    /// Whether playback looped back to the start.
    pub wrapped: bool,
}

/// Playback state over a fixed list of alert timestamps.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    timestamps: Vec<DateTime<Utc>>,
    progress: f64,
    current_time: Option<DateTime<Utc>>,
    current_alert_index: usize,
    is_playing: bool,
    playback: Duration,
    reference: Option<HostTime>,
}

impl Timeline {
    /// Creates a paused timeline at progress 0.
    ///
    /// Timestamps are sorted; the feed is expected to be chronological
    /// already, but order is not trusted.
    #[must_use]
    pub fn new(mut timestamps: Vec<DateTime<Utc>>, config: &TimelineConfig) -> Self {
        timestamps.sort_unstable();
        let current_time = timestamps.first().copied();
        Self {
            timestamps,
            progress: 0.0,
            current_time,
            current_alert_index: 0,
            is_playing: false,
            playback: config.playback_duration(),
            reference: None,
        }
    }

    /// A timeline with no alerts.
    #[must_use]
    pub fn empty(config: &TimelineConfig) -> Self {
        Self::new(Vec::new(), config)
    }

    // -- Accessors --

    /// Number of alerts.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Returns `true` if there are no alerts.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Alert timestamps in chronological order.
    #[inline]
    #[must_use]
    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    /// Playback position in `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Wall-clock time at the playback position.
    #[inline]
    #[must_use]
    pub fn current_time(&self) -> Option<DateTime<Utc>> {
        self.current_time
    }

    /// Index of the latest alert at or before the current time.
    #[inline]
    #[must_use]
    pub fn current_alert_index(&self) -> usize {
        self.current_alert_index
    }

    /// Whether playback is running.
    #[inline]
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Host time needed to play from 0 to 1.
    #[inline]
    #[must_use]
    pub fn playback_duration(&self) -> Duration {
        self.playback
    }

    /// `current_time` formatted as `dd/mm HH:MM` (UTC).
    #[must_use]
    pub fn current_time_label(&self) -> String {
        match self.current_time {
            Some(t) => t.format(TIME_LABEL_FORMAT).to_string(),
            None => EMPTY_TIME_LABEL.into(),
        }
    }

    /// Each alert's offset within the span, on `[0, 1]`.
    ///
    /// With a zero-length span every marker sits at 0.
    pub fn marker_positions(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        let first = self.first_millis();
        let span = self.span_millis();
        self.timestamps.iter().map(move |t| {
            if span > 0 {
                (t.timestamp_millis() - first) as f64 / span as f64
            } else {
                0.0
            }
        })
    }

    // -- Controls --

    /// Advances playback to host time `now`.
    ///
    /// Returns the alert change, if the index moved or playback looped.
    pub fn advance(&mut self, now: HostTime) -> Option<AlertAdvance> {
        if self.is_empty() || !self.is_playing {
            return None;
        }
        let elapsed = self
            .reference
            .map_or(Duration::ZERO, |r| now.saturating_duration_since(r));
        self.reference = Some(now);

        let total = self.playback.as_secs_f64();
        if total > 0.0 {
            self.progress += elapsed.as_secs_f64() / total;
        }
        let wrapped = self.progress >= 1.0;
        if wrapped {
            self.progress = 0.0;
        }
        let previous = self.current_alert_index;
        self.recompute();
        self.report(previous, wrapped)
    }

    /// Jumps to `progress` (clamped to `[0, 1]`) and restarts the elapsed-time
    /// reference at `now`.
    pub fn scrub(&mut self, progress: f64, now: HostTime) -> Option<AlertAdvance> {
        if self.is_empty() {
            return None;
        }
        self.progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        self.reference = Some(now);
        let previous = self.current_alert_index;
        self.recompute();
        self.report(previous, false)
    }

    /// Flips between playing and paused and restarts the elapsed-time
    /// reference at `now`. Returns the new playing state.
    pub fn toggle(&mut self, now: HostTime) -> bool {
        if self.is_empty() {
            return false;
        }
        self.is_playing = !self.is_playing;
        self.reference = Some(now);
        self.is_playing
    }

    /// Restarts the elapsed-time reference at `now` without other changes.
    ///
    /// Playback only advances while the timeline is being ticked; call this
    /// when ticking resumes so the gap is not counted.
    pub fn resync(&mut self, now: HostTime) {
        if self.is_playing {
            self.reference = Some(now);
        }
    }

    // -- Derivations --

    /// Wall-clock time at `progress` along the span.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "offset is bounded by the span, which fits in i64 milliseconds"
    )]
    pub fn time_at(&self, progress: f64) -> Option<DateTime<Utc>> {
        let first = *self.timestamps.first()?;
        let offset = libm::round(progress.clamp(0.0, 1.0) * self.span_millis() as f64) as i64;
        Some(DateTime::from_timestamp_millis(self.first_millis() + offset).unwrap_or(first))
    }

    /// Greatest index `i` with `timestamps[i] <= t`, or 0 if `t` precedes
    /// every alert.
    #[must_use]
    pub fn alert_index_at(&self, t: DateTime<Utc>) -> usize {
        self.timestamps
            .partition_point(|ts| *ts <= t)
            .saturating_sub(1)
    }

    fn recompute(&mut self) {
        self.current_time = self.time_at(self.progress);
        self.current_alert_index = self
            .current_time
            .map_or(0, |t| self.alert_index_at(t));
    }

    fn report(&self, previous: usize, wrapped: bool) -> Option<AlertAdvance> {
        (wrapped || previous != self.current_alert_index).then_some(AlertAdvance {
            previous,
            current: self.current_alert_index,
            progress: self.progress,
            wrapped,
        })
    }

    fn first_millis(&self) -> i64 {
        self.timestamps.first().map_or(0, DateTime::timestamp_millis)
    }

    fn span_millis(&self) -> i64 {
        match (self.timestamps.first(), self.timestamps.last()) {
            (Some(a), Some(b)) => b.timestamp_millis() - a.timestamp_millis(),
            _ => 0,
        }
    }
}
