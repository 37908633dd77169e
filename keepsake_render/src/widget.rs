// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-mode timeline widget state.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use keepsake_core::explorer::Explorer;
use keepsake_core::mode::Mode;

/// What the scrubber widget shows. Present only in time mode with a
/// non-empty timeline.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineWidget {
    /// Scrubber position in `[0, 1]`.
    pub progress: f64,
    /// Each alert's position along the track, in `[0, 1]`.
    pub markers: Vec<f64>,
    /// Whether playback is running (pause icon) or not (play icon).
    pub is_playing: bool,
    /// Current wall-clock time, `dd/mm HH:MM`.
    pub time_label: String,
    /// Items currently shown.
    pub visible_count: usize,
    /// Items in the collection.
    pub total: usize,
    /// Current alert index.
    pub alert_index: usize,
    /// Number of alerts (at least 1).
    pub alert_count: usize,
}

impl TimelineWidget {
    /// Widget state for `explorer`, or `None` outside time mode or without
    /// alerts.
    #[must_use]
    pub fn from_explorer(explorer: &Explorer) -> Option<Self> {
        let timeline = explorer.timeline();
        if explorer.mode() != Mode::Time || timeline.is_empty() {
            return None;
        }
        Some(Self {
            progress: timeline.progress(),
            markers: timeline.marker_positions().collect(),
            is_playing: timeline.is_playing(),
            time_label: timeline.current_time_label(),
            visible_count: explorer.visible_count(),
            total: explorer.store().len(),
            alert_index: timeline.current_alert_index(),
            alert_count: timeline.len(),
        })
    }

    /// `"PLAYING | Visible: 4/52"`.
    #[must_use]
    pub fn status_line(&self) -> String {
        let state = if self.is_playing { "PLAYING" } else { "PAUSED" };
        format!("{state} | Visible: {}/{}", self.visible_count, self.total)
    }

    /// `"Alert: 3/23"`, counting from 0 on both sides.
    #[must_use]
    pub fn alert_line(&self) -> String {
        format!(
            "Alert: {}/{}",
            self.alert_index,
            self.alert_count.saturating_sub(1)
        )
    }

    /// `"Progress: 12.5%"`.
    #[must_use]
    pub fn progress_line(&self) -> String {
        format!("Progress: {:.1}%", self.progress * 100.0)
    }
}
