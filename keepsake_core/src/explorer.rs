// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The explorer: every piece of session state behind one tick.
//!
//! [`Explorer`] owns the item store, viewport, timeline, mode controller
//! (with its label overlays), animator and random source. Hosts drive it
//! with high-level actions and one [`tick`](Explorer::tick) per display
//! refresh. Everything is synchronous; exclusive access through
//! `&mut Explorer` is the only serialization there is.
//!
//! A tick runs, in order:
//!
//! 1. release an expired mode-switch cooldown,
//! 2. edge navigation (explore mode, camera unlocked, pointer known),
//! 3. one animator step,
//! 4. one label step, discarding faded owner labels,
//! 5. in time mode with a non-empty timeline: playback advance, then the
//!    visibility pass.

use alloc::vec::Vec;

use kurbo::{Point, Size, Vec2};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use chrono::{DateTime, Utc};

use crate::animate::Animator;
use crate::config::ExplorerConfig;
use crate::item::ItemSpec;
use crate::labels::{LabelOverlays, RetiredLabel};
use crate::mode::{Mode, ModeController, SwitchOutcome};
use crate::store::ItemStore;
use crate::time::HostTime;
use crate::timeline::{AlertAdvance, Timeline};
use crate::trace::{
    AlertAdvanceEvent, LabelRetiredEvent, ModeSwitchEvent, TickEvent, TickSummaryBuilder, Tracer,
    VisibilityEdge, VisibilityEdgeEvent,
};
use crate::viewport::{Viewport, edge_pan_velocity};
use crate::visibility::VisibilityChanges;

/// What happened during one [`Explorer::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickReport {
    /// Counter of the tick (starts at 0).
    pub frame_index: u64,
    /// Host time passed to the tick.
    pub now: HostTime,
    /// Active mode.
    pub mode: Mode,
    /// Whether a mode-switch cooldown ended this tick.
    pub lock_released: bool,
    /// Whether edge navigation moved the camera.
    pub panned: bool,
    /// Alert change from playback, if any.
    pub alert: Option<AlertAdvance>,
    /// Items that appeared.
    pub entered: usize,
    /// Items that vanished.
    pub exited: usize,
    /// Owner labels discarded.
    pub labels_retired: usize,
    /// Items drawn (see [`Explorer::visible_count`]).
    pub visible_count: usize,
    /// Items in the store.
    pub total: usize,
}

/// Interactive explorer state.
#[derive(Debug)]
pub struct Explorer {
    config: ExplorerConfig,
    store: ItemStore,
    viewport: Viewport,
    timeline: Timeline,
    modes: ModeController,
    animator: Animator,
    rng: SmallRng,
    pointer: Option<Point>,
    frame_index: u64,

    // -- Scratch --
    changes: VisibilityChanges,
    retired: Vec<RetiredLabel>,
}

impl Explorer {
    /// Creates an explorer in explore mode with every item on its grid
    /// spot, the camera centered and the timeline paused at its start.
    ///
    /// `seed` feeds the random source used by the sentiment and owner
    /// layouts and by owner label entrances.
    #[must_use]
    pub fn new(
        specs: Vec<ItemSpec>,
        alert_timestamps: Vec<DateTime<Utc>>,
        screen: Size,
        config: ExplorerConfig,
        seed: u64,
    ) -> Self {
        Self {
            store: ItemStore::new(specs, &config.layout),
            viewport: Viewport::new(screen, &config.layout),
            timeline: Timeline::new(alert_timestamps, &config.timeline),
            modes: ModeController::new(&config.mode),
            animator: Animator::new(&config.animation),
            rng: SmallRng::seed_from_u64(seed),
            pointer: None,
            frame_index: 0,
            changes: VisibilityChanges::default(),
            retired: Vec::new(),
            config,
        }
    }

    // -- Accessors --

    /// Settings the explorer was built with.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Item storage.
    #[inline]
    #[must_use]
    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Camera and screen mapping.
    #[inline]
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Alert playback.
    #[inline]
    #[must_use]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Mode controller.
    #[inline]
    #[must_use]
    pub fn modes(&self) -> &ModeController {
        &self.modes
    }

    /// Active mode.
    #[inline]
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.modes.active()
    }

    /// Label overlays.
    #[inline]
    #[must_use]
    pub fn overlays(&self) -> &LabelOverlays {
        self.modes.overlays()
    }

    /// Last pointer position reported by the host.
    #[inline]
    #[must_use]
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Number of ticks run so far.
    #[inline]
    #[must_use]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Items that are drawn: those flagged visible in time mode, all of
    /// them otherwise.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        if self.mode() == Mode::Time {
            self.store.visible_count()
        } else {
            self.store.len()
        }
    }

    // -- Actions --

    /// Requests a switch to `mode`. Ignored while a previous switch is
    /// cooling down.
    pub fn switch_mode(
        &mut self,
        mode: Mode,
        now: HostTime,
        tracer: &mut Tracer<'_>,
    ) -> SwitchOutcome {
        let from = self.mode();
        let outcome = self.modes.switch_mode(
            mode,
            now,
            &mut self.store,
            &self.viewport,
            &self.config.layout,
            &mut self.rng,
        );
        let locked_until = match outcome {
            SwitchOutcome::Switched { .. } => None,
            SwitchOutcome::Locked { until } => Some(until),
        };
        tracer.mode_switch(&ModeSwitchEvent {
            frame_index: self.frame_index,
            now,
            from,
            to: mode,
            locked_until,
        });
        if outcome.is_accepted() && mode == Mode::Time {
            // Playback only runs in time mode; skip the time spent elsewhere.
            self.timeline.resync(now);
            // Hide absent items before the next frame is drawn.
            self.changes.clear();
            if !self.timeline.is_empty() {
                self.resolve_visibility(tracer);
            }
        }
        outcome
    }

    /// Flips timeline playback. Returns the new playing state.
    pub fn toggle_timeline_playback(&mut self, now: HostTime) -> bool {
        self.timeline.toggle(now)
    }

    /// Moves playback to `progress` (clamped to `[0, 1]`).
    pub fn scrub_timeline(
        &mut self,
        progress: f64,
        now: HostTime,
        tracer: &mut Tracer<'_>,
    ) -> Option<AlertAdvance> {
        let advance = self.timeline.scrub(progress, now);
        if let Some(a) = advance {
            tracer.alert_advance(&alert_event(self.frame_index, a));
        }
        advance
    }

    /// Pans the camera by `delta` screen pixels. Returns `false` (and does
    /// nothing) while the camera is locked.
    pub fn pan_camera(&mut self, delta: Vec2) -> bool {
        if self.modes.camera_locked() {
            return false;
        }
        self.viewport.pan(delta);
        true
    }

    /// Recenters the camera on the canvas.
    pub fn reset_camera(&mut self) {
        self.viewport.reset_camera();
    }

    /// Records where the pointer is, or `None` when it left the window.
    pub fn set_pointer(&mut self, pointer: Option<Point>) {
        self.pointer = pointer;
    }

    /// Changes the screen size and recomputes the active layout for the new
    /// area. Explore mode keeps its canvas grid.
    pub fn resize_viewport(&mut self, screen: Size) {
        self.viewport.resize(screen);
        if self.mode() != Mode::Explore {
            let _ = self.modes.relayout(
                &mut self.store,
                &self.viewport,
                &self.config.layout,
                &mut self.rng,
            );
        }
    }

    // -- Tick --

    /// Runs one tick at host time `now`.
    pub fn tick(&mut self, now: HostTime, tracer: &mut Tracer<'_>) -> TickReport {
        let event = TickEvent {
            frame_index: self.frame_index,
            now,
            mode: self.mode(),
        };
        tracer.tick(&event);
        let mut summary = TickSummaryBuilder::new(&event);

        let lock_released = self.modes.release_expired(now);
        let panned = self.navigate();
        summary.set_panned(panned);

        self.animator.step(&mut self.store);

        self.retired.clear();
        self.modes
            .overlays_mut()
            .step(&self.config.animation, &mut self.retired);
        for label in &self.retired {
            tracer.label_retired(&LabelRetiredEvent {
                frame_index: self.frame_index,
                owner: label.owner,
                lifetime_ticks: label.lifetime_ticks,
            });
            summary.record_label_retired();
        }

        let mut alert = None;
        self.changes.clear();
        if self.mode() == Mode::Time && !self.timeline.is_empty() {
            alert = self.timeline.advance(now);
            if let Some(a) = alert {
                tracer.alert_advance(&alert_event(self.frame_index, a));
            }
            self.resolve_visibility(tracer);
            for _ in &self.changes.entered {
                summary.record_edge(VisibilityEdge::Entered);
            }
            for _ in &self.changes.exited {
                summary.record_edge(VisibilityEdge::Exited);
            }
        }

        let report = TickReport {
            frame_index: self.frame_index,
            now,
            mode: self.mode(),
            lock_released,
            panned,
            alert,
            entered: self.changes.entered.len(),
            exited: self.changes.exited.len(),
            labels_retired: self.retired.len(),
            visible_count: self.visible_count(),
            total: self.store.len(),
        };
        tracer.tick_summary(&summary.finish(
            report.mode,
            saturating_u32(report.visible_count),
            saturating_u32(report.total),
            self.timeline.progress(),
            self.store.max_distance_to_target(),
        ));
        self.frame_index += 1;
        report
    }

    /// Resolves visibility at the current alert into `self.changes` and
    /// traces each edge.
    fn resolve_visibility(&mut self, tracer: &mut Tracer<'_>) {
        let index = self.timeline.current_alert_index();
        self.store.resolve_visibility_into(index, &mut self.changes);
        let edges = self
            .changes
            .entered
            .iter()
            .map(|id| (*id, VisibilityEdge::Entered))
            .chain(self.changes.exited.iter().map(|id| (*id, VisibilityEdge::Exited)));
        for (item, edge) in edges {
            tracer.visibility_edge(&VisibilityEdgeEvent {
                frame_index: self.frame_index,
                item,
                edge,
                alert_index: saturating_u32(index),
            });
        }
    }

    fn navigate(&mut self) -> bool {
        let nav = &self.config.navigation;
        if self.mode() != Mode::Explore || self.modes.camera_locked() || !nav.edge_panning {
            return false;
        }
        let Some(pointer) = self.pointer else {
            return false;
        };
        let velocity = edge_pan_velocity(pointer, self.viewport.screen_size(), nav);
        if velocity == Vec2::ZERO {
            return false;
        }
        let before = self.viewport.camera();
        self.viewport.pan(velocity);
        self.viewport.camera() != before
    }
}

fn alert_event(frame_index: u64, a: AlertAdvance) -> AlertAdvanceEvent {
    AlertAdvanceEvent {
        frame_index,
        previous: saturating_u32(a.previous),
        current: saturating_u32(a.current),
        progress: a.progress,
        wrapped: a.wrapped,
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
