// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrangement modes and the controller that switches between them.
//!
//! A switch is a single synchronous step: the controller flips the active
//! mode, sets the camera lock, computes the new layout, hands the targets to
//! the store, and refreshes the label overlays. It then ignores further
//! switches for a cooldown measured in host time. The cooldown is a
//! debounce only; it is not tied to when the animation settles.

use core::fmt;

use rand::Rng;

use crate::config::{LayoutConfig, ModeConfig};
use crate::labels::LabelOverlays;
use crate::layout::{self, Layout};
use crate::store::ItemStore;
use crate::time::{Duration, HostTime};
use crate::viewport::Viewport;

/// How items are arranged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Free browsing of the grid; the camera follows the pointer.
    #[default]
    Explore,
    /// A row from biggest to smallest.
    Size,
    /// Most sentimental on top.
    Sentiment,
    /// Diagonal from expensive to cheap.
    Price,
    /// Clusters per owner.
    Owner,
    /// Timeline playback; items appear and vanish by alert index.
    Time,
    /// Positioned by their recorded location.
    Location,
}

impl Mode {
    /// Every mode, in menu order.
    pub const ALL: [Self; 7] = [
        Self::Explore,
        Self::Size,
        Self::Sentiment,
        Self::Price,
        Self::Owner,
        Self::Time,
        Self::Location,
    ];

    /// Stable lowercase identifier.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Explore => "explore",
            Self::Size => "size",
            Self::Sentiment => "sentiment",
            Self::Price => "price",
            Self::Owner => "owner",
            Self::Time => "time",
            Self::Location => "location",
        }
    }

    /// Button caption.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Explore => "Explore",
            Self::Size => "Size",
            Self::Sentiment => "Sentiment",
            Self::Price => "Price",
            Self::Owner => "Owner",
            Self::Time => "Time",
            Self::Location => "Location",
        }
    }

    /// Parses a [`key`](Self::key).
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.key() == key)
    }

    /// Position in [`ALL`](Self::ALL), used as a compact wire tag.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Inverse of [`index`](Self::index).
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Whether the camera stays put while this mode is active.
    #[must_use]
    pub const fn locks_camera(self) -> bool {
        !matches!(self, Self::Explore)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Result of a [`ModeController::switch_mode`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The switch happened.
    Switched {
        /// Mode that was active before.
        from: Mode,
    },
    /// Ignored: a previous switch is still cooling down.
    Locked {
        /// Host time at which switching is allowed again.
        until: HostTime,
    },
}

impl SwitchOutcome {
    /// Returns `true` if the switch was applied.
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Switched { .. })
    }
}

/// Owns the active mode, the transition lock, the camera lock, and the
/// label overlays.
#[derive(Clone, Debug)]
pub struct ModeController {
    active: Mode,
    camera_locked: bool,
    locked_until: Option<HostTime>,
    cooldown: Duration,
    overlays: LabelOverlays,
}

impl ModeController {
    /// A controller starting in explore mode, unlocked.
    #[must_use]
    pub fn new(config: &ModeConfig) -> Self {
        Self {
            active: Mode::Explore,
            camera_locked: false,
            locked_until: None,
            cooldown: config.cooldown(),
            overlays: LabelOverlays::new(Mode::Explore),
        }
    }

    /// The active mode.
    #[inline]
    #[must_use]
    pub fn active(&self) -> Mode {
        self.active
    }

    /// Whether manual and edge panning are disabled.
    #[inline]
    #[must_use]
    pub fn camera_locked(&self) -> bool {
        self.camera_locked
    }

    /// Whether a switch requested at `now` would be ignored.
    #[must_use]
    pub fn is_locked(&self, now: HostTime) -> bool {
        self.locked_until.is_some_and(|until| now < until)
    }

    /// Label overlays.
    #[inline]
    #[must_use]
    pub fn overlays(&self) -> &LabelOverlays {
        &self.overlays
    }

    pub(crate) fn overlays_mut(&mut self) -> &mut LabelOverlays {
        &mut self.overlays
    }

    /// Clears an expired transition lock. Returns `true` if a lock was
    /// released by this call.
    pub fn release_expired(&mut self, now: HostTime) -> bool {
        match self.locked_until {
            Some(until) if now >= until => {
                self.locked_until = None;
                true
            }
            _ => false,
        }
    }

    /// Switches to `target` unless a previous switch is still cooling down.
    ///
    /// On success the new layout's targets are applied to `store` and the
    /// label overlays are updated. Switching to the already-active mode
    /// re-runs its layout.
    pub fn switch_mode<R: Rng + ?Sized>(
        &mut self,
        target: Mode,
        now: HostTime,
        store: &mut ItemStore,
        viewport: &Viewport,
        config: &LayoutConfig,
        rng: &mut R,
    ) -> SwitchOutcome {
        if let Some(until) = self.locked_until.filter(|until| now < *until) {
            return SwitchOutcome::Locked { until };
        }
        let from = self.active;
        self.active = target;
        self.camera_locked = target.locks_camera();
        self.locked_until = Some(now.checked_add(self.cooldown).unwrap_or(HostTime(u64::MAX)));

        let layout = layout::compute_targets(target, store, viewport, config, rng);
        store.apply_layout(&layout);
        self.overlays
            .enter_mode(target, &layout.owner_groups, viewport.zoom(), rng);
        SwitchOutcome::Switched { from }
    }

    /// Recomputes the active mode's layout without touching the lock or the
    /// axis labels (used after the viewport changes size).
    pub fn relayout<R: Rng + ?Sized>(
        &mut self,
        store: &mut ItemStore,
        viewport: &Viewport,
        config: &LayoutConfig,
        rng: &mut R,
    ) -> Layout {
        let layout = layout::compute_targets(self.active, store, viewport, config, rng);
        store.apply_layout(&layout);
        self.overlays.reanchor_owners(&layout.owner_groups);
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tests::{store_with, viewport};
    use crate::item::ItemAttributes;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const SEC: u64 = 1_000_000_000;

    struct Rig {
        modes: ModeController,
        store: ItemStore,
        viewport: Viewport,
        rng: SmallRng,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                modes: ModeController::new(&ModeConfig::DEFAULT),
                store: store_with(&[ItemAttributes::DEFAULT; 4]),
                viewport: viewport(),
                rng: SmallRng::seed_from_u64(3),
            }
        }

        fn switch(&mut self, mode: Mode, at_ms: u64) -> SwitchOutcome {
            let now = HostTime::from_millis(at_ms);
            self.modes.switch_mode(
                mode,
                now,
                &mut self.store,
                &self.viewport,
                &LayoutConfig::DEFAULT,
                &mut self.rng,
            )
        }
    }

    #[test]
    fn keys_round_trip() {
        for mode in Mode::ALL {
            assert_eq!(Mode::from_key(mode.key()), Some(mode));
            assert_eq!(Mode::from_index(mode.index()), Some(mode));
        }
        assert_eq!(Mode::from_key("colour"), None);
        assert_eq!(Mode::from_index(7), None);
        assert_eq!(Mode::Sentiment.title(), "Sentiment");
    }

    #[test]
    fn only_explore_frees_the_camera() {
        for mode in Mode::ALL {
            assert_eq!(mode.locks_camera(), mode != Mode::Explore, "{mode}");
        }
    }

    #[test]
    fn switch_holds_lock_for_cooldown() {
        let mut rig = Rig::new();
        assert_eq!(rig.switch(Mode::Size, 1000), SwitchOutcome::Switched { from: Mode::Explore });
        assert!(rig.modes.camera_locked(), "size locks the camera");

        let rejected = rig.switch(Mode::Price, 2500);
        assert_eq!(rejected, SwitchOutcome::Locked { until: HostTime(3 * SEC) });
        assert_eq!(rig.modes.active(), Mode::Size, "unchanged while locked");

        assert!(rig.switch(Mode::Explore, 3000).is_accepted(), "cooldown over");
        assert!(!rig.modes.camera_locked(), "explore unlocks");
    }

    #[test]
    fn release_expired_reports_once() {
        let mut rig = Rig::new();
        let _ = rig.switch(Mode::Time, 0);
        assert!(!rig.modes.release_expired(HostTime(SEC)), "still cooling");
        assert!(rig.modes.is_locked(HostTime(SEC)));
        assert!(rig.modes.release_expired(HostTime(2 * SEC)), "released");
        assert!(!rig.modes.release_expired(HostTime(3 * SEC)), "already released");
        assert!(!rig.modes.is_locked(HostTime(3 * SEC)));
    }

    #[test]
    fn switch_applies_targets_but_not_current() {
        let mut rig = Rig::new();
        let before: alloc::vec::Vec<_> = rig.store.ids().map(|id| rig.store.current(id)).collect();
        let _ = rig.switch(Mode::Location, 0);
        for (id, current) in rig.store.ids().zip(before) {
            assert_eq!(rig.store.current(id), current, "current untouched");
        }
        assert!(rig.store.max_distance_to_target() > 0.0, "targets moved");
    }

    #[test]
    fn owner_switch_creates_labels() {
        let mut rig = Rig::new();
        let _ = rig.switch(Mode::Owner, 0);
        assert_eq!(rig.modes.overlays().owner_labels().len(), 1, "all items belong to owner 0");
        let _ = rig.switch(Mode::Size, 5000);
        assert_eq!(
            rig.modes.overlays().axis_labels().len(),
            2,
            "BIG and SMALL"
        );
    }
}
