// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunable constants for the explorer, grouped by subsystem.
//!
//! Every group has a `const DEFAULT` carrying the stock values and a matching
//! [`Default`] impl. With the `serde` feature each group deserializes with
//! missing fields falling back to those defaults, so a config file only needs
//! to name what it changes.
//!
//! Lengths suffixed `_px` are screen pixels; the layout divides them by
//! [`LayoutConfig::zoom`] to get world units.

use crate::time::Duration;

/// Geometry of the world canvas and the arrangement area.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LayoutConfig {
    /// World-to-screen scale.
    pub zoom: f64,
    /// Side of the square world canvas, in world units.
    pub canvas_size: f64,
    /// Gap kept between items and the viewport edges.
    pub margin_px: f64,
    /// Strip at the bottom reserved for UI chrome.
    pub ui_reserved_px: f64,
    /// Strip reserved for the timeline widget in time mode.
    pub timeline_reserved_px: f64,
    /// Distance between grid cell centers in explore mode, world units.
    pub grid_spacing: f64,
    /// Longest side of an item at natural size, world units.
    pub natural_max_side: f64,
    /// Minimum distance between owner group centers.
    pub owner_min_distance_px: f64,
    /// Rejection-sampling budget per owner group center.
    pub owner_max_attempts: u32,
}

impl LayoutConfig {
    /// Stock values.
    pub const DEFAULT: Self = Self {
        zoom: 2.0,
        canvas_size: 3000.0,
        margin_px: 50.0,
        ui_reserved_px: 100.0,
        timeline_reserved_px: 80.0,
        grid_spacing: 190.0,
        natural_max_side: 200.0,
        owner_min_distance_px: 300.0,
        owner_max_attempts: 100,
    };

    /// Margin in world units.
    #[inline]
    #[must_use]
    pub fn margin(&self) -> f64 {
        self.margin_px / self.zoom
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Smoothing factors applied once per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct AnimationConfig {
    /// Fraction of the remaining distance an item covers per tick.
    pub transform_easing: f64,
    /// Fraction of the remaining visibility-scale gap closed per tick.
    pub visibility_easing: f64,
    /// Easing for label position and opacity.
    pub label_easing: f64,
    /// Easing for the mode axis-label group opacity.
    pub label_group_fade: f64,
}

impl AnimationConfig {
    /// Stock values.
    pub const DEFAULT: Self = Self {
        transform_easing: 0.05,
        visibility_easing: 0.1,
        label_easing: 0.08,
        label_group_fade: 0.1,
    };
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Timeline playback.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct TimelineConfig {
    /// Real seconds to traverse the whole timeline once.
    pub playback_secs: f64,
}

impl TimelineConfig {
    /// Stock values.
    pub const DEFAULT: Self = Self {
        playback_secs: 20.0,
    };

    /// Playback length as a host [`Duration`].
    #[must_use]
    pub fn playback_duration(&self) -> Duration {
        Duration::from_secs_f64(self.playback_secs)
    }
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Mode switching.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ModeConfig {
    /// Seconds after a switch during which further switches are ignored.
    pub cooldown_secs: f64,
}

impl ModeConfig {
    /// Stock values.
    pub const DEFAULT: Self = Self { cooldown_secs: 2.0 };

    /// Cooldown as a host [`Duration`].
    #[must_use]
    pub fn cooldown(&self) -> Duration {
        Duration::from_secs_f64(self.cooldown_secs)
    }
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Pointer-driven camera panning in explore mode.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct NavigationConfig {
    /// Whether edge panning runs at all.
    pub edge_panning: bool,
    /// Width of the band along each screen edge that triggers panning.
    pub edge_threshold_px: f64,
    /// Pan speed at the very edge, per tick.
    pub max_speed_px: f64,
}

impl NavigationConfig {
    /// Stock values.
    pub const DEFAULT: Self = Self {
        edge_panning: true,
        edge_threshold_px: 400.0,
        max_speed_px: 10.0,
    };
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// All explorer settings.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ExplorerConfig {
    /// Canvas and arrangement geometry.
    pub layout: LayoutConfig,
    /// Per-tick smoothing.
    pub animation: AnimationConfig,
    /// Timeline playback.
    pub timeline: TimelineConfig,
    /// Mode switching.
    pub mode: ModeConfig,
    /// Edge panning.
    pub navigation: NavigationConfig,
}

impl ExplorerConfig {
    /// Stock values for every group.
    pub const DEFAULT: Self = Self {
        layout: LayoutConfig::DEFAULT,
        animation: AnimationConfig::DEFAULT,
        timeline: TimelineConfig::DEFAULT,
        mode: ModeConfig::DEFAULT,
        navigation: NavigationConfig::DEFAULT,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_const() {
        assert_eq!(ExplorerConfig::default(), ExplorerConfig::DEFAULT);
    }

    #[test]
    fn durations_from_seconds() {
        assert_eq!(
            TimelineConfig::DEFAULT.playback_duration(),
            Duration::from_millis(20_000)
        );
        assert_eq!(ModeConfig::DEFAULT.cooldown(), Duration::from_millis(2000));
    }

    #[test]
    fn margin_in_world_units() {
        assert_eq!(LayoutConfig::DEFAULT.margin(), 25.0);
    }
}
