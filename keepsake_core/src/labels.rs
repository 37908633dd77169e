// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floating text overlays: mode axis captions and owner names.
//!
//! Two families of labels share one [`LabelOverlay`] type:
//!
//! - **Axis labels** ("BIG", "CHEAP", ...) live in normalized screen
//!   coordinates (`[0, 1]²`) and slide in from one side when a mode is
//!   entered. The whole set also fades as a group.
//! - **Owner labels** live in world coordinates, one per owner cluster. They
//!   drift in from a random offset, fade out when owner mode is left, and are
//!   dropped once fully transparent.
//!
//! Every label moves through [`LabelPhase`]s:
//! `Entering → Visible → Fading → Gone`.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use rand::Rng;

use crate::config::AnimationConfig;
use crate::item::OwnerIndex;
use crate::layout::OwnerGroup;
use crate::mode::Mode;
use crate::transform::lerp;

/// Opacity at or above which an entering label counts as settled.
pub const SETTLED_OPACITY: f64 = 0.99;
/// Opacity below which a label is not drawn.
pub const DRAW_THRESHOLD: f64 = 0.01;
/// Opacity below which a fading label is discarded.
pub const RETIRE_THRESHOLD: f64 = 0.001;
/// Owner labels start up to this far (screen pixels) from their anchor.
pub const OWNER_LABEL_SCATTER_PX: f64 = 100.0;

/// Where a label is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelPhase {
    /// Fading in toward full opacity.
    Entering,
    /// Settled at (nearly) full opacity.
    Visible,
    /// Fading out.
    Fading,
    /// Transparent enough to discard.
    Gone,
}

/// What a label says.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelText {
    /// A mode axis caption.
    Axis(&'static str),
    /// An owner's name with their age and gender underneath.
    Owner(OwnerIndex),
}

impl LabelText {
    /// First (or only) line.
    #[must_use]
    pub fn headline(self) -> &'static str {
        match self {
            Self::Axis(text) => text,
            Self::Owner(owner) => owner.profile().name,
        }
    }

    /// Second line, if any (`"35, Female"` for owners).
    #[must_use]
    pub fn caption(self) -> Option<String> {
        match self {
            Self::Axis(_) => None,
            Self::Owner(owner) => {
                let p = owner.profile();
                Some(format!("{}, {}", p.age, p.gender.as_str()))
            }
        }
    }
}

/// One animated label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelOverlay {
    text: LabelText,
    anchor: Point,
    position: Point,
    opacity: f64,
    target_opacity: f64,
    age_ticks: u32,
}

impl LabelOverlay {
    /// A transparent label at `start` that will move to `anchor` and fade in.
    #[must_use]
    pub fn new(text: LabelText, start: Point, anchor: Point) -> Self {
        Self {
            text,
            anchor,
            position: start,
            opacity: 0.0,
            target_opacity: 1.0,
            age_ticks: 0,
        }
    }

    /// What the label says.
    #[inline]
    #[must_use]
    pub fn text(&self) -> LabelText {
        self.text
    }

    /// Where the label is heading.
    #[inline]
    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Where the label is now.
    #[inline]
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Current opacity in `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Ticks since the label was created.
    #[inline]
    #[must_use]
    pub fn age_ticks(&self) -> u32 {
        self.age_ticks
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> LabelPhase {
        if self.target_opacity > 0.0 {
            if self.opacity >= SETTLED_OPACITY {
                LabelPhase::Visible
            } else {
                LabelPhase::Entering
            }
        } else if self.opacity < RETIRE_THRESHOLD {
            LabelPhase::Gone
        } else {
            LabelPhase::Fading
        }
    }

    /// Starts fading the label out.
    pub fn fade_out(&mut self) {
        self.target_opacity = 0.0;
    }

    /// Moves the anchor without restarting the entrance.
    pub fn retarget(&mut self, anchor: Point) {
        self.anchor = anchor;
    }

    fn step(&mut self, easing: f64) {
        self.position = self.position.lerp(self.anchor, easing);
        self.opacity = lerp(self.opacity, self.target_opacity, easing);
        self.age_ticks = self.age_ticks.saturating_add(1);
    }
}

// ---------------------------------------------------------------------------
// Axis label table
// ---------------------------------------------------------------------------

/// Side an axis label slides in from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntrySide {
    /// From beyond the left edge.
    Left,
    /// From beyond the right edge.
    Right,
    /// From above the top edge.
    Top,
    /// From below the bottom edge.
    Bottom,
    /// In place; fades only.
    Center,
}

impl EntrySide {
    /// Starting point (normalized) for a label anchored at `anchor`.
    #[must_use]
    pub fn start_for(self, anchor: Point) -> Point {
        match self {
            Self::Left => Point::new(-0.2, anchor.y),
            Self::Right => Point::new(1.2, anchor.y),
            Self::Top => Point::new(anchor.x, -0.2),
            Self::Bottom => Point::new(anchor.x, 1.2),
            Self::Center => anchor,
        }
    }
}

/// One row of the axis label table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLabelSpec {
    /// Caption.
    pub text: &'static str,
    /// Normalized resting position.
    pub anchor: Point,
    /// Where it slides in from.
    pub from: EntrySide,
}

const fn axis(text: &'static str, x: f64, y: f64, from: EntrySide) -> AxisLabelSpec {
    AxisLabelSpec {
        text,
        anchor: Point::new(x, y),
        from,
    }
}

const SIZE_AXIS: [AxisLabelSpec; 2] = [
    axis("BIG", 0.1, 0.2, EntrySide::Left),
    axis("SMALL", 0.9, 0.2, EntrySide::Right),
];
const SENTIMENT_AXIS: [AxisLabelSpec; 2] = [
    axis("SENTIMENTAL", 0.5, 0.15, EntrySide::Top),
    axis("FUNCTIONAL", 0.5, 0.85, EntrySide::Bottom),
];
const PRICE_AXIS: [AxisLabelSpec; 2] = [
    axis("EXPENSIVE", 0.85, 0.15, EntrySide::Top),
    axis("CHEAP", 0.15, 0.85, EntrySide::Bottom),
];
const LOCATION_AXIS: [AxisLabelSpec; 1] = [axis("LOCATION", 0.5, 0.5, EntrySide::Center)];

/// Axis captions shown while `mode` is active.
#[must_use]
pub fn axis_labels_for(mode: Mode) -> &'static [AxisLabelSpec] {
    match mode {
        Mode::Size => &SIZE_AXIS,
        Mode::Sentiment => &SENTIMENT_AXIS,
        Mode::Price => &PRICE_AXIS,
        Mode::Location => &LOCATION_AXIS,
        Mode::Explore | Mode::Owner | Mode::Time => &[],
    }
}

// ---------------------------------------------------------------------------
// LabelOverlays
// ---------------------------------------------------------------------------

/// An owner label that finished fading out during a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetiredLabel {
    /// Whose label it was.
    pub owner: OwnerIndex,
    /// How many ticks it existed.
    pub lifetime_ticks: u32,
}

/// All label overlays for the explorer.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelOverlays {
    axis: Vec<LabelOverlay>,
    axis_opacity: f64,
    axis_target_opacity: f64,
    owners: Vec<LabelOverlay>,
}

impl LabelOverlays {
    /// Overlays for a session starting in `mode`.
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        let mut overlays = Self {
            axis: Vec::new(),
            axis_opacity: 0.0,
            axis_target_opacity: 0.0,
            owners: Vec::new(),
        };
        overlays.set_axis(mode);
        overlays
    }

    /// Axis labels, in normalized screen coordinates.
    #[must_use]
    pub fn axis_labels(&self) -> &[LabelOverlay] {
        &self.axis
    }

    /// Opacity multiplier applied to every axis label.
    #[must_use]
    pub fn axis_group_opacity(&self) -> f64 {
        self.axis_opacity
    }

    /// Owner labels, in world coordinates.
    #[must_use]
    pub fn owner_labels(&self) -> &[LabelOverlay] {
        &self.owners
    }

    /// Updates labels for a switch into `mode`.
    ///
    /// Axis labels are replaced outright. Entering owner mode replaces the
    /// owner labels with fresh ones at `groups`' centers, each starting from
    /// a random offset; entering any other mode fades existing owner labels.
    pub fn enter_mode<R: Rng + ?Sized>(
        &mut self,
        mode: Mode,
        groups: &[OwnerGroup],
        zoom: f64,
        rng: &mut R,
    ) {
        self.set_axis(mode);
        if mode == Mode::Owner {
            let scatter = OWNER_LABEL_SCATTER_PX / zoom;
            self.owners = groups
                .iter()
                .map(|g| {
                    let offset = Vec2::new(
                        rng.random_range(-scatter..scatter),
                        rng.random_range(-scatter..scatter),
                    );
                    LabelOverlay::new(LabelText::Owner(g.owner), g.center + offset, g.center)
                })
                .collect();
        } else {
            for label in &mut self.owners {
                label.fade_out();
            }
        }
    }

    /// Moves owner labels to new cluster centers after a re-layout.
    pub fn reanchor_owners(&mut self, groups: &[OwnerGroup]) {
        for label in &mut self.owners {
            if let LabelText::Owner(owner) = label.text
                && let Some(g) = groups.iter().find(|g| g.owner == owner)
            {
                label.retarget(g.center);
            }
        }
    }

    /// Advances every label by one tick and discards owner labels that have
    /// faded out, reporting them in `retired`.
    pub fn step(&mut self, config: &AnimationConfig, retired: &mut Vec<RetiredLabel>) {
        for label in &mut self.axis {
            label.step(config.label_easing);
        }
        self.axis_opacity = lerp(
            self.axis_opacity,
            self.axis_target_opacity,
            config.label_group_fade,
        );
        for label in &mut self.owners {
            label.step(config.label_easing);
        }
        self.owners.retain(|label| {
            if label.phase() != LabelPhase::Gone {
                return true;
            }
            if let LabelText::Owner(owner) = label.text {
                retired.push(RetiredLabel {
                    owner,
                    lifetime_ticks: label.age_ticks,
                });
            }
            false
        });
    }

    fn set_axis(&mut self, mode: Mode) {
        let specs = axis_labels_for(mode);
        self.axis = specs
            .iter()
            .map(|s| LabelOverlay::new(LabelText::Axis(s.text), s.from.start_for(s.anchor), s.anchor))
            .collect();
        self.axis_target_opacity = if specs.is_empty() { 0.0 } else { 1.0 };
    }
}
