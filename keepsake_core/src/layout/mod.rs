// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrangement rules, one per [`Mode`].
//!
//! [`compute_targets`] maps the item collection and the current viewport to
//! a target transform for every item. It reads only static data (attributes,
//! natural sizes, the explore grid) and never looks at `current`, so a layout
//! can be recomputed mid-animation and the animator simply retargets.
//!
//! Layouts that need randomness (sentiment x positions, owner group
//! centers) draw from the caller's [`Rng`]; every other layout is a pure
//! function of its inputs and yields identical targets on every call.
//!
//! All positions go through [`Stage::place`], so every footprint stays
//! inside the margins of the visible world area.

pub(crate) mod grid;
mod owner;
mod ranked;
mod scatter;

use alloc::vec::Vec;

use kurbo::{Point, Size};
use rand::Rng;

use crate::config::LayoutConfig;
use crate::item::{ItemId, OwnerIndex};
use crate::mode::Mode;
use crate::store::ItemStore;
use crate::transform::ItemTransform;
use crate::viewport::{Stage, Viewport};

pub use scatter::name_hash_position;

/// Targets for every item plus any per-mode annotations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    /// One target per item, indexed by slot.
    pub targets: Vec<ItemTransform>,
    /// Owner clusters (owner mode only; empty otherwise).
    pub owner_groups: Vec<OwnerGroup>,
}

impl Layout {
    fn from_targets(targets: Vec<ItemTransform>) -> Self {
        Self {
            targets,
            owner_groups: Vec::new(),
        }
    }

    /// Target of one item.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a slot of this layout.
    #[must_use]
    pub fn target(&self, id: ItemId) -> ItemTransform {
        self.targets[id.slot()]
    }
}

/// One owner's cluster in owner mode.
#[derive(Clone, Debug, PartialEq)]
pub struct OwnerGroup {
    /// Whose items these are.
    pub owner: OwnerIndex,
    /// Center of the cluster; the owner label is anchored here.
    pub center: Point,
    /// Radius of the ring the members sit on (unused for a single member).
    pub radius: f64,
    /// Members in slot order.
    pub members: Vec<ItemId>,
}

/// Uniform sizing rule: scale natural size by `scale`, then bound the
/// longest side by `cap` times the shorter side of the available area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformFit {
    /// Factor applied to the natural size.
    pub scale: f64,
    /// Fraction of the available area's shorter side.
    pub cap: f64,
}

impl UniformFit {
    /// Sentiment and time modes.
    pub const LARGE: Self = Self {
        scale: 0.4,
        cap: 0.15,
    };
    /// Price, owner and location modes.
    pub const SMALL: Self = Self {
        scale: 0.3,
        cap: 0.12,
    };

    /// Size of an item with the given natural size on `stage`.
    #[must_use]
    pub fn size_on(self, natural: Size, stage: &Stage) -> Size {
        let side = stage.max_item_side(self.cap);
        fit_within(natural * self.scale, Size::new(side, side))
    }
}

/// Screen pixels reserved at the bottom while `mode` is active.
#[must_use]
pub fn reserved_px(mode: Mode, config: &LayoutConfig) -> f64 {
    match mode {
        Mode::Time => config.timeline_reserved_px,
        _ => config.ui_reserved_px,
    }
}

/// Computes the target of every item under `mode`.
pub fn compute_targets<R: Rng + ?Sized>(
    mode: Mode,
    store: &ItemStore,
    viewport: &Viewport,
    config: &LayoutConfig,
    rng: &mut R,
) -> Layout {
    let stage = viewport.stage(reserved_px(mode, config), config);
    match mode {
        Mode::Explore => Layout::from_targets(store.original.clone()),
        Mode::Size => Layout::from_targets(ranked::by_size(store, &stage)),
        Mode::Sentiment => Layout::from_targets(ranked::by_sentiment(store, &stage, rng)),
        Mode::Price => Layout::from_targets(ranked::by_price(store, &stage)),
        Mode::Owner => owner::by_owner(store, &stage, config, rng),
        Mode::Time => Layout::from_targets(scatter::by_name_hash(store, &stage)),
        Mode::Location => Layout::from_targets(scatter::by_location(store, &stage)),
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Shrinks `base` uniformly until it fits in `max`. Never grows it.
#[must_use]
pub(crate) fn fit_within(base: Size, max: Size) -> Size {
    if !(base.width > 0.0 && base.height > 0.0) {
        return Size::ZERO;
    }
    let s = (max.width / base.width)
        .min(max.height / base.height)
        .clamp(0.0, 1.0);
    Size::new(base.width * s, base.height * s)
}

/// Position of rank `i` among `n` on `[0, 1]`; a lone item sits at 0.
#[must_use]
pub(crate) fn rank_progress(i: usize, n: usize) -> f64 {
    if n <= 1 {
        0.0
    } else {
        i as f64 / (n - 1) as f64
    }
}

/// Slots sorted by `key`, largest first. Ties keep catalog order.
pub(crate) fn slots_by_desc(store: &ItemStore, key: impl Fn(usize) -> f64) -> Vec<usize> {
    let mut order: Vec<usize> = (0..store.len()).collect();
    order.sort_by(|&a, &b| key(b).total_cmp(&key(a)));
    order
}
