// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays item storage.
//!
//! Every item occupies one slot in a set of parallel arrays. Slots are
//! assigned once, in catalog order, when the store is built; the collection
//! never grows or shrinks afterwards.
//!
//! Write access is split by owner:
//!
//! - `target` transforms are replaced wholesale by
//!   [`apply_layout`](ItemStore::apply_layout).
//! - `current` transforms and the visibility scale are advanced only by the
//!   [`Animator`](crate::animate::Animator).
//! - `should_be_visible` / `is_visible` and the target visibility scale are
//!   written only by the [visibility pass](ItemStore::resolve_visibility).

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Size;

use crate::config::LayoutConfig;
use crate::item::{AssetId, ItemAttributes, ItemId, ItemSpec};
use crate::layout::{self, Layout};
use crate::transform::ItemTransform;

/// Struct-of-arrays storage for all items.
#[derive(Debug)]
pub struct ItemStore {
    // -- Identity --
    pub(crate) names: Vec<String>,
    pub(crate) assets: Vec<AssetId>,

    // -- Static attributes --
    pub(crate) attributes: Vec<ItemAttributes>,
    pub(crate) natural: Vec<Size>,
    pub(crate) original: Vec<ItemTransform>,

    // -- Placement --
    pub(crate) current: Vec<ItemTransform>,
    pub(crate) target: Vec<ItemTransform>,

    // -- Visibility --
    pub(crate) visibility_scale: Vec<f64>,
    pub(crate) target_visibility_scale: Vec<f64>,
    pub(crate) should_be_visible: Vec<bool>,
    pub(crate) is_visible: Vec<bool>,
}

impl ItemStore {
    /// Builds the store from catalog entries.
    ///
    /// Each item is sized so its longest side is
    /// [`natural_max_side`](LayoutConfig::natural_max_side) and placed on the
    /// explore grid; that placement becomes its `original`, `current` and
    /// `target` transform. All items start visible at scale 1.
    #[must_use]
    pub fn new(specs: Vec<ItemSpec>, config: &LayoutConfig) -> Self {
        let n = specs.len();
        let mut names = Vec::with_capacity(n);
        let mut assets = Vec::with_capacity(n);
        let mut attributes = Vec::with_capacity(n);
        let mut natural = Vec::with_capacity(n);
        for spec in specs {
            natural.push(natural_size(spec.pixel_size, config.natural_max_side));
            names.push(spec.name);
            assets.push(spec.asset);
            attributes.push(spec.attributes);
        }
        let original = layout::grid::arrange_grid(&natural, config);

        Self {
            names,
            assets,
            attributes,
            natural,
            current: original.clone(),
            target: original.clone(),
            original,
            visibility_scale: alloc::vec![1.0; n],
            target_visibility_scale: alloc::vec![1.0; n],
            should_be_visible: alloc::vec![true; n],
            is_visible: alloc::vec![true; n],
        }
    }

    /// Number of items.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the store holds no items.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over every item handle in slot order.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "stores are built from catalogs far smaller than u32::MAX"
    )]
    pub fn ids(&self) -> impl ExactSizeIterator<Item = ItemId> + '_ {
        (0..self.len()).map(|i| ItemId(i as u32))
    }

    /// Returns the handle of the item with the given name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<ItemId> {
        self.names
            .iter()
            .position(|n| n == name)
            .and_then(|i| u32::try_from(i).ok())
            .map(ItemId)
    }

    // -- Accessors --

    /// Item name.
    #[must_use]
    pub fn name(&self, id: ItemId) -> &str {
        self.validate(id);
        &self.names[id.slot()]
    }

    /// Image asset.
    #[must_use]
    pub fn asset(&self, id: ItemId) -> AssetId {
        self.validate(id);
        self.assets[id.slot()]
    }

    /// Static attributes.
    #[must_use]
    pub fn attributes(&self, id: ItemId) -> &ItemAttributes {
        self.validate(id);
        &self.attributes[id.slot()]
    }

    /// Size at natural scale (longest side fitted to the configured maximum).
    #[must_use]
    pub fn natural_size(&self, id: ItemId) -> Size {
        self.validate(id);
        self.natural[id.slot()]
    }

    /// Grid placement restored by explore mode.
    #[must_use]
    pub fn original(&self, id: ItemId) -> ItemTransform {
        self.validate(id);
        self.original[id.slot()]
    }

    /// Placement as of the last animation step.
    #[must_use]
    pub fn current(&self, id: ItemId) -> ItemTransform {
        self.validate(id);
        self.current[id.slot()]
    }

    /// Placement the item is animating toward.
    #[must_use]
    pub fn target(&self, id: ItemId) -> ItemTransform {
        self.validate(id);
        self.target[id.slot()]
    }

    /// Current entrance/exit scale.
    #[must_use]
    pub fn visibility_scale(&self, id: ItemId) -> f64 {
        self.validate(id);
        self.visibility_scale[id.slot()]
    }

    /// Scale the visibility effect is animating toward.
    #[must_use]
    pub fn target_visibility_scale(&self, id: ItemId) -> f64 {
        self.validate(id);
        self.target_visibility_scale[id.slot()]
    }

    /// Whether the item should be on screen at the current alert.
    #[must_use]
    pub fn should_be_visible(&self, id: ItemId) -> bool {
        self.validate(id);
        self.should_be_visible[id.slot()]
    }

    /// Whether the item is drawn in time mode.
    #[must_use]
    pub fn is_visible(&self, id: ItemId) -> bool {
        self.validate(id);
        self.is_visible[id.slot()]
    }

    /// Number of items currently flagged visible.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.is_visible.iter().filter(|v| **v).count()
    }

    // -- Layout application --

    /// Replaces every item's target with the layout's.
    ///
    /// `current` is untouched; the animator carries items over.
    ///
    /// # Panics
    ///
    /// Panics if the layout was computed for a different number of items.
    pub fn apply_layout(&mut self, layout: &Layout) {
        assert_eq!(
            layout.targets.len(),
            self.len(),
            "layout has {} targets for {} items",
            layout.targets.len(),
            self.len()
        );
        self.target.copy_from_slice(&layout.targets);
    }

    /// Largest remaining distance between any item and its target.
    #[must_use]
    pub fn max_distance_to_target(&self) -> f64 {
        self.current
            .iter()
            .zip(&self.target)
            .map(|(c, t)| c.distance_to(*t))
            .fold(0.0, f64::max)
    }

    /// Remaining distance between one item and its target.
    #[must_use]
    pub fn distance_to_target(&self, id: ItemId) -> f64 {
        self.validate(id);
        self.current[id.slot()].distance_to(self.target[id.slot()])
    }

    fn validate(&self, id: ItemId) {
        assert!(
            id.slot() < self.len(),
            "unknown ItemId: {id:?} (store holds {} items)",
            self.len()
        );
    }
}

/// Scales `pixels` so its longest side is `max_side`, keeping the aspect.
///
/// Degenerate images get a square of `max_side`.
#[must_use]
pub fn natural_size(pixels: Size, max_side: f64) -> Size {
    if !(pixels.width > 0.0 && pixels.height > 0.0) {
        return Size::new(max_side, max_side);
    }
    let scale = (max_side / pixels.width).min(max_side / pixels.height);
    Size::new(pixels.width * scale, pixels.height * scale)
}
