// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-window visibility.
//!
//! An item is present at alert `i` iff
//! `enter_alert_index <= i < enter_alert_index + duration_in_alerts`.
//! The pass compares that against each item's previous
//! `should_be_visible` flag and treats a difference as an edge:
//!
//! - **enter**: the visibility scale snaps to [`ENTER_SCALE`] and heads for
//!   [`OVERSHOOT_SCALE`], giving a pop-in.
//! - **exit**: the target scale drops to [`EXIT_SCALE`]; the current scale is
//!   left for the animator to shrink.
//!
//! `is_visible` follows `should_be_visible` in the same pass, so an exited
//! item stops being drawn immediately.

use alloc::vec::Vec;

use crate::item::ItemId;
use crate::store::ItemStore;

/// Visibility scale an entering item starts from.
pub const ENTER_SCALE: f64 = 0.1;
/// Visibility scale an entering item animates toward.
///
/// Nothing eases it back to 1.0 afterwards; visible items in time mode rest
/// slightly enlarged.
pub const OVERSHOOT_SCALE: f64 = 1.2;
/// Visibility scale an exiting item animates toward.
pub const EXIT_SCALE: f64 = 0.1;

/// Edges produced by one visibility pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibilityChanges {
    /// Items that became visible, in slot order.
    pub entered: Vec<ItemId>,
    /// Items that stopped being visible, in slot order.
    pub exited: Vec<ItemId>,
    /// Visible items after the pass.
    pub visible_count: usize,
}

impl VisibilityChanges {
    /// Empties the lists, keeping their allocations.
    pub fn clear(&mut self) {
        self.entered.clear();
        self.exited.clear();
        self.visible_count = 0;
    }

    /// Returns `true` if no item changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entered.is_empty() && self.exited.is_empty()
    }
}

impl ItemStore {
    /// Recomputes every item's visibility for `alert_index`.
    pub fn resolve_visibility(&mut self, alert_index: usize) -> VisibilityChanges {
        let mut changes = VisibilityChanges::default();
        self.resolve_visibility_into(alert_index, &mut changes);
        changes
    }

    /// Like [`resolve_visibility`](Self::resolve_visibility), reusing `out`.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "stores are built from catalogs far smaller than u32::MAX"
    )]
    pub fn resolve_visibility_into(&mut self, alert_index: usize, out: &mut VisibilityChanges) {
        out.clear();
        for slot in 0..self.len() {
            let id = ItemId(slot as u32);
            let want = self.attributes[slot].is_present_at(alert_index);
            if want != self.should_be_visible[slot] {
                if want {
                    self.visibility_scale[slot] = ENTER_SCALE;
                    self.target_visibility_scale[slot] = OVERSHOOT_SCALE;
                    out.entered.push(id);
                } else {
                    self.target_visibility_scale[slot] = EXIT_SCALE;
                    out.exited.push(id);
                }
                self.should_be_visible[slot] = want;
            }
            self.is_visible[slot] = want;
            if want {
                out.visible_count += 1;
            }
        }
    }
}
