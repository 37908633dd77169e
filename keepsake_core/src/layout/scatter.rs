// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scatter layouts: time (name-hashed positions) and location.

use alloc::vec::Vec;

use super::UniformFit;
use crate::store::ItemStore;
use crate::transform::ItemTransform;
use crate::viewport::Stage;

/// A stable pseudo-random position in `[0, 1)²` derived from `name`.
///
/// The seed weights each UTF-16 code unit by its 1-based position, so
/// anagrams land apart. The same name always yields the same point.
#[must_use]
pub fn name_hash_position(name: &str) -> (f64, f64) {
    let seed: f64 = name
        .encode_utf16()
        .enumerate()
        .map(|(j, unit)| f64::from(unit) * (j + 1) as f64)
        .sum();
    (
        hash_unit(seed, 12.9898),
        hash_unit(seed, 78.233),
    )
}

fn hash_unit(seed: f64, k: f64) -> f64 {
    let v = libm::fabs(libm::sin(seed * k) * 43758.5453);
    v - libm::floor(v)
}

/// Time mode: each item at its name-hashed spot, uniform size.
///
/// Visibility is handled separately by the timeline; this only positions.
pub(super) fn by_name_hash(store: &ItemStore, stage: &Stage) -> Vec<ItemTransform> {
    store
        .ids()
        .map(|id| {
            let slot = id.slot();
            let (u, v) = name_hash_position(&store.names[slot]);
            let size = UniformFit::LARGE.size_on(store.natural[slot], stage);
            stage.place(stage.point_at(u, v), size)
        })
        .collect()
}

/// Location mode: `(location_x, location_y)` normalized against the
/// collection's own extent and mapped onto the available area.
///
/// An axis along which every item shares the same coordinate collapses to
/// the middle of the area.
pub(super) fn by_location(store: &ItemStore, stage: &Stage) -> Vec<ItemTransform> {
    let xs = Extent::of(store.attributes.iter().map(|a| a.location_x));
    let ys = Extent::of(store.attributes.iter().map(|a| a.location_y));
    store
        .ids()
        .map(|id| {
            let slot = id.slot();
            let a = &store.attributes[slot];
            let center = stage.point_at(xs.normalize(a.location_x), ys.normalize(a.location_y));
            let size = UniformFit::SMALL.size_on(store.natural[slot], stage);
            stage.place(center, size)
        })
        .collect()
}

#[derive(Clone, Copy, Debug)]
struct Extent {
    min: f64,
    max: f64,
}

impl Extent {
    fn of(values: impl Iterator<Item = f64>) -> Self {
        values.fold(
            Self {
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            },
            |e, v| Self {
                min: e.min.min(v),
                max: e.max.max(v),
            },
        )
    }

    fn normalize(self, v: f64) -> f64 {
        let span = self.max - self.min;
        if span > 0.0 && span.is_finite() {
            (v - self.min) / span
        } else {
            0.5
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::item::ItemAttributes;
    use crate::layout::tests::{store_with, viewport};

    fn at(x: f64, y: f64) -> ItemAttributes {
        ItemAttributes {
            location_x: x,
            location_y: y,
            ..ItemAttributes::DEFAULT
        }
    }

    fn stage() -> Stage {
        viewport().stage(100.0, &LayoutConfig::DEFAULT)
    }

    #[test]
    fn hash_is_stable_and_in_unit_square() {
        for name in ["radio.png", "teddy bear.jpg", "", "שמיכה"] {
            let (u, v) = name_hash_position(name);
            assert_eq!((u, v), name_hash_position(name), "{name}: stable");
            assert!((0.0..1.0).contains(&u) && (0.0..1.0).contains(&v), "{name}: in range");
        }
        assert_ne!(
            name_hash_position("ab"),
            name_hash_position("ba"),
            "position weighting separates anagrams"
        );
    }

    #[test]
    fn time_positions_repeat() {
        let store = store_with(&[ItemAttributes::DEFAULT; 6]);
        let stage = stage();
        assert_eq!(by_name_hash(&store, &stage), by_name_hash(&store, &stage));
    }

    #[test]
    fn location_corners_and_center() {
        let store = store_with(&[at(0.0, 0.0), at(100.0, 100.0), at(50.0, 50.0)]);
        let stage = stage();
        let area = stage.available();
        let targets = by_location(&store, &stage);
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;

        assert!(close(targets[0].x, area.x0) && close(targets[0].y, area.y0), "top-left");
        let far = targets[1];
        assert!(
            close(far.x + far.width, area.x1) && close(far.y + far.height, area.y1),
            "bottom-right"
        );
        let mid = targets[2].center();
        assert!(
            close(mid.x, area.center().x) && close(mid.y, area.center().y),
            "center"
        );
    }

    #[test]
    fn degenerate_extent_maps_to_midpoint() {
        let store = store_with(&[at(7.0, 1.0), at(7.0, 9.0)]);
        let stage = stage();
        let targets = by_location(&store, &stage);
        let cx = stage.available().center().x;
        for t in &targets {
            assert!((t.center().x - cx).abs() < 1e-9, "x collapses to the middle");
        }
        assert!(targets[0].y < targets[1].y, "y still spreads");
    }
}
