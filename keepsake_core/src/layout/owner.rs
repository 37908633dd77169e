// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owner mode: one ring of items per person.

use alloc::vec::Vec;
use core::f64::consts::TAU;

use kurbo::{Point, Vec2};
use rand::Rng;

use super::{Layout, OwnerGroup, UniformFit};
use crate::config::LayoutConfig;
use crate::item::{ItemId, OwnerIndex};
use crate::store::ItemStore;
use crate::transform::ItemTransform;
use crate::viewport::Stage;

/// Ring radius per member, in screen pixels.
const RADIUS_PER_ITEM_PX: f64 = 12.0;
const MIN_RADIUS_PX: f64 = 90.0;
const MAX_RADIUS_PX: f64 = 180.0;

/// Groups items by owner (ascending owner index) around random centers.
///
/// Centers are rejection-sampled to sit at least
/// [`owner_min_distance_px`](LayoutConfig::owner_min_distance_px) apart. The
/// sampler gives up after
/// [`owner_max_attempts`](LayoutConfig::owner_max_attempts) and keeps the last
/// candidate, so crowded screens may still produce overlapping clusters.
pub(super) fn by_owner<R: Rng + ?Sized>(
    store: &ItemStore,
    stage: &Stage,
    config: &LayoutConfig,
    rng: &mut R,
) -> Layout {
    let mut targets = alloc::vec![ItemTransform::ZERO; store.len()];
    let mut groups: Vec<OwnerGroup> = OwnerIndex::all()
        .filter_map(|owner| {
            let members: Vec<ItemId> = store
                .ids()
                .filter(|id| store.attributes[id.slot()].owner == owner)
                .collect();
            (!members.is_empty()).then(|| OwnerGroup {
                owner,
                center: Point::ZERO,
                radius: ring_radius(members.len(), config.zoom),
                members,
            })
        })
        .collect();

    let area = stage.available();
    let min_distance = config.owner_min_distance_px / config.zoom;
    let mut centers: Vec<Point> = Vec::with_capacity(groups.len());
    for _ in 0..groups.len() {
        let mut attempts = 0;
        let center = loop {
            let candidate = Point::new(
                area.x0 + rng.random::<f64>() * area.width(),
                area.y0 + rng.random::<f64>() * area.height(),
            );
            attempts += 1;
            let crowded = centers.iter().any(|c| c.distance(candidate) < min_distance);
            if !crowded || attempts >= config.owner_max_attempts {
                break candidate;
            }
        };
        centers.push(center);
    }

    for (group, center) in groups.iter_mut().zip(centers) {
        group.center = center;
        let count = group.members.len();
        for (i, id) in group.members.iter().enumerate() {
            let slot = id.slot();
            let position = if count == 1 {
                center
            } else {
                let angle = i as f64 / count as f64 * TAU;
                center + Vec2::new(libm::cos(angle), libm::sin(angle)) * group.radius
            };
            let size = UniformFit::SMALL.size_on(store.natural[slot], stage);
            targets[slot] = stage.place(position, size);
        }
    }

    Layout {
        targets,
        owner_groups: groups,
    }
}

/// Ring radius for a group of `count` items, in world units.
fn ring_radius(count: usize, zoom: f64) -> f64 {
    (RADIUS_PER_ITEM_PX * count as f64).clamp(MIN_RADIUS_PX, MAX_RADIUS_PX) / zoom
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemAttributes;
    use crate::layout::tests::{store_with, viewport};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn owned_by(owners: &[u8]) -> ItemStore {
        let attrs: Vec<ItemAttributes> = owners
            .iter()
            .map(|o| ItemAttributes {
                owner: OwnerIndex::new(*o).unwrap(),
                ..ItemAttributes::DEFAULT
            })
            .collect();
        store_with(&attrs)
    }

    #[test]
    fn radius_is_clamped() {
        assert_eq!(ring_radius(2, 2.0), 45.0, "minimum");
        assert_eq!(ring_radius(10, 2.0), 60.0, "proportional");
        assert_eq!(ring_radius(40, 2.0), 90.0, "maximum");
    }

    #[test]
    fn groups_follow_owner_order() {
        let store = owned_by(&[5, 1, 5, 3, 1, 5]);
        let vp = viewport();
        let cfg = LayoutConfig::DEFAULT;
        let stage = vp.stage(cfg.ui_reserved_px, &cfg);
        let layout = by_owner(&store, &stage, &cfg, &mut SmallRng::seed_from_u64(42));
        let owners: Vec<u8> = layout.owner_groups.iter().map(|g| g.owner.get()).collect();
        assert_eq!(owners, [1, 3, 5], "ascending, empty owners skipped");
        let five = &layout.owner_groups[2];
        assert_eq!(
            five.members.iter().map(|id| id.index()).collect::<Vec<_>>(),
            [0, 2, 5],
            "members in slot order"
        );
    }

    #[test]
    fn lone_member_sits_on_center() {
        let store = owned_by(&[2]);
        let vp = viewport();
        let cfg = LayoutConfig::DEFAULT;
        let stage = vp.stage(cfg.ui_reserved_px, &cfg);
        let layout = by_owner(&store, &stage, &cfg, &mut SmallRng::seed_from_u64(9));
        let group = &layout.owner_groups[0];
        let expected = stage.place(group.center, layout.targets[0].size());
        assert_eq!(layout.targets[0], expected);
    }

    #[test]
    fn centers_are_spread_apart() {
        let store = owned_by(&[0, 1, 2, 3]);
        let vp = viewport();
        let cfg = LayoutConfig::DEFAULT;
        let stage = vp.stage(cfg.ui_reserved_px, &cfg);
        let min = cfg.owner_min_distance_px / cfg.zoom;
        for seed in 0..8 {
            let layout = by_owner(&store, &stage, &cfg, &mut SmallRng::seed_from_u64(seed));
            let groups = &layout.owner_groups;
            for (i, a) in groups.iter().enumerate() {
                for b in &groups[i + 1..] {
                    assert!(
                        a.center.distance(b.center) >= min,
                        "seed {seed}: {:?} and {:?} too close",
                        a.owner,
                        b.owner
                    );
                }
            }
        }
    }

    #[test]
    fn exhausted_sampler_still_places_everyone() {
        let store = owned_by(&[0, 1, 2, 3, 4, 5, 6, 7]);
        let vp = viewport();
        let cfg = LayoutConfig {
            owner_min_distance_px: 1e9,
            owner_max_attempts: 3,
            ..LayoutConfig::DEFAULT
        };
        let stage = vp.stage(cfg.ui_reserved_px, &cfg);
        let layout = by_owner(&store, &stage, &cfg, &mut SmallRng::seed_from_u64(1));
        assert_eq!(layout.owner_groups.len(), 8, "one group per owner");
        assert!(layout.targets.iter().all(|t| t.is_finite()), "all placed");
    }
}
