// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rank-ordered layouts: size, sentiment, and price.

use alloc::vec::Vec;

use kurbo::{Point, Size};
use rand::Rng;

use super::{UniformFit, fit_within, rank_progress, slots_by_desc};
use crate::store::ItemStore;
use crate::transform::ItemTransform;
use crate::viewport::Stage;

/// Size scores map linearly onto this range of natural size.
const SIZE_FACTOR_RANGE: (f64, f64) = (0.04, 1.0);
/// Fraction of a slot's width an item may fill.
const SLOT_WIDTH_SHARE: f64 = 0.6;
/// Fraction of the available height an item may fill.
const SLOT_HEIGHT_SHARE: f64 = 0.4;

/// One row, biggest on the left, each item in an equal-width slot.
///
/// Items are scaled by their size score, then shrunk to fit their slot.
pub(super) fn by_size(store: &ItemStore, stage: &Stage) -> Vec<ItemTransform> {
    let n = store.len();
    let mut targets = alloc::vec![ItemTransform::ZERO; n];
    if n == 0 {
        return targets;
    }
    let area = stage.available();
    let slot_width = area.width() / n as f64;
    let center_y = area.y0 + area.height() / 2.0;
    let max = Size::new(slot_width * SLOT_WIDTH_SHARE, area.height() * SLOT_HEIGHT_SHARE);

    let order = slots_by_desc(store, |s| store.attributes[s].size);
    for (rank, &slot) in order.iter().enumerate() {
        let factor = map_range(store.attributes[slot].size, (1.0, 100.0), SIZE_FACTOR_RANGE);
        let size = fit_within(store.natural[slot] * factor, max);
        let center = Point::new(area.x0 + (rank as f64 + 0.5) * slot_width, center_y);
        targets[slot] = stage.place(center, size);
    }
    targets
}

/// Most sentimental on top, descending by rank; x is random per call.
pub(super) fn by_sentiment<R: Rng + ?Sized>(
    store: &ItemStore,
    stage: &Stage,
    rng: &mut R,
) -> Vec<ItemTransform> {
    let n = store.len();
    let mut targets = alloc::vec![ItemTransform::ZERO; n];
    let order = slots_by_desc(store, |s| store.attributes[s].sentimentality);
    for (rank, &slot) in order.iter().enumerate() {
        let u: f64 = rng.random();
        let center = stage.point_at(u, rank_progress(rank, n));
        let size = UniformFit::LARGE.size_on(store.natural[slot], stage);
        targets[slot] = stage.place(center, size);
    }
    targets
}

/// A diagonal from top-right (most expensive) to bottom-left (cheapest).
pub(super) fn by_price(store: &ItemStore, stage: &Stage) -> Vec<ItemTransform> {
    let n = store.len();
    let mut targets = alloc::vec![ItemTransform::ZERO; n];
    let order = slots_by_desc(store, |s| store.attributes[s].price);
    for (rank, &slot) in order.iter().enumerate() {
        let p = rank_progress(rank, n);
        let center = stage.point_at(1.0 - p, p);
        let size = UniformFit::SMALL.size_on(store.natural[slot], stage);
        targets[slot] = stage.place(center, size);
    }
    targets
}

/// Unclamped linear map of `v` from `from` onto `to`.
fn map_range(v: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    to.0 + (v - from.0) / (from.1 - from.0) * (to.1 - to.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::item::ItemAttributes;
    use crate::layout::tests::{store_with, viewport};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn with_scores(f: impl Fn(f64) -> ItemAttributes, scores: &[f64]) -> ItemStore {
        let attrs: Vec<ItemAttributes> = scores.iter().map(|s| f(*s)).collect();
        store_with(&attrs)
    }

    fn stage() -> Stage {
        viewport().stage(100.0, &LayoutConfig::DEFAULT)
    }

    #[test]
    fn size_orders_left_to_right_by_size_desc() {
        let store = with_scores(
            |size| ItemAttributes {
                size,
                ..ItemAttributes::DEFAULT
            },
            &[10.0, 90.0, 50.0],
        );
        let stage = stage();
        let targets = by_size(&store, &stage);
        let slot_width = stage.available().width() / 3.0;
        // Slots 1 (90), 2 (50), 0 (10) from left to right.
        assert!(targets[1].center().x < targets[2].center().x, "90 left of 50");
        assert!(targets[2].center().x < targets[0].center().x, "50 left of 10");
        for t in &targets {
            assert!(t.width <= slot_width, "width {} within slot {slot_width}", t.width);
        }
        assert!(targets[1].width > targets[0].width, "bigger score draws bigger");
    }

    #[test]
    fn size_factor_endpoints() {
        assert_eq!(map_range(1.0, (1.0, 100.0), SIZE_FACTOR_RANGE), 0.04);
        assert!((map_range(100.0, (1.0, 100.0), SIZE_FACTOR_RANGE) - 1.0).abs() < 1e-12, "full size");
    }

    #[test]
    fn sentiment_ranks_top_to_bottom() {
        let store = with_scores(
            |sentimentality| ItemAttributes {
                sentimentality,
                ..ItemAttributes::DEFAULT
            },
            &[20.0, 95.0, 60.0, 5.0],
        );
        let stage = stage();
        let targets = by_sentiment(&store, &stage, &mut SmallRng::seed_from_u64(11));
        assert!(targets[1].y <= targets[2].y, "95 above 60");
        assert!(targets[2].y <= targets[0].y, "60 above 20");
        assert!(targets[0].y <= targets[3].y, "20 above 5");
        assert_eq!(targets[1].y, stage.available().y0, "top rank on the top margin");
    }

    #[test]
    fn sentiment_redraws_x_on_every_call() {
        let store = with_scores(
            |sentimentality| ItemAttributes {
                sentimentality,
                ..ItemAttributes::DEFAULT
            },
            &[20.0, 95.0, 60.0, 5.0, 40.0],
        );
        let stage = stage();
        let area = stage.available();
        let mut rng = SmallRng::seed_from_u64(3);
        let first = by_sentiment(&store, &stage, &mut rng);
        let second = by_sentiment(&store, &stage, &mut rng);

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.y, b.y, "rank rows are stable");
        }
        assert!(
            first.iter().zip(&second).any(|(a, b)| a.x != b.x),
            "x is drawn afresh"
        );
        for t in first.iter().chain(&second) {
            assert!(t.x >= area.x0 - 1e-9, "left of {}: {}", area.x0, t.x);
            assert!(t.x + t.width <= area.x1 + 1e-9, "right of {}: {}", area.x1, t.x);
        }
    }

    #[test]
    fn sentiment_single_item_is_finite() {
        let store = store_with(&[ItemAttributes::DEFAULT]);
        let targets = by_sentiment(&store, &stage(), &mut SmallRng::seed_from_u64(0));
        assert!(targets[0].is_finite(), "no division by zero");
    }

    #[test]
    fn price_runs_top_right_to_bottom_left() {
        let store = with_scores(
            |price| ItemAttributes {
                price,
                ..ItemAttributes::DEFAULT
            },
            &[10.0, 100.0, 55.0],
        );
        let stage = stage();
        let targets = by_price(&store, &stage);
        let area = stage.available();
        let expensive = targets[1];
        let cheap = targets[0];
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
        assert!(close(expensive.x + expensive.width, area.x1), "right edge");
        assert!(close(expensive.y, area.y0), "top edge");
        assert!(close(cheap.x, area.x0), "left edge");
        assert!(close(cheap.y + cheap.height, area.y1), "bottom edge");
        let mid = targets[2].center();
        let c = area.center();
        assert!((mid.x - c.x).abs() < 1e-9 && (mid.y - c.y).abs() < 1e-9, "median centered");
    }
}
