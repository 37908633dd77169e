// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-tick exponential smoothing of items toward their targets.
//!
//! Each step moves every component a fixed fraction of the remaining
//! distance. Motion is asymptotic and never reports completion; callers that
//! care can poll [`ItemStore::max_distance_to_target`]. Retargeting mid-flight
//! needs no special handling since the next step simply heads somewhere else.

use crate::config::AnimationConfig;
use crate::store::ItemStore;
use crate::transform::lerp;

/// Advances `current` transforms and visibility scales.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animator {
    transform_easing: f64,
    visibility_easing: f64,
}

impl Animator {
    /// Creates an animator with the configured easing factors.
    #[must_use]
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            transform_easing: config.transform_easing,
            visibility_easing: config.visibility_easing,
        }
    }

    /// Steps every item once.
    pub fn step(&self, store: &mut ItemStore) {
        for (current, target) in store.current.iter_mut().zip(&store.target) {
            *current = current.lerp(*target, self.transform_easing);
        }
        for (scale, target) in store
            .visibility_scale
            .iter_mut()
            .zip(&store.target_visibility_scale)
        {
            *scale = lerp(*scale, *target, self.visibility_easing);
        }
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(&AnimationConfig::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::layout::Layout;
    use crate::store::tests::square_specs;
    use crate::transform::ItemTransform;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn one_step_covers_five_percent() {
        let mut store = ItemStore::new(square_specs(1), &LayoutConfig::DEFAULT);
        let start = store.original[0];
        let goal = ItemTransform::new(start.x + 100.0, start.y, start.width, start.height + 20.0);
        store.apply_layout(&Layout {
            targets: vec![goal],
            owner_groups: vec![],
        });
        Animator::default().step(&mut store);
        let now = store.current[0];
        assert!((now.x - (start.x + 5.0)).abs() < 1e-9, "x moved 5%");
        assert!((now.height - (start.height + 1.0)).abs() < 1e-9, "height moved 5%");
        assert_eq!(now.y, start.y, "settled components stay");
    }

    #[test]
    fn converges_without_overshoot() {
        let mut store = ItemStore::new(square_specs(3), &LayoutConfig::DEFAULT);
        let targets: Vec<_> = store
            .original
            .iter()
            .map(|t| ItemTransform::new(t.x - 300.0, t.y + 200.0, 10.0, 10.0))
            .collect();
        store.apply_layout(&Layout {
            targets,
            owner_groups: vec![],
        });
        let animator = Animator::default();
        let mut last = store.max_distance_to_target();
        for _ in 0..400 {
            animator.step(&mut store);
            let d = store.max_distance_to_target();
            assert!(d <= last, "distance never grows");
            last = d;
        }
        assert!(last < 1e-3, "settled after 400 ticks, still {last}");
        assert!(store.current[0].x > store.target[0].x, "approached from one side");
    }

    #[test]
    fn visibility_scale_eases_at_ten_percent() {
        let mut store = ItemStore::new(square_specs(1), &LayoutConfig::DEFAULT);
        store.visibility_scale[0] = 0.1;
        store.target_visibility_scale[0] = 1.2;
        Animator::default().step(&mut store);
        assert!((store.visibility_scale[0] - 0.21).abs() < 1e-12, "0.1 + 0.1 * 1.1");
    }
}
