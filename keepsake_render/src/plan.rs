// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame plan: everything to draw for one frame.

use alloc::vec::Vec;

use keepsake_core::explorer::Explorer;
use keepsake_core::item::{AssetId, ItemId};
use keepsake_core::mode::Mode;
use kurbo::{Rect, Size};

use crate::label::{LabelDraw, push_labels};
use crate::widget::TimelineWidget;

/// Stroke width of the explore-mode canvas outline, in screen pixels.
pub const CANVAS_BORDER_WIDTH_PX: f64 = 2.0;

/// One item image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemDraw {
    /// Which item.
    pub item: ItemId,
    /// Which image.
    pub asset: AssetId,
    /// Destination rectangle in screen pixels, visibility scale applied.
    pub rect: Rect,
    /// Visibility scale applied to `rect` (1 outside time mode).
    pub scale: f64,
    /// Whether to draw it at all.
    pub visible: bool,
}

/// An ordered draw list for one frame.
///
/// Items come in catalog order (back to front), then the canvas border,
/// then labels, then the timeline widget on top.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FramePlan {
    /// Mode the frame was built in.
    pub mode: Mode,
    /// Screen size the coordinates refer to.
    pub screen: Size,
    /// Every item, in slot order.
    pub items: Vec<ItemDraw>,
    /// Outline of the world canvas (explore mode only).
    pub canvas_border: Option<Rect>,
    /// Overlay text lines.
    pub labels: Vec<LabelDraw>,
    /// Scrubber state (time mode with alerts only).
    pub timeline: Option<TimelineWidget>,
}

impl FramePlan {
    /// Builds the plan for the explorer's current state.
    #[must_use]
    pub fn build(explorer: &Explorer) -> Self {
        let mut plan = Self::default();
        plan.rebuild(explorer);
        plan
    }

    /// Rebuilds in place, reusing allocations.
    pub fn rebuild(&mut self, explorer: &Explorer) {
        self.clear();
        let viewport = explorer.viewport();
        let store = explorer.store();
        self.mode = explorer.mode();
        self.screen = viewport.screen_size();

        let time_mode = self.mode == Mode::Time;
        self.items.extend(store.ids().map(|id| {
            let (scale, visible) = if time_mode {
                (store.visibility_scale(id), store.is_visible(id))
            } else {
                (1.0, true)
            };
            let world = store.current(id).scaled_about_center(scale).to_rect();
            ItemDraw {
                item: id,
                asset: store.asset(id),
                rect: viewport.rect_to_screen(world),
                scale,
                visible,
            }
        }));

        if self.mode == Mode::Explore {
            self.canvas_border = Some(viewport.rect_to_screen(viewport.canvas_rect()));
        }
        push_labels(explorer.overlays(), viewport, &mut self.labels);
        self.timeline = TimelineWidget::from_explorer(explorer);
    }

    /// Clears the plan for reuse.
    pub fn clear(&mut self) {
        self.items.clear();
        self.labels.clear();
        self.canvas_border = None;
        self.timeline = None;
    }

    /// Items that should be drawn.
    pub fn visible_items(&self) -> impl Iterator<Item = &ItemDraw> + '_ {
        self.items.iter().filter(|d| d.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::{LabelStyle, OWNER_LINE_OFFSET_PX};
    use alloc::format;
    use alloc::vec;
    use chrono::{DateTime, Utc};
    use keepsake_core::config::ExplorerConfig;
    use keepsake_core::item::{ItemAttributes, ItemSpec, OwnerIndex};
    use keepsake_core::time::HostTime;
    use keepsake_core::trace::Tracer;

    fn explorer(alerts: usize) -> Explorer {
        let specs = (0..4_u32)
            .map(|i| ItemSpec {
                name: format!("box-{i}"),
                asset: AssetId(100 + i),
                pixel_size: Size::new(400.0, 200.0),
                attributes: ItemAttributes {
                    owner: OwnerIndex::new(2).unwrap(),
                    enter_alert_index: i,
                    duration_in_alerts: 1,
                    ..ItemAttributes::DEFAULT
                },
            })
            .collect();
        let start = 1_700_000_000_000_i64;
        let timestamps: Vec<DateTime<Utc>> = (0..alerts)
            .map(|i| DateTime::from_timestamp_millis(start + i as i64 * 60_000).unwrap())
            .collect();
        Explorer::new(
            specs,
            timestamps,
            Size::new(1200.0, 800.0),
            ExplorerConfig::DEFAULT,
            4,
        )
    }

    #[test]
    fn explore_frame_draws_everything_with_border() {
        let ex = explorer(4);
        let plan = FramePlan::build(&ex);
        assert_eq!(plan.mode, Mode::Explore);
        assert_eq!(plan.items.len(), 4);
        assert_eq!(plan.visible_items().count(), 4);
        assert_eq!(plan.items[1].asset, AssetId(101));
        let vp = ex.viewport();
        let border = plan.canvas_border.expect("explore draws the canvas outline");
        assert_eq!(border.width(), vp.canvas_rect().width() * vp.zoom());
        assert!(plan.timeline.is_none(), "no widget outside time mode");
        assert!(plan.labels.is_empty(), "explore has no captions");

        let first = ex.store().ids().next().unwrap();
        let expected = vp.rect_to_screen(ex.store().current(first).to_rect());
        assert_eq!(plan.items[0].rect, expected);
    }

    #[test]
    fn time_frame_hides_and_scales() {
        let mut ex = explorer(4);
        let _ = ex.switch_mode(Mode::Time, HostTime(0), &mut Tracer::none());
        let plan = FramePlan::build(&ex);
        assert_eq!(
            plan.visible_items().count(),
            1,
            "absent items hidden before the first tick"
        );

        let _ = ex.tick(HostTime(0), &mut Tracer::none());
        let plan = FramePlan::build(&ex);
        assert!(plan.canvas_border.is_none(), "border is explore only");

        let shown: Vec<u32> = plan.visible_items().map(|d| d.item.index()).collect();
        assert_eq!(shown, vec![0], "only the first item's window covers alert 0");

        let hidden = &plan.items[1];
        assert!(!hidden.visible);
        assert!(hidden.scale < 1.0, "shrinking out");
        let unscaled = ex
            .viewport()
            .rect_to_screen(ex.store().current(hidden.item).to_rect());
        assert!(hidden.rect.width() < unscaled.width(), "drawn smaller");
        let drift = hidden.rect.center() - unscaled.center();
        assert!(drift.hypot() < 1e-9, "scaled about the center");

        let widget = plan.timeline.expect("time mode with alerts");
        assert_eq!(widget.markers.len(), 4);
        assert_eq!(widget.visible_count, 1);
        assert_eq!(widget.alert_line(), "Alert: 0/3");
    }

    #[test]
    fn time_frame_without_alerts_has_no_widget() {
        let mut ex = explorer(0);
        let _ = ex.switch_mode(Mode::Time, HostTime(0), &mut Tracer::none());
        let _ = ex.tick(HostTime(0), &mut Tracer::none());
        let plan = FramePlan::build(&ex);
        assert!(plan.timeline.is_none(), "nothing to scrub");
        assert_eq!(plan.visible_items().count(), 4, "everything stays visible");
    }

    #[test]
    fn owner_labels_become_two_lines() {
        let mut ex = explorer(4);
        let _ = ex.switch_mode(Mode::Owner, HostTime(0), &mut Tracer::none());
        let plan = FramePlan::build(&ex);
        assert!(plan.labels.is_empty(), "transparent on the first frame");

        for frame in 0..60 {
            let _ = ex.tick(HostTime::from_millis(frame * 16), &mut Tracer::none());
        }
        let plan = FramePlan::build(&ex);
        assert_eq!(plan.labels.len(), 2, "name and caption");
        let (name, caption) = (&plan.labels[0], &plan.labels[1]);
        assert_eq!(name.style, LabelStyle::Owner);
        assert_eq!(name.text, "Yoni");
        assert_eq!(caption.text, "8, Male");
        let gap = caption.position.y - name.position.y;
        assert!(
            (gap - 2.0 * OWNER_LINE_OFFSET_PX).abs() < 1e-9,
            "lines straddle the anchor"
        );
        assert!(name.opacity > 0.9 && name.opacity <= 1.0, "opacity {}", name.opacity);
    }

    #[test]
    fn axis_labels_use_screen_fractions() {
        let mut ex = explorer(4);
        let _ = ex.switch_mode(Mode::Location, HostTime(0), &mut Tracer::none());
        for frame in 0..120 {
            let _ = ex.tick(HostTime::from_millis(frame * 16), &mut Tracer::none());
        }
        let plan = FramePlan::build(&ex);
        let label = plan
            .labels
            .iter()
            .find(|l| l.style == LabelStyle::Axis)
            .expect("LOCATION caption");
        assert_eq!(label.text, "LOCATION");
        assert_eq!(label.position, kurbo::Point::new(600.0, 400.0), "screen center");
        assert!(label.opacity > 0.9, "faded in");
    }

    #[test]
    fn rebuild_reuses_and_resets() {
        let mut ex = explorer(4);
        let mut plan = FramePlan::build(&ex);
        let _ = ex.switch_mode(Mode::Price, HostTime(0), &mut Tracer::none());
        plan.rebuild(&ex);
        assert_eq!(plan.mode, Mode::Price);
        assert_eq!(plan.items.len(), 4, "not appended twice");
        assert!(plan.canvas_border.is_none(), "border cleared");
    }
}
