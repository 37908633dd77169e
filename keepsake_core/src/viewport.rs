// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Camera, screen-to-world mapping, and the arrangement area.
//!
//! The world is a square canvas drawn at a fixed zoom. The camera is a
//! translation in screen pixels applied after zooming, so a world point `p`
//! lands on screen at `p * zoom + camera`. Layouts never look at the screen
//! directly: they receive a [`Stage`], the part of the world currently on
//! screen minus margins and any reserved UI strip.

use kurbo::{Point, Rect, Size, Vec2};

use crate::config::{LayoutConfig, NavigationConfig};
use crate::transform::ItemTransform;

/// The window onto the world canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    screen: Size,
    camera: Vec2,
    zoom: f64,
    canvas_size: f64,
}

impl Viewport {
    /// Creates a viewport of the given screen size, centered on the canvas.
    #[must_use]
    pub fn new(screen: Size, config: &LayoutConfig) -> Self {
        let mut viewport = Self {
            screen,
            camera: Vec2::ZERO,
            zoom: config.zoom,
            canvas_size: config.canvas_size,
        };
        viewport.reset_camera();
        viewport
    }

    /// Screen size in pixels.
    #[inline]
    #[must_use]
    pub const fn screen_size(&self) -> Size {
        self.screen
    }

    /// Camera translation in screen pixels.
    #[inline]
    #[must_use]
    pub const fn camera(&self) -> Vec2 {
        self.camera
    }

    /// World-to-screen scale.
    #[inline]
    #[must_use]
    pub const fn zoom(&self) -> f64 {
        self.zoom
    }

    /// The world canvas rectangle.
    #[inline]
    #[must_use]
    pub fn canvas_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.canvas_size, self.canvas_size)
    }

    /// The part of the world currently on screen.
    #[must_use]
    pub fn world_rect(&self) -> Rect {
        let origin = Point::new(-self.camera.x / self.zoom, -self.camera.y / self.zoom);
        Rect::from_origin_size(
            origin,
            Size::new(self.screen.width / self.zoom, self.screen.height / self.zoom),
        )
    }

    /// Maps a world point to screen pixels.
    #[inline]
    #[must_use]
    pub fn to_screen(&self, p: Point) -> Point {
        Point::new(p.x * self.zoom, p.y * self.zoom) + self.camera
    }

    /// Maps a world rectangle to screen pixels.
    #[must_use]
    pub fn rect_to_screen(&self, r: Rect) -> Rect {
        Rect::from_points(
            self.to_screen(Point::new(r.x0, r.y0)),
            self.to_screen(Point::new(r.x1, r.y1)),
        )
    }

    /// Changes the screen size. The camera is left where it is.
    pub fn resize(&mut self, screen: Size) {
        self.screen = screen;
    }

    /// Recenters the camera on the canvas.
    pub fn reset_camera(&mut self) {
        let half = self.canvas_size * self.zoom / 2.0;
        self.camera = Vec2::new(
            -half + self.screen.width / 2.0,
            -half + self.screen.height / 2.0,
        );
    }

    /// Moves the camera by `delta` screen pixels (scaled down by the zoom)
    /// and keeps part of the canvas in view.
    pub fn pan(&mut self, delta: Vec2) {
        self.camera += delta / self.zoom;
        self.constrain();
    }

    fn constrain(&mut self) {
        let padding = self.screen.width / (4.0 * self.zoom);
        let low = -self.canvas_size * self.zoom + padding;
        self.camera.x = self.camera.x.clamp(low, padding);
        self.camera.y = self.camera.y.clamp(low, padding);
    }

    /// The arrangement area for a layout that reserves `reserved_px` at the
    /// bottom of the screen.
    #[must_use]
    pub fn stage(&self, reserved_px: f64, config: &LayoutConfig) -> Stage {
        Stage {
            bounds: self.world_rect(),
            margin: config.margin_px / self.zoom,
            reserved: reserved_px / self.zoom,
        }
    }
}

/// Pan velocity for a pointer at `pointer` (screen pixels).
///
/// Inside the band of width `edge_threshold_px` along an edge, speed rises
/// linearly from zero at the inner boundary to `max_speed_px` at the edge.
/// The sign moves the camera so content on that side scrolls into view: a
/// pointer near the left edge yields a positive `x`.
#[must_use]
pub fn edge_pan_velocity(pointer: Point, screen: Size, config: &NavigationConfig) -> Vec2 {
    let threshold = config.edge_threshold_px;
    if threshold <= 0.0 {
        return Vec2::ZERO;
    }
    let axis = |pos: f64, extent: f64| {
        if pos < threshold {
            (threshold - pos) / threshold * config.max_speed_px
        } else if pos > extent - threshold {
            -(pos - (extent - threshold)) / threshold * config.max_speed_px
        } else {
            0.0
        }
    };
    Vec2::new(
        axis(pointer.x, screen.width),
        axis(pointer.y, screen.height),
    )
}

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

/// The region of the world a layout arranges items into.
///
/// All lengths are world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stage {
    /// The visible world rectangle.
    pub bounds: Rect,
    /// Gap kept on every side.
    pub margin: f64,
    /// Extra strip kept free at the bottom.
    pub reserved: f64,
}

impl Stage {
    /// The area items may be centered in.
    #[must_use]
    pub fn available(&self) -> Rect {
        let x0 = self.bounds.x0 + self.margin;
        let y0 = self.bounds.y0 + self.margin;
        let width = self.bounds.width() - 2.0 * self.margin;
        let height = self.bounds.height() - 2.0 * self.margin - self.reserved;
        Rect::new(x0, y0, x0 + width.max(0.0), y0 + height.max(0.0))
    }

    /// Maps normalized `(u, v)` in `[0, 1]²` onto the available area.
    #[must_use]
    pub fn point_at(&self, u: f64, v: f64) -> Point {
        let a = self.available();
        Point::new(a.x0 + u * a.width(), a.y0 + v * a.height())
    }

    /// Largest side any item may have, as a fraction `cap` of the shorter
    /// side of the available area.
    #[must_use]
    pub fn max_item_side(&self, cap: f64) -> f64 {
        let a = self.available();
        a.width().min(a.height()) * cap
    }

    /// Places an item of `size` centered on `center`, then shifts it so its
    /// whole footprint stays inside the margins.
    ///
    /// If the item is larger than the space, the top-left margin wins.
    #[must_use]
    pub fn place(&self, center: Point, size: Size) -> ItemTransform {
        let b = self.bounds;
        let min_x = b.x0 + self.margin;
        let max_x = b.x1 - self.margin - size.width;
        let min_y = b.y0 + self.margin;
        let max_y = b.y1 - self.margin - self.reserved - size.height;
        let x = (center.x - size.width / 2.0).min(max_x).max(min_x);
        let y = (center.y - size.height / 2.0).min(max_y).max(min_y);
        ItemTransform::new(x, y, size.width, size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(Size::new(1200.0, 800.0), &LayoutConfig::DEFAULT)
    }

    #[test]
    fn new_viewport_is_centered_on_canvas() {
        let vp = viewport();
        assert_eq!(vp.camera(), Vec2::new(-3000.0 + 600.0, -3000.0 + 400.0));
        let world = vp.world_rect();
        assert_eq!(world.center(), Point::new(1500.0, 1500.0), "canvas center");
        assert_eq!(world.size(), Size::new(600.0, 400.0), "screen / zoom");
    }

    #[test]
    fn to_screen_inverts_world_rect() {
        let vp = viewport();
        let world = vp.world_rect();
        assert_eq!(vp.to_screen(world.origin()), Point::ZERO);
        assert_eq!(
            vp.rect_to_screen(world),
            Rect::new(0.0, 0.0, 1200.0, 800.0)
        );
    }

    #[test]
    fn pan_is_scaled_and_constrained() {
        let mut vp = viewport();
        let before = vp.camera();
        vp.pan(Vec2::new(10.0, -10.0));
        assert_eq!(vp.camera(), before + Vec2::new(5.0, -5.0), "divided by zoom");

        vp.pan(Vec2::new(1e9, 1e9));
        let padding = 1200.0 / 8.0;
        assert_eq!(vp.camera(), Vec2::new(padding, padding), "upper bound");

        vp.pan(Vec2::new(-1e9, -1e9));
        assert_eq!(vp.camera().x, -6000.0 + padding, "lower bound");

        vp.reset_camera();
        assert_eq!(vp.camera(), before, "reset recenters");
    }

    #[test]
    fn edge_velocity_bands() {
        let screen = Size::new(1200.0, 1000.0);
        let cfg = NavigationConfig::DEFAULT;
        assert_eq!(edge_pan_velocity(Point::new(0.0, 500.0), screen, &cfg), Vec2::new(10.0, 0.0));
        assert_eq!(
            edge_pan_velocity(Point::new(1200.0, 500.0), screen, &cfg),
            Vec2::new(-10.0, 0.0)
        );
        assert_eq!(
            edge_pan_velocity(Point::new(600.0, 800.0), screen, &cfg),
            Vec2::new(0.0, -5.0),
            "halfway into the bottom band"
        );
        assert_eq!(edge_pan_velocity(Point::new(600.0, 500.0), screen, &cfg), Vec2::ZERO);
    }

    #[test]
    fn stage_available_area() {
        let vp = viewport();
        let stage = vp.stage(100.0, &LayoutConfig::DEFAULT);
        let world = vp.world_rect();
        let a = stage.available();
        assert_eq!(a.x0, world.x0 + 25.0);
        assert_eq!(a.width(), 600.0 - 50.0);
        assert_eq!(a.height(), 400.0 - 50.0 - 50.0, "margins and reserved strip");
        assert_eq!(stage.max_item_side(0.15), 300.0 * 0.15);
    }

    #[test]
    fn place_clamps_footprint() {
        let vp = viewport();
        let stage = vp.stage(100.0, &LayoutConfig::DEFAULT);
        let world = vp.world_rect();
        let t = stage.place(world.origin(), Size::new(20.0, 20.0));
        assert_eq!(t.origin(), Point::new(world.x0 + 25.0, world.y0 + 25.0), "top-left");
        let t = stage.place(Point::new(world.x1, world.y1), Size::new(20.0, 20.0));
        assert_eq!(t.x + t.width, world.x1 - 25.0, "right margin");
        assert_eq!(t.y + t.height, world.y1 - 25.0 - 50.0, "bottom margin plus strip");
    }
}
