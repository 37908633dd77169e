// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay text draws.

use alloc::string::String;
use alloc::vec::Vec;

use keepsake_core::labels::{DRAW_THRESHOLD, LabelOverlays, LabelText};
use keepsake_core::viewport::Viewport;
use kurbo::{Point, Size, Vec2};

/// Screen-pixel gap between an owner's name and the age/gender line, each
/// side of the anchor.
pub(crate) const OWNER_LINE_OFFSET_PX: f64 = 8.0;

/// How a label line is typeset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelStyle {
    /// Large heavy caption for a mode axis.
    Axis,
    /// Small text next to an owner cluster.
    Owner,
}

impl LabelStyle {
    /// Text size in screen pixels.
    #[must_use]
    pub const fn text_size_px(self) -> f64 {
        match self {
            Self::Axis => 60.0,
            Self::Owner => 16.0,
        }
    }
}

/// One line of text, centered on `position`.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelDraw {
    /// Typesetting.
    pub style: LabelStyle,
    /// What to write.
    pub text: String,
    /// Center of the line in screen pixels.
    pub position: Point,
    /// Alpha in `[0, 1]`.
    pub opacity: f64,
}

/// Appends draws for every label opaque enough to see.
pub(crate) fn push_labels(
    overlays: &LabelOverlays,
    viewport: &Viewport,
    out: &mut Vec<LabelDraw>,
) {
    for label in overlays.owner_labels() {
        if label.opacity() <= DRAW_THRESHOLD {
            continue;
        }
        let center = viewport.to_screen(label.position());
        let offset = Vec2::new(0.0, OWNER_LINE_OFFSET_PX);
        let text = label.text();
        out.push(LabelDraw {
            style: LabelStyle::Owner,
            text: text.headline().into(),
            position: center - offset,
            opacity: label.opacity(),
        });
        if let Some(caption) = text.caption() {
            out.push(LabelDraw {
                style: LabelStyle::Owner,
                text: caption,
                position: center + offset,
                opacity: label.opacity(),
            });
        }
    }

    let group = overlays.axis_group_opacity();
    if group <= DRAW_THRESHOLD {
        return;
    }
    let screen = viewport.screen_size();
    for label in overlays.axis_labels() {
        if label.opacity() <= DRAW_THRESHOLD {
            continue;
        }
        if let LabelText::Axis(text) = label.text() {
            out.push(LabelDraw {
                style: LabelStyle::Axis,
                text: text.into(),
                position: denormalize(label.position(), screen),
                opacity: label.opacity() * group,
            });
        }
    }
}

fn denormalize(p: Point, screen: Size) -> Point {
    Point::new(p.x * screen.width, p.y * screen.height)
}
