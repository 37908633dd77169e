// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame draw lists for the keepsake shelter explorer.
//!
//! This crate sits between [`keepsake_core`]'s explorer state and a drawing
//! backend. It defines:
//!
//! - [`FramePlan`]: everything to draw for one frame, in screen pixels
//! - [`ItemDraw`]: one item image
//! - [`LabelDraw`] / [`LabelStyle`]: one line of overlay text
//! - [`TimelineWidget`]: playback state for the time-mode scrubber

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

mod label;
mod plan;
mod widget;

pub use label::{LabelDraw, LabelStyle};
pub use plan::{CANVAS_BORDER_WIDTH_PX, FramePlan, ItemDraw};
pub use widget::TimelineWidget;
