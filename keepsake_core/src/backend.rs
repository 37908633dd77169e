// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for embedding the explorer.
//!
//! The core never draws, reads input devices, or loads files. A host
//! provides the following pieces:
//!
//! - **Tick source**: Calls [`Explorer::tick`] once per display refresh
//!   with a monotonic [`HostTime`](crate::time::HostTime). How the refresh
//!   is obtained (`requestAnimationFrame`, a display link, a fixed-step
//!   test loop) is host-specific and not abstracted.
//!
//! - **Input mapping**: Turns raw keyboard, mouse and touch events into
//!   explorer actions: mode buttons into [`Explorer::switch_mode`], the
//!   timeline widget into [`Explorer::scrub_timeline`] and
//!   [`Explorer::toggle_timeline_playback`], pointer motion into
//!   [`Explorer::set_pointer`], drags into [`Explorer::pan_camera`], window
//!   resizes into [`Explorer::resize_viewport`].
//!
//! - **Catalog**: Builds the [`ItemSpec`](crate::item::ItemSpec) list and
//!   the alert timestamps before the first tick.
//!
//! - **Presenter**: Implements the [`Presenter`] trait to draw the state
//!   after each tick.
//!
//! [`Explorer::tick`]: crate::explorer::Explorer::tick
//! [`Explorer::switch_mode`]: crate::explorer::Explorer::switch_mode
//! [`Explorer::scrub_timeline`]: crate::explorer::Explorer::scrub_timeline
//! [`Explorer::toggle_timeline_playback`]: crate::explorer::Explorer::toggle_timeline_playback
//! [`Explorer::set_pointer`]: crate::explorer::Explorer::set_pointer
//! [`Explorer::pan_camera`]: crate::explorer::Explorer::pan_camera
//! [`Explorer::resize_viewport`]: crate::explorer::Explorer::resize_viewport

use crate::explorer::{Explorer, TickReport};

/// Draws explorer state after a tick.
///
/// Canvas, GPU and test-double presenters implement this trait, enabling
/// generic frame loops.
///
/// # Frame loop pseudocode
///
/// ```rust,ignore
/// fn on_frame(now: HostTime) {
///     for action in input.drain() {
///         apply(&mut explorer, action, now);
///     }
///
///     // Navigate, animate, advance the timeline, resolve visibility
///     let report = explorer.tick(now, &mut Tracer::none());
///
///     // Present: read transforms, visibility and overlays
///     presenter.present(&explorer, &report);
/// }
/// ```
pub trait Presenter {
    /// Draws the explorer as it stands after the tick described by
    /// `report`.
    fn present(&mut self, explorer: &Explorer, report: &TickReport);
}
