// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrangement engine, timeline, and animation state for exploring a fixed
//! collection of kept belongings.
//!
//! `keepsake_core` holds every piece of explorer logic that is not drawing,
//! input plumbing or file loading. It is `no_std` compatible (with `alloc`)
//! and stores items as struct-of-arrays with plain index handles.
//!
//! # Architecture
//!
//! The host calls [`Explorer::tick`](explorer::Explorer::tick) once per
//! display refresh; actions arrive in between:
//!
//! ```text
//!   switch_mode ──► ModeController ──► layout::compute_targets ──► ItemStore.target
//!                                                                      │
//!   tick ──► edge navigation ──► Animator::step ◄────────────────────────┘
//!              │                     │
//!              │                     ▼
//!              │               ItemStore.current ──► Presenter::present()
//!              ▼                     ▲
//!   (time mode) Timeline::advance ──► ItemStore::resolve_visibility
//! ```
//!
//! **[`item`]**: Item handles, typed attributes and the owner roster.
//!
//! **[`store`]**: Struct-of-arrays item storage. Layouts write targets,
//! the animator writes current state, the visibility pass writes flags.
//!
//! **[`layout`]**: One arrangement rule per [`Mode`](mode::Mode), all
//! clamped to the visible area.
//!
//! **[`animate`]**: Exponential smoothing toward targets.
//!
//! **[`timeline`]** and **[`visibility`]**: Alert playback and the
//! time-window visibility pass with its pop-in/shrink-out edges.
//!
//! **[`mode`]** and **[`labels`]**: Mode switching with its cooldown and
//! camera lock, and the axis and owner label overlays.
//!
//! **[`viewport`]**: Camera, world/screen mapping, edge navigation and the
//! arrangement [`Stage`](viewport::Stage).
//!
//! **[`explorer`]**: The state struct that ties it all together.
//!
//! **[`backend`]**: The [`Presenter`](backend::Presenter) trait hosts
//! implement.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! tick instrumentation, with a zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//! - `serde` (disabled by default): `Serialize`/`Deserialize` for
//!   configuration, attributes and transforms.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod animate;
pub mod backend;
pub mod config;
pub mod explorer;
pub mod item;
pub mod labels;
pub mod layout;
pub mod mode;
pub mod store;
pub mod time;
pub mod timeline;
pub mod trace;
pub mod transform;
pub mod viewport;
pub mod visibility;
