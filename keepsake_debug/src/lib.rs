// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and Chrome trace export for keepsake
//! diagnostics.
//!
//! This crate provides [`TraceSink`](keepsake_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: compact binary recording with
//!   [`recorder::decode`] for playback.
//! - [`chrome::export`]: writes Chrome Trace Event Format JSON from recorded
//!   bytes, with one span per active mode.

pub mod chrome;
pub mod pretty;
pub mod recorder;

/// Host nanoseconds to trace microseconds.
fn nanos_to_us(nanos: u64) -> f64 {
    nanos as f64 / 1000.0
}
