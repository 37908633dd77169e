// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless guided tour of the explorer.
//!
//! Loads the built-in shelter catalog, drives a scripted session at 60 Hz
//! through every mode and every user action, and routes trace events to both
//! a [`PrettyPrintSink`] (sparse events only) and a [`RecorderSink`]. The
//! recording is exported as Chrome trace JSON at the end.
//!
//! ```text
//! cargo run -p tour [-- alerts.json [trace.json]]
//! ```
//!
//! Without a feed argument a synthetic feed of 58 alerts is used.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;

use chrono::{DateTime, TimeDelta, Utc};
use keepsake_catalog::{load_feed, shelter_catalog};
use keepsake_core::backend::Presenter;
use keepsake_core::config::ExplorerConfig;
use keepsake_core::explorer::{Explorer, TickReport};
use keepsake_core::mode::Mode;
use keepsake_core::time::HostTime;
use keepsake_core::trace::{
    AlertAdvanceEvent, LabelRetiredEvent, ModeSwitchEvent, TickEvent, TickSummary, TraceSink,
    Tracer, VisibilityEdgeEvent,
};
use keepsake_debug::pretty::PrettyPrintSink;
use keepsake_debug::recorder::RecorderSink;
use keepsake_render::FramePlan;
use kurbo::{Point, Size, Vec2};

const FRAME_MS: u64 = 16;
const FRAME_COUNT: u64 = 1500;
const SCREEN: Size = Size::new(1280.0, 800.0);
/// Images are square-ish photos; real hosts read the decoded dimensions.
const PIXEL_SIZE: Size = Size::new(512.0, 512.0);
const SEED: u64 = 20231007;

/// One scripted user action.
#[derive(Clone, Copy, Debug)]
enum Action {
    Pointer(Option<Point>),
    ResetCamera,
    Pan(Vec2),
    Switch(Mode),
    TogglePlayback,
    Scrub(f64),
    Resize(Size),
}

const SCRIPT: &[(u64, Action)] = &[
    // Drift toward the left edge, then let go.
    (0, Action::Pointer(Some(Point::new(60.0, 400.0)))),
    (90, Action::Pointer(None)),
    (95, Action::Pan(Vec2::new(-120.0, 40.0))),
    (100, Action::ResetCamera),
    (110, Action::Switch(Mode::Size)),
    // Too soon: still cooling down.
    (130, Action::Switch(Mode::Price)),
    (240, Action::Switch(Mode::Price)),
    (250, Action::Pan(Vec2::new(50.0, 0.0))),
    (360, Action::Switch(Mode::Sentiment)),
    (480, Action::Switch(Mode::Owner)),
    (600, Action::Switch(Mode::Location)),
    (720, Action::Switch(Mode::Time)),
    (725, Action::TogglePlayback),
    (900, Action::Scrub(0.5)),
    (960, Action::TogglePlayback),
    (1000, Action::TogglePlayback),
    (1100, Action::Resize(Size::new(1600.0, 900.0))),
    (1200, Action::Scrub(0.98)),
    (1350, Action::Switch(Mode::Explore)),
    (1400, Action::Pointer(Some(Point::new(1580.0, 880.0)))),
];

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let alerts = match args.next() {
        Some(path) => load_feed(path)?,
        None => synthetic_feed(58),
    };
    let trace_path = args.next().unwrap_or_else(|| "trace.json".into());

    let specs = shelter_catalog().into_specs(|_| PIXEL_SIZE);
    let item_count = specs.len();
    let mut explorer = Explorer::new(specs, alerts, SCREEN, ExplorerConfig::DEFAULT, SEED);

    let mut sinks = Fanout {
        pretty: PrettyPrintSink::with_writer(std::io::stdout()).with_ticks(false),
        recorder: RecorderSink::new(),
    };
    let mut presenter = StatusPresenter::default();

    for frame in 0..FRAME_COUNT {
        let now = HostTime::from_millis(frame * FRAME_MS);
        let mut tracer = Tracer::new(&mut sinks);
        for (_, action) in SCRIPT.iter().filter(|(at, _)| *at == frame) {
            apply(&mut explorer, *action, now, &mut tracer);
        }
        let report = explorer.tick(now, &mut tracer);
        presenter.present(&explorer, &report);
    }

    let file = File::create(&trace_path)?;
    let mut writer = BufWriter::new(file);
    keepsake_debug::chrome::export(sinks.recorder.as_bytes(), &mut writer)?;

    println!(
        "Wrote {trace_path} ({FRAME_COUNT} ticks, {item_count} items, {} frames drawn with edges)",
        presenter.eventful_frames,
    );
    Ok(())
}

fn apply(explorer: &mut Explorer, action: Action, now: HostTime, tracer: &mut Tracer<'_>) {
    match action {
        Action::Pointer(p) => explorer.set_pointer(p),
        Action::ResetCamera => explorer.reset_camera(),
        Action::Pan(delta) => {
            if !explorer.pan_camera(delta) {
                println!("[tour] pan ignored: camera locked in {}", explorer.mode());
            }
        }
        Action::Switch(mode) => {
            let _ = explorer.switch_mode(mode, now, tracer);
        }
        Action::TogglePlayback => {
            let playing = explorer.toggle_timeline_playback(now);
            println!("[tour] playback {}", if playing { "on" } else { "off" });
        }
        Action::Scrub(progress) => {
            let _ = explorer.scrub_timeline(progress, now, tracer);
        }
        Action::Resize(screen) => explorer.resize_viewport(screen),
    }
}

fn synthetic_feed(count: i64) -> Vec<DateTime<Utc>> {
    let start = DateTime::from_timestamp(1_696_660_200, 0).unwrap_or_default();
    (0..count)
        .map(|i| start + TimeDelta::minutes(i * 45 + (i % 5) * 7))
        .collect()
}

// ---------------------------------------------------------------------------
// Presenter
// ---------------------------------------------------------------------------

/// Builds the frame plan each tick and prints a status line whenever the
/// tick changed something visible.
#[derive(Debug, Default)]
struct StatusPresenter {
    plan: FramePlan,
    eventful_frames: u64,
}

impl Presenter for StatusPresenter {
    fn present(&mut self, explorer: &Explorer, report: &TickReport) {
        self.plan.rebuild(explorer);
        let eventful =
            report.entered + report.exited + report.labels_retired > 0 || report.lock_released;
        if !eventful {
            return;
        }
        self.eventful_frames += 1;
        let drawn = self.plan.visible_items().count();
        match &self.plan.timeline {
            Some(widget) => println!(
                "[frame {}] {} | {} | {} | {} drawn, {} labels",
                report.frame_index,
                widget.time_label,
                widget.status_line(),
                widget.alert_line(),
                drawn,
                self.plan.labels.len(),
            ),
            None => println!(
                "[frame {}] {} | {} drawn, {} labels",
                report.frame_index,
                report.mode,
                drawn,
                self.plan.labels.len(),
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Fan-out sink
// ---------------------------------------------------------------------------

/// Forwards every event to both sinks.
#[derive(Debug)]
struct Fanout<W: std::io::Write> {
    pretty: PrettyPrintSink<W>,
    recorder: RecorderSink,
}

impl<W: std::io::Write> TraceSink for Fanout<W> {
    fn on_tick(&mut self, e: &TickEvent) {
        self.pretty.on_tick(e);
        self.recorder.on_tick(e);
    }

    fn on_mode_switch(&mut self, e: &ModeSwitchEvent) {
        self.pretty.on_mode_switch(e);
        self.recorder.on_mode_switch(e);
    }

    fn on_alert_advance(&mut self, e: &AlertAdvanceEvent) {
        self.pretty.on_alert_advance(e);
        self.recorder.on_alert_advance(e);
    }

    fn on_visibility_edge(&mut self, e: &VisibilityEdgeEvent) {
        self.pretty.on_visibility_edge(e);
        self.recorder.on_visibility_edge(e);
    }

    fn on_label_retired(&mut self, e: &LabelRetiredEvent) {
        self.pretty.on_label_retired(e);
        self.recorder.on_label_retired(e);
    }

    fn on_tick_summary(&mut self, s: &TickSummary) {
        self.pretty.on_tick_summary(s);
        self.recorder.on_tick_summary(s);
    }
}
