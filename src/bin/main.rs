//! Scripted showcase session.
//!
//! Drives both controllers through a simulated browsing session on a
//! millisecond clock and renders every notification as a log line, standing in
//! for the DOM adapter a real embedding would provide.

use env_logger::{Builder, Target};
use log::LevelFilter;

use vitrine_core::notify::{RevealSink, RotationSink};
use vitrine_core::reveal::RevealController;
use vitrine_core::rotation::{RotationConfig, RotationController};
use vitrine_core::scroll::{parallax_offset, FadeSpec};

const PROJECT_CARDS: [&str; 4] = ["ray-marcher", "synth-garden", "fleet-dash", "home-lab"];
const MILESTONES: [&str; 5] = [
    "first-commit",
    "graduation",
    "first-job",
    "conference-talk",
    "side-project-launch",
];
const COMPLETED_MILESTONES: usize = 4;

const PARALLAX_FACTOR: f32 = 0.2;
const VIEWPORT_PX: f32 = 900.0;
const SESSION_END_MS: u64 = 20_000;
const TICK_STEP_MS: u64 = 100;

/// Rendering stand-in: paints state changes as log lines.
struct ConsoleSink;

impl RotationSink for ConsoleSink {
    fn selection_changed(&mut self, index: usize) {
        log::info!("card selected: {}", PROJECT_CARDS[index]);
    }
}

impl RevealSink<&'static str> for ConsoleSink {
    fn revealed(&mut self, id: &'static str) {
        log::info!("milestone revealed: {id}");
    }

    fn highlight_changed(&mut self, id: &'static str, progress_percent: f32) {
        log::info!("milestone highlighted: {id}, progress bar -> {progress_percent:.0}%");
    }
}

#[derive(Clone, Copy, Debug)]
enum SessionEvent {
    Scroll(f32),
    MilestoneVisible(&'static str),
    HoverEnter,
    HoverLeave,
    ClickCard(usize),
    ClickSettled,
    ClickMilestone(&'static str),
}

/// One afternoon visitor: scrolls the hero away, watches the carousel turn,
/// hovers and clicks a card, then walks the timeline.
const SCRIPT: &[(u64, SessionEvent)] = &[
    (1_200, SessionEvent::Scroll(250.0)),
    (2_400, SessionEvent::Scroll(600.0)),
    (2_400, SessionEvent::MilestoneVisible("first-commit")),
    (3_600, SessionEvent::MilestoneVisible("graduation")),
    (6_200, SessionEvent::HoverEnter),
    (7_000, SessionEvent::HoverLeave),
    (9_300, SessionEvent::ClickCard(2)),
    (9_800, SessionEvent::ClickSettled),
    (13_000, SessionEvent::Scroll(1_100.0)),
    (13_000, SessionEvent::MilestoneVisible("first-job")),
    (14_200, SessionEvent::MilestoneVisible("conference-talk")),
    (16_000, SessionEvent::ClickMilestone("conference-talk")),
];

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Info)
        .filter_module("vitrine_core", LevelFilter::Debug)
        .init();
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let Ok(mut rotation) =
        RotationController::new(PROJECT_CARDS.len(), RotationConfig::default(), ConsoleSink)
    else {
        log::error!("invalid rotation config");
        return;
    };
    let Ok(mut reveal) = RevealController::new(&MILESTONES, ConsoleSink) else {
        log::error!("invalid milestone collection");
        return;
    };

    match reveal.initial_progress_percent(COMPLETED_MILESTONES) {
        Ok(percent) => log::info!("progress bar initialized at {percent:.0}%"),
        Err(error) => log::error!("bad completed-milestone count: {error:?}"),
    }

    let fade = FadeSpec::default();
    rotation.start(0);

    let mut now_ms = 0;
    while now_ms <= SESSION_END_MS {
        for (at_ms, event) in SCRIPT {
            if *at_ms <= now_ms && now_ms < at_ms + TICK_STEP_MS {
                apply_event(*event, now_ms, &mut rotation, &mut reveal, fade);
            }
        }
        rotation.tick(now_ms);
        now_ms += TICK_STEP_MS;
    }

    rotation.dispose();
    log::info!("session over");
}

fn apply_event(
    event: SessionEvent,
    now_ms: u64,
    rotation: &mut RotationController<ConsoleSink>,
    reveal: &mut RevealController<&'static str, ConsoleSink>,
    fade: FadeSpec,
) {
    match event {
        SessionEvent::Scroll(scroll_px) => {
            let opacity = fade.opacity(scroll_px, VIEWPORT_PX);
            let offset = parallax_offset(scroll_px, PARALLAX_FACTOR);
            log::info!("hero opacity {opacity:.2}, parallax offset {offset:.0}px");
        }
        SessionEvent::MilestoneVisible(id) => {
            if reveal.observe(id, true).is_err() {
                log::error!("unknown milestone observed: {id}");
            }
        }
        SessionEvent::HoverEnter => rotation.notify_interaction_start(),
        SessionEvent::HoverLeave => rotation.notify_interaction_end(now_ms),
        SessionEvent::ClickCard(index) => {
            rotation.notify_interaction_start();
            if rotation.select(index).is_err() {
                log::error!("clicked card out of range: {index}");
            }
        }
        SessionEvent::ClickSettled => rotation.notify_interaction_end(now_ms),
        SessionEvent::ClickMilestone(id) => {
            if reveal.highlight(id).is_err() {
                log::error!("unknown milestone clicked: {id}");
            }
        }
    }
}
